//! Render a frame sequence to PNG files.

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use toolfield_animator::offline::ProgressCallback;
use toolfield_animator::{render_sequence, RenderJob, RenderProgress};
use toolfield_common::clock::RateController;
use toolfield_common::config::AppConfig;
use toolfield_field_model::event::orbit_events;
use toolfield_field_model::geometry::ViewportSize;
use toolfield_render_engine::paint::Color;

/// Progress lines per second.
const PROGRESS_HZ: u32 = 10;

pub struct RenderArgs {
    pub theme: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub frames: Option<u64>,
    pub seed: Option<u64>,
    pub events: Option<PathBuf>,
    pub orbit: Option<f64>,
    pub output: Option<PathBuf>,
    pub background: String,
}

pub async fn run(config: &AppConfig, args: RenderArgs) -> anyhow::Result<()> {
    let options = super::animation_options(config, args.theme, args.seed, None)?;
    let width = args.width.unwrap_or(config.render.width);
    let height = args.height.unwrap_or(config.render.height);
    let frames = args.frames.unwrap_or(config.render.frames);
    let output_dir = args.output.unwrap_or_else(|| config.output_dir.clone());

    let background = Color::from_hex(&args.background).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid background color: {}. Use #rrggbb or #rrggbbaa",
            args.background
        )
    })?;

    let events = match (args.events, args.orbit) {
        (Some(path), _) => super::load_events(&path)?,
        (None, Some(revolutions)) => orbit_events(
            ViewportSize::new(width as f64, height as f64),
            frames,
            revolutions,
        ),
        (None, None) => Vec::new(),
    };

    println!("Rendering {frames} frames");
    println!("  Theme: {}", options.theme.name);
    println!("  Resolution: {width}x{height}");
    println!("  Events: {}", events.len());
    println!("  Output: {}", output_dir.display());

    let job = RenderJob {
        options,
        width,
        height,
        frames,
        events,
        background,
        output_dir,
    };

    let started = Instant::now();
    let throttle = Mutex::new(RateController::new(PROGRESS_HZ));
    let progress_cb: ProgressCallback = Box::new(move |p: RenderProgress| {
        let now_ns = started.elapsed().as_nanos() as u64;
        let due = throttle
            .lock()
            .map(|mut rate| rate.should_tick(now_ns))
            .unwrap_or(true);
        if due || p.frames_rendered == p.total_frames {
            print!(
                "\r  Progress: {:.1}% ({}/{} frames, ETA: {:.0}s)  ",
                p.progress * 100.0,
                p.frames_rendered,
                p.total_frames,
                p.eta_secs,
            );
        }
    });

    let summary = tokio::task::spawn_blocking(move || render_sequence(job, Some(progress_cb)))
        .await
        .context("Render task panicked")?
        .context("Render failed")?;

    println!();
    println!(
        "Render complete: {} frames in {}",
        summary.frames_written,
        summary.output_dir.display()
    );
    if summary.resizes > 0 {
        println!("  Viewport resized {} times", summary.resizes);
    }
    println!("  Elements at last frame: {}", summary.elements);

    Ok(())
}
