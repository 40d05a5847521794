//! Run the live frame loop against an offscreen raster surface.

use std::time::Duration;

use toolfield_animator::mount;
use toolfield_common::config::AppConfig;
use toolfield_field_model::event::orbit_events;
use toolfield_field_model::geometry::ViewportSize;
use toolfield_render_engine::raster::RasterSurface;

pub async fn run(
    config: &AppConfig,
    theme: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    fps: Option<u32>,
    secs: f64,
) -> anyhow::Result<()> {
    anyhow::ensure!(secs.is_finite() && secs > 0.0, "secs must be positive");

    let options = super::animation_options(config, theme, None, fps)?;
    let width = width.unwrap_or(config.render.width);
    let height = height.unwrap_or(config.render.height);
    let viewport = ViewportSize::new(width as f64, height as f64);
    let target_fps = options.fps;

    println!(
        "Running {} at {width}x{height}, target {target_fps} fps, for {secs:.1}s",
        options.theme.name
    );

    let Some(handle) = mount(Some(RasterSurface::new(width, height)), viewport, options)? else {
        println!("No surface; nothing to run");
        return Ok(());
    };

    // Sweep the pointer around the centre in step with the target rate.
    let steps = (secs * target_fps as f64).ceil() as u64;
    let step = Duration::from_secs_f64(secs / steps.max(1) as f64);
    for event in orbit_events(viewport, steps, 1.0) {
        handle.send(event.event);
        tokio::time::sleep(step).await;
    }

    let stats = handle.unmount().await;
    println!("  Frames: {}", stats.frames);
    println!("  Elapsed: {:.2}s", stats.elapsed_secs);
    println!("  Achieved: {:.1} fps", stats.achieved_fps);
    if stats.achieved_fps < target_fps as f64 * 0.9 {
        println!("  Below target: frames were skipped");
    }

    Ok(())
}
