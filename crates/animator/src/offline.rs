//! Offline rendering and headless simulation.
//!
//! Both drive the same field as the live loop, one tick per frame, with
//! host events taken from a script instead of the environment.

use std::path::PathBuf;

use toolfield_common::clock::FrameClock;
use toolfield_common::error::{ToolfieldError, ToolfieldResult};
use toolfield_field_core::ParticleField;
use toolfield_field_model::event::{HostEvent, ScriptedEvent};
use toolfield_field_model::geometry::{Point2D, ViewportSize};
use toolfield_field_model::snapshot::FieldSnapshot;
use toolfield_render_engine::export::FrameSequenceWriter;
use toolfield_render_engine::paint::Color;
use toolfield_render_engine::raster::RasterSurface;

use crate::animator::{AnimationOptions, Animator};

/// A frame sequence to render.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub options: AnimationOptions,
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    /// Host events, sorted by frame.
    pub events: Vec<ScriptedEvent>,
    pub background: Color,
    pub output_dir: PathBuf,
}

/// Progress callback for frame rendering.
pub type ProgressCallback = Box<dyn Fn(RenderProgress) + Send>;

/// Render progress report.
#[derive(Debug, Clone)]
pub struct RenderProgress {
    /// Current progress [0.0, 1.0].
    pub progress: f64,

    /// Frames rendered so far.
    pub frames_rendered: u64,

    /// Total frames to render.
    pub total_frames: u64,

    /// Estimated time remaining in seconds.
    pub eta_secs: f64,
}

/// What a finished render produced.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub frames_written: u64,
    pub output_dir: PathBuf,
    pub resizes: usize,
    /// Element count at the last frame.
    pub elements: usize,
}

/// Render `job.frames` frames to numbered PNG files.
pub fn render_sequence(
    job: RenderJob,
    progress: Option<ProgressCallback>,
) -> ToolfieldResult<RenderSummary> {
    if job.width == 0 || job.height == 0 {
        return Err(ToolfieldError::render("output dimensions must be positive"));
    }
    for scripted in &job.events {
        if let HostEvent::Resize { width, height } = scripted.event {
            if !(width >= 1.0 && height >= 1.0) {
                return Err(ToolfieldError::render(format!(
                    "resize at frame {} to {width}x{height} leaves nothing to draw",
                    scripted.frame
                )));
            }
        }
    }

    tracing::info!(
        output = %job.output_dir.display(),
        theme = %job.options.theme.name,
        frames = job.frames,
        width = job.width,
        height = job.height,
        "Starting frame sequence render"
    );

    let viewport = ViewportSize::new(job.width as f64, job.height as f64);
    let surface = RasterSurface::new(job.width, job.height).with_background(job.background);
    let mut animator = Animator::new(surface, viewport, &job.options)?;
    let mut writer = FrameSequenceWriter::create(&job.output_dir)?;
    let clock = FrameClock::start();

    let mut pending = job.events.iter().peekable();
    let mut resizes = 0;

    for frame in 0..job.frames {
        while let Some(scripted) = pending.next_if(|e| e.frame <= frame) {
            if matches!(scripted.event, HostEvent::Resize { .. }) {
                resizes += 1;
            }
            animator.apply(scripted.event);
        }

        animator.frame();
        writer.write(animator.surface())?;

        if let Some(cb) = &progress {
            let done = frame + 1;
            let elapsed = clock.elapsed_secs();
            let per_frame = elapsed / done as f64;
            cb(RenderProgress {
                progress: done as f64 / job.frames as f64,
                frames_rendered: done,
                total_frames: job.frames,
                eta_secs: per_frame * (job.frames - done) as f64,
            });
        }
    }

    let summary = RenderSummary {
        frames_written: writer.frames_written(),
        output_dir: job.output_dir,
        resizes,
        elements: animator.field().elements().len(),
    };
    tracing::info!(
        frames = summary.frames_written,
        elapsed_secs = clock.elapsed_secs(),
        "Frame sequence render complete"
    );
    Ok(summary)
}

/// Integrate `ticks` frames without drawing and capture the final state.
pub fn simulate(
    options: &AnimationOptions,
    viewport: ViewportSize,
    ticks: u64,
    events: &[ScriptedEvent],
) -> ToolfieldResult<FieldSnapshot> {
    let mut field = match options.seed {
        Some(seed) => ParticleField::seeded(options.theme.clone(), viewport, seed)?,
        None => ParticleField::from_entropy(options.theme.clone(), viewport)?,
    };

    let mut pending = events.iter().peekable();
    for tick in 0..ticks {
        while let Some(scripted) = pending.next_if(|e| e.frame <= tick) {
            match scripted.event {
                HostEvent::PointerMove { x, y } => field.set_cursor(Point2D::new(x, y)),
                HostEvent::Resize { width, height } => {
                    field.resize(ViewportSize::new(width, height))
                }
            }
        }
        field.tick();
    }

    tracing::debug!(ticks, elements = field.elements().len(), "Simulation finished");
    Ok(field.snapshot())
}
