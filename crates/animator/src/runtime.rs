//! Mounting an animator onto the tokio runtime.
//!
//! The frame loop task owns the animator outright. Pointer-move and resize
//! events reach it as messages, so no state is shared and no lock is
//! taken. Events queued when a frame comes due are applied before that
//! frame, so the most recent pointer position wins. A due frame always
//! takes precedence over further incoming events.
//!
//! Teardown is tied to [`AnimationHandle`]: `unmount` stops the loop
//! cooperatively and reports frame statistics, and dropping the handle
//! aborts the loop task. Either way no frame is painted afterwards.

use std::ops::ControlFlow;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use toolfield_common::clock::{frame_interval, FrameStats};
use toolfield_common::error::ToolfieldResult;
use toolfield_field_model::event::HostEvent;
use toolfield_field_model::geometry::ViewportSize;
use toolfield_render_engine::surface::DrawSurface;

use crate::animator::{AnimationOptions, Animator};

const MAX_EVENTS_PER_FRAME: usize = 256;

#[derive(Debug)]
enum LoopMessage {
    Host(HostEvent),
    Unmount,
}

/// A running background animation.
#[derive(Debug)]
pub struct AnimationHandle {
    events: mpsc::UnboundedSender<LoopMessage>,
    task: Option<JoinHandle<FrameStats>>,
}

/// Start animating on `surface`.
///
/// Returns `Ok(None)` when no surface is available: the background is
/// decorative, so it silently stays off. Must be called from within a
/// tokio runtime.
pub fn mount<S>(
    surface: Option<S>,
    viewport: ViewportSize,
    options: AnimationOptions,
) -> ToolfieldResult<Option<AnimationHandle>>
where
    S: DrawSurface + Send + 'static,
{
    let Some(surface) = surface else {
        tracing::debug!("No drawing surface available; background animation disabled");
        return Ok(None);
    };

    let animator = Animator::new(surface, viewport, &options)?;
    let (events, receiver) = mpsc::unbounded_channel();

    tracing::info!(
        theme = %options.theme.name,
        fps = options.fps,
        width = viewport.width,
        height = viewport.height,
        elements = animator.field().elements().len(),
        "Mounting background animation"
    );

    let task = tokio::spawn(run_loop(animator, receiver, options.fps));
    Ok(Some(AnimationHandle {
        events,
        task: Some(task),
    }))
}

async fn run_loop<S: DrawSurface>(
    mut animator: Animator<S>,
    mut receiver: mpsc::UnboundedReceiver<LoopMessage>,
    fps: u32,
) -> FrameStats {
    let mut ticker = tokio::time::interval(frame_interval(fps));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // A due frame is never held back by incoming events.
            biased;

            _ = ticker.tick() => {
                if drain_pending(&mut animator, &mut receiver).is_break() {
                    break;
                }
                animator.frame();
            }
            message = receiver.recv() => match message {
                Some(LoopMessage::Host(event)) => animator.apply(event),
                Some(LoopMessage::Unmount) | None => break,
            },
        }
    }

    let stats = animator.stats();
    tracing::info!(
        frames = stats.frames,
        elapsed_secs = stats.elapsed_secs,
        achieved_fps = stats.achieved_fps,
        "Background animation unmounted"
    );
    stats
}

/// Apply events already queued when a frame comes due, at most
/// [`MAX_EVENTS_PER_FRAME`] of them so a flood cannot stall the frame.
fn drain_pending<S: DrawSurface>(
    animator: &mut Animator<S>,
    receiver: &mut mpsc::UnboundedReceiver<LoopMessage>,
) -> ControlFlow<()> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        match receiver.try_recv() {
            Ok(LoopMessage::Host(event)) => animator.apply(event),
            Ok(LoopMessage::Unmount) | Err(TryRecvError::Disconnected) => {
                return ControlFlow::Break(())
            }
            Err(TryRecvError::Empty) => break,
        }
    }
    ControlFlow::Continue(())
}

impl AnimationHandle {
    /// Forward a pointer position to the loop.
    pub fn pointer_moved(&self, x: f64, y: f64) {
        self.send(HostEvent::pointer(x, y));
    }

    /// Forward a viewport resize to the loop.
    pub fn resized(&self, width: f64, height: f64) {
        self.send(HostEvent::resize(width, height));
    }

    pub fn send(&self, event: HostEvent) {
        // The loop only goes away through this handle, so a failed send
        // means it already stopped and there is nothing left to update.
        let _ = self.events.send(LoopMessage::Host(event));
    }

    /// Whether the frame loop is still running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the frame loop and wait for it to finish.
    pub async fn unmount(mut self) -> FrameStats {
        let _ = self.events.send(LoopMessage::Unmount);
        let Some(task) = self.task.take() else {
            return FrameStats::default();
        };
        match task.await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!("Background animation loop ended abnormally: {e}");
                FrameStats::default()
            }
        }
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("Background animation aborted on drop");
        }
    }
}
