//! Toolfield Animator
//!
//! Hosts a particle field on a drawing surface:
//! - **Animator:** The synchronous core (field + surface + frame counter)
//! - **Runtime:** Mounts an animator on the tokio runtime with a frame
//!   loop and event intake, and tears it down on unmount or drop
//! - **Offline:** Deterministic frame-sequence rendering and headless
//!   simulation driven by scripted host events

pub mod animator;
pub mod offline;
pub mod runtime;

pub use animator::{AnimationOptions, AnimationState, Animator};
pub use offline::{render_sequence, simulate, RenderJob, RenderProgress, RenderSummary};
pub use runtime::{mount, AnimationHandle};
