//! Toolfield Field Model
//!
//! Defines the data contracts shared by the field engine, the renderer,
//! and the animation host:
//! - **Elements:** Decorative tool/hardware sprites with pose and velocity
//! - **Themes:** Shape catalogue plus tuning constants for a background
//! - **Events:** Pointer-move and resize events delivered by the host
//! - **Snapshots:** Serializable captures of a running field
//!
//! All coordinates are viewport pixels with `(0, 0)` at the top-left.

pub mod element;
pub mod event;
pub mod geometry;
pub mod snapshot;
pub mod theme;

pub use element::*;
pub use event::*;
pub use geometry::*;
pub use snapshot::*;
pub use theme::*;
