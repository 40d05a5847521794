//! Toolfield Field Core
//!
//! The particle engine behind the decorative backgrounds:
//! - **Spawn:** Size and populate a field for a viewport
//! - **Integrator:** Cursor repulsion, damping, pose integration, wraparound
//! - **Field:** The element set plus cursor, rebuilt on every resize
//!
//! This crate is pure computation: no I/O, no drawing, no timers.
//! Randomness is injected so fields can be reproduced from a seed.

pub mod field;
pub mod integrator;
pub mod spawn;

pub use field::ParticleField;
pub use integrator::step_element;
pub use spawn::{element_count, populate};
