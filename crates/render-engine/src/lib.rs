//! Toolfield Render Engine
//!
//! Paints a particle field onto a 2D drawing surface every frame.
//!
//! # Pipeline Architecture
//!
//! ```text
//! elements ──► render_frame ──► clear
//!                   │
//!                   ├── per element: save → translate → rotate → alpha
//!                   │                     │
//!                   │              paint_shape(variant)
//!                   │                     │
//!                   │                  restore
//!                   ▼
//!             DrawSurface ──┬── RasterSurface ──► FrameSequenceWriter ──► frame_00000.png
//!                           └── RecordingSurface (command log)
//! ```

pub mod compositor;
pub mod export;
pub mod paint;
pub mod path;
pub mod raster;
pub mod recording;
pub mod shapes;
pub mod surface;

pub use compositor::render_frame;
pub use export::FrameSequenceWriter;
pub use paint::{Color, Paint};
pub use path::{Affine, Path};
pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::paint_shape;
pub use surface::DrawSurface;
