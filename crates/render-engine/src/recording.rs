//! A surface that records draw commands instead of producing pixels.
//!
//! Used to inspect what the renderer emits and to count draw calls.

use crate::paint::Paint;
use crate::path::Path;
use crate::surface::DrawSurface;

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize { width: f64, height: f64 },
    Clear,
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Rotate { radians: f64 },
    GlobalAlpha { alpha: f64 },
    Fill { path: Path, paint: Paint },
    Stroke { path: Path, paint: Paint, width: f64 },
}

impl DrawCommand {
    /// Whether this command paints pixels.
    pub fn is_draw(&self) -> bool {
        matches!(self, DrawCommand::Fill { .. } | DrawCommand::Stroke { .. })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of fill and stroke calls recorded.
    pub fn draw_calls(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }

    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Drain and return everything recorded so far.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, radians: f64) {
        self.commands.push(DrawCommand::Rotate { radians });
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::GlobalAlpha { alpha });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &Path, paint: &Paint, width: f64) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            paint: paint.clone(),
            width,
        });
    }
}
