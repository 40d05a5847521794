//! The drawing-surface contract the renderer paints through.

use crate::paint::Paint;
use crate::path::Path;

/// A 2D drawing context modelled on the browser canvas API.
///
/// Transforms and global alpha are part of the saved state: `save` pushes
/// them and `restore` pops them. Paths are given in the current local
/// coordinate system.
pub trait DrawSurface {
    /// Surface size in pixels.
    fn size(&self) -> (f64, f64);

    /// Resize the surface; contents are discarded.
    fn resize(&mut self, width: f64, height: f64);

    /// Erase the whole surface.
    fn clear(&mut self);

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    fn rotate(&mut self, radians: f64);

    fn set_global_alpha(&mut self, alpha: f64);

    fn fill_path(&mut self, path: &Path, paint: &Paint);

    fn stroke_path(&mut self, path: &Path, paint: &Paint, width: f64);
}

impl<S: DrawSurface + ?Sized> DrawSurface for Box<S> {
    fn size(&self) -> (f64, f64) {
        (**self).size()
    }

    fn resize(&mut self, width: f64, height: f64) {
        (**self).resize(width, height)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn save(&mut self) {
        (**self).save()
    }

    fn restore(&mut self) {
        (**self).restore()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        (**self).translate(dx, dy)
    }

    fn rotate(&mut self, radians: f64) {
        (**self).rotate(radians)
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        (**self).set_global_alpha(alpha)
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        (**self).fill_path(path, paint)
    }

    fn stroke_path(&mut self, path: &Path, paint: &Paint, width: f64) {
        (**self).stroke_path(path, paint, width)
    }
}
