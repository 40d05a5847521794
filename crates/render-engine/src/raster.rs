//! Pixel-buffer surface backed by `image` and `imageproc`.
//!
//! Paths are flattened under the current transform and rasterized into a
//! coverage mask covering only their bounding box. Fills combine subpaths
//! with the even-odd rule; strokes are the union of one quad per segment
//! plus round joins. Covered pixels are then painted with the paint
//! evaluated in shape-local coordinates and blended source-over.

use std::path::Path as FsPath;

use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_polygon_mut};
use imageproc::point::Point;
use toolfield_common::error::ToolfieldResult;

use crate::paint::{Color, Paint};
use crate::path::{Affine, Path, Polyline};
use crate::surface::DrawSurface;

const COVERED: Luma<u8> = Luma([255]);

#[derive(Debug, Clone, Copy)]
struct RasterState {
    transform: Affine,
    alpha: f64,
}

impl Default for RasterState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            alpha: 1.0,
        }
    }
}

/// Device-space pixel rectangle `[x0, x1) × [y0, y1)`.
#[derive(Debug, Clone, Copy)]
struct PixelBounds {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl PixelBounds {
    fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// An RGBA pixel surface.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    pixels: RgbaImage,
    background: Color,
    state: RasterState,
    stack: Vec<RasterState>,
}

impl RasterSurface {
    /// A transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            background: Color::TRANSPARENT,
            state: RasterState::default(),
            stack: Vec::new(),
        }
    }

    /// Use `color` for every `clear`, and clear now.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self.clear();
        self
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Encode the current contents as PNG.
    pub fn save_png(&self, path: &FsPath) -> ToolfieldResult<()> {
        self.pixels.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    fn bounds(&self, polylines: &[Polyline], pad: f64) -> Option<PixelBounds> {
        let (w, h) = self.pixels.dimensions();
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(x, y) in polylines.iter().flat_map(|p| p.points.iter()) {
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
        if !min.0.is_finite() || !max.0.is_finite() {
            return None;
        }

        let x0 = (min.0 - pad).floor().max(0.0) as u32;
        let y0 = (min.1 - pad).floor().max(0.0) as u32;
        let x1 = ((max.0 + pad).ceil() + 1.0).clamp(0.0, w as f64) as u32;
        let y1 = ((max.1 + pad).ceil() + 1.0).clamp(0.0, h as f64) as u32;
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(PixelBounds { x0, y0, x1, y1 })
    }

    /// Paint every covered mask pixel and blend it into the buffer.
    fn composite(&mut self, mask: &GrayImage, bounds: PixelBounds, paint: &Paint) {
        let Some(inverse) = self.state.transform.inverse() else {
            return;
        };
        let global_alpha = self.state.alpha.clamp(0.0, 1.0);
        if global_alpha <= 0.0 {
            return;
        }

        for (mx, my, coverage) in mask.enumerate_pixels() {
            if coverage.0[0] == 0 {
                continue;
            }
            let px = bounds.x0 + mx;
            let py = bounds.y0 + my;
            let (lx, ly) = inverse.apply(px as f64 + 0.5, py as f64 + 0.5);
            let color = paint.color_at(lx, ly);
            let alpha = color.a as f64 / 255.0 * global_alpha;
            if alpha > 0.0 {
                blend(self.pixels.get_pixel_mut(px, py), color, alpha);
            }
        }
    }
}

/// Integer polygon relative to `bounds`, or `None` if it degenerates.
fn to_polygon(points: &[(f64, f64)], bounds: PixelBounds) -> Option<Vec<Point<i32>>> {
    let mut poly: Vec<Point<i32>> = Vec::with_capacity(points.len());
    for &(x, y) in points {
        let p = Point::new(
            (x - bounds.x0 as f64).round() as i32,
            (y - bounds.y0 as f64).round() as i32,
        );
        if poly.last() != Some(&p) {
            poly.push(p);
        }
    }
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    (poly.len() >= 3).then_some(poly)
}

/// Source-over blend of a straight-alpha color.
fn blend(dst: &mut Rgba<u8>, src: Color, alpha: f64) {
    let dst_alpha = dst.0[3] as f64 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    if out_alpha <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    let mix = |s: u8, d: u8| {
        let value = (s as f64 * alpha + d as f64 * dst_alpha * (1.0 - alpha)) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    *dst = Rgba([
        mix(src.r, dst.0[0]),
        mix(src.g, dst.0[1]),
        mix(src.b, dst.0[2]),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ]);
}

impl DrawSurface for RasterSurface {
    fn size(&self) -> (f64, f64) {
        let (w, h) = self.pixels.dimensions();
        (w as f64, h as f64)
    }

    fn resize(&mut self, width: f64, height: f64) {
        let width = width.round().max(0.0) as u32;
        let height = height.round().max(0.0) as u32;
        self.pixels = RgbaImage::new(width, height);
        self.clear();
    }

    fn clear(&mut self) {
        let bg = Rgba([
            self.background.r,
            self.background.g,
            self.background.b,
            self.background.a,
        ]);
        for pixel in self.pixels.pixels_mut() {
            *pixel = bg;
        }
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform.translated(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.state.transform = self.state.transform.rotated(radians);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        let polylines = path.flatten(&self.state.transform);
        let Some(bounds) = self.bounds(&polylines, 0.0) else {
            return;
        };

        let mut mask = GrayImage::new(bounds.width(), bounds.height());
        for polyline in &polylines {
            let Some(poly) = to_polygon(&polyline.points, bounds) else {
                continue;
            };
            let mut subpath = GrayImage::new(bounds.width(), bounds.height());
            draw_polygon_mut(&mut subpath, &poly, COVERED);
            for (acc, cov) in mask.pixels_mut().zip(subpath.pixels()) {
                acc.0[0] ^= cov.0[0];
            }
        }

        self.composite(&mask, bounds, paint);
    }

    fn stroke_path(&mut self, path: &Path, paint: &Paint, width: f64) {
        let polylines = path.flatten(&self.state.transform);
        let half = (width * self.state.transform.scale() / 2.0).max(0.5);
        let Some(bounds) = self.bounds(&polylines, half) else {
            return;
        };

        let mut mask = GrayImage::new(bounds.width(), bounds.height());
        for polyline in &polylines {
            let points = &polyline.points;
            let mut segments: Vec<((f64, f64), (f64, f64))> =
                points.windows(2).map(|w| (w[0], w[1])).collect();
            if polyline.closed {
                if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
                    segments.push((last, first));
                }
            }

            for (p, q) in segments {
                let (dx, dy) = (q.0 - p.0, q.1 - p.1);
                let len = (dx * dx + dy * dy).sqrt();
                if len <= f64::EPSILON {
                    continue;
                }
                let (nx, ny) = (-dy / len * half, dx / len * half);
                let quad = [
                    (p.0 + nx, p.1 + ny),
                    (q.0 + nx, q.1 + ny),
                    (q.0 - nx, q.1 - ny),
                    (p.0 - nx, p.1 - ny),
                ];
                if let Some(poly) = to_polygon(&quad, bounds) {
                    draw_polygon_mut(&mut mask, &poly, COVERED);
                }
            }

            if half >= 1.0 {
                for &(x, y) in points {
                    let centre = (
                        (x - bounds.x0 as f64).round() as i32,
                        (y - bounds.y0 as f64).round() as i32,
                    );
                    draw_filled_circle_mut(&mut mask, centre, half.round() as i32, COVERED);
                }
            }
        }

        self.composite(&mask, bounds, paint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const RED: Color = Color::rgb(255, 0, 0);

    fn pixel(surface: &RasterSurface, x: u32, y: u32) -> [u8; 4] {
        surface.image().get_pixel(x, y).0
    }

    #[test]
    fn test_fill_rect() {
        let mut surface = RasterSurface::new(64, 64);
        surface.fill_path(&Path::rect(10.0, 10.0, 20.0, 20.0), &Paint::solid(RED));
        assert_eq!(pixel(&surface, 20, 20), [255, 0, 0, 255]);
        assert_eq!(pixel(&surface, 5, 5), [0, 0, 0, 0]);
        assert_eq!(pixel(&surface, 40, 40), [0, 0, 0, 0]);
    }

    #[test]
    fn test_even_odd_hole() {
        let mut surface = RasterSurface::new(100, 100);
        let ring = Path::circle(50.0, 50.0, 20.0).append(Path::circle(50.0, 50.0, 8.0));
        surface.fill_path(&ring, &Paint::solid(RED));
        assert_eq!(pixel(&surface, 50, 50)[3], 0);
        assert_eq!(pixel(&surface, 64, 50), [255, 0, 0, 255]);
    }

    #[test]
    fn test_global_alpha_blends_over_background() {
        let mut surface = RasterSurface::new(32, 32).with_background(Color::WHITE);
        surface.set_global_alpha(0.5);
        surface.fill_path(&Path::rect(0.0, 0.0, 32.0, 32.0), &Paint::solid(Color::BLACK));
        let [r, g, b, a] = pixel(&surface, 16, 16);
        assert!((127..=128).contains(&r));
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_transform_and_restore() {
        let mut surface = RasterSurface::new(100, 100);
        surface.save();
        surface.translate(50.0, 50.0);
        surface.rotate(FRAC_PI_2);
        surface.fill_path(&Path::rect(-20.0, -2.0, 40.0, 4.0), &Paint::solid(RED));
        surface.restore();

        // the horizontal bar became vertical
        assert_eq!(pixel(&surface, 50, 65)[3], 255);
        assert_eq!(pixel(&surface, 65, 50)[3], 0);

        // identity again after restore
        surface.fill_path(&Path::rect(0.0, 0.0, 4.0, 4.0), &Paint::solid(RED));
        assert_eq!(pixel(&surface, 1, 1)[3], 255);
    }

    #[test]
    fn test_gradient_evaluated_in_local_space() {
        let mut surface = RasterSurface::new(100, 20);
        surface.translate(10.0, 0.0);
        let paint = Paint::linear(0.0, 0.0, 80.0, 0.0, &[(0.0, Color::BLACK), (1.0, Color::WHITE)]);
        surface.fill_path(&Path::rect(0.0, 0.0, 80.0, 20.0), &paint);
        let left = pixel(&surface, 12, 10)[0];
        let right = pixel(&surface, 87, 10)[0];
        assert!(left < 20, "left={left}");
        assert!(right > 235, "right={right}");
    }

    #[test]
    fn test_stroke_covers_line() {
        let mut surface = RasterSurface::new(50, 50);
        let line = Path::new().move_to(5.0, 25.0).line_to(45.0, 25.0);
        surface.stroke_path(&line, &Paint::solid(RED), 4.0);
        assert_eq!(pixel(&surface, 25, 25)[3], 255);
        assert_eq!(pixel(&surface, 25, 10)[3], 0);
    }

    #[test]
    fn test_offscreen_path_is_ignored() {
        let mut surface = RasterSurface::new(20, 20);
        surface.fill_path(&Path::rect(100.0, 100.0, 5.0, 5.0), &Paint::solid(RED));
        assert!(surface.image().pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_clear_and_resize() {
        let mut surface = RasterSurface::new(10, 10).with_background(Color::rgb(1, 2, 3));
        surface.fill_path(&Path::rect(0.0, 0.0, 10.0, 10.0), &Paint::solid(RED));
        surface.clear();
        assert_eq!(pixel(&surface, 5, 5), [1, 2, 3, 255]);

        surface.resize(30.0, 12.0);
        assert_eq!(surface.size(), (30.0, 12.0));
        assert_eq!(pixel(&surface, 29, 11), [1, 2, 3, 255]);
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut surface = RasterSurface::new(8, 8);
        surface.fill_path(&Path::rect(0.0, 0.0, 4.0, 4.0), &Paint::solid(RED));
        surface.save_png(&path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
    }
}
