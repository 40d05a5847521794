//! Vector paths and 2D affine transforms.

/// Cubic approximation constant for a quarter circle.
const KAPPA: f64 = 0.552_284_749_831;

/// Line segments used to flatten each curve.
const CURVE_SEGMENTS: usize = 12;

/// A 2D affine transform in canvas order:
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Post-multiply by a translation (as `ctx.translate`).
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            e: self.a * dx + self.c * dy + self.e,
            f: self.b * dx + self.d * dy + self.f,
            ..self
        }
    }

    /// Post-multiply by a rotation (as `ctx.rotate`).
    pub fn rotated(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Uniform scale factor of the transform (geometric mean of the axes).
    pub fn scale(&self) -> f64 {
        self.determinant().abs().sqrt()
    }

    /// Inverse transform, or `None` when degenerate.
    pub fn inverse(&self) -> Option<Affine> {
        let det = self.determinant();
        if det.abs() <= f64::EPSILON {
            return None;
        }
        let inv = 1.0 / det;
        Some(Affine {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A single path-building instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    QuadTo(f64, f64, f64, f64),
    CubicTo(f64, f64, f64, f64, f64, f64),
    Close,
}

/// A flattened subpath: a polyline, optionally closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<(f64, f64)>,
    pub closed: bool,
}

/// A sequence of subpaths built from move/line/curve commands.
///
/// Fills use the even-odd rule across subpaths, so an inner circle added
/// to an outer one punches a hole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCmd::MoveTo(x, y));
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCmd::LineTo(x, y));
        self
    }

    pub fn quad_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCmd::QuadTo(cx, cy, x, y));
        self
    }

    pub fn cubic_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCmd::CubicTo(c1x, c1y, c2x, c2y, x, y));
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCmd::Close);
        self
    }

    /// Append all subpaths of `other`.
    pub fn append(mut self, other: Path) -> Self {
        self.commands.extend(other.commands);
        self
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        let k = r * KAPPA;
        Path::new()
            .move_to(cx + r, cy)
            .cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r)
            .cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy)
            .cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r)
            .cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy)
            .close()
    }

    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Path::new()
            .move_to(x, y)
            .line_to(x + w, y)
            .line_to(x + w, y + h)
            .line_to(x, y + h)
            .close()
    }

    pub fn rounded_rect(x: f64, y: f64, w: f64, h: f64, radius: f64) -> Self {
        let r = radius.clamp(0.0, w.min(h) / 2.0);
        Path::new()
            .move_to(x + r, y)
            .line_to(x + w - r, y)
            .quad_to(x + w, y, x + w, y + r)
            .line_to(x + w, y + h - r)
            .quad_to(x + w, y + h, x + w - r, y + h)
            .line_to(x + r, y + h)
            .quad_to(x, y + h, x, y + h - r)
            .line_to(x, y + r)
            .quad_to(x, y, x + r, y)
            .close()
    }

    /// Closed polygon through the given points.
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        let mut path = Path::new();
        for (i, &(x, y)) in points.iter().enumerate() {
            path = if i == 0 {
                path.move_to(x, y)
            } else {
                path.line_to(x, y)
            };
        }
        if points.is_empty() {
            path
        } else {
            path.close()
        }
    }

    /// Regular polygon with `sides` vertices on a circle of radius `r`.
    pub fn regular_polygon(cx: f64, cy: f64, r: f64, sides: usize, rotation: f64) -> Self {
        let points: Vec<(f64, f64)> = (0..sides.max(3))
            .map(|i| {
                let angle = rotation + std::f64::consts::TAU * i as f64 / sides.max(3) as f64;
                (cx + r * angle.cos(), cy + r * angle.sin())
            })
            .collect();
        Path::polygon(&points)
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Flatten curves into polylines, mapping every point through `transform`.
    pub fn flatten(&self, transform: &Affine) -> Vec<Polyline> {
        let mut out = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        let mut start = (0.0, 0.0);
        let mut pen = (0.0, 0.0);

        let finish = |points: &mut Vec<(f64, f64)>, closed: bool, out: &mut Vec<Polyline>| {
            if points.len() > 1 {
                out.push(Polyline {
                    points: std::mem::take(points),
                    closed,
                });
            } else {
                points.clear();
            }
        };

        for cmd in &self.commands {
            match *cmd {
                PathCmd::MoveTo(x, y) => {
                    finish(&mut current, false, &mut out);
                    start = (x, y);
                    pen = (x, y);
                    current.push(transform.apply(x, y));
                }
                PathCmd::LineTo(x, y) => {
                    if current.is_empty() {
                        current.push(transform.apply(pen.0, pen.1));
                    }
                    pen = (x, y);
                    current.push(transform.apply(x, y));
                }
                PathCmd::QuadTo(cx, cy, x, y) => {
                    if current.is_empty() {
                        current.push(transform.apply(pen.0, pen.1));
                    }
                    let p0 = pen;
                    for i in 1..=CURVE_SEGMENTS {
                        let t = i as f64 / CURVE_SEGMENTS as f64;
                        let mt = 1.0 - t;
                        let px = mt * mt * p0.0 + 2.0 * mt * t * cx + t * t * x;
                        let py = mt * mt * p0.1 + 2.0 * mt * t * cy + t * t * y;
                        current.push(transform.apply(px, py));
                    }
                    pen = (x, y);
                }
                PathCmd::CubicTo(c1x, c1y, c2x, c2y, x, y) => {
                    if current.is_empty() {
                        current.push(transform.apply(pen.0, pen.1));
                    }
                    let p0 = pen;
                    for i in 1..=CURVE_SEGMENTS {
                        let t = i as f64 / CURVE_SEGMENTS as f64;
                        let mt = 1.0 - t;
                        let px = mt.powi(3) * p0.0
                            + 3.0 * mt * mt * t * c1x
                            + 3.0 * mt * t * t * c2x
                            + t.powi(3) * x;
                        let py = mt.powi(3) * p0.1
                            + 3.0 * mt * mt * t * c1y
                            + 3.0 * mt * t * t * c2y
                            + t.powi(3) * y;
                        current.push(transform.apply(px, py));
                    }
                    pen = (x, y);
                }
                PathCmd::Close => {
                    finish(&mut current, true, &mut out);
                    pen = start;
                }
            }
        }
        finish(&mut current, false, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn close_to(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_translate_then_rotate_matches_canvas_order() {
        let t = Affine::IDENTITY.translated(10.0, 5.0).rotated(FRAC_PI_2);
        // local +x axis points down the screen after a quarter turn
        assert!(close_to(t.apply(1.0, 0.0), (10.0, 6.0)));
        assert!(close_to(t.apply(0.0, 0.0), (10.0, 5.0)));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let t = Affine::IDENTITY.translated(3.0, -7.0).rotated(0.7);
        let inv = t.inverse().unwrap();
        let (x, y) = t.apply(2.5, 4.0);
        assert!(close_to(inv.apply(x, y), (2.5, 4.0)));
        assert!((t.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_flatten_rect_is_closed() {
        let polys = Path::rect(0.0, 0.0, 4.0, 2.0).flatten(&Affine::IDENTITY);
        assert_eq!(polys.len(), 1);
        assert!(polys[0].closed);
        assert_eq!(polys[0].points, vec![(0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0)]);
    }

    #[test]
    fn test_flatten_circle_points_lie_on_circle() {
        let polys = Path::circle(5.0, 5.0, 3.0).flatten(&Affine::IDENTITY);
        assert_eq!(polys.len(), 1);
        for &(x, y) in &polys[0].points {
            let r = ((x - 5.0).powi(2) + (y - 5.0).powi(2)).sqrt();
            assert!((r - 3.0).abs() < 0.01, "r={r}");
        }
    }

    #[test]
    fn test_append_keeps_subpaths() {
        let ring = Path::circle(0.0, 0.0, 10.0).append(Path::circle(0.0, 0.0, 4.0));
        assert_eq!(ring.flatten(&Affine::IDENTITY).len(), 2);
    }

    #[test]
    fn test_open_polyline() {
        let polys = Path::new()
            .move_to(0.0, 0.0)
            .quad_to(5.0, 5.0, 10.0, 0.0)
            .flatten(&Affine::IDENTITY);
        assert_eq!(polys.len(), 1);
        assert!(!polys[0].closed);
        assert_eq!(polys[0].points.len(), CURVE_SEGMENTS + 1);
        assert!(close_to(*polys[0].points.last().unwrap(), (10.0, 0.0)));
    }
}
