//! Colors and fills: solid colors plus linear and radial gradients.
//!
//! Gradient geometry is expressed in the local coordinates of the shape
//! being painted, like a canvas gradient created under the current
//! transform.

/// A straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Linear interpolation per channel.
    pub fn lerp(a: Color, b: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Color {
            r: mix(a.r, b.r),
            g: mix(a.g, b.g),
            b: mix(a.b, b.b),
            a: mix(a.a, b.a),
        }
    }
}

/// A color at an offset in `[0, 1]` along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// How a path is filled or stroked.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid {
        color: Color,
    },
    Linear {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: Vec<GradientStop>,
    },
    Radial {
        cx: f64,
        cy: f64,
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Paint::Solid { color }
    }

    /// Linear gradient from `(x0, y0)` to `(x1, y1)`. Stops are sorted by offset.
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64, stops: &[(f64, Color)]) -> Self {
        Paint::Linear {
            x0,
            y0,
            x1,
            y1,
            stops: sorted_stops(stops),
        }
    }

    /// Radial gradient centred at `(cx, cy)`. Stops are sorted by offset.
    pub fn radial(cx: f64, cy: f64, radius: f64, stops: &[(f64, Color)]) -> Self {
        Paint::Radial {
            cx,
            cy,
            radius,
            stops: sorted_stops(stops),
        }
    }

    /// Color of the paint at a point in shape-local coordinates.
    pub fn color_at(&self, x: f64, y: f64) -> Color {
        match self {
            Paint::Solid { color } => *color,
            Paint::Linear {
                x0,
                y0,
                x1,
                y1,
                stops,
            } => {
                let dx = x1 - x0;
                let dy = y1 - y0;
                let len_sq = dx * dx + dy * dy;
                let t = if len_sq <= f64::EPSILON {
                    0.0
                } else {
                    ((x - x0) * dx + (y - y0) * dy) / len_sq
                };
                sample_stops(stops, t)
            }
            Paint::Radial {
                cx,
                cy,
                radius,
                stops,
            } => {
                let t = if *radius <= f64::EPSILON {
                    1.0
                } else {
                    ((x - cx).powi(2) + (y - cy).powi(2)).sqrt() / radius
                };
                sample_stops(stops, t)
            }
        }
    }
}

fn sorted_stops(stops: &[(f64, Color)]) -> Vec<GradientStop> {
    let mut stops: Vec<GradientStop> = stops
        .iter()
        .map(|&(offset, color)| GradientStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        })
        .collect();
    stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
    stops
}

fn sample_stops(stops: &[GradientStop], t: f64) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::TRANSPARENT;
    };
    let t = t.clamp(0.0, 1.0);
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f64::EPSILON {
                return b.color;
            }
            return Color::lerp(a.color, b.color, (t - a.offset) / span);
        }
    }
    last.color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#c6a15b"), Some(Color::rgb(0xc6, 0xa1, 0x5b)));
        assert_eq!(Color::from_hex("10203040"), Some(Color::rgba(0x10, 0x20, 0x30, 0x40)));
        assert_eq!(Color::from_hex("#abc"), None);
        assert_eq!(Color::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_linear_gradient_endpoints_and_midpoint() {
        let paint = Paint::linear(0.0, 0.0, 10.0, 0.0, &[(0.0, Color::BLACK), (1.0, Color::WHITE)]);
        assert_eq!(paint.color_at(-5.0, 3.0), Color::BLACK);
        assert_eq!(paint.color_at(20.0, 3.0), Color::WHITE);
        assert_eq!(paint.color_at(5.0, 0.0), Color::rgb(128, 128, 128));
    }

    #[test]
    fn test_radial_gradient_unsorted_stops() {
        let red = Color::rgb(255, 0, 0);
        let paint = Paint::radial(0.0, 0.0, 4.0, &[(1.0, Color::BLACK), (0.0, red)]);
        assert_eq!(paint.color_at(0.0, 0.0), red);
        assert_eq!(paint.color_at(0.0, 8.0), Color::BLACK);
    }

    #[test]
    fn test_empty_gradient_is_transparent() {
        let paint = Paint::linear(0.0, 0.0, 1.0, 1.0, &[]);
        assert_eq!(paint.color_at(0.5, 0.5), Color::TRANSPARENT);
    }
}
