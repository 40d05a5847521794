//! Paint routines for the shape catalogue.
//!
//! Each routine draws one icon centred on the local origin and fitting in
//! a `size × size` box. Routines only fill and stroke: the caller sets up
//! the pose and alpha. They hold no state, so the same size always
//! produces the same calls.

use std::f64::consts::{FRAC_PI_2, TAU};

use toolfield_field_model::element::ShapeVariant;

use crate::paint::{Color, Paint};
use crate::path::Path;
use crate::surface::DrawSurface;

const STEEL_LIGHT: Color = Color::rgb(226, 230, 235);
const STEEL: Color = Color::rgb(168, 176, 186);
const STEEL_DARK: Color = Color::rgb(102, 110, 122);
const OUTLINE: Color = Color::rgb(70, 76, 86);
const BRASS: Color = Color::rgb(198, 161, 91);
const BRASS_DARK: Color = Color::rgb(140, 108, 52);
const GRIP: Color = Color::rgb(178, 58, 48);
const GRIP_DARK: Color = Color::rgb(118, 34, 28);
const WOOD: Color = Color::rgb(168, 118, 70);
const WOOD_DARK: Color = Color::rgb(110, 72, 40);

/// A stateless routine painting one icon at the origin.
pub type ShapePainter = fn(&mut dyn DrawSurface, f64);

/// The routine for each variant.
pub fn painter(variant: ShapeVariant) -> ShapePainter {
    match variant {
        ShapeVariant::Screw => paint_screw,
        ShapeVariant::Bolt => paint_bolt,
        ShapeVariant::Nut => paint_nut,
        ShapeVariant::Washer => paint_washer,
        ShapeVariant::Gear => paint_gear,
        ShapeVariant::Wrench => paint_wrench,
        ShapeVariant::Hammer => paint_hammer,
        ShapeVariant::Screwdriver => paint_screwdriver,
        ShapeVariant::Pliers => paint_pliers,
        ShapeVariant::DrillBit => paint_drill_bit,
        ShapeVariant::Nail => paint_nail,
    }
}

/// Paint `variant` at the origin of the surface's current transform.
pub fn paint_shape(surface: &mut dyn DrawSurface, variant: ShapeVariant, size: f64) {
    painter(variant)(surface, size);
}

/// Brushed-metal gradient across the segment `(x0, y0) → (x1, y1)`.
fn steel_linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Paint {
    Paint::linear(
        x0,
        y0,
        x1,
        y1,
        &[(0.0, STEEL_LIGHT), (0.45, STEEL), (1.0, STEEL_DARK)],
    )
}

/// Domed-metal gradient lit from the upper left of a disc at `(cx, cy)`.
fn steel_radial(cx: f64, cy: f64, r: f64) -> Paint {
    Paint::radial(
        cx - r * 0.3,
        cy - r * 0.3,
        r * 1.4,
        &[(0.0, STEEL_LIGHT), (0.6, STEEL), (1.0, STEEL_DARK)],
    )
}

fn outline() -> Paint {
    Paint::solid(OUTLINE)
}

/// Shallow curves across a shank suggesting a helical thread.
fn threads(surface: &mut dyn DrawSurface, half_width: f64, top: f64, bottom: f64, pitch: f64, s: f64) {
    let paint = outline();
    let mut y = top + pitch * 0.5;
    while y + pitch * 0.5 < bottom {
        let thread = Path::new()
            .move_to(-half_width, y)
            .quad_to(0.0, y + pitch * 0.3, half_width, y + pitch * 0.6);
        surface.stroke_path(&thread, &paint, s * 0.02);
        y += pitch;
    }
}

fn paint_screw(surface: &mut dyn DrawSurface, s: f64) {
    let head_y = -0.26 * s;
    let head_r = 0.2 * s;
    let half = 0.07 * s;

    surface.fill_path(
        &Path::rect(-half, head_y, half * 2.0, 0.54 * s),
        &steel_linear(-half, 0.0, half, 0.0),
    );
    surface.fill_path(
        &Path::polygon(&[(-half, 0.28 * s), (half, 0.28 * s), (0.0, 0.45 * s)]),
        &steel_linear(-half, 0.0, half, 0.0),
    );
    threads(surface, half, head_y + head_r, 0.28 * s, 0.09 * s, s);

    surface.fill_path(&Path::circle(0.0, head_y, head_r), &steel_radial(0.0, head_y, head_r));
    surface.stroke_path(&Path::circle(0.0, head_y, head_r), &outline(), s * 0.02);
    let slot = Path::new()
        .move_to(-head_r * 0.7, head_y)
        .line_to(head_r * 0.7, head_y);
    surface.stroke_path(&slot, &outline(), s * 0.05);
}

fn paint_bolt(surface: &mut dyn DrawSurface, s: f64) {
    let head_y = -0.28 * s;
    let half = 0.08 * s;

    surface.fill_path(
        &Path::rect(-half, -0.2 * s, half * 2.0, 0.65 * s),
        &steel_linear(-half, 0.0, half, 0.0),
    );
    let paint = outline();
    let mut y = -0.08 * s;
    while y < 0.4 * s {
        let thread = Path::new().move_to(-half, y).line_to(half, y + 0.04 * s);
        surface.stroke_path(&thread, &paint, s * 0.02);
        y += 0.08 * s;
    }

    let head = Path::regular_polygon(0.0, head_y, 0.18 * s, 6, 0.0);
    surface.fill_path(&head, &steel_radial(0.0, head_y, 0.18 * s));
    surface.stroke_path(&head, &outline(), s * 0.02);
}

fn paint_nut(surface: &mut dyn DrawSurface, s: f64) {
    let body = Path::regular_polygon(0.0, 0.0, 0.42 * s, 6, FRAC_PI_2)
        .append(Path::circle(0.0, 0.0, 0.18 * s));
    surface.fill_path(&body, &steel_radial(0.0, 0.0, 0.42 * s));

    surface.stroke_path(
        &Path::circle(0.0, 0.0, 0.34 * s),
        &Paint::solid(STEEL_LIGHT),
        s * 0.02,
    );
    surface.stroke_path(&Path::circle(0.0, 0.0, 0.18 * s), &outline(), s * 0.03);
}

fn paint_washer(surface: &mut dyn DrawSurface, s: f64) {
    let ring = Path::circle(0.0, 0.0, 0.42 * s).append(Path::circle(0.0, 0.0, 0.2 * s));
    surface.fill_path(&ring, &steel_radial(0.0, 0.0, 0.42 * s));
    surface.stroke_path(&Path::circle(0.0, 0.0, 0.42 * s), &outline(), s * 0.02);
    surface.stroke_path(&Path::circle(0.0, 0.0, 0.2 * s), &outline(), s * 0.02);
}

fn paint_gear(surface: &mut dyn DrawSurface, s: f64) {
    const TEETH: usize = 8;
    let outer = 0.45 * s;
    let root = 0.35 * s;
    let step = TAU / TEETH as f64;

    let mut points = Vec::with_capacity(TEETH * 4);
    for i in 0..TEETH {
        let a = i as f64 * step;
        for (offset, radius) in [
            (0.0, root),
            (0.15, outer),
            (0.45, outer),
            (0.6, root),
        ] {
            let angle = a + step * offset;
            points.push((radius * angle.cos(), radius * angle.sin()));
        }
    }

    let body = Path::polygon(&points).append(Path::circle(0.0, 0.0, 0.12 * s));
    surface.fill_path(&body, &steel_radial(0.0, 0.0, outer));
    surface.stroke_path(&Path::circle(0.0, 0.0, 0.22 * s), &outline(), s * 0.025);
}

fn paint_wrench(surface: &mut dyn DrawSurface, s: f64) {
    surface.fill_path(
        &Path::rounded_rect(-0.06 * s, -0.15 * s, 0.12 * s, 0.51 * s, 0.05 * s),
        &steel_linear(-0.06 * s, 0.0, 0.06 * s, 0.0),
    );

    // Open-ended jaw: a disc with a slot cut from the top.
    let cy = -0.3 * s;
    let r = 0.17 * s;
    let gap = 0.4;
    let start = -FRAC_PI_2 + gap;
    let sweep = TAU - 2.0 * gap;
    let mut jaw: Vec<(f64, f64)> = (0..=20)
        .map(|i| {
            let angle = start + sweep * i as f64 / 20.0;
            (r * angle.cos(), cy + r * angle.sin())
        })
        .collect();
    jaw.push((-0.05 * s, cy));
    jaw.push((0.05 * s, cy));
    let jaw = Path::polygon(&jaw);
    surface.fill_path(&jaw, &steel_radial(0.0, cy, r));
    surface.stroke_path(&jaw, &outline(), s * 0.02);

    let ring = Path::circle(0.0, 0.38 * s, 0.08 * s).append(Path::circle(0.0, 0.38 * s, 0.04 * s));
    surface.fill_path(&ring, &steel_radial(0.0, 0.38 * s, 0.08 * s));
}

fn paint_hammer(surface: &mut dyn DrawSurface, s: f64) {
    surface.fill_path(
        &Path::rounded_rect(-0.05 * s, -0.25 * s, 0.1 * s, 0.7 * s, 0.04 * s),
        &Paint::linear(
            -0.05 * s,
            0.0,
            0.05 * s,
            0.0,
            &[(0.0, WOOD), (1.0, WOOD_DARK)],
        ),
    );

    let head = Path::rect(-0.3 * s, -0.38 * s, 0.45 * s, 0.16 * s);
    surface.fill_path(&head, &steel_linear(0.0, -0.38 * s, 0.0, -0.22 * s));
    surface.fill_path(
        &Path::rect(-0.36 * s, -0.36 * s, 0.06 * s, 0.12 * s),
        &Paint::solid(STEEL_DARK),
    );

    let claw = Path::new()
        .move_to(0.15 * s, -0.38 * s)
        .quad_to(0.26 * s, -0.4 * s, 0.32 * s, -0.46 * s)
        .line_to(0.28 * s, -0.3 * s)
        .quad_to(0.22 * s, -0.24 * s, 0.15 * s, -0.22 * s)
        .close();
    surface.fill_path(&claw, &steel_linear(0.15 * s, -0.4 * s, 0.32 * s, -0.25 * s));
    surface.stroke_path(&head, &outline(), s * 0.015);
}

fn paint_screwdriver(surface: &mut dyn DrawSurface, s: f64) {
    let half = 0.025 * s;
    surface.fill_path(
        &Path::rect(-half, -0.42 * s, half * 2.0, 0.42 * s),
        &steel_linear(-half, 0.0, half, 0.0),
    );
    surface.fill_path(
        &Path::polygon(&[
            (-half, -0.42 * s),
            (half, -0.42 * s),
            (0.012 * s, -0.48 * s),
            (-0.012 * s, -0.48 * s),
        ]),
        &Paint::solid(STEEL_DARK),
    );

    surface.fill_path(
        &Path::rect(-0.05 * s, -0.02 * s, 0.1 * s, 0.07 * s),
        &Paint::linear(
            -0.05 * s,
            0.0,
            0.05 * s,
            0.0,
            &[(0.0, BRASS), (1.0, BRASS_DARK)],
        ),
    );

    surface.fill_path(
        &Path::rounded_rect(-0.09 * s, 0.05 * s, 0.18 * s, 0.42 * s, 0.06 * s),
        &Paint::linear(
            -0.09 * s,
            0.0,
            0.09 * s,
            0.0,
            &[(0.0, GRIP), (1.0, GRIP_DARK)],
        ),
    );
    let ridge = Paint::solid(GRIP_DARK);
    for x in [-0.04, 0.0, 0.04] {
        let line = Path::new().move_to(x * s, 0.1 * s).line_to(x * s, 0.42 * s);
        surface.stroke_path(&line, &ridge, s * 0.015);
    }
}

fn paint_pliers(surface: &mut dyn DrawSurface, s: f64) {
    let grip = Paint::linear(
        -0.2 * s,
        0.0,
        0.2 * s,
        0.0,
        &[(0.0, GRIP), (1.0, GRIP_DARK)],
    );
    for side in [-1.0, 1.0] {
        let handle = Path::new()
            .move_to(side * 0.04 * s, -0.02 * s)
            .quad_to(side * 0.2 * s, 0.2 * s, side * 0.16 * s, 0.46 * s)
            .line_to(side * 0.08 * s, 0.46 * s)
            .quad_to(side * 0.1 * s, 0.2 * s, side * -0.02 * s, 0.0)
            .close();
        surface.fill_path(&handle, &grip);
    }

    let jaws = Path::polygon(&[
        (-0.08 * s, -0.08 * s),
        (-0.025 * s, -0.46 * s),
        (0.025 * s, -0.46 * s),
        (0.08 * s, -0.08 * s),
    ]);
    surface.fill_path(&jaws, &steel_linear(-0.08 * s, 0.0, 0.08 * s, 0.0));
    let seam = Path::new().move_to(0.0, -0.08 * s).line_to(0.0, -0.46 * s);
    surface.stroke_path(&seam, &outline(), s * 0.015);

    let pivot_y = -0.05 * s;
    surface.fill_path(
        &Path::circle(0.0, pivot_y, 0.05 * s),
        &Paint::radial(
            0.0,
            pivot_y,
            0.05 * s,
            &[(0.0, BRASS), (1.0, BRASS_DARK)],
        ),
    );
}

fn paint_drill_bit(surface: &mut dyn DrawSurface, s: f64) {
    let half = 0.06 * s;
    surface.fill_path(
        &Path::rect(-half, 0.1 * s, half * 2.0, 0.38 * s),
        &steel_linear(-half, 0.0, half, 0.0),
    );
    surface.fill_path(
        &Path::rect(-half, -0.34 * s, half * 2.0, 0.44 * s),
        &Paint::linear(
            -half,
            0.0,
            half,
            0.0,
            &[(0.0, STEEL), (1.0, STEEL_DARK)],
        ),
    );
    surface.fill_path(
        &Path::polygon(&[(-half, -0.34 * s), (half, -0.34 * s), (0.0, -0.48 * s)]),
        &Paint::solid(STEEL_DARK),
    );

    let flute = Paint::solid(STEEL_LIGHT);
    let mut y = -0.26 * s;
    while y < 0.1 * s {
        let spiral = Path::new().move_to(-half, y).cubic_to(
            -half * 0.3,
            y - 0.02 * s,
            half * 0.3,
            y - 0.06 * s,
            half,
            y - 0.08 * s,
        );
        surface.stroke_path(&spiral, &flute, s * 0.025);
        y += 0.09 * s;
    }
}

fn paint_nail(surface: &mut dyn DrawSurface, s: f64) {
    let half = 0.035 * s;
    surface.fill_path(
        &Path::rect(-half, -0.39 * s, half * 2.0, 0.72 * s),
        &steel_linear(-half, 0.0, half, 0.0),
    );
    surface.fill_path(
        &Path::polygon(&[(-half, 0.33 * s), (half, 0.33 * s), (0.0, 0.47 * s)]),
        &steel_linear(-half, 0.0, half, 0.0),
    );
    surface.fill_path(
        &Path::rounded_rect(-0.16 * s, -0.46 * s, 0.32 * s, 0.07 * s, 0.03 * s),
        &steel_linear(0.0, -0.46 * s, 0.0, -0.39 * s),
    );

    let ring = outline();
    for i in 0..3 {
        let y = -0.34 * s + i as f64 * 0.05 * s;
        let line = Path::new().move_to(-half, y).line_to(half, y);
        surface.stroke_path(&line, &ring, s * 0.012);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Affine;
    use crate::recording::{DrawCommand, RecordingSurface};

    fn record(variant: ShapeVariant, size: f64) -> Vec<DrawCommand> {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        paint_shape(&mut surface, variant, size);
        surface.take()
    }

    #[test]
    fn test_every_variant_paints_something() {
        for variant in ShapeVariant::ALL {
            let commands = record(variant, 40.0);
            assert!(
                commands.iter().any(|c| matches!(c, DrawCommand::Fill { .. })),
                "{variant} emitted no fill"
            );
        }
    }

    #[test]
    fn test_routines_only_fill_and_stroke() {
        for variant in ShapeVariant::ALL {
            assert!(record(variant, 30.0).iter().all(DrawCommand::is_draw));
        }
    }

    #[test]
    fn test_routines_are_deterministic() {
        for variant in ShapeVariant::ALL {
            assert_eq!(record(variant, 25.0), record(variant, 25.0));
        }
    }

    #[test]
    fn test_fills_fit_in_size_box() {
        let size = 40.0;
        let bound = size / 2.0 + 1e-6;
        for variant in ShapeVariant::ALL {
            for command in record(variant, size) {
                if let DrawCommand::Fill { path, .. } = command {
                    for poly in path.flatten(&Affine::IDENTITY) {
                        for (x, y) in poly.points {
                            assert!(
                                x.abs() <= bound && y.abs() <= bound,
                                "{variant} point ({x}, {y}) outside box"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_metallic_variants_use_gradients() {
        for variant in [ShapeVariant::Nut, ShapeVariant::Gear, ShapeVariant::Bolt] {
            let has_gradient = record(variant, 30.0).iter().any(|c| {
                matches!(
                    c,
                    DrawCommand::Fill {
                        paint: Paint::Radial { .. } | Paint::Linear { .. },
                        ..
                    }
                )
            });
            assert!(has_gradient, "{variant} has no gradient fill");
        }
    }
}
