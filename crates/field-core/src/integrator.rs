//! Per-frame integration of a single element.
//!
//! One tick applies, in order: cursor repulsion (or spin relaxation when
//! the cursor is out of range), velocity damping, pose integration, and
//! edge wraparound. Elements never interact with each other, so a field
//! tick is a plain loop over its elements.

use toolfield_field_model::element::DecorativeElement;
use toolfield_field_model::geometry::{Point2D, ViewportSize};
use toolfield_field_model::theme::FieldTuning;

/// Velocity impulse applied to an element by the cursor this tick.
///
/// Returns `None` when no cursor is known, the cursor is outside the
/// repulsion radius, or sits exactly on the element's centre.
pub fn repulsion(
    element: &DecorativeElement,
    cursor: Option<Point2D>,
    tuning: &FieldTuning,
) -> Option<(f64, f64)> {
    let cursor = cursor?;
    let dx = element.x - cursor.x;
    let dy = element.y - cursor.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance <= 0.0 || distance >= tuning.repulsion_radius {
        return None;
    }

    let force = (tuning.repulsion_radius - distance) / tuning.force_divisor;
    Some((dx / distance * force, dy / distance * force))
}

/// Advance one element by one tick.
pub fn step_element(
    element: &mut DecorativeElement,
    cursor: Option<Point2D>,
    viewport: ViewportSize,
    tuning: &FieldTuning,
) {
    match repulsion(element, cursor, tuning) {
        Some((fx, fy)) => {
            element.vx += fx;
            element.vy += fy;
            element.rotation_speed += (fx * fx + fy * fy).sqrt() * tuning.spin_gain;
        }
        None => {
            let excess = element.rotation_speed - element.base_rotation_speed;
            element.rotation_speed = element.base_rotation_speed + excess * tuning.spin_decay;
        }
    }

    element.vx *= tuning.velocity_damping;
    element.vy *= tuning.velocity_damping;

    element.x += element.vx;
    element.y += element.vy;
    element.rotation += element.rotation_speed;

    wrap(element, viewport);
}

/// Move elements that drifted past an edge (plus their own size) to the
/// opposite edge.
fn wrap(element: &mut DecorativeElement, viewport: ViewportSize) {
    let margin = element.size;

    if element.x < -margin {
        element.x = viewport.width + margin;
    } else if element.x > viewport.width + margin {
        element.x = -margin;
    }

    if element.y < -margin {
        element.y = viewport.height + margin;
    } else if element.y > viewport.height + margin {
        element.y = -margin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolfield_field_model::element::ShapeVariant;
    use toolfield_field_model::theme::FieldTheme;

    fn element_at(x: f64, y: f64) -> DecorativeElement {
        DecorativeElement {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            rotation: 0.0,
            rotation_speed: 0.002,
            base_rotation_speed: 0.002,
            size: 30.0,
            variant: ShapeVariant::Gear,
            opacity: 0.1,
        }
    }

    #[test]
    fn test_repulsion_magnitude() {
        let tuning = FieldTheme::tools().tuning;
        let e = element_at(100.0, 100.0);
        let (fx, fy) = repulsion(&e, Some(Point2D::new(60.0, 100.0)), &tuning).unwrap();
        // distance 40, radius 120, divisor 1000
        assert!((fx - 0.08).abs() < 1e-12);
        assert_eq!(fy, 0.0);
    }

    #[test]
    fn test_no_repulsion_outside_radius_or_on_centre() {
        let tuning = FieldTheme::tools().tuning;
        let e = element_at(100.0, 100.0);
        assert!(repulsion(&e, Some(Point2D::new(300.0, 100.0)), &tuning).is_none());
        assert!(repulsion(&e, Some(Point2D::new(100.0, 100.0)), &tuning).is_none());
        assert!(repulsion(&e, None, &tuning).is_none());
    }

    #[test]
    fn test_step_pushes_away_and_spins_up() {
        let tuning = FieldTheme::tools().tuning;
        let viewport = ViewportSize::new(800.0, 600.0);
        let mut e = element_at(400.0, 300.0);
        step_element(&mut e, Some(Point2D::new(420.0, 320.0)), viewport, &tuning);

        assert!(e.vx < 0.0 && e.vy < 0.0);
        assert!(e.x < 400.0 && e.y < 300.0);
        assert!(e.rotation_speed > e.base_rotation_speed);
    }

    #[test]
    fn test_spin_relaxes_toward_base() {
        let tuning = FieldTheme::tools().tuning;
        let viewport = ViewportSize::new(800.0, 600.0);
        let mut e = element_at(400.0, 300.0);
        e.rotation_speed = 0.1;

        let mut previous_excess = e.rotation_speed - e.base_rotation_speed;
        for _ in 0..50 {
            step_element(&mut e, None, viewport, &tuning);
            let excess = e.rotation_speed - e.base_rotation_speed;
            assert!(excess < previous_excess);
            previous_excess = excess;
        }
        assert!(previous_excess < 0.1 * 0.95f64.powi(49));
    }

    #[test]
    fn test_damping() {
        let tuning = FieldTheme::tools().tuning;
        let mut e = element_at(400.0, 300.0);
        e.vx = 0.1;
        step_element(&mut e, None, ViewportSize::new(800.0, 600.0), &tuning);
        assert!((e.vx - 0.0998).abs() < 1e-12);
        assert!((e.x - 400.0998).abs() < 1e-9);
    }

    #[test]
    fn test_wraps_to_opposite_edge() {
        let tuning = FieldTheme::tools().tuning;
        let viewport = ViewportSize::new(800.0, 600.0);

        let mut e = element_at(-30.0, 300.0);
        e.vx = -0.05;
        step_element(&mut e, None, viewport, &tuning);
        assert_eq!(e.x, 830.0);

        let mut e = element_at(400.0, 630.0);
        e.vy = 0.05;
        step_element(&mut e, None, viewport, &tuning);
        assert_eq!(e.y, -30.0);
    }
}
