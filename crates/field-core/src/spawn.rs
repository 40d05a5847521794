//! Field population.

use rand::Rng;
use toolfield_field_model::element::DecorativeElement;
use toolfield_field_model::geometry::ViewportSize;
use toolfield_field_model::theme::{FieldTheme, FieldTuning, ValueRange};

/// How many elements a viewport holds: `min(cap, floor(area / divisor))`.
pub fn element_count(viewport: ViewportSize, tuning: &FieldTuning) -> usize {
    let by_area = (viewport.area() / tuning.area_per_element).floor();
    if !(by_area >= 0.0) {
        return 0;
    }
    (by_area as usize).min(tuning.max_elements)
}

/// Create a fresh element set for the viewport.
///
/// Every element is drawn independently: uniform position inside the
/// viewport, small symmetric velocity and spin, size and opacity from the
/// theme's ranges, and a variant chosen uniformly from the catalogue.
pub fn populate<R: Rng + ?Sized>(
    viewport: ViewportSize,
    theme: &FieldTheme,
    rng: &mut R,
) -> Vec<DecorativeElement> {
    if theme.catalogue.is_empty() {
        return Vec::new();
    }

    let tuning = &theme.tuning;
    let count = element_count(viewport, tuning);

    (0..count)
        .map(|_| {
            let rotation_speed = symmetric(rng, tuning.max_rotation_speed);
            DecorativeElement {
                x: rng.random::<f64>() * viewport.width,
                y: rng.random::<f64>() * viewport.height,
                vx: symmetric(rng, tuning.max_initial_speed),
                vy: symmetric(rng, tuning.max_initial_speed),
                rotation: rng.random::<f64>() * std::f64::consts::TAU,
                rotation_speed,
                base_rotation_speed: rotation_speed,
                size: sample(rng, tuning.size),
                variant: theme.catalogue[rng.random_range(0..theme.catalogue.len())],
                opacity: sample(rng, tuning.opacity),
            }
        })
        .collect()
}

/// Uniform in `[-bound, bound]`.
fn symmetric<R: Rng + ?Sized>(rng: &mut R, bound: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * 2.0 * bound
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: ValueRange) -> f64 {
    range.min + rng.random::<f64>() * (range.max - range.min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_count_large_viewport_is_capped() {
        let tuning = FieldTheme::tools().tuning;
        assert_eq!(element_count(ViewportSize::new(1920.0, 1080.0), &tuning), 45);
    }

    #[test]
    fn test_count_small_viewport_scales_down() {
        let tuning = FieldTheme::tools().tuning;
        assert_eq!(element_count(ViewportSize::new(400.0, 300.0), &tuning), 4);
    }

    #[test]
    fn test_count_degenerate_viewport_is_zero() {
        let tuning = FieldTheme::hardware().tuning;
        assert_eq!(element_count(ViewportSize::new(0.0, 900.0), &tuning), 0);
        assert_eq!(element_count(ViewportSize::new(-50.0, 900.0), &tuning), 0);
        assert_eq!(element_count(ViewportSize::new(f64::NAN, 900.0), &tuning), 0);
    }

    #[test]
    fn test_populate_respects_theme_ranges() {
        let theme = FieldTheme::hardware();
        let viewport = ViewportSize::new(1280.0, 800.0);
        let mut rng = StdRng::seed_from_u64(42);
        let elements = populate(viewport, &theme, &mut rng);

        assert_eq!(elements.len(), 34);
        for e in &elements {
            assert!(e.x >= 0.0 && e.x < viewport.width);
            assert!(e.y >= 0.0 && e.y < viewport.height);
            assert!(e.vx.abs() <= theme.tuning.max_initial_speed);
            assert!(e.vy.abs() <= theme.tuning.max_initial_speed);
            assert!(e.rotation_speed.abs() <= theme.tuning.max_rotation_speed);
            assert_eq!(e.rotation_speed, e.base_rotation_speed);
            assert!(theme.tuning.size.contains(e.size));
            assert!(theme.tuning.opacity.contains(e.opacity));
            assert!(theme.catalogue.contains(&e.variant));
        }
    }

    #[test]
    fn test_populate_is_reproducible_from_seed() {
        let theme = FieldTheme::tools();
        let viewport = ViewportSize::new(1024.0, 768.0);
        let a = populate(viewport, &theme, &mut StdRng::seed_from_u64(9));
        let b = populate(viewport, &theme, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_populate_empty_catalogue() {
        let mut theme = FieldTheme::tools();
        theme.catalogue.clear();
        let elements = populate(
            ViewportSize::new(1920.0, 1080.0),
            &theme,
            &mut StdRng::seed_from_u64(1),
        );
        assert!(elements.is_empty());
    }
}
