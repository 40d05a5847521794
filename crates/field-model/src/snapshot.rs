//! Serializable captures of a running field.

use serde::{Deserialize, Serialize};

use crate::element::{DecorativeElement, ShapeVariant};
use crate::geometry::{Point2D, ViewportSize};

/// The full state of a field at one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSnapshot {
    /// Theme name the field was built with.
    pub theme: String,
    pub viewport: ViewportSize,
    /// Ticks integrated since the last (re)population.
    pub frame: u64,
    /// Wall-clock capture time (RFC 3339).
    pub captured_at: String,
    /// Last known cursor position.
    pub cursor: Option<Point2D>,
    pub elements: Vec<DecorativeElement>,
}

impl FieldSnapshot {
    pub fn new(
        theme: impl Into<String>,
        viewport: ViewportSize,
        frame: u64,
        cursor: Option<Point2D>,
        elements: Vec<DecorativeElement>,
    ) -> Self {
        Self {
            theme: theme.into(),
            viewport,
            frame,
            captured_at: chrono::Utc::now().to_rfc3339(),
            cursor,
            elements,
        }
    }

    /// Number of elements of each variant, in catalogue declaration order.
    pub fn variant_counts(&self) -> Vec<(ShapeVariant, usize)> {
        ShapeVariant::ALL
            .iter()
            .map(|&variant| {
                let count = self.elements.iter().filter(|e| e.variant == variant).count();
                (variant, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    /// Mean element speed in pixels per tick.
    pub fn mean_speed(&self) -> f64 {
        if self.elements.is_empty() {
            return 0.0;
        }
        self.elements.iter().map(DecorativeElement::speed).sum::<f64>()
            / self.elements.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(variant: ShapeVariant, vx: f64) -> DecorativeElement {
        DecorativeElement {
            x: 1.0,
            y: 1.0,
            vx,
            vy: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            base_rotation_speed: 0.0,
            size: 20.0,
            variant,
            opacity: 0.1,
        }
    }

    #[test]
    fn test_summary_helpers() {
        let snapshot = FieldSnapshot::new(
            "hardware",
            ViewportSize::new(100.0, 100.0),
            4,
            None,
            vec![
                element(ShapeVariant::Nut, 0.1),
                element(ShapeVariant::Nut, 0.3),
                element(ShapeVariant::Screw, 0.2),
            ],
        );
        assert_eq!(
            snapshot.variant_counts(),
            vec![(ShapeVariant::Screw, 1), (ShapeVariant::Nut, 2)]
        );
        assert!((snapshot.mean_speed() - 0.2).abs() < 1e-12);
        assert!(chrono::DateTime::parse_from_rfc3339(&snapshot.captured_at).is_ok());
    }
}
