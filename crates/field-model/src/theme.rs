//! Background themes: a shape catalogue plus the constants that tune the
//! field's density and physics.
//!
//! The tool-themed and hardware-themed backgrounds share one engine and
//! differ only in the values defined here.

use serde::{Deserialize, Serialize};
use toolfield_common::error::{ToolfieldError, ToolfieldResult};

use crate::element::ShapeVariant;

/// A closed interval `[min, max]` sampled uniformly at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Density and physics constants for a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTuning {
    /// Upper bound on the number of elements.
    pub max_elements: usize,
    /// Square pixels of viewport per element.
    pub area_per_element: f64,
    /// Cursor distance below which elements are pushed away.
    pub repulsion_radius: f64,
    /// Divides `(radius - distance)` to give the per-tick impulse.
    pub force_divisor: f64,
    /// Multiplier applied to velocity every tick.
    pub velocity_damping: f64,
    /// Per-tick retention of a perturbed spin's excess over its base.
    pub spin_decay: f64,
    /// Spin added per unit of repulsive impulse.
    pub spin_gain: f64,
    /// Bound on each initial velocity component.
    pub max_initial_speed: f64,
    /// Bound on the initial spin magnitude.
    pub max_rotation_speed: f64,
    pub size: ValueRange,
    pub opacity: ValueRange,
}

impl FieldTuning {
    /// Reject tunings the integrator cannot run with.
    pub fn validate(&self) -> ToolfieldResult<()> {
        if !(self.area_per_element > 0.0) {
            return Err(ToolfieldError::config("area_per_element must be positive"));
        }
        if !(self.repulsion_radius > 0.0) {
            return Err(ToolfieldError::config("repulsion_radius must be positive"));
        }
        if !(self.force_divisor > 0.0) {
            return Err(ToolfieldError::config("force_divisor must be positive"));
        }
        if !(self.velocity_damping > 0.0 && self.velocity_damping <= 1.0) {
            return Err(ToolfieldError::config(
                "velocity_damping must be in (0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.spin_decay) {
            return Err(ToolfieldError::config("spin_decay must be in [0, 1]"));
        }
        if self.max_initial_speed < 0.0 || self.max_rotation_speed < 0.0 {
            return Err(ToolfieldError::config("speed bounds must not be negative"));
        }
        if !self.size.is_valid() || self.size.min <= 0.0 {
            return Err(ToolfieldError::config("size range must be positive and ordered"));
        }
        if !self.opacity.is_valid() || self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(ToolfieldError::config("opacity range must lie within [0, 1]"));
        }
        Ok(())
    }
}

/// A named background: which shapes appear and how they move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTheme {
    pub name: String,
    pub catalogue: Vec<ShapeVariant>,
    pub tuning: FieldTuning,
}

impl FieldTheme {
    /// Hand tools drifting behind the services and portfolio pages.
    pub fn tools() -> Self {
        Self {
            name: "tools".to_string(),
            catalogue: vec![
                ShapeVariant::Wrench,
                ShapeVariant::Hammer,
                ShapeVariant::Screwdriver,
                ShapeVariant::Pliers,
                ShapeVariant::DrillBit,
                ShapeVariant::Gear,
            ],
            tuning: FieldTuning {
                max_elements: 45,
                area_per_element: 25_000.0,
                repulsion_radius: 120.0,
                force_divisor: 1_000.0,
                velocity_damping: 0.998,
                spin_decay: 0.95,
                spin_gain: 0.02,
                max_initial_speed: 0.1,
                max_rotation_speed: 0.005,
                size: ValueRange::new(20.0, 45.0),
                opacity: ValueRange::new(0.08, 0.2),
            },
        }
    }

    /// Fasteners and small hardware behind the home and about pages.
    pub fn hardware() -> Self {
        Self {
            name: "hardware".to_string(),
            catalogue: vec![
                ShapeVariant::Screw,
                ShapeVariant::Bolt,
                ShapeVariant::Nut,
                ShapeVariant::Washer,
                ShapeVariant::Nail,
                ShapeVariant::Gear,
            ],
            tuning: FieldTuning {
                max_elements: 35,
                area_per_element: 30_000.0,
                repulsion_radius: 100.0,
                force_divisor: 800.0,
                velocity_damping: 0.998,
                spin_decay: 0.95,
                spin_gain: 0.02,
                max_initial_speed: 0.1,
                max_rotation_speed: 0.008,
                size: ValueRange::new(15.0, 35.0),
                opacity: ValueRange::new(0.06, 0.16),
            },
        }
    }

    /// All built-in themes.
    pub fn builtin() -> Vec<FieldTheme> {
        vec![Self::tools(), Self::hardware()]
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> ToolfieldResult<FieldTheme> {
        Self::builtin()
            .into_iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                ToolfieldError::config(format!("Unknown theme: {name}. Use: tools, hardware"))
            })
    }

    pub fn validate(&self) -> ToolfieldResult<()> {
        if self.catalogue.is_empty() {
            return Err(ToolfieldError::field(format!(
                "theme '{}' has an empty shape catalogue",
                self.name
            )));
        }
        self.tuning.validate()
    }
}

impl Default for FieldTheme {
    fn default() -> Self {
        Self::tools()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_are_valid() {
        for theme in FieldTheme::builtin() {
            theme.validate().unwrap();
        }
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(FieldTheme::by_name("Hardware").unwrap().tuning.max_elements, 35);
        assert!(FieldTheme::by_name("plumbing").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_tuning() {
        let mut theme = FieldTheme::tools();
        theme.tuning.velocity_damping = 1.5;
        assert!(theme.validate().is_err());

        let mut theme = FieldTheme::hardware();
        theme.tuning.opacity = ValueRange::new(0.5, 1.2);
        assert!(theme.validate().is_err());

        let mut theme = FieldTheme::tools();
        theme.catalogue.clear();
        assert!(matches!(
            theme.validate(),
            Err(ToolfieldError::Field { .. })
        ));
    }
}
