//! Decorative elements and the closed shape catalogue.

use serde::{Deserialize, Serialize};

/// Every icon shape a decorative element can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeVariant {
    Screw,
    Bolt,
    Nut,
    Washer,
    Gear,
    Wrench,
    Hammer,
    Screwdriver,
    Pliers,
    DrillBit,
    Nail,
}

impl ShapeVariant {
    /// All variants in declaration order.
    pub const ALL: [ShapeVariant; 11] = [
        ShapeVariant::Screw,
        ShapeVariant::Bolt,
        ShapeVariant::Nut,
        ShapeVariant::Washer,
        ShapeVariant::Gear,
        ShapeVariant::Wrench,
        ShapeVariant::Hammer,
        ShapeVariant::Screwdriver,
        ShapeVariant::Pliers,
        ShapeVariant::DrillBit,
        ShapeVariant::Nail,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeVariant::Screw => "screw",
            ShapeVariant::Bolt => "bolt",
            ShapeVariant::Nut => "nut",
            ShapeVariant::Washer => "washer",
            ShapeVariant::Gear => "gear",
            ShapeVariant::Wrench => "wrench",
            ShapeVariant::Hammer => "hammer",
            ShapeVariant::Screwdriver => "screwdriver",
            ShapeVariant::Pliers => "pliers",
            ShapeVariant::DrillBit => "drill_bit",
            ShapeVariant::Nail => "nail",
        }
    }
}

impl std::fmt::Display for ShapeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single decorative sprite drifting behind page content.
///
/// Elements have no identity beyond their index in the field and never
/// interact with each other, only with the shared cursor position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorativeElement {
    /// Centre X in viewport pixels.
    pub x: f64,
    /// Centre Y in viewport pixels.
    pub y: f64,
    /// Horizontal velocity in pixels per tick.
    pub vx: f64,
    /// Vertical velocity in pixels per tick.
    pub vy: f64,
    /// Current rotation in radians.
    pub rotation: f64,
    /// Current spin in radians per tick.
    pub rotation_speed: f64,
    /// Spin assigned at creation; cursor perturbations decay back to it.
    pub base_rotation_speed: f64,
    /// Nominal icon size in pixels. Also the wraparound margin.
    pub size: f64,
    /// Which icon to paint.
    pub variant: ShapeVariant,
    /// Rendering alpha in `[0, 1]`.
    pub opacity: f64,
}

impl DecorativeElement {
    /// Magnitude of the velocity vector.
    pub fn speed(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_serde_names() {
        let json = serde_json::to_string(&ShapeVariant::DrillBit).unwrap();
        assert_eq!(json, "\"drill_bit\"");
        for variant in ShapeVariant::ALL {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json.trim_matches('"'), variant.as_str());
        }
    }

    #[test]
    fn test_speed() {
        let element = DecorativeElement {
            x: 0.0,
            y: 0.0,
            vx: 0.03,
            vy: 0.04,
            rotation: 0.0,
            rotation_speed: 0.0,
            base_rotation_speed: 0.0,
            size: 20.0,
            variant: ShapeVariant::Nut,
            opacity: 0.1,
        };
        assert!((element.speed() - 0.05).abs() < 1e-12);
    }
}
