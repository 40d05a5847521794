//! The particle field: an element set bound to a viewport and a cursor.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use toolfield_common::error::ToolfieldResult;
use toolfield_field_model::element::DecorativeElement;
use toolfield_field_model::geometry::{Point2D, ViewportSize};
use toolfield_field_model::snapshot::FieldSnapshot;
use toolfield_field_model::theme::FieldTheme;

use crate::integrator::step_element;
use crate::spawn::populate;

/// A themed set of decorative elements.
///
/// Resizing discards every element and repopulates from scratch; positions
/// carry no continuity across a resize.
pub struct ParticleField {
    theme: FieldTheme,
    viewport: ViewportSize,
    elements: Vec<DecorativeElement>,
    cursor: Option<Point2D>,
    frame: u64,
    rng: Box<dyn RngCore + Send>,
}

impl ParticleField {
    /// Build a field using the given random source.
    pub fn new(
        theme: FieldTheme,
        viewport: ViewportSize,
        rng: Box<dyn RngCore + Send>,
    ) -> ToolfieldResult<Self> {
        theme.validate()?;
        let mut field = Self {
            theme,
            viewport,
            elements: Vec::new(),
            cursor: None,
            frame: 0,
            rng,
        };
        field.repopulate();
        Ok(field)
    }

    /// Build a field whose layout is fully determined by `seed`.
    pub fn seeded(theme: FieldTheme, viewport: ViewportSize, seed: u64) -> ToolfieldResult<Self> {
        Self::new(theme, viewport, Box::new(StdRng::seed_from_u64(seed)))
    }

    /// Build a field seeded from the operating system.
    pub fn from_entropy(theme: FieldTheme, viewport: ViewportSize) -> ToolfieldResult<Self> {
        Self::new(theme, viewport, Box::new(StdRng::from_os_rng()))
    }

    /// Replace the viewport and regenerate every element.
    pub fn resize(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
        self.repopulate();
    }

    /// Record the latest pointer position.
    pub fn set_cursor(&mut self, cursor: Point2D) {
        self.cursor = Some(cursor);
    }

    /// Advance every element by one tick.
    pub fn tick(&mut self) {
        let cursor = self.cursor;
        let viewport = self.viewport;
        let tuning = &self.theme.tuning;
        for element in &mut self.elements {
            step_element(element, cursor, viewport, tuning);
        }
        self.frame += 1;
    }

    pub fn elements(&self) -> &[DecorativeElement] {
        &self.elements
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn cursor(&self) -> Option<Point2D> {
        self.cursor
    }

    pub fn theme(&self) -> &FieldTheme {
        &self.theme
    }

    /// Ticks since the last (re)population.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new(
            self.theme.name.clone(),
            self.viewport,
            self.frame,
            self.cursor,
            self.elements.clone(),
        )
    }

    fn repopulate(&mut self) {
        self.elements = populate(self.viewport, &self.theme, &mut *self.rng);
        self.frame = 0;
        tracing::debug!(
            theme = %self.theme.name,
            width = self.viewport.width,
            height = self.viewport.height,
            elements = self.elements.len(),
            "Populated particle field"
        );
    }
}

impl std::fmt::Debug for ParticleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleField")
            .field("theme", &self.theme.name)
            .field("viewport", &self.viewport)
            .field("elements", &self.elements.len())
            .field("cursor", &self.cursor)
            .field("frame", &self.frame)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolfield_field_model::theme::FieldTheme;

    #[test]
    fn test_new_populates_for_viewport() {
        let field =
            ParticleField::seeded(FieldTheme::tools(), ViewportSize::new(1920.0, 1080.0), 3)
                .unwrap();
        assert_eq!(field.elements().len(), 45);
        assert_eq!(field.frame(), 0);
        assert!(field.cursor().is_none());
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        let mut theme = FieldTheme::tools();
        theme.tuning.area_per_element = 0.0;
        assert!(ParticleField::seeded(theme, ViewportSize::new(10.0, 10.0), 0).is_err());
    }

    #[test]
    fn test_resize_recomputes_count_and_resets_frame() {
        let mut field =
            ParticleField::seeded(FieldTheme::tools(), ViewportSize::new(1920.0, 1080.0), 3)
                .unwrap();
        field.tick();
        field.tick();
        assert_eq!(field.frame(), 2);

        field.resize(ViewportSize::new(400.0, 300.0));
        assert_eq!(field.elements().len(), 4);
        assert_eq!(field.frame(), 0);
        for e in field.elements() {
            assert!(e.x < 400.0 && e.y < 300.0);
        }
    }

    #[test]
    fn test_snapshot_carries_state() {
        let mut field =
            ParticleField::seeded(FieldTheme::hardware(), ViewportSize::new(900.0, 600.0), 11)
                .unwrap();
        field.set_cursor(Point2D::new(10.0, 20.0));
        field.tick();

        let snapshot = field.snapshot();
        assert_eq!(snapshot.theme, "hardware");
        assert_eq!(snapshot.frame, 1);
        assert_eq!(snapshot.cursor, Some(Point2D::new(10.0, 20.0)));
        assert_eq!(snapshot.elements.len(), field.elements().len());
    }
}
