//! The synchronous animation core.

use toolfield_common::clock::{FrameClock, FrameStats};
use toolfield_common::config::AnimationDefaults;
use toolfield_common::error::{ToolfieldError, ToolfieldResult};
use toolfield_field_core::ParticleField;
use toolfield_field_model::event::HostEvent;
use toolfield_field_model::geometry::{Point2D, ViewportSize};
use toolfield_field_model::theme::FieldTheme;
use toolfield_render_engine::compositor::render_frame;
use toolfield_render_engine::surface::DrawSurface;

/// What a mounted animation needs besides its surface.
#[derive(Debug, Clone)]
pub struct AnimationOptions {
    pub theme: FieldTheme,

    /// Target frame rate for the live loop.
    pub fps: u32,

    /// Fixed layout seed; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl AnimationOptions {
    /// Options from the configured defaults.
    pub fn from_defaults(defaults: &AnimationDefaults) -> ToolfieldResult<Self> {
        if defaults.fps == 0 {
            return Err(ToolfieldError::config("fps must be positive"));
        }
        Ok(Self {
            theme: FieldTheme::by_name(&defaults.theme)?,
            fps: defaults.fps,
            seed: defaults.seed,
        })
    }

    fn build_field(&self, viewport: ViewportSize) -> ToolfieldResult<ParticleField> {
        match self.seed {
            Some(seed) => ParticleField::seeded(self.theme.clone(), viewport, seed),
            None => ParticleField::from_entropy(self.theme.clone(), viewport),
        }
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            theme: FieldTheme::default(),
            fps: 60,
            seed: None,
        }
    }
}

/// Lifecycle of a mounted animation. Unmounting is the only exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Mounted, nothing painted yet.
    Initializing,
    /// At least one frame painted.
    Animating,
}

/// A particle field bound to the surface it paints on.
pub struct Animator<S> {
    surface: S,
    field: ParticleField,
    state: AnimationState,
    clock: FrameClock,
}

impl<S: DrawSurface> Animator<S> {
    /// Size the surface to the viewport and populate a field for it.
    pub fn new(
        mut surface: S,
        viewport: ViewportSize,
        options: &AnimationOptions,
    ) -> ToolfieldResult<Self> {
        let field = options.build_field(viewport)?;
        surface.resize(viewport.width, viewport.height);
        Ok(Self::with_field(surface, field))
    }

    /// Wrap an already-built field. The surface is used as-is.
    pub fn with_field(surface: S, field: ParticleField) -> Self {
        Self {
            surface,
            field,
            state: AnimationState::Initializing,
            clock: FrameClock::start(),
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.field.set_cursor(Point2D::new(x, y));
    }

    /// Resize the surface and rebuild the element set from scratch.
    pub fn resized(&mut self, viewport: ViewportSize) {
        self.surface.resize(viewport.width, viewport.height);
        self.field.resize(viewport);
    }

    pub fn apply(&mut self, event: HostEvent) {
        match event {
            HostEvent::PointerMove { x, y } => self.pointer_moved(x, y),
            HostEvent::Resize { width, height } => {
                self.resized(ViewportSize::new(width, height))
            }
        }
    }

    /// Integrate one tick and repaint the whole surface.
    pub fn frame(&mut self) {
        self.field.tick();
        render_frame(&mut self.surface, self.field.elements());
        self.clock.record_frame();
        if self.state == AnimationState::Initializing {
            self.state = AnimationState::Animating;
            tracing::debug!(
                elements = self.field.elements().len(),
                "First background frame painted"
            );
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn frames_drawn(&self) -> u64 {
        self.clock.frames()
    }

    pub fn stats(&self) -> FrameStats {
        self.clock.stats()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolfield_render_engine::recording::{DrawCommand, RecordingSurface};

    fn options() -> AnimationOptions {
        AnimationOptions {
            seed: Some(17),
            ..AnimationOptions::default()
        }
    }

    #[test]
    fn test_state_transitions_on_first_frame() {
        let mut animator = Animator::new(
            RecordingSurface::new(0.0, 0.0),
            ViewportSize::new(800.0, 600.0),
            &options(),
        )
        .unwrap();
        assert_eq!(animator.state(), AnimationState::Initializing);
        assert_eq!(animator.surface().size(), (800.0, 600.0));

        animator.frame();
        assert_eq!(animator.state(), AnimationState::Animating);
        animator.frame();
        assert_eq!(animator.state(), AnimationState::Animating);
        assert_eq!(animator.frames_drawn(), 2);
    }

    #[test]
    fn test_each_frame_clears_once() {
        let mut animator = Animator::new(
            RecordingSurface::new(0.0, 0.0),
            ViewportSize::new(800.0, 600.0),
            &options(),
        )
        .unwrap();
        for _ in 0..3 {
            animator.frame();
        }
        let surface = animator.into_surface();
        assert_eq!(surface.count(|c| *c == DrawCommand::Clear), 3);
    }

    #[test]
    fn test_resize_event_rebuilds_field_and_surface() {
        let mut animator = Animator::new(
            RecordingSurface::new(0.0, 0.0),
            ViewportSize::new(1920.0, 1080.0),
            &options(),
        )
        .unwrap();
        assert_eq!(animator.field().elements().len(), 45);

        animator.apply(HostEvent::resize(400.0, 300.0));
        assert_eq!(animator.field().elements().len(), 4);
        assert_eq!(animator.surface().size(), (400.0, 300.0));
    }

    #[test]
    fn test_pointer_event_sets_cursor() {
        let mut animator = Animator::new(
            RecordingSurface::new(0.0, 0.0),
            ViewportSize::new(640.0, 480.0),
            &options(),
        )
        .unwrap();
        animator.apply(HostEvent::pointer(12.0, 34.0));
        assert_eq!(animator.field().cursor(), Some(Point2D::new(12.0, 34.0)));
    }

    #[test]
    fn test_options_from_defaults() {
        let defaults = AnimationDefaults {
            theme: "hardware".to_string(),
            fps: 30,
            seed: Some(1),
        };
        let options = AnimationOptions::from_defaults(&defaults).unwrap();
        assert_eq!(options.theme.name, "hardware");
        assert_eq!(options.fps, 30);

        let bad = AnimationDefaults {
            theme: "plumbing".to_string(),
            ..defaults
        };
        assert!(AnimationOptions::from_defaults(&bad).is_err());
    }
}
