//! Frame clock and pacing utilities for the animation loop.
//!
//! The live loop is anchored to the instant the animation was mounted.
//! This module provides utilities for:
//! - Converting a target frame rate to a frame interval
//! - Counting frames and measuring the achieved frame rate
//! - Throttling ticks against a nanosecond timestamp stream

use std::time::{Duration, Instant};

/// Convert a target frame rate to the interval between frames.
///
/// A rate of zero is treated as one frame per second.
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / fps.max(1) as u64)
}

/// Counts frames since mount and reports the achieved rate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// The instant the animation was mounted.
    epoch: Instant,

    /// Frames painted since mount.
    frames: u64,
}

impl FrameClock {
    /// Create a clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            frames: 0,
        }
    }

    /// Record one painted frame.
    pub fn record_frame(&mut self) {
        self.frames += 1;
    }

    /// Frames painted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seconds elapsed since mount.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Average frames per second since mount.
    pub fn achieved_fps(&self) -> f64 {
        let secs = self.elapsed_secs();
        if secs <= f64::EPSILON {
            return 0.0;
        }
        self.frames as f64 / secs
    }

    /// Summary of the clock at this moment.
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            frames: self.frames,
            elapsed_secs: self.elapsed_secs(),
            achieved_fps: self.achieved_fps(),
        }
    }
}

/// Frame statistics reported when an animation is torn down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Frames painted.
    pub frames: u64,
    /// Wall time the animation was mounted.
    pub elapsed_secs: f64,
    /// Average frame rate over the mount.
    pub achieved_fps: f64,
}

/// Frame rate controller for timestamp-driven ticking.
#[derive(Debug)]
pub struct RateController {
    target_interval_ns: u64,
    last_tick_ns: Option<u64>,
}

impl RateController {
    /// Create a controller targeting the given Hz rate.
    pub fn new(target_hz: u32) -> Self {
        Self {
            target_interval_ns: frame_interval(target_hz).as_nanos() as u64,
            last_tick_ns: None,
        }
    }

    /// Check if enough time has passed for the next tick.
    /// Returns true and updates internal state if ready.
    /// The first call always returns true.
    pub fn should_tick(&mut self, current_ns: u64) -> bool {
        match self.last_tick_ns {
            None => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            Some(last) if current_ns >= last + self.target_interval_ns => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(50), Duration::from_millis(20));
        assert_eq!(frame_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn test_frame_clock_counts() {
        let mut clock = FrameClock::start();
        assert_eq!(clock.frames(), 0);
        clock.record_frame();
        clock.record_frame();
        let stats = clock.stats();
        assert_eq!(stats.frames, 2);
        assert!(stats.elapsed_secs < 1.0);
    }

    #[test]
    fn test_rate_controller() {
        let mut ctrl = RateController::new(60);
        assert!(ctrl.should_tick(0)); // first tick always fires
        assert!(!ctrl.should_tick(1_000_000)); // 1ms later, too soon
        assert!(ctrl.should_tick(17_000_000)); // ~17ms later, should fire (60Hz ~ 16.67ms)
    }
}
