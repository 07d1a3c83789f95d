//! Per-frame rotation of the starfield decoration.
//!
//! Each frame both angles decrease in proportion to the elapsed time:
//! `x -= delta / 10`, `y -= delta / 15` (radians, delta in seconds). There is
//! no wraparound; the projection treats angles modulo 2π.

use std::time::{Duration, Instant};

/// Divisor applied to the frame delta for the X angle
pub const X_RATE_DIVISOR: f32 = 10.0;

/// Divisor applied to the frame delta for the Y angle
pub const Y_RATE_DIVISOR: f32 = 15.0;

/// Accumulated Euler angles in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    /// Advance both angles by one frame of `delta_secs` seconds.
    pub fn advance(&mut self, delta_secs: f32) {
        self.x -= delta_secs / X_RATE_DIVISOR;
        self.y -= delta_secs / Y_RATE_DIVISOR;
    }
}

/// Turns frame timestamps into rotation updates
#[derive(Debug, Clone, Default)]
pub struct RotationDriver {
    rotation: Rotation,
    last_frame: Option<Instant>,
}

impl RotationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Frame callback. The first frame after construction or [`reset`](Self::reset)
    /// has a zero delta.
    pub fn on_frame(&mut self, now: Instant) -> Rotation {
        let delta = self
            .last_frame
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_frame = Some(now);
        self.on_delta(delta)
    }

    /// Frame callback for renderers that already know the delta.
    pub fn on_delta(&mut self, delta: Duration) -> Rotation {
        self.rotation.advance(delta.as_secs_f32());
        self.rotation
    }

    /// Forget accumulated angles and the last frame (remount).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
