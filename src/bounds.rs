//! Value-domain primitives for slider controls.
//!
//! This module provides the numeric types the rest of the crate maps between
//! layout space and value space:
//!
//! - [`Bounds`] - the closed interval a value must stay within
//! - [`Range`] - an ordered `(lower, upper)` pair of bounds inside a [`Bounds`]
//! - [`Separation`] - an optional min/max constraint on `upper - lower`
//!
//! All types are plain `Copy` data. The math in this crate is total: values
//! outside bounds are clamped, never rejected, and degenerate bounds
//! (`min == max`) collapse to `min` instead of dividing by zero. Inverted
//! bounds (`min > max`) are a caller precondition; the checked `try_new`
//! constructors exist for hosts that want to validate configuration at the
//! boundary instead of upholding it by construction.

use thiserror::Error;

/// Errors produced by the checked configuration constructors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// `Bounds::try_new` was given `min > max`.
    #[error("inverted bounds: min {min} > max {max}")]
    InvertedBounds { min: f32, max: f32 },
    /// `Separation::try_new` was given `min > max`.
    #[error("inverted separation: min {min} > max {max}")]
    InvertedSeparation { min: f32, max: f32 },
    /// A separation distance was negative.
    #[error("negative separation distance: {0}")]
    NegativeSeparation(f32),
    /// A step was negative, zero, or not finite.
    #[error("step must be finite and positive, got {0}")]
    InvalidStep(f32),
}

/// The closed numeric interval a value or range must stay within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    /// The unit interval `0.0..=1.0`, the value domain most UI sliders use.
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// Creates bounds from an ordered pair. `min <= max` is a caller
    /// precondition.
    pub fn new(min: f32, max: f32) -> Self {
        debug_assert!(min <= max, "inverted bounds: {min} > {max}");
        Self { min, max }
    }

    /// Creates bounds, rejecting an inverted pair.
    pub fn try_new(min: f32, max: f32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Length of the interval. Zero for degenerate bounds.
    pub fn length(&self) -> f32 {
        self.max - self.min
    }

    /// Clamps `value` into the interval.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if `value` lies within the interval.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Fractional position of `value` within the interval: `0.0` at `min`,
    /// `1.0` at `max`, clamped. Degenerate bounds map everything to `0.0`.
    pub fn fraction_of(&self, value: f32) -> f32 {
        let length = self.length();
        if length <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / length).clamp(0.0, 1.0)
    }

    /// Linear interpolation: `0.0` maps to `min`, `1.0` to `max`.
    pub fn lerp(&self, fraction: f32) -> f32 {
        self.min + fraction * self.length()
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIT
    }
}

/// An ordered pair of bounds representing a selected sub-interval.
///
/// Invariant: `lower <= upper`. The constraint solver in [`crate::range`]
/// guarantees it on every return; `new` asserts it in debug builds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub lower: f32,
    pub upper: f32,
}

impl Range {
    /// Creates a range. `lower <= upper` is a caller precondition.
    pub fn new(lower: f32, upper: f32) -> Self {
        debug_assert!(lower <= upper, "inverted range: {lower} > {upper}");
        Self { lower, upper }
    }

    /// `upper - lower` in value space.
    pub fn span(&self) -> f32 {
        self.upper - self.lower
    }

    /// Clamps both ends into `bounds`, preserving order.
    pub fn clamped_to(&self, bounds: Bounds) -> Self {
        let lower = bounds.clamp(self.lower);
        Self {
            lower,
            upper: bounds.clamp(self.upper).max(lower),
        }
    }
}

/// Minimum and maximum allowed gap between a range's lower and upper bound.
///
/// The default is unconstrained: `0.0..=infinity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    pub min: f32,
    pub max: f32,
}

impl Separation {
    /// Creates a separation interval. Caller preconditions: `0 <= min <= max`.
    pub fn new(min: f32, max: f32) -> Self {
        debug_assert!(min >= 0.0, "negative separation: {min}");
        debug_assert!(min <= max, "inverted separation: {min} > {max}");
        Self { min, max }
    }

    /// Creates a separation interval, rejecting negative or inverted input.
    pub fn try_new(min: f32, max: f32) -> Result<Self, ConfigError> {
        if min < 0.0 {
            return Err(ConfigError::NegativeSeparation(min));
        }
        if min > max {
            return Err(ConfigError::InvertedSeparation { min, max });
        }
        Ok(Self { min, max })
    }

    /// A fixed gap: the range span is pinned to exactly `distance` wherever
    /// bounds permit.
    pub fn exact(distance: f32) -> Self {
        Self::new(distance, distance)
    }

    /// Only a minimum gap, no upper limit.
    pub fn at_least(distance: f32) -> Self {
        Self::new(distance, f32::INFINITY)
    }
}

impl Default for Separation {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f32::INFINITY,
        }
    }
}

/// Validates a quantization step for hosts that want configuration errors
/// instead of the crate's defensive "no stepping" fallback.
pub fn validate_step(step: f32) -> Result<f32, ConfigError> {
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(ConfigError::InvalidStep(step))
    }
}
