//! Linear value-position mapping for a single slider track.
//!
//! A [`Track`] describes the layout-space geometry a host measured for a
//! slider: the available length in points/pixels, the inset reserved at each
//! end (typically half the thumb length, so the thumb's edge rather than its
//! center respects the track boundary), and the layout direction. Given that
//! geometry, [`Track::distance_of`] and [`Track::value_at`] convert between a
//! value inside some [`Bounds`] and a distance from the track's leading edge.
//!
//! Both directions are total: a track too small for its insets fails soft
//! (distance `0.0`, value `bounds.min`) instead of dividing by zero.

use derive_setters::Setters;

use crate::{bounds::Bounds, quantize::quantize};

/// Layout-space geometry of a slider track.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct Track {
    /// Total length available to the control, from the host's layout pass.
    pub length: f32,
    /// Space reserved at the leading edge (start of the track).
    pub leading_inset: f32,
    /// Space reserved at the trailing edge (end of the track).
    pub trailing_inset: f32,
    /// Right-to-left layout: `bounds.min` renders at the trailing edge.
    pub rtl: bool,
}

impl Track {
    /// A track of the given length with no insets, left-to-right.
    pub fn new(length: f32) -> Self {
        Self {
            length,
            leading_inset: 0.0,
            trailing_inset: 0.0,
            rtl: false,
        }
    }

    /// Sets both insets to half the given thumb length, the usual way hosts
    /// keep a thumb's edges inside the track.
    pub fn thumb_length(self, thumb_length: f32) -> Self {
        self.leading_inset(thumb_length / 2.0)
            .trailing_inset(thumb_length / 2.0)
    }

    /// Length left for the thumb center to travel once insets are reserved.
    /// Not positive for degenerate tracks.
    pub fn travel(&self) -> f32 {
        self.length - self.leading_inset - self.trailing_inset
    }

    /// Maps `value` to a distance from the leading edge.
    ///
    /// `bounds.min` maps exactly to `leading_inset` and `bounds.max` exactly
    /// to `length - trailing_inset` (mirrored under `rtl`); the mapping is
    /// linear and monotonic in between. Values outside `bounds` are clamped.
    /// A track with no travel returns `0.0`.
    pub fn distance_of(&self, value: f32, bounds: Bounds) -> f32 {
        if self.travel() <= 0.0 {
            return 0.0;
        }
        let mut fraction = bounds.fraction_of(value);
        if self.rtl {
            fraction = 1.0 - fraction;
        }
        self.leading_inset * (1.0 - fraction) + (self.length - self.trailing_inset) * fraction
    }

    /// Maps a distance from the leading edge back to a stepped value.
    ///
    /// Exact inverse of [`Track::distance_of`] up to quantization: for any
    /// `value` in `bounds`, `value_at(distance_of(value))` equals
    /// `quantize(value, bounds, step)`. Distances outside the inset interval
    /// clamp to the nearer end. A track with no travel returns `bounds.min`.
    pub fn value_at(&self, distance: f32, bounds: Bounds, step: f32) -> f32 {
        let travel = self.travel();
        if travel <= 0.0 {
            return bounds.min;
        }
        let mut fraction = ((distance - self.leading_inset) / travel).clamp(0.0, 1.0);
        if self.rtl {
            fraction = 1.0 - fraction;
        }
        quantize(bounds.lerp(fraction), bounds, step)
    }
}
