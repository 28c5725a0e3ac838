//! Two-ended extensions of the track mapping, and the range constraint solver.
//!
//! A range slider renders two thumbs on one track. Each thumb gets its own
//! inset pair because the thumbs must never cross and must leave room for each
//! other: the host typically reserves the opposite thumb's length on the
//! facing side. [`RangeTrack`] carries that geometry and exposes per-thumb
//! [`Track`] views plus span/offset measurements for rendering the selected
//! segment.
//!
//! The solver functions [`range_with_lower`] and [`range_with_upper`] are the
//! heart of the control: given one bound's new position they recompute a valid
//! `(lower, upper)` pair under a [`Separation`] constraint. Two policies exist
//! and behave observably differently:
//!
//! - `force_adjacent = true`: the stationary bound is dragged along so the
//!   span stays inside the separation interval.
//! - `force_adjacent = false`: the stationary bound is left alone and the
//!   moving bound is clamped so the span never drops below the minimum.

use derive_setters::Setters;
use tracing::trace;

use crate::{
    bounds::{Bounds, Range, Separation},
    track::Track,
};

/// Layout-space geometry of a range-slider track.
///
/// Four insets exist because each thumb respects the track edge on its outer
/// side and the other thumb's reserved space on its inner side.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct RangeTrack {
    /// Total length available to the control.
    pub length: f32,
    /// Leading-edge inset of the lower thumb.
    pub lower_leading_inset: f32,
    /// Trailing-edge inset of the lower thumb.
    pub lower_trailing_inset: f32,
    /// Leading-edge inset of the upper thumb.
    pub upper_leading_inset: f32,
    /// Trailing-edge inset of the upper thumb.
    pub upper_trailing_inset: f32,
    /// Right-to-left layout, forwarded to the per-thumb tracks.
    pub rtl: bool,
}

impl RangeTrack {
    /// A track of the given length with no insets, left-to-right.
    pub fn new(length: f32) -> Self {
        Self {
            length,
            lower_leading_inset: 0.0,
            lower_trailing_inset: 0.0,
            upper_leading_inset: 0.0,
            upper_trailing_inset: 0.0,
            rtl: false,
        }
    }

    /// Reserves insets for two thumbs of the given length: each thumb keeps
    /// half a thumb from its outer edge and leaves a full extra thumb of room
    /// on its inner side for the other thumb.
    pub fn thumb_length(self, thumb_length: f32) -> Self {
        let half = thumb_length / 2.0;
        self.lower_leading_inset(half)
            .lower_trailing_inset(half + thumb_length)
            .upper_leading_inset(half + thumb_length)
            .upper_trailing_inset(half)
    }

    /// The lower thumb's view of the track.
    pub fn lower_track(&self) -> Track {
        Track {
            length: self.length,
            leading_inset: self.lower_leading_inset,
            trailing_inset: self.lower_trailing_inset,
            rtl: self.rtl,
        }
    }

    /// The upper thumb's view of the track.
    pub fn upper_track(&self) -> Track {
        Track {
            length: self.length,
            leading_inset: self.upper_leading_inset,
            trailing_inset: self.upper_trailing_inset,
            rtl: self.rtl,
        }
    }

    /// Distance between the mapped positions of `range.upper` and
    /// `range.lower`, floored at zero.
    ///
    /// Computed in logical orientation (ignoring `rtl`): a span length is
    /// direction-independent. Insets can momentarily produce a crossed pair of
    /// positions; the floor keeps the result usable as a render width.
    pub fn span_of(&self, range: Range, bounds: Bounds) -> f32 {
        let lower = self.lower_track().rtl(false).distance_of(range.lower, bounds);
        let upper = self.upper_track().rtl(false).distance_of(range.upper, bounds);
        (upper - lower).max(0.0)
    }

    /// Distance from the track start to the mapped position of `range.lower`,
    /// the offset of the selected segment within the overall track. Logical
    /// orientation, like [`RangeTrack::span_of`].
    pub fn offset_of(&self, range: Range, bounds: Bounds) -> f32 {
        self.lower_track().rtl(false).distance_of(range.lower, bounds)
    }
}

/// Recomputes the range after the **lower** thumb moved to `updated_lower`.
///
/// With `force_adjacent`, the upper bound is dragged along to keep
/// `separation.min <= span <= separation.max`; the lower bound is first
/// clamped so it cannot push the upper bound past `bounds.max`. Without it,
/// the upper bound stays put and the lower bound is clamped to
/// `[bounds.min, upper - separation.min]`.
///
/// The returned range always satisfies `lower <= upper` with both ends inside
/// `bounds`, and respects `separation` whenever that is achievable within
/// `bounds`.
pub fn range_with_lower(
    updated_lower: f32,
    prior: Range,
    bounds: Bounds,
    separation: Separation,
    force_adjacent: bool,
) -> Range {
    let range = if force_adjacent {
        let lower = updated_lower.clamp(bounds.min, (bounds.max - separation.min).max(bounds.min));
        let upper = prior
            .upper
            .max(lower + separation.min)
            .min(lower + separation.max)
            .min(bounds.max);
        Range { lower, upper }
    } else {
        let cap = (prior.upper - separation.min).max(bounds.min);
        Range {
            lower: updated_lower.clamp(bounds.min, cap),
            upper: prior.upper,
        }
    };
    if range.lower != updated_lower {
        trace!(
            requested = updated_lower,
            resolved = range.lower,
            force_adjacent,
            "lower bound clamped"
        );
    }
    range
}

/// Recomputes the range after the **upper** thumb moved to `updated_upper`.
///
/// Mirror of [`range_with_lower`]: with `force_adjacent` the lower bound is
/// dragged along, otherwise the upper bound is clamped to
/// `[lower + separation.min, bounds.max]`.
pub fn range_with_upper(
    updated_upper: f32,
    prior: Range,
    bounds: Bounds,
    separation: Separation,
    force_adjacent: bool,
) -> Range {
    let range = if force_adjacent {
        let upper = updated_upper.clamp((bounds.min + separation.min).min(bounds.max), bounds.max);
        let lower = prior
            .lower
            .min(upper - separation.min)
            .max(upper - separation.max)
            .max(bounds.min);
        Range { lower, upper }
    } else {
        let floor = (prior.lower + separation.min).min(bounds.max);
        Range {
            lower: prior.lower,
            upper: updated_upper.clamp(floor, bounds.max),
        }
    };
    if range.upper != updated_upper {
        trace!(
            requested = updated_upper,
            resolved = range.upper,
            force_adjacent,
            "upper bound clamped"
        );
    }
    range
}
