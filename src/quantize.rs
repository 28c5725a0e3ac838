//! Step-rounding and clamping of raw values.

use crate::bounds::Bounds;

/// Upper limit on the number of entries [`tick_values`] will produce, so a
/// tiny step against wide bounds cannot allocate unbounded memory.
pub const MAX_TICKS: usize = 1024;

/// Snaps `value` to the nearest multiple of `step`, then clamps it into
/// `bounds`.
///
/// A step that is zero, negative, or non-finite means "no stepping": the value
/// is clamped and returned as-is. This is the crate-wide policy for invalid
/// steps; no call site divides by a step without this guard.
pub fn quantize(value: f32, bounds: Bounds, step: f32) -> f32 {
    if !step.is_finite() || step <= 0.0 {
        return bounds.clamp(value);
    }
    bounds.clamp((value / step).round() * step)
}

/// The stepped values inside `bounds`, in ascending order, for hosts that
/// render tick marks.
///
/// Ticks sit on the same grid [`quantize`] snaps to (multiples of `step`, not
/// anchored at `bounds.min`). An invalid step yields no ticks, matching the
/// continuous behavior of [`quantize`]. Output is capped at [`MAX_TICKS`].
pub fn tick_values(bounds: Bounds, step: f32) -> Vec<f32> {
    if !step.is_finite() || step <= 0.0 || bounds.length() < 0.0 {
        return Vec::new();
    }
    let first = (bounds.min / step).ceil() as i64;
    let last = (bounds.max / step).floor() as i64;
    if last < first {
        return Vec::new();
    }
    (first..=last)
        .take(MAX_TICKS)
        .map(|k| k as f32 * step)
        .collect()
}
