//! Drag-gesture state machines for slider and range-slider controls.
//!
//! Each thumb runs an `Idle -> Dragging -> Idle` machine. The host forwards
//! its gesture recognizer's update and end callbacks; every update combines
//! the drag anchor, the track mapping, the quantizer and (for ranges) the
//! constraint solver into a new value plus an editing flag, which the host
//! stores and renders. The core never retains the value itself: the caller
//! owns it and passes the current one into every update.
//!
//! Releasing a drag commits the last computed value. There is deliberately no
//! rollback path; hosts wanting "abort restores the original value" must keep
//! that original themselves.
//!
//! Updates are processed synchronously, in delivery order, on whatever thread
//! delivers them (assumed to be the single UI thread). For ranges, each
//! thumb's machine writes only the bound it owns, so two independent pointers
//! dragging both thumbs degrade to last-write-wins per bound rather than
//! interleaved corruption.

use derive_setters::Setters;
use tracing::trace;

use crate::{
    anchor::DragAnchor,
    bounds::{Bounds, Range, Separation},
    range::{RangeTrack, range_with_lower, range_with_upper},
    track::Track,
};

/// How a gesture grabbed the control.
///
/// Dragging a thumb is anchored: the grab offset is preserved so the thumb
/// does not snap under the pointer. A press on the bare track is not: the
/// thumb jumps to the press location. Both behaviors are deliberate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabOrigin {
    /// The pointer went down on the thumb itself.
    Thumb,
    /// The pointer went down on the track.
    Track,
}

/// Value-domain configuration for a single-value slider.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct SliderConfig {
    /// Valid value domain.
    pub bounds: Bounds,
    /// Quantization step; `<= 0` means continuous.
    pub step: f32,
    /// A disabled control ignores drag events and drops in-flight gestures.
    pub disabled: bool,
}

impl SliderConfig {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            step: 0.0,
            disabled: false,
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(Bounds::UNIT)
    }
}

/// Value-domain configuration for a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct RangeConfig {
    /// Valid value domain for both ends.
    pub bounds: Bounds,
    /// Quantization step; `<= 0` means continuous.
    pub step: f32,
    /// Allowed gap between the two ends.
    pub separation: Separation,
    /// Whether moving one end drags the other along to honor `separation`,
    /// instead of clamping the moving end.
    pub force_adjacent: bool,
    /// A disabled control ignores drag events and drops in-flight gestures.
    pub disabled: bool,
}

impl RangeConfig {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            step: 0.0,
            separation: Separation::default(),
            force_adjacent: false,
            disabled: false,
        }
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self::new(Bounds::UNIT)
    }
}

/// Outcome of a single-value drag update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderUpdate {
    /// The new value for the host to store and render.
    pub value: f32,
    /// `true` while a drag is in progress.
    pub editing: bool,
    /// `true` when `value` differs from the prior value beyond `f32::EPSILON`;
    /// lets hosts skip redundant change notifications.
    pub changed: bool,
}

/// Per-gesture state of a single-value slider.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderState {
    anchor: DragAnchor,
    editing: bool,
}

impl SliderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` between the first update and the end of a drag.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Processes one drag-update event.
    ///
    /// `value` is the caller-owned current value, `pointer` the event's
    /// position along the track axis in the track's coordinate space.
    pub fn drag_update(
        &mut self,
        config: &SliderConfig,
        track: Track,
        value: f32,
        pointer: f32,
        origin: GrabOrigin,
    ) -> SliderUpdate {
        if config.disabled {
            self.reset();
            return SliderUpdate {
                value,
                editing: false,
                changed: false,
            };
        }

        if !self.editing {
            self.editing = true;
            trace!(?origin, pointer, "slider drag began");
        }

        let position = match origin {
            GrabOrigin::Thumb => self
                .anchor
                .effective_position(pointer, track.distance_of(value, config.bounds)),
            GrabOrigin::Track => pointer,
        };
        let new_value = track.value_at(position, config.bounds, config.step);

        SliderUpdate {
            value: new_value,
            editing: true,
            changed: (new_value - value).abs() > f32::EPSILON,
        }
    }

    /// Processes the drag-end event, committing the last computed value.
    /// Returns `true` if a drag was in progress.
    pub fn drag_end(&mut self) -> bool {
        self.anchor.clear();
        let was_editing = std::mem::replace(&mut self.editing, false);
        if was_editing {
            trace!("slider drag ended");
        }
        was_editing
    }

    fn reset(&mut self) {
        if self.editing {
            trace!("slider drag dropped: control disabled");
        }
        self.anchor.clear();
        self.editing = false;
    }
}

/// One end of a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeThumb {
    Lower,
    Upper,
}

/// What a range-slider gesture event addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTarget {
    /// A drag that started on a specific thumb (anchored).
    Thumb(RangeThumb),
    /// A gesture that started on the bare track: the nearest thumb is
    /// resolved at the first update and snaps to the pointer.
    Track,
}

/// Outcome of a range drag update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeUpdate {
    /// The new range for the host to store and render.
    pub range: Range,
    /// The bound this event wrote, `None` when the control is disabled.
    pub thumb: Option<RangeThumb>,
    /// `true` while either thumb is being dragged.
    pub editing: bool,
    /// `true` when either end moved beyond `f32::EPSILON`.
    pub changed: bool,
}

/// Per-gesture state of a range slider: one anchor and one editing flag per
/// thumb, plus the thumb resolved for an in-flight track-press gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeState {
    lower_anchor: DragAnchor,
    upper_anchor: DragAnchor,
    lower_editing: bool,
    upper_editing: bool,
    track_gesture: Option<RangeThumb>,
}

impl RangeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while either thumb is being dragged.
    pub fn is_editing(&self) -> bool {
        self.lower_editing || self.upper_editing
    }

    /// `true` while the given thumb is being dragged.
    pub fn is_thumb_editing(&self, thumb: RangeThumb) -> bool {
        match thumb {
            RangeThumb::Lower => self.lower_editing,
            RangeThumb::Upper => self.upper_editing,
        }
    }

    /// Processes one drag-update event for the range.
    ///
    /// A `RangeTarget::Track` event resolves the nearest thumb on its first
    /// update (ties go to the lower thumb) and keeps writing that thumb for
    /// the rest of the gesture, using the raw pointer position. A
    /// `RangeTarget::Thumb` event is anchored against that thumb's rendered
    /// position. Either way the constraint solver has the final word on the
    /// returned range.
    pub fn drag_update(
        &mut self,
        config: &RangeConfig,
        track: RangeTrack,
        range: Range,
        pointer: f32,
        target: RangeTarget,
    ) -> RangeUpdate {
        if config.disabled {
            self.reset();
            return RangeUpdate {
                range,
                thumb: None,
                editing: false,
                changed: false,
            };
        }

        let (thumb, origin) = match target {
            RangeTarget::Thumb(thumb) => (thumb, GrabOrigin::Thumb),
            RangeTarget::Track => {
                let thumb = *self
                    .track_gesture
                    .get_or_insert_with(|| nearest_thumb(track, range, config.bounds, pointer));
                (thumb, GrabOrigin::Track)
            }
        };

        let new_range = match thumb {
            RangeThumb::Lower => {
                let thumb_track = track.lower_track();
                if !self.lower_editing {
                    self.lower_editing = true;
                    trace!(?origin, pointer, "range drag began on lower thumb");
                }
                let position = match origin {
                    GrabOrigin::Thumb => self.lower_anchor.effective_position(
                        pointer,
                        thumb_track.distance_of(range.lower, config.bounds),
                    ),
                    GrabOrigin::Track => pointer,
                };
                let candidate = thumb_track.value_at(position, config.bounds, config.step);
                range_with_lower(
                    candidate,
                    range,
                    config.bounds,
                    config.separation,
                    config.force_adjacent,
                )
            }
            RangeThumb::Upper => {
                let thumb_track = track.upper_track();
                if !self.upper_editing {
                    self.upper_editing = true;
                    trace!(?origin, pointer, "range drag began on upper thumb");
                }
                let position = match origin {
                    GrabOrigin::Thumb => self.upper_anchor.effective_position(
                        pointer,
                        thumb_track.distance_of(range.upper, config.bounds),
                    ),
                    GrabOrigin::Track => pointer,
                };
                let candidate = thumb_track.value_at(position, config.bounds, config.step);
                range_with_upper(
                    candidate,
                    range,
                    config.bounds,
                    config.separation,
                    config.force_adjacent,
                )
            }
        };

        let changed = (new_range.lower - range.lower).abs() > f32::EPSILON
            || (new_range.upper - range.upper).abs() > f32::EPSILON;
        RangeUpdate {
            range: new_range,
            thumb: Some(thumb),
            editing: true,
            changed,
        }
    }

    /// Processes a drag-end event for the given target, committing the last
    /// computed range. Returns `true` if that thumb was being dragged.
    pub fn drag_end(&mut self, target: RangeTarget) -> bool {
        let thumb = match target {
            RangeTarget::Thumb(thumb) => {
                if self.track_gesture == Some(thumb) {
                    self.track_gesture = None;
                }
                Some(thumb)
            }
            RangeTarget::Track => self.track_gesture.take(),
        };
        let was_editing = match thumb {
            Some(RangeThumb::Lower) => {
                self.lower_anchor.clear();
                std::mem::replace(&mut self.lower_editing, false)
            }
            Some(RangeThumb::Upper) => {
                self.upper_anchor.clear();
                std::mem::replace(&mut self.upper_editing, false)
            }
            None => false,
        };
        if was_editing {
            trace!(?thumb, "range drag ended");
        }
        was_editing
    }

    fn reset(&mut self) {
        if self.is_editing() {
            trace!("range drag dropped: control disabled");
        }
        self.lower_anchor.clear();
        self.upper_anchor.clear();
        self.lower_editing = false;
        self.upper_editing = false;
        self.track_gesture = None;
    }
}

/// The thumb whose rendered center is closest to the pointer; ties go to the
/// lower thumb.
fn nearest_thumb(track: RangeTrack, range: Range, bounds: Bounds, pointer: f32) -> RangeThumb {
    let lower_center = track.lower_track().distance_of(range.lower, bounds);
    let upper_center = track.upper_track().distance_of(range.upper, bounds);
    if (pointer - lower_center).abs() <= (pointer - upper_center).abs() {
        RangeThumb::Lower
    } else {
        RangeThumb::Upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-6, "{a} != {b}");
    }

    #[test]
    fn thumb_grab_does_not_jump() {
        let mut state = SliderState::new();
        let config = SliderConfig::default();
        let track = Track::new(100.0);

        // grab 6pt right of the thumb center (value 0.3 renders at 30)
        let update = state.drag_update(&config, track, 0.3, 36.0, GrabOrigin::Thumb);
        assert_close(update.value, 0.3);
        assert!(!update.changed);
        assert!(update.editing);

        // moving the pointer 10pt moves the value by 0.1
        let update = state.drag_update(&config, track, update.value, 46.0, GrabOrigin::Thumb);
        assert_close(update.value, 0.4);
        assert!(update.changed);
    }

    #[test]
    fn track_press_snaps_to_the_pointer() {
        let mut state = SliderState::new();
        let config = SliderConfig::default();
        let track = Track::new(100.0);

        let update = state.drag_update(&config, track, 0.3, 80.0, GrabOrigin::Track);
        assert_close(update.value, 0.8);
        assert!(update.changed);
    }

    #[test]
    fn editing_flag_follows_the_gesture() {
        let mut state = SliderState::new();
        let config = SliderConfig::default();
        let track = Track::new(100.0);

        assert!(!state.is_editing());
        state.drag_update(&config, track, 0.5, 50.0, GrabOrigin::Thumb);
        assert!(state.is_editing());
        assert!(state.drag_end());
        assert!(!state.is_editing());
        // a second end is a no-op
        assert!(!state.drag_end());
    }

    #[test]
    fn updates_are_stepped() {
        let mut state = SliderState::new();
        let config = SliderConfig::default().step(0.25);
        let track = Track::new(100.0);

        let update = state.drag_update(&config, track, 0.0, 30.0, GrabOrigin::Track);
        assert_close(update.value, 0.25);
        // pointer still maps to the same stepped value: no change reported
        let update = state.drag_update(&config, track, update.value, 33.0, GrabOrigin::Track);
        assert_close(update.value, 0.25);
        assert!(!update.changed);
    }

    #[test]
    fn disabled_slider_drops_the_gesture() {
        let mut state = SliderState::new();
        let mut config = SliderConfig::default();
        let track = Track::new(100.0);

        state.drag_update(&config, track, 0.5, 50.0, GrabOrigin::Thumb);
        assert!(state.is_editing());

        config = config.disabled(true);
        let update = state.drag_update(&config, track, 0.5, 90.0, GrabOrigin::Thumb);
        assert_eq!(update.value, 0.5);
        assert!(!update.changed);
        assert!(!update.editing);
        assert!(!state.is_editing());
    }

    #[test]
    fn track_press_picks_the_nearest_thumb() {
        let config = RangeConfig::default();
        let track = RangeTrack::new(100.0);
        let range = Range::new(0.2, 0.8);

        let mut state = RangeState::new();
        let update = state.drag_update(&config, track, range, 45.0, RangeTarget::Track);
        assert_eq!(update.thumb, Some(RangeThumb::Lower));
        assert_close(update.range.lower, 0.45);
        assert_close(update.range.upper, 0.8);

        let mut state = RangeState::new();
        let update = state.drag_update(&config, track, range, 55.0, RangeTarget::Track);
        assert_eq!(update.thumb, Some(RangeThumb::Upper));
        assert_close(update.range.upper, 0.55);

        // equidistant: the lower thumb wins
        let mut state = RangeState::new();
        let update = state.drag_update(&config, track, range, 50.0, RangeTarget::Track);
        assert_eq!(update.thumb, Some(RangeThumb::Lower));
    }

    #[test]
    fn track_gesture_stays_on_the_resolved_thumb() {
        let config = RangeConfig::default();
        let track = RangeTrack::new(100.0);
        let mut state = RangeState::new();
        let mut range = Range::new(0.2, 0.8);

        let update = state.drag_update(&config, track, range, 45.0, RangeTarget::Track);
        assert_eq!(update.thumb, Some(RangeThumb::Lower));
        range = update.range;

        // pointer crosses to the upper thumb's side: still the lower thumb,
        // clamped at the upper bound
        let update = state.drag_update(&config, track, range, 95.0, RangeTarget::Track);
        assert_eq!(update.thumb, Some(RangeThumb::Lower));
        assert_close(update.range.lower, 0.8);
        assert_close(update.range.upper, 0.8);

        assert!(state.drag_end(RangeTarget::Track));
        // the next track press resolves afresh
        let update = state.drag_update(&config, track, Range::new(0.2, 0.8), 95.0, RangeTarget::Track);
        assert_eq!(update.thumb, Some(RangeThumb::Upper));
    }

    #[test]
    fn anchored_thumb_drag_moves_one_bound() {
        let config = RangeConfig::default();
        let track = RangeTrack::new(100.0);
        let mut state = RangeState::new();
        let range = Range::new(0.2, 0.8);

        // grab 3pt right of the upper thumb center (renders at 80)
        let update = state.drag_update(&config, track, range, 83.0, RangeTarget::Thumb(RangeThumb::Upper));
        assert!(!update.changed);
        assert_close(update.range.upper, 0.8);

        let update = state.drag_update(
            &config,
            track,
            update.range,
            63.0,
            RangeTarget::Thumb(RangeThumb::Upper),
        );
        assert_close(update.range.upper, 0.6);
        assert_close(update.range.lower, 0.2);
    }

    #[test]
    fn force_adjacent_drags_the_other_bound_through_the_reducer() {
        let config = RangeConfig::default()
            .separation(Separation::exact(0.2))
            .force_adjacent(true);
        let track = RangeTrack::new(100.0);
        let mut state = RangeState::new();
        let range = Range::new(0.2, 0.4);

        // grab the lower thumb dead center, then drag far right
        let update = state.drag_update(&config, track, range, 20.0, RangeTarget::Thumb(RangeThumb::Lower));
        assert!(!update.changed);
        let update = state.drag_update(
            &config,
            track,
            update.range,
            70.0,
            RangeTarget::Thumb(RangeThumb::Lower),
        );
        assert_close(update.range.lower, 0.7);
        assert_close(update.range.upper, 0.9);
    }

    #[test]
    fn thumbs_edit_independently() {
        let config = RangeConfig::default();
        let track = RangeTrack::new(100.0);
        let mut state = RangeState::new();
        let mut range = Range::new(0.2, 0.8);

        range = state
            .drag_update(&config, track, range, 20.0, RangeTarget::Thumb(RangeThumb::Lower))
            .range;
        range = state
            .drag_update(&config, track, range, 80.0, RangeTarget::Thumb(RangeThumb::Upper))
            .range;
        assert!(state.is_thumb_editing(RangeThumb::Lower));
        assert!(state.is_thumb_editing(RangeThumb::Upper));

        assert!(state.drag_end(RangeTarget::Thumb(RangeThumb::Lower)));
        assert!(!state.is_thumb_editing(RangeThumb::Lower));
        assert!(state.is_thumb_editing(RangeThumb::Upper));
        assert!(state.is_editing());
        let _ = range;
    }

    #[test]
    fn disabled_range_drops_both_gestures() {
        let mut config = RangeConfig::default();
        let track = RangeTrack::new(100.0);
        let mut state = RangeState::new();
        let range = Range::new(0.2, 0.8);

        state.drag_update(&config, track, range, 20.0, RangeTarget::Thumb(RangeThumb::Lower));
        config = config.disabled(true);
        let update = state.drag_update(&config, track, range, 60.0, RangeTarget::Thumb(RangeThumb::Lower));
        assert_eq!(update.thumb, None);
        assert_eq!(update.range, range);
        assert!(!update.editing);
        assert!(!state.is_editing());
    }
}
