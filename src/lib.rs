//! Value-position mapping and drag-gesture core for slider and range-slider
//! controls.
//!
//! This crate is the numeric heart of a slider widget, with no UI framework
//! attached: a host layer (any framework) measures geometry, forwards pointer
//! events, and renders whatever it wants from the values returned here.
//!
//! # Key Types
//!
//! - [`Bounds`], [`Range`], [`Separation`] - the value domain
//! - [`Track`] / [`RangeTrack`] - layout-space geometry: available length,
//!   insets reserved for thumbs, layout direction
//! - [`SliderState`] / [`RangeState`] - per-gesture state machines turning
//!   drag updates into clamped, stepped, invariant-preserving values
//!
//! # Data Flow
//!
//! Per drag-update event: the reducer resolves the effective pointer position
//! through the thumb's [`DragAnchor`] (so grabbing a thumb off-center never
//! makes it jump), maps it to a value through the track's linear map, snaps it
//! with [`quantize`], and, for ranges, runs the constraint solver
//! ([`range_with_lower`] / [`range_with_upper`]) to keep `lower <= upper` and
//! the configured separation. The host stores the returned value and feeds it
//! back into the next event.
//!
//! # Example
//!
//! ```
//! use slipstick::{Bounds, GrabOrigin, SliderConfig, SliderState, Track};
//!
//! let config = SliderConfig::new(Bounds::UNIT).step(0.05);
//! let track = Track::new(300.0).thumb_length(44.0);
//! let mut state = SliderState::new();
//! let mut value = 0.5_f32;
//!
//! // host's drag-update callback
//! let update = state.drag_update(&config, track, value, 161.0, GrabOrigin::Thumb);
//! value = update.value;
//! assert!(config.bounds.contains(value));
//! assert!(state.is_editing());
//!
//! // host's drag-end callback: the last computed value is committed
//! state.drag_end();
//! assert!(!state.is_editing());
//! ```

pub mod anchor;
pub mod bounds;
pub mod gesture;
pub mod quantize;
pub mod range;
pub mod track;

pub use anchor::DragAnchor;
pub use bounds::{Bounds, ConfigError, Range, Separation, validate_step};
pub use gesture::{
    GrabOrigin, RangeConfig, RangeState, RangeTarget, RangeThumb, RangeUpdate, SliderConfig,
    SliderState, SliderUpdate,
};
pub use quantize::{MAX_TICKS, quantize, tick_values};
pub use range::{RangeTrack, range_with_lower, range_with_upper};
pub use track::Track;
