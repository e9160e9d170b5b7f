#![forbid(unsafe_code)]

//! Data model for the celld render engine: geometry, display metrics,
//! backlight/heartbeat state, screens, and widgets.
//!
//! Everything in this crate is plain data. Screens and widgets are owned by
//! the (external) screen manager and borrowed read-only by the render engine
//! for the duration of one render call.

pub mod display;
pub mod geometry;
pub mod screen;
pub mod state;
pub mod widget;

/// The animation clock: an externally-supplied counter incremented once per
/// render call. The engine never mutates it; every animated position is a
/// pure function of the tick.
pub type Tick = u64;
