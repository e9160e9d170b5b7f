#![forbid(unsafe_code)]

//! The celld render pipeline.
//!
//! Turns one [`Screen`] definition plus a monotonically increasing tick into
//! draw calls against an abstract [`DisplaySink`], once per scheduling tick:
//! clear, backlight, output ports, recursive frame composition with
//! clipping, cursor, heartbeat, server-message overlay, flush.
//!
//! The engine is single-threaded and synchronous. It borrows screen data for
//! the duration of one [`Renderer::render_screen`] call; the transient
//! server message is the only state it owns.
//!
//! [`Screen`]: celld_core::screen::Screen

mod compose;
mod text;
mod widget;

pub mod error;
pub mod motion;
pub mod renderer;
pub mod sink;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use celld_core::Tick;
pub use error::RenderError;
pub use renderer::{
    MAX_SERVER_MSG_CELLS, RenderState, Renderer, ServerMessage, TITLESPEED_MAX, TITLESPEED_MIN,
    TITLESPEED_NO,
};
pub use sink::{BarPattern, DisplaySink};
