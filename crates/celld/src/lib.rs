#![forbid(unsafe_code)]

//! celld public facade crate.
//!
//! Re-exports the common surface of the render engine and data model, and
//! offers a lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use celld_core::Tick;
pub use celld_core::display::DisplayProperties;
pub use celld_core::geometry::{ClipBox, Loc};
pub use celld_core::screen::{ClientOverrides, Screen};
pub use celld_core::state::{BacklightState, CursorMode, HeartbeatState};
pub use celld_core::widget::{
    BarWidget, FrameWidget, IconKind, IconWidget, NumWidget, ProgressBarWidget, ScrollDirection,
    ScrollerWidget, StringWidget, TitleWidget, Widget,
};

// --- Render re-exports -----------------------------------------------------

pub use celld_render::motion::scroll_offset;
pub use celld_render::{
    BarPattern, DisplaySink, MAX_SERVER_MSG_CELLS, RenderError, RenderState, Renderer,
    ServerMessage,
};

/// Standard result type for celld APIs.
pub type Result<T> = std::result::Result<T, RenderError>;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BacklightState, CursorMode, DisplayProperties, DisplaySink, HeartbeatState, RenderError,
        Renderer, Result, Screen, ScrollDirection, Tick, Widget,
    };

    pub use crate::{core, render};
}

pub use celld_core as core;
pub use celld_render as render;
