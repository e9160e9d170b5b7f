#![forbid(unsafe_code)]

//! The per-tick screen renderer and its configuration state.
//!
//! [`Renderer`] holds what the original daemon kept in process globals: the
//! display metrics, the operator-level backlight/heartbeat overrides and
//! fallbacks, the title ticker speed, the output-port bitmask, and the one
//! piece of state the engine itself owns — the transient server message.
//! The configuration/command layer updates [`RenderState`] between ticks;
//! the engine reads it.

use celld_core::Tick;
use celld_core::display::DisplayProperties;
use celld_core::geometry::Loc;
use celld_core::screen::Screen;
use celld_core::state::{BacklightState, HeartbeatState};
use celld_core::widget::ScrollDirection;
use tracing::debug;

use crate::compose;
use crate::error::RenderError;
use crate::sink::DisplaySink;
use crate::text;

/// Titlespeed setting at or below which title tickers are disabled.
pub const TITLESPEED_NO: i32 = 0;
/// Fastest tick rate a title may reach (ticks per step).
pub const TITLESPEED_MIN: i32 = 1;
/// Slowest tick rate; the setting is subtracted from this.
pub const TITLESPEED_MAX: i32 = 10;

/// Longest server-message payload, in display cells.
pub const MAX_SERVER_MSG_CELLS: usize = 15;

/// Render configuration owned by the external configuration/command layer.
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Process-wide backlight override; `OPEN` defers down the chain.
    pub backlight: BacklightState,
    /// Process-wide heartbeat override; `OPEN` defers down the chain.
    pub heartbeat: HeartbeatState,
    /// Backlight used when no override source has a setting.
    pub backlight_fallback: BacklightState,
    /// Heartbeat used when no override source has a setting.
    pub heartbeat_fallback: HeartbeatState,
    /// Title ticker speed setting; `<= 0` disables ticking.
    pub title_speed: i32,
    /// Out-of-band output-port bitmask, pushed to the sink every tick.
    pub output_state: u32,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            backlight: BacklightState::OPEN,
            heartbeat: HeartbeatState::OPEN,
            backlight_fallback: BacklightState::ON,
            heartbeat_fallback: HeartbeatState::ON,
            title_speed: 1,
            output_state: 0,
        }
    }
}

/// A transient operator message shown over the bottom-right of every screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerMessage {
    text: String,
    remaining: i32,
}

impl ServerMessage {
    /// The prefixed text as drawn.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render ticks left, including the current one.
    pub fn remaining(&self) -> i32 {
        self.remaining
    }
}

/// The render engine.
#[derive(Debug)]
pub struct Renderer {
    props: DisplayProperties,
    /// Configuration surface; read-mostly from the engine's side.
    pub state: RenderState,
    message: Option<ServerMessage>,
}

impl Renderer {
    /// Create a renderer for a display with the given metrics.
    pub fn new(props: DisplayProperties) -> Self {
        Self {
            props,
            state: RenderState::default(),
            message: None,
        }
    }

    /// The display metrics this renderer drives.
    pub fn props(&self) -> DisplayProperties {
        self.props
    }

    /// The active server message, if one has not yet expired.
    pub fn message(&self) -> Option<&ServerMessage> {
        self.message.as_ref()
    }

    /// Post a server message to be overlaid for `expire` render ticks.
    ///
    /// Fails with [`RenderError::InvalidMessage`] when the text exceeds
    /// [`MAX_SERVER_MSG_CELLS`] or `expire` is not positive; an active
    /// message is left untouched on failure and replaced on success.
    pub fn server_msg(&mut self, text: &str, expire: i32) -> Result<(), RenderError> {
        if text::cell_len(text) > MAX_SERVER_MSG_CELLS || expire <= 0 {
            return Err(RenderError::InvalidMessage);
        }
        self.message = Some(ServerMessage {
            text: format!("| {text}"),
            remaining: expire,
        });
        Ok(())
    }

    /// Render one screen for this tick.
    ///
    /// The ordered sequence is a correctness invariant — later steps observe
    /// state set by earlier ones, and the flush comes last so a partial
    /// frame is never made visible:
    ///
    /// 1. clear the sink's drawing surface
    /// 2. resolve and push the backlight
    /// 3. push the output-port bitmask
    /// 4. composite the widget list
    /// 5. push the cursor
    /// 6. resolve and push the heartbeat
    /// 7. draw and age the server message
    /// 8. flush
    pub fn render_screen<S: DisplaySink>(
        &mut self,
        sink: &mut S,
        screen: Option<&Screen>,
        tick: Tick,
    ) -> Result<(), RenderError> {
        let screen = screen.ok_or(RenderError::NullScreen)?;
        debug!(screen = %screen.id, tick, "rendering screen");

        sink.clear();

        let backlight = resolve_backlight(&self.state, screen);
        sink.set_backlight(timed_backlight(backlight, tick));

        sink.set_outputs(self.state.output_state);

        // Oversized screens scroll vertically, pacing a full traversal to
        // the screen's rotation duration.
        let speed = if screen.height > 0 {
            (screen.duration / screen.height).max(1)
        } else {
            1
        };
        compose::render_frame(
            sink,
            self.props,
            self.state.title_speed,
            &screen.widgets,
            Loc::new(0, 0, screen.width, screen.height),
            self.props.cell_bounds(),
            ScrollDirection::Vertical,
            speed,
            tick,
            false,
        );

        sink.set_cursor(screen.cursor_x, screen.cursor_y, screen.cursor);

        sink.set_heartbeat(resolve_heartbeat(&self.state, screen));

        if let Some(msg) = self.message.as_mut() {
            let x = self.props.width - text::cell_len(&msg.text) as i32 + 1;
            sink.draw_string(x, self.props.height, &msg.text);
            msg.remaining -= 1;
        }
        if self.message.as_ref().is_some_and(|m| m.remaining == 0) {
            self.message = None;
        }

        sink.flush();
        Ok(())
    }
}

/// Walk the backlight override chain: process, then client, then screen,
/// then the fallback.
fn resolve_backlight(state: &RenderState, screen: &Screen) -> BacklightState {
    if !state.backlight.is_open() {
        return state.backlight;
    }
    if let Some(client) = &screen.client {
        if !client.backlight.is_open() {
            return client.backlight;
        }
    }
    if !screen.backlight.is_open() {
        return screen.backlight;
    }
    state.backlight_fallback
}

/// Walk the heartbeat override chain, same precedence as the backlight.
fn resolve_heartbeat(state: &RenderState, screen: &Screen) -> HeartbeatState {
    if !state.heartbeat.is_open() {
        return state.heartbeat;
    }
    if let Some(client) = &screen.client {
        if !client.heartbeat.is_open() {
            return client.heartbeat;
        }
    }
    if !screen.heartbeat.is_open() {
        return screen.heartbeat;
    }
    state.heartbeat_fallback
}

/// Reduce a resolved backlight to the on/off bit pushed to the sink,
/// applying the timed FLASH/BLINK toggles. FLASH wins over BLINK.
fn timed_backlight(state: BacklightState, tick: Tick) -> BacklightState {
    if state.contains(BacklightState::FLASH) {
        on_off(state.contains(BacklightState::ON) ^ ((tick & 7) == 7))
    } else if state.contains(BacklightState::BLINK) {
        on_off(state.contains(BacklightState::ON) ^ ((tick & 14) == 14))
    } else {
        state & BacklightState::ON
    }
}

#[inline]
fn on_off(on: bool) -> BacklightState {
    if on {
        BacklightState::ON
    } else {
        BacklightState::OFF
    }
}
