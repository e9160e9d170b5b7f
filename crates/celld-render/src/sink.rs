#![forbid(unsafe_code)]

//! The abstract display boundary.
//!
//! A [`DisplaySink`] receives cell/icon/glyph draw calls and is implemented
//! by the (out-of-scope) hardware drivers. All coordinates are 1-based cell
//! positions. Within one render call the engine issues sink calls strictly
//! in pipeline order and assumes each lands in the sink's back buffer before
//! the next; `flush` is always last, so partial frames are never visible.
//!
//! Sink calls are infallible from the engine's perspective — I/O failure
//! handling belongs to the driver layer.

use celld_core::state::{BacklightState, CursorMode, HeartbeatState};
use celld_core::widget::IconKind;

/// Fill pattern for bar widgets.
///
/// The engine currently emits only [`BarPattern::Filled`]; the parameter
/// exists so drivers with custom bar glyphs keep their seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarPattern {
    #[default]
    Filled,
}

/// Receiver of draw calls for one character-cell display.
pub trait DisplaySink {
    /// Wipe the back buffer.
    fn clear(&mut self);

    /// Apply the resolved backlight state.
    fn set_backlight(&mut self, state: BacklightState);

    /// Apply the out-of-band output-port bitmask.
    fn set_outputs(&mut self, bitmask: u32);

    /// Draw `text` with its first cell at `(x, y)`.
    fn draw_string(&mut self, x: i32, y: i32, text: &str);

    /// Draw a named icon glyph at `(x, y)`.
    fn draw_icon(&mut self, x: i32, y: i32, icon: IconKind);

    /// Position the cursor and set its presentation.
    fn set_cursor(&mut self, x: i32, y: i32, mode: CursorMode);

    /// Apply the resolved heartbeat state.
    fn set_heartbeat(&mut self, state: HeartbeatState);

    /// Draw a horizontal bar of `length` cells, the last filled to
    /// `promille` parts per thousand.
    fn draw_hbar(&mut self, x: i32, y: i32, length: i32, promille: i32, pattern: BarPattern);

    /// Draw a vertical bar of `length` cells filled to `promille` parts per
    /// thousand, growing upward from `(x, y)`.
    fn draw_vbar(&mut self, x: i32, y: i32, length: i32, promille: i32, pattern: BarPattern);

    /// Draw a progress bar of `width` cells filled to `promille`, with
    /// optional begin/end labels.
    fn draw_pbar(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        promille: i32,
        begin_label: Option<&str>,
        end_label: Option<&str>,
    );

    /// Draw a big-digit glyph at column `x`: `value` 0-9 is the digit, 10
    /// the colon.
    fn draw_number(&mut self, x: i32, value: i32);

    /// Make everything drawn since the last flush visible.
    fn flush(&mut self);
}
