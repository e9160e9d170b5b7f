#![forbid(unsafe_code)]

//! A sink that records every call it receives.

use celld_core::state::{BacklightState, CursorMode, HeartbeatState};
use celld_core::widget::IconKind;

use crate::{BarPattern, DisplaySink};

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Clear,
    Backlight(BacklightState),
    Outputs(u32),
    String { x: i32, y: i32, text: String },
    Icon { x: i32, y: i32, icon: IconKind },
    Cursor { x: i32, y: i32, mode: CursorMode },
    Heartbeat(HeartbeatState),
    HBar { x: i32, y: i32, length: i32, promille: i32 },
    VBar { x: i32, y: i32, length: i32, promille: i32 },
    PBar {
        x: i32,
        y: i32,
        width: i32,
        promille: i32,
        begin: Option<String>,
        end: Option<String>,
    },
    Num { x: i32, value: i32 },
    Flush,
}

/// Records calls in the order the engine issues them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    /// All recorded string draws, in order.
    pub fn strings(&self) -> Vec<(i32, i32, &str)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::String { x, y, text } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// True when some recorded string draw contains `needle`.
    pub fn drew_text(&self, needle: &str) -> bool {
        self.strings().iter().any(|(_, _, t)| t.contains(needle))
    }

    /// The backlight state last pushed, if any.
    pub fn last_backlight(&self) -> Option<BacklightState> {
        self.calls.iter().rev().find_map(|c| match c {
            SinkCall::Backlight(s) => Some(*s),
            _ => None,
        })
    }

    /// The heartbeat state last pushed, if any.
    pub fn last_heartbeat(&self) -> Option<HeartbeatState> {
        self.calls.iter().rev().find_map(|c| match c {
            SinkCall::Heartbeat(s) => Some(*s),
            _ => None,
        })
    }
}

impl DisplaySink for RecordingSink {
    fn clear(&mut self) {
        self.calls.push(SinkCall::Clear);
    }

    fn set_backlight(&mut self, state: BacklightState) {
        self.calls.push(SinkCall::Backlight(state));
    }

    fn set_outputs(&mut self, bitmask: u32) {
        self.calls.push(SinkCall::Outputs(bitmask));
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        self.calls.push(SinkCall::String {
            x,
            y,
            text: text.to_owned(),
        });
    }

    fn draw_icon(&mut self, x: i32, y: i32, icon: IconKind) {
        self.calls.push(SinkCall::Icon { x, y, icon });
    }

    fn set_cursor(&mut self, x: i32, y: i32, mode: CursorMode) {
        self.calls.push(SinkCall::Cursor { x, y, mode });
    }

    fn set_heartbeat(&mut self, state: HeartbeatState) {
        self.calls.push(SinkCall::Heartbeat(state));
    }

    fn draw_hbar(&mut self, x: i32, y: i32, length: i32, promille: i32, _pattern: BarPattern) {
        self.calls.push(SinkCall::HBar {
            x,
            y,
            length,
            promille,
        });
    }

    fn draw_vbar(&mut self, x: i32, y: i32, length: i32, promille: i32, _pattern: BarPattern) {
        self.calls.push(SinkCall::VBar {
            x,
            y,
            length,
            promille,
        });
    }

    fn draw_pbar(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        promille: i32,
        begin_label: Option<&str>,
        end_label: Option<&str>,
    ) {
        self.calls.push(SinkCall::PBar {
            x,
            y,
            width,
            promille,
            begin: begin_label.map(str::to_owned),
            end: end_label.map(str::to_owned),
        });
    }

    fn draw_number(&mut self, x: i32, value: i32) {
        self.calls.push(SinkCall::Num { x, value });
    }

    fn flush(&mut self) {
        self.calls.push(SinkCall::Flush);
    }
}
