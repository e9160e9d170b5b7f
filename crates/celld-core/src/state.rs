#![forbid(unsafe_code)]

//! Backlight, heartbeat, and cursor state.
//!
//! Backlight and heartbeat are bit-flag sets rather than plain enums: a
//! setting may combine the ON bit with BLINK or FLASH, and the dedicated
//! OPEN bit marks "no setting made here" so override chains can fall
//! through to the next source.

use bitflags::bitflags;

bitflags! {
    /// Backlight setting, as stored on each override source.
    ///
    /// `OFF` is the empty set. `OPEN` means unset: the priority resolver
    /// skips this source and consults the next one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BacklightState: u8 {
        /// Backlight lit.
        const ON = 1 << 0;
        /// No setting; defer to the next override source.
        const OPEN = 1 << 1;
        /// Slow timed toggle of the ON bit.
        const BLINK = 1 << 2;
        /// Fast timed toggle of the ON bit.
        const FLASH = 1 << 3;
    }
}

impl BacklightState {
    /// Backlight dark; the empty set.
    pub const OFF: Self = Self::empty();

    /// True when this source has made no setting at all.
    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::OPEN
    }
}

bitflags! {
    /// Heartbeat setting, as stored on each override source.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct HeartbeatState: u8 {
        /// Heartbeat icon animating.
        const ON = 1 << 0;
        /// No setting; defer to the next override source.
        const OPEN = 1 << 1;
    }
}

impl HeartbeatState {
    /// Heartbeat hidden; the empty set.
    pub const OFF: Self = Self::empty();

    /// True when this source has made no setting at all.
    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::OPEN
    }
}

/// Cursor presentation, pushed to the sink once per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    /// No cursor.
    #[default]
    Off,
    /// The display's default cursor.
    On,
    /// Blinking block cursor.
    Block,
    /// Underline cursor.
    Underline,
}
