#![forbid(unsafe_code)]

//! Screen definitions.

use crate::state::{BacklightState, CursorMode, HeartbeatState};
use crate::widget::Widget;

/// Screen duration when the client does not specify one, in ticks.
pub const DEFAULT_SCREEN_DURATION: i32 = 32;

/// Backlight/heartbeat overrides inherited from the owning client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOverrides {
    pub backlight: BacklightState,
    pub heartbeat: HeartbeatState,
}

impl Default for ClientOverrides {
    fn default() -> Self {
        Self {
            backlight: BacklightState::OPEN,
            heartbeat: HeartbeatState::OPEN,
        }
    }
}

/// One renderable screen: a widget list plus presentation settings.
///
/// Owned and mutated by the external screen manager; the engine borrows a
/// screen for exactly one render call and retains nothing.
#[derive(Debug, Clone)]
pub struct Screen {
    pub id: String,
    /// Content width in cells (may exceed the display for scrolling frames).
    pub width: i32,
    /// Content height in cells.
    pub height: i32,
    /// How long the screen stays in rotation, in ticks; also drives the
    /// vertical scroll speed of oversized content.
    pub duration: i32,
    pub cursor: CursorMode,
    pub cursor_x: i32,
    pub cursor_y: i32,
    /// Screen-level backlight override; `OPEN` defers to the fallback.
    pub backlight: BacklightState,
    /// Screen-level heartbeat override; `OPEN` defers to the fallback.
    pub heartbeat: HeartbeatState,
    /// Overrides of the owning client, when the screen has one.
    pub client: Option<ClientOverrides>,
    pub widgets: Vec<Widget>,
}

impl Screen {
    /// Create an empty screen with default presentation settings.
    pub fn new(id: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            duration: DEFAULT_SCREEN_DURATION,
            cursor: CursorMode::Off,
            cursor_x: 1,
            cursor_y: 1,
            backlight: BacklightState::OPEN,
            heartbeat: HeartbeatState::OPEN,
            client: None,
            widgets: Vec::new(),
        }
    }

    /// Builder-style widget append.
    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.widgets.push(widget);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SCREEN_DURATION, Screen};
    use crate::state::BacklightState;
    use crate::widget::{StringWidget, Widget};

    #[test]
    fn new_screen_defaults() {
        let s = Screen::new("status", 20, 4);
        assert_eq!(s.id, "status");
        assert_eq!(s.duration, DEFAULT_SCREEN_DURATION);
        assert!(s.backlight.is_open());
        assert!(s.heartbeat.is_open());
        assert!(s.client.is_none());
        assert!(s.widgets.is_empty());
    }

    #[test]
    fn with_widget_appends_in_order() {
        let s = Screen::new("s", 16, 2)
            .with_widget(Widget::Str(StringWidget::new(1, 1, "a")))
            .with_widget(Widget::Str(StringWidget::new(1, 2, "b")));
        assert_eq!(s.widgets.len(), 2);
    }

    #[test]
    fn overrides_default_to_open() {
        let c = super::ClientOverrides::default();
        assert_eq!(c.backlight, BacklightState::OPEN);
        assert!(c.heartbeat.is_open());
    }
}
