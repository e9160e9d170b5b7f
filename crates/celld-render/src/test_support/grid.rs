#![forbid(unsafe_code)]

//! A sink that materializes draw calls into a character grid.
//!
//! Approximates what a real display would show: strings and icons land in
//! cells, bars are painted as filled blocks, big digits as their ASCII
//! digit. Out-of-range cells are silently clipped, like a real driver.

use celld_core::state::{BacklightState, CursorMode, HeartbeatState};
use celld_core::widget::IconKind;
use unicode_segmentation::UnicodeSegmentation;

use crate::{BarPattern, DisplaySink};

/// Harness glyph for one icon kind.
fn icon_char(icon: IconKind) -> char {
    match icon {
        IconKind::BlockFilled => '█',
        IconKind::HeartOpen => '♡',
        IconKind::HeartFilled => '♥',
        IconKind::ArrowUp => '↑',
        IconKind::ArrowDown => '↓',
        IconKind::ArrowLeft => '←',
        IconKind::ArrowRight => '→',
        IconKind::CheckboxOff => '☐',
        IconKind::CheckboxOn => '☑',
        IconKind::CheckboxGray => '▣',
        IconKind::SelectorAtLeft => '>',
        IconKind::SelectorAtRight => '<',
        IconKind::Ellipsis => '…',
        IconKind::Stop => '■',
        IconKind::Pause => '‖',
        IconKind::Play => '▶',
    }
}

/// A `width` x `height` cell grid absorbing draw calls, 1-based like the
/// sink vocabulary.
#[derive(Debug, Clone)]
pub struct GridSink {
    width: i32,
    height: i32,
    cells: Vec<char>,
    /// Last backlight pushed, if any.
    pub backlight: Option<BacklightState>,
    /// Last heartbeat pushed, if any.
    pub heartbeat: Option<HeartbeatState>,
    /// Last output bitmask pushed.
    pub outputs: u32,
    /// Last cursor pushed, if any.
    pub cursor: Option<(i32, i32, CursorMode)>,
    /// Completed flushes.
    pub flushes: u32,
}

impl GridSink {
    /// Create an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let cells = vec![' '; (width.max(0) * height.max(0)) as usize];
        Self {
            width,
            height,
            cells,
            backlight: None,
            heartbeat: None,
            outputs: 0,
            cursor: None,
            flushes: 0,
        }
    }

    fn put(&mut self, x: i32, y: i32, ch: char) {
        if x < 1 || y < 1 || x > self.width || y > self.height {
            return;
        }
        let idx = ((y - 1) * self.width + (x - 1)) as usize;
        self.cells[idx] = ch;
    }

    /// The character at 1-based `(x, y)`, or space when out of range.
    pub fn char_at(&self, x: i32, y: i32) -> char {
        if x < 1 || y < 1 || x > self.width || y > self.height {
            return ' ';
        }
        self.cells[((y - 1) * self.width + (x - 1)) as usize]
    }

    /// One 1-based row as a string.
    pub fn row(&self, y: i32) -> String {
        (1..=self.width).map(|x| self.char_at(x, y)).collect()
    }

    /// The whole grid, rows joined with newlines.
    pub fn to_text(&self) -> String {
        (1..=self.height)
            .map(|y| self.row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl DisplaySink for GridSink {
    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn set_backlight(&mut self, state: BacklightState) {
        self.backlight = Some(state);
    }

    fn set_outputs(&mut self, bitmask: u32) {
        self.outputs = bitmask;
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        for (i, grapheme) in text.graphemes(true).enumerate() {
            // One grapheme per cell; the grid keeps its first scalar.
            if let Some(ch) = grapheme.chars().next() {
                self.put(x + i as i32, y, ch);
            }
        }
    }

    fn draw_icon(&mut self, x: i32, y: i32, icon: IconKind) {
        self.put(x, y, icon_char(icon));
    }

    fn set_cursor(&mut self, x: i32, y: i32, mode: CursorMode) {
        self.cursor = Some((x, y, mode));
    }

    fn set_heartbeat(&mut self, state: HeartbeatState) {
        self.heartbeat = Some(state);
    }

    fn draw_hbar(&mut self, x: i32, y: i32, length: i32, _promille: i32, _pattern: BarPattern) {
        for i in 0..length.max(0) {
            self.put(x + i, y, '█');
        }
    }

    fn draw_vbar(&mut self, x: i32, y: i32, length: i32, _promille: i32, _pattern: BarPattern) {
        // Vertical bars grow upward from their anchor row.
        for i in 0..length.max(0) {
            self.put(x, y - i, '█');
        }
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
        let mut col = x;
        if let Some(label) = begin_label {
            self.draw_string(col, y, label);
            col += label.graphemes(true).count() as i32;
        }
        let filled = (i64::from(width) * i64::from(promille) / 1000) as i32;
        for i in 0..width.max(0) {
            self.put(col + i, y, if i < filled { '#' } else { '-' });
        }
        if let Some(label) = end_label {
            self.draw_string(col + width.max(0), y, label);
        }
    }

    fn draw_number(&mut self, x: i32, value: i32) {
        let ch = match value {
            0..=9 => (b'0' + value as u8) as char,
            10 => ':',
            _ => return,
        };
        self.put(x, 1, ch);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
