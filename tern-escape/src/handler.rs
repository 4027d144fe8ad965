//! High-level sink for semantic terminal operations.
use crate::attr::Attr;
use crate::charset::{CharsetIndex, StandardCharset};
use crate::color::Color;
use crate::cursor::CursorStyle;
use crate::mode::{ClearMode, LineClearMode, Mode, TabulationClearMode};

/// Semantic terminal operations produced by the
/// [`Processor`](crate::Processor).
///
/// Every method has a no-op default, so an implementation only spells out
/// the operations it cares about. Line and column arguments are 1-based;
/// count arguments are zero-or-more with the wire default already applied.
pub trait Handler {
    // Text and display

    /// Display a character at the cursor position.
    fn input(&mut self, _c: char) {}

    /// Ring the terminal bell.
    fn bell(&mut self) {}

    /// Move the cursor down one line, scrolling if needed.
    fn line_feed(&mut self) {}

    /// Move the cursor to the beginning of the line.
    fn carriage_return(&mut self) {}

    /// Move the cursor back one column.
    fn backspace(&mut self) {}

    /// Move the cursor to the next tab stop.
    fn tab(&mut self) {}

    /// Set a tab stop at the current cursor column.
    fn set_tab_stop(&mut self) {}

    /// Clear tab stops.
    fn clear_tab_stop(&mut self, _mode: TabulationClearMode) {}

    /// Move the cursor forward `count` tab stops.
    fn tab_forward(&mut self, _count: usize) {}

    /// Move the cursor backward `count` tab stops.
    fn tab_backward(&mut self, _count: usize) {}

    /// Set the window title.
    fn set_title(&mut self, _title: &str) {}

    // Cursor movement

    /// Move the cursor to an absolute position.
    fn goto(&mut self, _line: usize, _col: usize) {}

    /// Move the cursor to a specific line, keeping the column.
    fn goto_line(&mut self, _line: usize) {}

    /// Move the cursor to a specific column, keeping the line.
    fn goto_col(&mut self, _col: usize) {}

    /// Move the cursor up `lines` lines.
    fn move_up(&mut self, _lines: usize) {}

    /// Move the cursor down `lines` lines.
    fn move_down(&mut self, _lines: usize) {}

    /// Move the cursor forward `cols` columns.
    fn move_forward(&mut self, _cols: usize) {}

    /// Move the cursor backward `cols` columns.
    fn move_backward(&mut self, _cols: usize) {}

    /// Move the cursor down `lines` lines and to column 1.
    fn move_down_and_cr(&mut self, _lines: usize) {}

    /// Move the cursor up `lines` lines and to column 1.
    fn move_up_and_cr(&mut self, _lines: usize) {}

    /// Save the cursor position.
    fn save_cursor_position(&mut self) {}

    /// Restore the saved cursor position.
    fn restore_cursor_position(&mut self) {}

    // Text modification

    /// Insert `count` blank characters at the cursor.
    fn insert_blank(&mut self, _count: usize) {}

    /// Delete `count` characters at the cursor.
    fn delete_chars(&mut self, _count: usize) {}

    /// Erase `count` characters at the cursor, replacing them with blanks.
    fn erase_chars(&mut self, _count: usize) {}

    /// Insert `count` blank lines at the cursor line.
    fn insert_lines(&mut self, _count: usize) {}

    /// Delete `count` lines at the cursor line.
    fn delete_lines(&mut self, _count: usize) {}

    // Screen operations

    /// Clear the current line.
    fn clear_line(&mut self, _mode: LineClearMode) {}

    /// Clear the screen.
    fn clear_screen(&mut self, _mode: ClearMode) {}

    /// Scroll the scrolling region up `lines` lines.
    fn scroll_up(&mut self, _lines: usize) {}

    /// Scroll the scrolling region down `lines` lines.
    fn scroll_down(&mut self, _lines: usize) {}

    /// Set the scrolling region. A `bottom` of zero stands for the last
    /// line of the screen, which only the handler knows.
    fn set_scrolling_region(&mut self, _top: usize, _bottom: usize) {}

    // Attributes and colours

    /// Enable a character attribute.
    fn set_attribute(&mut self, _attr: Attr) {}

    /// Reset all character attributes to their defaults.
    fn reset_attributes(&mut self) {}

    /// Set the foreground colour.
    fn set_foreground(&mut self, _color: Color) {}

    /// Set the background colour.
    fn set_background(&mut self, _color: Color) {}

    /// Reset foreground and background to their defaults.
    fn reset_colors(&mut self) {}

    // Cursor appearance

    /// Set the cursor shape and blink state.
    fn set_cursor_style(&mut self, _style: CursorStyle) {}

    /// Set cursor visibility.
    fn set_cursor_visible(&mut self, _visible: bool) {}

    // Terminal modes

    /// Enable a terminal mode.
    fn set_mode(&mut self, _mode: Mode) {}

    /// Disable a terminal mode.
    fn reset_mode(&mut self, _mode: Mode) {}

    // Device operations

    /// Report device status of the requested kind.
    fn device_status(&mut self, _kind: usize) {}

    /// Identify the terminal in response to DA.
    fn identify_terminal(&mut self) {}

    /// Perform a soft terminal reset.
    fn reset(&mut self) {}

    /// Perform a hard terminal reset.
    fn hard_reset(&mut self) {}

    // Device control strings

    /// A DCS sequence has begun. `params` holds the parameter groups from
    /// the header, `action` its final character.
    fn hook(
        &mut self,
        _params: &[Vec<u16>],
        _intermediates: &[u8],
        _ignore: bool,
        _action: char,
    ) {
    }

    /// The complete DCS payload, delivered once, just before
    /// [`unhook`](Self::unhook).
    fn put(&mut self, _data: &[u8]) {}

    /// The DCS sequence has terminated.
    fn unhook(&mut self) {}

    // Character sets

    /// Designate a standard charset for a slot.
    fn configure_charset(
        &mut self,
        _index: CharsetIndex,
        _charset: StandardCharset,
    ) {
    }

    /// Activate one of the designated charsets.
    fn set_active_charset(&mut self, _index: CharsetIndex) {}
}
