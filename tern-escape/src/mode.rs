/// Offset that moves a DEC private mode identifier out of the ANSI range.
/// Tags at or above this value denote `CSI ?` modes.
pub const PRIVATE_MODE_BASE: u16 = 0x200;

/// Terminal mode set or reset through `CSI h` / `CSI l`.
///
/// The 16-bit raw tag keeps ANSI modes below [`PRIVATE_MODE_BASE`] and DEC
/// private modes at `PRIVATE_MODE_BASE + id`, so a single value carries
/// both the identifier and the namespace it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// KAM: lock the keyboard.
    KeyboardAction,
    /// IRM: insert rather than replace on print.
    Insert,
    /// IRM reset companion of [`Mode::Insert`].
    Replace,
    /// SRM: local echo off.
    SendReceive,
    /// LNM: line feed implies carriage return.
    AutomaticNewline,
    /// DECCKM: cursor keys send application sequences.
    ApplicationCursor,
    /// DECKPAM: keypad sends application sequences.
    ApplicationKeypad,
    /// Switch to the alternate screen.
    AlternateScreen,
    /// DECTCEM: cursor visibility.
    ShowCursor,
    /// Save/restore cursor as if by DECSC/DECRC.
    SaveRestoreCursor,
    /// Alternate screen plus cursor save/restore.
    AlternateScreenBuffer,
    /// Wrap pasted text in bracketing sequences.
    BracketedPaste,
    /// Synchronized output (DEC private mode 2026).
    SynchronizedOutput,
    /// Mode with no name here; the raw tag is preserved.
    Unknown(u16),
}

impl Mode {
    /// Build a mode from its raw 16-bit tag.
    #[must_use]
    pub fn from_raw(raw: u16) -> Self {
        if raw >= PRIVATE_MODE_BASE {
            match raw - PRIVATE_MODE_BASE {
                1 => Self::ApplicationCursor,
                2 => Self::ApplicationKeypad,
                3 => Self::AlternateScreen,
                25 => Self::ShowCursor,
                1048 => Self::SaveRestoreCursor,
                1049 => Self::AlternateScreenBuffer,
                2004 => Self::BracketedPaste,
                2026 => Self::SynchronizedOutput,
                _ => Self::Unknown(raw),
            }
        } else {
            match raw {
                2 => Self::KeyboardAction,
                4 => Self::Insert,
                0x104 => Self::Replace,
                12 => Self::SendReceive,
                20 => Self::AutomaticNewline,
                _ => Self::Unknown(raw),
            }
        }
    }

    /// Raw 16-bit tag of the mode.
    #[must_use]
    pub fn raw(self) -> u16 {
        match self {
            Self::KeyboardAction => 2,
            Self::Insert => 4,
            Self::Replace => 0x104,
            Self::SendReceive => 12,
            Self::AutomaticNewline => 20,
            Self::ApplicationCursor => PRIVATE_MODE_BASE + 1,
            Self::ApplicationKeypad => PRIVATE_MODE_BASE + 2,
            Self::AlternateScreen => PRIVATE_MODE_BASE + 3,
            Self::ShowCursor => PRIVATE_MODE_BASE + 25,
            Self::SaveRestoreCursor => PRIVATE_MODE_BASE + 1048,
            Self::AlternateScreenBuffer => PRIVATE_MODE_BASE + 1049,
            Self::BracketedPaste => PRIVATE_MODE_BASE + 2004,
            Self::SynchronizedOutput => PRIVATE_MODE_BASE + 2026,
            Self::Unknown(raw) => raw,
        }
    }

    /// Whether this is a DEC private (`CSI ?`) mode.
    #[must_use]
    pub fn is_private(self) -> bool {
        self.raw() >= PRIVATE_MODE_BASE
    }
}

/// Mode for clearing a line, relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClearMode {
    /// Clear right of cursor.
    Right,
    /// Clear left of cursor.
    Left,
    /// Clear entire line.
    All,
}

/// Mode for clearing the screen, relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMode {
    /// Clear below cursor.
    Below,
    /// Clear above cursor.
    Above,
    /// Clear entire screen.
    All,
    /// Clear saved lines (scrollback).
    Saved,
}

/// Mode for clearing tab stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabulationClearMode {
    /// Clear the stop under the cursor.
    Current,
    /// Clear all stops.
    All,
}
