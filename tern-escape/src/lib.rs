//! Semantic interpretation of terminal escape sequences.
//!
//! `tern-escape` sits on top of the byte-level automaton from `tern-vte`
//! and turns its raw action stream into well-typed terminal operations: a
//! [`Processor`] wraps a parser and drives a [`Handler`] with cursor
//! motion, SGR attributes and colours, mode changes, tab and scrolling
//! control, window titles, charset designation and batched DCS payloads.
//!
//! The handler owns all terminal state (grid, scrollback, rendering);
//! this crate owns none of it and never blocks. Synchronized updates
//! (DEC private mode 2026) are implemented as a plain buffer with a
//! deadline polled on each [`Processor::advance`] call.
mod attr;
mod charset;
mod color;
mod csi;
mod cursor;
mod esc;
mod handler;
mod mode;
mod osc;
mod processor;
mod sync;

pub use attr::Attr;
pub use charset::{CharsetIndex, StandardCharset};
pub use color::{Color, NamedColor, ParseColorError, Rgb};
pub use cursor::{CursorShape, CursorStyle};
pub use handler::Handler;
pub use mode::{
    ClearMode, LineClearMode, Mode, TabulationClearMode, PRIVATE_MODE_BASE,
};
pub use processor::Processor;
pub use sync::{
    BEGIN_SYNCHRONIZED_UPDATE, END_SYNCHRONIZED_UPDATE, SYNC_UPDATE_TIMEOUT,
};
