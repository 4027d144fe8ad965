//! Byte-level parser for terminal escape sequences.
//!
//! The [`Parser`] reduces a raw stream of terminal output, following the
//! state machine of Paul Williams' ANSI parser with the usual DEC/xterm
//! extensions, into the fine-grained action set of a [`Performer`]: print
//! a rune, execute a control, dispatch a CSI/ESC/OSC sequence, stream a
//! DCS payload. It makes no assumption about chunk boundaries: escape
//! sequences and UTF-8 codepoints may be split across any number of
//! [`Parser::advance`] calls.
//!
//! This crate knows nothing about terminal semantics; pairing the parser
//! with an interpreter that speaks cursor motion, colours and modes is the
//! job of `tern-escape`.

pub mod control;
mod params;
mod parser;
mod performer;
mod state;
mod utf8;

pub use params::{Params, ParamsIter, MAX_PARAMS};
pub use parser::{Parser, MAX_INTERMEDIATES, MAX_OSC_PARAMS, MAX_OSC_RAW};
pub use performer::Performer;
pub use state::State;
