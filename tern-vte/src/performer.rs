//! Callbacks invoked by the byte-level parser.
//!
//! The [`Parser`](crate::Parser) walks a byte stream and reduces it to the
//! action set of the ECMA-48 escape-sequence state machine. Those actions
//! are handed to a [`Performer`] implementation, which is responsible for
//! mutating a terminal model, re-dispatching to a higher-level sink,
//! logging, or whatever else the embedding application needs.
//! Implementations should be prepared to receive any call order that is
//! valid for the protocol and must not perform additional parsing of their
//! own.
use crate::params::Params;

/// Sink for the raw actions emitted by the parser.
///
/// ## Terminology
///
/// An *intermediate* is a byte in `0x20..=0x2F` collected between the
/// sequence introducer and its final byte; a leading CSI private marker
/// (`<`, `=`, `>`, `?`) is collected the same way. No standard defines
/// sequences with more than two intermediates, so the `ignore` flag is set
/// and the excess discarded when that bound (or the parameter bound) is
/// exceeded; sinks may then drop the dispatch safely.
pub trait Performer {
    /// Emits a single printable Unicode code point.
    fn print(&mut self, c: char);

    /// Executes an immediate C0 control function (`BEL`, `BS`, `CR`, ...).
    fn execute(&mut self, byte: u8);

    /// Signals the start of a device control string. The control function
    /// is selected by the final character `action` together with the
    /// collected parameters and intermediates.
    fn hook(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    );

    /// Passes one payload byte of the active device control string to the
    /// handler chosen in [`hook`](Self::hook). C0 controls are passed too.
    fn put(&mut self, byte: u8);

    /// Marks the end of the current device control string.
    fn unhook(&mut self);

    /// Dispatches an operating system command. `params` holds the raw
    /// `;`-separated fields; `bell_terminated` records whether the string
    /// ended with BEL rather than ST.
    fn osc_dispatch(&mut self, params: &[&[u8]], bell_terminated: bool);

    /// Dispatches a control sequence once its final character `action`
    /// arrives.
    fn csi_dispatch(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    );

    /// Dispatches a plain escape sequence once its final byte arrives.
    fn esc_dispatch(&mut self, intermediates: &[u8], ignore: bool, byte: u8);
}
