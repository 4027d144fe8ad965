use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use log::debug;
use tern_vte::control::c0;
use tern_vte::{Params, Parser, Performer};

use crate::charset::CharsetIndex;
use crate::handler::Handler;
use crate::mode::Mode;
use crate::sync::SyncState;
use crate::{csi, esc, osc};

/// Semantic interpreter over the byte-level parser.
///
/// A `Processor` owns a [`Parser`] and acts as its [`Performer`],
/// translating the raw action stream into [`Handler`] calls: cursor
/// motion, SGR attributes and colours, mode changes, tab control,
/// scrolling regions, charset designation and DCS forwarding. It also
/// implements the synchronized-update gate of DEC private mode 2026 and
/// an external mode map.
///
/// The processor keeps no handler state of its own; a single instance may
/// serve a whole stream but must not be shared between threads.
#[derive(Default)]
pub struct Processor {
    parser: Parser,
    sync: SyncState,
    dcs: DcsState,
    modes: HashMap<Mode, bool>,
    output: Option<Box<dyn Write>>,
}

/// Per-sequence DCS payload buffer; `put` bytes are batched and delivered
/// in one piece at `unhook`.
#[derive(Default)]
struct DcsState {
    active: bool,
    buffer: Vec<u8>,
}

impl Processor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with an output sink. Bytes held back by a
    /// synchronized update are relayed to the sink when the update ends.
    #[must_use]
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self { output: Some(output), ..Self::default() }
    }

    /// Feed a chunk of bytes, delivering semantic calls to `handler`.
    ///
    /// While a synchronized update is active the bytes are buffered
    /// instead; once the update ends (or its deadline passes) they are
    /// parsed in order, so no handler calls are lost.
    pub fn advance<H: Handler>(&mut self, handler: &mut H, bytes: &[u8]) {
        if self.sync.is_enabled() {
            self.sync.push(bytes);
            if self.sync.timed_out() {
                let buffer = self.sync.finish();
                self.process(handler, &buffer);
            }
            return;
        }

        self.process(handler, bytes);
    }

    /// Start a synchronized update: subsequent `advance` calls buffer
    /// their input until the update ends or times out.
    pub fn begin_synchronized_update(&mut self) {
        self.sync.begin();
    }

    /// End a synchronized update: relay the buffered bytes to the output
    /// sink, if one is attached, and parse them for `handler`.
    pub fn end_synchronized_update<H: Handler>(&mut self, handler: &mut H) {
        if !self.sync.is_enabled() {
            return;
        }

        let buffer = self.sync.finish();
        if !buffer.is_empty() {
            if let Some(output) = self.output.as_mut() {
                let _ = output.write_all(&buffer);
            }
        }
        self.process(handler, &buffer);
    }

    /// Whether a synchronized update is currently buffering input.
    #[must_use]
    pub fn is_in_synchronized_update(&self) -> bool {
        self.sync.is_enabled()
    }

    /// Replace the default 150 ms synchronized-update deadline.
    pub fn set_sync_timeout(&mut self, timeout: Duration) {
        self.sync.set_timeout(timeout);
    }

    /// Current synchronized-update deadline.
    #[must_use]
    pub fn sync_timeout(&self) -> Duration {
        self.sync.timeout()
    }

    /// Relay bytes to the output sink, honouring the synchronized-update
    /// gate: during an update the bytes join the buffer instead.
    pub fn write(&mut self, data: &[u8]) {
        if self.sync.is_enabled() {
            self.sync.push(data);
        } else if let Some(output) = self.output.as_mut() {
            let _ = output.write_all(data);
        }
    }

    /// Track a mode externally; the handler still receives `set_mode` /
    /// `reset_mode` calls as they are parsed.
    pub fn set_mode(&mut self, mode: Mode, enabled: bool) {
        self.modes.insert(mode, enabled);
    }

    /// Whether an externally tracked mode is enabled.
    #[must_use]
    pub fn is_mode(&self, mode: Mode) -> bool {
        self.modes.get(&mode).copied().unwrap_or(false)
    }

    /// Soft reset: the parser returns to ground and all sync and DCS
    /// state is dropped.
    pub fn reset(&mut self) {
        self.parser.reset();
        self.sync.finish();
        self.dcs.active = false;
        self.dcs.buffer.clear();
    }

    fn process<H: Handler>(&mut self, handler: &mut H, bytes: &[u8]) {
        let mut performer = SemanticPerformer { handler, dcs: &mut self.dcs };
        self.parser.advance(&mut performer, bytes);
    }
}

/// Adapter borrowing the handler for the duration of one `advance` call.
struct SemanticPerformer<'a, H: Handler> {
    handler: &'a mut H,
    dcs: &'a mut DcsState,
}

impl<H: Handler> Performer for SemanticPerformer<'_, H> {
    fn print(&mut self, c: char) {
        self.handler.input(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            c0::BEL => self.handler.bell(),
            c0::BS => self.handler.backspace(),
            c0::HT => self.handler.tab(),
            c0::LF | c0::VT | c0::FF => self.handler.line_feed(),
            c0::CR => self.handler.carriage_return(),
            c0::SO => self.handler.set_active_charset(CharsetIndex::G1),
            c0::SI => self.handler.set_active_charset(CharsetIndex::G0),
            _ => debug!("[unhandled execute] byte={byte:#04x}"),
        }
    }

    fn hook(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    ) {
        let groups: Vec<Vec<u16>> =
            params.iter().map(<[u16]>::to_vec).collect();

        self.dcs.active = true;
        self.dcs.buffer.clear();

        self.handler.hook(&groups, intermediates, ignore, action);
    }

    fn put(&mut self, byte: u8) {
        if self.dcs.active {
            self.dcs.buffer.push(byte);
        }
    }

    fn unhook(&mut self) {
        if !self.dcs.active {
            return;
        }

        if !self.dcs.buffer.is_empty() {
            self.handler.put(&self.dcs.buffer);
        }
        self.dcs.active = false;
        self.handler.unhook();
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], bell_terminated: bool) {
        osc::perform(self.handler, params, bell_terminated);
    }

    fn csi_dispatch(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    ) {
        csi::perform(self.handler, params, intermediates, ignore, action);
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], ignore: bool, byte: u8) {
        esc::perform(self.handler, intermediates, ignore, byte);
    }
}
