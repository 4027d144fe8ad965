use crate::params::Params;
use crate::performer::Performer;
use crate::state::State;
use crate::utf8::{self, PartialUtf8};

/// Maximum number of intermediate bytes collected for a sequence.
pub const MAX_INTERMEDIATES: usize = 2;
/// Maximum size of an OSC payload; excess bytes are dropped.
pub const MAX_OSC_RAW: usize = 1024;
/// Maximum number of `;`-separated OSC fields.
pub const MAX_OSC_PARAMS: usize = 16;

/// Digit accumulation saturates here.
const PARAM_CAP: u16 = 9999;

/// Byte-driven escape sequence parser.
///
/// [`advance`](Self::advance) consumes a slice of raw terminal output and
/// drives a [`Performer`] with the resulting actions. Sequences and UTF-8
/// codepoints may be split across any number of calls; the parser carries
/// the necessary state over. Parsing is total: malformed input is either
/// consumed silently or dispatched with the `ignore` flag set, and
/// `advance` never fails.
#[derive(Debug, Default)]
pub struct Parser {
    state: State,
    intermediates: [u8; MAX_INTERMEDIATES],
    intermediate_idx: usize,
    params: Params,
    current_param: u16,
    has_current_param: bool,
    in_subparam: bool,
    osc_raw: Vec<u8>,
    osc_params: [usize; MAX_OSC_PARAMS],
    osc_num_params: usize,
    ignoring: bool,
    pending_esc: bool,
    partial_utf8: PartialUtf8,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current automaton state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Return the parser to ground state and drop all per-sequence and
    /// UTF-8 scratch state.
    pub fn reset(&mut self) {
        self.state = State::Ground;
        self.reset_sequence();
        self.partial_utf8.clear();
    }

    /// Feed a chunk of bytes through the state machine.
    pub fn advance<P: Performer>(&mut self, performer: &mut P, bytes: &[u8]) {
        let mut i = 0;

        if self.partial_utf8.is_pending() {
            i += self.advance_partial_utf8(performer, bytes);
        }

        while i < bytes.len() {
            match self.state {
                State::Ground => {
                    i += self.advance_ground(performer, &bytes[i..]);
                },
                state => {
                    let byte = bytes[i];
                    i += 1;
                    match state {
                        State::Escape => self.advance_escape(performer, byte),
                        State::EscapeIntermediate => {
                            self.advance_escape_intermediate(performer, byte);
                        },
                        State::CsiEntry => {
                            self.advance_csi_entry(performer, byte);
                        },
                        State::CsiParam => {
                            self.advance_csi_param(performer, byte);
                        },
                        State::CsiIntermediate => {
                            self.advance_csi_intermediate(performer, byte);
                        },
                        State::CsiIgnore => {
                            self.advance_csi_ignore(performer, byte);
                        },
                        State::OscString => {
                            self.advance_osc_string(performer, byte);
                        },
                        State::DcsEntry => {
                            self.advance_dcs_entry(performer, byte);
                        },
                        State::DcsParam => {
                            self.advance_dcs_param(performer, byte);
                        },
                        State::DcsIntermediate => {
                            self.advance_dcs_intermediate(performer, byte);
                        },
                        State::DcsPassthrough => {
                            self.advance_dcs_passthrough(performer, byte);
                        },
                        State::DcsIgnore => self.advance_dcs_ignore(byte),
                        State::SosPmApcString => {
                            self.advance_sos_pm_apc_string(byte);
                        },
                        State::Ground => unreachable!(),
                    }
                },
            }
        }
    }

    /// Ground state runs over a sub-slice so printable runs stay in a tight
    /// loop; returns how many bytes were consumed.
    fn advance_ground<P: Performer>(
        &mut self,
        performer: &mut P,
        bytes: &[u8],
    ) -> usize {
        for (i, &byte) in bytes.iter().enumerate() {
            match byte {
                0x1B => {
                    self.state = State::Escape;
                    self.reset_sequence();
                    return i + 1;
                },
                0x00..=0x1A | 0x1C..=0x1F => performer.execute(byte),
                0x20..=0x7E => performer.print(char::from(byte)),
                0x7F => {},
                0x90 => {
                    self.state = State::DcsEntry;
                    self.reset_sequence();
                    return i + 1;
                },
                0x9B => {
                    self.state = State::CsiEntry;
                    self.reset_sequence();
                    return i + 1;
                },
                0x9D => {
                    self.state = State::OscString;
                    self.reset_sequence();
                    return i + 1;
                },
                0x80..=0xBF => {
                    // Continuation byte without a preceding starter.
                    performer.print(char::REPLACEMENT_CHARACTER);
                },
                0xC0..=0xFF => {
                    return i + self.advance_utf8(performer, &bytes[i..]);
                },
            }
        }

        bytes.len()
    }

    fn advance_escape<P: Performer>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            0x00..=0x1F => performer.execute(byte),
            0x20..=0x2F => {
                self.collect_intermediate(byte);
                self.state = State::EscapeIntermediate;
            },
            b'[' => self.state = State::CsiEntry,
            b']' => self.state = State::OscString,
            b'P' => self.state = State::DcsEntry,
            b'X' | b'^' | b'_' => self.state = State::SosPmApcString,
            0x30..=0x7E => {
                performer.esc_dispatch(
                    self.intermediates(),
                    self.ignoring,
                    byte,
                );
                self.state = State::Ground;
            },
            _ => {},
        }
    }

    fn advance_escape_intermediate<P: Performer>(
        &mut self,
        performer: &mut P,
        byte: u8,
    ) {
        match byte {
            0x00..=0x1F => performer.execute(byte),
            0x20..=0x2F => self.collect_intermediate(byte),
            0x30..=0x7E => {
                performer.esc_dispatch(
                    self.intermediates(),
                    self.ignoring,
                    byte,
                );
                self.state = State::Ground;
            },
            _ => {},
        }
    }

    fn advance_csi_entry<P: Performer>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            0x00..=0x1F => performer.execute(byte),
            0x20..=0x2F => {
                self.collect_intermediate(byte);
                self.state = State::CsiIntermediate;
            },
            b'0'..=b'9' => {
                self.param_digit(byte);
                self.state = State::CsiParam;
            },
            b':' => {
                self.param_subparam();
                self.state = State::CsiParam;
            },
            b';' => {
                self.param_separator();
                self.state = State::CsiParam;
            },
            0x3C..=0x3F => {
                self.collect_intermediate(byte);
                self.state = State::CsiParam;
            },
            0x40..=0x7E => self.csi_dispatch(performer, byte),
            _ => {},
        }
    }

    fn advance_csi_param<P: Performer>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            0x00..=0x1F => performer.execute(byte),
            0x20..=0x2F => {
                self.collect_intermediate(byte);
                self.state = State::CsiIntermediate;
            },
            b'0'..=b'9' => self.param_digit(byte),
            b':' => self.param_subparam(),
            b';' => self.param_separator(),
            // A private marker past the leading position is malformed.
            0x3C..=0x3F => self.state = State::CsiIgnore,
            0x40..=0x7E => self.csi_dispatch(performer, byte),
            _ => {},
        }
    }

    fn advance_csi_intermediate<P: Performer>(
        &mut self,
        performer: &mut P,
        byte: u8,
    ) {
        match byte {
            0x00..=0x1F => performer.execute(byte),
            0x20..=0x2F => self.collect_intermediate(byte),
            0x30..=0x3F => self.state = State::CsiIgnore,
            0x40..=0x7E => self.csi_dispatch(performer, byte),
            _ => {},
        }
    }

    fn advance_csi_ignore<P: Performer>(
        &mut self,
        performer: &mut P,
        byte: u8,
    ) {
        match byte {
            0x00..=0x1F => performer.execute(byte),
            0x40..=0x7E => self.state = State::Ground,
            _ => {},
        }
    }

    fn advance_osc_string<P: Performer>(
        &mut self,
        performer: &mut P,
        byte: u8,
    ) {
        match byte {
            0x07 => {
                self.osc_dispatch(performer, true);
                self.state = State::Ground;
            },
            // The ESC of a potential `ESC \` terminator is buffered and
            // trimmed again when the backslash arrives.
            b'\\' if self.osc_raw.last() == Some(&0x1B) => {
                self.osc_raw.pop();
                self.osc_dispatch(performer, false);
                self.state = State::Ground;
            },
            _ => self.osc_put(byte),
        }
    }

    fn advance_dcs_entry<P: Performer>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            0x00..=0x1F => {},
            0x20..=0x2F => {
                self.collect_intermediate(byte);
                self.state = State::DcsIntermediate;
            },
            b'0'..=b'9' => {
                self.param_digit(byte);
                self.state = State::DcsParam;
            },
            b':' => {
                self.param_subparam();
                self.state = State::DcsParam;
            },
            b';' => {
                self.param_separator();
                self.state = State::DcsParam;
            },
            0x3C..=0x3F => {
                self.collect_intermediate(byte);
                self.state = State::DcsParam;
            },
            0x40..=0x7E => self.dcs_hook(performer, byte),
            _ => {},
        }
    }

    fn advance_dcs_param<P: Performer>(&mut self, performer: &mut P, byte: u8) {
        match byte {
            0x00..=0x1F => {},
            0x20..=0x2F => {
                self.collect_intermediate(byte);
                self.state = State::DcsIntermediate;
            },
            b'0'..=b'9' => self.param_digit(byte),
            b':' => self.param_subparam(),
            b';' => self.param_separator(),
            0x3C..=0x3F => self.state = State::DcsIgnore,
            0x40..=0x7E => self.dcs_hook(performer, byte),
            _ => {},
        }
    }

    fn advance_dcs_intermediate<P: Performer>(
        &mut self,
        performer: &mut P,
        byte: u8,
    ) {
        match byte {
            0x00..=0x1F => {},
            0x20..=0x2F => self.collect_intermediate(byte),
            0x30..=0x3F => self.state = State::DcsIgnore,
            0x40..=0x7E => self.dcs_hook(performer, byte),
            _ => {},
        }
    }

    fn advance_dcs_passthrough<P: Performer>(
        &mut self,
        performer: &mut P,
        byte: u8,
    ) {
        match byte {
            0x1B => self.pending_esc = true,
            b'\\' if self.pending_esc => {
                self.pending_esc = false;
                performer.unhook();
                self.state = State::Ground;
            },
            0x07 => {
                self.pending_esc = false;
                performer.unhook();
                self.state = State::Ground;
            },
            0x18 | 0x1A => {
                // CAN/SUB abort the string; the sink is unhooked before the
                // control is executed.
                self.pending_esc = false;
                performer.unhook();
                performer.execute(byte);
                self.state = State::Ground;
            },
            _ => {
                if self.pending_esc {
                    // The deferred ESC was payload after all.
                    performer.put(0x1B);
                    self.pending_esc = false;
                }
                performer.put(byte);
            },
        }
    }

    fn advance_dcs_ignore(&mut self, byte: u8) {
        match byte {
            0x1B => self.pending_esc = true,
            b'\\' if self.pending_esc => {
                self.pending_esc = false;
                self.state = State::Ground;
            },
            0x18 | 0x1A => {
                self.pending_esc = false;
                self.state = State::Ground;
            },
            _ => self.pending_esc = false,
        }
    }

    fn advance_sos_pm_apc_string(&mut self, byte: u8) {
        if byte == b'\\' {
            self.state = State::Ground;
        }
    }

    // Parameter accumulation

    fn param_digit(&mut self, byte: u8) {
        let digit = u16::from(byte - b'0');

        if self.has_current_param {
            self.current_param = self
                .current_param
                .saturating_mul(10)
                .saturating_add(digit)
                .min(PARAM_CAP);
        } else {
            self.current_param = digit;
            self.has_current_param = true;
        }
    }

    fn param_separator(&mut self) {
        if self.has_current_param {
            if self.in_subparam {
                self.extend_param(self.current_param);
            } else {
                self.push_param(self.current_param);
            }
        } else if !self.in_subparam {
            // Empty field, as in `;;`.
            self.push_param(0);
        }

        self.current_param = 0;
        self.has_current_param = false;
        self.in_subparam = false;
    }

    fn param_subparam(&mut self) {
        let value = if self.has_current_param { self.current_param } else { 0 };

        if self.in_subparam {
            self.extend_param(value);
        } else if self.params.is_full() {
            self.ignoring = true;
        } else {
            self.params.push(value);
            self.in_subparam = true;
        }

        self.current_param = 0;
        self.has_current_param = false;
    }

    /// Flush a pending accumulator value before a dispatch or hook.
    fn finish_param(&mut self) {
        if !self.has_current_param {
            return;
        }

        if self.in_subparam {
            self.extend_param(self.current_param);
        } else {
            self.push_param(self.current_param);
        }

        self.current_param = 0;
        self.has_current_param = false;
    }

    fn push_param(&mut self, value: u16) {
        if self.params.is_full() {
            self.ignoring = true;
        } else {
            self.params.push(value);
        }
    }

    fn extend_param(&mut self, value: u16) {
        if self.params.is_full() {
            self.ignoring = true;
        } else {
            self.params.extend(value);
        }
    }

    fn collect_intermediate(&mut self, byte: u8) {
        if self.intermediate_idx < MAX_INTERMEDIATES {
            self.intermediates[self.intermediate_idx] = byte;
            self.intermediate_idx += 1;
        } else {
            self.ignoring = true;
        }
    }

    fn intermediates(&self) -> &[u8] {
        &self.intermediates[..self.intermediate_idx]
    }

    // Dispatch helpers

    fn csi_dispatch<P: Performer>(&mut self, performer: &mut P, byte: u8) {
        self.finish_param();
        performer.csi_dispatch(
            &self.params,
            &self.intermediates[..self.intermediate_idx],
            self.ignoring,
            char::from(byte),
        );
        self.reset_sequence();
        self.state = State::Ground;
    }

    fn dcs_hook<P: Performer>(&mut self, performer: &mut P, byte: u8) {
        self.finish_param();
        performer.hook(
            &self.params,
            &self.intermediates[..self.intermediate_idx],
            self.ignoring,
            char::from(byte),
        );
        self.state = State::DcsPassthrough;
    }

    fn osc_put(&mut self, byte: u8) {
        if self.osc_raw.len() >= MAX_OSC_RAW {
            return;
        }

        if byte == b';' && self.osc_num_params < MAX_OSC_PARAMS {
            self.osc_params[self.osc_num_params] = self.osc_raw.len();
            self.osc_num_params += 1;
        } else {
            self.osc_raw.push(byte);
        }
    }

    fn osc_dispatch<P: Performer>(
        &mut self,
        performer: &mut P,
        bell_terminated: bool,
    ) {
        let mut params: Vec<&[u8]> = Vec::with_capacity(self.osc_num_params + 1);
        let mut start = 0;

        for &end in &self.osc_params[..self.osc_num_params] {
            if end > start && end <= self.osc_raw.len() {
                params.push(&self.osc_raw[start..end]);
                start = end;
            }
        }

        if start < self.osc_raw.len() {
            params.push(&self.osc_raw[start..]);
        }

        performer.osc_dispatch(&params, bell_terminated);
        self.reset_sequence();
    }

    fn reset_sequence(&mut self) {
        self.params.clear();
        self.intermediate_idx = 0;
        self.ignoring = false;
        self.osc_raw.clear();
        self.osc_num_params = 0;
        self.current_param = 0;
        self.has_current_param = false;
        self.in_subparam = false;
        self.pending_esc = false;
    }

    // UTF-8

    /// Decode the multi-byte sequence starting at `bytes[0]` (>= 0xC0);
    /// returns how many bytes were consumed.
    fn advance_utf8<P: Performer>(
        &mut self,
        performer: &mut P,
        bytes: &[u8],
    ) -> usize {
        let Some(want) = utf8::sequence_len(bytes[0]) else {
            performer.print(char::REPLACEMENT_CHARACTER);
            return 1;
        };

        let mut len = 1;
        while len < want && len < bytes.len() {
            if !utf8::is_continuation(bytes[len]) {
                performer.print(char::REPLACEMENT_CHARACTER);
                return 1;
            }
            len += 1;
        }

        if len < want {
            // Slice ended mid-codepoint; finish on the next call.
            self.partial_utf8.set(&bytes[..len], want);
            return len;
        }

        match std::str::from_utf8(&bytes[..want]) {
            Ok(text) => {
                if let Some(c) = text.chars().next() {
                    performer.print(c);
                }
                want
            },
            Err(_) => {
                performer.print(char::REPLACEMENT_CHARACTER);
                1
            },
        }
    }

    /// Resume a codepoint split across `advance` calls; returns how many
    /// input bytes were consumed.
    fn advance_partial_utf8<P: Performer>(
        &mut self,
        performer: &mut P,
        bytes: &[u8],
    ) -> usize {
        let mut consumed = 0;

        while !self.partial_utf8.is_complete() {
            let Some(&byte) = bytes.get(consumed) else {
                return consumed;
            };

            if !utf8::is_continuation(byte) {
                // A control or fresh starter interrupts the pending
                // codepoint; it is left unconsumed and handled in ground.
                performer.print(char::REPLACEMENT_CHARACTER);
                self.partial_utf8.clear();
                return consumed;
            }

            self.partial_utf8.push(byte);
            consumed += 1;
        }

        match std::str::from_utf8(self.partial_utf8.bytes()) {
            Ok(text) => {
                if let Some(c) = text.chars().next() {
                    performer.print(c);
                }
            },
            Err(_) => performer.print(char::REPLACEMENT_CHARACTER),
        }
        self.partial_utf8.clear();

        consumed
    }
}
