/// Position in the escape-sequence automaton.
///
/// The state set and its transitions follow Paul Williams' ANSI parser,
/// extended with the DEC/xterm conventions for OSC strings, DCS payloads
/// and sub-parameters. Every byte fed to the parser maps to an action and
/// possibly a transition; malformed input lands in one of the ignore
/// states and is consumed without dispatch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Steady state: printable bytes, C0 controls and UTF-8 text.
    #[default]
    Ground,
    /// An ESC byte has been seen; the next byte selects the family.
    Escape,
    /// Collecting intermediates of a plain ESC sequence.
    EscapeIntermediate,
    /// Right after the CSI introducer, before any parameter byte.
    CsiEntry,
    /// Collecting numeric parameters and separators of a CSI sequence.
    CsiParam,
    /// Collecting intermediates between the CSI parameters and the final.
    CsiIntermediate,
    /// Malformed CSI; consume up to the final byte without dispatching.
    CsiIgnore,
    /// Collecting an OSC payload until BEL or ST.
    OscString,
    /// Right after the DCS introducer, before any parameter byte.
    DcsEntry,
    /// Collecting numeric parameters of a DCS header.
    DcsParam,
    /// Collecting intermediates of a DCS header.
    DcsIntermediate,
    /// Streaming DCS payload bytes to the performer until ST.
    DcsPassthrough,
    /// Malformed DCS; consume until the string terminator.
    DcsIgnore,
    /// SOS, PM or APC string; consumed without dispatch until ST.
    SosPmApcString,
}
