//! C0 and C1 control-character constants.
//!
//! The C0 block (`0x00..=0x1F`) is executed directly by the parser; the C1
//! block (`0x80..=0x9F`) mostly arrives in its 7-bit `ESC Fe` form, but a
//! few single-byte C1 introducers (DCS, CSI, OSC) are recognised as well.

/// C0 control set (`0x00..=0x1F`).
pub mod c0 {
    /// Null.
    pub const NUL: u8 = 0x00;
    /// Start of Heading.
    pub const SOH: u8 = 0x01;
    /// Start of Text.
    pub const STX: u8 = 0x02;
    /// End of Text.
    pub const ETX: u8 = 0x03;
    /// End of Transmission.
    pub const EOT: u8 = 0x04;
    /// Enquiry.
    pub const ENQ: u8 = 0x05;
    /// Acknowledge.
    pub const ACK: u8 = 0x06;
    /// Bell.
    pub const BEL: u8 = 0x07;
    /// Backspace.
    pub const BS: u8 = 0x08;
    /// Horizontal Tab.
    pub const HT: u8 = 0x09;
    /// Line Feed.
    pub const LF: u8 = 0x0A;
    /// Vertical Tab.
    pub const VT: u8 = 0x0B;
    /// Form Feed.
    pub const FF: u8 = 0x0C;
    /// Carriage Return.
    pub const CR: u8 = 0x0D;
    /// Shift Out, selects the G1 character set.
    pub const SO: u8 = 0x0E;
    /// Shift In, selects the G0 character set.
    pub const SI: u8 = 0x0F;
    /// Data Link Escape.
    pub const DLE: u8 = 0x10;
    /// Device Control 1 (XON).
    pub const DC1: u8 = 0x11;
    /// Device Control 2.
    pub const DC2: u8 = 0x12;
    /// Device Control 3 (XOFF).
    pub const DC3: u8 = 0x13;
    /// Device Control 4.
    pub const DC4: u8 = 0x14;
    /// Negative Acknowledge.
    pub const NAK: u8 = 0x15;
    /// Synchronous Idle.
    pub const SYN: u8 = 0x16;
    /// End of Transmission Block.
    pub const ETB: u8 = 0x17;
    /// Cancel.
    pub const CAN: u8 = 0x18;
    /// End of Medium.
    pub const EM: u8 = 0x19;
    /// Substitute.
    pub const SUB: u8 = 0x1A;
    /// Escape.
    pub const ESC: u8 = 0x1B;
    /// File Separator.
    pub const FS: u8 = 0x1C;
    /// Group Separator.
    pub const GS: u8 = 0x1D;
    /// Record Separator.
    pub const RS: u8 = 0x1E;
    /// Unit Separator.
    pub const US: u8 = 0x1F;
}

/// C1 control set (`0x80..=0x9F`).
pub mod c1 {
    /// Padding Character.
    pub const PAD: u8 = 0x80;
    /// High Octet Preset.
    pub const HOP: u8 = 0x81;
    /// Break Permitted Here.
    pub const BPH: u8 = 0x82;
    /// No Break Here.
    pub const NBH: u8 = 0x83;
    /// Index.
    pub const IND: u8 = 0x84;
    /// Next Line.
    pub const NEL: u8 = 0x85;
    /// Start of Selected Area.
    pub const SSA: u8 = 0x86;
    /// End of Selected Area.
    pub const ESA: u8 = 0x87;
    /// Horizontal Tab Set.
    pub const HTS: u8 = 0x88;
    /// Horizontal Tab with Justification.
    pub const HTJ: u8 = 0x89;
    /// Vertical Tab Set.
    pub const VTS: u8 = 0x8A;
    /// Partial Line Down.
    pub const PLD: u8 = 0x8B;
    /// Partial Line Up.
    pub const PLU: u8 = 0x8C;
    /// Reverse Index.
    pub const RI: u8 = 0x8D;
    /// Single Shift 2.
    pub const SS2: u8 = 0x8E;
    /// Single Shift 3.
    pub const SS3: u8 = 0x8F;
    /// Device Control String.
    pub const DCS: u8 = 0x90;
    /// Private Use 1.
    pub const PU1: u8 = 0x91;
    /// Private Use 2.
    pub const PU2: u8 = 0x92;
    /// Set Transmit State.
    pub const STS: u8 = 0x93;
    /// Cancel Character.
    pub const CCH: u8 = 0x94;
    /// Message Waiting.
    pub const MW: u8 = 0x95;
    /// Start of Protected Area.
    pub const SPA: u8 = 0x96;
    /// End of Protected Area.
    pub const EPA: u8 = 0x97;
    /// Start of String.
    pub const SOS: u8 = 0x98;
    /// Single Graphic Character Introducer.
    pub const SGCI: u8 = 0x99;
    /// Single Character Introducer.
    pub const SCI: u8 = 0x9A;
    /// Control Sequence Introducer.
    pub const CSI: u8 = 0x9B;
    /// String Terminator.
    pub const ST: u8 = 0x9C;
    /// Operating System Command.
    pub const OSC: u8 = 0x9D;
    /// Privacy Message.
    pub const PM: u8 = 0x9E;
    /// Application Program Command.
    pub const APC: u8 = 0x9F;
}
