/// Standard character sets that can be designated as G0 through G3.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StandardCharset {
    /// US ASCII.
    #[default]
    Ascii,
    /// DEC Special Character and Line Drawing set.
    SpecialLineDrawing,
}

/// Identifies which graphic character set a designation targets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CharsetIndex {
    /// The default set, designated as ASCII at startup.
    #[default]
    G0,
    G1,
    G2,
    G3,
}

impl StandardCharset {
    /// Map a character through the active charset. Ascii is the common
    /// case and does as little as possible.
    #[inline]
    #[must_use]
    pub fn map(self, c: char) -> char {
        match self {
            Self::Ascii => c,
            Self::SpecialLineDrawing => match c {
                '_' => ' ',
                '`' => '◆',
                'a' => '▒',
                'b' => '\u{2409}', // Symbol for horizontal tabulation
                'c' => '\u{240c}', // Symbol for form feed
                'd' => '\u{240d}', // Symbol for carriage return
                'e' => '\u{240a}', // Symbol for line feed
                'f' => '°',
                'g' => '±',
                'h' => '\u{2424}', // Symbol for newline
                'i' => '\u{240b}', // Symbol for vertical tabulation
                'j' => '┘',
                'k' => '┐',
                'l' => '┌',
                'm' => '└',
                'n' => '┼',
                'o' => '⎺',
                'p' => '⎻',
                'q' => '─',
                'r' => '⎼',
                's' => '⎽',
                't' => '├',
                'u' => '┤',
                'v' => '┴',
                'w' => '┬',
                'x' => '│',
                'y' => '≤',
                'z' => '≥',
                '{' => 'π',
                '|' => '≠',
                '}' => '£',
                '~' => '·',
                _ => c,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_maps_identity() {
        for c in ['a', 'q', 'x', '~', 'Z', ' '] {
            assert_eq!(StandardCharset::Ascii.map(c), c);
        }
    }

    #[test]
    fn line_drawing_maps_box_characters() {
        let charset = StandardCharset::SpecialLineDrawing;
        let cases = [
            ('_', ' '),
            ('`', '◆'),
            ('a', '▒'),
            ('j', '┘'),
            ('k', '┐'),
            ('l', '┌'),
            ('m', '└'),
            ('n', '┼'),
            ('q', '─'),
            ('t', '├'),
            ('u', '┤'),
            ('v', '┴'),
            ('w', '┬'),
            ('x', '│'),
            ('y', '≤'),
            ('z', '≥'),
            ('{', 'π'),
            ('|', '≠'),
            ('}', '£'),
            ('~', '·'),
        ];

        for (input, expected) in cases {
            assert_eq!(charset.map(input), expected);
        }
    }

    #[test]
    fn line_drawing_leaves_other_bytes_alone() {
        let charset = StandardCharset::SpecialLineDrawing;
        for c in ['A', 'Z', '0', '9', ' ', '^'] {
            assert_eq!(charset.map(c), c);
        }
    }
}
