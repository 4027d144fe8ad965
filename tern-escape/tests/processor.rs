//! End-to-end behaviour of the processor over the byte-level parser.
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

use tern_escape::{
    Attr, CharsetIndex, ClearMode, Color, CursorShape, CursorStyle, Handler,
    LineClearMode, Mode, NamedColor, Processor, Rgb, StandardCharset,
    TabulationClearMode, SYNC_UPDATE_TIMEOUT,
};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Input(char),
    Bell,
    LineFeed,
    CarriageReturn,
    Backspace,
    Tab,
    SetTabStop,
    ClearTabStop(TabulationClearMode),
    TabForward(usize),
    TabBackward(usize),
    SetTitle(String),
    Goto(usize, usize),
    GotoLine(usize),
    GotoCol(usize),
    MoveUp(usize),
    MoveDown(usize),
    MoveForward(usize),
    MoveBackward(usize),
    MoveDownAndCr(usize),
    MoveUpAndCr(usize),
    SaveCursorPosition,
    RestoreCursorPosition,
    InsertBlank(usize),
    DeleteChars(usize),
    EraseChars(usize),
    InsertLines(usize),
    DeleteLines(usize),
    ClearLine(LineClearMode),
    ClearScreen(ClearMode),
    ScrollUp(usize),
    ScrollDown(usize),
    SetScrollingRegion(usize, usize),
    SetAttribute(Attr),
    ResetAttributes,
    SetForeground(Color),
    SetBackground(Color),
    ResetColors,
    SetCursorStyle(CursorStyle),
    SetMode(Mode),
    ResetMode(Mode),
    DeviceStatus(usize),
    IdentifyTerminal,
    Reset,
    Hook {
        params: Vec<Vec<u16>>,
        intermediates: Vec<u8>,
        ignore: bool,
        action: char,
    },
    Put(Vec<u8>),
    Unhook,
    ConfigureCharset(CharsetIndex, StandardCharset),
    SetActiveCharset(CharsetIndex),
}

#[derive(Default)]
struct RecordingHandler {
    events: Vec<Event>,
}

impl Handler for RecordingHandler {
    fn input(&mut self, c: char) {
        self.events.push(Event::Input(c));
    }

    fn bell(&mut self) {
        self.events.push(Event::Bell);
    }

    fn line_feed(&mut self) {
        self.events.push(Event::LineFeed);
    }

    fn carriage_return(&mut self) {
        self.events.push(Event::CarriageReturn);
    }

    fn backspace(&mut self) {
        self.events.push(Event::Backspace);
    }

    fn tab(&mut self) {
        self.events.push(Event::Tab);
    }

    fn set_tab_stop(&mut self) {
        self.events.push(Event::SetTabStop);
    }

    fn clear_tab_stop(&mut self, mode: TabulationClearMode) {
        self.events.push(Event::ClearTabStop(mode));
    }

    fn tab_forward(&mut self, count: usize) {
        self.events.push(Event::TabForward(count));
    }

    fn tab_backward(&mut self, count: usize) {
        self.events.push(Event::TabBackward(count));
    }

    fn set_title(&mut self, title: &str) {
        self.events.push(Event::SetTitle(title.to_owned()));
    }

    fn goto(&mut self, line: usize, col: usize) {
        self.events.push(Event::Goto(line, col));
    }

    fn goto_line(&mut self, line: usize) {
        self.events.push(Event::GotoLine(line));
    }

    fn goto_col(&mut self, col: usize) {
        self.events.push(Event::GotoCol(col));
    }

    fn move_up(&mut self, lines: usize) {
        self.events.push(Event::MoveUp(lines));
    }

    fn move_down(&mut self, lines: usize) {
        self.events.push(Event::MoveDown(lines));
    }

    fn move_forward(&mut self, cols: usize) {
        self.events.push(Event::MoveForward(cols));
    }

    fn move_backward(&mut self, cols: usize) {
        self.events.push(Event::MoveBackward(cols));
    }

    fn move_down_and_cr(&mut self, lines: usize) {
        self.events.push(Event::MoveDownAndCr(lines));
    }

    fn move_up_and_cr(&mut self, lines: usize) {
        self.events.push(Event::MoveUpAndCr(lines));
    }

    fn save_cursor_position(&mut self) {
        self.events.push(Event::SaveCursorPosition);
    }

    fn restore_cursor_position(&mut self) {
        self.events.push(Event::RestoreCursorPosition);
    }

    fn insert_blank(&mut self, count: usize) {
        self.events.push(Event::InsertBlank(count));
    }

    fn delete_chars(&mut self, count: usize) {
        self.events.push(Event::DeleteChars(count));
    }

    fn erase_chars(&mut self, count: usize) {
        self.events.push(Event::EraseChars(count));
    }

    fn insert_lines(&mut self, count: usize) {
        self.events.push(Event::InsertLines(count));
    }

    fn delete_lines(&mut self, count: usize) {
        self.events.push(Event::DeleteLines(count));
    }

    fn clear_line(&mut self, mode: LineClearMode) {
        self.events.push(Event::ClearLine(mode));
    }

    fn clear_screen(&mut self, mode: ClearMode) {
        self.events.push(Event::ClearScreen(mode));
    }

    fn scroll_up(&mut self, lines: usize) {
        self.events.push(Event::ScrollUp(lines));
    }

    fn scroll_down(&mut self, lines: usize) {
        self.events.push(Event::ScrollDown(lines));
    }

    fn set_scrolling_region(&mut self, top: usize, bottom: usize) {
        self.events.push(Event::SetScrollingRegion(top, bottom));
    }

    fn set_attribute(&mut self, attr: Attr) {
        self.events.push(Event::SetAttribute(attr));
    }

    fn reset_attributes(&mut self) {
        self.events.push(Event::ResetAttributes);
    }

    fn set_foreground(&mut self, color: Color) {
        self.events.push(Event::SetForeground(color));
    }

    fn set_background(&mut self, color: Color) {
        self.events.push(Event::SetBackground(color));
    }

    fn reset_colors(&mut self) {
        self.events.push(Event::ResetColors);
    }

    fn set_cursor_style(&mut self, style: CursorStyle) {
        self.events.push(Event::SetCursorStyle(style));
    }

    fn set_mode(&mut self, mode: Mode) {
        self.events.push(Event::SetMode(mode));
    }

    fn reset_mode(&mut self, mode: Mode) {
        self.events.push(Event::ResetMode(mode));
    }

    fn device_status(&mut self, kind: usize) {
        self.events.push(Event::DeviceStatus(kind));
    }

    fn identify_terminal(&mut self) {
        self.events.push(Event::IdentifyTerminal);
    }

    fn reset(&mut self) {
        self.events.push(Event::Reset);
    }

    fn hook(
        &mut self,
        params: &[Vec<u16>],
        intermediates: &[u8],
        ignore: bool,
        action: char,
    ) {
        self.events.push(Event::Hook {
            params: params.to_vec(),
            intermediates: intermediates.to_vec(),
            ignore,
            action,
        });
    }

    fn put(&mut self, data: &[u8]) {
        self.events.push(Event::Put(data.to_vec()));
    }

    fn unhook(&mut self) {
        self.events.push(Event::Unhook);
    }

    fn configure_charset(
        &mut self,
        index: CharsetIndex,
        charset: StandardCharset,
    ) {
        self.events.push(Event::ConfigureCharset(index, charset));
    }

    fn set_active_charset(&mut self, index: CharsetIndex) {
        self.events.push(Event::SetActiveCharset(index));
    }
}

fn process(bytes: &[u8]) -> Vec<Event> {
    let mut processor = Processor::new();
    let mut handler = RecordingHandler::default();
    processor.advance(&mut handler, bytes);
    handler.events
}

fn inputs(text: &str) -> Vec<Event> {
    text.chars().map(Event::Input).collect()
}

#[test]
fn colored_text_roundtrip() {
    let mut expected = inputs("Hello");
    expected.push(Event::SetForeground(Color::Named(NamedColor::Red)));
    expected.extend(inputs("World"));
    expected.push(Event::ResetAttributes);
    expected.push(Event::ResetColors);

    assert_eq!(process(b"Hello\x1b[31mWorld\x1b[0m"), expected);
}

#[test]
fn cursor_position() {
    assert_eq!(process(b"\x1b[10;20H"), vec![Event::Goto(10, 20)]);
    assert_eq!(process(b"\x1b[10;20f"), vec![Event::Goto(10, 20)]);
}

#[test]
fn cursor_position_defaults() {
    assert_eq!(process(b"\x1b[H"), vec![Event::Goto(1, 1)]);
    assert_eq!(process(b"\x1b[;;H"), vec![Event::Goto(1, 1)]);
    assert_eq!(process(b"\x1b[0;0H"), vec![Event::Goto(1, 1)]);
}

#[test]
fn cursor_movement() {
    let cases: Vec<(&[u8], Event)> = vec![
        (b"\x1b[5A", Event::MoveUp(5)),
        (b"\x1b[A", Event::MoveUp(1)),
        (b"\x1b[3B", Event::MoveDown(3)),
        (b"\x1b[7C", Event::MoveForward(7)),
        (b"\x1b[2D", Event::MoveBackward(2)),
        (b"\x1b[4E", Event::MoveDownAndCr(4)),
        (b"\x1b[4F", Event::MoveUpAndCr(4)),
        (b"\x1b[9G", Event::GotoCol(9)),
        (b"\x1b[G", Event::GotoCol(1)),
        (b"\x1b[12d", Event::GotoLine(12)),
        (b"\x1b[s", Event::SaveCursorPosition),
        (b"\x1b[u", Event::RestoreCursorPosition),
    ];

    for (input, expected) in cases {
        assert_eq!(process(input), vec![expected], "input {input:?}");
    }
}

#[test]
fn text_modification() {
    let cases: Vec<(&[u8], Event)> = vec![
        (b"\x1b[3L", Event::InsertLines(3)),
        (b"\x1b[M", Event::DeleteLines(1)),
        (b"\x1b[4P", Event::DeleteChars(4)),
        (b"\x1b[6@", Event::InsertBlank(6)),
        (b"\x1b[2X", Event::EraseChars(2)),
        (b"\x1b[5S", Event::ScrollUp(5)),
        (b"\x1b[5T", Event::ScrollDown(5)),
    ];

    for (input, expected) in cases {
        assert_eq!(process(input), vec![expected], "input {input:?}");
    }
}

#[test]
fn clear_operations() {
    assert_eq!(process(b"\x1b[K"), vec![Event::ClearLine(LineClearMode::Right)]);
    assert_eq!(
        process(b"\x1b[1K"),
        vec![Event::ClearLine(LineClearMode::Left)]
    );
    assert_eq!(process(b"\x1b[2K"), vec![Event::ClearLine(LineClearMode::All)]);
    assert_eq!(process(b"\x1b[J"), vec![Event::ClearScreen(ClearMode::Below)]);
    assert_eq!(process(b"\x1b[1J"), vec![Event::ClearScreen(ClearMode::Above)]);
    assert_eq!(process(b"\x1b[2J"), vec![Event::ClearScreen(ClearMode::All)]);
    assert_eq!(process(b"\x1b[3J"), vec![Event::ClearScreen(ClearMode::Saved)]);
}

#[test]
fn out_of_range_clear_modes_are_dropped() {
    assert_eq!(process(b"\x1b[7J"), vec![]);
    assert_eq!(process(b"\x1b[7K"), vec![]);
}

#[test]
fn scrolling_region() {
    assert_eq!(
        process(b"\x1b[2;10r"),
        vec![Event::SetScrollingRegion(2, 10)]
    );
    // An omitted or zero bottom margin is passed through; the handler
    // substitutes its own screen height.
    assert_eq!(process(b"\x1b[5r"), vec![Event::SetScrollingRegion(5, 0)]);
    assert_eq!(process(b"\x1b[r"), vec![Event::SetScrollingRegion(1, 0)]);
}

#[test]
fn sgr_attributes() {
    let cases: Vec<(&[u8], Attr)> = vec![
        (b"\x1b[1m", Attr::BOLD),
        (b"\x1b[2m", Attr::DIM),
        (b"\x1b[3m", Attr::ITALIC),
        (b"\x1b[4m", Attr::UNDERLINE),
        (b"\x1b[5m", Attr::BLINKING),
        (b"\x1b[7m", Attr::REVERSE),
        (b"\x1b[8m", Attr::HIDDEN),
        (b"\x1b[9m", Attr::STRIKETHROUGH),
        (b"\x1b[21m", Attr::DOUBLE_UNDERLINE),
    ];

    for (input, attr) in cases {
        assert_eq!(
            process(input),
            vec![Event::SetAttribute(attr)],
            "input {input:?}"
        );
    }
}

#[test]
fn sgr_multiple_attributes_in_one_sequence() {
    assert_eq!(
        process(b"\x1b[1;3;4m"),
        vec![
            Event::SetAttribute(Attr::BOLD),
            Event::SetAttribute(Attr::ITALIC),
            Event::SetAttribute(Attr::UNDERLINE),
        ]
    );
}

#[test]
fn sgr_empty_is_reset() {
    assert_eq!(
        process(b"\x1b[m"),
        vec![Event::ResetAttributes, Event::ResetColors]
    );
}

#[test]
fn sgr_named_colors() {
    assert_eq!(
        process(b"\x1b[31m"),
        vec![Event::SetForeground(Color::Named(NamedColor::Red))]
    );
    assert_eq!(
        process(b"\x1b[44m"),
        vec![Event::SetBackground(Color::Named(NamedColor::Blue))]
    );
    assert_eq!(
        process(b"\x1b[91m"),
        vec![Event::SetForeground(Color::Named(NamedColor::BrightRed))]
    );
    assert_eq!(
        process(b"\x1b[105m"),
        vec![Event::SetBackground(Color::Named(NamedColor::BrightMagenta))]
    );
    assert_eq!(
        process(b"\x1b[39m"),
        vec![Event::SetForeground(Color::Named(NamedColor::Foreground))]
    );
    assert_eq!(
        process(b"\x1b[49m"),
        vec![Event::SetBackground(Color::Named(NamedColor::Background))]
    );
}

#[test]
fn sgr_rgb_colors_in_both_separator_forms() {
    let expected = vec![Event::SetForeground(Color::Rgb(Rgb {
        r: 255,
        g: 128,
        b: 64,
    }))];

    assert_eq!(process(b"\x1b[38;2;255;128;64m"), expected);
    assert_eq!(process(b"\x1b[38:2:255:128:64m"), expected);
}

#[test]
fn sgr_indexed_colors_in_both_separator_forms() {
    let expected = vec![Event::SetForeground(Color::Indexed(128))];

    assert_eq!(process(b"\x1b[38;5;128m"), expected);
    assert_eq!(process(b"\x1b[38:5:128m"), expected);
}

#[test]
fn sgr_rgb_background() {
    assert_eq!(
        process(b"\x1b[48;2;50;75;100m"),
        vec![Event::SetBackground(Color::Rgb(Rgb { r: 50, g: 75, b: 100 }))]
    );
}

#[test]
fn sgr_rgb_channels_clamp_to_255() {
    assert_eq!(
        process(b"\x1b[38;2;300;128;999m"),
        vec![Event::SetForeground(Color::Rgb(Rgb {
            r: 255,
            g: 128,
            b: 255,
        }))]
    );
    assert_eq!(
        process(b"\x1b[38;5;300m"),
        vec![Event::SetForeground(Color::Indexed(255))]
    );
}

#[test]
fn sgr_extended_color_consumes_only_its_components() {
    // The parameters after the RGB triple belong to the next directive.
    assert_eq!(
        process(b"\x1b[38;2;10;20;30;1m"),
        vec![
            Event::SetForeground(Color::Rgb(Rgb { r: 10, g: 20, b: 30 })),
            Event::SetAttribute(Attr::BOLD),
        ]
    );
    assert_eq!(
        process(b"\x1b[38;5;99;4m"),
        vec![
            Event::SetForeground(Color::Indexed(99)),
            Event::SetAttribute(Attr::UNDERLINE),
        ]
    );
}

#[test]
fn sgr_degenerate_extended_color_is_dropped() {
    assert_eq!(process(b"\x1b[38m"), vec![]);
    assert_eq!(process(b"\x1b[48m"), vec![]);
}

#[test]
fn sgr_missing_components_default_to_zero() {
    assert_eq!(
        process(b"\x1b[38;2;255m"),
        vec![Event::SetForeground(Color::Rgb(Rgb { r: 255, g: 0, b: 0 }))]
    );
}

#[test]
fn modes() {
    assert_eq!(
        process(b"\x1b[?25l\x1b[?2004h"),
        vec![
            Event::ResetMode(Mode::ShowCursor),
            Event::SetMode(Mode::BracketedPaste),
        ]
    );
    assert_eq!(process(b"\x1b[4h"), vec![Event::SetMode(Mode::Insert)]);
    assert_eq!(process(b"\x1b[4l"), vec![Event::ResetMode(Mode::Insert)]);
    assert_eq!(
        process(b"\x1b[?1049h"),
        vec![Event::SetMode(Mode::AlternateScreenBuffer)]
    );
    assert_eq!(
        process(b"\x1b[?2026h\x1b[?2026l"),
        vec![
            Event::SetMode(Mode::SynchronizedOutput),
            Event::ResetMode(Mode::SynchronizedOutput),
        ]
    );
}

#[test]
fn multiple_modes_in_one_sequence() {
    assert_eq!(
        process(b"\x1b[?1000;1006h"),
        vec![
            Event::SetMode(Mode::Unknown(0x200 + 1000)),
            Event::SetMode(Mode::Unknown(0x200 + 1006)),
        ]
    );
}

#[test]
fn device_queries() {
    assert_eq!(process(b"\x1b[5n"), vec![Event::DeviceStatus(5)]);
    assert_eq!(process(b"\x1b[n"), vec![Event::DeviceStatus(0)]);
    assert_eq!(process(b"\x1b[c"), vec![Event::IdentifyTerminal]);
}

#[test]
fn tab_control() {
    assert_eq!(process(b"\x1b[g"), vec![Event::ClearTabStop(
        TabulationClearMode::Current
    )]);
    assert_eq!(process(b"\x1b[0g"), vec![Event::ClearTabStop(
        TabulationClearMode::Current
    )]);
    assert_eq!(process(b"\x1b[3g"), vec![Event::ClearTabStop(
        TabulationClearMode::All
    )]);
    assert_eq!(process(b"\x1b[1g"), vec![]);
    assert_eq!(process(b"\x1b[2I"), vec![Event::TabForward(2)]);
    assert_eq!(process(b"\x1b[Z"), vec![Event::TabBackward(1)]);
}

#[test]
fn cursor_style_selection() {
    let cases: Vec<(&[u8], CursorShape, bool)> = vec![
        (b"\x1b[0 q", CursorShape::Block, true),
        (b"\x1b[ q", CursorShape::Block, true),
        (b"\x1b[1 q", CursorShape::Block, true),
        (b"\x1b[2 q", CursorShape::Block, false),
        (b"\x1b[3 q", CursorShape::Underline, true),
        (b"\x1b[4 q", CursorShape::Underline, false),
        (b"\x1b[5 q", CursorShape::Beam, true),
        (b"\x1b[6 q", CursorShape::Beam, false),
    ];

    for (input, shape, blinking) in cases {
        assert_eq!(
            process(input),
            vec![Event::SetCursorStyle(CursorStyle { shape, blinking })],
            "input {input:?}"
        );
    }

    assert_eq!(process(b"\x1b[7 q"), vec![]);
}

#[test]
fn control_characters() {
    assert_eq!(
        process(b"\x07\x08\x09\x0a\x0b\x0c\x0d"),
        vec![
            Event::Bell,
            Event::Backspace,
            Event::Tab,
            Event::LineFeed,
            Event::LineFeed,
            Event::LineFeed,
            Event::CarriageReturn,
        ]
    );
}

#[test]
fn shift_in_and_out_switch_charsets() {
    assert_eq!(
        process(b"\x0e\x0f"),
        vec![
            Event::SetActiveCharset(CharsetIndex::G1),
            Event::SetActiveCharset(CharsetIndex::G0),
        ]
    );
}

#[test]
fn esc_sequences() {
    let cases: Vec<(&[u8], Event)> = vec![
        (b"\x1b7", Event::SaveCursorPosition),
        (b"\x1b8", Event::RestoreCursorPosition),
        (b"\x1bc", Event::Reset),
        (b"\x1bD", Event::MoveDown(1)),
        (b"\x1bE", Event::MoveDownAndCr(1)),
        (b"\x1bM", Event::MoveUp(1)),
        (b"\x1bH", Event::SetTabStop),
    ];

    for (input, expected) in cases {
        assert_eq!(process(input), vec![expected], "input {input:?}");
    }
}

#[test]
fn charset_designation() {
    assert_eq!(
        process(b"\x1b(0"),
        vec![Event::ConfigureCharset(
            CharsetIndex::G0,
            StandardCharset::SpecialLineDrawing
        )]
    );
    assert_eq!(
        process(b"\x1b(B"),
        vec![Event::ConfigureCharset(CharsetIndex::G0, StandardCharset::Ascii)]
    );
    assert_eq!(
        process(b"\x1b)0"),
        vec![Event::ConfigureCharset(
            CharsetIndex::G1,
            StandardCharset::SpecialLineDrawing
        )]
    );
    assert_eq!(
        process(b"\x1b*B"),
        vec![Event::ConfigureCharset(CharsetIndex::G2, StandardCharset::Ascii)]
    );
    assert_eq!(
        process(b"\x1b+B"),
        vec![Event::ConfigureCharset(CharsetIndex::G3, StandardCharset::Ascii)]
    );
}

#[test]
fn window_title() {
    assert_eq!(
        process(b"\x1b]0;My Title\x07"),
        vec![Event::SetTitle("My Title".to_owned())]
    );
    assert_eq!(
        process(b"\x1b]2;Another Title\x1b\\"),
        vec![Event::SetTitle("Another Title".to_owned())]
    );
    // Icon-name updates fold into the title.
    assert_eq!(
        process(b"\x1b]1;Icon\x07"),
        vec![Event::SetTitle("Icon".to_owned())]
    );
}

#[test]
fn unknown_osc_is_dropped() {
    assert_eq!(process(b"\x1b]666;payload\x07"), vec![]);
}

#[test]
fn dcs_sequence_batches_payload() {
    assert_eq!(
        process(b"\x1bP1$qm\x1b\\"),
        vec![
            Event::Hook {
                params: vec![vec![1]],
                intermediates: vec![b'$'],
                ignore: false,
                action: 'q',
            },
            Event::Put(b"m".to_vec()),
            Event::Unhook,
        ]
    );
}

#[test]
fn dcs_payload_with_embedded_esc_is_one_buffer() {
    assert_eq!(
        process(b"\x1bPqpayload1\x1bpayload2\x1b\\"),
        vec![
            Event::Hook {
                params: vec![],
                intermediates: vec![],
                ignore: false,
                action: 'q',
            },
            Event::Put(b"payload1\x1bpayload2".to_vec()),
            Event::Unhook,
        ]
    );
}

#[test]
fn dcs_terminates_on_bel_too() {
    assert_eq!(
        process(b"\x1bPqdata\x07"),
        vec![
            Event::Hook {
                params: vec![],
                intermediates: vec![],
                ignore: false,
                action: 'q',
            },
            Event::Put(b"data".to_vec()),
            Event::Unhook,
        ]
    );
}

#[test]
fn dcs_cancelled_by_can_still_unhooks() {
    assert_eq!(
        process(b"\x1bPqab\x18"),
        vec![
            Event::Hook {
                params: vec![],
                intermediates: vec![],
                ignore: false,
                action: 'q',
            },
            Event::Put(b"ab".to_vec()),
            Event::Unhook,
        ]
    );
}

#[test]
fn dcs_without_payload_skips_put() {
    assert_eq!(
        process(b"\x1bP0;1|\x1b\\"),
        vec![
            Event::Hook {
                params: vec![vec![0], vec![1]],
                intermediates: vec![],
                ignore: false,
                action: '|',
            },
            Event::Unhook,
        ]
    );
}

#[test]
fn utf8_split_across_advance_calls() {
    let mut processor = Processor::new();
    let mut handler = RecordingHandler::default();

    processor.advance(&mut handler, &[0xE4, 0xBD]);
    assert_eq!(handler.events, vec![]);

    processor.advance(&mut handler, &[0xA0]);
    assert_eq!(handler.events, vec![Event::Input('你')]);
}

#[test]
fn chunked_feeding_matches_single_slice() {
    let input: &[u8] =
        b"Hi\x1b[1;31mred\x1b[0m\x1b]0;t\x07\x1bP1$qm\x1b\\\x1b[?25l\xe4\xbd\xa0";

    let whole = process(input);
    for split in 1..input.len() {
        let mut processor = Processor::new();
        let mut handler = RecordingHandler::default();
        processor.advance(&mut handler, &input[..split]);
        processor.advance(&mut handler, &input[split..]);
        assert_eq!(handler.events, whole, "split at {split}");
    }
}

#[test]
fn overflowed_sequences_are_dropped() {
    // Three intermediates exceed the bound; the dispatch arrives with the
    // ignore flag set and the processor drops it.
    assert_eq!(process(b"\x1b[1 !#p"), vec![]);
}

#[test]
fn unknown_csi_final_is_dropped() {
    assert_eq!(process(b"\x1b[5y"), vec![]);
    assert_eq!(process(b"\x1b[1v"), vec![]);
}

#[test]
fn sync_update_buffers_until_end() {
    let mut processor = Processor::new();
    let mut handler = RecordingHandler::default();

    processor.begin_synchronized_update();
    assert!(processor.is_in_synchronized_update());

    processor.advance(&mut handler, b"frame \x1b[31m1\x1b[0m");
    assert_eq!(handler.events, vec![]);

    processor.end_synchronized_update(&mut handler);
    assert!(!processor.is_in_synchronized_update());

    let mut expected = inputs("frame ");
    expected.push(Event::SetForeground(Color::Named(NamedColor::Red)));
    expected.extend(inputs("1"));
    expected.push(Event::ResetAttributes);
    expected.push(Event::ResetColors);
    assert_eq!(handler.events, expected);
}

#[test]
fn sync_update_flushes_after_deadline() {
    let mut processor = Processor::new();
    let mut handler = RecordingHandler::default();

    processor.set_sync_timeout(Duration::ZERO);
    processor.begin_synchronized_update();
    std::thread::sleep(Duration::from_millis(2));

    processor.advance(&mut handler, b"hi");
    assert!(!processor.is_in_synchronized_update());
    assert_eq!(handler.events, inputs("hi"));
}

#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn sync_update_relays_buffer_to_output() {
    let sink = SharedSink::default();
    let mut processor = Processor::with_output(Box::new(sink.clone()));
    let mut handler = RecordingHandler::default();

    processor.begin_synchronized_update();
    processor.advance(&mut handler, b"buffered");
    processor.end_synchronized_update(&mut handler);

    assert_eq!(sink.0.borrow().as_slice(), b"buffered");
    assert_eq!(handler.events, inputs("buffered"));
}

#[test]
fn write_respects_the_sync_gate() {
    let sink = SharedSink::default();
    let mut processor = Processor::with_output(Box::new(sink.clone()));
    let mut handler = RecordingHandler::default();

    processor.write(b"direct");
    assert_eq!(sink.0.borrow().as_slice(), b"direct");

    processor.begin_synchronized_update();
    processor.write(b" held");
    assert_eq!(sink.0.borrow().as_slice(), b"direct");

    processor.end_synchronized_update(&mut handler);
    assert_eq!(sink.0.borrow().as_slice(), b"direct held");
}

#[test]
fn processor_reset_clears_sync_and_parser_state() {
    let mut processor = Processor::new();
    let mut handler = RecordingHandler::default();

    processor.begin_synchronized_update();
    processor.advance(&mut handler, b"lost");
    // Also leave the parser mid-sequence.
    processor.reset();

    assert!(!processor.is_in_synchronized_update());
    processor.advance(&mut handler, b"ok");
    assert_eq!(handler.events, inputs("ok"));
}

#[test]
fn default_sync_timeout_is_150ms() {
    let mut processor = Processor::new();
    assert_eq!(processor.sync_timeout(), SYNC_UPDATE_TIMEOUT);
    assert_eq!(SYNC_UPDATE_TIMEOUT, Duration::from_millis(150));

    processor.set_sync_timeout(Duration::from_millis(200));
    assert_eq!(processor.sync_timeout(), Duration::from_millis(200));
}

#[test]
fn processor_tracks_modes_externally() {
    let mut processor = Processor::new();

    assert!(!processor.is_mode(Mode::BracketedPaste));
    processor.set_mode(Mode::BracketedPaste, true);
    assert!(processor.is_mode(Mode::BracketedPaste));
    processor.set_mode(Mode::BracketedPaste, false);
    assert!(!processor.is_mode(Mode::BracketedPaste));
}

#[test]
fn mixed_shell_output() {
    let input = b"\x1b[?2004h$ \x1b[32mls\x1b[0m\r\ntotal 48\r\n\x1b[?2004l";
    let events = process(input);

    let mode_events: Vec<&Event> = events
        .iter()
        .filter(|event| {
            matches!(event, Event::SetMode(_) | Event::ResetMode(_))
        })
        .collect();
    assert_eq!(
        mode_events,
        vec![
            &Event::SetMode(Mode::BracketedPaste),
            &Event::ResetMode(Mode::BracketedPaste),
        ]
    );

    let text: String = events
        .iter()
        .filter_map(|event| match event {
            Event::Input(c) => Some(*c),
            _ => None,
        })
        .collect();
    assert_eq!(text, "$ lstotal 48");
}
