//! Print every [`Handler`] call produced for a given byte stream.
use tern_escape::{
    Attr, CharsetIndex, ClearMode, Color, Handler, LineClearMode, Mode,
    Processor,
};

#[derive(Default)]
struct LoggingHandler {
    seq: usize,
}

impl LoggingHandler {
    fn log(&mut self, call: &str) {
        self.seq += 1;
        println!("{:02}: {call}", self.seq);
    }
}

impl Handler for LoggingHandler {
    fn input(&mut self, c: char) {
        self.log(&format!("input {c:?}"));
    }

    fn line_feed(&mut self) {
        self.log("line_feed");
    }

    fn carriage_return(&mut self) {
        self.log("carriage_return");
    }

    fn set_title(&mut self, title: &str) {
        self.log(&format!("set_title {title:?}"));
    }

    fn goto(&mut self, line: usize, col: usize) {
        self.log(&format!("goto {line},{col}"));
    }

    fn clear_screen(&mut self, mode: ClearMode) {
        self.log(&format!("clear_screen {mode:?}"));
    }

    fn clear_line(&mut self, mode: LineClearMode) {
        self.log(&format!("clear_line {mode:?}"));
    }

    fn set_attribute(&mut self, attr: Attr) {
        self.log(&format!("set_attribute {attr:?}"));
    }

    fn reset_attributes(&mut self) {
        self.log("reset_attributes");
    }

    fn set_foreground(&mut self, color: Color) {
        self.log(&format!("set_foreground {color:?}"));
    }

    fn set_background(&mut self, color: Color) {
        self.log(&format!("set_background {color:?}"));
    }

    fn reset_colors(&mut self) {
        self.log("reset_colors");
    }

    fn set_mode(&mut self, mode: Mode) {
        self.log(&format!("set_mode {mode:?}"));
    }

    fn reset_mode(&mut self, mode: Mode) {
        self.log(&format!("reset_mode {mode:?}"));
    }

    fn set_active_charset(&mut self, index: CharsetIndex) {
        self.log(&format!("set_active_charset {index:?}"));
    }
}

fn main() {
    env_logger::init();

    let mut processor = Processor::new();
    let mut handler = LoggingHandler::default();

    let bytes = b"Hello \x1b[1;31mtern\x1b[0m!\r\n\
                  \x1b[2J\x1b[10;20H\x1b]0;demo\x07\x1b[?2004h";

    processor.advance(&mut handler, bytes);
}
