use tern_vte::{Params, Parser, Performer};

#[derive(Default)]
struct LoggingPerformer;

impl Performer for LoggingPerformer {
    fn print(&mut self, c: char) {
        println!("print: {c}");
    }

    fn execute(&mut self, byte: u8) {
        println!("exec: {byte:#04x}");
    }

    fn hook(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    ) {
        let groups: Vec<&[u16]> = params.iter().collect();
        println!(
            "DCS hook: params: {groups:?}, interms: {intermediates:?}, \
             ignore: {ignore}, final: {action:?}"
        );
    }

    fn put(&mut self, byte: u8) {
        println!("DCS put: {byte:#04x}");
    }

    fn unhook(&mut self) {
        println!("DCS unhook");
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], bell_terminated: bool) {
        println!("OSC: params: {params:?}, bell: {bell_terminated}");
    }

    fn csi_dispatch(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    ) {
        let groups: Vec<&[u16]> = params.iter().collect();
        println!(
            "CSI: params: {groups:?}, interms: {intermediates:?}, \
             ignore: {ignore}, final: {action:?}"
        );
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], ignore: bool, byte: u8) {
        println!(
            "ESC: interms: {intermediates:?}, ignore: {ignore}, \
             final: {byte:#04x}"
        );
    }
}

fn main() {
    let mut parser = Parser::new();
    let mut performer = LoggingPerformer;
    parser.advance(&mut performer, b"\x1b[31mhi\x1b[0m\x1b]0;title\x07");
}
