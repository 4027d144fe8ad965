//! Interpretation of operating system commands (`OSC`).
use log::debug;

use crate::handler::Handler;

/// Translate one dispatched operating system command into handler calls.
/// The terminator kind carries no meaning beyond framing.
pub(crate) fn perform<H: Handler>(
    handler: &mut H,
    params: &[&[u8]],
    _bell_terminated: bool,
) {
    if params.is_empty() {
        return;
    }

    match number(params[0]) {
        // 0 sets both icon name and title, 2 the title; 1, the icon name
        // alone, is folded into the title here as well.
        0 | 1 | 2 => set_title(handler, params),
        other => debug!("[unhandled osc] number={other}"),
    }
}

/// Integer prefix of the first parameter.
fn number(param: &[u8]) -> usize {
    param
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .fold(0usize, |acc, byte| {
            acc.saturating_mul(10).saturating_add(usize::from(byte - b'0'))
        })
}

fn set_title<H: Handler>(handler: &mut H, params: &[&[u8]]) {
    if params.len() < 2 {
        return;
    }

    handler.set_title(&String::from_utf8_lossy(params[1]));
}
