//! Interpretation of plain escape sequences (non-CSI).
use log::debug;

use crate::charset::{CharsetIndex, StandardCharset};
use crate::handler::Handler;

/// Translate one dispatched escape sequence into handler calls.
pub(crate) fn perform<H: Handler>(
    handler: &mut H,
    intermediates: &[u8],
    ignore: bool,
    byte: u8,
) {
    if ignore {
        return;
    }

    match byte {
        // DECSC
        b'7' => handler.save_cursor_position(),
        // DECRC
        b'8' => handler.restore_cursor_position(),
        // RIS
        b'c' => handler.reset(),
        // IND
        b'D' => handler.move_down(1),
        // NEL
        b'E' => handler.move_down_and_cr(1),
        // RI
        b'M' => handler.move_up(1),
        // HTS
        b'H' => handler.set_tab_stop(),
        b'B' => configure_charset(handler, intermediates, StandardCharset::Ascii),
        b'0' => configure_charset(
            handler,
            intermediates,
            StandardCharset::SpecialLineDrawing,
        ),
        _ => debug!(
            "[unhandled esc] byte={:?}, intermediates={intermediates:?}",
            char::from(byte)
        ),
    }
}

/// Designate `charset` for the slot selected by the intermediate byte.
fn configure_charset<H: Handler>(
    handler: &mut H,
    intermediates: &[u8],
    charset: StandardCharset,
) {
    let index = match intermediates {
        [b'('] => CharsetIndex::G0,
        [b')'] => CharsetIndex::G1,
        [b'*'] => CharsetIndex::G2,
        [b'+'] => CharsetIndex::G3,
        _ => return,
    };

    handler.configure_charset(index, charset);
}
