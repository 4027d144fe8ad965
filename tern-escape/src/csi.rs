//! Interpretation of control sequences (`CSI`).
use log::debug;
use tern_vte::Params;

use crate::attr::Attr;
use crate::color::{Color, NamedColor, Rgb};
use crate::cursor::{CursorShape, CursorStyle};
use crate::handler::Handler;
use crate::mode::{
    ClearMode, LineClearMode, Mode, TabulationClearMode, PRIVATE_MODE_BASE,
};

/// Translate one dispatched control sequence into handler calls.
pub(crate) fn perform<H: Handler>(
    handler: &mut H,
    params: &Params,
    intermediates: &[u8],
    ignore: bool,
    action: char,
) {
    if ignore {
        return;
    }

    let groups: Vec<&[u16]> = params.iter().collect();
    let private = intermediates.first() == Some(&b'?');

    match action {
        'A' => handler.move_up(param(&groups, 0, 0, 1)),
        'B' => handler.move_down(param(&groups, 0, 0, 1)),
        'C' => handler.move_forward(param(&groups, 0, 0, 1)),
        'D' => handler.move_backward(param(&groups, 0, 0, 1)),
        'E' => handler.move_down_and_cr(param(&groups, 0, 0, 1)),
        'F' => handler.move_up_and_cr(param(&groups, 0, 0, 1)),
        'G' => handler.goto_col(param(&groups, 0, 0, 1)),
        'H' | 'f' => {
            let line = param(&groups, 0, 0, 1);
            let col = param(&groups, 1, 0, 1);
            handler.goto(line, col);
        },
        'J' => match param(&groups, 0, 0, 0) {
            0 => handler.clear_screen(ClearMode::Below),
            1 => handler.clear_screen(ClearMode::Above),
            2 => handler.clear_screen(ClearMode::All),
            3 => handler.clear_screen(ClearMode::Saved),
            mode => debug!("[unhandled csi] ED mode={mode}"),
        },
        'K' => match param(&groups, 0, 0, 0) {
            0 => handler.clear_line(LineClearMode::Right),
            1 => handler.clear_line(LineClearMode::Left),
            2 => handler.clear_line(LineClearMode::All),
            mode => debug!("[unhandled csi] EL mode={mode}"),
        },
        'L' => handler.insert_lines(param(&groups, 0, 0, 1)),
        'M' => handler.delete_lines(param(&groups, 0, 0, 1)),
        'P' => handler.delete_chars(param(&groups, 0, 0, 1)),
        'S' => handler.scroll_up(param(&groups, 0, 0, 1)),
        'T' => handler.scroll_down(param(&groups, 0, 0, 1)),
        'X' => handler.erase_chars(param(&groups, 0, 0, 1)),
        '@' => handler.insert_blank(param(&groups, 0, 0, 1)),
        'd' => handler.goto_line(param(&groups, 0, 0, 1)),
        'm' => sgr(handler, &groups),
        'r' => {
            let top = param(&groups, 0, 0, 1);
            // Zero stands for the bottom of the screen; the handler owns
            // the screen height and substitutes it.
            let bottom = param(&groups, 1, 0, 0);
            handler.set_scrolling_region(top, bottom);
        },
        's' => handler.save_cursor_position(),
        'u' => handler.restore_cursor_position(),
        'h' => {
            for group in &groups {
                handler.set_mode(mode_from_param(group[0], private));
            }
        },
        'l' => {
            for group in &groups {
                handler.reset_mode(mode_from_param(group[0], private));
            }
        },
        'n' => handler.device_status(param(&groups, 0, 0, 0)),
        'c' => handler.identify_terminal(),
        'g' => match param(&groups, 0, 0, 0) {
            0 => handler.clear_tab_stop(TabulationClearMode::Current),
            3 => handler.clear_tab_stop(TabulationClearMode::All),
            mode => debug!("[unhandled csi] TBC mode={mode}"),
        },
        'I' => handler.tab_forward(param(&groups, 0, 0, 1)),
        'Z' => handler.tab_backward(param(&groups, 0, 0, 1)),
        'q' if intermediates == [b' '] => cursor_style(handler, &groups),
        _ => debug!(
            "[unhandled csi] action={action:?}, intermediates={intermediates:?}"
        ),
    }
}

/// Fetch a parameter with the ECMA-48 "omitted or zero means default"
/// convention applied.
fn param(groups: &[&[u16]], group: usize, index: usize, default: usize) -> usize {
    let Some(&value) = groups.get(group).and_then(|group| group.get(index))
    else {
        return default;
    };

    let value = usize::from(value);
    if value == 0 && default != 0 {
        default
    } else {
        value
    }
}

fn mode_from_param(id: u16, private: bool) -> Mode {
    let raw = if private { PRIVATE_MODE_BASE + id } else { id };
    Mode::from_raw(raw)
}

/// DECSCUSR: select the cursor shape and blink state.
fn cursor_style<H: Handler>(handler: &mut H, groups: &[&[u16]]) {
    let style = param(groups, 0, 0, 0);
    let shape = match style {
        0..=2 => CursorShape::Block,
        3 | 4 => CursorShape::Underline,
        5 | 6 => CursorShape::Beam,
        _ => {
            debug!("[unhandled csi] DECSCUSR style={style}");
            return;
        },
    };

    // Zero restores the default, which blinks; otherwise odd selects the
    // blinking variant.
    let blinking = style == 0 || style % 2 == 1;
    handler.set_cursor_style(CursorStyle { shape, blinking });
}

/// SGR: apply graphic rendition parameters group by group.
fn sgr<H: Handler>(handler: &mut H, groups: &[&[u16]]) {
    if groups.is_empty() {
        // An empty parameter list is a plain reset.
        handler.reset_attributes();
        handler.reset_colors();
        return;
    }

    let mut i = 0;
    while i < groups.len() {
        let group = groups[i];
        let mut consumed = 0;

        match group[0] {
            0 => {
                handler.reset_attributes();
                handler.reset_colors();
            },
            1 => handler.set_attribute(Attr::BOLD),
            2 => handler.set_attribute(Attr::DIM),
            3 => handler.set_attribute(Attr::ITALIC),
            4 => handler.set_attribute(Attr::UNDERLINE),
            5 => handler.set_attribute(Attr::BLINKING),
            7 => handler.set_attribute(Attr::REVERSE),
            8 => handler.set_attribute(Attr::HIDDEN),
            9 => handler.set_attribute(Attr::STRIKETHROUGH),
            21 => handler.set_attribute(Attr::DOUBLE_UNDERLINE),
            30..=37 => handler.set_foreground(Color::Named(
                NamedColor::from_index((group[0] - 30) as u8),
            )),
            38 => {
                let (color, used) = extended_color(group, groups, i);
                if let Some(color) = color {
                    handler.set_foreground(color);
                }
                consumed = used;
            },
            39 => handler.set_foreground(Color::Named(NamedColor::Foreground)),
            40..=47 => handler.set_background(Color::Named(
                NamedColor::from_index((group[0] - 40) as u8),
            )),
            48 => {
                let (color, used) = extended_color(group, groups, i);
                if let Some(color) = color {
                    handler.set_background(color);
                }
                consumed = used;
            },
            49 => handler.set_background(Color::Named(NamedColor::Background)),
            90..=97 => handler.set_foreground(Color::Named(
                NamedColor::from_index((group[0] - 90 + 8) as u8),
            )),
            100..=107 => handler.set_background(Color::Named(
                NamedColor::from_index((group[0] - 100 + 8) as u8),
            )),
            other => debug!("[unhandled sgr] param={other}"),
        }

        i += 1 + consumed;
    }
}

/// Parse an extended (38/48) colour. Returns the colour, if any, and the
/// number of *following* groups consumed: zero for the `38:2:r:g:b` form
/// where the components are sub-parameters of the same group, up to four
/// for the legacy `38;2;r;g;b` form where each component is its own group.
fn extended_color(
    group: &[u16],
    groups: &[&[u16]],
    at: usize,
) -> (Option<Color>, usize) {
    if group.len() > 1 {
        return (color_spec(&group[1..]), 0);
    }

    let rest: Vec<u16> =
        groups[at + 1..].iter().map(|group| group[0]).collect();
    let used = match rest.first() {
        Some(2) => rest.len().min(4),
        Some(5) => rest.len().min(2),
        _ => 0,
    };

    (color_spec(&rest), used)
}

/// Decode a colour specification after the 38/48 selector. Missing
/// components default to zero; channels clamp to 255.
fn color_spec(spec: &[u16]) -> Option<Color> {
    let channel =
        |index: usize| spec.get(index).copied().unwrap_or(0).min(255) as u8;

    match spec.first()? {
        2 => Some(Color::Rgb(Rgb {
            r: channel(1),
            g: channel(2),
            b: channel(3),
        })),
        5 => Some(Color::Indexed(channel(1))),
        _ => None,
    }
}
