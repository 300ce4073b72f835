//! Line wrapping for the chat display and the message info views.

use textwrap::core::display_width;

/// Split text into lines of max width (columns). Uses textwrap for correct UTF-8 handling.
fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, width)
        .into_iter()
        .map(|cow| cow.into_owned())
        .collect()
}

/// Split a message into display lines respecting message newlines, then wrap to `width`.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    msg.split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                wrap_text(line, width)
            }
        })
        .collect()
}

/// Break text at exactly `width` columns, keeping every character (spaces included).
/// Only message newlines and the column limit start a new line.
pub(crate) fn hard_wrap(msg: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in msg.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;
        let mut buf = [0u8; 4];
        for c in line.chars() {
            let w = display_width(c.encode_utf8(&mut buf));
            if width > 0 && current_width + w > width && !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
        out.push(current);
    }
    out
}
