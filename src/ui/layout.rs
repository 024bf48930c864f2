use std::io::{self, Write};

/// Centers `text` in `term_width` columns and terminates it with a newline.
///
/// Width is the raw byte length, so embedded escape codes push colored lines
/// left of true center. Callers rely on that exact output; do not reuse this
/// where visible width matters.
pub fn centered(text: &str, term_width: u16) -> String {
    let padding = (i64::from(term_width) - text.len() as i64) / 2;
    let padding = padding.max(0) as usize;
    format!("{:padding$}{text}\n", "")
}

pub fn print_centered<W: Write>(out: &mut W, text: &str, term_width: u16) -> io::Result<()> {
    out.write_all(centered(text, term_width).as_bytes())
}
