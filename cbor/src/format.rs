/*!
Diagnostic line formatting

Every line has the shape `<indent><HEX-PREFIX padded to COLUMN> # <annotation>`.
*/

use super::decode::Error;
use alloc::{format, string::String};
use core::fmt::Write;

/// Minimum width of the hex prefix column.
pub const COLUMN: usize = 20;

/// Indentation added per nesting level.
pub const INDENT: &str = "    ";

/// Deepest nesting level decoded before the rest of the buffer is abandoned.
pub const MAX_DEPTH: usize = 256;

/// Maximum number of bytes shown in the prefix of an error line.
pub const ERROR_PREFIX_LIMIT: usize = 4;

/// Format a line for an item whose own header occupied `header`.
pub fn line(depth: usize, header: &[u8], annotation: &str) -> String {
    format!(
        "{}{:<COLUMN$} # {annotation}",
        INDENT.repeat(depth),
        hex::encode_upper(header)
    )
}

/// Format an error line, `data` being the input from the start of the failing item.
pub fn error_line(depth: usize, data: &[u8], error: &Error) -> String {
    let shown = &data[..data.len().min(ERROR_PREFIX_LIMIT)];
    line(depth, shown, &format!("ERROR: {error}"))
}

pub fn plural<'a>(n: u64, singular: &'a str, plural: &'a str) -> &'a str {
    if n == 1 { singular } else { plural }
}

/// Is every byte printable ASCII (0x20–0x7E)?
pub fn is_printable(data: &[u8]) -> bool {
    data.iter().all(|b| (0x20..=0x7E).contains(b))
}

/// Render a byte string payload as `'text'` when printable, otherwise as `h'hex'`.
pub fn render_bytes(data: &[u8]) -> String {
    if is_printable(data) {
        let mut s = String::with_capacity(data.len() + 2);
        s.push('\'');
        for b in data {
            match *b {
                b'\'' => s.push_str("\\'"),
                b'\\' => s.push_str("\\\\"),
                b => s.push(b as char),
            }
        }
        s.push('\'');
        s
    } else {
        format!("h'{}'", hex::encode(data))
    }
}

/// Render a text string payload as a double-quoted, escaped literal.
///
/// Invalid UTF-8 sequences are passed through as `\xNN` escapes.
pub fn render_text(data: &[u8]) -> String {
    let mut s = String::with_capacity(data.len() + 2);
    s.push('"');
    for chunk in data.utf8_chunks() {
        for c in chunk.valid().chars() {
            match c {
                '\'' => s.push(c),
                c => s.extend(c.escape_debug()),
            }
        }
        for b in chunk.invalid() {
            _ = write!(s, "\\x{b:02x}");
        }
    }
    s.push('"');
    s
}
