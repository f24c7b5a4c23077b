use alloc::string::String;
use core::fmt::{self, Write};

use crate::components::common::{HEADER_PREFIX, HEADER_SUFFIX, ROW_WIDTH, TERMINATOR};

/// Write a `static uint8_t` declaration of `bytes` named `name` into `out`.
///
/// ```text
/// static uint8_t <name>[] = {
/// 	0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08,
/// 	0x09, 0x0A,
/// };
/// ```
///
/// Rows hold [`ROW_WIDTH`] literals. A row opens with a tab, later literals
/// are preceded by one space and every literal ends with a comma. The last
/// row may be short. The name is written verbatim.
pub fn write_array<W: Write>(
    out: &mut W,
    name: &str,
    bytes: &[u8],
) -> fmt::Result {
    out.write_str(&to_c_array(name, bytes))
}

/// Return the declaration produced by [`write_array`] as a string.
pub fn to_c_array(
    name: &str,
    bytes: &[u8],
) -> String {
    // Each literal takes 6 characters ("\t0xAB," or " 0xAB,").
    let mut out = String::with_capacity(
        HEADER_PREFIX.len()
            + name.len()
            + HEADER_SUFFIX.len()
            + bytes.len() * 6
            + bytes.len() / ROW_WIDTH
            + 1
            + TERMINATOR.len(),
    );
    out.push_str(HEADER_PREFIX);
    out.push_str(name);
    out.push_str(HEADER_SUFFIX);

    for row in bytes.chunks(ROW_WIDTH) {
        for (i, byte) in row.iter().enumerate() {
            out.push(if i == 0 { '\t' } else { ' ' });
            push_literal(&mut out, *byte);
        }
        // Closes full and short rows alike.
        out.push('\n');
    }

    out.push_str(TERMINATOR);
    out
}

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn push_literal(
    out: &mut String,
    byte: u8,
) {
    out.push_str("0x");
    out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
    out.push(HEX_DIGITS[usize::from(byte & 0x0F)] as char);
    out.push(',');
}
