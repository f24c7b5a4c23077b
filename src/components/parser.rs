use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};
use once_cell::race::OnceBox;
use regex::Regex;

use crate::components::common::{CtabError, TERMINATOR};

static HEADER: OnceBox<Regex> = OnceBox::new();
static LITERAL: OnceBox<Regex> = OnceBox::new();

fn header_pattern() -> &'static Regex {
    HEADER.get_or_init(|| {
        Box::new(Regex::new(r"\Astatic uint8_t (.*)\[\] = \{\n").expect("valid header pattern"))
    })
}

fn literal_pattern() -> &'static Regex {
    LITERAL.get_or_init(|| {
        Box::new(Regex::new(r"0x([0-9A-F]{2}),").expect("valid literal pattern"))
    })
}

/// A declaration read back from generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArray {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Read a declaration written by [`crate::write_array`] back into its name
/// and bytes.
///
/// The source must start with the header line and end with the `};` line.
/// Between them only `0xAB,` literals separated by tabs, spaces and newlines
/// are accepted. Any other text is reported with its byte offset.
pub fn parse_array(source: &str) -> Result<ParsedArray, CtabError> {
    let captures = header_pattern().captures(source).ok_or(CtabError::MissingHeader)?;
    let (Some(line), Some(name)) = (captures.get(0), captures.get(1)) else {
        return Err(CtabError::MissingHeader);
    };
    let name = name.as_str().to_string();
    let body_start = line.end();

    if !source.ends_with(TERMINATOR) || source.len() < body_start + TERMINATOR.len() {
        return Err(CtabError::MissingTerminator);
    }
    let body_end = source.len() - TERMINATOR.len();
    let body = &source[body_start..body_end];

    let mut bytes = Vec::new();
    let mut cursor = 0;
    for caps in literal_pattern().captures_iter(body) {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        check_separators(body, cursor, whole.start(), body_start)?;
        // Two uppercase hex digits always fit a byte.
        let value = u8::from_str_radix(digits.as_str(), 16)
            .map_err(|_| CtabError::UnexpectedText(body_start + digits.start()))?;
        bytes.push(value);
        cursor = whole.end();
    }
    check_separators(body, cursor, body.len(), body_start)?;

    Ok(ParsedArray { name, bytes })
}

// Only layout whitespace may sit between literals.
fn check_separators(
    body: &str,
    from: usize,
    to: usize,
    offset: usize,
) -> Result<(), CtabError> {
    match body[from..to].find(|c: char| !matches!(c, '\t' | ' ' | '\n')) {
        Some(pos) => Err(CtabError::UnexpectedText(offset + from + pos)),
        None => Ok(()),
    }
}
