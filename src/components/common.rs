use thiserror::Error;

/// Number of byte literals on a full row.
pub const ROW_WIDTH: usize = 8;

/// Identifier used when the caller does not name the array.
pub const DEFAULT_NAME: &str = "manifest_buf";

/// Appended to the input path to derive the default output path.
pub const OUTPUT_SUFFIX: &str = ".c";

// Layout of a declaration. The header is completed by the array name.
pub(crate) const HEADER_PREFIX: &str = "static uint8_t ";
pub(crate) const HEADER_SUFFIX: &str = "[] = {\n";
pub(crate) const TERMINATOR: &str = "};\n";

/// Errors raised while reading a generated declaration back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CtabError {
    #[error("missing `static uint8_t <name>[] = {{` header line")]
    MissingHeader,
    #[error("missing `}};` terminator line")]
    MissingTerminator,
    #[error("unexpected text at byte offset {0}")]
    UnexpectedText(usize),
}
