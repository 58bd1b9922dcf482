use thiserror::Error;

/// Errors reported while preparing a string for hashing.
///
/// The hash itself cannot fail: once the input is encoded, mixing and
/// formatting are total functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The `Utf8Ascii` encoding hit a code point above 127.
    ///
    /// Multi-byte UTF-8 is deliberately unsupported; the error carries the
    /// offending character so callers can report it.
    #[error("utf8 encoding only supports ASCII code points, found {0:?} (U+{code:04X})", code = *.0 as u32)]
    UnsupportedCodePoint(char),
}
