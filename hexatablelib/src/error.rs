//! The `error` module defines the [`HexTableError`] enum that describes the errors
//! that can occur when loading payloads into a `HexTable`.
//! Formatting itself never fails: every byte value 0-255 has a defined hex and
//! ASCII projection, so the only error source is payload decoding
//! (via [`DecodeErrorKind`] enum).

use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum HexTableError {
    DecodeError(DecodeErrorKind),
}

impl fmt::Display for HexTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecodeError(base_err) => {
                write!(
                    f,
                    "Error encountered during decoding of the base64 payload:\n{base_err}",
                )
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Payload contains a symbol outside the base64 alphabet
    InvalidSymbol(usize, u8),
    /// Payload length is not valid for base64 text
    InvalidLength(usize),
    /// Last symbol leaves dangling bits in the decoded output
    InvalidTrailingSymbol(usize, u8),
    /// Padding is missing or malformed
    InvalidPadding,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol(offset, symbol) => {
                write!(
                    f,
                    "Invalid base64 symbol 0x{symbol:02X} at offset {offset}"
                )
            }
            Self::InvalidLength(length) => {
                write!(f, "Invalid base64 payload length: {length}")
            }
            Self::InvalidTrailingSymbol(offset, symbol) => {
                write!(
                    f,
                    "Invalid trailing base64 symbol 0x{symbol:02X} at offset {offset}"
                )
            }
            Self::InvalidPadding => {
                write!(f, "Missing or malformed base64 padding")
            }
        }
    }
}

impl From<base64::DecodeError> for HexTableError {
    fn from(err: base64::DecodeError) -> Self {
        let kind = match err {
            base64::DecodeError::InvalidByte(offset, symbol) => {
                DecodeErrorKind::InvalidSymbol(offset, symbol)
            }
            base64::DecodeError::InvalidLength(length) => DecodeErrorKind::InvalidLength(length),
            base64::DecodeError::InvalidLastSymbol(offset, symbol) => {
                DecodeErrorKind::InvalidTrailingSymbol(offset, symbol)
            }
            base64::DecodeError::InvalidPadding => DecodeErrorKind::InvalidPadding,
        };
        Self::DecodeError(kind)
    }
}

impl Error for HexTableError {}
impl Error for DecodeErrorKind {}
