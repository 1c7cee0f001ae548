//! # `hexatablelib`
//!
//! `hexatablelib` is a Rust library for rendering binary payloads as hex/ASCII
//! inspection tables.
//!
//! The library provides:
//! - Row/column table model with one row per 16-byte line (via [`HexTable`] struct).
//! - Raw and base64 payload loading with error handling via [`HexTableError`].
//! - Pure byte formatting helpers for hex and ASCII cell content.
//!
//! ## Example
//!
//! ```
//! use hexatablelib::HexTable;
//!
//! let table = HexTable::from_base64("viewer", "QQ==").unwrap();
//! assert_eq!(table.row_count(), 1);
//! ```

mod error;
mod format;
mod table;

// Public APIs
pub use error::{DecodeErrorKind, HexTableError};
pub use format::{byte_to_ascii, byte_to_hex};
pub use table::{Cell, DEFAULT_MEDIA_TYPE, HexTable, LINE_WIDTH, Row};
