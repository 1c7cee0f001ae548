//! The `table` module provides the [`HexTable`] struct, the row/column model of
//! the hex/ASCII inspection view.
//!
//! A loaded payload is partitioned into 16-byte lines. Each line becomes one
//! [`Row`] holding an address label plus per-byte hex and ASCII [`Cell`]s. The
//! table is rebuilt from scratch on every load, so the host GUI only ever reads
//! a finished model.

use crate::error::HexTableError;
use crate::format::{byte_to_ascii, byte_to_hex};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Number of payload bytes displayed per table row.
pub const LINE_WIDTH: usize = 16;

/// Advisory content type attached to a table when none is given.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// One byte's projection into a single display cell, either as two lowercase
/// hex digits or as an ASCII character. The absolute payload offset is kept on
/// the cell so external styling and lookup hooks can address it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Absolute payload offset of the byte this cell projects
    offset: usize,
    /// Rendered cell content
    text: String,
}

impl Cell {
    /// Absolute payload offset of the projected byte.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Rendered cell content: two hex digits for a hex cell, one character
    /// for an ASCII cell.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One 16-byte line of the payload, materialized for display: an address
/// label followed by the hex cells and the ASCII cells of the line. The final
/// row of a payload may hold fewer than 16 cells of each kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Row identity, `"<table-id>-row-<8-hex-digit-offset>"`
    id: String,
    /// Starting payload offset of the line (a multiple of 16)
    offset: usize,
    /// Address label, 8 lowercase hex digits, zero-padded
    label: String,
    /// Hex projection of the line bytes
    hex: Vec<Cell>,
    /// ASCII projection of the line bytes
    ascii: Vec<Cell>,
}

impl Row {
    fn build(table_id: &str, offset: usize, line: &[u8]) -> Self {
        let label = format!("{offset:08x}");
        let id = format!("{table_id}-row-{label}");

        let mut hex = Vec::with_capacity(line.len());
        let mut ascii = Vec::with_capacity(line.len());

        for (i, byte) in line.iter().enumerate() {
            let cell_offset = offset + i;
            hex.push(Cell {
                offset: cell_offset,
                text: byte_to_hex(*byte),
            });
            ascii.push(Cell {
                offset: cell_offset,
                text: byte_to_ascii(*byte).to_string(),
            });
        }

        Self {
            id,
            offset,
            label,
            hex,
            ascii,
        }
    }

    /// Row identity string, suitable for addressing the row from the host
    /// environment.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Starting payload offset of the line.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Address label: the starting offset as 8 zero-padded lowercase hex digits.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Hex cells of the line, in offset order.
    #[must_use]
    pub fn hex_cells(&self) -> &[Cell] {
        &self.hex
    }

    /// ASCII cells of the line, in offset order.
    #[must_use]
    pub fn ascii_cells(&self) -> &[Cell] {
        &self.ascii
    }

    /// Number of cells of each kind in this row (16, or fewer for the final
    /// row of a payload whose length is not a multiple of 16).
    #[must_use]
    pub fn len(&self) -> usize {
        self.hex.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }
}

/// The rendered table: an ordered sequence of [`Row`]s keyed by a
/// caller-supplied identity string, plus an advisory media type.
///
/// Rows always appear in ascending offset order with no gaps or duplicates
/// for the currently loaded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexTable {
    /// Table identity, used for row addressing and host-side styling
    id: String,
    /// Advisory content type of the loaded payload
    media_type: String,
    /// Display rows of the currently loaded payload
    rows: Vec<Row>,
}

impl HexTable {
    /// Creates an empty table with the provided identity.
    ///
    /// # Examples
    /// ```
    /// use hexatablelib::HexTable;
    ///
    /// let table = HexTable::new("viewer");
    /// assert!(table.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            rows: Vec::new(),
        }
    }

    /// Overrides the advisory media type. The media type never affects
    /// decoding or rendering; it is metadata carried for the host.
    ///
    /// # Examples
    /// ```
    /// use hexatablelib::HexTable;
    ///
    /// let table = HexTable::new("viewer").with_media_type("image/png");
    /// assert_eq!(table.media_type(), "image/png");
    /// ```
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Creates a table and fills it from a raw binary payload.
    ///
    /// # Examples
    /// ```
    /// use hexatablelib::HexTable;
    ///
    /// let table = HexTable::from_raw("viewer", &[0x00; 17]);
    /// assert_eq!(table.row_count(), 2);
    /// ```
    #[must_use]
    pub fn from_raw(id: impl Into<String>, data: &[u8]) -> Self {
        let mut table = Self::new(id);
        table.load_raw(data);
        table
    }

    /// Creates a table and fills it from a base64-encoded payload.
    ///
    /// # Errors
    /// Returns an error if the payload is not valid base64 text.
    ///
    /// # Examples
    /// ```
    /// use hexatablelib::HexTable;
    ///
    /// let table = HexTable::from_base64("viewer", "QQ==").unwrap();
    /// assert_eq!(table.byte_len(), 1);
    /// ```
    pub fn from_base64(id: impl Into<String>, text: &str) -> Result<Self, HexTableError> {
        let mut table = Self::new(id);
        table.load_base64(text)?;
        Ok(table)
    }

    /// Rebuilds the table from a raw binary payload, replacing any previously
    /// rendered rows.
    ///
    /// # Examples
    /// ```
    /// use hexatablelib::HexTable;
    ///
    /// let mut table = HexTable::new("viewer");
    /// table.load_raw(b"hello");
    /// assert_eq!(table.byte_len(), 5);
    /// ```
    pub fn load_raw(&mut self, data: &[u8]) {
        self.fill(data);
    }

    /// Decodes a base64-encoded payload and rebuilds the table from the
    /// decoded bytes. On decode failure the previously rendered rows are left
    /// intact.
    ///
    /// # Errors
    /// Returns an error if the payload is not valid base64 text.
    ///
    /// # Examples
    /// ```
    /// use hexatablelib::HexTable;
    ///
    /// let mut table = HexTable::new("viewer");
    /// table.load_base64("QQ==").unwrap();
    /// assert_eq!(table.rows()[0].hex_cells()[0].text(), "41");
    /// ```
    pub fn load_base64(&mut self, text: &str) -> Result<(), HexTableError> {
        // Decode fully before touching the rows so a failure cannot leave
        // a half-replaced table behind
        let data = STANDARD.decode(text)?;
        self.fill(&data);
        Ok(())
    }

    /// Empties the table, discarding all rows. Idempotent.
    ///
    /// # Examples
    /// ```
    /// use hexatablelib::HexTable;
    ///
    /// let mut table = HexTable::from_raw("viewer", b"hello");
    /// table.reset();
    /// assert!(table.is_empty());
    /// ```
    pub fn reset(&mut self) {
        self.rows.clear();
    }

    /// Partition the payload into 16-byte lines and build one row per line.
    fn fill(&mut self, data: &[u8]) {
        self.rows.clear();
        self.rows.reserve(data.len().div_ceil(LINE_WIDTH));

        for (index, line) in data.chunks(LINE_WIDTH).enumerate() {
            self.rows.push(Row::build(&self.id, index * LINE_WIDTH, line));
        }
    }

    /// Table identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Advisory content type of the loaded payload.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Display rows of the currently loaded payload, in ascending offset order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of payload bytes the table currently represents.
    ///
    /// # Examples
    /// ```
    /// use hexatablelib::HexTable;
    ///
    /// let table = HexTable::from_raw("viewer", &[0xFF; 20]);
    /// assert_eq!(table.byte_len(), 20);
    /// ```
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.rows.last().map_or(0, |row| row.offset() + row.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the hex and ASCII cell pair projecting the byte at the provided
    /// payload offset. Returns `None` past the end of the payload.
    ///
    /// # Examples
    /// ```
    /// use hexatablelib::HexTable;
    ///
    /// let table = HexTable::from_raw("viewer", b"hello");
    /// let (hex, ascii) = table.cell_at(1).unwrap();
    ///
    /// assert_eq!(hex.text(), "65");
    /// assert_eq!(ascii.text(), "e");
    /// ```
    #[must_use]
    pub fn cell_at(&self, offset: usize) -> Option<(&Cell, &Cell)> {
        let row = self.rows.get(offset / LINE_WIDTH)?;
        let index = offset % LINE_WIDTH;
        Some((row.hex.get(index)?, row.ascii.get(index)?))
    }
}

impl<'a> IntoIterator for &'a HexTable {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_partitions_into_lines_of_sixteen() {
        // Arrange
        let payload = vec![0xAB_u8; 40];

        // Act
        let table = HexTable::from_raw("t", &payload);

        // Assert
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows()[0].len(), 16);
        assert_eq!(table.rows()[1].len(), 16);
        assert_eq!(table.rows()[2].len(), 8);
        assert_eq!(table.byte_len(), 40);
    }

    #[test]
    fn test_row_addresses_ascend_without_gaps() {
        // Arrange
        let payload = vec![0x00_u8; 16 * 5];

        // Act
        let table = HexTable::from_raw("t", &payload);

        // Assert
        for (index, row) in table.into_iter().enumerate() {
            assert_eq!(row.offset(), index * LINE_WIDTH);
            assert_eq!(row.label(), format!("{:08x}", index * LINE_WIDTH));
        }
    }

    #[test]
    fn test_row_ids_carry_table_identity() {
        // Arrange
        let payload = [0x00_u8; 17];

        // Act
        let table = HexTable::from_raw("inspector", &payload);

        // Assert
        assert_eq!(table.rows()[0].id(), "inspector-row-00000000");
        assert_eq!(table.rows()[1].id(), "inspector-row-00000010");
    }

    #[test]
    fn test_cells_carry_absolute_offsets() {
        // Arrange
        let payload: Vec<u8> = (0..=35).collect();

        // Act
        let table = HexTable::from_raw("t", &payload);

        // Assert
        for row in &table {
            for (i, cell) in row.hex_cells().iter().enumerate() {
                assert_eq!(cell.offset(), row.offset() + i);
            }
            for (i, cell) in row.ascii_cells().iter().enumerate() {
                assert_eq!(cell.offset(), row.offset() + i);
            }
        }
    }

    #[test]
    fn test_cell_at_valid() {
        // Arrange
        let payload: Vec<u8> = (0..40).collect();
        let table = HexTable::from_raw("t", &payload);

        // Act
        let pair = table.cell_at(33);

        // Assert
        assert!(pair.is_some());
        let (hex, ascii) = pair.unwrap();
        assert_eq!(hex.offset(), 33);
        assert_eq!(ascii.offset(), 33);
        assert_eq!(hex.text(), "21");
        assert_eq!(ascii.text(), "!");
    }

    #[test]
    fn test_cell_at_past_payload_end() {
        // Arrange
        let table = HexTable::from_raw("t", &[0x00; 20]);

        // Act
        let inside_last_row = table.cell_at(19);
        let past_end_same_row = table.cell_at(20);
        let past_end_next_row = table.cell_at(64);

        // Assert
        assert!(inside_last_row.is_some());
        assert!(past_end_same_row.is_none());
        assert!(past_end_next_row.is_none());
    }

    #[test]
    fn test_empty_payload_builds_zero_rows() {
        // Act
        let table = HexTable::from_raw("t", &[]);

        // Assert
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.byte_len(), 0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        // Arrange
        let mut table = HexTable::from_raw("t", &[0xFF; 64]);

        // Act
        table.reset();
        let after_first = table.row_count();
        table.reset();
        let after_second = table.row_count();

        // Assert
        assert_eq!(after_first, 0);
        assert_eq!(after_second, 0);
    }

    #[test]
    fn test_reload_replaces_all_rows() {
        // Arrange
        let mut table = HexTable::from_raw("t", &[0xFF; 64]);
        assert_eq!(table.row_count(), 4);

        // Act
        table.load_raw(&[0x01, 0x02]);

        // Assert
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.byte_len(), 2);
        assert_eq!(table.rows()[0].hex_cells()[0].text(), "01");
    }

    #[test]
    fn test_load_base64_failure_keeps_previous_rows() {
        // Arrange
        let mut table = HexTable::from_raw("t", b"payload");
        let before = table.clone();

        // Act
        let res = table.load_base64("not base64!");

        // Assert
        assert!(res.is_err());
        assert_eq!(table, before);
    }

    #[test]
    fn test_media_type_default_and_override() {
        // Act
        let plain = HexTable::new("t");
        let tagged = HexTable::new("t").with_media_type("text/plain");

        // Assert
        assert_eq!(plain.media_type(), DEFAULT_MEDIA_TYPE);
        assert_eq!(tagged.media_type(), "text/plain");
    }
}
