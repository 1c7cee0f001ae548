use hexatablelib::{HexTable, HexTableError, byte_to_ascii, byte_to_hex};

#[test]
fn test_short_payload_scenario() {
    // Arrange
    let payload = [0x00, 0x41, 0x20, 0x7F];

    // Act
    let table = HexTable::from_raw("viewer", &payload);

    // Assert
    assert_eq!(table.row_count(), 1);

    let row = &table.rows()[0];
    assert_eq!(row.label(), "00000000");
    assert_eq!(row.id(), "viewer-row-00000000");

    let hex: Vec<&str> = row.hex_cells().iter().map(|c| c.text()).collect();
    assert_eq!(hex, vec!["00", "41", "20", "7f"]);

    let ascii: Vec<&str> = row.ascii_cells().iter().map(|c| c.text()).collect();
    assert_eq!(ascii, vec![".", "A", " ", "."]);
}

#[test]
fn test_seventeen_zero_bytes_scenario() {
    // Arrange
    let payload = [0x00_u8; 17];

    // Act
    let table = HexTable::from_raw("viewer", &payload);

    // Assert
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0].label(), "00000000");
    assert_eq!(table.rows()[1].label(), "00000010");

    // The second row holds only the single remaining byte
    let last = &table.rows()[1];
    assert_eq!(last.len(), 1);
    assert_eq!(last.hex_cells()[0].text(), "00");
    assert_eq!(last.ascii_cells()[0].text(), ".");
}

#[test]
fn test_base64_payload_scenario() {
    // Act
    let res = HexTable::from_base64("viewer", "QQ==");

    // Assert
    assert!(res.is_ok());
    if let Ok(table) = res {
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0].hex_cells()[0].text(), "41");
        assert_eq!(table.rows()[0].ascii_cells()[0].text(), "A");
    }
}

#[test]
fn test_row_count_matches_payload_length() {
    for len in [0_usize, 1, 15, 16, 17, 32, 33, 255, 256] {
        // Arrange
        let payload = vec![0x5A_u8; len];

        // Act
        let table = HexTable::from_raw("viewer", &payload);

        // Assert
        assert_eq!(table.row_count(), len.div_ceil(16));
        assert_eq!(table.byte_len(), len);

        if let Some(last) = table.rows().last() {
            assert_eq!(last.len(), len - 16 * (table.row_count() - 1));
        }
    }
}

#[test]
fn test_load_reset_load_round_trip() {
    // Arrange
    let payload = b"The quick brown fox jumps over the lazy dog";
    let fresh = HexTable::from_raw("viewer", payload);

    // Act
    let mut table = HexTable::from_raw("viewer", payload);
    table.reset();
    assert!(table.is_empty());
    table.load_raw(payload);

    // Assert
    assert_eq!(table, fresh);
}

#[test]
#[allow(clippy::panic)]
fn test_malformed_base64_is_reported() {
    // Act
    let res = HexTable::from_base64("viewer", "QQ=?");

    // Assert
    match res {
        Err(HexTableError::DecodeError(_)) => {}
        _ => panic!("expected a decode error"),
    }
}

#[test]
fn test_helpers_agree_with_table_cells() {
    // Arrange
    let payload: Vec<u8> = (0..=255).collect();

    // Act
    let table = HexTable::from_raw("viewer", &payload);

    // Assert
    for row in &table {
        for (i, cell) in row.hex_cells().iter().enumerate() {
            assert_eq!(cell.text(), byte_to_hex(payload[row.offset() + i]));
        }
        for (i, cell) in row.ascii_cells().iter().enumerate() {
            assert_eq!(
                cell.text(),
                byte_to_ascii(payload[row.offset() + i]).to_string()
            );
        }
    }
}
