use alloc::vec::Vec;

use crate::components::{
    common::{DEFAULT_NAME, ROW_WIDTH},
    emitter::to_c_array,
    parser::parse_array,
};

// Deterministic but not periodic in the row width.
fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i.wrapping_mul(37) ^ (i >> 3)) as u8).collect()
}

#[test]
fn round_trip_across_row_boundaries() {
    for len in [0, 1, 7, 8, 9, 1000, 4099] {
        let bytes = sample(len);
        let text = to_c_array("fixture", &bytes);
        let parsed = parse_array(&text).unwrap();
        assert_eq!(parsed.name, "fixture", "len {len}");
        assert_eq!(parsed.bytes, bytes, "len {len}");

        let rows = text.lines().count() - 2;
        assert_eq!(rows, len.div_ceil(ROW_WIDTH), "len {len}");
    }
}

#[test]
fn round_trip_every_byte_value() {
    let bytes: Vec<u8> = (0..=255u8).collect();
    let parsed = parse_array(&to_c_array(DEFAULT_NAME, &bytes)).unwrap();
    assert_eq!(parsed.name, DEFAULT_NAME);
    assert_eq!(parsed.bytes, bytes);
}

#[test]
fn output_is_deterministic() {
    let bytes = sample(123);
    assert_eq!(to_c_array("a", &bytes), to_c_array("a", &bytes));
}
