use std::collections::HashSet;

use unihan_index::unihan::index::{dense_len, index, RANGES, SENTINEL};

#[test]
fn sentinel_owns_slot_zero() {
    assert_eq!(RANGES[0].from, SENTINEL);
    assert_eq!(RANGES[0].to, SENTINEL);
    assert_eq!(index(SENTINEL), 0);
}

#[test]
fn sentinel_is_private_use_and_outside_data_ranges() {
    assert!((0x10_0000..=0x10_FFFD).contains(&SENTINEL));
    assert!(RANGES[1..].iter().all(|r| !r.contains(SENTINEL)));
}

#[test]
fn ranges_do_not_overlap() {
    for (i, a) in RANGES.iter().enumerate() {
        assert!(a.from <= a.to);
        for b in &RANGES[i + 1..] {
            assert!(a.to < b.from || b.to < a.from, "{:?} overlaps {:?}", a, b);
        }
    }
}

#[test]
fn data_code_points_map_injectively_into_nonzero_slots() {
    let len = dense_len();
    let mut seen = HashSet::with_capacity(len);

    for range in &RANGES[1..] {
        for cp in range.from..=range.to {
            let idx = index(cp);
            assert!(idx >= 1 && idx < len, "U+{:04X} mapped to {}", cp, idx);
            assert!(seen.insert(idx), "U+{:04X} collides at {}", cp, idx);
        }
    }
    assert_eq!(seen.len(), len - 1);
}

#[test]
fn ranges_are_contiguous_in_offset_order() {
    let mut offset = 0;
    for range in RANGES {
        assert_eq!(index(range.from), offset);
        assert_eq!(index(range.to), offset + range.width() - 1);
        offset += range.width();
    }
    assert_eq!(offset, dense_len());
}

#[test]
fn code_points_outside_ranges_have_no_slot() {
    for cp in [0, 0x41, 0x2FFF, 0xAC00, 0xE000, 0x2_A6E0, 0x10_FFFC, 0x10_FFFF, u32::MAX] {
        if RANGES.iter().any(|r| r.contains(cp)) {
            continue;
        }
        assert_eq!(index(cp), 0, "U+{:04X}", cp);
    }
    assert_eq!(index(0x4E00), 1);
}
