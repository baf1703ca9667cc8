//! Dense offsets for the Unicode blocks that hold nearly all Unihan data.
//!
//! The database keeps one slot per code point for a fixed list of CJK
//! blocks, and falls back to a hash map for everything else. [`index`]
//! maps a code point to its slot, or to `0` when the code point has no
//! dense slot.
//!
//! Offset `0` belongs to [`SENTINEL`], a Private Use Area code point that
//! never occurs in real data, so no data code point ever lands there.

/// Reserved code point occupying dense slot 0.
///
/// Supplementary Private Use Area-B; never a Unihan code point. Lookups
/// for it always fail.
pub const SENTINEL: u32 = 0x10_FFFD;

/// An inclusive range of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    pub from: u32,
    pub to: u32,
}

impl CodeRange {
    const fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    /// Number of code points in the range.
    pub const fn width(&self) -> usize {
        (self.to - self.from) as usize + 1
    }

    pub const fn contains(&self, code_point: u32) -> bool {
        code_point >= self.from && code_point <= self.to
    }
}

/// Ranges with a dense slot, in offset order. The sentinel comes first.
pub const RANGES: &[CodeRange] = &[
    CodeRange::new(SENTINEL, SENTINEL),
    // CJK Unified Ideographs
    CodeRange::new(0x4E00, 0x9FFF),
    // CJK Radicals Supplement
    CodeRange::new(0x2E80, 0x2EFF),
    // Kangxi Radicals
    CodeRange::new(0x2F00, 0x2FDF),
    // CJK Symbols and Punctuation
    CodeRange::new(0x3000, 0x303F),
    // CJK Strokes
    CodeRange::new(0x31C0, 0x31FF),
    // Enclosed CJK Letters and Months
    CodeRange::new(0x3200, 0x32FF),
    // CJK Compatibility
    CodeRange::new(0x3300, 0x33FF),
    // CJK Extension A, Yijing Hexagram Symbols
    CodeRange::new(0x3400, 0x4DFF),
    // CJK Compatibility Ideographs
    CodeRange::new(0xF900, 0xFAFF),
    // CJK Compatibility Forms
    CodeRange::new(0xFE30, 0xFE4F),
    // CJK Extension B
    CodeRange::new(0x2_0000, 0x2_A6DF),
    // CJK Extension C
    CodeRange::new(0x2_A700, 0x2_B73F),
    // CJK Extension D
    CodeRange::new(0x2_B740, 0x2_B81F),
    // CJK Extension E
    CodeRange::new(0x2_B820, 0x2_CEAF),
    // CJK Extension F
    CodeRange::new(0x2_CEB0, 0x2_EBEF),
    // CJK Extension I
    CodeRange::new(0x2_EBF0, 0x2_EE5F),
    // CJK Compatibility Ideographs Supplement
    CodeRange::new(0x2_F800, 0x2_FA1F),
    // CJK Extension G
    CodeRange::new(0x3_0000, 0x3_134F),
    // CJK Extension H
    CodeRange::new(0x3_1350, 0x3_23AF),
];

/// Converts a code point to its dense slot, or `0` if it has none.
pub fn index(code_point: u32) -> usize {
    let mut offset = 0;
    for range in RANGES {
        if range.contains(code_point) {
            return offset + (code_point - range.from) as usize;
        }
        offset += range.width();
    }
    0
}

/// Total number of dense slots, sentinel slot included.
pub fn dense_len() -> usize {
    RANGES.iter().map(CodeRange::width).sum()
}
