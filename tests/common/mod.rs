//! Builds small zip archives in memory for tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};

pub struct Member {
    pub name: String,
    pub contents: Vec<u8>,
    pub deflate: bool,
    /// Replaces the real CRC-32 in the central directory.
    pub crc_override: Option<u32>,
}

impl Member {
    pub fn stored(name: &str, contents: &str) -> Self {
        Self {
            name: name.to_string(),
            contents: contents.as_bytes().to_vec(),
            deflate: false,
            crc_override: None,
        }
    }

    pub fn deflated(name: &str, contents: &str) -> Self {
        Self {
            deflate: true,
            ..Self::stored(name, contents)
        }
    }
}

pub fn build_zip(members: &[Member]) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    let mut central: Vec<u8> = Vec::new();

    for member in members {
        let mut crc = Crc::new();
        crc.update(&member.contents);
        let crc32 = member.crc_override.unwrap_or(crc.sum());

        let (method, payload) = if member.deflate {
            let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(&member.contents).unwrap();
            (8u16, encoder.finish().unwrap())
        } else {
            (0u16, member.contents.clone())
        };

        let offset = out.len() as u32;
        let name = member.name.as_bytes();

        out.write_u32::<LittleEndian>(0x0403_4b50).unwrap();
        out.write_u16::<LittleEndian>(20).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(method).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0x21).unwrap();
        out.write_u32::<LittleEndian>(crc32).unwrap();
        out.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        out.write_u32::<LittleEndian>(member.contents.len() as u32).unwrap();
        out.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.extend_from_slice(name);
        out.extend_from_slice(&payload);

        central.write_u32::<LittleEndian>(0x0201_4b50).unwrap();
        central.write_u16::<LittleEndian>(20).unwrap();
        central.write_u16::<LittleEndian>(20).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u16::<LittleEndian>(method).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u16::<LittleEndian>(0x21).unwrap();
        central.write_u32::<LittleEndian>(crc32).unwrap();
        central.write_u32::<LittleEndian>(payload.len() as u32).unwrap();
        central.write_u32::<LittleEndian>(member.contents.len() as u32).unwrap();
        central.write_u16::<LittleEndian>(name.len() as u16).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u16::<LittleEndian>(0).unwrap();
        central.write_u32::<LittleEndian>(0).unwrap();
        central.write_u32::<LittleEndian>(offset).unwrap();
        central.extend_from_slice(name);
    }

    let cd_offset = out.len() as u32;
    out.extend_from_slice(&central);

    out.write_u32::<LittleEndian>(0x0605_4b50).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();
    out.write_u16::<LittleEndian>(members.len() as u16).unwrap();
    out.write_u16::<LittleEndian>(members.len() as u16).unwrap();
    out.write_u32::<LittleEndian>(central.len() as u32).unwrap();
    out.write_u32::<LittleEndian>(cd_offset).unwrap();
    out.write_u16::<LittleEndian>(0).unwrap();

    out
}

pub fn zip_cursor(members: &[Member]) -> Cursor<Vec<u8>> {
    Cursor::new(build_zip(members))
}

pub const READINGS: &str = "\
# Unihan_Readings.txt
#
U+4E00\tkDefinition\tone; a, an; alone
U+4E00\tkMandarin\tyī
U+4E2D\tkDefinition\tcentral; center, middle
U+4E2D\tkMandarin\tzhōng
U+5417\tkMandarin\tma
U+7EFF\tkMandarin\tlǜ
U+20000\tkMandarin\thē
U+5973\tkMandarin\tnǚ nǜ
U+3400\tkDefinition\t(same as U+4E18 丘) hillock or mound
U+2A6E0\tkDefinition\tsparse
";

pub const IRG_SOURCES: &str = "\
# Unihan_IRGSources.txt
U+4E00\tkIRG_GSource\tG0-523B
U+4E00\tkIRG_JSource\tJ0-306C
U+4E00\tkIRG_TSource\tT1-4421
U+4E00\tkRSUnicode\t1.0
U+4E00\tkTotalStrokes\t1
U+4E2D\tkIRG_GSource\tG0-5650
U+4E2D\tkIRG_KPSource\tKP0-F4E9
U+4E2D\tkRSUnicode\t2.3
U+4E2D\tkTotalStrokes\t4
U+8BF4\tkRSUnicode\t149'.7
U+8BF4\tkTotalStrokes\t9 14
U+4E00\tkIRG_UKSource\tUK-00001
";

pub const RADICAL_STROKE_COUNTS: &str = "\
U+4E00\tkRSKangXi\t1.0
U+4E2D\tkRSKangXi\t2.3
";

pub const DICTIONARY_LIKE_DATA: &str = "\
U+4E00\tkPhonetic\t1604
U+9F98\tkTotalStrokes\t64
";

pub fn unihan_fixture() -> Vec<Member> {
    vec![
        Member::deflated("Unihan_Readings.txt", READINGS),
        Member::deflated("Unihan_IRGSources.txt", IRG_SOURCES),
        Member::stored("Unihan_RadicalStrokeCounts.txt", RADICAL_STROKE_COUNTS),
        Member::stored("Unihan_DictionaryLikeData.txt", DICTIONARY_LIKE_DATA),
        Member::stored("Unihan_Variants.txt", "U+4E00\tkSemanticVariant\tU+5F0C\n"),
    ]
}
