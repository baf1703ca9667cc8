//! # Zip Container Reading
//!
//! Unihan is distributed as a single zip archive of text files. This module
//! reads just enough of the zip format to get those files back out.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────┐
//! │ Local header + data      │ ← one per member, read by `read_entry()`
//! │ ...                      │
//! ├──────────────────────────┤
//! │ Central directory        │ ← parsed once by `open()`
//! ├──────────────────────────┤
//! │ End of central directory │ ← located by scanning back from the end
//! └──────────────────────────┘
//! ```
//!
//! Sizes and CRCs are taken from the central directory, since the local
//! header may defer them to a trailing data descriptor. Only stored and
//! deflated members are supported; ZIP64, multi-disk and encrypted archives
//! are rejected.

use std::io::{Read, Seek, SeekFrom};

use flate2::read::DeflateDecoder;
use flate2::Crc;
use log::{debug, trace};

use crate::unihan::types::error::{Result, UnihanError};
use crate::unihan::utils::{read_u16, read_u32, take_bytes};

const EOCD_SIGNATURE: u32 = 0x0605_4b50;
const CENTRAL_SIGNATURE: u32 = 0x0201_4b50;
const LOCAL_SIGNATURE: u32 = 0x0403_4b50;

const EOCD_LEN: usize = 22;
const MAX_COMMENT_LEN: usize = 0xFFFF;
const LOCAL_HEADER_LEN: usize = 30;

const FLAG_ENCRYPTED: u16 = 0x0001;

/// Compression method of an archive member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Stored,
    Deflated,
}

impl TryFrom<u16> for CompressionMethod {
    type Error = UnihanError;
    fn try_from(value: u16) -> Result<Self> {
        match value {
            0 => Ok(Self::Stored),
            8 => Ok(Self::Deflated),
            _ => Err(UnihanError::InvalidArchive(format!("Unsupported compression method: {}", value))),
        }
    }
}

/// A member of the archive, as described by the central directory.
#[derive(Debug, Clone)]
pub struct ZipEntry {
    pub name: String,
    pub crc32: u32,
    pub compressed_size: u64,
    pub uncompressed_size: u64,
    method: u16,
    flags: u16,
    local_header_offset: u64,
}

/// A zip archive opened for reading.
#[derive(Debug)]
pub struct ZipArchive<R> {
    reader: R,
    entries: Vec<ZipEntry>,
}

impl<R: Read + Seek> ZipArchive<R> {
    /// Reads the central directory of the archive.
    ///
    /// # Errors
    /// Returns [`UnihanError::InvalidArchive`] if no end-of-central-directory
    /// record is found, or the directory is truncated or inconsistent.
    pub fn open(mut reader: R) -> Result<Self> {
        let archive_len = reader.seek(SeekFrom::End(0))?;
        let (cd_offset, cd_size, num_entries) = find_central_directory(&mut reader, archive_len)?;

        if cd_offset + cd_size > archive_len {
            return Err(UnihanError::InvalidArchive(format!(
                "Central directory at {}..{} lies beyond end of archive ({} bytes)",
                cd_offset,
                cd_offset + cd_size,
                archive_len
            )));
        }

        reader.seek(SeekFrom::Start(cd_offset))?;
        let mut directory = vec![0u8; cd_size as usize];
        reader.read_exact(&mut directory)?;

        let entries = parse_central_directory(&directory, num_entries)?;
        debug!("Archive opened: {} members", entries.len());

        Ok(Self { reader, entries })
    }

    /// All members, in central-directory order.
    pub fn entries(&self) -> &[ZipEntry] {
        &self.entries
    }

    /// Finds the first member whose name is exactly `name`.
    pub fn find(&self, name: &str) -> Option<&ZipEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Reads and decompresses the member named `name`.
    ///
    /// Returns `Ok(None)` if the archive has no such member.
    pub fn read_by_name(&mut self, name: &str) -> Result<Option<Vec<u8>>> {
        match self.find(name).cloned() {
            Some(entry) => self.read_entry(&entry).map(Some),
            None => Ok(None),
        }
    }

    /// Reads and decompresses a member, verifying its size and CRC-32.
    pub fn read_entry(&mut self, entry: &ZipEntry) -> Result<Vec<u8>> {
        if entry.flags & FLAG_ENCRYPTED != 0 {
            return Err(UnihanError::InvalidArchive(format!("Member {} is encrypted", entry.name)));
        }
        let method = CompressionMethod::try_from(entry.method)?;

        self.reader.seek(SeekFrom::Start(entry.local_header_offset))?;
        let mut local = [0u8; LOCAL_HEADER_LEN];
        self.reader.read_exact(&mut local)?;

        let mut header = &local[..];
        if read_u32(&mut header, "local header")? != LOCAL_SIGNATURE {
            return Err(UnihanError::InvalidArchive(format!(
                "Bad local header signature for {} at offset {}",
                entry.name, entry.local_header_offset
            )));
        }
        // name and extra lengths sit at the end of the fixed header
        let mut lengths = &local[26..];
        let name_len = read_u16(&mut lengths, "local header")?;
        let extra_len = read_u16(&mut lengths, "local header")?;
        self.reader.seek(SeekFrom::Current(i64::from(name_len) + i64::from(extra_len)))?;

        let mut raw = vec![0u8; entry.compressed_size as usize];
        self.reader.read_exact(&mut raw)?;

        trace!(
            "Decoding member {}: method={:?}, compressed={} bytes, expected={} bytes",
            entry.name, method, entry.compressed_size, entry.uncompressed_size
        );

        let data = match method {
            CompressionMethod::Stored => raw,
            CompressionMethod::Deflated => {
                let mut output = Vec::with_capacity(entry.uncompressed_size as usize);
                DeflateDecoder::new(&raw[..]).read_to_end(&mut output)?;
                output
            }
        };

        if data.len() as u64 != entry.uncompressed_size {
            return Err(UnihanError::InvalidArchive(format!(
                "Size mismatch for {}: expected {} bytes, but found {} bytes",
                entry.name,
                entry.uncompressed_size,
                data.len()
            )));
        }

        let mut crc = Crc::new();
        crc.update(&data);
        if crc.sum() != entry.crc32 {
            return Err(UnihanError::ChecksumMismatch {
                name: entry.name.clone(),
                expected: entry.crc32,
                actual: crc.sum(),
            });
        }

        Ok(data)
    }
}

/// Locates the end-of-central-directory record and returns
/// `(directory offset, directory size, entry count)`.
fn find_central_directory<R: Read + Seek>(reader: &mut R, archive_len: u64) -> Result<(u64, u64, u16)> {
    if archive_len < EOCD_LEN as u64 {
        return Err(UnihanError::InvalidArchive("File too short to be a zip archive".to_string()));
    }

    // The record is followed by a comment of up to 64 KiB
    let tail_len = archive_len.min((EOCD_LEN + MAX_COMMENT_LEN) as u64);
    reader.seek(SeekFrom::Start(archive_len - tail_len))?;
    let mut tail = vec![0u8; tail_len as usize];
    reader.read_exact(&mut tail)?;

    let signature = EOCD_SIGNATURE.to_le_bytes();
    let pos = (0..=tail.len() - EOCD_LEN)
        .rev()
        .find(|&i| tail[i..i + 4] == signature)
        .ok_or_else(|| UnihanError::InvalidArchive("End of central directory not found".to_string()))?;

    let mut record = &tail[pos + 4..];
    let disk = read_u16(&mut record, "end of central directory")?;
    let cd_disk = read_u16(&mut record, "end of central directory")?;
    let entries_on_disk = read_u16(&mut record, "end of central directory")?;
    let num_entries = read_u16(&mut record, "end of central directory")?;
    let cd_size = read_u32(&mut record, "end of central directory")?;
    let cd_offset = read_u32(&mut record, "end of central directory")?;

    if disk != 0 || cd_disk != 0 || entries_on_disk != num_entries {
        return Err(UnihanError::InvalidArchive("Multi-disk archives are not supported".to_string()));
    }
    if num_entries == u16::MAX || cd_size == u32::MAX || cd_offset == u32::MAX {
        return Err(UnihanError::InvalidArchive("ZIP64 archives are not supported".to_string()));
    }

    debug!(
        "End of central directory: {} entries, directory at {} ({} bytes)",
        num_entries, cd_offset, cd_size
    );
    Ok((u64::from(cd_offset), u64::from(cd_size), num_entries))
}

fn parse_central_directory(directory: &[u8], num_entries: u16) -> Result<Vec<ZipEntry>> {
    let mut reader = directory;
    let mut entries = Vec::with_capacity(num_entries as usize);

    for _ in 0..num_entries {
        entries.push(parse_central_entry(&mut reader)?);
    }

    Ok(entries)
}

fn parse_central_entry(reader: &mut &[u8]) -> Result<ZipEntry> {
    const CTX: &str = "central directory";

    if read_u32(reader, CTX)? != CENTRAL_SIGNATURE {
        return Err(UnihanError::InvalidArchive("Bad central directory signature".to_string()));
    }
    let _version_made_by = read_u16(reader, CTX)?;
    let _version_needed = read_u16(reader, CTX)?;
    let flags = read_u16(reader, CTX)?;
    let method = read_u16(reader, CTX)?;
    let _mod_time = read_u16(reader, CTX)?;
    let _mod_date = read_u16(reader, CTX)?;
    let crc32 = read_u32(reader, CTX)?;
    let compressed_size = read_u32(reader, CTX)?;
    let uncompressed_size = read_u32(reader, CTX)?;
    let name_len = read_u16(reader, CTX)?;
    let extra_len = read_u16(reader, CTX)?;
    let comment_len = read_u16(reader, CTX)?;
    let _disk_start = read_u16(reader, CTX)?;
    let _internal_attrs = read_u16(reader, CTX)?;
    let _external_attrs = read_u32(reader, CTX)?;
    let local_header_offset = read_u32(reader, CTX)?;

    let name_bytes = take_bytes(reader, name_len as usize, CTX)?;
    take_bytes(reader, extra_len as usize + comment_len as usize, CTX)?;

    if compressed_size == u32::MAX || uncompressed_size == u32::MAX || local_header_offset == u32::MAX {
        return Err(UnihanError::InvalidArchive("ZIP64 archives are not supported".to_string()));
    }

    // Unihan member names are ASCII, so the legacy code page question never arises
    let name = String::from_utf8_lossy(name_bytes).into_owned();

    Ok(ZipEntry {
        name,
        crc32,
        compressed_size: u64::from(compressed_size),
        uncompressed_size: u64::from(uncompressed_size),
        method,
        flags,
        local_header_offset: u64::from(local_header_offset),
    })
}
