//! Low-level byte reading utilities

use byteorder::{LittleEndian, ReadBytesExt};

use super::types::error::{Result, UnihanError};

fn truncated(context: &str) -> UnihanError {
    UnihanError::InvalidArchive(format!("Truncated {}", context))
}

/// Read a 2 byte little-endian number.
///
/// `context` names the structure being read, for the error message.
pub fn read_u16(reader: &mut &[u8], context: &str) -> Result<u16> {
    reader.read_u16::<LittleEndian>().map_err(|_| truncated(context))
}

/// Read a 4 byte little-endian number.
pub fn read_u32(reader: &mut &[u8], context: &str) -> Result<u32> {
    reader.read_u32::<LittleEndian>().map_err(|_| truncated(context))
}

/// Split `len` bytes off the front of the reader.
pub fn take_bytes<'a>(reader: &mut &'a [u8], len: usize, context: &str) -> Result<&'a [u8]> {
    if reader.len() < len {
        return Err(truncated(context));
    }
    let (head, tail) = reader.split_at(len);
    *reader = tail;
    Ok(head)
}
