use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use log::{debug, info};

use super::filters::{FileFilter, FilterRegistry};
use super::format::archive::ZipArchive;
use super::format::record::{self, RawRecord};
use super::index::{self, SENTINEL};
use super::types::error::{RecordError, Result, UnihanError};
use super::types::models::Character;

/// The Unihan database, held entirely in memory.
///
/// Characters in the CJK blocks listed in [`index::RANGES`] live in a dense
/// array with one slot per code point; everything else lives in a hash map.
///
/// A `Database` is only ever handed out fully loaded and offers no way to
/// modify it, so it can be shared between threads by reference or `Arc`.
#[derive(Debug)]
pub struct Database {
    dense: Vec<Character>,
    sparse: HashMap<u32, Character>,
}

impl Database {
    /// Loads the database from a Unihan zip archive on disk, using the
    /// default [`FilterRegistry`].
    ///
    /// # Errors
    /// Returns an error if:
    /// - The archive cannot be opened or read
    /// - The archive is not a valid zip file, or a member fails its checksum
    /// - A line of a data file is malformed ([`UnihanError::Format`])
    pub fn initialise(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening Unihan archive: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads the database from any seekable source of zip data.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::load_with(reader, &FilterRegistry::default())
    }

    /// Loads the database with a caller-supplied filter registry.
    ///
    /// Filters run in registration order. A filter whose file is not in the
    /// archive is skipped. The first error aborts the whole load.
    pub fn load_with<R: Read + Seek>(reader: R, registry: &FilterRegistry) -> Result<Self> {
        let mut archive = ZipArchive::open(reader)?;
        let mut db = Self::empty();

        for filter in registry {
            match archive.read_by_name(&filter.filename)? {
                Some(data) => {
                    let records = db.apply_filter(filter, &data)?;
                    debug!(
                        "{} ({:?}): {} records",
                        filter.filename, filter.decoder, records
                    );
                }
                None => debug!("{} not in archive, skipping {:?}", filter.filename, filter.decoder),
            }
        }

        info!("Unihan database loaded: {} characters", db.loaded_count());
        Ok(db)
    }

    fn empty() -> Self {
        Self {
            dense: vec![Character::default(); index::dense_len()],
            sparse: HashMap::new(),
        }
    }

    /// Runs one filter over a member's contents, returning the number of
    /// records dispatched.
    fn apply_filter(&mut self, filter: &FileFilter, data: &[u8]) -> Result<usize> {
        let mut records = 0;

        for (line_number, line) in record::lines(data) {
            let with_context = |source: RecordError| UnihanError::Format {
                file: filter.filename.clone(),
                line: line_number,
                source,
            };

            let Some(RawRecord { code_point, fields }) = record::parse_line(line).map_err(with_context)? else {
                continue;
            };
            if code_point == SENTINEL {
                continue;
            }

            let target = self.slot_mut(code_point);
            target.loaded = true;
            target.code_point = code_point;
            filter
                .decoder
                .decode(target, code_point, &fields)
                .map_err(with_context)?;
            records += 1;
        }

        Ok(records)
    }

    /// The record for `code_point`, created in the sparse map if it has no dense slot.
    fn slot_mut(&mut self, code_point: u32) -> &mut Character {
        match index::index(code_point) {
            0 => self
                .sparse
                .entry(code_point)
                .or_insert_with(|| Character::new(code_point)),
            idx => &mut self.dense[idx],
        }
    }

    /// Looks up a character by code point.
    ///
    /// # Errors
    /// Returns [`UnihanError::NotFound`] if the code point never appeared in
    /// the data, or is the reserved [`SENTINEL`].
    pub fn lookup(&self, code_point: u32) -> Result<&Character> {
        if code_point == SENTINEL {
            return Err(UnihanError::NotFound(code_point));
        }

        let found = match index::index(code_point) {
            0 => self.sparse.get(&code_point),
            idx => self.dense.get(idx).filter(|c| c.loaded),
        };
        found.ok_or(UnihanError::NotFound(code_point))
    }

    /// Number of distinct code points loaded. This is an O(n) scan of the dense array.
    pub fn loaded_count(&self) -> usize {
        self.sparse.len() + self.dense.iter().filter(|c| c.loaded).count()
    }

    /// Iterates over all loaded characters: dense entries in slot order,
    /// then sparse entries in code point order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        let mut sparse: Vec<&Character> = self.sparse.values().collect();
        sparse.sort_unstable_by_key(|c| c.code_point);

        self.dense.iter().filter(|c| c.loaded).chain(sparse)
    }
}
