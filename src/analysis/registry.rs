//! Project-wide map of per-file export and import tables.

use crate::core::{Error, FileTables, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Accumulates [`FileTables`] during an analysis pass.
///
/// The registry is the only way to add files; [`FileRegistry::finish`]
/// consumes it and hands out the read-only [`FileExportMap`].
#[derive(Debug, Default)]
pub struct FileRegistry {
    map: FileExportMap,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `uri`, failing if it was registered before.
    pub fn register(&mut self, uri: impl Into<PathBuf>, tables: FileTables) -> Result<()> {
        let uri = uri.into();
        if self.map.positions.contains_key(&uri) {
            return Err(Error::DuplicateRegistration(uri));
        }
        self.map.positions.insert(uri.clone(), self.map.files.len());
        self.map.files.push((uri, tables));
        Ok(())
    }

    pub fn is_registered(&self, uri: &Path) -> bool {
        self.map.positions.contains_key(uri)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn finish(self) -> FileExportMap {
        self.map
    }
}

/// Frozen `uri -> (exports, imports)` mapping, iterated in registration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileExportMap {
    files: Vec<(PathBuf, FileTables)>,
    positions: HashMap<PathBuf, usize>,
}

impl FileExportMap {
    pub fn get(&self, uri: &Path) -> Option<&FileTables> {
        self.positions.get(uri).map(|&index| &self.files[index].1)
    }

    /// Files in the order they were registered.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &FileTables)> {
        self.files
            .iter()
            .map(|(uri, tables)| (uri.as_path(), tables))
    }

    pub fn uris(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|(uri, _)| uri.as_path())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of export records across all files.
    pub fn export_count(&self) -> usize {
        self.files
            .iter()
            .map(|(_, tables)| tables.exports.len())
            .sum()
    }
}
