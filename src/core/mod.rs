//! Data model shared by extraction, registration and detection.
//!
//! Per-file results are an [`ExportTable`] plus an [`ImportTable`], bundled as
//! [`FileTables`]. Cross-file results are expressed in terms of [`Occurrence`]s.

pub mod ast;
pub mod errors;

pub use errors::{Error, Result};

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Module-syntax grammar a source file is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dialect {
    EcmaScript,
    TypeScript,
}

impl Dialect {
    pub fn from_extension(ext: &str) -> Option<Self> {
        static EXTENSION_MAP: &[(&[&str], Dialect)] = &[
            (&["js", "mjs", "jsx"], Dialect::EcmaScript),
            (&["ts", "tsx"], Dialect::TypeScript),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, dialect)| *dialect)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Dialect::EcmaScript => &["js", "mjs", "jsx"],
            Dialect::TypeScript => &["ts", "tsx"],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dialect::EcmaScript => "ECMAScript",
            Dialect::TypeScript => "TypeScript",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 1-based position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One exported declaration of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub name: String,
    /// 1-based line of the declared identifier.
    pub line: usize,
    /// Set when the declaration carries a `@private` doc tag.
    ///
    /// Detection does not consult this flag yet; it is kept so a
    /// visibility-aware filter can be layered on later without re-extracting.
    pub is_private: bool,
}

/// One binding introduced by an import declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRecord {
    /// Local binding name.
    pub name: String,
    /// Module specifier as written in the import.
    pub module: String,
    /// Directory of the importing file.
    pub origin_directory: PathBuf,
    pub is_default: bool,
    pub is_renamed: bool,
}

impl ImportRecord {
    /// Plain named imports (`import { X }`) are the only ones that mark a
    /// same-named export of the file as forwarding.
    pub fn is_plain_named(&self) -> bool {
        !self.is_default && !self.is_renamed
    }
}

/// Exports of one file keyed by name, iterated in first-insertion order.
///
/// Inserting a name that is already present replaces its record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTable {
    records: Vec<ExportRecord>,
    positions: HashMap<String, usize>,
}

impl ExportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ExportRecord) {
        match self.positions.get(&record.name) {
            Some(&index) => self.records[index] = record,
            None => {
                self.positions.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&ExportRecord> {
        self.positions.get(name).map(|&index| &self.records[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExportRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ExportRecord> for ExportTable {
    fn from_iter<I: IntoIterator<Item = ExportRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

impl Serialize for ExportTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

/// Import bindings of one file in source order.
pub type ImportTable = Vec<ImportRecord>;

/// Everything extraction learns about one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileTables {
    pub exports: ExportTable,
    pub imports: ImportTable,
}

/// One sighting of an exported name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    pub uri: PathBuf,
    pub line: usize,
}

impl Occurrence {
    pub fn new(uri: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            uri: uri.into(),
            line,
        }
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.uri.display(), self.line)
    }
}
