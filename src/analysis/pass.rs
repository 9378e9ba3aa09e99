//! The analysis pass: parse every source file once and register its tables.

use super::registry::{FileExportMap, FileRegistry};
use crate::analyzers::{analyze_source, get_extractor};
use crate::core::{Dialect, Error, FileTables, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

/// A file to analyze, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub uri: PathBuf,
    pub text: String,
    pub dialect: Dialect,
}

impl SourceFile {
    pub fn new(uri: impl Into<PathBuf>, text: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
            dialect,
        }
    }

    /// Build a source file whose dialect follows from the extension of `uri`.
    ///
    /// Returns `None` for paths that are neither ECMAScript nor TypeScript.
    pub fn from_path(uri: impl Into<PathBuf>, text: impl Into<String>) -> Option<Self> {
        let uri = uri.into();
        let dialect = Dialect::from_path(&uri)?;
        Some(Self::new(uri, text, dialect))
    }
}

/// Runs extraction over a source set.
///
/// With `parallel` set, files are parsed on the rayon pool; results are still
/// registered one by one in input order, so the resulting map and the first
/// reported failure do not depend on scheduling.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisPass {
    parallel: bool,
}

impl Default for AnalysisPass {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl AnalysisPass {
    pub fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    pub fn sequential() -> Self {
        Self::new(false)
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Analyze `files` and hand back the frozen export map.
    ///
    /// Any parse or extraction failure aborts the run as
    /// [`Error::AnalysisFailure`] naming the file. Sequential runs stop at the
    /// first failing file; parallel runs report the earliest failure in input
    /// order.
    pub fn run(&self, files: Vec<SourceFile>) -> Result<FileExportMap> {
        self.run_with(files, analyze_file)
    }

    fn run_with<F>(&self, files: Vec<SourceFile>, analyze: F) -> Result<FileExportMap>
    where
        F: Fn(&SourceFile) -> Result<FileTables> + Sync,
    {
        let start = Instant::now();
        let total = files.len();
        let mut registry = FileRegistry::new();

        if self.parallel {
            let results: Vec<(PathBuf, Result<FileTables>)> = files
                .into_par_iter()
                .map(|file| {
                    let tables = analyze(&file);
                    (file.uri, tables)
                })
                .collect();
            for (uri, tables) in results {
                register(&mut registry, uri, tables)?;
            }
        } else {
            for file in files {
                let tables = analyze(&file);
                register(&mut registry, file.uri, tables)?;
            }
        }

        let map = registry.finish();
        log::info!(
            "Analyzed {} files ({} exports) in {:?}",
            total,
            map.export_count(),
            start.elapsed()
        );
        Ok(map)
    }
}

fn register(registry: &mut FileRegistry, uri: PathBuf, tables: Result<FileTables>) -> Result<()> {
    let tables = tables.map_err(|cause| Error::analysis_failure(uri.clone(), cause))?;
    registry.register(uri, tables)
}

fn analyze_file(file: &SourceFile) -> Result<FileTables> {
    log::debug!("Analyzing {} as {}", file.uri.display(), file.dialect);
    let tables = analyze_source(&file.text, &file.uri, get_extractor(file.dialect))?;
    log::trace!(
        "{}: {} exports, {} imports",
        file.uri.display(),
        tables.exports.len(),
        tables.imports.len()
    );
    Ok(tables)
}
