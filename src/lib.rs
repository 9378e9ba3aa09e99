// Export modules for library usage
pub mod analysis;
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod detection;
pub mod formatting;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    Dialect, Error, ExportRecord, ExportTable, FileTables, ImportRecord, ImportTable, Occurrence,
    Result, SourceLocation,
};

pub use crate::analysis::{AnalysisPass, FileExportMap, FileRegistry, SourceFile};

pub use crate::analyzers::{analyze_source, get_extractor, ExportExtractor};

pub use crate::detection::{
    find_duplicates, DuplicateDetector, DuplicateEntry, DuplicateReport, Whitelist,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

/// Analyze `files` and report names exported by more than one of them.
pub fn find_duplicate_exports<I, S>(files: Vec<SourceFile>, whitelist: I) -> Result<DuplicateReport>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let map = AnalysisPass::default().run(files)?;
    Ok(find_duplicates(&map, whitelist))
}
