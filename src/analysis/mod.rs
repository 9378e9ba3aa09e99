//! Project-wide analysis pass.
//!
//! Turns a source set into a [`FileExportMap`]: every file is parsed exactly
//! once by the extraction adapter for its dialect and registered under its URI.

pub mod pass;
pub mod registry;

pub use pass::{AnalysisPass, SourceFile};
pub use registry::{FileExportMap, FileRegistry};
