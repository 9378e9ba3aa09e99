// Test utility module for dupexports integration tests
#![allow(dead_code)]

use dupexports::{AnalysisPass, DuplicateReport, FileExportMap, SourceFile};
use std::path::{Path, PathBuf};

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/fixtures")
}

pub fn fixture(relative: &str) -> PathBuf {
    fixtures_dir().join(relative)
}

/// In-memory source files named by their extension.
pub fn sources(files: &[(&str, &str)]) -> Vec<SourceFile> {
    files
        .iter()
        .map(|(uri, text)| {
            SourceFile::from_path(*uri, *text)
                .unwrap_or_else(|| panic!("no dialect for {uri}"))
        })
        .collect()
}

pub fn analyze(files: &[(&str, &str)]) -> FileExportMap {
    AnalysisPass::sequential()
        .run(sources(files))
        .expect("analysis should succeed")
}

/// `(name, ["uri:line", ...])` pairs in report order.
pub fn report_summary(report: &DuplicateReport) -> Vec<(String, Vec<String>)> {
    report
        .iter()
        .map(|entry| {
            (
                entry.name.clone(),
                entry.occurrences.iter().map(ToString::to_string).collect(),
            )
        })
        .collect()
}

/// Same as [`report_summary`], with URIs made relative to `root`.
pub fn relative_summary(report: &DuplicateReport, root: &Path) -> Vec<(String, Vec<String>)> {
    report
        .iter()
        .map(|entry| {
            let occurrences = entry
                .occurrences
                .iter()
                .map(|o| {
                    let uri = o.uri.strip_prefix(root).unwrap_or(&o.uri);
                    format!("{}:{}", uri.to_string_lossy().replace('\\', "/"), o.line)
                })
                .collect();
            (entry.name.clone(), occurrences)
        })
        .collect()
}

// Helper to create a temporary project from (relative path, content) pairs
pub fn create_project(files: &[(&str, &str)]) -> tempfile::TempDir {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    for (relative, content) in files {
        let path = temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
    }
    temp_dir
}
