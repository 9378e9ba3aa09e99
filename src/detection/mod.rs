//! Cross-file duplicate export detection.
//!
//! Files are visited in registration order and their exports in table order,
//! so a given map and whitelist always produce the same report. A file's
//! export is treated as forwarding, and skipped, when the same file has a
//! plain named import (`import { X } from "m"`) of that name. Default and
//! renamed imports never exempt an export.

pub mod report;

pub use report::{DuplicateEntry, DuplicateReport};

use crate::analysis::FileExportMap;
use crate::core::{FileTables, Occurrence};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Names exempt from detection. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist(HashSet<String>);

impl Whitelist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Whitelist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>> Extend<S> for Whitelist {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    whitelist: Whitelist,
}

impl DuplicateDetector {
    pub fn new(whitelist: Whitelist) -> Self {
        Self { whitelist }
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    pub fn detect(&self, files: &FileExportMap) -> DuplicateReport {
        let mut state = DetectionState::default();
        for (uri, tables) in files.iter() {
            self.visit_file(uri, tables, &mut state);
        }
        log::debug!(
            "{} duplicated names across {} files",
            state.report.len(),
            files.len()
        );
        state.report
    }

    fn visit_file(&self, uri: &Path, tables: &FileTables, state: &mut DetectionState) {
        let forwarded = forwarded_names(tables);
        for record in tables.exports.iter() {
            if self.whitelist.contains(&record.name) {
                continue;
            }
            if forwarded.contains(record.name.as_str()) {
                log::trace!("{}: `{}` is forwarded", uri.display(), record.name);
                continue;
            }
            state.observe(&record.name, Occurrence::new(uri, record.line));
        }
    }
}

/// Names a file imports verbatim by plain named import.
fn forwarded_names(tables: &FileTables) -> HashSet<&str> {
    tables
        .imports
        .iter()
        .filter(|import| import.is_plain_named())
        .map(|import| import.name.as_str())
        .collect()
}

/// Per-run bookkeeping: first sightings plus the report being built.
#[derive(Debug, Default)]
struct DetectionState {
    first_seen: HashMap<String, Occurrence>,
    report: DuplicateReport,
}

impl DetectionState {
    fn observe(&mut self, name: &str, occurrence: Occurrence) {
        if self.report.append(name, occurrence.clone()) {
            return;
        }
        match self.first_seen.remove(name) {
            Some(first) => self.report.open(name, first, occurrence),
            None => {
                self.first_seen.insert(name.to_string(), occurrence);
            }
        }
    }
}

/// Detect duplicates in `files` with the given whitelist.
pub fn find_duplicates<I, S>(files: &FileExportMap, whitelist: I) -> DuplicateReport
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DuplicateDetector::new(whitelist.into_iter().collect()).detect(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisPass, SourceFile};
    use crate::core::{Dialect, Error};
    use pretty_assertions::assert_eq;

    fn analyze(files: &[(&str, &str)]) -> FileExportMap {
        let sources = files
            .iter()
            .map(|(uri, text)| SourceFile::from_path(*uri, *text).unwrap())
            .collect();
        AnalysisPass::sequential().run(sources).unwrap()
    }

    fn summary(report: &DuplicateReport) -> Vec<(String, Vec<String>)> {
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

    #[test]
    fn test_scenario_const_and_function_collide() {
        let map = analyze(&[
            ("F1.js", "export const Config = {};"),
            ("F2.js", "export function Config() {}"),
        ]);
        let report = find_duplicates(&map, Vec::<String>::new());

        assert_eq!(
            summary(&report),
            vec![(
                "Config".to_string(),
                vec!["F1.js:1".to_string(), "F2.js:1".to_string()]
            )]
        );
    }

    #[test]
    fn test_scenario_whitelisted_name_is_exempt() {
        let map = analyze(&[
            ("F1.js", "export const Config = {};"),
            ("F2.js", "export function Config() {}"),
        ]);
        assert!(find_duplicates(&map, ["Config"]).is_empty());
    }

    #[test]
    fn test_scenario_forwarding_reexport_is_exempt() {
        let map = analyze(&[
            ("F1.js", "import { Shared } from \"./lib\"; export { Shared };"),
            ("F2.js", "export const Shared = 1;"),
        ]);
        assert!(find_duplicates(&map, Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_scenario_duplicate_registration_precedes_detection() {
        let sources = vec![
            SourceFile::new("F1.js", "export const a = 1;", Dialect::EcmaScript),
            SourceFile::new("F1.js", "export const a = 1;", Dialect::EcmaScript),
        ];
        let err = AnalysisPass::sequential().run(sources).unwrap_err();
        assert!(matches!(err, Error::DuplicateRegistration(_)));
    }

    #[test]
    fn test_default_and_renamed_imports_do_not_exempt() {
        let map = analyze(&[
            ("a.js", "import X from \"m\";\nexport { X };"),
            ("b.js", "import { Y as X } from \"m\";\nexport { X };"),
            ("c.js", "export function X() {}"),
        ]);
        let report = find_duplicates(&map, Vec::<String>::new());

        assert_eq!(
            summary(&report),
            vec![(
                "X".to_string(),
                vec![
                    "a.js:2".to_string(),
                    "b.js:2".to_string(),
                    "c.js:1".to_string()
                ]
            )]
        );
    }

    #[test]
    fn test_report_order_follows_second_sighting() {
        let map = analyze(&[
            ("a.ts", "export const B = 1;\nexport const A = 1;"),
            ("b.ts", "export const A = 2;"),
            ("c.ts", "export const B = 3;\nexport const C = 3;"),
        ]);
        let report = find_duplicates(&map, Vec::<String>::new());

        assert_eq!(report.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(!report.contains("C"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let map = analyze(&[
            ("a.js", "export const config = 1;"),
            ("b.js", "export const Config = 1;"),
        ]);
        assert!(find_duplicates(&map, Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_private_exports_still_collide() {
        let map = analyze(&[
            ("a.ts", "/** @private */\nexport const hidden = 1;"),
            ("b.ts", "export const hidden = 2;"),
        ]);
        let report = find_duplicates(&map, Vec::<String>::new());
        assert_eq!(report.get("hidden").map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_detector_is_reusable() {
        let map = analyze(&[("a.js", "export var x;"), ("b.js", "export var x;")]);
        let detector = DuplicateDetector::new(Whitelist::new());

        assert_eq!(detector.detect(&map), detector.detect(&map));
    }
}
