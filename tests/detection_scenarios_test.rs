mod common;

use common::{analyze, create_project, fixture, relative_summary, report_summary};
use dupexports::io::find_source_files;
use dupexports::{
    find_duplicate_exports, find_duplicates, AnalysisPass, Dialect, DuplicateDetector, Error,
    SourceFile, Whitelist,
};
use pretty_assertions::assert_eq;

fn no_whitelist() -> Vec<String> {
    Vec::new()
}

fn pairs(items: &[(&str, Vec<&str>)]) -> Vec<(String, Vec<String>)> {
    items
        .iter()
        .map(|(name, occurrences)| {
            (
                name.to_string(),
                occurrences.iter().map(|o| o.to_string()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_const_and_function_with_same_name_collide() {
    let map = analyze(&[
        ("F1.js", "export const Config = {};"),
        ("F2.js", "export function Config() {}"),
    ]);

    assert_eq!(
        report_summary(&find_duplicates(&map, no_whitelist())),
        pairs(&[("Config", vec!["F1.js:1", "F2.js:1"])])
    );
}

#[test]
fn test_whitelist_suppresses_collision() {
    let map = analyze(&[
        ("F1.js", "export const Config = {};"),
        ("F2.js", "export function Config() {}"),
    ]);

    assert!(find_duplicates(&map, ["Config"]).is_empty());
}

#[test]
fn test_forwarding_file_is_not_a_declaration() {
    let map = analyze(&[
        ("F1.js", "import { Shared } from \"./lib\"; export { Shared };"),
        ("F2.js", "export const Shared = 1;"),
    ]);

    assert!(find_duplicates(&map, no_whitelist()).is_empty());
}

#[test]
fn test_duplicate_uri_fails_before_detection() {
    let files = vec![
        SourceFile::new("F1.js", "export const A = 1;", Dialect::EcmaScript),
        SourceFile::new("F2.js", "export const B = 1;", Dialect::EcmaScript),
        SourceFile::new("F1.js", "export const A = 1;", Dialect::EcmaScript),
    ];

    let err = find_duplicate_exports(files, no_whitelist()).unwrap_err();
    assert!(matches!(err, Error::DuplicateRegistration(ref uri) if uri.as_os_str() == "F1.js"));
}

#[test]
fn test_forwarding_exemption_across_dialects() {
    let map = analyze(&[
        ("fileA.ts", "import {X} from \"m\"; export {X};"),
        ("fileB.js", "export function X(){}"),
    ]);

    assert!(find_duplicates(&map, no_whitelist()).is_empty());
}

#[test]
fn test_named_default_exports_collide_by_own_name() {
    let map = analyze(&[
        ("a.js", "export default function foo(){}"),
        ("b.ts", "export default function foo(){}"),
    ]);
    let report = find_duplicates(&map, no_whitelist());

    assert_eq!(
        report_summary(&report),
        pairs(&[("foo", vec!["a.js:1", "b.ts:1"])])
    );
    assert!(!report.contains("default"));
}

#[test]
fn test_third_sighting_is_appended() {
    let map = analyze(&[
        ("a.js", "export const Config = 1;"),
        ("b.js", "export const Other = 1;\nexport const Config = 2;"),
        ("c.ts", "export interface Config {}"),
    ]);

    assert_eq!(
        report_summary(&find_duplicates(&map, no_whitelist())),
        pairs(&[("Config", vec!["a.js:1", "b.js:2", "c.ts:1"])])
    );
}

#[test]
fn test_reexports_never_count_as_sightings() {
    let map = analyze(&[
        ("a.js", "export * from \"./b\";\nexport { a } from \"./b\";"),
        ("b.js", "export const a = 1;"),
    ]);

    assert!(find_duplicates(&map, no_whitelist()).is_empty());
}

#[test]
fn test_unsupported_construct_aborts_the_run() {
    let files = find_source_files(&fixture("unsupported"), &[]).unwrap();
    let err = AnalysisPass::sequential().run(files).unwrap_err();

    match err {
        Error::AnalysisFailure { uri, cause } => {
            assert!(uri.ends_with("destructure.js"));
            assert!(matches!(
                *cause,
                Error::UnsupportedConstruct { ref kind, location }
                    if kind == "object_pattern" && location.line == 3
            ));
        }
        other => panic!("expected AnalysisFailure, got {other:?}"),
    }
}

#[test]
fn test_duplicates_fixture_project() {
    let root = fixture("duplicates");
    let files = find_source_files(&root, &[]).unwrap();
    let map = AnalysisPass::default().run(files).unwrap();

    assert_eq!(map.len(), 3);
    assert_eq!(
        relative_summary(&find_duplicates(&map, no_whitelist()), &root),
        pairs(&[
            ("createStore", vec!["src/config.js:3", "src/shared.ts:3"]),
            ("Config", vec!["src/config.js:1", "src/widgets/config.ts:5"]),
        ])
    );
}

#[test]
fn test_clean_fixture_project() {
    let files = find_source_files(&fixture("clean"), &[]).unwrap();
    assert_eq!(files.len(), 4);

    let report = find_duplicate_exports(files, no_whitelist()).unwrap();
    assert!(report.is_empty());
}

#[test]
fn test_ignore_pattern_removes_colliding_file() {
    let project = create_project(&[
        ("src/a.ts", "export const Config = 1;"),
        ("src/generated/a.ts", "export const Config = 1;"),
    ]);
    let root = project.path();

    let all = find_source_files(root, &[]).unwrap();
    assert_eq!(find_duplicate_exports(all, no_whitelist()).unwrap().len(), 1);

    let filtered = find_source_files(root, &["src/generated/**".to_string()]).unwrap();
    assert!(find_duplicate_exports(filtered, no_whitelist())
        .unwrap()
        .is_empty());
}

#[test]
fn test_detector_with_explicit_whitelist() {
    let map = analyze(&[
        ("a.js", "export const A = 1;\nexport const B = 1;"),
        ("b.js", "export const A = 1;\nexport const B = 1;"),
    ]);
    let mut whitelist = Whitelist::new();
    whitelist.insert("A");
    let report = DuplicateDetector::new(whitelist).detect(&map);

    assert_eq!(report.names().collect::<Vec<_>>(), vec!["B"]);
}
