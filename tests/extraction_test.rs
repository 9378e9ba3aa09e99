mod common;

use common::fixture;
use dupexports::{analyze_source, get_extractor, Dialect, Error, FileTables};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::path::Path;

fn analyze_fixture(relative: &str) -> FileTables {
    let path = fixture(relative);
    let text = std::fs::read_to_string(&path).unwrap();
    let dialect = Dialect::from_path(&path).unwrap();
    analyze_source(&text, &path, get_extractor(dialect)).unwrap()
}

fn exports(tables: &FileTables) -> Vec<(&str, usize, bool)> {
    tables
        .exports
        .iter()
        .map(|r| (r.name.as_str(), r.line, r.is_private))
        .collect()
}

fn imports(tables: &FileTables) -> Vec<(&str, &str, bool, bool)> {
    tables
        .imports
        .iter()
        .map(|i| (i.name.as_str(), i.module.as_str(), i.is_default, i.is_renamed))
        .collect()
}

#[test]
fn test_javascript_sanity_fixture() {
    let tables = analyze_fixture("sanity/sanity.js");

    assert_eq!(
        exports(&tables),
        vec![
            ("fun", 3, false),
            ("fun_default", 5, false),
            ("variable", 10, false),
            ("variable2", 12, false),
            ("private_variable", 18, true),
            ("Type", 20, false),
            ("Interface", 22, false),
            ("X", 27, false),
            ("ImportedType", 32, false),
        ]
    );
    assert_eq!(
        imports(&tables),
        vec![
            ("DEF", "./non-exist-files", true, false),
            ("X", "./non-exist-files", false, false),
            ("Y", "./non-exist-files", false, false),
            ("ZZZ", "./non-exist-files", false, true),
            ("ImportedType", "./non-exist-files", false, false),
        ]
    );
    assert!(tables
        .imports
        .iter()
        .all(|i| i.origin_directory == fixture("sanity")));
}

#[test]
fn test_typescript_sanity_fixture() {
    let tables = analyze_fixture("sanity/sanity.ts");

    assert_eq!(
        exports(&tables),
        vec![
            ("fun", 3, false),
            ("fun_default", 5, false),
            ("variable", 10, false),
            ("variable2", 12, false),
            ("private_variable", 18, true),
            ("Type", 20, false),
            ("Interface", 22, false),
            ("X", 27, false),
            ("ImportedType", 32, false),
        ]
    );
    assert_eq!(
        imports(&tables),
        vec![
            ("DEF", "./non-exist-files", true, false),
            ("X", "./non-exist-files", false, false),
            ("Y", "./non-exist-files", false, false),
            ("ZZZ", "./non-exist-files", false, true),
            ("ImportedType", "./non-exist-files", false, false),
        ]
    );
}

#[test]
fn test_reexports_contribute_no_entries() {
    for (uri, dialect) in [("a.js", Dialect::EcmaScript), ("a.ts", Dialect::TypeScript)] {
        let tables = analyze_source(
            indoc! {r#"
                export * from "./x";
                export { a } from "./x";
            "#},
            Path::new(uri),
            get_extractor(dialect),
        )
        .unwrap();
        assert!(tables.exports.is_empty(), "{uri}");
    }
}

#[test]
fn test_flow_type_exports_in_javascript() {
    let tables = analyze_source(
        indoc! {"
            // @flow
            export type Type = unknown;
            export interface I {}
            export const render = (props: Props): string => props.label;
        "},
        Path::new("a.js"),
        get_extractor(Dialect::EcmaScript),
    )
    .unwrap();
    assert_eq!(
        exports(&tables),
        vec![("Type", 2, false), ("I", 3, false), ("render", 4, false)]
    );
}

#[test]
fn test_flow_annotations_alongside_jsx() {
    let tables = analyze_source(
        indoc! {"
            import type { Props } from './props';
            export function View(props: Props) {
              return <div>{props.label}</div>;
            }
        "},
        Path::new("view.js"),
        get_extractor(Dialect::EcmaScript),
    )
    .unwrap();
    assert_eq!(exports(&tables), vec![("View", 2, false)]);
    assert_eq!(imports(&tables), vec![("Props", "./props", false, false)]);
}

#[test]
fn test_enums_are_unsupported_in_javascript() {
    let err = analyze_source(
        "export enum Mode { On, Off }",
        Path::new("a.js"),
        get_extractor(Dialect::EcmaScript),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedConstruct { ref kind, .. } if kind == "enum_declaration"
    ));
}

#[test]
fn test_javascript_syntax_error_reports_javascript_location() {
    let err = analyze_source(
        "export const ok = 1;\nconst broken = ;",
        Path::new("a.js"),
        get_extractor(Dialect::EcmaScript),
    )
    .unwrap_err();
    match err {
        Error::Syntax { location, .. } => assert_eq!(location.line, 2),
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn test_syntax_error_reports_location() {
    let err = analyze_source(
        "export const ok = 1;\nconst broken = ;",
        Path::new("a.ts"),
        get_extractor(Dialect::TypeScript),
    )
    .unwrap_err();
    match err {
        Error::Syntax { location, .. } => assert_eq!(location.line, 2),
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn test_enum_and_class_in_tsx() {
    let tables = analyze_source(
        indoc! {"
            export enum Mode { On, Off }
            export class View {
              render() {
                return <div />;
              }
            }
        "},
        Path::new("view.tsx"),
        get_extractor(Dialect::TypeScript),
    )
    .unwrap();
    assert_eq!(exports(&tables), vec![("Mode", 1, false), ("View", 2, false)]);
}
