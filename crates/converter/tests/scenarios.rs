use converter::{
    classify_source, collect_stats, collect_stats_parallel, convert, stats, ConversionOptions,
    ConvertError, FlowConstruct, PathPrefixBuckets, PragmaClassification, StatsCollector,
};
use pretty_assertions::assert_eq;
use std::{fs, path::PathBuf};

fn inline() -> ConversionOptions {
    ConversionOptions {
        inline_utility_types: true,
        ..Default::default()
    }
}

#[test]
fn pragma_without_types() {
    assert_eq!(
        classify_source("// @flow\nconst x = 1;").unwrap(),
        PragmaClassification::FlowAnnotatedEmpty
    );
}

#[test]
fn maybe_type_alias() {
    let src = "// @flow\ntype T = ?string;";
    assert_eq!(
        classify_source(src).unwrap(),
        PragmaClassification::FlowAnnotatedWithTypes
    );
    let out = convert(src, &Default::default()).unwrap();
    assert_eq!(out.code, "// @flow\ntype T = string | null | undefined;");
    assert_eq!(out.extension(), "ts");
}

#[test]
fn exact_object() {
    let out = convert("type S = {| a: number |};", &Default::default()).unwrap();
    assert_eq!(out.code, "type S = { a: number };");
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].construct, FlowConstruct::ExactObject);
    assert_eq!((out.diagnostics[0].line, out.diagnostics[0].column), (1, 10));
}

#[test]
fn shape_by_reference_or_inline() {
    let src = "type P<T> = $Shape<T>;";
    let out = convert(src, &Default::default()).unwrap();
    assert_eq!(out.code, "type P<T> = Partial<T>;");

    let out = convert(src, &inline()).unwrap();
    assert_eq!(out.code, "type P<T> = { [K in keyof T]?: T[K] };");

    let out = convert("type P = $Shape<{ a: number, b: string }>;", &inline()).unwrap();
    assert_eq!(out.code, "type P = { a?: number; b?: string };");
}

#[test]
fn batch_with_a_broken_file() {
    let files = [
        ("one.js", "// @flow\ntype A = number;"),
        ("two.js", "// @flow\ntype = ;"),
        ("three.js", "// @flow\nconst c = 3;"),
    ];
    let mut collector = StatsCollector::new(|p: &str| PathPrefixBuckets::default().bucket(p));
    for (path, src) in files {
        collector.add::<String>(path, Ok(src));
    }
    let report = collector.finish();

    assert_eq!(report.value(stats::FLOW_FILES), 2);
    assert_eq!(report.value(stats::PARSE_ERRORS), 1);
    assert_eq!(report.categories[stats::PARSE_ERRORS].files, vec!["two.js".to_string()]);
    assert_eq!(report.value(stats::TYPED_FLOW_FILES), 1);
    assert_eq!(report.value(stats::EMPTY_FLOW_FILES), 1);
}

fn write_fixtures(name: &str, files: &[(&str, &str)]) -> Vec<PathBuf> {
    let dir = std::env::temp_dir().join(format!("flow2ts-{}-{}", name, std::process::id()));
    fs::create_dir_all(dir.join("pkg")).unwrap();
    files
        .iter()
        .map(|(path, src)| {
            let path = dir.join(path);
            fs::write(&path, src).unwrap();
            path
        })
        .collect()
}

#[test]
fn sequential_and_parallel_reports_agree() {
    let mut files = write_fixtures(
        "stats",
        &[
            ("pkg/a.js", "// @flow\ntype A = number;"),
            ("pkg/b.js", "type = ;"),
            ("c.js", "// @flow\nconst c = 3;"),
            ("d.js", "export type D = {| d: string |};"),
        ],
    );
    files.push(files[0].with_file_name("missing.js"));

    let sequential = collect_stats(&files, |p: &str| PathPrefixBuckets::default().bucket(p));
    let parallel =
        collect_stats_parallel(&files, |p: &str| PathPrefixBuckets::default().bucket(p));
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.value(stats::PARSE_ERRORS), 2);
    assert_eq!(sequential.bucket_total(), 2);
}

#[test]
fn parse_failures_are_errors() {
    match convert("// @flow\nconst = 1;", &Default::default()) {
        Err(ConvertError::ParseFailure { line, .. }) => assert_eq!(line, 2),
        res => panic!("{:?}", res),
    }
}

#[test]
fn invalid_options_are_errors() {
    let mut options = ConversionOptions::default();
    options.style.tab_width = 3;
    match convert("const a = 1;", &options) {
        Err(ConvertError::InvalidOption { option, .. }) => assert_eq!(option, "tabWidth"),
        res => panic!("{:?}", res),
    }
}

#[test]
fn jsx_files_become_tsx() {
    let out = convert(
        "// @flow\nconst a = (<A b={(c: any)} />: React.Node);",
        &Default::default(),
    )
    .unwrap();
    assert_eq!(out.extension(), "tsx");
    assert_eq!(
        out.code,
        "// @flow\nconst a = (<A b={(c as any)} /> as React.ReactNode);"
    );
}

#[test]
fn styled_output() {
    let mut options = ConversionOptions::default();
    options.style.use_external_formatter = true;
    options.style.semicolons = true;
    options.style.tab_width = 2;
    let src = "// @flow\nexport type T = ?string\nfunction f(x: mixed) {\nreturn x\n}\n";
    let out = convert(src, &options).unwrap();
    assert!(out.code.starts_with("// @flow\n"), "{}", out.code);
    assert!(out.code.contains("export type T = string | null | undefined;"), "{}", out.code);
    assert!(out.code.contains("function f(x: unknown) {\n  return x;\n}"), "{}", out.code);
}
