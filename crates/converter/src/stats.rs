//! Statistics over a set of files: how many ask for Flow, how many use it,
//! and where the typed ones live.
use crate::{
    classify::{classify, has_flow_pragma, PragmaClassification},
    parse_source,
};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use std::{
    any::Any,
    fmt, fs,
    panic::{catch_unwind, AssertUnwindSafe},
    path::Path,
};
use tracing::{debug, warn};

pub const EMPTY_FLOW_FILES: &str = "emptyFlowFiles";
pub const FLOW_FILES: &str = "flowFiles";
pub const TYPED_FLOW_FILES: &str = "typedFlowFiles";
pub const PARSE_ERRORS: &str = "parseErrors";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub title: &'static str,
    pub description: &'static str,
    pub value: usize,
    pub files: Vec<String>,
}

impl Category {
    fn new(title: &'static str, description: &'static str) -> Self {
        Category {
            title,
            description,
            value: 0,
            files: vec![],
        }
    }

    fn add(&mut self, path: &str) {
        self.value += 1;
        self.files.push(path.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    /// Keyed by [EMPTY_FLOW_FILES] and friends, in display order.
    pub categories: IndexMap<&'static str, Category>,
    /// Number of typed files per bucket, in order of first appearance.
    pub buckets: IndexMap<String, usize>,
}

impl Default for StatsReport {
    fn default() -> Self {
        let categories = [
            (
                EMPTY_FLOW_FILES,
                Category::new(
                    "Empty @flow files",
                    "Number of Flow files containing @flow comment but no type information",
                ),
            ),
            (FLOW_FILES, Category::new("@flow files", "Number of Flow files")),
            (
                TYPED_FLOW_FILES,
                Category::new(
                    "Flow files with types",
                    "Number of files containing Flow type information",
                ),
            ),
            (
                PARSE_ERRORS,
                Category::new(
                    "Parse Errors",
                    "Number of errors reported when trying to parse a file",
                ),
            ),
        ];
        StatsReport {
            categories: categories.into_iter().collect(),
            buckets: Default::default(),
        }
    }
}

impl StatsReport {
    /// Sum over every bucket, which is the number of typed files.
    pub fn bucket_total(&self) -> usize {
        self.buckets.values().sum()
    }

    pub fn value(&self, category: &str) -> usize {
        self.categories.get(category).map_or(0, |c| c.value)
    }

    fn category(&mut self, key: &str) -> Option<&mut Category> {
        self.categories.get_mut(key)
    }
}

/// What was learned about one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Classified {
        classification: PragmaClassification,
        has_pragma: bool,
    },
    /// Reading, parsing or classifying failed.
    Failed(String),
}

impl FileOutcome {
    /// Classifies `src`. A panic is caught and reported as a failure of this
    /// file alone.
    pub fn of_source(src: &str) -> Self {
        let res = catch_unwind(AssertUnwindSafe(|| {
            parse_source(src).map(|parsed| (classify(&parsed), has_flow_pragma(&parsed)))
        }));
        match res {
            Ok(Ok((classification, has_pragma))) => FileOutcome::Classified {
                classification,
                has_pragma,
            },
            Ok(Err(err)) => FileOutcome::Failed(err.to_string()),
            Err(payload) => FileOutcome::Failed(panic_message(payload)),
        }
    }

    pub fn of_read<E: fmt::Display>(source: Result<&str, E>) -> Self {
        match source {
            Ok(src) => FileOutcome::of_source(src),
            Err(err) => FileOutcome::Failed(err.to_string()),
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    let msg = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".into());
    format!("panicked: {}", msg)
}

/// Accumulates the statistics of files added one at a time.
pub struct StatsCollector<F> {
    bucket_fn: F,
    report: StatsReport,
}

impl<F> StatsCollector<F>
where
    F: Fn(&str) -> String,
{
    pub fn new(bucket_fn: F) -> Self {
        StatsCollector {
            bucket_fn,
            report: Default::default(),
        }
    }

    /// Records the file at `path` given its contents or the error reading it.
    pub fn add<E: fmt::Display>(&mut self, path: &str, source: Result<&str, E>) {
        self.record(path, FileOutcome::of_read(source));
    }

    pub fn record(&mut self, path: &str, outcome: FileOutcome) {
        let (classification, has_pragma) = match outcome {
            FileOutcome::Classified {
                classification,
                has_pragma,
            } => (classification, has_pragma),
            FileOutcome::Failed(msg) => {
                warn!("error processing {}: {}", path, msg);
                if let Some(c) = self.report.category(PARSE_ERRORS) {
                    c.add(path);
                }
                return;
            }
        };
        debug!("{}: {:?}", path, classification);

        if has_pragma {
            if let Some(c) = self.report.category(FLOW_FILES) {
                c.add(path);
            }
        }
        match classification {
            PragmaClassification::FlowAnnotatedEmpty => {
                if let Some(c) = self.report.category(EMPTY_FLOW_FILES) {
                    c.add(path);
                }
                return;
            }
            PragmaClassification::FlowAnnotatedWithTypes => {
                if let Some(c) = self.report.category(TYPED_FLOW_FILES) {
                    c.add(path);
                }
            }
            PragmaClassification::NoFlowPragma => {}
        }

        let count = self.report.buckets.entry((self.bucket_fn)(path)).or_insert(0);
        if classification == PragmaClassification::FlowAnnotatedWithTypes {
            *count += 1;
        }
    }

    pub fn finish(self) -> StatsReport {
        self.report
    }
}

/// Buckets a path by its first `segments` directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathPrefixBuckets {
    pub segments: usize,
}

impl Default for PathPrefixBuckets {
    fn default() -> Self {
        PathPrefixBuckets { segments: 2 }
    }
}

impl PathPrefixBuckets {
    pub fn bucket(&self, path: &str) -> String {
        let dirs: Vec<&str> = path
            .split(['/', '\\'])
            .filter(|s| !s.is_empty() && *s != ".")
            .collect();
        // The last segment is the file name.
        let dirs = &dirs[..dirs.len().saturating_sub(1)];
        match dirs.len().min(self.segments) {
            0 => ".".into(),
            n => dirs[..n].join("/"),
        }
    }
}

/// Reads and classifies `files` one after the other.
pub fn collect_stats<P, F>(files: &[P], bucket_fn: F) -> StatsReport
where
    P: AsRef<Path>,
    F: Fn(&str) -> String,
{
    let mut collector = StatsCollector::new(bucket_fn);
    for path in files {
        let path = path.as_ref();
        let src = fs::read_to_string(path);
        collector.add(&path.display().to_string(), src.as_deref());
    }
    collector.finish()
}

/// Like [collect_stats], reading and classifying on the rayon pool. The
/// report is the same as the sequential one.
pub fn collect_stats_parallel<P, F>(files: &[P], bucket_fn: F) -> StatsReport
where
    P: AsRef<Path> + Sync,
    F: Fn(&str) -> String,
{
    let outcomes: Vec<(String, FileOutcome)> = files
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let src = fs::read_to_string(path);
            (path.display().to_string(), FileOutcome::of_read(src.as_deref()))
        })
        .collect();

    let mut collector = StatsCollector::new(bucket_fn);
    for (path, outcome) in outcomes {
        collector.record(&path, outcome);
    }
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report(files: &[(&str, &str)]) -> StatsReport {
        let buckets = PathPrefixBuckets { segments: 1 };
        let mut c = StatsCollector::new(|p: &str| buckets.bucket(p));
        for (path, src) in files {
            c.add::<String>(path, Ok(*src));
        }
        c.finish()
    }

    #[test]
    fn categories() {
        let r = report(&[
            ("a/empty.js", "// @flow\nconst x = 1;"),
            ("a/typed.js", "// @flow\ntype T = number;"),
            ("b/typed.js", "export type T = number;"),
            ("b/plain.js", "const y = 2;"),
            ("b/broken.js", "const = ;"),
        ]);
        assert_eq!(r.value(EMPTY_FLOW_FILES), 1);
        assert_eq!(r.value(FLOW_FILES), 2);
        assert_eq!(r.value(TYPED_FLOW_FILES), 2);
        assert_eq!(r.value(PARSE_ERRORS), 1);
        assert_eq!(r.categories[PARSE_ERRORS].files, vec!["b/broken.js".to_string()]);
    }

    #[test]
    fn buckets_count_typed_files() {
        let r = report(&[
            ("a/empty.js", "// @flow\nconst x = 1;"),
            ("a/typed.js", "type T = number;"),
            ("b/typed.js", "type T = number;"),
            ("b/more.js", "type U = string;"),
            ("c/plain.js", "const y = 2;"),
        ]);
        let buckets: Vec<(&str, usize)> = r.buckets.iter().map(|(k, v)| (&**k, *v)).collect();
        assert_eq!(buckets, vec![("a", 1), ("b", 2), ("c", 0)]);
        assert_eq!(r.bucket_total(), r.value(TYPED_FLOW_FILES));
    }

    #[test]
    fn read_failures_are_parse_errors() {
        let mut c = StatsCollector::new(|_: &str| String::new());
        c.add("missing.js", Err::<&str, _>("No such file"));
        let r = c.finish();
        assert_eq!(r.value(PARSE_ERRORS), 1);
        assert!(r.buckets.is_empty());
    }

    #[test]
    fn path_prefixes() {
        let b = PathPrefixBuckets::default();
        assert_eq!(b.bucket("src/components/button/index.js"), "src/components");
        assert_eq!(b.bucket("./src/index.js"), "src");
        assert_eq!(b.bucket("index.js"), ".");
    }

    #[test]
    fn serializes_categories_in_order() {
        let json = serde_json::to_string(&StatsReport::default()).unwrap();
        let positions: Vec<usize> = ["emptyFlowFiles", "flowFiles", "typedFlowFiles", "parseErrors"]
            .iter()
            .map(|k| json.find(&format!("\"{}\"", k)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains(r#""title":"@flow files""#));
    }
}
