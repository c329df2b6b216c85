//! Converts Flow-annotated JavaScript into TypeScript.
//!
//! ```
//! use converter::{convert, ConversionOptions};
//!
//! let out = convert("// @flow\nlet x: ?number = null;\n", &ConversionOptions::default()).unwrap();
//! assert_eq!(out.code, "// @flow\nlet x: number | null | undefined = null;\n");
//! assert_eq!(out.extension(), "ts");
//! ```
#![deny(unreachable_patterns)]

pub use self::{
    classify::{classify, classify_source, has_flow_pragma, PragmaClassification},
    construct::{Diagnostic, FlowConstruct, FlowConstructFinder, TsConstruct},
    error::ConvertError,
    jsx::{detect_jsx, detect_jsx_source},
    options::{ArrowParens, ConversionOptions, StyleOptions, TrailingComma},
    stats::{collect_stats, collect_stats_parallel, PathPrefixBuckets, StatsCollector, StatsReport},
    transducer::{transduce, Fragment, Rewrite, Transduced},
};
use parser::{ParsedProgram, Syntax};
use serde::Serialize;
use tracing::debug;

pub mod classify;
pub mod construct;
pub mod error;
pub mod format;
pub mod jsx;
pub mod options;
pub mod stats;
pub mod transducer;

/// The converted text of one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub code: String,
    /// Approximations made, in source order.
    pub diagnostics: Vec<Diagnostic>,
    pub has_jsx: bool,
}

impl ConversionResult {
    /// `tsx` if the file needs it, `ts` otherwise.
    pub fn extension(&self) -> &'static str {
        if self.has_jsx {
            "tsx"
        } else {
            "ts"
        }
    }
}

/// Converts one file.
pub fn convert(src: &str, options: &ConversionOptions) -> Result<ConversionResult, ConvertError> {
    options.validate()?;

    let parsed = parse_source(src)?;
    let has_jsx = detect_jsx(&parsed.program);
    let transduced = transduce(src, parsed, options);
    let code = format::format(src, &transduced, &options.style)?;

    let mut diagnostics = transduced.diagnostics;
    diagnostics.sort_by_key(|d| d.span.lo);
    debug!(
        diagnostics = diagnostics.len(),
        has_jsx, "converted file"
    );

    Ok(ConversionResult {
        code,
        diagnostics,
        has_jsx,
    })
}

/// Parses with the one syntax configuration every part of the converter
/// shares.
pub(crate) fn parse_source(src: &str) -> Result<ParsedProgram, ConvertError> {
    parser::parse(src, Syntax::default()).map_err(|err| ConvertError::parse_failure(src, &err))
}
