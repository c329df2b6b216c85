use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use config::load_config;
use converter::{
    collect_stats_parallel, convert, ArrowParens, ConversionOptions, ConversionResult,
    PathPrefixBuckets, TrailingComma,
};
use indexmap::IndexSet;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod table;

/// Converts Flow-annotated JavaScript files to TypeScript.
#[derive(Debug, Parser)]
#[command(name = "flow2ts", version)]
struct Cli {
    /// Files or glob patterns.
    #[arg(required = true)]
    files: Vec<String>,

    /// Expand utility types such as `$Shape<T>` instead of referring to
    /// TypeScript's utility types.
    #[arg(long)]
    inline_utility_types: bool,

    /// Reprint whole files with the style options below.
    #[arg(long)]
    prettier: bool,

    #[arg(long)]
    semi: bool,

    #[arg(long)]
    single_quote: bool,

    #[arg(long)]
    tab_width: Option<u8>,

    /// all, es5 or none
    #[arg(long)]
    trailing_comma: Option<TrailingComma>,

    #[arg(long)]
    bracket_spacing: bool,

    /// avoid or always
    #[arg(long)]
    arrow_parens: Option<ArrowParens>,

    #[arg(long)]
    print_width: Option<usize>,

    /// Write `.ts`/`.tsx` files next to the sources instead of printing.
    #[arg(long)]
    write: bool,

    /// Delete each source file once its conversion is written.
    #[arg(long, requires = "write")]
    delete_source: bool,

    /// Only classify the files and print statistics.
    #[arg(long)]
    stats: bool,

    /// Print statistics as JSON.
    #[arg(long, requires = "stats")]
    json: bool,

    /// Number of leading directories grouping files in the statistics.
    #[arg(long, default_value_t = 2)]
    bucket_depth: usize,

    /// JSON file of conversion options. Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> Result<ConversionOptions> {
        let mut options = match &self.config {
            Some(path) => load_config(path)?,
            None => ConversionOptions::default(),
        };

        options.inline_utility_types |= self.inline_utility_types;
        let style = &mut options.style;
        style.use_external_formatter |= self.prettier;
        style.semicolons |= self.semi;
        style.single_quote |= self.single_quote;
        style.bracket_spacing |= self.bracket_spacing;
        if let Some(tab_width) = self.tab_width {
            style.tab_width = tab_width;
        }
        if let Some(trailing_comma) = self.trailing_comma {
            style.trailing_comma = trailing_comma;
        }
        if let Some(arrow_parens) = self.arrow_parens {
            style.arrow_parens = arrow_parens;
        }
        if let Some(print_width) = self.print_width {
            style.print_width = print_width;
        }

        options.validate()?;
        Ok(options)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Expands every pattern, keeping the first occurrence of each path.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = IndexSet::new();
    for pattern in patterns {
        let paths = glob::glob(pattern).with_context(|| format!("Invalid pattern {}", pattern))?;
        let mut matched = false;
        for path in paths {
            let path = path.with_context(|| format!("Failed to expand {}", pattern))?;
            if path.is_file() {
                matched = true;
                files.insert(path);
            }
        }
        if !matched {
            warn!("no files match {}", pattern);
        }
    }
    Ok(files.into_iter().collect())
}

/// `a/b.js` becomes `a/b.ts`, or `a/b.tsx` for JSX.
fn output_path(path: &Path, result: &ConversionResult) -> PathBuf {
    path.with_extension(result.extension())
}

fn convert_file(path: &Path, options: &ConversionOptions) -> Result<ConversionResult> {
    let src = fs::read_to_string(path).context("Failed to read file")?;
    let result = convert(&src, options)?;
    for diagnostic in &result.diagnostics {
        info!("{}:{}", path.display(), diagnostic);
    }
    Ok(result)
}

fn write_output(path: &Path, result: &ConversionResult, delete_source: bool) -> Result<()> {
    let out = output_path(path, result);
    fs::write(&out, &result.code)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    debug!("wrote {}", out.display());
    if delete_source && out != path {
        fs::remove_file(path).context("Failed to delete source file")?;
    }
    Ok(())
}

fn run_stats(cli: &Cli, files: &[PathBuf]) -> Result<()> {
    let buckets = PathPrefixBuckets {
        segments: cli.bucket_depth,
    };
    let report = collect_stats_parallel(files, |path: &str| buckets.bucket(path));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", table::categories(&report));
        println!("{}", table::buckets(&report));
    }
    Ok(())
}

/// Returns the number of files which failed.
fn run_convert(cli: &Cli, files: &[PathBuf]) -> Result<usize> {
    let options = cli.options()?;

    let results: Vec<(&PathBuf, Result<ConversionResult>)> = files
        .par_iter()
        .map(|path| {
            let res = convert_file(path, &options).and_then(|result| {
                if cli.write {
                    write_output(path, &result, cli.delete_source)?;
                }
                Ok(result)
            });
            (path, res)
        })
        .collect();

    let mut failed = 0;
    for (path, res) in results {
        match res {
            Ok(result) => {
                if !cli.write {
                    println!("// {}", output_path(path, &result).display());
                    print!("{}", result.code);
                    if !result.code.ends_with('\n') {
                        println!();
                    }
                }
            }
            Err(err) => {
                error!("error processing {}: {:#}", path.display(), err);
                failed += 1;
            }
        }
    }
    Ok(failed)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let files = expand_globs(&cli.files)?;
    if files.is_empty() {
        bail!("No input files");
    }
    debug!("{} files", files.len());

    if cli.stats {
        return run_stats(&cli, &files);
    }

    let failed = run_convert(&cli, &files)?;
    if failed > 0 {
        error!("{} of {} files failed", failed, files.len());
        process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn result(code: &str, has_jsx: bool) -> ConversionResult {
        ConversionResult {
            code: code.into(),
            diagnostics: vec![],
            has_jsx,
        }
    }

    #[test]
    fn output_extension() {
        assert_eq!(
            output_path(Path::new("src/a.js"), &result("", false)),
            PathBuf::from("src/a.ts")
        );
        assert_eq!(
            output_path(Path::new("src/b.jsx"), &result("", true)),
            PathBuf::from("src/b.tsx")
        );
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "flow2ts",
            "--prettier",
            "--semi",
            "--tab-width",
            "2",
            "--trailing-comma",
            "none",
            "a.js",
        ]);
        let options = cli.options().unwrap();
        assert!(options.style.use_external_formatter);
        assert!(options.style.semicolons);
        assert_eq!(options.style.tab_width, 2);
        assert_eq!(options.style.trailing_comma, TrailingComma::None);
        assert_eq!(options.style.arrow_parens, ArrowParens::Avoid);
    }

    #[test]
    fn invalid_tab_width_is_rejected() {
        let cli = Cli::parse_from(["flow2ts", "--tab-width", "3", "a.js"]);
        assert!(cli.options().is_err());
    }

    #[test]
    fn delete_source_requires_write() {
        assert!(Cli::try_parse_from(["flow2ts", "--delete-source", "a.js"]).is_err());
    }
}
