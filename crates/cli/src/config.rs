use anyhow::{Context, Error, Result};
use converter::ConversionOptions;
use serde_json::error::Category;
use std::{fs::read_to_string, path::Path};

/// Reads [ConversionOptions] from a JSON file. Missing fields keep their
/// defaults; unknown fields are an error.
pub fn load_config(path: &Path) -> Result<ConversionOptions> {
    fn convert_json_err(e: serde_json::Error) -> Error {
        let line = e.line();
        let column = e.column();

        let msg = match e.classify() {
            Category::Io => "io error",
            Category::Syntax => "syntax error",
            Category::Data => "unmatched data",
            Category::Eof => "unexpected eof",
        };
        Error::new(e).context(format!(
            "Failed to deserialize config (json) file: {}: {}:{}",
            msg, line, column
        ))
    }

    let content = read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    serde_json::from_str::<ConversionOptions>(&content).map_err(convert_json_err)
}
