//! Options of one conversion.
//!
//! The defaults are those of the command-line driver: direct printing, no
//! semicolons, double quotes, four-space indentation.
use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Expand utility types such as `$Shape<T>` structurally instead of
    /// referring to the closest TypeScript utility type.
    pub inline_utility_types: bool,
    pub style: StyleOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct StyleOptions {
    /// Reprint the whole file instead of patching the original text. The
    /// remaining options only apply then.
    pub use_external_formatter: bool,
    pub semicolons: bool,
    pub single_quote: bool,
    /// `2` or `4`
    pub tab_width: u8,
    pub trailing_comma: TrailingComma,
    pub bracket_spacing: bool,
    pub arrow_parens: ArrowParens,
    pub print_width: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            use_external_formatter: false,
            semicolons: false,
            single_quote: false,
            tab_width: 4,
            trailing_comma: TrailingComma::All,
            bracket_spacing: false,
            arrow_parens: ArrowParens::Avoid,
            print_width: 80,
        }
    }
}

impl ConversionOptions {
    /// Checks the values a type cannot restrict.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if !matches!(self.style.tab_width, 2 | 4) {
            return Err(ConvertError::invalid_option(
                "tabWidth",
                self.style.tab_width.to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&StyleOptions> for codegen::Config {
    fn from(style: &StyleOptions) -> Self {
        codegen::Config {
            semicolons: style.semicolons,
            single_quote: style.single_quote,
            tab_width: style.tab_width,
            trailing_comma: match style.trailing_comma {
                TrailingComma::All => codegen::TrailingComma::All,
                TrailingComma::Es5 => codegen::TrailingComma::Es5,
                TrailingComma::None => codegen::TrailingComma::None,
            },
            bracket_spacing: style.bracket_spacing,
            arrow_parens: match style.arrow_parens {
                ArrowParens::Avoid => codegen::ArrowParens::Avoid,
                ArrowParens::Always => codegen::ArrowParens::Always,
            },
            print_width: style.print_width,
            preserve_quotes: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    All,
    Es5,
    None,
}

impl FromStr for TrailingComma {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TrailingComma::All),
            "es5" => Ok(TrailingComma::Es5),
            "none" => Ok(TrailingComma::None),
            _ => Err(ConvertError::invalid_option("trailingComma", s)),
        }
    }
}

impl fmt::Display for TrailingComma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrailingComma::All => "all",
            TrailingComma::Es5 => "es5",
            TrailingComma::None => "none",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
    Avoid,
    Always,
}

impl FromStr for ArrowParens {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avoid" => Ok(ArrowParens::Avoid),
            "always" => Ok(ArrowParens::Always),
            _ => Err(ConvertError::invalid_option("arrowParens", s)),
        }
    }
}

impl fmt::Display for ArrowParens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArrowParens::Avoid => "avoid",
            ArrowParens::Always => "always",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_follow_the_command_line() {
        let options = ConversionOptions::default();
        assert!(!options.inline_utility_types);
        assert!(!options.style.use_external_formatter);
        assert!(!options.style.semicolons);
        assert_eq!(options.style.tab_width, 4);
        assert_eq!(options.style.trailing_comma, TrailingComma::All);
        assert_eq!(options.style.arrow_parens, ArrowParens::Avoid);
        assert_eq!(options.style.print_width, 80);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn deserializes_camel_case() {
        let options: ConversionOptions = serde_json::from_str(
            r#"{ "inlineUtilityTypes": true, "style": { "tabWidth": 2, "trailingComma": "es5" } }"#,
        )
        .unwrap();
        assert!(options.inline_utility_types);
        assert_eq!(options.style.tab_width, 2);
        assert_eq!(options.style.trailing_comma, TrailingComma::Es5);
        assert!(!options.style.semicolons);
    }

    #[test]
    fn rejects_unknown_fields() {
        let res = serde_json::from_str::<ConversionOptions>(r#"{ "prettier": true }"#);
        assert!(res.is_err());
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            "trailing".parse::<TrailingComma>(),
            Err(ConvertError::InvalidOption {
                option: "trailingComma",
                value: "trailing".into(),
            })
        );
        assert!("never".parse::<ArrowParens>().is_err());
        assert_eq!("always".parse::<ArrowParens>(), Ok(ArrowParens::Always));

        let mut options = ConversionOptions::default();
        options.style.tab_width = 3;
        assert!(matches!(
            options.validate(),
            Err(ConvertError::InvalidOption {
                option: "tabWidth",
                ..
            })
        ));
    }
}
