//! Command parser for `<length> <unit> in <unit>`
//!
//! Stateless: every call validates one token sequence, in order:
//! token count, keyword, amount, then both units through the engine.
//! The first failure wins.

use ell_core::ConversionEngine;
use thiserror::Error;
use tracing::debug;

/// Usage text shown for malformed commands
pub const USAGE: &str = "Please use format '<length> <unit> in <unit>'";

/// The only accepted instruction keyword
pub const KEYWORD: &str = "in";

/// Significant digits kept when printing a converted length
pub const SIGNIFICANT_DIGITS: usize = 15;

/// A validated command, borrowing its tokens
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest<'a> {
    pub input_value: f64,
    /// Amount exactly as typed
    pub amount: &'a str,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
}

/// Why a command could not be converted
///
/// `Display` renders the user-facing diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("{}", USAGE)]
    Usage,

    #[error("Incorrect command, expected '{keyword}'. {usage}", keyword = KEYWORD, usage = USAGE)]
    WrongKeyword(String),

    #[error("'{0}' is not a valid number. {usage}", usage = USAGE)]
    InvalidNumber(String),

    #[error("'{amount} {from_unit}' is too large to express in '{to_unit}'")]
    OutOfRange { amount: String, from_unit: String, to_unit: String },

    #[error("'{unit}' is not a valid unit. Available units are {}", quote_list(.available))]
    InvalidUnit { unit: String, available: Vec<String> },
}

/// Round to [`SIGNIFICANT_DIGITS`] and print without trailing zeros.
///
/// Hides the last-bit noise of the two-step normalization: 0.9999999999999998
/// prints as `1`, 30.48 stays `30.48`.
pub fn format_length(value: f64) -> String {
    let rounded: f64 = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value);
    // -0 prints as 0
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}

fn quote_list(names: &[String]) -> String {
    names.iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split raw text on whitespace
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

/// Validate a token sequence without converting.
///
/// `None` stands for absent input and is treated like an empty command.
pub fn parse_command<S: AsRef<str>>(tokens: Option<&[S]>) -> Result<ConversionRequest<'_>, CommandError> {
    let tokens = match tokens {
        Some(t) if t.len() == 4 => t,
        _ => return Err(CommandError::Usage),
    };

    let keyword = tokens[2].as_ref();
    if keyword != KEYWORD {
        return Err(CommandError::WrongKeyword(keyword.to_string()));
    }

    let amount = tokens[0].as_ref();
    let input_value = match amount.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return Err(CommandError::InvalidNumber(amount.to_string())),
    };

    Ok(ConversionRequest {
        input_value,
        amount,
        from_unit: tokens[1].as_ref(),
        to_unit: tokens[3].as_ref(),
    })
}

/// Convert a validated request into the result sentence
pub fn execute(engine: &ConversionEngine, request: &ConversionRequest<'_>) -> Result<String, CommandError> {
    let converted = engine
        .convert(request.input_value, request.from_unit, request.to_unit)
        .map_err(|e| {
            debug!(code = e.code(), unit = e.unit(), "unit not registered");
            CommandError::InvalidUnit {
                unit: e.unit().to_string(),
                available: engine.available_units().into_iter().map(String::from).collect(),
            }
        })?;

    if !converted.is_finite() {
        return Err(CommandError::OutOfRange {
            amount: request.amount.to_string(),
            from_unit: request.from_unit.to_string(),
            to_unit: request.to_unit.to_string(),
        });
    }

    Ok(format!(
        "{} {} equals {} {}",
        request.amount, request.from_unit, format_length(converted), request.to_unit
    ))
}

/// Parse and convert; failures come back as their diagnostic text.
pub fn run_command<S: AsRef<str>>(engine: &ConversionEngine, tokens: Option<&[S]>) -> String {
    match parse_command(tokens).and_then(|request| execute(engine, &request)) {
        Ok(sentence) => sentence,
        Err(e) => e.to_string(),
    }
}
