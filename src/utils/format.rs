//! Comma-separated number lists, as exchanged with the host search tool.

use crate::error::{ForecastError, Result};

/// Parse a comma-separated list of numbers.
///
/// Whitespace around tokens is ignored. An empty or malformed token is an
/// error carrying its zero-based position.
///
/// # Example
///
/// ```
/// use replay_forecast::utils::parse_series;
///
/// assert_eq!(parse_series("1, 2.5,-3").unwrap(), vec![1.0, 2.5, -3.0]);
/// assert!(parse_series("1,,2").is_err());
/// ```
pub fn parse_series(input: &str) -> Result<Vec<f64>> {
    input
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|_| ForecastError::ParseError {
                    position,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Format predictions as comma-separated fixed six-digit decimals.
///
/// No leading separator and no trailing newline.
pub fn format_series(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<_>>()
        .join(",")
}
