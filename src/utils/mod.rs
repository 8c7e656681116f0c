//! Utility functions shared by the predictors and the command line.

pub mod format;

pub use format::{format_series, parse_series};
