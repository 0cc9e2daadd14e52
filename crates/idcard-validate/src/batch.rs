//! Line-oriented batch validation over free-form text.
//!
//! Both presentation surfaces (console and HTTP) accept a block of text,
//! one ID number per line. Lines are trimmed, blank lines dropped, and the
//! remaining lines validated in input order.

use idcard_model::{BatchSummary, ValidationOutcome};

use crate::validator::validate;

/// Split a text block into trimmed, non-blank lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Validate every line of a text block, preserving input order.
pub fn validate_lines(text: &str) -> Vec<ValidationOutcome> {
    split_lines(text).map(validate).collect()
}

/// Validate a text block and partition the outcomes into buckets.
pub fn validate_text(text: &str) -> BatchSummary {
    BatchSummary::from_outcomes(&validate_lines(text))
}
