use serde::Serialize;

use crate::error::ValidationError;
use crate::outcome::{Gender, ValidationOutcome};

/// Fallback shown when an extracted field is unavailable.
pub const UNKNOWN: &str = "未知";

/// One accepted ID number with its extracted fields.
#[derive(Debug, Clone, Serialize)]
pub struct ValidEntry {
    pub original: String,
    pub processed: String,
    pub area: String,
    pub birth_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// One rejected ID number with its findings.
#[derive(Debug, Clone, Serialize)]
pub struct InvalidEntry {
    pub original: String,
    pub processed: String,
    pub errors: Vec<ValidationError>,
}

/// Batch result: outcomes partitioned into valid/invalid buckets.
///
/// This is the response body of the web endpoint and the data behind the
/// CLI summary table. Bucket order follows input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub valid_ids: Vec<ValidEntry>,
    pub invalid_ids: Vec<InvalidEntry>,
    pub total: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[ValidationOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            if outcome.valid {
                summary.valid_ids.push(ValidEntry {
                    original: outcome.original_input.clone(),
                    processed: outcome.id_number.clone(),
                    area: outcome.info.area.clone().unwrap_or_else(|| UNKNOWN.into()),
                    birth_date: outcome
                        .info
                        .birth_date
                        .clone()
                        .unwrap_or_else(|| UNKNOWN.into()),
                    age: outcome.info.age,
                    gender: outcome.info.gender,
                });
            } else {
                summary.invalid_ids.push(InvalidEntry {
                    original: outcome.original_input.clone(),
                    processed: outcome.id_number.clone(),
                    errors: outcome.errors.clone(),
                });
            }
        }
        summary.total = outcomes.len();
        summary.valid_count = summary.valid_ids.len();
        summary.invalid_count = summary.invalid_ids.len();
        summary
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid_count > 0
    }
}
