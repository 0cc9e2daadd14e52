use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Sex derived from the parity of the sequence digit (index 16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Odd sequence digits encode male, even ones female.
    pub fn from_sequence_digit(digit: u32) -> Self {
        if digit % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Male => "男",
            Self::Female => "女",
        })
    }
}

/// Demographic fields extracted from an ID number.
///
/// Fields are populated independently of the overall verdict: a number
/// failing the checksum still carries its region and birth date when
/// those checks passed, and gender is derived whenever the string is
/// structurally sound. Callers rely on this partial population.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdInfo {
    /// Region display name from the area-code table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Birth date formatted as `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Full years since the birth date, birthday-aware.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// Complete result of validating one raw input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    /// The space-stripped form the checks ran against.
    pub id_number: String,
    /// The input exactly as the caller supplied it.
    pub original_input: String,
    /// Findings in check order: format, region, date, checksum.
    pub errors: Vec<ValidationError>,
    pub info: IdInfo,
}

impl ValidationOutcome {
    pub fn has_error(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }
}
