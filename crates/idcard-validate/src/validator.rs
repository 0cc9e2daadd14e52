//! The validation routine: normalization, structural gate, and the
//! region/date/checksum checks with field extraction.

use chrono::{Local, NaiveDate};

use idcard_model::{Gender, IdInfo, ValidationError, ValidationOutcome};

use crate::checksum::verify_check_code;
use crate::date::{age_on, parse_birth_date};
use crate::region::region_name;

/// Remove every ASCII space from the input, interior ones included.
///
/// Idempotent; the result may still be malformed and is judged by the
/// format gate downstream.
pub fn normalize(raw_input: &str) -> String {
    raw_input.chars().filter(|c| *c != ' ').collect()
}

/// Structural gate: 18 characters, 17 digits, then a digit or `X`/`x`.
fn is_well_formed(id_number: &str) -> bool {
    let bytes = id_number.as_bytes();
    if id_number.chars().count() != 18 || bytes.len() != 18 {
        return false;
    }
    bytes[..17].iter().all(u8::is_ascii_digit)
        && (bytes[17].is_ascii_digit() || bytes[17].to_ascii_uppercase() == b'X')
}

/// Validate one raw input against the current local date.
///
/// Never fails on malformed user input; findings are accumulated in the
/// returned outcome.
pub fn validate(raw_input: &str) -> ValidationOutcome {
    validate_on(raw_input, Local::now().date_naive())
}

/// Validate against an explicit "today", for deterministic callers.
///
/// The date check's year bound, the future-date rule, and the derived age
/// all key off `today`. Checks after the format gate do not short-circuit
/// each other: a bad region still gets its birth date and age extracted,
/// and gender is derived whenever the gate passes.
pub fn validate_on(raw_input: &str, today: NaiveDate) -> ValidationOutcome {
    let id_number = normalize(raw_input);
    let mut outcome = ValidationOutcome {
        valid: false,
        id_number,
        original_input: raw_input.to_string(),
        errors: Vec::new(),
        info: IdInfo::default(),
    };

    // Hard prerequisite: every check below indexes fixed positions.
    if !is_well_formed(&outcome.id_number) {
        outcome.errors.push(ValidationError::FormatInvalid);
        return outcome;
    }
    let id_number = outcome.id_number.as_str();

    match region_name(&id_number[..2]) {
        Some(name) => outcome.info.area = Some(name.to_string()),
        None => outcome.errors.push(ValidationError::RegionUnknown),
    }

    match parse_birth_date(&id_number[6..14], today) {
        Some(birth_date) => {
            outcome.info.birth_date = Some(birth_date.format("%Y-%m-%d").to_string());
            outcome.info.age = Some(age_on(birth_date, today));
        }
        None => outcome.errors.push(ValidationError::BirthDateInvalid),
    }

    if !verify_check_code(id_number) {
        outcome.errors.push(ValidationError::CheckCodeInvalid);
    }

    let sequence_digit = u32::from(id_number.as_bytes()[16] - b'0');
    outcome.info.gender = Some(Gender::from_sequence_digit(sequence_digit));

    outcome.valid = outcome.errors.is_empty();
    outcome
}
