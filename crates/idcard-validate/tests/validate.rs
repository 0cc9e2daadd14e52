//! End-to-end tests for the validation routine.

use chrono::NaiveDate;

use idcard_model::{Gender, ValidationError};
use idcard_validate::{generate_check_code, normalize, validate, validate_on};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).expect("valid test date")
}

#[test]
fn known_good_id_passes_with_full_info() {
    let outcome = validate_on("110101199003074899", today());
    assert!(outcome.valid);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.id_number, "110101199003074899");
    assert_eq!(outcome.info.area.as_deref(), Some("北京市"));
    assert_eq!(outcome.info.birth_date.as_deref(), Some("1990-03-07"));
    assert_eq!(outcome.info.age, Some(36));
    assert_eq!(outcome.info.gender, Some(Gender::Male));
}

#[test]
fn checksum_mismatch_is_the_sole_error() {
    let outcome = validate_on("110101199003074897", today());
    assert!(!outcome.valid);
    assert_eq!(outcome.errors, vec![ValidationError::CheckCodeInvalid]);
    // Partial info survives the failure.
    assert_eq!(outcome.info.area.as_deref(), Some("北京市"));
    assert_eq!(outcome.info.birth_date.as_deref(), Some("1990-03-07"));
    assert_eq!(outcome.info.gender, Some(Gender::Male));
}

#[test]
fn unknown_region_with_good_date_and_checksum() {
    // Same digits as the known-good ID but with an unassigned area code,
    // re-checksummed so the region finding is the only one.
    let prefix = "99010119900307489";
    let check = generate_check_code(prefix).expect("digit prefix");
    let outcome = validate_on(&format!("{prefix}{check}"), today());
    assert!(!outcome.valid);
    assert_eq!(outcome.errors, vec![ValidationError::RegionUnknown]);
    assert_eq!(outcome.info.area, None);
    assert_eq!(outcome.info.birth_date.as_deref(), Some("1990-03-07"));
    assert_eq!(outcome.info.age, Some(36));
    assert_eq!(outcome.info.gender, Some(Gender::Male));
}

#[test]
fn findings_accumulate_in_check_order() {
    let outcome = validate_on("99010119900307489X", today());
    assert!(!outcome.valid);
    assert_eq!(
        outcome.errors,
        vec![
            ValidationError::RegionUnknown,
            ValidationError::CheckCodeInvalid,
        ]
    );
    assert_eq!(outcome.info.gender, Some(Gender::Male));
}

#[test]
fn impossible_calendar_date_is_reported() {
    // February 30th does not exist in any year.
    let outcome = validate_on("110101199002304896", today());
    assert!(!outcome.valid);
    assert!(outcome.has_error(ValidationError::BirthDateInvalid));
    assert_eq!(outcome.info.birth_date, None);
    assert_eq!(outcome.info.age, None);
}

#[test]
fn year_1900_is_accepted() {
    let prefix = "11010119000101001";
    let check = generate_check_code(prefix).expect("digit prefix");
    let outcome = validate_on(&format!("{prefix}{check}"), today());
    assert!(outcome.valid, "errors: {:?}", outcome.errors);
    assert_eq!(outcome.info.birth_date.as_deref(), Some("1900-01-01"));
}

#[test]
fn future_birth_year_is_rejected() {
    let prefix = "11010120270101001";
    let check = generate_check_code(prefix).expect("digit prefix");
    let outcome = validate_on(&format!("{prefix}{check}"), today());
    assert!(!outcome.valid);
    assert_eq!(outcome.errors, vec![ValidationError::BirthDateInvalid]);
}

#[test]
fn whitespace_placement_does_not_change_the_verdict() {
    let spaced = [
        " 110101199003074899 ",
        "1101 0119 9003 0748 99",
        "1 1 0 1 0 1 1 9 9 0 0 3 0 7 4 8 9 9",
    ];
    let reference = validate_on("110101199003074899", today());
    for input in spaced {
        let outcome = validate_on(input, today());
        assert_eq!(outcome.valid, reference.valid, "input {input:?}");
        assert_eq!(outcome.errors, reference.errors);
        assert_eq!(outcome.info, reference.info);
        assert_eq!(outcome.id_number, reference.id_number);
        assert_eq!(outcome.original_input, input);
    }
}

#[test]
fn normalization_is_total_and_idempotent() {
    let inputs = ["", "   ", "abc", " 1101 0119 9003 0748 99 ", "x y z"];
    for input in inputs {
        let outcome = validate(input);
        assert!(!outcome.id_number.contains(' '), "input {input:?}");
        assert_eq!(normalize(&outcome.id_number), outcome.id_number);
    }
}

#[test]
fn generated_check_codes_round_trip() {
    let prefixes = [
        "11010119900307489",
        "44030119991201000",
        "31010120000229000",
        "99010119900307489",
        "11010119000101001",
    ];
    for prefix in prefixes {
        let check = generate_check_code(prefix).expect("digit prefix");
        let outcome = validate_on(&format!("{prefix}{check}"), today());
        assert!(
            !outcome.has_error(ValidationError::CheckCodeInvalid),
            "prefix {prefix}"
        );
    }
}

#[test]
fn lowercase_check_character_is_accepted() {
    let prefix = "11010119900307483";
    assert_eq!(generate_check_code(prefix), Ok('X'));
    assert!(validate_on("11010119900307483x", today()).valid);
}

#[test]
fn short_long_and_empty_inputs_fail_the_format_gate() {
    for input in ["", "11010119900307489", "1101011990030748999", "abc"] {
        let outcome = validate_on(input, today());
        assert!(!outcome.valid);
        assert_eq!(outcome.errors, vec![ValidationError::FormatInvalid]);
        assert_eq!(outcome.info, idcard_model::IdInfo::default());
    }
}

#[test]
fn even_sequence_digit_is_female() {
    let prefix = "11010119900307482";
    let check = generate_check_code(prefix).expect("digit prefix");
    let outcome = validate_on(&format!("{prefix}{check}"), today());
    assert_eq!(outcome.info.gender, Some(Gender::Female));
}
