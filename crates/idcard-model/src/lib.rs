pub mod error;
pub mod outcome;
pub mod summary;

pub use error::{CheckCodeError, ValidationError};
pub use outcome::{Gender, IdInfo, ValidationOutcome};
pub use summary::{BatchSummary, InvalidEntry, UNKNOWN, ValidEntry};

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(valid: bool, errors: Vec<ValidationError>) -> ValidationOutcome {
        ValidationOutcome {
            valid,
            id_number: "110101199003074899".to_string(),
            original_input: " 110101199003074899 ".to_string(),
            errors,
            info: IdInfo {
                area: Some("北京市".to_string()),
                birth_date: Some("1990-03-07".to_string()),
                age: Some(35),
                gender: Some(Gender::Male),
            },
        }
    }

    #[test]
    fn summary_partitions_outcomes() {
        let outcomes = vec![
            outcome(true, vec![]),
            outcome(false, vec![ValidationError::CheckCodeInvalid]),
        ];
        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.valid_count, 1);
        assert_eq!(summary.invalid_count, 1);
        assert!(summary.has_invalid());
        assert_eq!(summary.valid_ids[0].area, "北京市");
        assert_eq!(
            summary.invalid_ids[0].errors,
            vec![ValidationError::CheckCodeInvalid]
        );
    }

    #[test]
    fn validation_error_serializes_as_message() {
        let json = serde_json::to_string(&ValidationError::RegionUnknown).expect("serialize");
        assert_eq!(json, "\"地区代码不存在\"");
    }

    #[test]
    fn gender_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Gender::Male).expect("serialize"),
            "\"male\""
        );
        assert_eq!(Gender::from_sequence_digit(9), Gender::Male);
        assert_eq!(Gender::from_sequence_digit(4), Gender::Female);
    }

    #[test]
    fn outcome_serializes_with_partial_info() {
        let mut o = outcome(false, vec![ValidationError::RegionUnknown]);
        o.info.area = None;
        let json = serde_json::to_value(&o).expect("serialize");
        assert_eq!(json["valid"], false);
        assert!(json["info"].get("area").is_none());
        assert_eq!(json["info"]["birth_date"], "1990-03-07");
        assert_eq!(json["errors"][0], "地区代码不存在");
    }
}
