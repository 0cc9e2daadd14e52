use serde::{Serialize, Serializer};
use thiserror::Error;

/// A single validation finding for one ID number.
///
/// Findings are data, not faults: `validate` accumulates them in the
/// outcome's error list and never panics on malformed user input. The
/// display strings are the user-facing messages shown by every
/// presentation layer, so they match the region table's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Length or character-set mismatch. Terminal: no other check runs,
    /// since every later check indexes fixed positions in the string.
    FormatInvalid,
    /// Area code (first two digits) absent from the region table.
    RegionUnknown,
    /// Birth date unparsable, outside 1900..=current year, not a real
    /// calendar date, or in the future.
    BirthDateInvalid,
    /// Check character does not match the MOD 11-2 checksum.
    CheckCodeInvalid,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::FormatInvalid => "身份证号码格式不正确",
            Self::RegionUnknown => "地区代码不存在",
            Self::BirthDateInvalid => "出生日期不合法",
            Self::CheckCodeInvalid => "校验码不正确",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Contract violation in check-code generation.
///
/// Unlike [`ValidationError`], this is a caller fault: the generation path
/// assumes a trusted, pre-validated 17-digit prefix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckCodeError {
    #[error("check code prefix must be 17 characters, got {0}")]
    WrongLength(usize),
    #[error("check code prefix must be all digits, found {0:?}")]
    NonDigit(char),
}
