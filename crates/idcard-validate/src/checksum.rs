//! MOD 11-2 check character computation (GB 11643, after ISO 7064).

use idcard_model::CheckCodeError;

/// Per-position weights for the first 17 digits.
pub const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check characters indexed by `weighted_sum % 11`.
///
/// The sequence is fixed by the standard and wraps non-monotonically;
/// it is not `11 - remainder` at the boundaries.
pub const CHECK_CODES: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Compute the check character for a 17-digit prefix.
///
/// This is the trusted-caller path for constructing identifiers; a prefix
/// of the wrong length or with a non-digit is a contract violation.
pub fn generate_check_code(prefix: &str) -> Result<char, CheckCodeError> {
    let length = prefix.chars().count();
    if length != 17 {
        return Err(CheckCodeError::WrongLength(length));
    }
    let mut total = 0u32;
    for (ch, weight) in prefix.chars().zip(WEIGHTS) {
        let digit = ch.to_digit(10).ok_or(CheckCodeError::NonDigit(ch))?;
        total += digit * weight;
    }
    Ok(CHECK_CODES[(total % 11) as usize])
}

/// Whether the 18th character of an ID matches its checksum.
///
/// Strings that are not 18 ASCII characters simply fail. Comparison
/// against the check character is case-insensitive (`x` verifies as `X`).
pub fn verify_check_code(id_number: &str) -> bool {
    let bytes = id_number.as_bytes();
    if bytes.len() != 18 || !id_number.is_ascii() {
        return false;
    }
    let Ok(expected) = generate_check_code(&id_number[..17]) else {
        return false;
    };
    bytes[17].to_ascii_uppercase() == expected as u8
}
