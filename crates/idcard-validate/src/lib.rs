//! Resident identity card number validation.
//!
//! Validates 18-character resident ID numbers and extracts the embedded
//! demographic fields (region, birth date, age, sex). All operations are
//! pure functions over compile-time lookup tables; there is no shared
//! mutable state, so calls are freely concurrent.
//!
//! The two entry points mirror the two trust levels:
//!
//! - [`validate`] takes arbitrary user input and always returns a complete
//!   [`ValidationOutcome`](idcard_model::ValidationOutcome); malformed
//!   input is a reported finding, never an error return.
//! - [`generate_check_code`] takes a trusted 17-digit prefix and fails
//!   with [`CheckCodeError`](idcard_model::CheckCodeError) on contract
//!   violations.

pub mod batch;
pub mod checksum;
pub mod date;
pub mod region;
pub mod validator;

pub use batch::{validate_lines, validate_text};
pub use checksum::{CHECK_CODES, WEIGHTS, generate_check_code, verify_check_code};
pub use region::{AREA_CODES, region_name};
pub use validator::{normalize, validate, validate_on};
