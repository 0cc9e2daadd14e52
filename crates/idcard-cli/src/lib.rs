//! Console components for the resident ID card validator.

pub mod logging;
