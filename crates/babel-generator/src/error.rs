//! Error type for page validation.
//!
//! The generator itself is total and never fails (see [`crate::address_to_page`]);
//! the only fallible operation in this crate is [`crate::validate_page`], whose
//! failure reasons are typed here instead of returned as free-form strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a candidate page failed [`crate::validate_page`].
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageValidationError {
    /// The page did not contain exactly [`crate::PAGE_LENGTH`] characters.
    #[error("page length {actual} does not match expected {expected}")]
    InvalidLength { expected: usize, actual: usize },
    /// A character outside the 29-symbol alphabet was found at `index`.
    #[error("invalid character {character:?} at position {index}")]
    InvalidCharacter { index: usize, character: char },
}
