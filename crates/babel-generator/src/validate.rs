//! Page validation.

use crate::alphabet::is_alphabet_symbol;
use crate::error::PageValidationError;
use crate::generator::PAGE_LENGTH;

/// Validates that `page` has exactly [`PAGE_LENGTH`] characters, all drawn
/// from the 29-symbol alphabet.
///
/// Returns `Ok(())` when valid, or the first [`PageValidationError`]
/// encountered otherwise. Length is checked before character content so a
/// truncated or padded page fails fast with a single, unambiguous reason.
pub fn validate_page(page: &str) -> Result<(), PageValidationError> {
    let chars: Vec<char> = page.chars().collect();
    if chars.len() != PAGE_LENGTH {
        return Err(PageValidationError::InvalidLength {
            expected: PAGE_LENGTH,
            actual: chars.len(),
        });
    }
    for (index, character) in chars.into_iter().enumerate() {
        if !is_alphabet_symbol(character) {
            return Err(PageValidationError::InvalidCharacter { index, character });
        }
    }
    Ok(())
}
