//! Input validation utilities.
//!
//! This module contains functions for validating user inputs to ensure they meet
//! safety and correctness requirements before being used in operations.

use crate::constants::MAX_DRUG_NAME_LEN;
use crate::{AnalysisError, CoreResult};

/// Validates that a drug name is well formed before any lookup runs.
///
/// Registry membership is checked separately; this function applies the
/// structural guardrails shared by every entry point:
/// - Rejects empty or whitespace-only strings
/// - Bounds the length to avoid pathological inputs
/// - Restricts characters to the conservative set drug names actually use
///
/// # Arguments
///
/// * `name` - The drug name to validate.
///
/// # Errors
///
/// Returns an `AnalysisError::InvalidName` if the name is malformed.
pub fn validate_drug_name_well_formed(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(AnalysisError::InvalidName(
            "drug name cannot be empty".into(),
        ));
    }

    if name.trim().chars().count() > MAX_DRUG_NAME_LEN {
        return Err(AnalysisError::InvalidName(format!(
            "drug name exceeds maximum length of {} characters",
            MAX_DRUG_NAME_LEN
        )));
    }

    if !name.is_ascii() {
        return Err(AnalysisError::InvalidName(
            "drug name must contain only ASCII characters".into(),
        ));
    }

    let ok = name
        .bytes()
        .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b' ' | b'.' | b'-'));

    if !ok {
        return Err(AnalysisError::InvalidName(
            "drug name contains invalid characters (only alphanumeric, ' ', '.', '-' allowed)"
                .into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_suffixed_names() {
        assert!(validate_drug_name_well_formed("Metformin").is_ok());
        assert!(validate_drug_name_well_formed("Penpulimab-kcqx").is_ok());
        assert!(validate_drug_name_well_formed("flotufolastat F 18").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(validate_drug_name_well_formed("").is_err());
        assert!(validate_drug_name_well_formed("   ").is_err());
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "a".repeat(MAX_DRUG_NAME_LEN + 1);
        assert!(validate_drug_name_well_formed(&long).is_err());
        let at_limit = "a".repeat(MAX_DRUG_NAME_LEN);
        assert!(validate_drug_name_well_formed(&at_limit).is_ok());
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(validate_drug_name_well_formed("aspirin; drop tables").is_err());
        assert!(validate_drug_name_well_formed("drug/name").is_err());
        assert!(validate_drug_name_well_formed("ibuproféne").is_err());
    }
}
