//! # Casing Inference
//!
//! Decides which single [`CasingForm`] a string is written in.
//!
//! Short inputs are genuinely ambiguous (`"foo"` is simultaneously valid
//! snake, camel and kebab), so the classifier tests the five patterns in a
//! fixed priority order and returns the first match. That order —
//! snake > pascal > global > camel > kebab — is committed behavior callers
//! rely on, not an implementation accident.

use crate::form::CasingForm;

/// Classifier failure. Conversions never fail; only inference does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferError {
    /// The input string was empty.
    #[error("cannot infer the casing of an empty string")]
    EmptyInput,
    /// The input matched none of the five recognized patterns, e.g. it
    /// contains digits, mixed separators or non-ASCII letters.
    #[error("string {0:?} does not match any known casing")]
    UnknownCasing(String),
}

/// Tie-break order for inputs matching more than one pattern.
const PRIORITY: [CasingForm; 5] = [
    CasingForm::Snake,
    CasingForm::Pascal,
    CasingForm::Global,
    CasingForm::Camel,
    CasingForm::Kebab,
];

/// Infer the casing convention of an identifier-like string.
///
/// ```
/// use recase::{CasingForm, infer_casing};
///
/// assert_eq!(infer_casing("spawnPoint"), Ok(CasingForm::Camel));
/// assert_eq!(infer_casing("SPAWN_POINT"), Ok(CasingForm::Global));
///
/// // a single lowercase word is valid snake, camel and kebab; snake wins
/// assert_eq!(infer_casing("spawn"), Ok(CasingForm::Snake));
/// ```
pub fn infer_casing(s: &str) -> Result<CasingForm, InferError> {
    if s.is_empty() {
        return Err(InferError::EmptyInput);
    }
    PRIORITY
        .into_iter()
        .find(|form| form.matches(s))
        .ok_or_else(|| InferError::UnknownCasing(s.to_owned()))
}
