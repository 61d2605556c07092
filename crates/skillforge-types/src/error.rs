use thiserror::Error;

use crate::skill::MisconceptionId;

/// Errors related to skill aggregate operations.
///
/// Validation issues are deliberately NOT represented here: data that
/// parses but is incomplete comes back as issue strings from
/// `validation_issues`, never as an error.
#[derive(Debug, Error)]
pub enum SkillError {
    /// A required field was absent, mistyped, or unparseable during
    /// hydration from the persisted form.
    #[error("malformed {field}: {reason}")]
    MalformedInput { field: String, reason: String },

    /// A rubric operation was given a label outside the recognized
    /// difficulty scale. Raised before any state is mutated.
    #[error("unrecognized difficulty: '{0}'")]
    InvalidDifficulty(String),

    /// An appended misconception collides with an id already in use.
    #[error("misconception id {0} is already in use")]
    DuplicateMisconceptionId(MisconceptionId),
}

impl SkillError {
    /// Shorthand for a `MalformedInput` at the named field.
    pub fn malformed(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}
