//! A recorded incorrect-understanding pattern associated with a skill.

use skillforge_types::error::SkillError;
use skillforge_types::skill::{MisconceptionDict, MisconceptionId};

/// One misconception learners commonly hold about a skill.
///
/// The id is allocated by the owning skill and never changes; everything
/// else is editable by authors.
#[derive(Debug, Clone, PartialEq)]
pub struct Misconception {
    id: MisconceptionId,
    name: String,
    notes: String,
    feedback: String,
    must_be_addressed: bool,
}

impl Misconception {
    pub fn new(
        id: MisconceptionId,
        name: impl Into<String>,
        notes: impl Into<String>,
        feedback: impl Into<String>,
        must_be_addressed: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            notes: notes.into(),
            feedback: feedback.into(),
            must_be_addressed,
        }
    }

    /// Hydrate from the persisted form. The persisted id is a decimal
    /// string; anything else is malformed.
    pub fn from_backend_dict(dict: MisconceptionDict) -> Result<Self, SkillError> {
        let id: MisconceptionId = dict
            .id
            .parse()
            .map_err(|e| SkillError::malformed("misconception id", e))?;
        Ok(Self {
            id,
            name: dict.name,
            notes: dict.notes,
            feedback: dict.feedback,
            must_be_addressed: dict.must_be_addressed,
        })
    }

    pub fn to_backend_dict(&self) -> MisconceptionDict {
        MisconceptionDict {
            id: self.id.to_string(),
            name: self.name.clone(),
            notes: self.notes.clone(),
            feedback: self.feedback.clone(),
            must_be_addressed: self.must_be_addressed,
        }
    }

    pub fn id(&self) -> MisconceptionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Whether every answer group of a question tagged to the skill must
    /// address this misconception.
    pub fn must_be_addressed(&self) -> bool {
        self.must_be_addressed
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = feedback.into();
    }
}
