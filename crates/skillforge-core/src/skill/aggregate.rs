//! The skill aggregate root.
//!
//! Construction happens through `from_backend_dict` (hydration from the
//! persisted form) or `interstitial` (placeholder while real data loads).
//! Every mutation goes through the named operations here so the aggregate
//! invariants hold: misconception ids are unique and never reused, and
//! each difficulty has at most one rubric.

use std::collections::HashSet;
use std::str::FromStr;

use tracing::debug;

use skillforge_types::error::SkillError;
use skillforge_types::skill::{MisconceptionId, SkillDict, SkillDifficulty, SkillId};

use crate::skill::concept_card::ConceptCard;
use crate::skill::misconception::Misconception;
use crate::skill::rubric::Rubric;

/// Issue reported when the rubrics do not cover the full difficulty scale.
const RUBRIC_COVERAGE_ISSUE: &str =
    "All 3 difficulties (Easy, Medium and Hard) should be addressed in rubrics.";

/// Issue reported when the description is blank.
const EMPTY_DESCRIPTION_ISSUE: &str = "Skill description should not be empty.";

/// One unit of learnable material: metadata, misconceptions, rubrics, and
/// a concept card.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    /// `None` until the backend has persisted the skill.
    id: Option<SkillId>,
    description: String,
    /// Insertion order is significant and preserved across add/delete.
    misconceptions: Vec<Misconception>,
    /// At most one entry per difficulty, ordered by first assignment.
    rubrics: Vec<Rubric>,
    concept_card: ConceptCard,
    language_code: String,
    /// Revision counter managed by the persistence layer, opaque here.
    version: i32,
    /// Strictly greater than every misconception id ever assigned.
    next_misconception_id: MisconceptionId,
    superseding_skill_id: Option<SkillId>,
    all_questions_merged: bool,
    prerequisite_skill_ids: Vec<SkillId>,
}

impl Skill {
    /// Hydrate a skill from its persisted form.
    ///
    /// Nested entities are hydrated through their own factories. The
    /// persisted `next_misconception_id` is trusted as already-correct;
    /// duplicate misconception ids or duplicate rubric difficulties are
    /// rejected as malformed.
    pub fn from_backend_dict(dict: SkillDict) -> Result<Self, SkillError> {
        let next_misconception_id: MisconceptionId = dict
            .next_misconception_id
            .parse()
            .map_err(|e| SkillError::malformed("next_misconception_id", e))?;

        let misconceptions: Vec<Misconception> = dict
            .misconceptions
            .into_iter()
            .map(Misconception::from_backend_dict)
            .collect::<Result<_, _>>()?;
        let mut seen_ids = HashSet::new();
        for misconception in &misconceptions {
            if !seen_ids.insert(misconception.id()) {
                return Err(SkillError::malformed(
                    "misconceptions",
                    format!("duplicate id {}", misconception.id()),
                ));
            }
        }

        let rubrics: Vec<Rubric> = dict
            .rubrics
            .into_iter()
            .map(Rubric::from_backend_dict)
            .collect();
        let mut seen_difficulties = HashSet::new();
        for rubric in &rubrics {
            if !seen_difficulties.insert(rubric.difficulty()) {
                return Err(SkillError::malformed(
                    "rubrics",
                    format!("duplicate difficulty {}", rubric.difficulty()),
                ));
            }
        }

        debug!(
            skill_id = dict.id.as_ref().map(|id| id.as_str()).unwrap_or("<unsaved>"),
            misconceptions = misconceptions.len(),
            rubrics = rubrics.len(),
            "hydrated skill"
        );

        Ok(Self {
            id: dict.id,
            description: dict.description,
            misconceptions,
            rubrics,
            concept_card: ConceptCard::from_backend_dict(dict.skill_contents),
            language_code: dict.language_code,
            version: dict.version,
            next_misconception_id,
            superseding_skill_id: dict.superseding_skill_id,
            all_questions_merged: dict.all_questions_merged,
            prerequisite_skill_ids: dict.prerequisite_skill_ids,
        })
    }

    /// Hydrate from raw JSON, surfacing shape errors as malformed input.
    pub fn from_json(value: serde_json::Value) -> Result<Self, SkillError> {
        let dict: SkillDict =
            serde_json::from_value(value).map_err(|e| SkillError::malformed("skill", e))?;
        Self::from_backend_dict(dict)
    }

    /// Placeholder skill shown while real data loads.
    pub fn interstitial() -> Self {
        Self {
            id: None,
            description: "Skill description loading".to_owned(),
            misconceptions: Vec::new(),
            rubrics: Vec::new(),
            concept_card: ConceptCard::interstitial(),
            language_code: "en".to_owned(),
            version: 1,
            next_misconception_id: MisconceptionId(0),
            superseding_skill_id: None,
            all_questions_merged: false,
            prerequisite_skill_ids: Vec::new(),
        }
    }

    /// Serialize back to the persisted form. Exact inverse of
    /// `from_backend_dict`: without intervening mutation the output is
    /// deep-equal to the input.
    pub fn to_backend_dict(&self) -> SkillDict {
        SkillDict {
            id: self.id.clone(),
            description: self.description.clone(),
            misconceptions: self
                .misconceptions
                .iter()
                .map(Misconception::to_backend_dict)
                .collect(),
            rubrics: self.rubrics.iter().map(Rubric::to_backend_dict).collect(),
            skill_contents: self.concept_card.to_backend_dict(),
            language_code: self.language_code.clone(),
            version: self.version,
            next_misconception_id: self.next_misconception_id.to_string(),
            superseding_skill_id: self.superseding_skill_id.clone(),
            all_questions_merged: self.all_questions_merged,
            prerequisite_skill_ids: self.prerequisite_skill_ids.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn id(&self) -> Option<&SkillId> {
        self.id.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn misconceptions(&self) -> &[Misconception] {
        &self.misconceptions
    }

    pub fn rubrics(&self) -> &[Rubric] {
        &self.rubrics
    }

    pub fn concept_card(&self) -> &ConceptCard {
        &self.concept_card
    }

    /// Mutable access to the owned concept card. Card edits cannot break
    /// the aggregate invariants, which only govern misconceptions and
    /// rubrics.
    pub fn concept_card_mut(&mut self) -> &mut ConceptCard {
        &mut self.concept_card
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn superseding_skill_id(&self) -> Option<&SkillId> {
        self.superseding_skill_id.as_ref()
    }

    pub fn all_questions_merged(&self) -> bool {
        self.all_questions_merged
    }

    pub fn prerequisite_skill_ids(&self) -> &[SkillId] {
        &self.prerequisite_skill_ids
    }

    // -----------------------------------------------------------------------
    // Misconception management
    // -----------------------------------------------------------------------

    /// First misconception with the given id, if any. Linear scan.
    pub fn find_misconception_by_id(&self, id: MisconceptionId) -> Option<&Misconception> {
        self.misconceptions.iter().find(|m| m.id() == id)
    }

    /// Append a misconception whose id was obtained from
    /// `allocate_misconception_id`. Appending does not advance the
    /// counter. An id collision leaves the skill unchanged.
    pub fn append_misconception(&mut self, misconception: Misconception) -> Result<(), SkillError> {
        if self.find_misconception_by_id(misconception.id()).is_some() {
            return Err(SkillError::DuplicateMisconceptionId(misconception.id()));
        }
        self.misconceptions.push(misconception);
        Ok(())
    }

    /// Remove the misconception with the given id. A miss is a no-op: the
    /// entry may already have been deleted in another editor tab. The id
    /// counter never moves backwards.
    pub fn delete_misconception(&mut self, id: MisconceptionId) {
        let before = self.misconceptions.len();
        self.misconceptions.retain(|m| m.id() != id);
        if self.misconceptions.len() == before {
            debug!(%id, "delete_misconception: no entry with this id");
        }
    }

    /// The next id that `allocate_misconception_id` will hand out.
    pub fn next_misconception_id(&self) -> MisconceptionId {
        self.next_misconception_id
    }

    /// Consume the current counter value for a new misconception and
    /// advance it. Allocated ids are never reused, even after the
    /// misconception is deleted.
    pub fn allocate_misconception_id(&mut self) -> MisconceptionId {
        let id = self.next_misconception_id;
        self.next_misconception_id = id.next();
        id
    }

    // -----------------------------------------------------------------------
    // Rubric management
    // -----------------------------------------------------------------------

    /// Upsert the rubric for a difficulty given its label.
    ///
    /// An unrecognized label fails before any mutation. An existing rubric
    /// keeps its position; a new difficulty is appended.
    pub fn update_rubric_for_difficulty(
        &mut self,
        difficulty: &str,
        explanation: impl Into<String>,
    ) -> Result<(), SkillError> {
        let difficulty = SkillDifficulty::from_str(difficulty)?;
        self.upsert_rubric(difficulty, explanation);
        Ok(())
    }

    /// Upsert the rubric for an already-typed difficulty.
    pub fn upsert_rubric(&mut self, difficulty: SkillDifficulty, explanation: impl Into<String>) {
        match self
            .rubrics
            .iter_mut()
            .find(|r| r.difficulty() == difficulty)
        {
            Some(rubric) => rubric.set_explanation(explanation),
            None => self.rubrics.push(Rubric::new(difficulty, explanation)),
        }
    }

    // -----------------------------------------------------------------------
    // Editor operations
    // -----------------------------------------------------------------------

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_language_code(&mut self, language_code: impl Into<String>) {
        self.language_code = language_code.into();
    }

    /// Record the skill this one was merged into.
    pub fn set_superseding_skill_id(&mut self, id: SkillId) {
        self.superseding_skill_id = Some(id);
    }

    /// Record that every question tagged to this skill has been migrated
    /// to the superseding skill.
    pub fn mark_all_questions_merged(&mut self) {
        self.all_questions_merged = true;
    }

    /// Add a prerequisite. Already-present ids are left alone.
    pub fn add_prerequisite_skill_id(&mut self, id: SkillId) {
        if !self.prerequisite_skill_ids.contains(&id) {
            self.prerequisite_skill_ids.push(id);
        }
    }

    /// Remove a prerequisite. A miss is a no-op.
    pub fn delete_prerequisite_skill_id(&mut self, id: &SkillId) {
        self.prerequisite_skill_ids.retain(|existing| existing != id);
    }

    /// Replace this skill's entire state with another's, in place. Used
    /// when real data arrives for an interstitial instance handed out to
    /// the presentation layer.
    pub fn copy_from(&mut self, other: &Skill) {
        *self = other.clone();
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Content-quality issues for the current state, in reporting order.
    ///
    /// An empty list means the skill is valid. Issues are data, not
    /// errors: concept-card issues come first, then rubric coverage, then
    /// the description check.
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = self.concept_card.validation_issues();

        let all_difficulties_addressed = SkillDifficulty::ALL
            .iter()
            .all(|d| self.rubrics.iter().any(|r| r.difficulty() == *d));
        if !all_difficulties_addressed {
            issues.push(RUBRIC_COVERAGE_ISSUE.to_owned());
        }

        if self.description.trim().is_empty() {
            issues.push(EMPTY_DESCRIPTION_ISSUE.to_owned());
        }

        issues
    }
}
