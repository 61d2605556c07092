//! Skill domain types.
//!
//! Defines the persisted (backend) dictionary shapes for the skill
//! aggregate, the three-level difficulty scale, and the id newtypes.
//! Field names on the dict types are contract, not cosmetic: they are
//! what the storage layer reads and writes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::SkillError;

// ---------------------------------------------------------------------------
// Id newtypes
// ---------------------------------------------------------------------------

/// Backend-assigned identifier for a skill. Opaque to this core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct SkillId(pub String);

impl SkillId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SkillId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SkillId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Identifier of a misconception within one skill.
///
/// Persisted as a decimal string (`"6"`), held in memory as the integer it
/// encodes. Normalizing to one canonical representation means lookups and
/// deletions never care whether a caller started from the string or the
/// number. Ids are allocated monotonically per skill and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MisconceptionId(pub u64);

impl MisconceptionId {
    /// The id that follows this one in allocation order.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MisconceptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MisconceptionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for MisconceptionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ---------------------------------------------------------------------------
// Difficulty scale
// ---------------------------------------------------------------------------

/// The three recognized rubric difficulty levels, in canonical order.
///
/// The canonical labels (`Easy`, `Medium`, `Hard`) are part of the persisted
/// contract and of user-facing validation messages, so parsing is
/// exact-match -- no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SkillDifficulty {
    Easy,
    Medium,
    Hard,
}

impl SkillDifficulty {
    /// All recognized difficulties in canonical order.
    pub const ALL: [SkillDifficulty; 3] = [
        SkillDifficulty::Easy,
        SkillDifficulty::Medium,
        SkillDifficulty::Hard,
    ];

    /// The canonical label for this difficulty.
    pub fn label(self) -> &'static str {
        match self {
            SkillDifficulty::Easy => "Easy",
            SkillDifficulty::Medium => "Medium",
            SkillDifficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for SkillDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SkillDifficulty {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(SkillDifficulty::Easy),
            "Medium" => Ok(SkillDifficulty::Medium),
            "Hard" => Ok(SkillDifficulty::Hard),
            other => Err(SkillError::InvalidDifficulty(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// Persisted dictionary shapes
// ---------------------------------------------------------------------------

/// Persisted form of a skill, as stored and transported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SkillDict {
    /// `None` for a skill that has not been persisted yet.
    pub id: Option<SkillId>,
    pub description: String,
    pub misconceptions: Vec<MisconceptionDict>,
    pub rubrics: Vec<RubricDict>,
    pub skill_contents: ConceptCardDict,
    pub language_code: String,
    pub version: i32,
    /// Decimal string encoding the next misconception id to allocate.
    pub next_misconception_id: String,
    /// The skill this one was merged into, if any.
    pub superseding_skill_id: Option<SkillId>,
    pub all_questions_merged: bool,
    pub prerequisite_skill_ids: Vec<SkillId>,
}

/// Persisted form of a misconception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MisconceptionDict {
    /// Decimal string id, unique within the owning skill.
    pub id: String,
    pub name: String,
    pub notes: String,
    pub feedback: String,
    pub must_be_addressed: bool,
}

/// Persisted form of a rubric: one difficulty paired with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RubricDict {
    pub difficulty: SkillDifficulty,
    pub explanation: String,
}

/// Persisted form of a concept card (the `skill_contents` field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConceptCardDict {
    pub explanation: SubtitledHtmlDict,
    pub worked_examples: Vec<SubtitledHtmlDict>,
    pub recorded_voiceovers: RecordedVoiceoversDict,
}

/// Persisted form of an HTML fragment with its voiceover content id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SubtitledHtmlDict {
    pub html: String,
    pub content_id: String,
}

/// Persisted voiceover tables: content id -> language code -> voiceover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecordedVoiceoversDict {
    pub voiceovers_mapping: BTreeMap<String, BTreeMap<String, VoiceoverDict>>,
}

/// Persisted form of one recorded voiceover file reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VoiceoverDict {
    pub filename: String,
    pub file_size_bytes: u64,
    pub needs_update: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_difficulty_label_roundtrip() {
        for difficulty in SkillDifficulty::ALL {
            let label = difficulty.to_string();
            let parsed: SkillDifficulty = label.parse().unwrap();
            assert_eq!(difficulty, parsed);
        }
    }

    #[test]
    fn test_difficulty_rejects_unrecognized_label() {
        let err = "invalid difficulty".parse::<SkillDifficulty>().unwrap_err();
        assert!(err.to_string().contains("invalid difficulty"));
    }

    #[test]
    fn test_difficulty_parsing_is_case_sensitive() {
        assert!("easy".parse::<SkillDifficulty>().is_err());
        assert!("EASY".parse::<SkillDifficulty>().is_err());
    }

    #[test]
    fn test_difficulty_canonical_order() {
        let labels: Vec<&str> = SkillDifficulty::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, ["Easy", "Medium", "Hard"]);
    }

    #[test]
    fn test_misconception_id_display_parse() {
        let id = MisconceptionId(6);
        let s = id.to_string();
        assert_eq!(s, "6");
        let parsed: MisconceptionId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_misconception_id_rejects_garbage() {
        assert!("not-a-number".parse::<MisconceptionId>().is_err());
        assert!("-1".parse::<MisconceptionId>().is_err());
    }

    #[test]
    fn test_misconception_id_next() {
        assert_eq!(MisconceptionId(6).next(), MisconceptionId(7));
    }

    #[test]
    fn test_skill_id_serializes_as_plain_string() {
        let id = SkillId::from("skill_1");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("skill_1"));
    }

    #[test]
    fn test_skill_dict_serde_fidelity() {
        let value = json!({
            "id": "1",
            "description": "test description",
            "misconceptions": [{
                "id": "2",
                "name": "test name",
                "notes": "test notes",
                "feedback": "test feedback",
                "must_be_addressed": true
            }],
            "rubrics": [{
                "difficulty": "Easy",
                "explanation": "explanation"
            }],
            "skill_contents": {
                "explanation": {
                    "html": "test explanation",
                    "content_id": "explanation"
                },
                "worked_examples": [],
                "recorded_voiceovers": {
                    "voiceovers_mapping": {
                        "explanation": {}
                    }
                }
            },
            "language_code": "en",
            "version": 3,
            "next_misconception_id": "6",
            "superseding_skill_id": null,
            "all_questions_merged": false,
            "prerequisite_skill_ids": ["skill_1"]
        });

        let dict: SkillDict = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(dict.id, Some(SkillId::from("1")));
        assert_eq!(dict.rubrics[0].difficulty, SkillDifficulty::Easy);
        assert_eq!(serde_json::to_value(&dict).unwrap(), value);
    }

    #[test]
    fn test_skill_dict_rejects_missing_field() {
        let value = json!({ "id": "1", "description": "no other fields" });
        assert!(serde_json::from_value::<SkillDict>(value).is_err());
    }

    #[test]
    fn test_voiceover_dict_serde_fidelity() {
        let value = json!({
            "filename": "explanation-en.mp3",
            "file_size_bytes": 73412,
            "needs_update": false
        });
        let dict: VoiceoverDict = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&dict).unwrap(), value);
    }
}
