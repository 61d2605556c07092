//! A difficulty level paired with its mastery criteria.

use skillforge_types::skill::{RubricDict, SkillDifficulty};

/// Mastery criteria for one difficulty level of a skill.
#[derive(Debug, Clone, PartialEq)]
pub struct Rubric {
    difficulty: SkillDifficulty,
    explanation: String,
}

impl Rubric {
    pub fn new(difficulty: SkillDifficulty, explanation: impl Into<String>) -> Self {
        Self {
            difficulty,
            explanation: explanation.into(),
        }
    }

    pub fn from_backend_dict(dict: RubricDict) -> Self {
        Self {
            difficulty: dict.difficulty,
            explanation: dict.explanation,
        }
    }

    pub fn to_backend_dict(&self) -> RubricDict {
        RubricDict {
            difficulty: self.difficulty,
            explanation: self.explanation.clone(),
        }
    }

    pub fn difficulty(&self) -> SkillDifficulty {
        self.difficulty
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn set_explanation(&mut self, explanation: impl Into<String>) {
        self.explanation = explanation.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_dict_roundtrip() {
        let dict = RubricDict {
            difficulty: SkillDifficulty::Easy,
            explanation: "explanation".to_owned(),
        };
        let rubric = Rubric::from_backend_dict(dict.clone());
        assert_eq!(rubric.difficulty(), SkillDifficulty::Easy);
        assert_eq!(rubric.explanation(), "explanation");
        assert_eq!(rubric.to_backend_dict(), dict);
    }

    #[test]
    fn test_set_explanation() {
        let mut rubric = Rubric::new(SkillDifficulty::Hard, "old");
        rubric.set_explanation("new explanation");
        assert_eq!(rubric.explanation(), "new explanation");
        assert_eq!(rubric.difficulty(), SkillDifficulty::Hard);
    }
}
