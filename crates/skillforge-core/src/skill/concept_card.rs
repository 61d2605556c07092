//! The concept card: the review material that teaches a skill.
//!
//! One explanation, zero or more worked examples, and the voiceover
//! tables covering their content ids. The card contributes its own checks
//! to the owning skill's validation.

use skillforge_types::skill::ConceptCardDict;

use crate::skill::subtitled_html::SubtitledHtml;
use crate::skill::voiceovers::RecordedVoiceovers;

/// Content id of the explanation fragment.
const EXPLANATION_CONTENT_ID: &str = "explanation";

/// Issue reported when the explanation carries no content.
const MISSING_REVIEW_MATERIAL_ISSUE: &str =
    "There should be review material in the concept card.";

/// Explanatory content teaching a skill.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptCard {
    explanation: SubtitledHtml,
    worked_examples: Vec<SubtitledHtml>,
    recorded_voiceovers: RecordedVoiceovers,
}

impl ConceptCard {
    pub fn new(
        explanation: SubtitledHtml,
        worked_examples: Vec<SubtitledHtml>,
        recorded_voiceovers: RecordedVoiceovers,
    ) -> Self {
        Self {
            explanation,
            worked_examples,
            recorded_voiceovers,
        }
    }

    /// Placeholder card shown while real data loads.
    pub fn interstitial() -> Self {
        Self {
            explanation: SubtitledHtml::new("Loading review material", EXPLANATION_CONTENT_ID),
            worked_examples: Vec::new(),
            recorded_voiceovers: RecordedVoiceovers::empty_for_content_ids([
                EXPLANATION_CONTENT_ID,
            ]),
        }
    }

    pub fn from_backend_dict(dict: ConceptCardDict) -> Self {
        Self {
            explanation: SubtitledHtml::from_backend_dict(dict.explanation),
            worked_examples: dict
                .worked_examples
                .into_iter()
                .map(SubtitledHtml::from_backend_dict)
                .collect(),
            recorded_voiceovers: RecordedVoiceovers::from_backend_dict(dict.recorded_voiceovers),
        }
    }

    pub fn to_backend_dict(&self) -> ConceptCardDict {
        ConceptCardDict {
            explanation: self.explanation.to_backend_dict(),
            worked_examples: self
                .worked_examples
                .iter()
                .map(SubtitledHtml::to_backend_dict)
                .collect(),
            recorded_voiceovers: self.recorded_voiceovers.to_backend_dict(),
        }
    }

    pub fn explanation(&self) -> &SubtitledHtml {
        &self.explanation
    }

    pub fn worked_examples(&self) -> &[SubtitledHtml] {
        &self.worked_examples
    }

    pub fn recorded_voiceovers(&self) -> &RecordedVoiceovers {
        &self.recorded_voiceovers
    }

    pub fn set_explanation(&mut self, explanation: SubtitledHtml) {
        self.recorded_voiceovers
            .add_content_id(explanation.content_id());
        self.explanation = explanation;
    }

    /// Replace the worked examples, re-seeding the voiceover table for the
    /// new content ids. Recordings for the explanation are kept; recordings
    /// for dropped worked examples are discarded.
    pub fn set_worked_examples(&mut self, worked_examples: Vec<SubtitledHtml>) {
        let stale: Vec<String> = self
            .recorded_voiceovers
            .content_ids()
            .filter(|id| {
                *id != self.explanation.content_id()
                    && !worked_examples.iter().any(|w| w.content_id() == *id)
            })
            .map(str::to_owned)
            .collect();
        for id in stale {
            self.recorded_voiceovers.delete_content_id(&id);
        }
        for example in &worked_examples {
            self.recorded_voiceovers.add_content_id(example.content_id());
        }
        self.worked_examples = worked_examples;
    }

    /// The card's contribution to the owning skill's validation.
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.explanation.is_empty() {
            issues.push(MISSING_REVIEW_MATERIAL_ISSUE.to_owned());
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skillforge_types::skill::ConceptCardDict;

    fn sample_dict() -> ConceptCardDict {
        serde_json::from_value(json!({
            "explanation": {
                "html": "test explanation",
                "content_id": "explanation"
            },
            "worked_examples": [
                { "html": "test worked example 1", "content_id": "worked_example_1" },
                { "html": "test worked example 2", "content_id": "worked_example_2" }
            ],
            "recorded_voiceovers": {
                "voiceovers_mapping": {
                    "explanation": {},
                    "worked_example_1": {},
                    "worked_example_2": {}
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_backend_dict_roundtrip() {
        let dict = sample_dict();
        let card = ConceptCard::from_backend_dict(dict.clone());
        assert_eq!(card.explanation().html(), "test explanation");
        assert_eq!(card.worked_examples().len(), 2);
        assert_eq!(card.to_backend_dict(), dict);
    }

    #[test]
    fn test_interstitial_card() {
        let card = ConceptCard::interstitial();
        assert_eq!(card.explanation().html(), "Loading review material");
        assert_eq!(card.explanation().content_id(), "explanation");
        assert!(card.worked_examples().is_empty());
        let ids: Vec<&str> = card.recorded_voiceovers().content_ids().collect();
        assert_eq!(ids, ["explanation"]);
    }

    #[test]
    fn test_valid_card_reports_no_issues() {
        let card = ConceptCard::from_backend_dict(sample_dict());
        assert!(card.validation_issues().is_empty());
    }

    #[test]
    fn test_blank_explanation_reports_missing_review_material() {
        let mut card = ConceptCard::from_backend_dict(sample_dict());
        card.set_explanation(SubtitledHtml::default_for_content_id("explanation"));
        assert_eq!(
            card.validation_issues(),
            ["There should be review material in the concept card."]
        );
    }

    #[test]
    fn test_set_worked_examples_reseeds_voiceovers() {
        let mut card = ConceptCard::from_backend_dict(sample_dict());
        card.set_worked_examples(vec![SubtitledHtml::new(
            "replacement",
            "worked_example_3",
        )]);
        let ids: Vec<&str> = card.recorded_voiceovers().content_ids().collect();
        assert_eq!(ids, ["explanation", "worked_example_3"]);
        assert_eq!(card.worked_examples().len(), 1);
    }
}
