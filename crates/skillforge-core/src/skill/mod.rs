//! The skill aggregate and its child entities.
//!
//! A `Skill` is one unit of learnable material: descriptive metadata, the
//! misconceptions learners commonly hold about it, difficulty-graded
//! rubrics, and a concept card carrying the review material. The aggregate
//! is hydrated from its persisted dictionary, mutated in place through the
//! operations defined here, and serialized back without loss.

pub mod aggregate;
pub mod concept_card;
pub mod misconception;
pub mod rubric;
pub mod subtitled_html;
pub mod voiceovers;

pub use aggregate::Skill;
pub use concept_card::ConceptCard;
pub use misconception::Misconception;
pub use rubric::Rubric;
pub use subtitled_html::SubtitledHtml;
pub use voiceovers::{RecordedVoiceovers, Voiceover};
