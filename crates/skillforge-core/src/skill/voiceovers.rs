//! Recorded voiceover tables for concept-card content.
//!
//! Audio is keyed twice: by the content id of the fragment it narrates,
//! then by language code. This core never touches audio data -- it keeps
//! the table structurally in step with the content ids the concept card
//! exposes and passes everything else through unchanged.

use std::collections::BTreeMap;

use skillforge_types::skill::{RecordedVoiceoversDict, VoiceoverDict};

/// One recorded audio file reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Voiceover {
    filename: String,
    file_size_bytes: u64,
    needs_update: bool,
}

impl Voiceover {
    pub fn from_backend_dict(dict: VoiceoverDict) -> Self {
        Self {
            filename: dict.filename,
            file_size_bytes: dict.file_size_bytes,
            needs_update: dict.needs_update,
        }
    }

    pub fn to_backend_dict(&self) -> VoiceoverDict {
        VoiceoverDict {
            filename: self.filename.clone(),
            file_size_bytes: self.file_size_bytes,
            needs_update: self.needs_update,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn file_size_bytes(&self) -> u64 {
        self.file_size_bytes
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }
}

/// All voiceovers recorded for a concept card: content id -> language
/// code -> voiceover.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedVoiceovers {
    voiceovers_mapping: BTreeMap<String, BTreeMap<String, Voiceover>>,
}

impl RecordedVoiceovers {
    /// A fresh table with an empty per-language map for each content id.
    pub fn empty_for_content_ids<I>(content_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            voiceovers_mapping: content_ids
                .into_iter()
                .map(|id| (id.into(), BTreeMap::new()))
                .collect(),
        }
    }

    pub fn from_backend_dict(dict: RecordedVoiceoversDict) -> Self {
        Self {
            voiceovers_mapping: dict
                .voiceovers_mapping
                .into_iter()
                .map(|(content_id, by_language)| {
                    let by_language = by_language
                        .into_iter()
                        .map(|(language, v)| (language, Voiceover::from_backend_dict(v)))
                        .collect();
                    (content_id, by_language)
                })
                .collect(),
        }
    }

    pub fn to_backend_dict(&self) -> RecordedVoiceoversDict {
        RecordedVoiceoversDict {
            voiceovers_mapping: self
                .voiceovers_mapping
                .iter()
                .map(|(content_id, by_language)| {
                    let by_language = by_language
                        .iter()
                        .map(|(language, v)| (language.clone(), v.to_backend_dict()))
                        .collect();
                    (content_id.clone(), by_language)
                })
                .collect(),
        }
    }

    /// Content ids currently tracked by the table, in sorted order.
    pub fn content_ids(&self) -> impl Iterator<Item = &str> {
        self.voiceovers_mapping.keys().map(String::as_str)
    }

    pub fn has_content_id(&self, content_id: &str) -> bool {
        self.voiceovers_mapping.contains_key(content_id)
    }

    /// Start tracking a content id. Existing recordings for the id are kept.
    pub fn add_content_id(&mut self, content_id: impl Into<String>) {
        self.voiceovers_mapping
            .entry(content_id.into())
            .or_default();
    }

    /// Stop tracking a content id, dropping its recordings. No-op when the
    /// id is not tracked.
    pub fn delete_content_id(&mut self, content_id: &str) {
        self.voiceovers_mapping.remove(content_id);
    }
}
