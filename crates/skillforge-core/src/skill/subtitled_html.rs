//! An HTML fragment paired with the content id that ties it to recorded
//! voiceovers.

use skillforge_types::skill::SubtitledHtmlDict;

/// A piece of authored HTML content addressable by voiceovers.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitledHtml {
    html: String,
    content_id: String,
}

impl SubtitledHtml {
    pub fn new(html: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            content_id: content_id.into(),
        }
    }

    /// An empty fragment for a freshly minted content id. Authors fill the
    /// html in later; until then `is_empty` reports true.
    pub fn default_for_content_id(content_id: impl Into<String>) -> Self {
        Self::new("", content_id)
    }

    pub fn from_backend_dict(dict: SubtitledHtmlDict) -> Self {
        Self {
            html: dict.html,
            content_id: dict.content_id,
        }
    }

    pub fn to_backend_dict(&self) -> SubtitledHtmlDict {
        SubtitledHtmlDict {
            html: self.html.clone(),
            content_id: self.content_id.clone(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    /// Whether the fragment carries no visible content.
    pub fn is_empty(&self) -> bool {
        self.html.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_for_content_id_is_empty() {
        let html = SubtitledHtml::default_for_content_id("explanation");
        assert_eq!(html.content_id(), "explanation");
        assert!(html.is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let html = SubtitledHtml::new("   \n", "explanation");
        assert!(html.is_empty());
    }

    #[test]
    fn test_backend_dict_roundtrip() {
        let dict = SubtitledHtmlDict {
            html: "test explanation".to_owned(),
            content_id: "explanation".to_owned(),
        };
        let html = SubtitledHtml::from_backend_dict(dict.clone());
        assert_eq!(html.html(), "test explanation");
        assert!(!html.is_empty());
        assert_eq!(html.to_backend_dict(), dict);
    }

    #[test]
    fn test_set_html_replaces_content() {
        let mut html = SubtitledHtml::new("old", "explanation");
        html.set_html("new");
        assert_eq!(html.html(), "new");
    }
}
