use serde::{Deserialize, Serialize};

/// One displayable unit of content: a video, ebook, lecture or document.
///
/// Built fresh on every load cycle and never mutated afterwards; the next
/// load replaces the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Verbatim from the sheet, or synthesized for recognized video links.
    /// Empty means the UI falls back to a default icon.
    #[serde(default)]
    pub thumbnail_url: String,
    /// `#` is the sentinel for "no destination".
    #[serde(default = "default_link")]
    pub link_url: String,
    /// Set only when the link is a recognized playable video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub grade: String,
}

fn default_link() -> String {
    "#".to_string()
}

/// An ordered quiz unit reconstructed from flat sheet rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub id: String,
    pub title: String,
    /// Insertion order = source row order; review UIs index by position.
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Present only for multiple-choice; up to four non-empty alternatives
    /// in fixed a..d order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Empty means the question can never be marked correct.
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&QuestionType::MultipleChoice).unwrap(),
            "\"multiple-choice\""
        );
        assert_eq!(serde_json::to_string(&QuestionType::Text).unwrap(), "\"text\"");
    }

    #[test]
    fn resource_defaults_fill_missing_fields() {
        let item: ResourceItem =
            serde_json::from_str(r#"{"id": "1", "title": "Toán học vui"}"#).unwrap();
        assert_eq!(item.link_url, "#");
        assert!(item.thumbnail_url.is_empty());
        assert!(item.embed_url.is_none());
    }
}
