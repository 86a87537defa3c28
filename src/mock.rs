//! Statically bundled datasets, substituted whenever a live sheet cannot
//! be retrieved so consumers never observe a failure state.

use std::sync::LazyLock;

use crate::model::{ResourceItem, Worksheet};

static VIDEOS: LazyLock<Vec<ResourceItem>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("data/mock_videos.json")).expect("bundled video data")
});

static EBOOKS: LazyLock<Vec<ResourceItem>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("data/mock_ebooks.json")).expect("bundled ebook data")
});

static LECTURES: LazyLock<Vec<ResourceItem>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("data/mock_lectures.json")).expect("bundled lecture data")
});

static WORKSHEETS: LazyLock<Vec<Worksheet>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("data/mock_worksheets.json"))
        .expect("bundled worksheet data")
});

pub fn videos() -> &'static [ResourceItem] {
    &VIDEOS
}

pub fn ebooks() -> &'static [ResourceItem] {
    &EBOOKS
}

pub fn lectures() -> &'static [ResourceItem] {
    &LECTURES
}

pub fn worksheets() -> &'static [Worksheet] {
    &WORKSHEETS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionType;

    #[test]
    fn bundled_collections_are_usable() {
        assert!(!videos().is_empty());
        assert!(!ebooks().is_empty());
        assert!(!lectures().is_empty());
        assert!(!worksheets().is_empty());
    }

    #[test]
    fn bundled_worksheets_carry_both_question_kinds() {
        let all: Vec<_> = worksheets()
            .iter()
            .flat_map(|w| &w.questions)
            .collect();
        assert!(all.iter().any(|q| q.question_type == QuestionType::MultipleChoice));
        assert!(all.iter().any(|q| q.question_type == QuestionType::Text));
        // Multiple-choice entries keep their option lists.
        assert!(all
            .iter()
            .filter(|q| q.question_type == QuestionType::MultipleChoice)
            .all(|q| q.options.as_ref().is_some_and(|o| !o.is_empty())));
    }
}
