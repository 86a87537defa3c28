use std::sync::LazyLock;

use regex::Regex;

use crate::model::ResourceItem;

use super::rows::RawRow;

// Permissive on purpose: accepts watch-query, short-link, embed and
// user/channel-relative shapes already present in published sheets. The
// 11-character id length is the only gate.
static YOUTUBE_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*$").unwrap()
});

/// Grade column aliases, checked in priority order. The localized forms
/// come from older sheet revisions.
const GRADE_ALIASES: &[&str] = &["grade", "lớp", "lop", "class"];

/// Map resource-sheet rows into display records, preserving source order.
/// Duplicate ids pass through untouched.
pub fn normalize(rows: &[RawRow]) -> Vec<ResourceItem> {
    rows.iter().filter_map(build_item).collect()
}

fn build_item(row: &RawRow) -> Option<ResourceItem> {
    let title = row.get("title");
    if title.is_empty() {
        // The sole validity gate: a row without a title renders as nothing.
        return None;
    }

    let link_url = row.get("linkurl");
    let mut thumbnail_url = row.get("thumbnailurl").to_string();
    let mut embed_url = None;

    if let Some(video_id) = youtube_id(link_url) {
        if thumbnail_url.is_empty() {
            thumbnail_url = format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg");
        }
        embed_url = Some(format!("https://www.youtube.com/embed/{video_id}"));
    }

    let id = match row.get("id") {
        "" => format!("row-{}", row.line),
        explicit => explicit.to_string(),
    };

    Some(ResourceItem {
        id,
        title: title.to_string(),
        description: row.get("description").to_string(),
        thumbnail_url,
        link_url: if link_url.is_empty() {
            "#".to_string()
        } else {
            link_url.to_string()
        },
        embed_url,
        category: row.get("category").to_string(),
        author: row.get("author").to_string(),
        date: row.get("date").to_string(),
        grade: row.get_any(GRADE_ALIASES).to_string(),
    })
}

/// Extract an 11-character YouTube video id, if the link carries one.
fn youtube_id(url: &str) -> Option<&str> {
    let caps = YOUTUBE_ID_RE.captures(url)?;
    let id = caps.get(2)?.as_str();
    (id.len() == 11).then_some(id)
}
