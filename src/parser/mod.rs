pub mod resources;
pub mod rows;
pub mod worksheets;

use crate::model::{ResourceItem, Worksheet};

/// Two-pass pipeline: TSV text → header-keyed rows → flat resource records.
pub fn parse_resources(text: &str) -> Vec<ResourceItem> {
    let rows = rows::parse(text, rows::HeaderStyle::Joined);
    resources::normalize(&rows)
}

/// Two-pass pipeline: TSV text → header-keyed rows → grouped worksheets.
pub fn parse_worksheets(text: &str) -> Vec<Worksheet> {
    let rows = rows::parse(text, rows::HeaderStyle::Underscored);
    worksheets::group(&rows)
}

// ── Tests ──
