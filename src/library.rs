use reqwest::Client;
use tracing::info;

use crate::config::SheetConfig;
use crate::fetch::fetch_sheet;
use crate::mock;
use crate::model::{ResourceItem, Worksheet};
use crate::parser;

/// The four collections, loaded once per cycle and handed to consumers
/// whole. Each slot holds live data or its bundled fallback; there is no
/// incremental update and no identity carried across loads.
pub struct Library {
    pub videos: Vec<ResourceItem>,
    pub ebooks: Vec<ResourceItem>,
    pub lectures: Vec<ResourceItem>,
    pub worksheets: Vec<Worksheet>,
}

impl Library {
    /// Fetch all four collections concurrently. The load settles when
    /// every slot is filled; no fetch depends on another.
    pub async fn load(client: &Client, config: &SheetConfig) -> Library {
        let (videos, ebooks, lectures, worksheets) = tokio::join!(
            fetch_sheet(client, &config.videos, mock::videos(), parser::parse_resources),
            fetch_sheet(client, &config.ebooks, mock::ebooks(), parser::parse_resources),
            fetch_sheet(client, &config.lectures, mock::lectures(), parser::parse_resources),
            fetch_sheet(client, &config.worksheets, mock::worksheets(), parser::parse_worksheets),
        );

        info!(
            "Collections loaded: {} videos, {} ebooks, {} lectures, {} worksheets",
            videos.len(),
            ebooks.len(),
            lectures.len(),
            worksheets.len()
        );

        Library {
            videos,
            ebooks,
            lectures,
            worksheets,
        }
    }
}
