use anyhow::Result;
use reqwest::Client;
use tracing::warn;

/// Markers left behind when a sheet URL was never filled in.
const PLACEHOLDER_MARKERS: &[&str] = &["YOUR_PUBLISHED", "YOUR_NEW_SHEET_URL", "..."];

pub fn is_placeholder(url: &str) -> bool {
    url.is_empty() || PLACEHOLDER_MARKERS.iter().any(|m| url.contains(m))
}

/// Retrieve a published sheet and normalize it with `parse`.
///
/// All-or-nothing per collection: an unconfigured URL, a non-success
/// status or a transport error resolves to the bundled fallback, so
/// callers never observe a failure state. No retries.
pub async fn fetch_sheet<T, F>(client: &Client, url: &str, fallback: &[T], parse: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&str) -> Vec<T>,
{
    if is_placeholder(url) {
        warn!("Sheet URL not configured, using bundled data");
        return fallback.to_vec();
    }

    match fetch_text(client, url).await {
        Ok(text) => parse(&text),
        Err(e) => {
            warn!("Sheet fetch failed ({}), using bundled data", e);
            fallback.to_vec()
        }
    }
}

async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        anyhow::bail!("HTTP {}", response.status());
    }
    Ok(response.text().await?)
}
