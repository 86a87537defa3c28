use std::env;

// Published TSV endpoints (File → Share → Publish to web → TSV).
const VIDEOS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTdZFpjpUuQ4WeIEc-IlpxsC6NUS6SFrzfcZFjE7g7cYOmpNqr4KkW1Iecis_MIZ-il3w7_wdi6ecOs/pub?output=tsv";
const EBOOKS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRXQORIDKtARhcFF9_Qm3MkTK5RnD1_oq06cYkXQ_m2rYtc6XyxNYmy6Guyq54TWG8UN7OTfFwkTM2k/pub?output=tsv";
const LECTURES_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQTTpsz1nKFzIYq0Y7aBsMkn4qyjUVvMwIT_UI4UhY63qIe2DnP9Z1P1QOPHs2VbKZTBopJPCQxHdgz/pub?output=tsv";
const WORKSHEETS_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vT4h_9ipPcogvKU-134drfXZQAglTMS2hloPpahvMBl9QGQhOsyN68U3VaD_tPUEAjaQArT6b8g7336/pub?output=tsv";

/// Sheet endpoints for the four collections. Each can be overridden per
/// collection via environment, which also makes local test sheets easy.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    pub videos: String,
    pub ebooks: String,
    pub lectures: String,
    pub worksheets: String,
}

impl SheetConfig {
    pub fn from_env() -> SheetConfig {
        SheetConfig {
            videos: env_or("CAPY_VIDEOS_URL", VIDEOS_URL),
            ebooks: env_or("CAPY_EBOOKS_URL", EBOOKS_URL),
            lectures: env_or("CAPY_LECTURES_URL", LECTURES_URL),
            worksheets: env_or("CAPY_WORKSHEETS_URL", WORKSHEETS_URL),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
