use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";
pub const DEFAULT_SUBJECT: &str = "science_fiction";
pub const DEFAULT_LIMIT: u32 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub subject: String,
    pub limit: u32,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            limit: DEFAULT_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    /// Subject listing URL, without the `limit` query parameter.
    pub fn subject_url(&self) -> String {
        format!(
            "{}/subjects/{}.json",
            self.base_url.trim_end_matches('/'),
            self.subject
        )
    }
}

/// What to do with a catalog result that arrives after the user already
/// edited the list locally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LateLoadPolicy {
    #[default]
    Discard,
    Overwrite,
}
