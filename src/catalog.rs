use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::model::Book;

mod loader;
pub use self::loader::{CatalogLoad, spawn_load};

mod types;
pub use self::types::SubjectResponse;

/// Read-only client for the Open Library subjects listing.
pub struct CatalogClient {
    config: CatalogConfig,
    client: reqwest::blocking::Client,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("mybooks")
            .timeout(config.timeout)
            .build()
            .context("build reqwest client")?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// One GET, no retries. Every failure mode carries the same outer
    /// `catalog fetch failed` context.
    pub fn fetch_works(&self) -> Result<Vec<Book>> {
        self.fetch_works_inner().context("catalog fetch failed")
    }

    fn fetch_works_inner(&self) -> Result<Vec<Book>> {
        let url = self.config.subject_url();
        debug!(url = %url, limit = self.config.limit, "requesting catalog");
        let resp = self
            .client
            .get(&url)
            .query(&[("limit", self.config.limit)])
            .send()
            .context("send catalog request")?;
        let resp = resp.error_for_status().context("catalog status")?;
        let body: SubjectResponse = resp.json().context("parse catalog payload")?;
        info!(count = body.works.len(), "catalog fetched");
        Ok(body.works)
    }
}
