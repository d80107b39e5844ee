use crate::request::{REDDIT_API_BASE, user_request_url};
use crate::types::{Batch, FetchStatus, Listing, Post, PostFilter};
use anyhow::Result;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct UserEndpoint {
    api_base: String,
    client: reqwest::Client,
}

impl UserEndpoint {
    pub fn new(api_base: &str) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { api_base: api_base.to_string(), client })
    }

    pub fn reddit() -> Result<Self> {
        Self::new(REDDIT_API_BASE)
    }
}

impl UserEndpoint {
    /// Fetches one page of a user's listing. A non-2xx response maps to
    /// `FetchStatus::Failure` without reading the body; transport and JSON
    /// decode errors propagate as `Err`.
    pub async fn user_listing(
        &self,
        user: &str,
        kind: Option<&str>,
        after: Option<&str>,
        filter: Option<&PostFilter>,
    ) -> Result<FetchStatus<Listing<Post>>> {
        let url = user_request_url(&self.api_base, user, kind, after, filter);
        debug!(%url, "requesting user listing");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(FetchStatus::Failure);
        }

        let listing = response.json::<Listing<Post>>().await?;
        Ok(FetchStatus::Success(listing))
    }

    /// Fetches the next page and flattens it into a `Batch` for pagination
    /// consumers. A `None` `after_id` means there are no further pages.
    pub async fn next_post_batch(
        &self,
        user: &str,
        kind: Option<&str>,
        after: Option<&str>,
        filter: Option<&PostFilter>,
    ) -> Result<FetchStatus<Batch>> {
        let listing = self.user_listing(user, kind, after, filter).await?;
        Ok(listing.map(|listing| Batch {
            posts: listing.data.children,
            batch_count: listing.data.dist,
            after_id: listing.data.after,
        }))
    }
}
