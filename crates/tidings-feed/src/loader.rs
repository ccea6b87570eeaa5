use async_trait::async_trait;
use tidings_net::{HttpClient, ReqwestClient};
use tracing::{debug, trace};
use url::Url;

use crate::{
    error::{FeedError, FeedResult},
    item::FeedItem,
    mapper,
};

/// A source of feed items.
///
/// One asynchronous operation resolving exactly once per call. No
/// cancellation handle, no retry.
#[async_trait]
pub trait FeedLoader {
    async fn load(&self) -> FeedResult<Vec<FeedItem>>;
}

/// Loads a feed from a remote endpoint through an `HttpClient`.
///
/// Holds only the immutable endpoint URL and the client. Every `load` call
/// issues an independent request with an independent outcome, so concurrent
/// calls on one instance need no synchronization.
#[derive(Clone, Debug)]
pub struct RemoteFeedLoader<C> {
    url: Url,
    client: C,
}

impl<C: HttpClient> RemoteFeedLoader<C> {
    /// Create a loader for `url`. No request is issued until `load`.
    pub fn new(url: Url, client: C) -> Self {
        Self { url, client }
    }

    /// The endpoint this loader fetches from.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl<C: HttpClient> FeedLoader for RemoteFeedLoader<C> {
    async fn load(&self) -> FeedResult<Vec<FeedItem>> {
        debug!(url = %self.url, "loading remote feed");

        let response = match self.client.get(self.url.clone()).await {
            Ok(response) => response,
            Err(e) => {
                // The transport error value is deliberately discarded; only
                // its occurrence reaches the caller.
                debug!(url = %self.url, error = %e, "transport failed");
                return Err(FeedError::Connectivity);
            }
        };

        let items = mapper::map(response.status, &response.body)?;
        trace!(url = %self.url, count = items.len(), "decoded feed items");

        Ok(items)
    }
}

pub type DefaultFeedLoader = RemoteFeedLoader<ReqwestClient>;
