use url::Url;
use uuid::Uuid;

use crate::{
    error::{FeedError, FeedResult},
    item::FeedItem,
};

const OK_200: u16 = 200;

/// Wire-format shape of one feed element.
///
/// Intentionally private to keep the wire schema an implementation detail of
/// this crate. `id` and `image` validate as UUID/URL during decode; unknown
/// keys are ignored.
#[derive(Debug, serde::Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl From<RemoteFeedItem> for FeedItem {
    fn from(remote: RemoteFeedItem) -> Self {
        Self {
            id: remote.id,
            description: remote.description,
            location: remote.location,
            image: remote.image,
        }
    }
}

/// Validate a transport outcome and decode its payload into domain items.
///
/// Only an exact 200 passes; any other status, or a payload that is not a
/// JSON array of valid wire items, is `InvalidData`. An empty array is a
/// valid, empty feed.
pub(crate) fn map(status: u16, body: &[u8]) -> FeedResult<Vec<FeedItem>> {
    if status != OK_200 {
        return Err(FeedError::InvalidData);
    }

    let remote: Vec<RemoteFeedItem> =
        serde_json::from_slice(body).map_err(|_| FeedError::InvalidData)?;

    Ok(remote.into_iter().map(FeedItem::from).collect())
}
