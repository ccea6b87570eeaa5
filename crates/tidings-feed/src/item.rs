use url::Url;
use uuid::Uuid;

/// A single feed entry as exposed to callers.
///
/// Decoupled from the wire representation so the transport format can change
/// without touching consumers. Optional fields keep absence distinct from an
/// empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image: Url,
}
