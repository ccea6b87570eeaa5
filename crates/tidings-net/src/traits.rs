use async_trait::async_trait;
use url::Url;

use crate::error::HttpResult;
use crate::types::HttpResponse;

/// One-shot asynchronous GET capability.
///
/// The returned future resolves exactly once, with either the transport
/// outcome (`HttpResponse`, any status code) or a transport error.
/// Implementations must not retry, and must not map status codes to errors:
/// a 404 is a successful transport outcome.
#[cfg_attr(feature = "mock", unimock::unimock(api = HttpClientMock))]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch all bytes from a URL with a single GET.
    async fn get(&self, url: Url) -> HttpResult<HttpResponse>;
}
