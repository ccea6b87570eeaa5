use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::{
    error::{HttpError, HttpResult},
    traits::HttpClient,
    types::HttpResponse,
};

/// Production HTTP client backed by reqwest with rustls TLS.
///
/// No retry, timeout, or cancellation layering; one `get` call issues one
/// request and reports one outcome.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: Client,
}

impl ReqwestClient {
    /// # Errors
    ///
    /// Returns [`HttpError`] if the underlying reqwest client fails to build.
    pub fn new() -> HttpResult<Self> {
        let inner = Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| HttpError::transport(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Wrap an already-configured `reqwest::Client`.
    #[must_use]
    pub fn from_client(inner: Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: Url) -> HttpResult<HttpResponse> {
        let resp = self.inner.get(url).send().await.map_err(HttpError::from)?;

        // Status is surfaced verbatim; only failures to complete the
        // request/body read are transport errors.
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(HttpError::from)?;

        Ok(HttpResponse { status, body })
    }
}
