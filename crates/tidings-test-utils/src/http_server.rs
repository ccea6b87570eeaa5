//! Lightweight HTTP stub server for exercising real network clients.

use axum::{http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;
use url::Url;

/// HTTP stub server on a random localhost port.
///
/// Shuts down gracefully when dropped.
pub struct TestHttpServer {
    base_url: Url,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestHttpServer {
    /// Spawn `router` on a random localhost port.
    ///
    /// # Panics
    ///
    /// Panics if listener bind or URL parsing fails.
    pub async fn serve(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test HTTP listener");
        let addr = listener
            .local_addr()
            .expect("read test listener local addr");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server = axum::serve(listener, router).with_graceful_shutdown(async {
            shutdown_rx.await.ok();
        });

        tokio::spawn(async move {
            server.await.expect("run test HTTP server");
        });

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        Self {
            base_url: Url::parse(&format!("http://{}", addr)).expect("parse base URL"),
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Spawn a server answering each `path` with a canned `(status, body)`.
    ///
    /// # Panics
    ///
    /// Panics if a status code is out of range, or as [`TestHttpServer::serve`].
    pub async fn with_responses<I, P, B>(responses: I) -> Self
    where
        I: IntoIterator<Item = (P, u16, B)>,
        P: AsRef<str>,
        B: Into<Vec<u8>>,
    {
        let mut router = Router::new();
        for (path, status, body) in responses {
            let status = StatusCode::from_u16(status).expect("valid stub status code");
            let body: Vec<u8> = body.into();
            router = router.route(
                path.as_ref(),
                get(move || {
                    let body = body.clone();
                    async move { (status, body) }
                }),
            );
        }

        Self::serve(router).await
    }

    /// Join path to server base URL.
    ///
    /// # Panics
    ///
    /// Panics if URL join fails.
    #[must_use]
    pub fn url(&self, path: &str) -> Url {
        self.base_url.join(path).expect("join server URL path")
    }

    /// Base URL of this server.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Drop for TestHttpServer {
    fn drop(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(());
        }
    }
}
