#![forbid(unsafe_code)]

//! # Tidings
//!
//! Facade crate providing a unified API for remote feed loading.
//!
//! ## Quick start
//!
//! ```ignore
//! use tidings::prelude::*;
//!
//! let url = Url::parse("https://example.com/feed.json")?;
//! let loader = RemoteFeedLoader::new(url, ReqwestClient::new()?);
//!
//! match loader.load().await {
//!     Ok(items) => println!("{} items", items.len()),
//!     Err(FeedError::Connectivity) => eprintln!("network is down"),
//!     Err(FeedError::InvalidData) => eprintln!("feed is unusable"),
//! }
//! ```

// ── Re-export sub-crates ────────────────────────────────────────────────

pub mod feed {
    pub use tidings_feed::*;
}

pub mod net {
    pub use tidings_net::*;
}

// ── Prelude ─────────────────────────────────────────────────────────────

pub mod prelude {
    pub use tidings_feed::{
        DefaultFeedLoader, FeedError, FeedItem, FeedLoader, FeedResult, RemoteFeedLoader,
    };
    pub use tidings_net::{HttpClient, HttpError, HttpResponse, HttpResult, ReqwestClient};
    pub use url::Url;
}
