#![forbid(unsafe_code)]

//! Remote feed loading: one fetch, validated and decoded into domain items.
//!
//! [`RemoteFeedLoader`] issues a single GET through an
//! [`HttpClient`](tidings_net::HttpClient), checks the transport outcome,
//! decodes the JSON payload, and reports exactly one [`FeedResult`] per call.
//! Callers never see transport error types or wire status codes; every
//! failure collapses into the two-variant [`FeedError`].

mod error;
mod item;
mod loader;
mod mapper;

pub use crate::{
    error::{FeedError, FeedResult},
    item::FeedItem,
    loader::{DefaultFeedLoader, FeedLoader, RemoteFeedLoader},
};
