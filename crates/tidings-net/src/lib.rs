#![forbid(unsafe_code)]

//! HTTP client capability for tidings.
//!
//! One trait, one operation: a single asynchronous GET that resolves exactly
//! once with either the raw transport outcome (status + payload) or a
//! transport error. Status codes are surfaced verbatim; interpreting them is
//! the caller's concern.

mod client;
mod error;
mod traits;
mod types;

pub use crate::{
    client::ReqwestClient,
    error::{HttpError, HttpResult},
    traits::HttpClient,
    types::HttpResponse,
};

#[cfg(feature = "mock")]
pub use crate::traits::HttpClientMock;
