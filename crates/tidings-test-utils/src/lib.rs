#![forbid(unsafe_code)]

//! Shared async HTTP stub-server helpers for integration tests.

mod http_server;

pub use http_server::TestHttpServer;
