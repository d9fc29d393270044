//! Transport layer for the NeoDB SDK.

pub mod http;

pub use http::HttpTransport;
