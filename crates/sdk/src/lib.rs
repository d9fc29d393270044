//! # NeoDB SDK
//!
//! Minimal async client for the [NeoDB](https://neodb.social) catalog API.
//! Every call is a single authenticated GET; responses are returned as
//! untyped JSON so callers can forward them unchanged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neodb_sdk::{NeoDbClient, NeoDbResult};
//!
//! #[tokio::main]
//! async fn main() -> NeoDbResult<()> {
//!     let client = NeoDbClient::builder()
//!         .base_url("https://neodb.social")
//!         .access_token("your-access-token")
//!         .build()?;
//!
//!     let me = client.users().me().await?;
//!     println!("Logged in as {}", me["username"]);
//!
//!     let results = client.catalog().search("dune").await?;
//!     println!("{}", results);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::{NeoDbClient, NeoDbClientBuilder};
pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::{NeoDbError, NeoDbResult};
