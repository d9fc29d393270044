// Upstream seam for the NeoDB tools

use neodb_sdk::{NeoDbClient, NeoDbResult};
use serde_json::Value;

/// The three upstream operations the tools forward to.
#[async_trait::async_trait]
pub trait NeoDbApi: Send + Sync {
    /// `GET /api/me`
    async fn user_info(&self) -> NeoDbResult<Value>;

    /// `GET /api/catalog/search?query=...`
    async fn search_books(&self, query: &str) -> NeoDbResult<Value>;

    /// `GET /api/book/{book_id}`
    async fn get_book(&self, book_id: &str) -> NeoDbResult<Value>;
}

#[async_trait::async_trait]
impl NeoDbApi for NeoDbClient {
    async fn user_info(&self) -> NeoDbResult<Value> {
        self.users().me().await
    }

    async fn search_books(&self, query: &str) -> NeoDbResult<Value> {
        self.catalog().search(query).await
    }

    async fn get_book(&self, book_id: &str) -> NeoDbResult<Value> {
        self.catalog().book(book_id).await
    }
}
