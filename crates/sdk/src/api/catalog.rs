//! Catalog API endpoints.

use crate::client::NeoDbClient;
use crate::error::{NeoDbError, NeoDbResult};
use serde_json::Value;

/// Catalog API for searching and fetching items.
pub struct CatalogApi<'a> {
    client: &'a NeoDbClient,
}

impl<'a> CatalogApi<'a> {
    pub(crate) fn new(client: &'a NeoDbClient) -> Self {
        Self { client }
    }

    /// Search catalog items (`GET /api/catalog/search?query=...`).
    ///
    /// Returns whatever single page the server hands back; no paging is attempted.
    pub async fn search(&self, query: &str) -> NeoDbResult<Value> {
        let query = non_blank("query", query)?;
        self.client
            .http
            .get_with_query(&["api", "catalog", "search"], &[("query", query)])
            .await
    }

    /// Get a book by its ID (`GET /api/book/{book_id}`).
    pub async fn book(&self, book_id: &str) -> NeoDbResult<Value> {
        let book_id = non_blank("book_id", book_id)?;
        match self.client.http.get(&["api", "book", book_id]).await {
            Err(NeoDbError::Api { status: 404, .. }) => {
                Err(NeoDbError::NotFound(format!("book {}", book_id)))
            }
            other => other,
        }
    }
}

fn non_blank<'s>(field: &str, value: &'s str) -> NeoDbResult<&'s str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NeoDbError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(trimmed)
}
