//! User API endpoints.

use crate::client::NeoDbClient;
use crate::error::NeoDbResult;
use serde_json::Value;

/// User API for the authenticated account.
pub struct UsersApi<'a> {
    client: &'a NeoDbClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a NeoDbClient) -> Self {
        Self { client }
    }

    /// Get the account the access token belongs to (`GET /api/me`).
    pub async fn me(&self) -> NeoDbResult<Value> {
        self.client.http.get(&["api", "me"]).await
    }
}
