// MCP (Model Context Protocol) server for the NeoDB catalog API.
// Exposes get-user-info, search-books and get-book over stdio.

pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::ToolError;
pub use server::McpServer;
