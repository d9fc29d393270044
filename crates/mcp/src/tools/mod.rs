pub mod backend;
pub mod catalog;
pub mod format;
mod registry;

pub use backend::NeoDbApi;
pub use catalog::{GetBookArgs, SearchBooksArgs, ToolCall, ToolKind};
pub use registry::{json_schema_object, json_schema_string, ToolRegistry};
