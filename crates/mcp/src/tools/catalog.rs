// NeoDB tool definitions: names, schemas and typed arguments

use crate::error::ToolError;
use crate::protocol::ToolSchema;
use crate::tools::{json_schema_object, json_schema_string};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The registered tools, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    GetUserInfo,
    SearchBooks,
    GetBook,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [Self::GetUserInfo, Self::SearchBooks, Self::GetBook];

    pub fn name(self) -> &'static str {
        match self {
            Self::GetUserInfo => "get-user-info",
            Self::SearchBooks => "search-books",
            Self::GetBook => "get-book",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn schema(self) -> ToolSchema {
        match self {
            Self::GetUserInfo => ToolSchema {
                name: self.name().to_string(),
                description: "Get current user's basic info".to_string(),
                input_schema: json_schema_object(serde_json::json!({}), vec![]),
            },
            Self::SearchBooks => ToolSchema {
                name: self.name().to_string(),
                description: "Search items in catalog".to_string(),
                input_schema: json_schema_object(
                    serde_json::json!({
                        "query": json_schema_string("Search query for books")
                    }),
                    vec!["query"],
                ),
            },
            Self::GetBook => ToolSchema {
                name: self.name().to_string(),
                description: "Get detailed information about a specific book".to_string(),
                input_schema: json_schema_object(
                    serde_json::json!({
                        "book_id": json_schema_string("The ID of the book to retrieve")
                    }),
                    vec!["book_id"],
                ),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchBooksArgs {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GetBookArgs {
    pub book_id: String,
}

/// A validated tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    GetUserInfo,
    SearchBooks(SearchBooksArgs),
    GetBook(GetBookArgs),
}

impl ToolCall {
    /// Resolve the tool name and validate its arguments.
    ///
    /// Absent or `null` arguments count as an empty object.
    pub fn parse(name: &str, arguments: Option<Value>) -> Result<Self, ToolError> {
        let kind =
            ToolKind::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let arguments = match arguments {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(obj @ Value::Object(_)) => obj,
            Some(_) => {
                return Err(ToolError::InvalidArgument(format!(
                    "arguments for {} must be an object",
                    name
                )))
            }
        };

        match kind {
            ToolKind::GetUserInfo => Ok(Self::GetUserInfo),
            ToolKind::SearchBooks => {
                let mut args: SearchBooksArgs = decode(kind, arguments)?;
                args.query = required("query", &args.query)?;
                Ok(Self::SearchBooks(args))
            }
            ToolKind::GetBook => {
                let mut args: GetBookArgs = decode(kind, arguments)?;
                args.book_id = required("book_id", &args.book_id)?;
                Ok(Self::GetBook(args))
            }
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::GetUserInfo => ToolKind::GetUserInfo,
            Self::SearchBooks(_) => ToolKind::SearchBooks,
            Self::GetBook(_) => ToolKind::GetBook,
        }
    }
}

fn decode<T: DeserializeOwned>(kind: ToolKind, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| {
        ToolError::InvalidArgument(format!("invalid arguments for {}: {}", kind.name(), e))
    })
}

fn required(field: &str, value: &str) -> Result<String, ToolError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ToolError::InvalidArgument(format!(
            "{} must be a non-empty string",
            field
        )));
    }
    Ok(trimmed.to_string())
}
