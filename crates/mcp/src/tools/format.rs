// Human-readable summaries of NeoDB payloads

use serde_json::Value;

/// Render a field for display, falling back to `default` when absent.
fn field(value: &Value, key: &str, default: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) if items.is_empty() => default.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

pub fn user_summary(user: &Value) -> String {
    format!(
        "User Information:\n\
         Username: {}\n\
         Display Name: {}\n\
         Email: {}\n\
         URL: {}\n\
         Account Created: {}\n",
        field(user, "username", "Unknown"),
        field(user, "display_name", "Unknown"),
        field(user, "email", "Not provided"),
        field(user, "url", "Not provided"),
        field(user, "created_at", "Unknown"),
    )
}

pub fn book_summary(book: &Value) -> String {
    format!(
        "Title: {}\n\
         Author: {}\n\
         Rating: {}\n\
         Description: {}\n\
         ---",
        field(book, "title", "Unknown"),
        field(book, "author", "Unknown"),
        field(book, "rating", "N/A"),
        field(book, "description", "No description available"),
    )
}

/// Summarize a search page. Items are read from the `data` array.
pub fn search_summary(query: &str, results: &Value) -> String {
    let books = match results.get("data") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return format!("No books found for query: {}", query),
    };

    let formatted: Vec<String> = books.iter().map(book_summary).collect();
    format!(
        "Search results for '{}':\n\n{}",
        query,
        formatted.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_summary() {
        let book = json!({
            "title": "Dune",
            "author": ["Frank Herbert"],
            "rating": 8.9,
            "description": "Spice."
        });

        assert_eq!(
            book_summary(&book),
            "Title: Dune\nAuthor: Frank Herbert\nRating: 8.9\nDescription: Spice.\n---"
        );
    }

    #[test]
    fn test_book_summary_defaults() {
        let book = json!({"title": "Untitled", "author": [], "rating": null, "description": ""});

        assert_eq!(
            book_summary(&book),
            "Title: Untitled\nAuthor: Unknown\nRating: N/A\nDescription: No description available\n---"
        );
    }

    #[test]
    fn test_multiple_authors_joined() {
        let book = json!({"author": ["Terry Pratchett", "Neil Gaiman"]});
        assert!(book_summary(&book).contains("Author: Terry Pratchett, Neil Gaiman"));
    }

    #[test]
    fn test_user_summary() {
        let user = json!({
            "username": "reader",
            "display_name": "A Reader",
            "url": "https://neodb.social/users/reader/"
        });

        assert_eq!(
            user_summary(&user),
            "User Information:\nUsername: reader\nDisplay Name: A Reader\nEmail: Not provided\n\
             URL: https://neodb.social/users/reader/\nAccount Created: Unknown\n"
        );
    }

    #[test]
    fn test_search_summary() {
        let results = json!({"data": [{"title": "Dune"}, {"title": "Emma"}]});
        let summary = search_summary("d", &results);

        assert!(summary.starts_with("Search results for 'd':\n\nTitle: Dune\n"));
        assert!(summary.contains("---\nTitle: Emma\n"));
    }

    #[test]
    fn test_search_summary_empty() {
        assert_eq!(
            search_summary("zzz", &json!({"data": []})),
            "No books found for query: zzz"
        );
        assert_eq!(
            search_summary("zzz", &json!({})),
            "No books found for query: zzz"
        );
    }
}
