//! API endpoint groups.

pub mod catalog;
pub mod users;

pub use catalog::CatalogApi;
pub use users::UsersApi;
