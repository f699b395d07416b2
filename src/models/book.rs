//! Book model and related types

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use utoipa::ToSchema;

/// Book record held in the catalog. Missing or `null` fields decode to
/// their zero value.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Caller-supplied identifier (unique by convention only)
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author: String,
    /// Copies currently available for checkout
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub quantity: i32,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    /// Records the catalog starts with
    pub fn seed() -> Vec<Book> {
        vec![
            Book::new("1", "In Search of Lost Time", "Marcel Proust", 2),
            Book::new("2", "The Great Gatsby", "F. Scott Fitzgerald", 5),
            Book::new("3", "War and Peace", "Leo Tolstoy", 6),
        ]
    }
}

/// Query string carrying a book identifier
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Book identifier
    pub id: Option<String>,
}

/// Plain message body, used for acknowledgments and errors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
