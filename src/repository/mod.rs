//! Repository layer for catalog storage

pub mod books;

use crate::models::book::Book;

/// Main repository struct holding the in-memory stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository whose catalog starts with the given books
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::new(books),
        }
    }

    /// Create a repository holding the seed records
    pub fn seeded() -> Self {
        Self::new(Book::seed())
    }
}
