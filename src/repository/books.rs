//! In-memory book store

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

pub const BOOK_NOT_FOUND: &str = "The requested book could not be found.";
pub const RETURN_NOT_FOUND: &str = "Book could not be found";

/// Ordered book list shared between clones
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    /// All books, in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    /// First book whose id matches
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Append a book; ids are not checked for uniqueness
    pub async fn create(&self, book: Book) -> Book {
        self.books.write().await.push(book.clone());
        book
    }

    /// Take one copy out. Fails if the book is unknown or none are left.
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        match books.iter_mut().find(|book| book.id == id) {
            Some(book) if book.quantity > 0 => {
                book.quantity -= 1;
                Ok(book.clone())
            }
            _ => Err(AppError::NotFound(BOOK_NOT_FOUND.to_string())),
        }
    }

    /// Put one copy back
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(RETURN_NOT_FOUND.to_string()))?;
        book.quantity = book.quantity.saturating_add(1);
        Ok(book.clone())
    }
}
