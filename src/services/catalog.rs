//! Catalog management service

use crate::{error::AppResult, models::book::Book, repository::Repository};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in insertion order
    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    pub async fn count_books(&self) -> usize {
        self.repository.books.count().await
    }

    /// Get a book by its identifier
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Add a book to the catalog
    pub async fn create_book(&self, book: Book) -> Book {
        tracing::info!("Catalog create: id={} title={:?}", book.id, book.title);
        self.repository.books.create(book).await
    }

    /// Lend one copy of a book, returning the updated record
    pub async fn checkout_book(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books.checkout(id).await.map_err(|e| {
            tracing::debug!("Checkout refused for id={}: {}", id, e);
            e
        })?;
        tracing::info!("Checked out id={}, {} left", book.id, book.quantity);
        Ok(book)
    }

    /// Take back one copy of a book
    pub async fn return_book(&self, id: &str) -> AppResult<Book> {
        let book = self.repository.books.return_book(id).await?;
        tracing::info!("Returned id={}, {} available", book.id, book.quantity);
        Ok(book)
    }
}
