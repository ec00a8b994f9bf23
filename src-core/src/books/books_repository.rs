//! In-memory [`BookRepositoryTrait`] backed by a concurrent map.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::books::books_model::Book;
use crate::books::books_traits::{BookEdit, BookRepositoryTrait};
use crate::errors::{Error, Result};

#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: DashMap<String, Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let repository = Self::new();
        for book in books {
            repository.books.insert(book.id.clone(), book);
        }
        repository
    }
}

#[async_trait]
impl BookRepositoryTrait for InMemoryBookRepository {
    fn load_books(&self) -> Result<Vec<Book>> {
        let mut books: Vec<Book> = self.books.iter().map(|entry| entry.value().clone()).collect();
        books.sort_by(|a, b| {
            (a.year, &a.title, &a.id).cmp(&(b.year, &b.title, &b.id))
        });
        Ok(books)
    }

    fn get_book(&self, book_id: &str) -> Result<Book> {
        self.books
            .get(book_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::not_found("Book", book_id))
    }

    async fn insert_book(&self, book: Book) -> Result<Book> {
        match self.books.entry(book.id.clone()) {
            Entry::Occupied(_) => Err(Error::Repository(format!(
                "Book '{}' already exists",
                book.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(book.clone());
                Ok(book)
            }
        }
    }

    async fn modify_book<'a>(&self, book_id: &str, edit: BookEdit<'a>) -> Result<Book> {
        // The shard write lock is held from read to write-back.
        let mut entry = self
            .books
            .get_mut(book_id)
            .ok_or_else(|| Error::not_found("Book", book_id))?;
        let mut book = entry.value().clone();
        edit(&mut book)?;
        *entry = book.clone();
        Ok(book)
    }

    async fn delete_book(&self, book_id: &str) -> Result<usize> {
        Ok(self.books.remove(book_id).map_or(0, |_| 1))
    }
}
