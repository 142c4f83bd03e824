//! BookRepository port

use super::StoreResult;
use crate::domain::entities::{Book, NewBook};
use crate::domain::value_objects::{BookId, BookSort};

pub trait BookRepository {
    fn get(&self, id: BookId) -> StoreResult<Option<Book>>;

    /// Insert a book; the store assigns its identity
    fn add(&mut self, book: NewBook) -> StoreResult<Book>;

    fn update(&mut self, book: &Book) -> StoreResult<()>;

    fn delete(&mut self, id: BookId) -> StoreResult<()>;

    fn get_all(&self, sort: BookSort) -> StoreResult<Vec<Book>>;
}
