//! BookRepository over the in-memory book table

use crate::domain::entities::{Book, NewBook};
use crate::domain::ports::{BookRepository, StoreError, StoreResult};
use crate::domain::value_objects::{BookId, BookSort, EntityKind};
use crate::infrastructure::store::{next_id, BookTable};

impl BookRepository for BookTable {
    fn get(&self, id: BookId) -> StoreResult<Option<Book>> {
        Ok(self.rows.get(&id).cloned())
    }

    fn add(&mut self, book: NewBook) -> StoreResult<Book> {
        let id = BookId::new(next_id(&mut self.last_id));
        let book = book.into_book(id);
        self.rows.insert(id, book.clone());
        Ok(book)
    }

    fn update(&mut self, book: &Book) -> StoreResult<()> {
        match self.rows.get_mut(&book.id) {
            Some(row) => {
                *row = book.clone();
                Ok(())
            }
            None => Err(StoreError::NoRowAffected {
                kind: EntityKind::Book,
                id: book.id.get(),
            }),
        }
    }

    fn delete(&mut self, id: BookId) -> StoreResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NoRowAffected {
                kind: EntityKind::Book,
                id: id.get(),
            })
    }

    fn get_all(&self, sort: BookSort) -> StoreResult<Vec<Book>> {
        let mut books: Vec<Book> = self.rows.values().cloned().collect();
        match sort {
            BookSort::Id => {}
            BookSort::Title => books.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id))),
            BookSort::AcquisitionDate => books.sort_by(|a, b| {
                a.acquisition_date
                    .cmp(&b.acquisition_date)
                    .then(a.id.cmp(&b.id))
            }),
        }
        Ok(books)
    }
}
