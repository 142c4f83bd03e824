//! Book entity
//!
//! A book carries only catalogue data. Whether it is lent out is answered by
//! the loan table, never by a field on the book.

use chrono::NaiveDate;

use crate::domain::value_objects::BookId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub acquisition_date: NaiveDate,
}

/// A book not yet stored; the store assigns its identity on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub acquisition_date: NaiveDate,
}

impl NewBook {
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            acquisition_date: self.acquisition_date,
        }
    }
}
