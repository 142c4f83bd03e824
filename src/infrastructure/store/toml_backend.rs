//! TOML Store Backend
//!
//! Persists every table in one TOML document. Each commit rewrites the whole
//! document: serialize, write to a temp file beside the target, fsync, then
//! rename over it, all under an exclusive lock on `<file>.lock`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use super::{StorageBackend, Tables};
use crate::domain::entities::{Book, Loan, Member, Reservation};
use crate::domain::ports::{StoreError, StoreResult};
use crate::domain::value_objects::{BookId, LoanId, MemberId, ReservationId};

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlBook {
    id: u64,
    title: String,
    author: String,
    acquired: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlMember {
    id: u64,
    name: String,
    phone: String,
    loan_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlLoan {
    id: u64,
    member: u64,
    book: u64,
    loaned_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    returned_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlReservation {
    id: u64,
    member: u64,
    book: u64,
    reserved_at: DateTime<Utc>,
    sequence: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlSnapshot {
    version: u32,
    #[serde(default)]
    last_book_id: u64,
    #[serde(default)]
    last_member_id: u64,
    #[serde(default)]
    last_loan_id: u64,
    #[serde(default)]
    last_reservation_id: u64,
    #[serde(default)]
    last_reservation_sequence: u64,
    #[serde(default)]
    books: Vec<TomlBook>,
    #[serde(default)]
    members: Vec<TomlMember>,
    #[serde(default)]
    loans: Vec<TomlLoan>,
    #[serde(default)]
    reservations: Vec<TomlReservation>,
}

pub struct TomlBackend {
    path: PathBuf,
}

impl TomlBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn corrupted(&self, message: impl Into<String>) -> StoreError {
        StoreError::Corrupted {
            path: self.path.clone(),
            message: message.into(),
        }
    }

    /// Decode and validate a snapshot document
    pub fn parse(&self, content: &str) -> StoreResult<Tables> {
        let snapshot: TomlSnapshot =
            toml::from_str(content).map_err(|e| self.corrupted(e.to_string()))?;
        if snapshot.version != FORMAT_VERSION {
            return Err(self.corrupted(format!(
                "unsupported format version {} (expected {})",
                snapshot.version, FORMAT_VERSION
            )));
        }

        from_toml(snapshot).map_err(|message| self.corrupted(message))
    }

    fn write_snapshot(&self, content: &str) -> StoreResult<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl StorageBackend for TomlBackend {
    fn load(&self) -> StoreResult<Tables> {
        if !self.path.exists() {
            return Ok(Tables::new());
        }

        let content = fs::read_to_string(&self.path)?;
        self.parse(&content)
    }

    fn save(&self, tables: &Tables) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let lock_path = self.lock_path();
        let lock_file = fs::File::create(&lock_path)?;
        lock_file
            .lock_exclusive()
            .map_err(|source| StoreError::Lock {
                path: lock_path.clone(),
                source,
            })?;

        let result = toml::to_string_pretty(&to_toml(tables))
            .map_err(|e| StoreError::Serialization {
                message: e.to_string(),
            })
            .and_then(|content| self.write_snapshot(&content));

        let _ = lock_file.unlock();
        result
    }

    fn describe(&self) -> String {
        format!("toml:{}", self.path.display())
    }
}

fn to_toml(tables: &Tables) -> TomlSnapshot {
    TomlSnapshot {
        version: FORMAT_VERSION,
        last_book_id: tables.books.last_id,
        last_member_id: tables.members.last_id,
        last_loan_id: tables.loans.last_id,
        last_reservation_id: tables.reservations.last_id,
        last_reservation_sequence: tables.reservations.last_sequence,
        books: tables
            .books
            .rows
            .values()
            .map(|b| TomlBook {
                id: b.id.get(),
                title: b.title.clone(),
                author: b.author.clone(),
                acquired: b.acquisition_date,
            })
            .collect(),
        members: tables
            .members
            .rows
            .values()
            .map(|m| TomlMember {
                id: m.id.get(),
                name: m.name.clone(),
                phone: m.phone.clone(),
                loan_limit: m.loan_limit,
            })
            .collect(),
        loans: tables
            .loans
            .rows
            .values()
            .map(|l| TomlLoan {
                id: l.id.get(),
                member: l.member_id.get(),
                book: l.book_id.get(),
                loaned_at: l.loan_date,
                returned_at: l.return_date,
            })
            .collect(),
        reservations: tables
            .reservations
            .rows
            .values()
            .map(|r| TomlReservation {
                id: r.id.get(),
                member: r.member_id.get(),
                book: r.book_id.get(),
                reserved_at: r.reservation_date,
                sequence: r.sequence,
            })
            .collect(),
    }
}

/// Rebuild the tables, rejecting anything the services could not have written
fn from_toml(snapshot: TomlSnapshot) -> Result<Tables, String> {
    let mut tables = Tables::new();

    for row in snapshot.books {
        check_id("book", row.id, snapshot.last_book_id)?;
        let id = BookId::new(row.id);
        let book = Book {
            id,
            title: row.title,
            author: row.author,
            acquisition_date: row.acquired,
        };
        if tables.books.rows.insert(id, book).is_some() {
            return Err(format!("duplicate book id {}", row.id));
        }
    }

    for row in snapshot.members {
        check_id("member", row.id, snapshot.last_member_id)?;
        let id = MemberId::new(row.id);
        let member = Member {
            id,
            name: row.name,
            phone: row.phone,
            loan_limit: row.loan_limit,
        };
        if tables.members.rows.insert(id, member).is_some() {
            return Err(format!("duplicate member id {}", row.id));
        }
    }

    for row in snapshot.loans {
        check_id("loan", row.id, snapshot.last_loan_id)?;
        let loan = Loan {
            id: LoanId::new(row.id),
            member_id: MemberId::new(row.member),
            book_id: BookId::new(row.book),
            loan_date: row.loaned_at,
            return_date: row.returned_at,
        };
        check_refs(&tables, "loan", row.id, loan.member_id, loan.book_id)?;
        if loan.is_active()
            && tables
                .loans
                .rows
                .values()
                .any(|other| other.book_id == loan.book_id && other.is_active())
        {
            return Err(format!(
                "book {} has more than one active loan",
                loan.book_id
            ));
        }
        if tables.loans.rows.insert(loan.id, loan).is_some() {
            return Err(format!("duplicate loan id {}", row.id));
        }
    }

    for row in snapshot.reservations {
        check_id("reservation", row.id, snapshot.last_reservation_id)?;
        if row.sequence == 0 || row.sequence > snapshot.last_reservation_sequence {
            return Err(format!(
                "reservation {} has sequence {} outside 1..={}",
                row.id, row.sequence, snapshot.last_reservation_sequence
            ));
        }
        let reservation = Reservation {
            id: ReservationId::new(row.id),
            member_id: MemberId::new(row.member),
            book_id: BookId::new(row.book),
            reservation_date: row.reserved_at,
            sequence: row.sequence,
        };
        check_refs(
            &tables,
            "reservation",
            row.id,
            reservation.member_id,
            reservation.book_id,
        )?;
        if tables
            .reservations
            .rows
            .insert(reservation.id, reservation)
            .is_some()
        {
            return Err(format!("duplicate reservation id {}", row.id));
        }
    }

    tables.books.last_id = snapshot.last_book_id;
    tables.members.last_id = snapshot.last_member_id;
    tables.loans.last_id = snapshot.last_loan_id;
    tables.reservations.last_id = snapshot.last_reservation_id;
    tables.reservations.last_sequence = snapshot.last_reservation_sequence;

    Ok(tables)
}

fn check_id(kind: &str, id: u64, last: u64) -> Result<(), String> {
    if id == 0 || id > last {
        return Err(format!("{kind} id {id} outside 1..={last}"));
    }
    Ok(())
}

fn check_refs(
    tables: &Tables,
    kind: &str,
    id: u64,
    member: MemberId,
    book: BookId,
) -> Result<(), String> {
    if !tables.members.rows.contains_key(&member) {
        return Err(format!("{kind} {id} references missing member {member}"));
    }
    if !tables.books.rows.contains_key(&book) {
        return Err(format!("{kind} {id} references missing book {book}"));
    }
    Ok(())
}
