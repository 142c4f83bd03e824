//! Output Rendering
//!
//! Every result is plain text: one line per effect, one line per row for
//! listings. Failures carry a prefix so scripts can grep for them: `****`
//! for rule violations and bad input, `***` when the store itself failed.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use super::command::USAGE;
use super::dispatcher::{Failure, Report};

const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prefix for business and input failures
pub const FAILURE_PREFIX: &str = "****";
/// Prefix for storage failures
pub const STORAGE_FAILURE_PREFIX: &str = "***";

pub fn render_failure(failure: &Failure) -> String {
    let prefix = if failure.is_storage() {
        STORAGE_FAILURE_PREFIX
    } else {
        FAILURE_PREFIX
    };
    format!("{prefix} {failure}")
}

pub fn render_report(report: &Report) -> String {
    match report {
        Report::Registered(m) => format!(
            "member {} registered: {}, phone {}, loan limit {}",
            m.id, m.name, m.phone, m.loan_limit
        ),
        Report::Withdrawn(m) => format!("member {} withdrawn: {}", m.id, m.name),
        Report::Acquired(b) => format!(
            "book {} acquired: \"{}\" by {} ({})",
            b.id, b.title, b.author, b.acquisition_date
        ),
        Report::Sold(b) => format!("book {} sold: \"{}\"", b.id, b.title),
        Report::Lent(l) => format!(
            "loan {} created: member {} borrows book {}",
            l.id, l.member_id, l.book_id
        ),
        Report::Renewed(l) => format!(
            "loan {} renewed: member {} keeps book {}",
            l.id, l.member_id, l.book_id
        ),
        Report::Returned(l) => format!(
            "loan {} closed: member {} returned book {}",
            l.id, l.member_id, l.book_id
        ),
        Report::Reserved(r) => format!(
            "reservation {} placed: member {} waits for book {}",
            r.id, r.member_id, r.book_id
        ),
        Report::Fulfilled { reservation, loan } => format!(
            "reservation {} used: loan {} created, member {} borrows book {}",
            reservation, loan.id, loan.member_id, loan.book_id
        ),
        Report::Cancelled(r) => format!(
            "reservation {} cancelled: member {} no longer waits for book {}",
            r.id, r.member_id, r.book_id
        ),
        Report::Books(books) => {
            if books.is_empty() {
                return "no books".to_string();
            }
            let mut out = String::new();
            for status in books {
                let b = &status.book;
                let _ = write!(
                    out,
                    "book {}: \"{}\" by {} ({})",
                    b.id, b.title, b.author, b.acquisition_date
                );
                match &status.loan {
                    Some(loan) => {
                        let _ = write!(out, ", lent to member {} (loan {})", loan.member_id, loan.id);
                    }
                    None => out.push_str(", on shelf"),
                }
                if status.queue_length > 0 {
                    let _ = write!(out, ", {} waiting", status.queue_length);
                }
                out.push('\n');
            }
            trim_last_newline(out)
        }
        Report::Members(members) => {
            if members.is_empty() {
                return "no members".to_string();
            }
            let mut out = String::new();
            for status in members {
                let m = &status.member;
                let _ = writeln!(
                    out,
                    "member {}: {}, phone {}, {}/{} loans",
                    m.id, m.name, m.phone, status.active_loans, m.loan_limit
                );
            }
            trim_last_newline(out)
        }
        Report::Loans { member, loans } => {
            if loans.is_empty() {
                return format!("member {member} has no loans");
            }
            let mut out = String::new();
            for l in loans {
                let _ = write!(out, "loan {}: book {}, since {}", l.id, l.book_id, stamp(&l.loan_date));
                match &l.return_date {
                    Some(returned) => {
                        let _ = writeln!(out, ", returned {}", stamp(returned));
                    }
                    None => out.push_str(", active\n"),
                }
            }
            trim_last_newline(out)
        }
        Report::Queue { book, reservations } => {
            if reservations.is_empty() {
                return format!("no reservations for book {book}");
            }
            let mut out = String::new();
            for (position, r) in reservations.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{}. reservation {}: member {}, since {}",
                    position + 1,
                    r.id,
                    r.member_id,
                    stamp(&r.reservation_date)
                );
            }
            trim_last_newline(out)
        }
        Report::Help => help_text(),
    }
}

pub fn help_text() -> String {
    let mut out = String::from("commands:\n");
    for (_, usage) in USAGE {
        let _ = writeln!(out, "  {usage}");
    }
    out.push_str("lines starting with -- are comments; quote arguments that contain spaces");
    out
}

fn stamp(at: &DateTime<Utc>) -> String {
    at.format(STAMP_FORMAT).to_string()
}

fn trim_last_newline(mut out: String) -> String {
    if out.ends_with('\n') {
        out.pop();
    }
    out
}
