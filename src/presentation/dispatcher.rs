//! Command dispatch
//!
//! Turns one input line into one transaction against the store. Mutations
//! commit on success; queries always roll back.

use crate::application::{Services, TransactionBoundary};
use crate::domain::entities::{Book, Loan, Member, NewBook, NewMember, Reservation};
use crate::domain::ports::{TransactionManager, UnitOfWork};
use crate::domain::services::{BookStatus, MemberStatus};
use crate::domain::value_objects::{BookId, MemberId, ReservationId};
use crate::error::{BiblioError, BiblioResult};

use super::command::{parse_line, Command, CommandError, Request};

/// What a successful command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Registered(Member),
    Withdrawn(Member),
    Acquired(Book),
    Sold(Book),
    Lent(Loan),
    Renewed(Loan),
    Returned(Loan),
    Reserved(Reservation),
    Fulfilled {
        reservation: ReservationId,
        loan: Loan,
    },
    Cancelled(Reservation),
    Books(Vec<BookStatus>),
    Members(Vec<MemberStatus>),
    Loans {
        member: MemberId,
        loans: Vec<Loan>,
    },
    Queue {
        book: BookId,
        reservations: Vec<Reservation>,
    },
    Help,
}

/// Why a line failed
#[derive(Debug)]
pub enum Failure {
    Command(CommandError),
    Biblio(BiblioError),
}

impl Failure {
    pub fn is_storage(&self) -> bool {
        matches!(self, Failure::Biblio(err) if err.is_storage())
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::Command(err) => err.fmt(f),
            Failure::Biblio(err) => err.fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    /// Blank line or comment
    Skipped,
    Done(Report),
    Failed(Failure),
    Exit,
}

pub struct Dispatcher<M: TransactionManager> {
    manager: M,
    services: Services,
}

impl<M: TransactionManager> Dispatcher<M> {
    pub fn new(manager: M, services: Services) -> Self {
        Self { manager, services }
    }

    pub fn manager(&self) -> &M {
        &self.manager
    }

    pub fn into_manager(self) -> M {
        self.manager
    }

    /// Parse and run one input line
    pub fn execute(&mut self, line: &str) -> Outcome {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Outcome::Skipped,
            Err(err) => {
                tracing::debug!(line, error = %err, "rejected");
                return Outcome::Failed(Failure::Command(err));
            }
        };

        match command {
            Command::Exit => Outcome::Exit,
            Command::Help => Outcome::Done(Report::Help),
            Command::Run(request) => match self.dispatch(request) {
                Ok(report) => Outcome::Done(report),
                Err(err) => Outcome::Failed(Failure::Biblio(err)),
            },
        }
    }

    fn dispatch(&mut self, request: Request) -> BiblioResult<Report> {
        tracing::debug!(?request, "dispatching");
        let services = &self.services;
        let mut boundary = TransactionBoundary::new(&mut self.manager);
        if request.is_query() {
            boundary.read(|uow| apply(services, request, uow))
        } else {
            boundary.run(|uow| apply(services, request, uow))
        }
    }
}

fn apply(services: &Services, request: Request, uow: &mut dyn UnitOfWork) -> BiblioResult<Report> {
    let report = match request {
        Request::Register {
            name,
            phone,
            loan_limit,
        } => Report::Registered(services.members.register(
            uow,
            NewMember {
                name,
                phone,
                loan_limit,
            },
        )?),
        Request::Withdraw(member) => Report::Withdrawn(services.members.withdraw(uow, member)?),
        Request::Acquire {
            title,
            author,
            acquisition_date,
        } => Report::Acquired(services.books.acquire(
            uow,
            NewBook {
                title,
                author,
                acquisition_date,
            },
        )?),
        Request::Sell(book) => Report::Sold(services.books.sell(uow, book)?),
        Request::Lend { member, book } => {
            Report::Lent(services.loans.begin_loan(uow, member, book)?)
        }
        Request::Renew(loan) => Report::Renewed(services.loans.renew_loan(uow, loan)?),
        Request::Return(loan) => Report::Returned(services.loans.end_loan(uow, loan)?),
        Request::Reserve { member, book } => {
            Report::Reserved(services.reservations.place(uow, member, book)?)
        }
        Request::Fulfill(reservation) => Report::Fulfilled {
            reservation,
            loan: services.reservations.fulfill(uow, reservation)?,
        },
        Request::Cancel(reservation) => {
            Report::Cancelled(services.reservations.cancel(uow, reservation)?)
        }
        Request::ListBooks => Report::Books(services.queries.list_books(uow)?),
        Request::ListMembers => Report::Members(services.queries.list_members(uow)?),
        Request::ListLoans(member) => Report::Loans {
            member,
            loans: services.queries.member_loans(uow, member)?,
        },
        Request::ListReservations(book) => Report::Queue {
            book,
            reservations: services.queries.reservation_queue(uow, book)?,
        },
    };
    Ok(report)
}
