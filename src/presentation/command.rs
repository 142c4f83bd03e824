//! Command line parsing
//!
//! One input line is one command. Tokens are separated by whitespace and may
//! be double-quoted to contain spaces. Command names match case-insensitively.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::value_objects::{BookId, LoanId, MemberId, ReservationId};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A library operation, run in its own transaction
    Run(Request),
    Help,
    Exit,
}

/// A library operation, ready to dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Register {
        name: String,
        phone: String,
        loan_limit: u32,
    },
    Withdraw(MemberId),
    Acquire {
        title: String,
        author: String,
        acquisition_date: NaiveDate,
    },
    Sell(BookId),
    Lend {
        member: MemberId,
        book: BookId,
    },
    Renew(LoanId),
    Return(LoanId),
    Reserve {
        member: MemberId,
        book: BookId,
    },
    Fulfill(ReservationId),
    Cancel(ReservationId),
    ListBooks,
    ListMembers,
    ListLoans(MemberId),
    ListReservations(BookId),
}

impl Request {
    /// Whether the request only reads state
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Request::ListBooks
                | Request::ListMembers
                | Request::ListLoans(_)
                | Request::ListReservations(_)
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'aide' for help)")]
    Unknown(String),

    #[error("invalid argument: line is not valid UTF-8")]
    NotUtf8,

    #[error("invalid argument: unterminated quote")]
    UnterminatedQuote,

    #[error("invalid argument: usage: {usage}")]
    Arity { usage: &'static str },

    #[error("invalid argument: {what} must be a positive integer, got '{value}'")]
    InvalidId { what: &'static str, value: String },

    #[error("invalid argument: loan limit must be a non-negative integer, got '{0}'")]
    InvalidLimit(String),

    #[error("invalid argument: '{0}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Command names with their argument synopsis, in help order
pub const USAGE: &[(&str, &str)] = &[
    ("inscrire", "inscrire <nom> <telephone> <limitePret>"),
    ("desinscrire", "desinscrire <idMembre>"),
    ("acquerir", "acquerir <titre> <auteur> <dateAcquisition>"),
    ("vendre", "vendre <idLivre>"),
    ("preter", "preter <idMembre> <idLivre>"),
    ("renouveler", "renouveler <idPret>"),
    ("retourner", "retourner <idPret>"),
    ("reserver", "reserver <idMembre> <idLivre>"),
    ("utiliser", "utiliser <idReservation>"),
    ("annuler", "annuler <idReservation>"),
    ("listerlivres", "listerLivres"),
    ("listermembres", "listerMembres"),
    ("listerprets", "listerPrets <idMembre>"),
    ("listerreservations", "listerReservations <idLivre>"),
    ("aide", "aide"),
    ("exit", "exit"),
];

/// Blank lines and `--` comments carry no command
pub fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("--")
}

/// Parse one input line
///
/// Returns `Ok(None)` for blank lines and `--` comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    if is_ignorable(line) {
        return Ok(None);
    }
    let trimmed = line.trim();

    let tokens = tokenize(trimmed)?;
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let name = name.to_lowercase();
    let usage = usage_of(&name).ok_or_else(|| CommandError::Unknown(tokens[0].clone()))?;
    let args = Args { values: args, usage };

    let request = match name.as_str() {
        "inscrire" => {
            let [name, phone, limit] = args.exact::<3>()?;
            Request::Register {
                name: name.clone(),
                phone: phone.clone(),
                loan_limit: limit
                    .parse()
                    .map_err(|_| CommandError::InvalidLimit(limit.clone()))?,
            }
        }
        "desinscrire" => {
            let [member] = args.exact::<1>()?;
            Request::Withdraw(parse_id(member, "member id")?)
        }
        "acquerir" => {
            let [title, author, date] = args.exact::<3>()?;
            Request::Acquire {
                title: title.clone(),
                author: author.clone(),
                acquisition_date: parse_date(date)?,
            }
        }
        "vendre" => {
            let [book] = args.exact::<1>()?;
            Request::Sell(parse_id(book, "book id")?)
        }
        "preter" => {
            let [member, book] = args.exact::<2>()?;
            Request::Lend {
                member: parse_id(member, "member id")?,
                book: parse_id(book, "book id")?,
            }
        }
        "renouveler" => {
            let [loan] = args.exact::<1>()?;
            Request::Renew(parse_id(loan, "loan id")?)
        }
        "retourner" => {
            let [loan] = args.exact::<1>()?;
            Request::Return(parse_id(loan, "loan id")?)
        }
        "reserver" => {
            let [member, book] = args.exact::<2>()?;
            Request::Reserve {
                member: parse_id(member, "member id")?,
                book: parse_id(book, "book id")?,
            }
        }
        "utiliser" => {
            let [reservation] = args.exact::<1>()?;
            Request::Fulfill(parse_id(reservation, "reservation id")?)
        }
        "annuler" => {
            let [reservation] = args.exact::<1>()?;
            Request::Cancel(parse_id(reservation, "reservation id")?)
        }
        "listerlivres" => {
            let [] = args.exact::<0>()?;
            Request::ListBooks
        }
        "listermembres" => {
            let [] = args.exact::<0>()?;
            Request::ListMembers
        }
        "listerprets" => {
            let [member] = args.exact::<1>()?;
            Request::ListLoans(parse_id(member, "member id")?)
        }
        "listerreservations" => {
            let [book] = args.exact::<1>()?;
            Request::ListReservations(parse_id(book, "book id")?)
        }
        "aide" => {
            let [] = args.exact::<0>()?;
            return Ok(Some(Command::Help));
        }
        "exit" => {
            let [] = args.exact::<0>()?;
            return Ok(Some(Command::Exit));
        }
        _ => return Err(CommandError::Unknown(tokens[0].clone())),
    };

    Ok(Some(Command::Run(request)))
}

fn usage_of(name: &str) -> Option<&'static str> {
    USAGE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, usage)| *usage)
}

struct Args<'a> {
    values: &'a [String],
    usage: &'static str,
}

impl<'a> Args<'a> {
    fn exact<const N: usize>(&self) -> Result<&'a [String; N], CommandError> {
        self.values
            .try_into()
            .map_err(|_| CommandError::Arity { usage: self.usage })
    }
}

fn parse_id<T: From<u64>>(token: &str, what: &'static str) -> Result<T, CommandError> {
    match token.parse::<u64>() {
        Ok(value) if value > 0 => Ok(T::from(value)),
        _ => Err(CommandError::InvalidId {
            what,
            value: token.to_string(),
        }),
    }
}

fn parse_date(token: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(token, DATE_FORMAT)
        .map_err(|_| CommandError::InvalidDate(token.to_string()))
}

/// Split a line into whitespace-separated tokens, honouring double quotes
pub fn tokenize(line: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
