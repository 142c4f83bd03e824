//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Parsing command lines and dispatching them to the services
//! - Output formatting
//!
//! ## Structure
//!
//! - `cli` - Process arguments
//! - `command` - Tokenizer and command grammar
//! - `dispatcher` - One transaction per command
//! - `factory` - Creates the store and dispatcher with proper dependencies
//! - `output` - Report and failure rendering
//! - `session` - The read-execute-print loop
//!
//! ## Usage
//!
//! ```ignore
//! use biblio::presentation::{factory, Session};
//!
//! let store = factory::open_store(&config)?;
//! let mut dispatcher = factory::create_dispatcher(store);
//! Session::new(true).run(&mut dispatcher, std::io::stdin().lock(), std::io::stdout())?;
//! ```

pub mod cli;
pub mod command;
pub mod dispatcher;
pub mod factory;
pub mod output;
pub mod session;

pub use cli::Cli;
pub use command::{parse_line, Command, CommandError, Request};
pub use dispatcher::{Dispatcher, Failure, Outcome, Report};
pub use session::{Session, SessionSummary};
