//! Line-by-line session
//!
//! Reads commands until end of input or `exit`. A failed command is reported
//! and the session carries on with the next line. Lines are read as bytes so
//! one undecodable line fails on its own.

use std::io::{self, BufRead, Write};

use crate::domain::ports::TransactionManager;

use super::command::{is_ignorable, CommandError};
use super::dispatcher::{Dispatcher, Failure, Outcome};
use super::output::{render_failure, render_report};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub executed: usize,
    pub failed: usize,
}

pub struct Session {
    echo: bool,
}

impl Session {
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }

    pub fn run<M: TransactionManager>(
        &self,
        dispatcher: &mut Dispatcher<M>,
        mut input: impl BufRead,
        mut out: impl Write,
    ) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let raw = strip_line_ending(&buf);
            let text = String::from_utf8_lossy(raw);
            if is_ignorable(&text) {
                continue;
            }
            if self.echo {
                writeln!(out, "> {}", text.trim_end())?;
            }

            let outcome = match std::str::from_utf8(raw) {
                Ok(line) => dispatcher.execute(line),
                Err(_) => {
                    tracing::debug!(line = %text, "line is not valid UTF-8");
                    Outcome::Failed(Failure::Command(CommandError::NotUtf8))
                }
            };

            match outcome {
                Outcome::Skipped => {}
                Outcome::Done(report) => {
                    summary.executed += 1;
                    writeln!(out, "{}", render_report(&report))?;
                }
                Outcome::Failed(failure) => {
                    summary.failed += 1;
                    writeln!(out, "{}", render_failure(&failure))?;
                }
                Outcome::Exit => break,
            }
        }

        out.flush()?;
        tracing::debug!(
            executed = summary.executed,
            failed = summary.failed,
            "session finished"
        );
        Ok(summary)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::application::Services;
    use crate::infrastructure::{SteppingClock, Store};

    fn run(script: &str, echo: bool) -> (String, SessionSummary) {
        run_bytes(script.as_bytes(), echo)
    }

    fn run_bytes(script: &[u8], echo: bool) -> (String, SessionSummary) {
        let clock = Arc::new(SteppingClock::frozen(
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        ));
        let mut dispatcher = Dispatcher::new(Store::in_memory(), Services::new(clock));
        let mut out = Vec::new();
        let summary = Session::new(echo)
            .run(&mut dispatcher, script, &mut out)
            .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_echo_and_results() {
        let script = "\
-- set up
inscrire Ada 555-0100 1

acquerir \"Le Horla\" Maupassant 1887-05-01
preter 1 1
preter 1 1
";
        let (out, summary) = run(script, true);
        insta::assert_snapshot!(out, @r#"
        > inscrire Ada 555-0100 1
        member 1 registered: Ada, phone 555-0100, loan limit 1
        > acquerir "Le Horla" Maupassant 1887-05-01
        book 1 acquired: "Le Horla" by Maupassant (1887-05-01)
        > preter 1 1
        loan 1 created: member 1 borrows book 1
        > preter 1 1
        **** book 1 is already lent to member 1
        "#);
        assert_eq!(
            summary,
            SessionSummary {
                executed: 3,
                failed: 1
            }
        );
    }

    #[test]
    fn test_without_echo() {
        let (out, _) = run("inscrire Ada 555-0100 1\n", false);
        assert_eq!(out, "member 1 registered: Ada, phone 555-0100, loan limit 1\n");
    }

    #[test]
    fn test_unknown_command_does_not_stop_the_session() {
        let (out, summary) = run("emprunter 1 1\ninscrire Ada 555 1\n", false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "**** unknown command 'emprunter' (type 'aide' for help)");
        assert!(lines[1].starts_with("member 1 registered"));
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_undecodable_line_fails_alone() {
        let script = b"inscrire Ada 555 1\npreter \xff 1\ninscrire Bob 555 1\n";
        let (out, summary) = run_bytes(script, true);

        insta::assert_snapshot!(out, @r"
        > inscrire Ada 555 1
        member 1 registered: Ada, phone 555, loan limit 1
        > preter � 1
        **** invalid argument: line is not valid UTF-8
        > inscrire Bob 555 1
        member 2 registered: Bob, phone 555, loan limit 1
        ");
        assert_eq!(
            summary,
            SessionSummary {
                executed: 2,
                failed: 1
            }
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let (out, summary) = run("inscrire Ada 555 1\r\nlisterMembres\r\n", false);
        assert_eq!(summary.failed, 0);
        assert!(out.ends_with("member 1: Ada, phone 555, 0/1 loans\n"), "{out}");
    }

    #[test]
    fn test_exit_stops_reading() {
        let (out, summary) = run("exit\ninscrire Ada 555 1\n", true);
        assert_eq!(out, "> exit\n");
        assert_eq!(summary, SessionSummary::default());
    }
}
