//! Scenario: Lending, reserving and handing over one book
//!
//! Journey: a librarian registers two members, buys a book, lends it to the
//! first member, lets the second queue for it, then hands it over.
//!
//! Success Criteria:
//! - A lent book cannot be lent again or sold
//! - A reservation blocks the sale and is consumed when used
//! - A member can only leave once they hold nothing

use crate::common::*;
use crate::{assert_no_failures, assert_output_contains};

/// SCENARIO: A second loan of the same book is refused
#[test]
fn scenario_a_book_cannot_be_lent_twice() {
    let env = TestEnv::new();
    let result = env.run_script(
        "\
inscrire M1 555-0101 1
acquerir B1 Author 2024-01-15
preter 1 1
preter 1 1
",
    );

    assert_output_contains!(result, "loan 1 created: member 1 borrows book 1");
    assert_eq!(
        result.failures(),
        vec!["**** book 1 is already lent to member 1".to_string()]
    );
}

/// SCENARIO: A reserved book cannot be sold
#[test]
fn scenario_b_reserved_book_cannot_be_sold() {
    let env = TestEnv::new();
    let result = env.run_script(
        "\
inscrire M1 555-0101 1
acquerir B1 Author 2024-01-15
preter 1 1
inscrire M2 555-0102 1
reserver 2 1
vendre 1
",
    );

    assert_output_contains!(result, "reservation 1 placed: member 2 waits for book 1");
    assert_eq!(
        result.failures(),
        vec!["**** book 1 is reserved by member 2".to_string()]
    );
}

/// SCENARIO: Returning the book lets the head of the queue borrow it
#[test]
fn scenario_c_reservation_becomes_a_loan() {
    let env = TestEnv::new();
    let result = env.run_script(
        "\
inscrire M1 555-0101 1
acquerir B1 Author 2024-01-15
preter 1 1
inscrire M2 555-0102 1
reserver 2 1
retourner 1
utiliser 1
listerReservations 1
listerLivres
",
    );

    assert_no_failures!(result);
    assert_output_contains!(result, "loan 1 closed: member 1 returned book 1");
    assert_output_contains!(
        result,
        "reservation 1 used: loan 2 created, member 2 borrows book 1"
    );
    assert_output_contains!(result, "no reservations for book 1");
    assert_output_contains!(
        result,
        "book 1: \"B1\" by Author (2024-01-15), lent to member 2 (loan 2)"
    );
}

/// SCENARIO: Withdrawal is refused while a loan is active, allowed once clear
#[test]
fn scenario_d_withdraw_only_when_clear() {
    let env = TestEnv::new();
    let result = env.run_script(
        "\
inscrire M1 555-0101 2
inscrire M2 555-0102 1
acquerir B1 Author 2024-01-15
desinscrire 2
preter 1 1
desinscrire 1
retourner 1
desinscrire 1
listerMembres
",
    );

    assert_output_contains!(result, "member 2 withdrawn: M2");
    assert_output_contains!(result, "member 1 withdrawn: M1");
    assert_eq!(
        result.failures(),
        vec!["**** member 1 still has book 1 (loan 1)".to_string()]
    );
    assert_output_contains!(result, "no members");
}

/// SCENARIO: The whole desk session split over two process runs
///
/// Committed work from the first run is what the second run sees.
#[test]
fn scenario_session_across_restarts() {
    let env = TestEnv::new();

    let morning = env.run_script(
        "\
-- morning: catalogue and first loan
inscrire \"Ada Lovelace\" 555-0101 2
inscrire \"Charles Babbage\" 555-0102 1
acquerir \"Le Horla\" Maupassant 1887-05-01
preter 1 1
reserver 2 1
",
    );
    assert_no_failures!(morning);

    let evening = env.run_script(
        "\
-- evening: return and hand over
retourner 1
utiliser 1
listerPrets 1
listerMembres
",
    );
    assert_no_failures!(evening);
    assert_output_contains!(
        evening,
        "member 1: Ada Lovelace, phone 555-0101, 0/2 loans"
    );
    assert_output_contains!(
        evening,
        "member 2: Charles Babbage, phone 555-0102, 1/1 loans"
    );
    let history: Vec<String> = evening
        .results()
        .into_iter()
        .filter(|l| l.starts_with("loan 1: book 1"))
        .collect();
    assert_eq!(history.len(), 1);
    assert!(history[0].contains(", returned "), "{}", history[0]);
}
