//! Scenario: Several members queue for one popular book
//!
//! Journey: the book is out, three members reserve it, one cancels, and the
//! book is handed down the queue in arrival order.
//!
//! Success Criteria:
//! - Only the head of the queue can use a reservation
//! - Cancelling moves everyone behind up
//! - Renewal is refused while someone waits

use crate::common::*;
use crate::{assert_no_failures, assert_output_contains};

const SETUP: &str = "\
inscrire Holder 555-0100 1
inscrire First 555-0101 1
inscrire Second 555-0102 1
inscrire Third 555-0103 1
acquerir Dune Herbert 1965-08-01
preter 1 1
reserver 2 1
reserver 3 1
reserver 4 1
";

/// SCENARIO: Members behind the head cannot jump the queue
#[test]
fn scenario_queue_is_served_in_order() {
    let env = TestEnv::new();
    let setup = env.run_script(SETUP);
    assert_no_failures!(setup);

    let result = env.run_script(
        "\
renouveler 1
retourner 1
utiliser 2
utiliser 1
",
    );

    assert_eq!(
        result.failures(),
        vec![
            "**** book 1 is reserved by member 2; loan 1 cannot be renewed".to_string(),
            "**** member 2 is ahead in the queue for book 1 (reservation 1)".to_string(),
        ]
    );
    assert_output_contains!(
        result,
        "reservation 1 used: loan 2 created, member 2 borrows book 1"
    );
}

/// SCENARIO: Cancelling the head promotes the next member
#[test]
fn scenario_cancel_promotes_next_member() {
    let env = TestEnv::new();
    env.run_script(SETUP);

    let result = env.run_script(
        "\
annuler 1
listerReservations 1
",
    );

    assert_no_failures!(result);
    assert_output_contains!(
        result,
        "reservation 1 cancelled: member 2 no longer waits for book 1"
    );
    let queue: Vec<String> = result
        .results()
        .into_iter()
        .filter(|l| l.contains(". reservation "))
        .collect();
    assert_eq!(queue.len(), 2);
    assert!(queue[0].starts_with("1. reservation 2: member 3"), "{}", queue[0]);
    assert!(queue[1].starts_with("2. reservation 3: member 4"), "{}", queue[1]);
}

/// SCENARIO: Reservations are refused for books on the shelf or already held
#[test]
fn scenario_reservation_preconditions() {
    let env = TestEnv::new();
    env.run_script(SETUP);

    let result = env.run_script(
        "\
acquerir Emma Austen 1815-12-23
reserver 2 2
reserver 1 1
reserver 2 1
",
    );

    assert_eq!(
        result.failures(),
        vec![
            "**** loan for book 2 does not exist".to_string(),
            "**** member 1 already has book 1".to_string(),
            "**** member 2 already reserved book 1 (reservation 1)".to_string(),
        ]
    );
}
