//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that stdout contains a line equal to the expected text.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "loan 1 created: member 1 borrows book 1");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $line:expr) => {
        assert!(
            $result.stdout.lines().any(|l| l == $line),
            "Expected line '{}' in output.\nstdout:\n{}\nstderr:\n{}",
            $line,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that no command in the session failed.
#[macro_export]
macro_rules! assert_no_failures {
    ($result:expr) => {
        let failures = $result.failures();
        assert!(
            failures.is_empty(),
            "Expected no failed commands, got:\n{}",
            failures.join("\n")
        );
    };
}
