//! Common test utilities for Biblio integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp store and home
//! - Assertion macros: `assert_output_contains!`, `assert_no_failures!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use env::*;
