//! Integration test harness.
//!
//! Wires up the `api_tests` module so cargo compiles this directory as a
//! single `integration` test target. The tests themselves are `#[ignore]`d
//! and run against a live server with `cargo test -- --ignored`.

mod api_tests;
