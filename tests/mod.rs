//! Integration tests for cinetui
//!
//! Tests are organized by component:
//! - tmdb_test: TMDB API client tests
//! - fetch_test: Fetch state machine and cancellation tests
//! - ui_test: UI rendering tests

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
