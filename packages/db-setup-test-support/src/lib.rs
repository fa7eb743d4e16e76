//! Test support utilities for the db-setup crates.
//!
//! Provides a recording stand-in for the external database client and
//! unified logging initialization for unit and integration tests.

pub mod fake_client;
pub mod logging;

pub use fake_client::FakeClient;
