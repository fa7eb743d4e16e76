//! Shared configuration and orchestration for the write-database
//! initialization step. Used by the `db-init` CLI.

pub mod config;
pub mod error;
pub mod infra;

pub use config::db::WriteDbConfig;
pub use error::DbSetupError;
pub use infra::db::{ensure_database_exists, orchestrate_init, MysqlClient};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    db_setup_test_support::logging::init();
}
