pub mod client;
pub mod core;

pub use client::MysqlClient;
pub use core::{ensure_database_exists, orchestrate_init};
