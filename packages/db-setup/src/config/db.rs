use std::env;

use crate::error::DbSetupError;

/// Connection parameters for the write database, sourced from the
/// environment at invocation time.
///
/// All five values are required. None of them is validated or parsed here;
/// the external client owns validation, and a malformed value surfaces as
/// that client's error. The port stays a string and is passed through
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteDbConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub db_name: String,
}

impl WriteDbConfig {
    /// Reads the five `WRITE_DB_*` variables, failing on the first one that
    /// is unset. Called before the client binary is touched.
    pub fn from_env() -> Result<Self, DbSetupError> {
        Ok(Self {
            host: must_var("WRITE_DB_HOST")?,
            port: must_var("WRITE_DB_PORT")?,
            user: must_var("WRITE_DB_USER")?,
            password: must_var("WRITE_DB_PASS")?,
            db_name: must_var("WRITE_DB_NAME")?,
        })
    }

    /// The single administrative statement this tool ever issues.
    pub fn create_database_statement(&self) -> String {
        format!("CREATE DATABASE IF NOT EXISTS {};", self.db_name)
    }

    /// Connection summary with the password masked, for logging.
    pub fn sanitized_summary(&self) -> String {
        format!(
            "{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.db_name
        )
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, DbSetupError> {
    env::var(name).map_err(|_| DbSetupError::Config {
        message: format!("Required environment variable '{name}' is not set"),
    })
}
