use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbSetupError {
    #[error("Configuration error: {message}")]
    Config { message: String },
    #[error("Failed to launch database client: {message}")]
    Spawn { message: String },
    #[error("Database client exited with code {code}")]
    Client { code: i32 },
    #[error("Database client was terminated by a signal")]
    ClientKilled,
}

impl DbSetupError {
    /// Process exit code the `db-init` binary reports for this error: the
    /// client's own code where one exists, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            DbSetupError::Client { code } => *code,
            _ => 1,
        }
    }
}
