use std::path::PathBuf;
use std::process::ExitStatus;

use tokio::process::Command;
use tracing::debug;

use crate::config::db::WriteDbConfig;
use crate::error::DbSetupError;

/// External database client binary, `mysql` in deployments.
///
/// All network communication, authentication, and SQL execution happens in
/// the client process; this wrapper only marshals arguments and reports the
/// child's exit status.
pub struct MysqlClient {
    program: PathBuf,
}

impl MysqlClient {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Runs the client once with the connection parameters and a single
    /// statement, waiting for it to finish.
    ///
    /// Stdio is inherited: whatever the client writes goes straight to the
    /// caller's stdout/stderr.
    pub async fn execute(
        &self,
        cfg: &WriteDbConfig,
        statement: &str,
    ) -> Result<ExitStatus, DbSetupError> {
        debug!("client={} statement={}", self.program.display(), statement);

        Command::new(&self.program)
            .arg("--host")
            .arg(&cfg.host)
            .arg("--port")
            .arg(&cfg.port)
            .arg("--user")
            .arg(&cfg.user)
            .arg("--password")
            .arg(&cfg.password)
            .arg("--database")
            .arg(&cfg.db_name)
            .arg("--command")
            .arg(statement)
            .status()
            .await
            .map_err(|e| DbSetupError::Spawn {
                message: format!("failed to run '{}': {e}", self.program.display()),
            })
    }
}
