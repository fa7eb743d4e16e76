use tracing::info;

use crate::config::db::WriteDbConfig;
use crate::error::DbSetupError;
use crate::infra::db::client::MysqlClient;

/// Entry point used by the CLI: read configuration from the environment,
/// then ensure the write database exists.
///
/// Configuration is resolved before the client binary is touched, so a
/// missing variable never results in a connection attempt.
pub async fn orchestrate_init(client: &MysqlClient) -> Result<(), DbSetupError> {
    let cfg = WriteDbConfig::from_env()?;
    ensure_database_exists(client, &cfg).await
}

/// Issues `CREATE DATABASE IF NOT EXISTS <name>;` through the external
/// client, exactly once.
///
/// Safe to re-run: the statement itself is conditional, so a repeat
/// invocation is a no-op on the server. Failures (unreachable host, bad
/// credentials, malformed name, missing privilege) are the client's to
/// report; the exit code is carried back unchanged, with no retry.
pub async fn ensure_database_exists(
    client: &MysqlClient,
    cfg: &WriteDbConfig,
) -> Result<(), DbSetupError> {
    let statement = cfg.create_database_statement();

    info!("db_init=start target={}", cfg.sanitized_summary());

    let status = client.execute(cfg, &statement).await?;
    if !status.success() {
        return match status.code() {
            Some(code) => Err(DbSetupError::Client { code }),
            None => Err(DbSetupError::ClientKilled),
        };
    }

    info!("db_init=done db={}", cfg.db_name);
    Ok(())
}
