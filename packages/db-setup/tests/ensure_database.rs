//! Integration tests for the write-database initialization flow, driven
//! against a recording fake client.

use std::env;

use db_setup::{ensure_database_exists, orchestrate_init, DbSetupError, MysqlClient, WriteDbConfig};
use db_setup_test_support::FakeClient;
use serial_test::serial;

fn test_config() -> WriteDbConfig {
    WriteDbConfig {
        host: "localhost".to_string(),
        port: "3306".to_string(),
        user: "root".to_string(),
        password: "pw".to_string(),
        db_name: "app_test".to_string(),
    }
}

fn set_write_db_env() {
    env::set_var("WRITE_DB_HOST", "localhost");
    env::set_var("WRITE_DB_PORT", "3306");
    env::set_var("WRITE_DB_USER", "root");
    env::set_var("WRITE_DB_PASS", "pw");
    env::set_var("WRITE_DB_NAME", "app_test");
}

fn clear_write_db_env() {
    env::remove_var("WRITE_DB_HOST");
    env::remove_var("WRITE_DB_PORT");
    env::remove_var("WRITE_DB_USER");
    env::remove_var("WRITE_DB_PASS");
    env::remove_var("WRITE_DB_NAME");
}

#[tokio::test]
async fn issues_exactly_the_conditional_create_statement() {
    let fake = FakeClient::with_exit_code(0);
    let client = MysqlClient::new(fake.program());

    ensure_database_exists(&client, &test_config())
        .await
        .expect("init should succeed");

    let invocations = fake.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(
        invocations[0],
        vec![
            "--host",
            "localhost",
            "--port",
            "3306",
            "--user",
            "root",
            "--password",
            "pw",
            "--database",
            "app_test",
            "--command",
            "CREATE DATABASE IF NOT EXISTS app_test;",
        ]
    );
}

#[tokio::test]
async fn repeated_invocation_succeeds_and_runs_the_client_again() {
    let fake = FakeClient::with_exit_code(0);
    let client = MysqlClient::new(fake.program());
    let cfg = test_config();

    ensure_database_exists(&client, &cfg)
        .await
        .expect("first run");
    ensure_database_exists(&client, &cfg)
        .await
        .expect("second run");

    let invocations = fake.invocations();
    assert_eq!(invocations.len(), 2);
    assert_eq!(invocations[0], invocations[1]);
}

#[tokio::test]
async fn surfaces_the_client_exit_code() {
    let fake = FakeClient::with_exit_code(3);
    let client = MysqlClient::new(fake.program());

    let err = ensure_database_exists(&client, &test_config())
        .await
        .expect_err("non-zero client exit must fail");

    assert!(matches!(err, DbSetupError::Client { code: 3 }));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn missing_client_binary_is_a_spawn_error() {
    let client = MysqlClient::new("/nonexistent/db-client");

    let err = ensure_database_exists(&client, &test_config())
        .await
        .expect_err("unlaunchable client must fail");

    assert!(matches!(err, DbSetupError::Spawn { .. }));
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
#[serial]
async fn orchestrate_reads_the_environment() {
    set_write_db_env();

    let fake = FakeClient::with_exit_code(0);
    let client = MysqlClient::new(fake.program());

    orchestrate_init(&client).await.expect("init should succeed");
    assert_eq!(fake.invocations().len(), 1);

    clear_write_db_env();
}

#[tokio::test]
#[serial]
async fn orchestrate_fails_before_the_client_runs_when_a_variable_is_unset() {
    set_write_db_env();
    env::remove_var("WRITE_DB_NAME");

    let fake = FakeClient::with_exit_code(0);
    let client = MysqlClient::new(fake.program());

    let err = orchestrate_init(&client)
        .await
        .expect_err("missing variable must fail");

    assert!(matches!(err, DbSetupError::Config { .. }));
    assert!(err.to_string().contains("WRITE_DB_NAME"));
    assert!(fake.invocations().is_empty());

    clear_write_db_env();
}
