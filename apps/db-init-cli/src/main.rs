use std::path::PathBuf;

use clap::Parser;
use db_setup::{orchestrate_init, MysqlClient};

#[derive(Parser)]
#[command(name = "db-init")]
#[command(about = "Ensures the write database exists before the backend boots")]
struct Args {
    /// Database client binary used to issue the statement
    #[arg(long, default_value = "mysql")]
    client: PathBuf,
}

#[tokio::main]
async fn main() {
    // Pick up a local .env first; deployed environments set the variables
    // directly.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("db_init_cli=info,db_setup=info")
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let client = MysqlClient::new(args.client);
    if let Err(e) = orchestrate_init(&client).await {
        eprintln!("Database init failed: {e}");
        std::process::exit(e.exit_code());
    }
}
