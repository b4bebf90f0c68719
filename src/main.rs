use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use csv2sql::csv_to_sql;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "csv2sql",
    version,
    about = "Turn a CSV file into a SQL query that selects its rows as an in-memory table"
)]
struct Cli {
    /// CSV file to convert; the first record is the header
    path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout is reserved for the generated sql
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let sql = csv_to_sql(&cli.path)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", sql).context("failed to write sql to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}
