//! Peek - a lightweight viewer and shell for SQLite database files.

use std::fs;
use std::path::Path;

use db_peek::cli::Cli;
use db_peek::config::Config;
use db_peek::error::{PeekError, Result};
use db_peek::format;
use db_peek::query::QueryOutcome;
use db_peek::repl::Repl;
use db_peek::session::Session;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so shell output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    let config = Config::load_from_file(&config_path)?;

    let mut session = Session::new();
    if let Some(path) = &cli.file {
        let bytes = fs::read(path)
            .map_err(|e| PeekError::io(format!("Cannot read {}: {e}", path.display())))?;
        let snapshot = session.load_from_bytes(&bytes)?;
        info!(
            path = %path.display(),
            tables = snapshot.tables.len(),
            "database file loaded"
        );
    }

    if !cli.execute.is_empty() {
        run_one_shot(&mut session, &cli, &config)?;
        if let Some(path) = &cli.export {
            write_image(&session, path)?;
        }
        return Ok(());
    }

    let mut repl = Repl::new(session, config.display);
    repl.run().map_err(|e| PeekError::io(e.to_string()))?;

    if let Some(path) = &cli.export {
        write_image(repl.session(), path)?;
    }

    Ok(())
}

/// Runs the given statements in order and prints each outcome.
fn run_one_shot(session: &mut Session, cli: &Cli, config: &Config) -> Result<()> {
    for sql in &cli.execute {
        let Some(outcome) = session.execute(sql)? else {
            continue;
        };

        if cli.json {
            let json = match &outcome {
                QueryOutcome::Rows(set) => serde_json::to_string_pretty(set)
                    .map_err(|e| PeekError::io(e.to_string()))?,
                QueryOutcome::Empty => "{\"columns\":[],\"rows\":[]}".to_string(),
            };
            println!("{json}");
        } else {
            println!("{}", format::render_outcome(&outcome, &config.display));
        }
    }

    Ok(())
}

/// Serializes current session state and writes it to disk.
fn write_image(session: &Session, path: &Path) -> Result<()> {
    let bytes = session.export_bytes()?;
    fs::write(path, &bytes)
        .map_err(|e| PeekError::io(format!("Cannot write {}: {e}", path.display())))?;
    info!(path = %path.display(), bytes = bytes.len(), "database image exported");
    Ok(())
}
