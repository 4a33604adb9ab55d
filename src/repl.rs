//! Interactive shell for Peek.
//!
//! A line-oriented loop over an owned [`Session`]: dot commands for the
//! session lifecycle (open, tables, browse, save), everything else executed
//! as SQL. Handlers return a transport-agnostic [`Reply`] so the loop can be
//! tested without a terminal; this module also plays the file I/O
//! collaborator role the session core deliberately does not.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::DisplayConfig;
use crate::error::PeekError;
use crate::format::render_outcome;
use crate::session::Session;
use tracing::info;

/// Help text displayed for the .help command.
const HELP_TEXT: &str = "Available commands:
  .open <path>    - Load a database file (replaces the current session)
  .tables         - List tables of the loaded database
  .browse <table> - Shorthand for SELECT * FROM <table>
  .save <path>    - Write the current database state to a file
  .help           - Show this help message
  .quit, .exit    - Exit the shell

Anything else is executed as a single SQL statement.";

/// Output of handling one input line.
#[derive(Debug)]
pub enum Reply {
    /// Nothing to print (blank input).
    None,
    /// Informational output (results, confirmations).
    Info(String),
    /// Error output.
    Error(String),
    /// The shell should exit.
    Exit,
}

/// Interactive shell state: one session plus display options.
pub struct Repl {
    session: Session,
    display: DisplayConfig,
}

impl Repl {
    /// Creates a shell around an existing session.
    pub fn new(session: Session, display: DisplayConfig) -> Self {
        Self { session, display }
    }

    /// Returns the underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handles one input line and returns what to show for it.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();

        if line.is_empty() {
            return Reply::None;
        }

        if line.starts_with('.') {
            return self.handle_command(line);
        }

        self.handle_sql(line)
    }

    /// Handles a dot command.
    fn handle_command(&mut self, line: &str) -> Reply {
        let parts: Vec<&str> = line.splitn(2, ' ').collect();
        let command = parts[0].to_lowercase();
        let args = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match command.as_str() {
            ".help" => Reply::Info(HELP_TEXT.to_string()),
            ".quit" | ".exit" => Reply::Exit,
            ".open" => {
                if args.is_empty() {
                    return Reply::Error("Usage: .open <path>".to_string());
                }
                self.handle_open(Path::new(args))
            }
            ".tables" => self.handle_tables(),
            ".browse" => {
                if args.is_empty() {
                    return Reply::Error("Usage: .browse <table>".to_string());
                }
                // The table name is spliced in verbatim, like any other
                // statement the user could have typed.
                self.handle_sql(&format!("SELECT * FROM {args}"))
            }
            ".save" => {
                if args.is_empty() {
                    return Reply::Error("Usage: .save <path>".to_string());
                }
                self.handle_save(Path::new(args))
            }
            _ => Reply::Error(format!(
                "Unknown command: {command}. Type .help for available commands."
            )),
        }
    }

    /// Handles .open: read the image from disk and load it.
    fn handle_open(&mut self, path: &Path) -> Reply {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                return Reply::Error(format!("Cannot read {}: {e}", path.display()));
            }
        };

        match self.session.load_from_bytes(&bytes) {
            Ok(snapshot) => {
                info!(path = %path.display(), tables = snapshot.tables.len(), "database opened");
                Reply::Info(format!(
                    "Loaded {} ({} tables)",
                    path.display(),
                    snapshot.tables.len()
                ))
            }
            Err(e) => Reply::Error(render_error(&e)),
        }
    }

    /// Handles .tables: list the table names derived at load time.
    fn handle_tables(&self) -> Reply {
        if !self.session.is_loaded() {
            return Reply::Error(render_error(&PeekError::NoActiveSession));
        }

        let tables = self.session.tables();
        if tables.is_empty() {
            Reply::Info("No tables.".to_string())
        } else {
            Reply::Info(tables.join("\n"))
        }
    }

    /// Handles .save: export the current state and write it to disk.
    fn handle_save(&mut self, path: &Path) -> Reply {
        let bytes = match self.session.export_bytes() {
            Ok(bytes) => bytes,
            Err(e) => return Reply::Error(render_error(&e)),
        };

        match fs::write(path, &bytes) {
            Ok(()) => {
                info!(path = %path.display(), bytes = bytes.len(), "database saved");
                Reply::Info(format!("Wrote {} bytes to {}", bytes.len(), path.display()))
            }
            Err(e) => Reply::Error(format!("Cannot write {}: {e}", path.display())),
        }
    }

    /// Executes one SQL statement and renders the outcome.
    fn handle_sql(&mut self, sql: &str) -> Reply {
        match self.session.execute(sql) {
            Ok(Some(outcome)) => Reply::Info(render_outcome(&outcome, &self.display)),
            Ok(None) => Reply::None,
            Err(e) => Reply::Error(render_error(&e)),
        }
    }

    /// Runs the interactive loop over stdin until exit or EOF.
    pub fn run(&mut self) -> io::Result<()> {
        println!("peek - SQLite database shell");
        println!("Type .help for commands, .quit to exit");
        println!();

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("peek> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };

            match self.handle_line(&line?) {
                Reply::None => {}
                Reply::Info(text) => println!("{text}"),
                Reply::Error(text) => eprintln!("{text}"),
                Reply::Exit => break,
            }
        }

        Ok(())
    }
}

/// Rebuilds the user-facing message for an error from its structured kind.
pub fn render_error(err: &PeekError) -> String {
    match err {
        PeekError::Load(msg) => format!("Error loading database: {msg}"),
        PeekError::Query(msg) => format!("Error executing query:\n  {msg}"),
        PeekError::NoActiveSession => {
            "No database is loaded. Use .open <path> first.".to_string()
        }
        other => other.to_string(),
    }
}
