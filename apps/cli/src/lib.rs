//! # Shoplist Shell Library
//!
//! Core library for the `shoplist` terminal application.
//!
//! ## Module Organization
//! ```text
//! shoplist_cli/
//! ├── lib.rs          ◄─── You are here (logging, config & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── list.rs     ◄─── Item store + dialog session
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── ListResponse snapshot
//! │   ├── items.rs    ◄─── list / delete row
//! │   └── dialog.rs   ◄─── open / draft / confirm / cancel
//! ├── shell.rs        ◄─── Line parsing and the read-dispatch-render loop
//! ├── view.rs         ◄─── Text and JSON rendering
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;
pub mod view;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ConfigState, ListState};

/// Runs the shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr            │
/// │     • Default: warn, info for shoplist; override with RUST_LOG          │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • shoplist.toml, then SHOPLIST_* environment variables              │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • Empty ItemStore with the configured id policy                     │
/// │     • Closed dialog                                                     │
/// │                                                                         │
/// │  4. Run Shell ────────────────────────────────────────────────────────► │
/// │     • One command per line, re-render after each                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    info!("Starting Shoplist");

    let config = ConfigState::load_or_default(None);
    info!(id_policy = %config.id_policy, output = %config.output, "Configuration loaded");

    let mut list = ListState::new(config.id_policy);

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_shell(&mut list, &config, stdin.lock(), stdout.lock())?;

    info!(items = list.store().len(), "Shoplist exiting");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shoplist_cli=debug` - Show every command
/// - Default: WARN, INFO for the shell
///
/// Logs go to stderr so they never mix with the rendered list.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shoplist_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
