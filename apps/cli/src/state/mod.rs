//! # State Module
//!
//! Manages application state for the shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Shell loop (lib.rs)                        │   │
//! │  │  let config = ConfigState::load_or_default(None);               │   │
//! │  │  let mut list = ListState::new(config.id_policy);               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                 ┌────────────┴─────────────┐                            │
//! │                 ▼                          ▼                            │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │       ListState          │  │      ConfigState         │            │
//! │  │                          │  │                          │            │
//! │  │  ItemStore               │  │  id_policy               │            │
//! │  │  DialogController        │  │  output                  │            │
//! │  │  (&mut per command)      │  │  prompt (read-only)      │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod list;

pub use config::{ConfigError, ConfigResult, ConfigState, OutputFormat};
pub use list::ListState;
