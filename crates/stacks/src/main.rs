//! # Stacks CLI
//!
//! The binary is intentionally thin: the interactive shell lives in
//! `src/cli/`, while this file only invokes `cli::run()` and converts a
//! startup failure into a nonzero exit.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/stacks/src/cli/)                 │
//! │  - Menu loop + prompts (shell.rs)                   │
//! │  - Terminal rendering of CmdResults (print.rs)      │
//! └──────────────────────────┬──────────────────────────┘
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  API Layer (crates/stacksapp/src/api.rs)            │
//! │  - Library facade over the command modules          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Everything below the CLI layer returns structured values; this crate
//! owns all user-facing concerns: prompts, rendering, and process exit.

mod cli;

use std::process;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}
