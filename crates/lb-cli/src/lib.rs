//! `lb-cli` — the `ladybug` command loop.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`command`] | `Command` — one parsed input line, `CommandError`          |
//! | [`session`] | `Session<W>` — runs commands against a `Sim`, writes to `W`|
//! | [`config`]  | TOML loading for `SimConfig`                               |
//! | [`logging`] | `tracing-subscriber` setup                                 |
//!
//! Command output and trace lines go to the session's writer (stdout in the
//! binary); diagnostics go through `tracing` to stderr.

pub mod command;
pub mod config;
pub mod logging;
pub mod session;


pub use command::{Command, CommandError};
pub use config::{load_config, parse_config};
pub use session::{Flow, Session};
