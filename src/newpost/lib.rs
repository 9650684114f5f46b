//! # newpost
//!
//! Creates a blog post stub named after a fresh UUID, stamps it with
//! reStructuredText field-list metadata and opens it in an editor.
//!
//! ```text
//! :date: 2024-03-09
//! :timezone: +01:00
//! :uuid: 0f8fad5b-d9cb-469f-a165-70867728950e
//! ```
//!
//! ## Layers
//!
//! - CLI (`cli/`, wired by `main.rs`): parses arguments, installs logging,
//!   prints results. The only place that knows about stdout, stderr and exit
//!   codes.
//! - Commands ([`commands`]): `create` writes the post, `open` hands it to a
//!   launcher. Both return a [`commands::CmdResult`] with messages for the UI.
//! - Support: [`config`] resolves [`config::Settings`] once at startup,
//!   [`directory`] validates the target directory, [`editor`] holds the
//!   launchers, [`model`] the post record.
//!
//! Library code never prints. Diagnostics go through `tracing`; without a
//! subscriber installed they cost nothing, which keeps the commands
//! testable on their own.

pub mod commands;
pub mod config;
pub mod directory;
pub mod editor;
pub mod error;
pub mod model;
