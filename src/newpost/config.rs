//! Run settings, resolved once at startup.
//!
//! Everything that depends on the process environment is read into an
//! [`EnvSnapshot`] first, so resolution itself is a pure function of its
//! inputs and nothing further down reads environment variables.

use crate::directory::resolve_directory;
use crate::editor::{EditorSettings, Platform};
use crate::error::Result;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::Level;

pub const EDITOR_ENV: &str = "EDITOR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only.
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `debug` wins over `verbose` when both are set.
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn level(self) -> Level {
        match self {
            Verbosity::Normal => Level::WARN,
            Verbosity::Verbose => Level::INFO,
            Verbosity::Debug => Level::DEBUG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

/// Raw options as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub directory: Option<PathBuf>,
    pub editor: Option<String>,
    pub editor_args: Vec<String>,
    pub no_editor: bool,
    pub verbosity: Verbosity,
    pub output: OutputMode,
}

/// The parts of the process environment that settings depend on.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    pub editor: Option<OsString>,
    /// `None` when the working directory cannot be read, e.g. after it was
    /// removed. Only an error if no directory argument is given.
    pub cwd: Option<PathBuf>,
}

impl EnvSnapshot {
    pub fn capture() -> Self {
        Self {
            editor: env::var_os(EDITOR_ENV),
            cwd: env::current_dir().ok(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Validated target directory.
    pub directory: PathBuf,
    /// `None` when no editor should be launched.
    pub editor: Option<EditorSettings>,
    pub verbosity: Verbosity,
    pub output: OutputMode,
}

impl Settings {
    pub fn resolve(options: Options, env: EnvSnapshot, platform: Platform) -> Result<Self> {
        let editor = if options.no_editor {
            None
        } else {
            Some(EditorSettings::resolve(
                options.editor,
                options.editor_args,
                env.editor,
                platform,
            )?)
        };

        let directory = resolve_directory(options.directory.as_deref(), env.cwd.as_deref())?;

        Ok(Self {
            directory,
            editor,
            verbosity: options.verbosity,
            output: options.output,
        })
    }
}
