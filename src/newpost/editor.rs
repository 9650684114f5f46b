//! External editor integration.
//!
//! How a post gets opened is decided once, at startup, into an
//! [`EditorSettings`] value. [`EditorSettings::launcher`] turns that into one
//! of two [`Launcher`] implementations:
//!
//! - [`DirectProcessLauncher`] spawns an editor on the file and waits for it.
//!   Used for `--editor` and for `$EDITOR` on POSIX systems.
//! - [`NativeAssociationLauncher`] asks Windows to open the file with its
//!   associated application and returns without waiting. When the extension
//!   has no association it falls back to running a plain-text editor directly.

use crate::error::{NewpostError, Result};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// Editor used on POSIX systems when `$EDITOR` is unset or empty.
pub const POSIX_FALLBACK_EDITOR: &str = "vi";

/// Editor used on Windows when the post extension has no association.
pub const WINDOWS_FALLBACK_EDITOR: &str = "notepad";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Posix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

/// An editor program plus the arguments that go before the file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: OsString,
    pub args: Vec<String>,
}

impl EditorCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// The full argv: `[program, args..., path]`.
    pub fn command_line(&self, path: &Path) -> Vec<OsString> {
        let mut argv = Vec::with_capacity(self.args.len() + 2);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().map(OsString::from));
        argv.push(path.as_os_str().to_os_string());
        argv
    }

    /// The program name for messages, lossily converted to UTF-8.
    pub fn display_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Runs the editor on `path` and blocks until it exits.
    pub fn run(&self, path: &Path) -> Result<ExitStatus> {
        let argv = self.command_line(path);
        debug!(?argv, "spawning editor");
        Command::new(&argv[0])
            .args(&argv[1..])
            .status()
            .map_err(|source| NewpostError::Launch {
                editor: self.display_name(),
                source,
            })
    }
}

/// How the post will be opened, resolved once from flags and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSettings {
    /// `--editor` was given.
    Explicit(EditorCommand),
    /// Windows default: the file association, with a fallback editor.
    NativeAssociation { fallback: EditorCommand },
    /// POSIX default: `$EDITOR`, or [`POSIX_FALLBACK_EDITOR`].
    Environment(EditorCommand),
}

impl EditorSettings {
    pub fn resolve(
        editor: Option<String>,
        editor_args: Vec<String>,
        env_editor: Option<OsString>,
        platform: Platform,
    ) -> Result<Self> {
        if let Some(program) = editor {
            if program.trim().is_empty() {
                return Err(NewpostError::Usage("--editor cannot be empty".to_string()));
            }
            return Ok(EditorSettings::Explicit(
                EditorCommand::new(program).with_args(editor_args),
            ));
        }

        if !editor_args.is_empty() {
            return Err(NewpostError::Usage(
                "--editor-arg requires --editor".to_string(),
            ));
        }

        let settings = match platform {
            Platform::Windows => EditorSettings::NativeAssociation {
                fallback: EditorCommand::new(WINDOWS_FALLBACK_EDITOR),
            },
            Platform::Posix => {
                let program = env_editor
                    .filter(|e| !e.to_string_lossy().trim().is_empty())
                    .unwrap_or_else(|| OsString::from(POSIX_FALLBACK_EDITOR));
                EditorSettings::Environment(EditorCommand::new(program))
            }
        };
        Ok(settings)
    }

    pub fn launcher(&self) -> Box<dyn Launcher> {
        match self {
            EditorSettings::Explicit(command) | EditorSettings::Environment(command) => {
                Box::new(DirectProcessLauncher::new(command.clone()))
            }
            EditorSettings::NativeAssociation { fallback } => {
                Box::new(NativeAssociationLauncher::new(fallback.clone()))
            }
        }
    }
}

/// What happened after a launch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// An editor ran in the foreground and has exited.
    Exited(ExitStatus),
    /// The OS took over; nothing to wait for.
    Detached,
}

/// Result of asking the OS to open a file with its associated application.
#[derive(Debug)]
pub enum NativeLaunch {
    Launched,
    NoAssociation,
    OtherError(io::Error),
}

pub trait Launcher {
    fn open(&self, path: &Path) -> Result<LaunchOutcome>;

    /// Short name for messages, e.g. the editor program.
    fn name(&self) -> String;
}

pub struct DirectProcessLauncher {
    command: EditorCommand,
}

impl DirectProcessLauncher {
    pub fn new(command: EditorCommand) -> Self {
        Self { command }
    }
}

impl Launcher for DirectProcessLauncher {
    fn open(&self, path: &Path) -> Result<LaunchOutcome> {
        let status = self.command.run(path)?;
        debug!(editor = ?self.command.program, %status, "editor exited");
        Ok(LaunchOutcome::Exited(status))
    }

    fn name(&self) -> String {
        self.command.display_name()
    }
}

pub struct NativeAssociationLauncher {
    fallback: EditorCommand,
}

impl NativeAssociationLauncher {
    pub fn new(fallback: EditorCommand) -> Self {
        Self { fallback }
    }

    /// Turns a native launch attempt into an outcome, running the fallback
    /// editor only when no association exists.
    pub fn settle(&self, attempt: NativeLaunch, path: &Path) -> Result<LaunchOutcome> {
        match attempt {
            NativeLaunch::Launched => {
                debug!(path = %path.display(), "opened with associated application");
                Ok(LaunchOutcome::Detached)
            }
            NativeLaunch::NoAssociation => {
                info!(
                    fallback = ?self.fallback.program,
                    "no application associated with post files, using fallback editor"
                );
                let status = self.fallback.run(path)?;
                Ok(LaunchOutcome::Exited(status))
            }
            NativeLaunch::OtherError(source) => Err(NewpostError::Launch {
                editor: self.name(),
                source,
            }),
        }
    }
}

impl Launcher for NativeAssociationLauncher {
    fn open(&self, path: &Path) -> Result<LaunchOutcome> {
        self.settle(shell_open(path), path)
    }

    fn name(&self) -> String {
        "default application".to_string()
    }
}

/// Splits `path` into the directory `cmd` runs in and the bare file name
/// handed to `start`. Post names are `<uuid>.rst`, which contain none of the
/// characters `cmd` treats specially (`^`, `%`, `&`), while the directory
/// part is never seen by `cmd`'s parser.
#[cfg_attr(not(windows), allow(dead_code))]
fn start_target(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| path.as_os_str().to_os_string());
    (dir, file)
}

/// Opens the file through `cmd /C start`, after checking with `assoc` that
/// its extension is registered. `start` itself pops a dialog instead of
/// failing when there is no association, so the check has to come first.
#[cfg(windows)]
fn shell_open(path: &Path) -> NativeLaunch {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{}", ext),
        None => return NativeLaunch::NoAssociation,
    };

    match Command::new("cmd").args(["/C", "assoc"]).arg(&ext).output() {
        Ok(output) if !output.status.success() => return NativeLaunch::NoAssociation,
        Ok(_) => {}
        Err(e) => return NativeLaunch::OtherError(e),
    }

    let (dir, file) = start_target(path);
    match Command::new("cmd")
        .current_dir(dir)
        .args(["/C", "start", ""])
        .arg(file)
        .spawn()
    {
        Ok(_) => NativeLaunch::Launched,
        Err(e) => NativeLaunch::OtherError(e),
    }
}

#[cfg(not(windows))]
fn shell_open(_path: &Path) -> NativeLaunch {
    NativeLaunch::OtherError(io::Error::new(
        io::ErrorKind::Unsupported,
        "file associations are only supported on Windows",
    ))
}

/// Opens `path` with the given launcher.
pub fn open_in_editor(path: &Path, launcher: &dyn Launcher) -> Result<LaunchOutcome> {
    info!(path = %path.display(), editor = %launcher.name(), "opening post");
    launcher.open(path)
}
