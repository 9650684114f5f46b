use clap::{Parser, ValueEnum};
use newpost::config::{Options, OutputMode, Verbosity};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputMode {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => OutputMode::Text,
            OutputArg::Json => OutputMode::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "newpost", bin_name = "newpost", version = get_version())]
#[command(about = "Create a new blog post stub and open it in an editor", long_about = None)]
pub struct Cli {
    /// Directory to create the post in [default: current directory]
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Editor to open the post with [default: $EDITOR, or the system handler on Windows]
    #[arg(short, long, value_name = "EDITOR")]
    pub editor: Option<String>,

    /// Extra editor argument, placed before the file path (repeatable)
    #[arg(long = "editor-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub editor_args: Vec<String>,

    /// Create the post without opening an editor
    #[arg(long)]
    pub no_editor: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputArg::Text)]
    pub output: OutputArg,

    /// Log progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Log debugging detail (overrides --verbose)
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    pub fn into_options(self) -> Options {
        Options {
            directory: self.directory,
            editor: self.editor,
            editor_args: self.editor_args,
            no_editor: self.no_editor,
            verbosity: Verbosity::from_flags(self.verbose, self.debug),
            output: self.output.into(),
        }
    }
}
