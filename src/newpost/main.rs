use clap::Parser;
use newpost::commands;
use newpost::config::{EnvSnapshot, OutputMode, Settings};
use newpost::editor::Platform;
use newpost::error::Result;
use tracing::debug;

mod cli;
use cli::print::{print_messages, print_post_json};
use cli::setup::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = Cli::parse().into_options();
    cli::logging::init(options.verbosity);

    let env = EnvSnapshot::capture();
    let settings = Settings::resolve(options, env, Platform::current())?;
    debug!(?settings, "settings resolved");

    let created = commands::create::run(&settings.directory)?;
    print_messages(&created.messages, settings.output);

    let Some(post) = created.post else {
        return Ok(());
    };
    if settings.output == OutputMode::Json {
        print_post_json(&post)?;
    }

    if let Some(editor) = &settings.editor {
        let launcher = editor.launcher();
        let opened = commands::open::run(&post.path, launcher.as_ref())?;
        print_messages(&opened.messages, settings.output);
    }

    Ok(())
}
