use colored::Colorize;
use newpost::commands::{CmdMessage, MessageLevel};
use newpost::config::OutputMode;
use newpost::error::Result;
use newpost::model::Post;

/// Prints command messages. In JSON mode they go to stderr.
pub fn print_messages(messages: &[CmdMessage], output: OutputMode) {
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        match output {
            OutputMode::Text => println!("{}", styled),
            OutputMode::Json => eprintln!("{}", styled),
        }
    }
}

/// Prints the created post as a single JSON object.
pub fn print_post_json(post: &Post) -> Result<()> {
    println!("{}", serde_json::to_string(post)?);
    Ok(())
}
