use crate::commands::{CmdMessage, CmdResult};
use crate::editor::{open_in_editor, LaunchOutcome, Launcher};
use crate::error::Result;
use std::path::Path;

pub fn run(path: &Path, launcher: &dyn Launcher) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match open_in_editor(path, launcher)? {
        LaunchOutcome::Detached => result.add_message(CmdMessage::info(format!(
            "Opened in {}",
            launcher.name()
        ))),
        LaunchOutcome::Exited(status) if !status.success() => result.add_message(
            CmdMessage::warning(format!("{} exited with {}", launcher.name(), status)),
        ),
        LaunchOutcome::Exited(_) => {}
    }
    Ok(result)
}
