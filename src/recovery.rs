//! Source recovery tool launcher.

use std::path::Path;
use std::process::Command;

use log::{info, warn};

/// Launches the source recovery command over the output folder.
///
/// The folder path is appended as the command's final argument. The launch is
/// fire-and-forget: the child is not waited on and its outcome is not
/// inspected. A failed spawn (e.g. the program is not installed) is logged as
/// a warning and otherwise ignored.
pub fn launch_recovery_tool(command: &[String], output_dir: &Path) {
    let Some((program, args)) = command.split_first() else {
        warn!("Recovery command is empty; nothing to launch");
        return;
    };

    info!(
        "Map files were downloaded; launching {} over {}",
        program,
        output_dir.display()
    );
    match Command::new(program).args(args).arg(output_dir).spawn() {
        Ok(child) => info!("Recovery tool started (pid {})", child.id()),
        Err(e) => warn!("Failed to launch recovery tool {program}: {e}"),
    }
}
