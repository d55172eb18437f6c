//! Open files in the platform's default application

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Build the command that opens `path` with the system handler
pub fn opener_command(path: &Path) -> Command {
    #[cfg(target_os = "windows")]
    let command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    };

    #[cfg(target_os = "macos")]
    let command = {
        let mut command = Command::new("open");
        command.arg(path);
        command
    };

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let command = {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    };

    command
}

/// Spawn the opener without waiting for it
pub fn open_path(path: &Path) -> io::Result<()> {
    opener_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
