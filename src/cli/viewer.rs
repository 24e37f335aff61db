use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Hands `path` to the platform's default document opener.
pub fn open_in_viewer(path: &Path) -> io::Result<()> {
    let mut command = viewer_command(path);
    command.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
    log::debug!("Opening viewer: {:?}", command);

    let status = command.status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("viewer exited with {}", status)))
    }
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        // The empty string is the window title `start` expects before the path.
        command.args(["/C", "start", ""]).arg(path);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}
