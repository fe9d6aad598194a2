use std::path::Path;
use std::process::Command;

use crate::error::AppError;

/// Launch a platform terminal with `path` as its working directory
pub(crate) fn open_in_terminal(path: &Path) -> Result<(), AppError> {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "powershell.exe", "-NoExit", "-Command"])
            .arg(format!("cd '{}'", path.display()));
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg("-a").arg("Terminal").arg(path);
        c
    } else {
        let mut c = Command::new("x-terminal-emulator");
        c.arg(format!("--working-directory={}", path.display()));
        c
    };

    command.spawn().map(|_| ()).map_err(AppError::Terminal)
}
