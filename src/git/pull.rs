//! Batch updater: runs `git pull` across a list of repository paths,
//! one at a time, collecting a per-path result. A failed pull never
//! stops the batch.

use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

/// Outcome of one pull. The result list always has the same
/// cardinality and order as the requested path list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BatchResult {
    pub(crate) path: PathBuf,
    pub(crate) success: bool,
    pub(crate) message: String,
}

pub(crate) fn batch_update(paths: &[PathBuf]) -> Vec<BatchResult> {
    paths.iter().map(|path| update_one(path)).collect()
}

fn update_one(path: &Path) -> BatchResult {
    let result = |success: bool, message: String| BatchResult {
        path: path.to_path_buf(),
        success,
        message,
    };

    if !path.exists() {
        return result(false, "path does not exist".to_string());
    }
    if !path.join(".git").exists() {
        return result(false, "not a valid Git repository".to_string());
    }

    match Command::new("git").arg("pull").current_dir(path).output() {
        Ok(out) if out.status.success() => result(true, "updated".to_string()),
        Ok(out) => {
            // First line only; git's full diagnostics are noise here.
            let stderr = String::from_utf8_lossy(&out.stderr);
            let first = stderr.lines().next().unwrap_or("").trim().to_string();
            if first.is_empty() {
                result(false, "git pull failed".to_string())
            } else {
                result(false, first)
            }
        }
        Err(e) => result(false, e.to_string()),
    }
}
