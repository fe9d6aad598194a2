use std::path::Path;

/// A directory counts as a repository when it exists and carries a
/// `.git` marker. The same probe backs path validation, the log
/// aggregator, and the batch updater.
pub(crate) fn is_git_repo(path: &Path) -> bool {
    path.exists() && path.join(".git").exists()
}

/// Default display name for a path: its final component
pub(crate) fn project_name_from_path(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
