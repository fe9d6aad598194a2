//! Repository log aggregator: shells out to `git log` per repository
//! and merges parsed commit records across the batch.
//!
//! Failures are isolated per repository. An invalid path produces an
//! error entry and the batch continues; a failed `git` invocation is
//! treated as "no commits in range" (git exits non-zero for empty or
//! unborn repositories, which is indistinguishable from that case).

use std::path::PathBuf;
use std::process::Command;

use chrono::NaiveDate;
use serde::Serialize;

use crate::consts::{DATE_FORMAT, FIELD_SEPARATOR, RECORD_SEPARATOR};
use crate::project::{CommitLog, ProjectInfo};

/// Per-path validation failure, reported alongside the logs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PathError {
    pub(crate) path: PathBuf,
    pub(crate) message: String,
}

#[derive(Debug, Default)]
pub(crate) struct LogBatch {
    pub(crate) logs: Vec<CommitLog>,
    pub(crate) errors: Vec<PathError>,
}

/// Collect commit logs for every repository in `projects` over the
/// inclusive date range `[since 00:00:00, until 23:59:59]`.
///
/// Repositories are processed strictly sequentially, in input order;
/// within a repository commits keep git's reverse-chronological order.
/// The merged result is one flat sequence with no re-sorting.
pub(crate) fn get_logs(
    projects: &[ProjectInfo],
    since: NaiveDate,
    until: NaiveDate,
    debug: bool,
) -> LogBatch {
    let mut batch = LogBatch::default();

    for project in projects {
        if !project.path.exists() {
            batch.errors.push(PathError {
                path: project.path.clone(),
                message: "path does not exist".to_string(),
            });
            continue;
        }
        if !project.path.join(".git").exists() {
            batch.errors.push(PathError {
                path: project.path.clone(),
                message: "not a valid Git repository".to_string(),
            });
            continue;
        }

        let output = Command::new("git")
            .arg("log")
            .arg("--no-merges")
            .arg(format!("--after={} 00:00:00", since.format(DATE_FORMAT)))
            .arg(format!("--before={} 23:59:59", until.format(DATE_FORMAT)))
            .arg(format!("--pretty=format:%B{FIELD_SEPARATOR}%ad{RECORD_SEPARATOR}"))
            .arg("--date=format:%Y-%m-%d %H:%M")
            .current_dir(&project.path)
            .output();

        match output {
            Ok(out) if out.status.success() => {
                let raw = String::from_utf8_lossy(&out.stdout);
                for (message, date) in parse_records(&raw) {
                    batch.logs.push(CommitLog {
                        project_name: project.name.clone(),
                        message,
                        date,
                    });
                }
            }
            Ok(out) => {
                if debug {
                    eprintln!(
                        "[debug] git log failed in {}: {}",
                        project.path.display(),
                        String::from_utf8_lossy(&out.stderr).trim()
                    );
                }
            }
            Err(e) => {
                if debug {
                    eprintln!(
                        "[debug] could not run git in {}: {e}",
                        project.path.display()
                    );
                }
            }
        }
    }

    batch
}

/// Split raw `git log` output into (message, date) pairs.
///
/// Records are separated by `^^^^^`. Within a record the LAST `|||`
/// wins, so a `|||` occurring inside a multi-line commit message cannot
/// shift the date field. Records without both a non-empty message and a
/// non-empty date are discarded.
pub(crate) fn parse_records(raw: &str) -> Vec<(String, String)> {
    let mut records = Vec::new();
    for record in raw.split(RECORD_SEPARATOR) {
        if record.trim().is_empty() {
            continue;
        }
        let Some(idx) = record.rfind(FIELD_SEPARATOR) else {
            continue;
        };
        let message = record[..idx].trim();
        let date = record[idx + FIELD_SEPARATOR.len()..].trim();
        if message.is_empty() || date.is_empty() {
            continue;
        }
        records.push((message.to_string(), date.to_string()));
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    #[test]
    fn parse_single_record() {
        let records = parse_records("feat: add thing|||2024-01-15 10:30^^^^^");
        assert_eq!(
            records,
            vec![("feat: add thing".to_string(), "2024-01-15 10:30".to_string())]
        );
    }

    #[test]
    fn parse_splits_on_last_separator() {
        let records = parse_records("fix: use a|||b separator|||2024-01-15 10:30^^^^^");
        assert_eq!(
            records,
            vec![(
                "fix: use a|||b separator".to_string(),
                "2024-01-15 10:30".to_string()
            )]
        );
    }

    #[test]
    fn parse_multi_line_message() {
        let raw = "feat: subject\n\nlonger body\nwith lines|||2024-02-01 09:00^^^^^";
        let records = parse_records(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "feat: subject\n\nlonger body\nwith lines");
        assert_eq!(records[0].1, "2024-02-01 09:00");
    }

    #[test]
    fn parse_multiple_records_keeps_order() {
        let raw = "second|||2024-01-16 08:00^^^^^\nfirst|||2024-01-15 10:30^^^^^";
        let records = parse_records(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].0, "second");
        assert_eq!(records[1].0, "first");
    }

    #[test]
    fn parse_discards_records_without_separator() {
        assert!(parse_records("no separator here^^^^^").is_empty());
    }

    #[test]
    fn parse_discards_empty_message_or_date() {
        assert!(parse_records("|||2024-01-15 10:30^^^^^").is_empty());
        assert!(parse_records("message only|||^^^^^").is_empty());
        assert!(parse_records("   \n  ^^^^^  ").is_empty());
    }

    #[test]
    fn parse_empty_output() {
        assert!(parse_records("").is_empty());
    }

    fn info(path: &Path, name: &str) -> ProjectInfo {
        ProjectInfo {
            path: path.to_path_buf(),
            name: name.to_string(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn missing_path_records_error_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let projects = vec![
            info(Path::new("/nonexistent/missing"), "gone"),
            info(dir.path(), "present"),
        ];
        let batch = get_logs(&projects, day("2024-01-01"), day("2024-01-02"), false);

        assert_eq!(batch.errors.len(), 1);
        assert_eq!(batch.errors[0].path, PathBuf::from("/nonexistent/missing"));
        assert_eq!(batch.errors[0].message, "path does not exist");
    }

    #[test]
    fn directory_without_marker_records_error() {
        let dir = tempfile::tempdir().unwrap();
        let projects = vec![info(dir.path(), "plain")];
        let batch = get_logs(&projects, day("2024-01-01"), day("2024-01-02"), false);

        assert!(batch.logs.is_empty());
        assert_eq!(batch.errors.len(), 1);
        assert_eq!(batch.errors[0].message, "not a valid Git repository");
    }

    #[test]
    fn failed_git_invocation_is_swallowed() {
        // A bogus .git marker makes `git log` exit non-zero; that repo
        // contributes neither logs nor errors.
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let projects = vec![info(dir.path(), "broken")];
        let batch = get_logs(&projects, day("2024-01-01"), day("2024-01-02"), false);

        assert!(batch.logs.is_empty());
        assert!(batch.errors.is_empty());
    }
}
