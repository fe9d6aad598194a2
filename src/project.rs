//! Core data model: projects, the config document, and commit records.
//!
//! `Project` is the persisted shape (camelCase on disk); `ProjectInfo`
//! is the minimal read-only projection handed to the log aggregator so
//! it never sees mutable project state.

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LayoutMode {
    #[default]
    Horizontal,
    Vertical,
}

impl LayoutMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            LayoutMode::Horizontal => LayoutMode::Vertical,
            LayoutMode::Vertical => LayoutMode::Horizontal,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Horizontal => "horizontal",
            LayoutMode::Vertical => "vertical",
        }
    }
}

/// A registered repository. The validity flag is recomputed at load and
/// edit time and never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Project {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) is_pinned: bool,
    pub(crate) created_at: String,
    #[serde(skip)]
    pub(crate) is_valid: bool,
}

impl Project {
    pub(crate) fn new(path: PathBuf, name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            path,
            is_pinned: false,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            is_valid: false,
        }
    }
}

/// The whole config document. One per installation, replaced wholesale
/// on every save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppConfig {
    #[serde(default)]
    pub(crate) projects: Vec<Project>,
    #[serde(default)]
    pub(crate) layout_mode: LayoutMode,
}

/// Partial update for `ConfigStore::save`: absent fields are left
/// untouched in the held document.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConfigPatch {
    pub(crate) projects: Option<Vec<Project>>,
    pub(crate) layout_mode: Option<LayoutMode>,
}

/// (path, name) projection passed to the log aggregator
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProjectInfo {
    pub(crate) path: PathBuf,
    pub(crate) name: String,
}

/// One parsed commit. Ephemeral, produced fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommitLog {
    pub(crate) project_name: String,
    pub(crate) message: String,
    pub(crate) date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_mode_toggles() {
        assert_eq!(LayoutMode::Horizontal.toggled(), LayoutMode::Vertical);
        assert_eq!(LayoutMode::Vertical.toggled(), LayoutMode::Horizontal);
    }

    #[test]
    fn layout_mode_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&LayoutMode::Horizontal).unwrap(),
            r#""horizontal""#
        );
        let mode: LayoutMode = serde_json::from_str(r#""vertical""#).unwrap();
        assert_eq!(mode, LayoutMode::Vertical);
    }

    #[test]
    fn new_project_has_unique_id_and_iso_timestamp() {
        let a = Project::new(PathBuf::from("/tmp/a"), "a".to_string());
        let b = Project::new(PathBuf::from("/tmp/b"), "b".to_string());
        assert_ne!(a.id, b.id);
        assert!(!a.is_pinned);
        // RFC 3339 with Z suffix, e.g. 2024-01-15T10:30:00.000Z
        assert!(a.created_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&a.created_at).is_ok());
    }

    #[test]
    fn project_serializes_camel_case_without_validity() {
        let mut project = Project::new(PathBuf::from("/tmp/demo"), "demo".to_string());
        project.is_valid = true;
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"isPinned\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("isValid"));
    }

    #[test]
    fn config_document_round_trips() {
        let config = AppConfig {
            projects: vec![Project::new(PathBuf::from("/tmp/demo"), "demo".to_string())],
            layout_mode: LayoutMode::Vertical,
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"layoutMode\": \"vertical\""));
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn config_document_defaults_missing_fields() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.projects.is_empty());
        assert_eq!(parsed.layout_mode, LayoutMode::Horizontal);
    }

    #[test]
    fn commit_log_serializes_project_name_camel_case() {
        let log = CommitLog {
            project_name: "demo".to_string(),
            message: "fix: things".to_string(),
            date: "2024-01-15 10:30".to_string(),
        };
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"projectName\":\"demo\""));
    }
}
