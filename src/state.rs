//! Project state: the single owner of the in-memory project list, the
//! selection set, and the log buffer.
//!
//! Every mutation is followed by a full config save; the sorted and
//! selected views are pure derivations recomputed on demand.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::ConfigStore;
use crate::error::AppError;
use crate::git::{
    BatchResult, PathError, batch_update, get_logs, is_git_repo, project_name_from_path,
};
use crate::project::{CommitLog, ConfigPatch, LayoutMode, Project, ProjectInfo};

pub(crate) struct ProjectState {
    store: ConfigStore,
    projects: Vec<Project>,
    layout_mode: LayoutMode,
    selected: HashSet<String>,
    logs: Vec<CommitLog>,
}

impl ProjectState {
    pub(crate) fn new(store: ConfigStore) -> Self {
        Self {
            store,
            projects: Vec::new(),
            layout_mode: LayoutMode::default(),
            selected: HashSet::new(),
            logs: Vec::new(),
        }
    }

    /// Replace list and layout wholesale from the config store, then
    /// revalidate every project's path before anything else runs.
    pub(crate) fn load(&mut self) {
        let config = self.store.load().clone();
        self.projects = config.projects;
        self.layout_mode = config.layout_mode;
        self.validate_all();
    }

    fn validate_all(&mut self) {
        for project in &mut self.projects {
            project.is_valid = is_git_repo(&project.path);
        }
    }

    fn save_config(&mut self) -> Result<(), AppError> {
        self.store.save(ConfigPatch {
            projects: Some(self.projects.clone()),
            layout_mode: Some(self.layout_mode),
        })?;
        Ok(())
    }

    pub(crate) fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub(crate) fn logs(&self) -> &[CommitLog] {
        &self.logs
    }

    /// Resolve a user-supplied selector: exact id first, then exact name
    pub(crate) fn resolve(&self, selector: &str) -> Result<&Project, AppError> {
        self.projects
            .iter()
            .find(|p| p.id == selector)
            .or_else(|| self.projects.iter().find(|p| p.name == selector))
            .ok_or_else(|| AppError::UnknownProject {
                input: selector.to_string(),
            })
    }

    pub(crate) fn add_project(
        &mut self,
        path: PathBuf,
        name: Option<String>,
    ) -> Result<Project, AppError> {
        if let Some(existing) = self.projects.iter().find(|p| p.path == path) {
            return Err(AppError::DuplicatePath {
                path,
                name: existing.name.clone(),
            });
        }
        let name = name.unwrap_or_else(|| project_name_from_path(&path));
        let mut project = Project::new(path, name);
        project.is_valid = is_git_repo(&project.path);
        self.projects.push(project.clone());
        self.save_config()?;
        Ok(project)
    }

    pub(crate) fn update_project(
        &mut self,
        id: &str,
        name: Option<String>,
        path: Option<PathBuf>,
    ) -> Result<Project, AppError> {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return Err(AppError::UnknownProject {
                input: id.to_string(),
            });
        };
        if let Some(name) = name {
            project.name = name;
        }
        if let Some(path) = path {
            project.path = path;
        }
        project.is_valid = is_git_repo(&project.path);
        let updated = project.clone();
        self.save_config()?;
        Ok(updated)
    }

    pub(crate) fn remove_project(&mut self, id: &str) -> Result<Project, AppError> {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            return Err(AppError::UnknownProject {
                input: id.to_string(),
            });
        };
        let removed = self.projects.remove(index);
        self.selected.remove(id);
        self.save_config()?;
        Ok(removed)
    }

    pub(crate) fn toggle_pin(&mut self, id: &str) -> Result<Project, AppError> {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return Err(AppError::UnknownProject {
                input: id.to_string(),
            });
        };
        project.is_pinned = !project.is_pinned;
        let updated = project.clone();
        self.save_config()?;
        Ok(updated)
    }

    /// Set the layout and persist a layout-only patch, leaving the
    /// stored project list untouched.
    pub(crate) fn set_layout(&mut self, mode: LayoutMode) -> Result<(), AppError> {
        self.layout_mode = mode;
        self.store.save(ConfigPatch {
            projects: None,
            layout_mode: Some(mode),
        })?;
        Ok(())
    }

    pub(crate) fn toggle_select(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Select every valid project, or clear the selection when it
    /// already equals the full set of valid projects. Invalid projects
    /// are never selectable.
    pub(crate) fn toggle_select_all(&mut self) {
        let valid: HashSet<String> = self
            .projects
            .iter()
            .filter(|p| p.is_valid)
            .map(|p| p.id.clone())
            .collect();
        if self.selected == valid {
            self.selected.clear();
        } else {
            self.selected = valid;
        }
    }

    /// Display order: pinned first, then newest first. The sort is
    /// stable, so ties keep their original relative order.
    pub(crate) fn sorted_projects(&self) -> Vec<&Project> {
        let mut sorted: Vec<&Project> = self.projects.iter().collect();
        sorted.sort_by(|a, b| {
            b.is_pinned
                .cmp(&a.is_pinned)
                .then_with(|| created_ts(b).cmp(&created_ts(a)))
        });
        sorted
    }

    /// Selected projects in list order
    pub(crate) fn selected_projects(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| self.selected.contains(&p.id))
            .collect()
    }

    /// Query logs for the valid selected projects and replace the log
    /// buffer wholesale. An empty selection short-circuits without
    /// invoking git.
    pub(crate) fn fetch_logs(
        &mut self,
        since: NaiveDate,
        until: NaiveDate,
        debug: bool,
    ) -> Vec<PathError> {
        let infos: Vec<ProjectInfo> = self
            .selected_projects()
            .into_iter()
            .filter(|p| p.is_valid)
            .map(|p| ProjectInfo {
                path: p.path.clone(),
                name: p.name.clone(),
            })
            .collect();

        if infos.is_empty() {
            self.logs.clear();
            return Vec::new();
        }

        let batch = get_logs(&infos, since, until, debug);
        self.logs = batch.logs;
        batch.errors
    }

    /// Pull the valid selected repositories, one result per path
    pub(crate) fn batch_update(&self) -> Vec<BatchResult> {
        let paths: Vec<PathBuf> = self
            .selected_projects()
            .into_iter()
            .filter(|p| p.is_valid)
            .map(|p| p.path.clone())
            .collect();
        batch_update(&paths)
    }
}

fn created_ts(project: &Project) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&project.created_at)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}
