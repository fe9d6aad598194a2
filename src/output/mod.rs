mod format;
mod logs;
mod projects;
mod pull;

pub(crate) use logs::{output_logs_json, print_log_table};
pub(crate) use projects::{output_projects_json, print_project_table};
pub(crate) use pull::{output_pull_json, print_pull_table};
