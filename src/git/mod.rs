pub(crate) mod log;
pub(crate) mod pull;
pub(crate) mod repo;

pub(crate) use log::{PathError, get_logs};
pub(crate) use pull::{BatchResult, batch_update};
pub(crate) use repo::{is_git_repo, project_name_from_path};
