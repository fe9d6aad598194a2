//! Command handlers: each wires the CLI surface into the project state
//! and renders the result as a table or JSON.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::cli::{Cli, Commands};
use crate::config::ConfigStore;
use crate::consts::DATE_FORMAT;
use crate::error::AppError;
use crate::output::{
    output_logs_json, output_projects_json, output_pull_json, print_log_table,
    print_project_table, print_pull_table,
};
use crate::state::ProjectState;
use crate::utils::{open_in_terminal, parse_date};

pub(crate) fn run(cli: Cli) -> Result<(), AppError> {
    let json = cli.json;
    let use_color = cli.use_color();
    let debug = cli.debug;

    let store = ConfigStore::new();
    if debug {
        eprintln!("[debug] using config at {}", store.path().display());
    }
    let mut state = ProjectState::new(store);
    state.load();

    match cli.command {
        None | Some(Commands::List) => handle_list(&state, json, use_color),
        Some(Commands::Add { path, name }) => handle_add(&mut state, path, name, json)?,
        Some(Commands::Edit {
            project,
            name,
            path,
        }) => handle_edit(&mut state, &project, name, path, json)?,
        Some(Commands::Remove { project }) => {
            let id = state.resolve(&project)?.id.clone();
            let removed = state.remove_project(&id)?;
            println!("Removed \"{}\"", removed.name);
        }
        Some(Commands::Pin { project }) => {
            let id = state.resolve(&project)?.id.clone();
            let updated = state.toggle_pin(&id)?;
            if updated.is_pinned {
                println!("Pinned \"{}\"", updated.name);
            } else {
                println!("Unpinned \"{}\"", updated.name);
            }
        }
        Some(Commands::Layout { mode }) => {
            let mode = match mode {
                Some(arg) => arg.into(),
                None => state.layout_mode().toggled(),
            };
            state.set_layout(mode)?;
            if json {
                println!("{}", serde_json::json!({ "layoutMode": mode }));
            } else {
                println!("Layout mode set to {}", mode.as_str());
            }
        }
        Some(Commands::Logs {
            projects,
            since,
            until,
        }) => handle_logs(&mut state, &projects, since, until, json, use_color, debug)?,
        Some(Commands::Pull { projects }) => {
            handle_pull(&mut state, &projects, json, use_color)?;
        }
        Some(Commands::Open { project }) => {
            let target = state.resolve(&project)?;
            let path = target.path.clone();
            open_in_terminal(&path)?;
            println!("Opened terminal at {}", path.display());
        }
    }

    Ok(())
}

fn handle_list(state: &ProjectState, json: bool, use_color: bool) {
    let sorted = state.sorted_projects();
    if json {
        println!("{}", output_projects_json(&sorted, state.layout_mode()));
        return;
    }
    if sorted.is_empty() {
        println!("No projects registered. Use `gitmate add <path>` to register one.");
        return;
    }
    print_project_table(&sorted, state.layout_mode(), use_color);
}

fn handle_add(
    state: &mut ProjectState,
    path: PathBuf,
    name: Option<String>,
    json: bool,
) -> Result<(), AppError> {
    let path = fs::canonicalize(&path).unwrap_or(path);
    let project = state.add_project(path, name)?;
    if json {
        println!("{}", output_projects_json(&[&project], state.layout_mode()));
        return Ok(());
    }
    if !project.is_valid {
        eprintln!(
            "Warning: {} is not a valid Git repository",
            project.path.display()
        );
    }
    println!(
        "Registered \"{}\" ({})",
        project.name,
        project.path.display()
    );
    Ok(())
}

fn handle_edit(
    state: &mut ProjectState,
    selector: &str,
    name: Option<String>,
    path: Option<PathBuf>,
    json: bool,
) -> Result<(), AppError> {
    let id = state.resolve(selector)?.id.clone();
    let path = path.map(|p| fs::canonicalize(&p).unwrap_or(p));
    let updated = state.update_project(&id, name, path)?;
    if json {
        println!("{}", output_projects_json(&[&updated], state.layout_mode()));
        return Ok(());
    }
    println!(
        "Updated \"{}\" ({})",
        updated.name,
        updated.path.display()
    );
    if !updated.is_valid {
        eprintln!(
            "Warning: {} is not a valid Git repository",
            updated.path.display()
        );
    }
    Ok(())
}

/// Date range for a logs query: `until` defaults to today and `since`
/// defaults to `until`, so a bare `logs` covers just today.
fn resolve_range(
    since: Option<String>,
    until: Option<String>,
) -> Result<(NaiveDate, NaiveDate), AppError> {
    let until = match until {
        Some(s) => parse_date(&s)?,
        None => Local::now().date_naive(),
    };
    let since = match since {
        Some(s) => parse_date(&s)?,
        None => until,
    };
    Ok((since, until))
}

/// Explicit names select those projects; no names selects all valid
fn select(state: &mut ProjectState, names: &[String]) -> Result<(), AppError> {
    if names.is_empty() {
        state.toggle_select_all();
        return Ok(());
    }
    for name in names {
        let id = state.resolve(name)?.id.clone();
        state.toggle_select(&id);
    }
    Ok(())
}

fn handle_logs(
    state: &mut ProjectState,
    projects: &[String],
    since: Option<String>,
    until: Option<String>,
    json: bool,
    use_color: bool,
    debug: bool,
) -> Result<(), AppError> {
    let (since, until) = resolve_range(since, until)?;
    select(state, projects)?;
    let errors = state.fetch_logs(since, until, debug);

    if json {
        println!("{}", output_logs_json(state.logs(), &errors));
        return Ok(());
    }

    for error in &errors {
        eprintln!("Warning: {}: {}", error.path.display(), error.message);
    }
    if state.logs().is_empty() {
        println!(
            "No commits found between {} and {}.",
            since.format(DATE_FORMAT),
            until.format(DATE_FORMAT)
        );
    } else {
        print_log_table(state.logs(), use_color);
    }
    Ok(())
}

fn handle_pull(
    state: &mut ProjectState,
    projects: &[String],
    json: bool,
    use_color: bool,
) -> Result<(), AppError> {
    select(state, projects)?;
    let results = state.batch_update();

    if json {
        println!("{}", output_pull_json(&results));
        return Ok(());
    }
    if results.is_empty() {
        println!("No valid projects selected.");
        return Ok(());
    }
    print_pull_table(&results, use_color);
    Ok(())
}
