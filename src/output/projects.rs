use comfy_table::{Cell, Color};

use crate::output::format::{create_styled_table, header_cell, styled_cell};
use crate::project::{LayoutMode, Project};

pub(crate) fn print_project_table(projects: &[&Project], layout: LayoutMode, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Name", use_color),
        header_cell("Path", use_color),
        header_cell("Pinned", use_color),
        header_cell("Created", use_color),
        header_cell("Status", use_color),
    ]);

    for project in projects {
        let status = if project.is_valid {
            styled_cell("ok", use_color.then_some(Color::Green), false)
        } else {
            styled_cell("invalid", use_color.then_some(Color::Red), false)
        };
        table.add_row(vec![
            styled_cell(&project.name, None, project.is_pinned),
            Cell::new(project.path.display().to_string()),
            Cell::new(if project.is_pinned { "*" } else { "" }),
            Cell::new(created_date(project)),
            status,
        ]);
    }

    println!("{table}");
    println!(
        "\n  {} projects | layout: {}\n",
        projects.len(),
        layout.as_str()
    );
}

/// Date part of the ISO-8601 creation timestamp
fn created_date(project: &Project) -> &str {
    project.created_at.get(..10).unwrap_or(&project.created_at)
}

pub(crate) fn output_projects_json(projects: &[&Project], layout: LayoutMode) -> String {
    let items: Vec<serde_json::Value> = projects
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.id,
                "name": p.name,
                "path": p.path,
                "isPinned": p.is_pinned,
                "createdAt": p.created_at,
                "isValid": p.is_valid,
            })
        })
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "projects": items,
        "layoutMode": layout,
    }))
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample(valid: bool) -> Project {
        Project {
            id: "id-1".to_string(),
            name: "demo".to_string(),
            path: PathBuf::from("/tmp/demo"),
            is_pinned: true,
            created_at: "2024-01-15T10:30:00.000Z".to_string(),
            is_valid: valid,
        }
    }

    #[test]
    fn json_includes_transient_validity() {
        let project = sample(false);
        let json = output_projects_json(&[&project], LayoutMode::Vertical);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["layoutMode"], "vertical");
        assert_eq!(value["projects"][0]["isValid"], false);
        assert_eq!(value["projects"][0]["isPinned"], true);
        assert_eq!(value["projects"][0]["createdAt"], "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn created_date_truncates_to_day() {
        let project = sample(true);
        assert_eq!(created_date(&project), "2024-01-15");
    }

    #[test]
    fn created_date_handles_short_timestamp() {
        let mut project = sample(true);
        project.created_at = "2024".to_string();
        assert_eq!(created_date(&project), "2024");
    }
}
