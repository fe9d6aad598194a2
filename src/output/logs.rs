use std::collections::HashSet;

use comfy_table::{Cell, Color};

use crate::git::PathError;
use crate::output::format::{create_styled_table, header_cell, styled_cell};
use crate::project::CommitLog;

pub(crate) fn print_log_table(logs: &[CommitLog], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Project", use_color),
        header_cell("Date", use_color),
        header_cell("Message", use_color),
    ]);

    for log in logs {
        table.add_row(vec![
            styled_cell(&log.project_name, use_color.then_some(Color::Cyan), false),
            Cell::new(&log.date),
            Cell::new(&log.message),
        ]);
    }

    println!("{table}");

    let projects: HashSet<&str> = logs.iter().map(|l| l.project_name.as_str()).collect();
    println!(
        "\n  {} commits across {} projects\n",
        logs.len(),
        projects.len()
    );
}

/// `{logs, errors}` with `errors` null when the batch had none
pub(crate) fn output_logs_json(logs: &[CommitLog], errors: &[PathError]) -> String {
    let errors_value = if errors.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::json!(errors)
    };
    serde_json::to_string_pretty(&serde_json::json!({
        "logs": logs,
        "errors": errors_value,
    }))
    .unwrap()
}
