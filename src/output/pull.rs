use comfy_table::{Cell, Color};

use crate::git::BatchResult;
use crate::output::format::{create_styled_table, header_cell, styled_cell};

pub(crate) fn print_pull_table(results: &[BatchResult], use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Path", use_color),
        header_cell("Status", use_color),
        header_cell("Message", use_color),
    ]);

    for result in results {
        let status = if result.success {
            styled_cell("OK", use_color.then_some(Color::Green), true)
        } else {
            styled_cell("FAIL", use_color.then_some(Color::Red), true)
        };
        table.add_row(vec![
            Cell::new(result.path.display().to_string()),
            status,
            Cell::new(&result.message),
        ]);
    }

    println!("{table}");

    let updated = results.iter().filter(|r| r.success).count();
    println!(
        "\n  {} updated, {} failed\n",
        updated,
        results.len() - updated
    );
}

pub(crate) fn output_pull_json(results: &[BatchResult]) -> String {
    serde_json::to_string_pretty(results).unwrap()
}
