use podlist_core::model::{SkippedRow, Stream};
use podlist_core::report::screen::ScreenTable;

pub fn print(table: &ScreenTable) {
    let title = match table.stream {
        Stream::Standard => "Standard Batches",
        Stream::Alternate => "4pp Batches",
    };
    println!("=== {title} ===\n");

    if table.groups.is_empty() {
        println!("  (no batches)\n");
        return;
    }

    let summary = &table.summary;
    println!(
        "  Paper Types: {}  |  Batches: {}  |  {}: {}\n",
        summary.paper_types, summary.batches, summary.quantity_label, summary.quantity
    );

    // Column widths across every group so the table lines up.
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.len()).collect();
    for group in &table.groups {
        for row in &group.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let header: Vec<String> = table.columns.iter().map(|c| c.to_string()).collect();
    println!("  {}", pad(&header, &widths));
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    println!("  {}", "-".repeat(rule_len));

    for group in &table.groups {
        println!("  {}", group.header);
        for row in &group.rows {
            println!("  {}", pad(&row.cells(), &widths));
        }
        println!();
    }
}

pub fn print_skipped(skipped: &[SkippedRow]) {
    if skipped.is_empty() {
        return;
    }
    println!("Skipped rows:");
    for row in skipped {
        println!("  row {:>4}  {}", row.row_number, row.reason);
    }
    println!();
}

fn pad(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
