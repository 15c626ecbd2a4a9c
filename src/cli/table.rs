use crate::cli::console::Console;

/// Total width of every rendered table, matching the report layout the
/// server-side tools use.
const TABLE_WIDTH: usize = 90;

/// Writes the horizontal rule spanning the table width.
pub fn rule(console: &mut dyn Console) {
    console.println(&"-".repeat(TABLE_WIDTH));
}

/// Writes one pipe-delimited row, each cell centered in an equal share of
/// the table width.
pub fn row(console: &mut dyn Console, cells: &[&str]) {
    if cells.is_empty() {
        return;
    }
    let width = (TABLE_WIDTH - cells.len()) / cells.len();
    let mut line = String::from("|");
    for cell in cells {
        line.push_str(&center(cell, width));
        line.push('|');
    }
    console.println(&line);
}

/// Renders a header and data rows between rules.
pub fn print_table(console: &mut dyn Console, headers: &[&str], rows: &[Vec<String>]) {
    rule(console);
    row(console, headers);
    rule(console);
    for entry in rows {
        let cells: Vec<&str> = entry.iter().map(String::as_str).collect();
        row(console, &cells);
    }
    rule(console);
}

fn center(text: &str, width: usize) -> String {
    let fitted = truncate(text, width);
    let len = fitted.chars().count();
    let remaining = width.saturating_sub(len);
    let left = remaining / 2;
    let right = remaining - left;
    format!("{}{}{}", " ".repeat(left), fitted, " ".repeat(right))
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{keep}...")
}
