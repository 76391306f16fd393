//! Delimited and boxed-grid renderings of a well table.

use skyline_table::TableResult;

/// Render the well heights as delimited text, one line per grid row,
/// cells joined by `separator`, rows joined by newlines. `offset` is
/// added to every height. No trailing newline.
pub fn to_delimited(result: &TableResult, offset: i64, separator: &str) -> String {
    let columns = result.columns() as usize;
    let lines: Vec<String> = result
        .well_heights()
        .chunks(columns)
        .map(|row| {
            let cells: Vec<String> =
                row.iter().map(|&height| (height + offset).to_string()).collect();
            cells.join(separator)
        })
        .collect();
    lines.join("\n")
}

/// Render the well heights as an ASCII grid in the reStructuredText
/// style, with a `+---+` rule above, below, and between every row.
///
/// Cells are right-aligned and padded to the widest rendered value, one
/// space on each side, so the grid is rectangular regardless of how the
/// `offset` shifts the digit counts. Deterministic: the same result and
/// offset always render byte-identically.
pub fn to_boxed_table(result: &TableResult, offset: i64) -> String {
    let columns = result.columns() as usize;
    let rendered: Vec<String> = result
        .well_heights()
        .iter()
        .map(|&height| (height + offset).to_string())
        .collect();
    let width = rendered.iter().map(String::len).max().unwrap_or(0);

    let mut rule = String::from("+");
    for _ in 0..columns {
        rule.push_str(&"-".repeat(width + 2));
        rule.push('+');
    }

    let mut lines = vec![rule.clone()];
    for row in rendered.chunks(columns) {
        let mut line = String::from("|");
        for cell in row {
            line.push_str(&format!(" {cell:>width$} |"));
        }
        lines.push(line);
        lines.push(rule.clone());
    }
    lines.join("\n")
}
