//! Pipe-table block parsing.

use crate::model::{Table, TableRow};

/// Parse the table block at the start of `lines`.
///
/// The block is the maximal run of consecutive lines containing a pipe
/// character. Separator rows contribute no data; the first surviving row
/// becomes the header and fixes the column count, and later rows are
/// truncated to it. Returns the parsed table (`None` when every line was a
/// separator) and the number of lines consumed — the block always consumes
/// its lines, table or not. A block cut off by end of input closes with
/// whatever rows were collected.
pub(crate) fn parse_block(lines: &[&str]) -> (Option<Table>, usize) {
    let mut end = 0;
    while end < lines.len() && lines[end].contains('|') {
        end += 1;
    }

    let data_lines: Vec<&str> = lines[..end]
        .iter()
        .copied()
        .filter(|line| !is_separator_row(line))
        .collect();
    if data_lines.is_empty() {
        return (None, end);
    }

    let rows: Vec<Vec<String>> = data_lines.iter().map(|line| split_cells(line)).collect();
    let column_count = rows[0].len();

    let mut table = Table::new();
    for (index, mut cells) in rows.into_iter().enumerate() {
        cells.truncate(column_count);
        table.add_row(TableRow {
            cells,
            is_header: index == 0,
        });
    }
    (Some(table), end)
}

/// A row made only of pipes, dashes, colons, and whitespace marks the
/// header/body boundary and carries no data.
fn is_separator_row(line: &str) -> bool {
    !line.trim().is_empty()
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Split a table line on pipes into trimmed cells.
///
/// Leading and trailing pipes produce empty boundary fragments, which are
/// dropped; interior empty cells are kept.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells.into_iter().map(str::to_string).collect()
}
