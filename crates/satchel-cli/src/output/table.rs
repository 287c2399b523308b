#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;

/// Render an aligned plain-text table. Numeric cells are right-aligned;
/// status and grade-band cells are colored when `options.color` is set.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let header_line = join_cells(headers.iter().zip(&widths).map(|(header, width)| {
        pad(&truncate(header, *width), *width, false)
    }));
    let mut lines = vec![header_line.clone(), "-".repeat(header_line.chars().count())];

    for row in rows {
        lines.push(join_cells(widths.iter().enumerate().map(|(index, width)| {
            let cell = truncate(row.get(index).map_or("-", String::as_str), *width);
            let padded = pad(&cell, *width, looks_numeric(&cell));
            if options.color {
                colorize(&cell, padded)
            } else {
                padded
            }
        })));
    }

    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells.collect::<Vec<_>>().join("  ").trim_end().to_string()
}

/// Narrow the widest column one character at a time until the table fits.
fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

/// Wrap an already padded cell in an ANSI color picked from its text.
fn colorize(cell: &str, padded: String) -> String {
    let code = match cell {
        "completed" | "excellent" | "very_good" | "true" => "32",
        "written" | "good" | "fair" => "33",
        "not_completed" | "poor" | "false" => "31",
        "not_given" => "2",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["1".into(), "Assignment 1".into(), "written".into()],
            vec!["12".into(), "Assignment 12".into(), "not_completed".into()],
        ]
    }

    #[test]
    fn columns_align_and_numbers_right_align() {
        let out = render_table(
            &["id", "name", "status"],
            &rows(),
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id    name           status");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "   1  Assignment 1   written");
        assert_eq!(lines[3], "  12  Assignment 12  not_completed");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let out = render_table(
            &["id", "name", "status"],
            &rows(),
            TableOptions {
                max_width: Some(24),
                color: false,
            },
        );
        assert!(out.lines().all(|line| line.chars().count() <= 24));
        assert!(out.contains('…'));
    }

    #[test]
    fn statuses_are_colored() {
        let out = render_table(
            &["status"],
            &[vec!["completed".into()]],
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(out.contains("\u{1b}[32mcompleted"));
    }
}
