use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Render rows as left-aligned columns separated by two spaces.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let render = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render(headers.iter().map(|h| h.to_string()).collect()));
    lines.push(render(widths.iter().map(|&w| "-".repeat(w)).collect()));
    for row in rows {
        lines.push(render(row.clone()));
    }
    lines.join("\n")
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    println!("{}", format_table(headers, rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_columns() {
        let out = format_table(
            &["INPUT", "TYPE"],
            &[vec!["team:12".to_string(), "team".to_string()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "INPUT    TYPE");
        assert_eq!(lines[1], "-------  ----");
        assert_eq!(lines[2], "team:12  team");
    }
}
