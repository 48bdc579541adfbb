use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let fmt_row = |cells: Vec<String>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", c, width = w)
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!(
        "{}",
        fmt_row(headers.iter().map(|h| h.to_string()).collect())
    );
    println!(
        "{}",
        fmt_row(widths.iter().map(|&w| "-".repeat(w)).collect())
    );
    for row in rows {
        println!("{}", fmt_row(row));
    }
}
