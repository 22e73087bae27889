use serde::Serialize;
use std::io::Write;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Plain-text table with a dashed rule under the header. Columns are padded
/// to the widest cell (in chars) and trailing padding is trimmed.
pub struct Table {
    headers: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &'static [&'static str]) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) -> &mut Self {
        self.rows.push(cells);
        self
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }

    pub fn print(&self) {
        let widths = self.widths();
        println!("{}", line(self.headers.iter().copied(), &widths));
        println!("{}", line(widths.iter().map(|&w| "-".repeat(w)), &widths));
        for row in &self.rows {
            println!("{}", line(row.iter().map(String::as_str), &widths));
        }
    }
}

fn line<S: AsRef<str>>(cells: impl Iterator<Item = S>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .enumerate()
        .map(|(i, cell)| {
            let w = widths.get(i).copied().unwrap_or(0);
            format!("{:w$}", cell.as_ref())
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}
