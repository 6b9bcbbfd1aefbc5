//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub min_width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            min_width: header.len(),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        // Widths grow with content, never below the header width
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.min_width).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let mut out = String::new();

        for (i, col) in self.columns.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", col.header, width = widths[i]));
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, Table};

    #[test]
    fn renders_header_and_rows() {
        let mut t = Table::new(vec![Column::new("Date"), Column::new("Total")]);
        t.add_row(vec!["2025-03-10".into(), "08:00:00".into()]);
        let out = t.render();
        assert!(out.contains("Date"));
        assert!(out.contains("2025-03-10"));
        assert!(out.lines().count() >= 3);
    }
}
