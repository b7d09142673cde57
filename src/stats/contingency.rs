//! Two-way contingency tables with marginal totals

use std::collections::HashMap;
use std::fmt;

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};

/// Cross-tabulation of two categorical columns
///
/// Joint counts with sorted row and column labels, plus the marginal row and
/// column totals and the grand total (the "Total" row and column of the
/// rendered table). Counts are kept as `f64` in the shape the chi-square
/// routine consumes.
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    /// Column tabulated along the rows
    row_column: String,

    /// Column tabulated along the columns
    col_column: String,

    /// Distinct row labels in ascending order
    row_labels: Vec<String>,

    /// Distinct column labels in ascending order
    col_labels: Vec<String>,

    /// Joint counts, row-major, margins excluded
    observed: Vec<Vec<f64>>,

    /// Row totals
    row_totals: Vec<f64>,

    /// Column totals
    col_totals: Vec<f64>,

    /// Grand total (number of rows tabulated)
    grand_total: f64,
}

/// Cross-tabulate two categorical columns
pub fn crosstab(df: &DataFrame, rows: &str, cols: &str) -> Result<ContingencyTable> {
    let row_series = df.column(rows)?;
    let col_series = df.column(cols)?;

    if row_series.is_empty() {
        return Err(Error::EmptyData(format!(
            "Cannot cross-tabulate columns '{}' and '{}' of an empty frame",
            rows, cols
        )));
    }

    // Sorted distinct labels per axis
    let mut row_labels: Vec<String> = row_series.values().to_vec();
    row_labels.sort();
    row_labels.dedup();
    let mut col_labels: Vec<String> = col_series.values().to_vec();
    col_labels.sort();
    col_labels.dedup();

    let row_pos: HashMap<&String, usize> =
        row_labels.iter().enumerate().map(|(i, l)| (l, i)).collect();
    let col_pos: HashMap<&String, usize> =
        col_labels.iter().enumerate().map(|(i, l)| (l, i)).collect();

    // Fill the joint counts
    let mut observed = vec![vec![0.0; col_labels.len()]; row_labels.len()];
    for (row_value, col_value) in row_series.values().iter().zip(col_series.values()) {
        observed[row_pos[row_value]][col_pos[col_value]] += 1.0;
    }

    // Marginal totals
    let row_totals: Vec<f64> = observed.iter().map(|row| row.iter().sum()).collect();
    let mut col_totals = vec![0.0; col_labels.len()];
    for row in &observed {
        for (j, &count) in row.iter().enumerate() {
            col_totals[j] += count;
        }
    }
    let grand_total: f64 = row_totals.iter().sum();

    Ok(ContingencyTable {
        row_column: rows.to_string(),
        col_column: cols.to_string(),
        row_labels,
        col_labels,
        observed,
        row_totals,
        col_totals,
        grand_total,
    })
}

impl ContingencyTable {
    /// Name of the column tabulated along the rows
    pub fn row_column(&self) -> &str {
        &self.row_column
    }

    /// Name of the column tabulated along the columns
    pub fn col_column(&self) -> &str {
        &self.col_column
    }

    /// Joint counts without the margins, row-major
    pub fn observed(&self) -> &[Vec<f64>] {
        &self.observed
    }

    /// Distinct row labels in ascending order
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Distinct column labels in ascending order
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Row totals
    pub fn row_totals(&self) -> &[f64] {
        &self.row_totals
    }

    /// Column totals
    pub fn col_totals(&self) -> &[f64] {
        &self.col_totals
    }

    /// Grand total (number of tabulated rows)
    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Joint count for one (row label, column label) pair
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.row_labels.iter().position(|l| l == row)?;
        let j = self.col_labels.iter().position(|l| l == col)?;
        Some(self.observed[i][j])
    }

    /// Sum over every cell of the rendered table, margins included
    ///
    /// The margin row, the margin column and the grand-total cell each
    /// re-count the sample, so this is larger than the grand total.
    pub fn total_with_margins(&self) -> f64 {
        let inner: f64 = self.observed.iter().flatten().sum();
        let row_margin: f64 = self.row_totals.iter().sum();
        let col_margin: f64 = self.col_totals.iter().sum();
        inner + row_margin + col_margin + self.grand_total
    }

    /// Table dimensions counting the margin row and column
    pub fn shape_with_margins(&self) -> (usize, usize) {
        (self.row_labels.len() + 1, self.col_labels.len() + 1)
    }
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .row_labels
            .iter()
            .map(|l| l.len())
            .chain(std::iter::once(self.row_column.len()))
            .chain(std::iter::once("Total".len()))
            .max()
            .unwrap_or(0);

        // Column-axis name, then the header row with the margin column
        writeln!(f, "{:<width$}  {}", "", self.col_column, width = label_width)?;
        write!(f, "{:<width$}", self.row_column, width = label_width)?;
        for label in &self.col_labels {
            write!(f, "  {:>8}", label)?;
        }
        writeln!(f, "  {:>8}", "Total")?;

        for (i, row_label) in self.row_labels.iter().enumerate() {
            write!(f, "{:<width$}", row_label, width = label_width)?;
            for &count in &self.observed[i] {
                write!(f, "  {:>8}", count)?;
            }
            writeln!(f, "  {:>8}", self.row_totals[i])?;
        }

        // Margin row
        write!(f, "{:<width$}", "Total", width = label_width)?;
        for &total in &self.col_totals {
            write!(f, "  {:>8}", total)?;
        }
        writeln!(f, "  {:>8}", self.grand_total)?;

        Ok(())
    }
}
