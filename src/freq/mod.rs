//! Frequency tables for categorical and ordinal columns
//!
//! `frequency_table` counts the distinct values of one column and derives
//! relative frequencies and percentages. `ordinal_frequency_table` adds the
//! cumulative columns that only make sense once the categories carry an
//! order. When the natural (lexicographic) order of the labels is not the
//! intended one, `with_category_order` runs either aggregator under a
//! caller-supplied category order.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::groupby::GroupBy;
use crate::series::Series;

/// Round to the given number of decimal places
fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Cumulative columns of an ordinal frequency table
#[derive(Debug, Clone)]
pub struct CumulativeFrequencies {
    /// Cumulative absolute frequency
    absolute: Series<usize>,

    /// Cumulative relative frequency (4 decimals)
    relative: Series<f64>,

    /// Cumulative percentage (2 decimals)
    percent: Series<f64>,
}

impl CumulativeFrequencies {
    /// Cumulative absolute frequencies
    pub fn absolute(&self) -> &Series<usize> {
        &self.absolute
    }

    /// Cumulative relative frequencies
    pub fn relative(&self) -> &Series<f64> {
        &self.relative
    }

    /// Cumulative percentages
    pub fn percent(&self) -> &Series<f64> {
        &self.percent
    }
}

/// One row of a frequency table in exportable form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    /// Category label
    pub category: String,

    /// Absolute frequency
    pub absolute: usize,

    /// Relative frequency
    pub relative: f64,

    /// Percentage
    pub percent: f64,

    /// Cumulative absolute frequency (ordinal tables only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_absolute: Option<usize>,

    /// Cumulative relative frequency (ordinal tables only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_relative: Option<f64>,

    /// Cumulative percentage (ordinal tables only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_percent: Option<f64>,
}

/// Frequency table of one categorical column
///
/// One row per distinct category, in ascending label order (or in the
/// caller's order when built through `with_category_order`). The table is a
/// freshly computed snapshot; it holds no reference to the source frame.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    /// Name of the tabulated column
    column: String,

    /// Category labels, one per row
    categories: Series<String>,

    /// Absolute frequencies
    absolute: Series<usize>,

    /// Relative frequencies (4 decimals)
    relative: Series<f64>,

    /// Percentages (2 decimals)
    percent: Series<f64>,

    /// Cumulative columns, present for ordinal tables
    cumulative: Option<CumulativeFrequencies>,
}

impl FrequencyTable {
    /// Name of the tabulated column
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Number of rows (distinct categories)
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category labels
    pub fn categories(&self) -> &Series<String> {
        &self.categories
    }

    /// Absolute frequencies
    pub fn absolute(&self) -> &Series<usize> {
        &self.absolute
    }

    /// Relative frequencies
    pub fn relative(&self) -> &Series<f64> {
        &self.relative
    }

    /// Percentages
    pub fn percent(&self) -> &Series<f64> {
        &self.percent
    }

    /// Cumulative columns, if this is an ordinal table
    pub fn cumulative(&self) -> Option<&CumulativeFrequencies> {
        self.cumulative.as_ref()
    }

    /// Get one row in exportable form
    pub fn row(&self, pos: usize) -> Option<FrequencyRow> {
        let category = self.categories.get(pos)?.clone();
        Some(FrequencyRow {
            category,
            absolute: *self.absolute.get(pos)?,
            relative: *self.relative.get(pos)?,
            percent: *self.percent.get(pos)?,
            cumulative_absolute: self
                .cumulative
                .as_ref()
                .and_then(|c| c.absolute.get(pos).copied()),
            cumulative_relative: self
                .cumulative
                .as_ref()
                .and_then(|c| c.relative.get(pos).copied()),
            cumulative_percent: self
                .cumulative
                .as_ref()
                .and_then(|c| c.percent.get(pos).copied()),
        })
    }

    /// Get all rows in exportable form
    pub fn rows(&self) -> Vec<FrequencyRow> {
        (0..self.len()).filter_map(|i| self.row(i)).collect()
    }

    /// Replace the category labels, preserving row order
    ///
    /// Used to translate stand-in labels back after an ordered computation.
    fn relabel(mut self, labels: Vec<String>) -> Result<Self> {
        if labels.len() != self.len() {
            return Err(Error::Consistency(format!(
                "Label count ({}) does not match the table row count ({})",
                labels.len(),
                self.len()
            )));
        }
        self.categories = Series::new(labels, Some(self.column.clone()))?;
        Ok(self)
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .categories
            .values()
            .iter()
            .map(|c| c.len())
            .chain(std::iter::once(self.column.len()))
            .max()
            .unwrap_or(0);

        write!(
            f,
            "{:<width$}  {:>8}  {:>8}  {:>8}",
            self.column,
            "Fa",
            "fr",
            "Percent",
            width = label_width
        )?;
        if self.cumulative.is_some() {
            write!(f, "  {:>8}  {:>8}  {:>10}", "Facum", "facum", "Percenacum")?;
        }
        writeln!(f)?;

        for i in 0..self.len() {
            write!(
                f,
                "{:<width$}  {:>8}  {:>8.4}  {:>8.2}",
                self.categories.values()[i],
                self.absolute.values()[i],
                self.relative.values()[i],
                self.percent.values()[i],
                width = label_width
            )?;
            if let Some(cumulative) = &self.cumulative {
                write!(
                    f,
                    "  {:>8}  {:>8.4}  {:>10.2}",
                    cumulative.absolute.values()[i],
                    cumulative.relative.values()[i],
                    cumulative.percent.values()[i],
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Sorted (category, count) pairs of one column
fn category_counts(df: &DataFrame, column: &str) -> Result<Vec<(String, usize)>> {
    let series = df.column(column)?;

    if series.is_empty() {
        return Err(Error::EmptyData(format!(
            "Cannot tabulate column '{}' of an empty frame",
            column
        )));
    }

    // Group the column by its own values and take the group sizes
    let keys = series.values().to_vec();
    let grouped = GroupBy::new(keys, series, Some(column.to_string()))?;

    let mut counts: Vec<(String, usize)> = grouped.size().into_iter().collect();
    counts.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(counts)
}

/// Assemble a frequency table from sorted counts
fn build_table(
    column: &str,
    counts: Vec<(String, usize)>,
    with_cumulative: bool,
) -> Result<FrequencyTable> {
    let (categories, counts): (Vec<String>, Vec<usize>) = counts.into_iter().unzip();

    let absolute = Series::new(counts, Some("Fa".to_string()))?;
    let total = absolute.sum();

    // Relative frequencies and percentages
    let relative: Vec<f64> = absolute
        .values()
        .iter()
        .map(|&c| round_to(c as f64 / total as f64, 4))
        .collect();
    let percent: Vec<f64> = relative.iter().map(|&r| round_to(100.0 * r, 2)).collect();

    // Cumulative columns via running sums over the already-ordered rows
    let cumulative = if with_cumulative {
        let mut running = 0usize;
        let mut cumulative_absolute = Vec::with_capacity(absolute.len());
        for &count in absolute.values() {
            running += count;
            cumulative_absolute.push(running);
        }
        let cumulative_relative: Vec<f64> = cumulative_absolute
            .iter()
            .map(|&c| round_to(c as f64 / total as f64, 4))
            .collect();
        let cumulative_percent: Vec<f64> = cumulative_relative
            .iter()
            .map(|&r| round_to(100.0 * r, 2))
            .collect();

        Some(CumulativeFrequencies {
            absolute: Series::new(cumulative_absolute, Some("Facum".to_string()))?,
            relative: Series::new(cumulative_relative, Some("facum".to_string()))?,
            percent: Series::new(cumulative_percent, Some("Percenacum".to_string()))?,
        })
    } else {
        None
    };

    Ok(FrequencyTable {
        column: column.to_string(),
        categories: Series::new(categories, Some(column.to_string()))?,
        absolute,
        relative: Series::new(relative, Some("fr".to_string()))?,
        percent: Series::new(percent, Some("Percent".to_string()))?,
        cumulative,
    })
}

/// Build a frequency table for one categorical column
///
/// Rows appear in ascending label order. The relative frequency is rounded
/// to 4 decimals and the percentage to 2.
pub fn frequency_table(df: &DataFrame, column: &str) -> Result<FrequencyTable> {
    build_table(column, category_counts(df, column)?, false)
}

/// Build a frequency table with cumulative columns for an ordinal column
///
/// The label order must already reflect the intended ordinal order; use
/// `ordinal_frequency_table_with_order` when it does not. The cumulative
/// columns are running sums over the ordered rows, so the last cumulative
/// absolute frequency equals the row count and the last cumulative
/// percentage equals 100 up to rounding.
pub fn ordinal_frequency_table(df: &DataFrame, column: &str) -> Result<FrequencyTable> {
    build_table(column, category_counts(df, column)?, true)
}

/// Run a table aggregator under an explicit category order
///
/// `ordered` names the desired left-to-right row order. It may be a superset
/// of the categories actually present; absent labels are skipped. The
/// column's labels are encoded as zero-padded rank stand-ins on an internal
/// copy of the frame, so that the aggregator's natural sort reproduces the
/// requested order, and the output labels are translated back afterwards.
/// The caller's frame is never modified.
pub fn with_category_order<S, F>(
    df: &DataFrame,
    column: &str,
    ordered: &[S],
    table_fn: F,
) -> Result<FrequencyTable>
where
    S: AsRef<str>,
    F: Fn(&DataFrame, &str) -> Result<FrequencyTable>,
{
    let series = df.column(column)?;

    // Stand-in labels are ranks padded to a fixed width so that their
    // lexicographic order matches the numeric order.
    let width = ordered.len().saturating_sub(1).to_string().len();
    let mut code_of: HashMap<&str, String> = HashMap::with_capacity(ordered.len());
    let mut label_of: HashMap<String, String> = HashMap::with_capacity(ordered.len());
    for (rank, label) in ordered.iter().enumerate() {
        let label = label.as_ref();
        let code = format!("{:0width$}", rank, width = width);
        if code_of.insert(label, code.clone()).is_some() {
            return Err(Error::DuplicateLabel(label.to_string()));
        }
        label_of.insert(code, label.to_string());
    }

    // Encode the column on a copy of the frame
    let encoded: Vec<String> = series
        .values()
        .iter()
        .map(|value| {
            code_of
                .get(value.as_str())
                .cloned()
                .ok_or_else(|| Error::UnknownCategory(value.clone()))
        })
        .collect::<Result<_>>()?;

    let mut working = df.clone();
    working.replace_column(column, Series::new(encoded, Some(column.to_string()))?)?;

    let table = table_fn(&working, column)?;

    // Translate the stand-in labels back in the result
    let labels: Vec<String> = table
        .categories()
        .values()
        .iter()
        .map(|code| {
            label_of.get(code).cloned().ok_or_else(|| {
                Error::Consistency(format!("Unexpected stand-in label '{}'", code))
            })
        })
        .collect::<Result<_>>()?;

    table.relabel(labels)
}

/// Frequency table under an explicit category order
pub fn frequency_table_with_order<S: AsRef<str>>(
    df: &DataFrame,
    column: &str,
    ordered: &[S],
) -> Result<FrequencyTable> {
    with_category_order(df, column, ordered, frequency_table)
}

/// Ordinal frequency table under an explicit category order
pub fn ordinal_frequency_table_with_order<S: AsRef<str>>(
    df: &DataFrame,
    column: &str,
    ordered: &[S],
) -> Result<FrequencyTable> {
    with_category_order(df, column, ordered, ordinal_frequency_table)
}
