use std::collections::HashMap;
use std::fmt::{Debug, Display};

use crate::error::{Error, Result};
use crate::series::Series;

/// DataFrame structure: an ordered collection of named columns
///
/// Columns are stored in categorical (string) form, which is the shape the
/// frequency and association routines operate on. `add_column` accepts any
/// displayable Series and converts its values on insertion.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    /// Column data keyed by column name
    columns: HashMap<String, Series<String>>,

    /// Column names in insertion order
    column_names: Vec<String>,

    /// Number of rows
    row_count: usize,
}

impl DataFrame {
    /// Create an empty DataFrame
    pub fn new() -> Self {
        DataFrame {
            columns: HashMap::new(),
            column_names: Vec::new(),
            row_count: 0,
        }
    }

    /// Add a column to the DataFrame
    pub fn add_column<T>(&mut self, name: String, series: Series<T>) -> Result<()>
    where
        T: Debug + Clone + Display,
    {
        if self.columns.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }

        if !self.column_names.is_empty() && series.len() != self.row_count {
            return Err(Error::Consistency(format!(
                "Column length ({}) does not match the row count ({})",
                series.len(),
                self.row_count
            )));
        }

        let values: Vec<String> = series.values().iter().map(|v| v.to_string()).collect();
        let stored = Series::new(values, Some(name.clone()))?;

        if self.column_names.is_empty() {
            self.row_count = stored.len();
        }

        self.column_names.push(name.clone());
        self.columns.insert(name, stored);
        Ok(())
    }

    /// Replace the data of an existing column
    pub fn replace_column(&mut self, name: &str, series: Series<String>) -> Result<()> {
        if !self.columns.contains_key(name) {
            return Err(Error::ColumnNotFound(name.to_string()));
        }

        if series.len() != self.row_count {
            return Err(Error::Consistency(format!(
                "Column length ({}) does not match the row count ({})",
                series.len(),
                self.row_count
            )));
        }

        self.columns.insert(name.to_string(), series);
        Ok(())
    }

    /// Whether a column exists
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Result<&Series<String>> {
        self.columns
            .get(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Get the values of a column as strings
    pub fn get_column_string_values(&self, name: &str) -> Result<Vec<String>> {
        Ok(self.column(name)?.values().to_vec())
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the column names in insertion order
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }
}
