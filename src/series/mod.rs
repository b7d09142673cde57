use num_traits::NumCast;
use std::cmp::PartialOrd;
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use crate::error::{Error, Result};
use crate::index::RangeIndex;

/// Series structure: a one-dimensional array of values
#[derive(Debug, Clone)]
pub struct Series<T>
where
    T: Debug + Clone,
{
    /// Data values of the Series
    values: Vec<T>,

    /// Index labels
    index: RangeIndex,

    /// Name (optional)
    name: Option<String>,
}

// Basic implementation
impl<T> Series<T>
where
    T: Debug + Clone,
{
    /// Create a new Series from a vector
    pub fn new(values: Vec<T>, name: Option<String>) -> Result<Self> {
        let len = values.len();
        let index = RangeIndex::from_range(0..len)?;

        Ok(Series {
            values,
            index,
            name,
        })
    }

    /// Get the length of the Series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the Series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a position
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.values.get(pos)
    }

    /// Get the array of values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Get the name
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// Get the index
    pub fn index(&self) -> &RangeIndex {
        &self.index
    }

    /// Set the name
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

// Specialized implementation for numeric Series
impl<T> Series<T>
where
    T: Debug
        + Clone
        + Copy
        + Sum<T>
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + NumCast
        + Default,
{
    /// Compute the sum
    pub fn sum(&self) -> T {
        if self.values.is_empty() {
            T::default()
        } else {
            self.values.iter().copied().sum()
        }
    }

    /// Compute the mean
    pub fn mean(&self) -> Result<T> {
        if self.values.is_empty() {
            return Err(Error::Consistency(
                "Cannot compute the mean of an empty Series".to_string(),
            ));
        }

        let sum = self.sum();
        let count = match num_traits::cast(self.len()) {
            Some(n) => n,
            None => {
                return Err(Error::Cast(
                    "Cannot cast the length to the value type".to_string(),
                ))
            }
        };

        Ok(sum / count)
    }

    /// Compute the minimum
    pub fn min(&self) -> Result<T> {
        if self.values.is_empty() {
            return Err(Error::Consistency(
                "Cannot compute the minimum of an empty Series".to_string(),
            ));
        }

        let min = self
            .values
            .iter()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .cloned()
            .unwrap();

        Ok(min)
    }

    /// Compute the maximum
    pub fn max(&self) -> Result<T> {
        if self.values.is_empty() {
            return Err(Error::Consistency(
                "Cannot compute the maximum of an empty Series".to_string(),
            ));
        }

        let max = self
            .values
            .iter()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .cloned()
            .unwrap();

        Ok(max)
    }
}
