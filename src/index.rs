use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Range;

/// Index structure
///
/// Represents the row labels of a Series or DataFrame.
#[derive(Debug, Clone)]
pub struct Index<T>
where
    T: Debug + Clone + Eq + Hash + Display,
{
    /// Index values
    values: Vec<T>,

    /// Mapping from value to position
    map: HashMap<T, usize>,
}

impl<T> Index<T>
where
    T: Debug + Clone + Eq + Hash + Display,
{
    /// Create a new index
    pub fn new(values: Vec<T>) -> Result<Self> {
        let mut map = HashMap::with_capacity(values.len());

        // Build the map while checking uniqueness
        for (i, value) in values.iter().enumerate() {
            if map.insert(value.clone(), i).is_some() {
                return Err(Error::Index(format!(
                    "Duplicate index value '{}'",
                    value
                )));
            }
        }

        Ok(Index { values, map })
    }

    /// Create an index from an integer range
    pub fn from_range(range: Range<usize>) -> Result<Index<usize>> {
        let values: Vec<usize> = range.collect();
        Index::<usize>::new(values)
    }

    /// Get the index length
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the position of a value
    pub fn get_loc(&self, key: &T) -> Option<usize> {
        self.map.get(key).copied()
    }

    /// Get the value at a position
    pub fn get_value(&self, pos: usize) -> Option<&T> {
        self.values.get(pos)
    }

    /// Get all values
    pub fn values(&self) -> &[T] {
        &self.values
    }
}

/// Integer index type alias
pub type RangeIndex = Index<usize>;
