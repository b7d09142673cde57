use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::series::Series;

/// Structure representing a grouping of a Series by key
#[derive(Debug)]
pub struct GroupBy<'a, K, T>
where
    K: Debug + Eq + Hash + Clone,
    T: Debug + Clone,
{
    /// Row positions per group key
    groups: HashMap<K, Vec<usize>>,

    /// The source Series
    source: &'a Series<T>,

    /// Group name
    #[allow(dead_code)]
    name: Option<String>,
}

impl<'a, K, T> GroupBy<'a, K, T>
where
    K: Debug + Eq + Hash + Clone,
    T: Debug + Clone,
{
    /// Create a new grouping
    pub fn new(keys: Vec<K>, source: &'a Series<T>, name: Option<String>) -> Result<Self> {
        // The keys and the source must have the same length
        if keys.len() != source.len() {
            return Err(Error::Consistency(format!(
                "Key length ({}) does not match source length ({})",
                keys.len(),
                source.len()
            )));
        }

        // Build the groups
        let mut groups: HashMap<K, Vec<usize>> = HashMap::new();
        for (i, key) in keys.into_iter().enumerate() {
            groups.entry(key).or_default().push(i);
        }

        Ok(GroupBy {
            groups,
            source,
            name,
        })
    }

    /// Get the number of groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Return the size of each group
    pub fn size(&self) -> HashMap<K, usize> {
        self.groups
            .iter()
            .map(|(k, indices)| (k.clone(), indices.len()))
            .collect()
    }

    /// Get the row positions of one group
    pub fn indices(&self, key: &K) -> Option<&[usize]> {
        self.groups.get(key).map(|v| v.as_slice())
    }
}
