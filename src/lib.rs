//! Exploratory-data-analysis helpers for categorical and ordinal
//! survey-style data: frequency tables (nominal and ordinal, with optional
//! explicit category ordering) and chi-square-derived association
//! coefficients (contingency coefficient, phi coefficient, Cramér's V).
//!
//! ```rust
//! use catfreq::{frequency_table, DataFrame, Series};
//!
//! let mut df = DataFrame::new();
//! let answers = Series::new(
//!     vec!["Yes".to_string(), "Yes".to_string(), "No".to_string()],
//!     Some("answer".to_string()),
//! )
//! .unwrap();
//! df.add_column("answer".to_string(), answers).unwrap();
//!
//! let table = frequency_table(&df, "answer").unwrap();
//! assert_eq!(table.len(), 2);
//! ```

pub mod dataframe;
pub mod error;
pub mod freq;
pub mod groupby;
pub mod index;
pub mod series;
pub mod stats;

// Re-export commonly used types
pub use dataframe::DataFrame;
pub use error::{Error, Result};
pub use freq::{
    frequency_table, frequency_table_with_order, ordinal_frequency_table,
    ordinal_frequency_table_with_order, with_category_order, FrequencyRow, FrequencyTable,
};
pub use groupby::GroupBy;
pub use index::Index;
pub use series::Series;
pub use stats::{
    association_coefficient, contingency_coefficient, cramers_v, phi_coefficient, Association,
    AssociationResult, AssociationStrength,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
