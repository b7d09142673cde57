use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Data consistency error: {0}")]
    Consistency(String),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Cast error: {0}")]
    Cast(String),

    #[error("Category not covered by the supplied order: {0}")]
    UnknownCategory(String),

    #[error("Duplicate label in category order: {0}")]
    DuplicateLabel(String),

    #[error("Degenerate contingency table: {0}")]
    DegenerateTable(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
