//! Association measures for categorical data
//!
//! Builds a two-way contingency table from two columns of a DataFrame,
//! derives a chi-square statistic of independence from it, and transforms
//! the statistic into one of three bounded association coefficients, each
//! paired with a qualitative strength band.

pub mod contingency;
pub mod inference;

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::dataframe::DataFrame;
use crate::error::Result;

pub use contingency::{crosstab, ContingencyTable};
pub use inference::{chi_square_independence, ChiSquareResult};

/// Association coefficient kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Association {
    /// Contingency coefficient: sqrt(X2 / (X2 + n))
    Contingency,
    /// Phi coefficient: sqrt(X2 / n)
    Phi,
    /// Cramér's V: sqrt(X2 / n * min(rows - 1, cols - 1))
    CramersV,
}

impl Association {
    /// Human-readable coefficient name
    pub fn name(&self) -> &'static str {
        match self {
            Association::Contingency => "Contingency coefficient",
            Association::Phi => "Phi coefficient",
            Association::CramersV => "Cramér's V",
        }
    }
}

/// Qualitative strength bands of an association score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssociationStrength {
    Weak,
    Moderate,
    Strong,
}

impl AssociationStrength {
    /// Human-readable band label
    pub fn label(&self) -> &'static str {
        match self {
            AssociationStrength::Weak => "Weak association",
            AssociationStrength::Moderate => "Moderate association",
            AssociationStrength::Strong => "Strong association",
        }
    }
}

/// Result of an association coefficient computation
#[derive(Debug, Clone, Serialize)]
pub struct AssociationResult {
    /// Which coefficient was computed
    pub coefficient: Association,

    /// The score, unrounded
    pub score: f64,

    /// Qualitative strength band of the score
    pub strength: AssociationStrength,

    /// Underlying chi-square statistic
    pub chi2_statistic: f64,

    /// Sample size term used by the formula (margins included)
    pub n: f64,
}

impl fmt::Display for AssociationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {:.4}", self.coefficient.name(), self.score)?;
        write!(f, "{}", self.strength.label())
    }
}

/// Compute an association coefficient between two categorical columns
///
/// Cross-tabulates `col1` against `col2`, runs the chi-square test of
/// independence over the joint counts, and applies the closed-form
/// transform selected by `kind`. `n` is the sum over every cell of the
/// contingency table including its margins, and Cramér's V takes its
/// dimensions from the table including the margin row and column.
pub fn association_coefficient(
    df: &DataFrame,
    col1: &str,
    col2: &str,
    kind: Association,
) -> Result<AssociationResult> {
    let table = contingency::crosstab(df, col1, col2)?;
    let chi2 = inference::chi_square_independence(table.observed())?;
    let n = table.total_with_margins();

    debug!(
        "chi-square statistic {:.4} with {} degrees of freedom over '{}' x '{}' (n = {})",
        chi2.chi2_statistic, chi2.df, col1, col2, n
    );

    let score = match kind {
        Association::Contingency => (chi2.chi2_statistic / (chi2.chi2_statistic + n)).sqrt(),
        Association::Phi => (chi2.chi2_statistic / n).sqrt(),
        Association::CramersV => {
            let (rows, cols) = table.shape_with_margins();
            let min_df = rows.min(cols).saturating_sub(1) as f64;
            (chi2.chi2_statistic / n * min_df).sqrt()
        }
    };

    let strength = match kind {
        Association::CramersV => {
            if score < 0.2 {
                AssociationStrength::Weak
            } else if score <= 0.6 {
                AssociationStrength::Moderate
            } else {
                AssociationStrength::Strong
            }
        }
        _ => {
            if score < 0.1 {
                AssociationStrength::Weak
            } else if score <= 0.3 {
                AssociationStrength::Moderate
            } else {
                AssociationStrength::Strong
            }
        }
    };

    Ok(AssociationResult {
        coefficient: kind,
        score,
        strength,
        chi2_statistic: chi2.chi2_statistic,
        n,
    })
}

/// Contingency coefficient between two categorical columns
pub fn contingency_coefficient(df: &DataFrame, col1: &str, col2: &str) -> Result<AssociationResult> {
    association_coefficient(df, col1, col2, Association::Contingency)
}

/// Phi coefficient between two categorical columns
pub fn phi_coefficient(df: &DataFrame, col1: &str, col2: &str) -> Result<AssociationResult> {
    association_coefficient(df, col1, col2, Association::Phi)
}

/// Cramér's V between two categorical columns
pub fn cramers_v(df: &DataFrame, col1: &str, col2: &str) -> Result<AssociationResult> {
    association_coefficient(df, col1, col2, Association::CramersV)
}
