//! Chi-square test of independence over a contingency table

use std::f64::consts::PI;

use crate::error::{Error, Result};

/// Result of a chi-square test of independence
#[derive(Debug, Clone)]
pub struct ChiSquareResult {
    /// Chi-square statistic
    pub chi2_statistic: f64,

    /// p-value (approximate)
    pub p_value: f64,

    /// Degrees of freedom
    pub df: usize,

    /// Expected frequencies under independence
    pub expected_freq: Vec<Vec<f64>>,
}

/// Approximate p-value for a chi-square statistic
fn chi2_to_pvalue(chi2: f64, df: usize) -> f64 {
    // Coarse approximation of the upper tail via the incomplete gamma
    // function. Adequate for the qualitative reporting done here; a
    // special-function crate would be needed for publication-grade p-values.
    let k = df as f64 / 2.0;
    let x = chi2 / 2.0;

    let gamma_k = if df % 2 == 0 {
        1.0 // k is an integer
    } else {
        (PI * 2.0).sqrt() // k + 0.5 is an integer
    };

    let p = if chi2 > df as f64 + 2.0 {
        1.0 - gamma_k * (1.0 - x.exp() * (1.0 + x + 0.5 * x.powi(2)))
    } else {
        gamma_k * x.exp() * x.powf(k - 1.0)
    };

    1.0 - p.clamp(0.0, 1.0)
}

/// Chi-square test of independence
///
/// `observed` is a rectangular table of joint counts, margins excluded.
/// Expected frequencies are `row_total * col_total / grand_total`; the
/// statistic is the sum of `(observed - expected)^2 / expected` over all
/// cells, with `(rows - 1) * (cols - 1)` degrees of freedom.
pub fn chi_square_independence(observed: &[Vec<f64>]) -> Result<ChiSquareResult> {
    if observed.is_empty() {
        return Err(Error::DegenerateTable(
            "The contingency table has no rows".to_string(),
        ));
    }

    let rows = observed.len();
    let cols = observed[0].len();

    if rows < 2 || cols < 2 {
        return Err(Error::DegenerateTable(format!(
            "The statistic needs at least a 2x2 table, got {}x{}",
            rows, cols
        )));
    }

    // The table must be rectangular
    for row in observed {
        if row.len() != cols {
            return Err(Error::DegenerateTable(
                "The contingency table is ragged".to_string(),
            ));
        }
    }

    // Row and column totals
    let mut row_sums = vec![0.0; rows];
    let mut col_sums = vec![0.0; cols];
    let mut total_sum = 0.0;

    for (i, row) in observed.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if value < 0.0 {
                return Err(Error::DegenerateTable(
                    "Observed counts must be non-negative".to_string(),
                ));
            }
            row_sums[i] += value;
            col_sums[j] += value;
            total_sum += value;
        }
    }

    if total_sum <= 0.0 {
        return Err(Error::DegenerateTable(
            "The contingency table sums to zero".to_string(),
        ));
    }

    // A zero margin leaves the expected frequency undefined
    if row_sums.iter().any(|&s| s == 0.0) || col_sums.iter().any(|&s| s == 0.0) {
        return Err(Error::DegenerateTable(
            "A row or column of the contingency table sums to zero".to_string(),
        ));
    }

    // Expected frequencies and the statistic
    let mut expected = vec![vec![0.0; cols]; rows];
    let mut chi2_statistic = 0.0;

    for i in 0..rows {
        for j in 0..cols {
            expected[i][j] = row_sums[i] * col_sums[j] / total_sum;
            let diff = observed[i][j] - expected[i][j];
            chi2_statistic += diff * diff / expected[i][j];
        }
    }

    let df = (rows - 1) * (cols - 1);
    let p_value = chi2_to_pvalue(chi2_statistic, df);

    Ok(ChiSquareResult {
        chi2_statistic,
        p_value,
        df,
        expected_freq: expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chi_square_basic() {
        let observed = vec![vec![10.0, 10.0], vec![10.0, 20.0]];

        let result = chi_square_independence(&observed).unwrap();

        // Row sums 20/30, column sums 20/30, total 50:
        // E = [[8, 12], [12, 18]], chi2 = 4/8 + 4/12 + 4/12 + 4/18
        assert!((result.chi2_statistic - 1.3889).abs() < 1e-3);
        assert_eq!(result.df, 1); // (2-1) * (2-1) = 1
        assert!(result.p_value >= 0.0 && result.p_value <= 1.0);

        // Expected frequency dimensions
        assert_eq!(result.expected_freq.len(), 2);
        assert_eq!(result.expected_freq[0].len(), 2);
        assert!((result.expected_freq[0][0] - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_chi_square_independent_table() {
        // Perfectly proportional counts carry no association
        let observed = vec![vec![10.0, 10.0], vec![10.0, 10.0]];

        let result = chi_square_independence(&observed).unwrap();
        assert!(result.chi2_statistic.abs() < 1e-10);
    }

    #[test]
    fn test_chi_square_too_small() {
        let observed = vec![vec![5.0, 5.0]];
        let result = chi_square_independence(&observed);
        assert!(matches!(result, Err(Error::DegenerateTable(_))));
    }

    #[test]
    fn test_chi_square_ragged() {
        let observed = vec![vec![5.0, 5.0], vec![5.0]];
        let result = chi_square_independence(&observed);
        assert!(matches!(result, Err(Error::DegenerateTable(_))));
    }

    #[test]
    fn test_chi_square_zero_margin() {
        let observed = vec![vec![5.0, 0.0], vec![5.0, 0.0]];
        let result = chi_square_independence(&observed);
        assert!(matches!(result, Err(Error::DegenerateTable(_))));
    }

    #[test]
    fn test_chi_square_negative_count() {
        let observed = vec![vec![5.0, -1.0], vec![5.0, 5.0]];
        let result = chi_square_independence(&observed);
        assert!(matches!(result, Err(Error::DegenerateTable(_))));
    }
}
