//! Error types
//!
//! A valuation itself fails only when the product category is not on file;
//! unknown insurers are synthesized instead. The remaining variants cover
//! reference-data and policy-block loading.

use thiserror::Error;

/// Errors produced by valuation and data loading
#[derive(Debug, Error)]
pub enum ValuationError {
    /// The product category has no reference profile. Categories are
    /// exact-match keys; there is no synthesis path for products.
    #[error("unsupported product category: {category}")]
    UnknownProductCategory { category: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Reference data loaded but failed a consistency check
    #[error("reference data error: {0}")]
    Reference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_message_names_category() {
        let err = ValuationError::UnknownProductCategory {
            category: "Term Life".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported product category: Term Life");
    }
}
