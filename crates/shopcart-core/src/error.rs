//! # Error Types
//!
//! The cart model itself is total: lookups of missing names return `None`
//! and removing an unknown name is silent. Errors only appear where values
//! cross the JSON boundary.
//!
//! ```text
//! Cart::from_json ─┐
//! Cart::to_json ───┼──► serde_json::Error ──► CartError::Serialization
//! PricingConfig ───┘
//! ```

use thiserror::Error;

/// Errors raised at the serialization boundary.
#[derive(Debug, Error)]
pub enum CartError {
    /// JSON could not be produced or parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;
