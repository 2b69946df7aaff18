//! # Pricing Configuration
//!
//! Host-supplied settings for how carts are priced.
//!
//! The crate never reads files or the environment. The host hands over the
//! configuration text, and any field it leaves out falls back to its
//! default:
//!
//! ```json
//! { "discount_percent": 10 }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::{Cart, CartTotals};
use crate::discount::Discount;
use crate::error::CartResult;
use crate::DEFAULT_DISCOUNT_PERCENT;

fn default_discount_percent() -> i64 {
    DEFAULT_DISCOUNT_PERCENT
}

/// Pricing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Percentage taken off every cart total.
    #[serde(default = "default_discount_percent")]
    pub discount_percent: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            discount_percent: default_discount_percent(),
        }
    }
}

impl PricingConfig {
    /// Parses a JSON configuration document.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::PricingConfig;
    ///
    /// let config = PricingConfig::from_json(r#"{ "discount_percent": 10 }"#).unwrap();
    /// assert_eq!(config.discount().percent(), 10);
    ///
    /// let defaults = PricingConfig::from_json("{}").unwrap();
    /// assert_eq!(defaults, PricingConfig::default());
    /// ```
    pub fn from_json(json: &str) -> CartResult<Self> {
        let config: PricingConfig = serde_json::from_str(json)?;
        debug!(discount_percent = config.discount_percent, "Loaded pricing config");
        Ok(config)
    }

    /// The configured discount.
    pub fn discount(&self) -> Discount {
        Discount::new(self.discount_percent)
    }

    /// Totals for `cart` under this configuration.
    pub fn totals(&self, cart: &Cart) -> CartTotals {
        CartTotals::new(cart, &self.discount())
    }
}
