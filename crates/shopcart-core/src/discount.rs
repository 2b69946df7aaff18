//! # Discount
//!
//! Percentage discount over anything that implements [`Cost`].
//!
//! ## Truncation, Not Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  saved = percent × cost / 100   (integer division, toward zero)         │
//! │                                                                         │
//! │    Discount(10) on cost 20  →  200 / 100 = 2                            │
//! │    Discount(7)  on cost 20  →  140 / 100 = 1   (1.4 truncated, not 2)   │
//! │    Discount(7)  on cost 27  →  189 / 100 = 1   (1.89 truncated)         │
//! │                                                                         │
//! │  No floating point is involved, so there is no 0.1 + 0.2 drift.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::cost::Cost;

/// A percentage discount.
///
/// `percent` is meant to lie in `0..=100` but is neither clamped nor
/// validated; values outside that range produce whatever the arithmetic
/// gives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discount {
    percent: i64,
}

impl Discount {
    #[inline]
    pub const fn new(percent: i64) -> Self {
        Discount { percent }
    }

    /// A discount that saves nothing.
    #[inline]
    pub const fn none() -> Self {
        Discount { percent: 0 }
    }

    #[inline]
    pub const fn percent(&self) -> i64 {
        self.percent
    }

    /// Returns the amount saved on `target`, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cart, Discount, Item};
    ///
    /// let ice_cream = Item::new("ice cream", 2, 10);
    /// assert_eq!(Discount::new(10).calc(&ice_cream), 2);
    /// assert_eq!(Discount::new(7).calc(&ice_cream), 1);
    ///
    /// let cart: Cart = vec![ice_cream, Item::new("banana", 1, 7)].into_iter().collect();
    /// assert_eq!(Discount::new(7).calc(&cart), 1);
    /// ```
    pub fn calc<C: Cost + ?Sized>(&self, target: &C) -> i64 {
        let cost = target.cost();
        // i128 keeps percent × cost exact; `/` truncates toward zero.
        let saved = (self.percent as i128 * cost as i128 / 100) as i64;
        trace!(percent = self.percent, cost, saved, "Calculated discount");
        saved
    }

    /// Returns the cost of `target` after the discount.
    pub fn apply<C: Cost + ?Sized>(&self, target: &C) -> i64 {
        target.cost() - self.calc(target)
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent)
    }
}
