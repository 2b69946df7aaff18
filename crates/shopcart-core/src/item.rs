//! # Item
//!
//! A single named, priced line in a cart.
//!
//! ```text
//! ┌──────────────────────────┐
//! │          Item            │
//! │  ──────────────────────  │      cost()     = price × quantity
//! │  name      "banana"      │      to_string() = "banana 7 x 1$"
//! │  price     1             │
//! │  quantity  7             │
//! └──────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cost::Cost;

/// A named priced line.
///
/// Items are plain values: cloning gives an independent copy. The quantity
/// of an item only changes once it is owned by a [`Cart`](crate::Cart),
/// when another item with the same name is merged into it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,

    /// Unit price in the smallest currency unit.
    price: i64,

    quantity: i64,
}

impl Item {
    /// Creates an item.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cost, Item};
    ///
    /// let banana = Item::new("banana", 1, 7);
    /// assert_eq!(banana.cost(), 7);
    /// assert_eq!(banana.to_string(), "banana 7 x 1$");
    /// ```
    pub fn new(name: impl Into<String>, price: i64, quantity: i64) -> Self {
        Item {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// The identifier used for merge and lookup inside a cart.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn price(&self) -> i64 {
        self.price
    }

    #[inline]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    pub(crate) fn increase_quantity(&mut self, delta: i64) {
        self.quantity += delta;
    }
}

impl Cost for Item {
    #[inline]
    fn cost(&self) -> i64 {
        self.price * self.quantity
    }
}

/// Renders `"<name> <quantity> x <price>$"`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} x {}$", self.name, self.quantity, self.price)
    }
}
