//! # shopcart-core: Cart Aggregation and Pricing
//!
//! Items with a name, unit price and quantity are added to a cart,
//! aggregated and priced. A discount applies a percentage to anything that
//! can report a cost.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         shopcart-core                                   │
//! │                                                                         │
//! │                       ┌──────────────────┐                              │
//! │                       │   Cost (trait)   │                              │
//! │                       │   fn cost()      │                              │
//! │                       └────────┬─────────┘                              │
//! │              implements ┌──────┴──────┐ implements                      │
//! │                         │             │                                 │
//! │                   ┌─────┴────┐   ┌────┴─────┐        ┌──────────────┐   │
//! │                   │   Item   │◄──│   Cart   │        │   Discount   │   │
//! │                   │  name    │   │ Vec<Item>│        │   percent    │   │
//! │                   │  price   │   │ unique   │        │ calc(&Cost)  │   │
//! │                   │ quantity │   │ by name  │        └──────────────┘   │
//! │                   └──────────┘   └──────────┘                           │
//! │                                                                         │
//! │   NO I/O • INTEGER MONEY • SINGLE-THREADED VALUES                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cost`] - The `Cost` capability
//! - [`item`] - A named priced line
//! - [`cart`] - Ordered, name-deduplicated collection of items
//! - [`discount`] - Percentage discount with truncating integer math
//! - [`config`] - Host-supplied pricing settings
//! - [`error`] - Errors at the JSON boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{Cart, Cost, Discount, Item};
//!
//! let mut cart = Cart::new();
//! cart.add(Item::new("ice cream", 2, 10));
//! cart.add(Item::new("banana", 1, 7));
//!
//! assert_eq!(cart.cost(), 27);
//! assert_eq!(cart.to_string(), "[ice cream 10 x 2$ banana 7 x 1$]");
//!
//! // 7% of 27 is 1.89, truncated to 1
//! assert_eq!(Discount::new(7).calc(&cart), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod config;
pub mod cost;
pub mod discount;
pub mod error;
pub mod item;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use config::PricingConfig;
pub use cost::Cost;
pub use discount::Discount;
pub use error::{CartError, CartResult};
pub use item::Item;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Discount applied when the pricing configuration leaves it out.
pub const DEFAULT_DISCOUNT_PERCENT: i64 = 0;
