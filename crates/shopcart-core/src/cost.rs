//! # Cost Capability
//!
//! The single-method contract that links [`Discount`](crate::Discount) to
//! everything it can price.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Who Implements Cost                             │
//! │                                                                         │
//! │   Item ─────────► price × quantity                                      │
//! │   Cart ─────────► Σ item.cost()                                         │
//! │   [T] / Vec<T> ─► Σ element.cost()                                      │
//! │   &T, Box<T> ───► forwards to T                                         │
//! │                                                                         │
//! │   Discount::calc(&impl Cost) works on all of the above                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Anything that can report its current cost in whole currency units.
///
/// There is no error path: the cost is always defined. Overflow is the
/// caller's concern.
///
/// ## Example
/// ```rust
/// use shopcart_core::{Cost, Discount, Item};
///
/// struct Flat(i64);
///
/// impl Cost for Flat {
///     fn cost(&self) -> i64 {
///         self.0
///     }
/// }
///
/// assert_eq!(Discount::new(50).calc(&Flat(40)), 20);
/// assert_eq!(Discount::new(50).calc(&Item::new("tea", 3, 2)), 3);
/// ```
pub trait Cost {
    /// Returns the current cost.
    fn cost(&self) -> i64;
}

impl<T: Cost + ?Sized> Cost for &T {
    #[inline]
    fn cost(&self) -> i64 {
        (**self).cost()
    }
}

impl<T: Cost + ?Sized> Cost for &mut T {
    #[inline]
    fn cost(&self) -> i64 {
        (**self).cost()
    }
}

impl<T: Cost + ?Sized> Cost for Box<T> {
    #[inline]
    fn cost(&self) -> i64 {
        (**self).cost()
    }
}

/// A slice costs the sum of its elements; an empty slice costs 0.
impl<T: Cost> Cost for [T] {
    fn cost(&self) -> i64 {
        self.iter().map(Cost::cost).sum()
    }
}

impl<T: Cost> Cost for Vec<T> {
    fn cost(&self) -> i64 {
        self.as_slice().cost()
    }
}
