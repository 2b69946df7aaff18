//! # Cart
//!
//! An ordered collection of [`Item`]s, deduplicated by name.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Operations                                 │
//! │                                                                         │
//! │  add(item) ──────► name present? ──yes──► entry.quantity += item.qty    │
//! │                          │                (existing price wins)         │
//! │                          no                                             │
//! │                          └──────────────► items.push(item)              │
//! │                                                                         │
//! │  find(name) ─────► linear scan, insertion order ──► (&mut Item, index)  │
//! │                                                                         │
//! │  remove(name) ───► find ──► items.remove(index)  (order preserved)      │
//! │                         └─► absent: no-op                               │
//! │                                                                         │
//! │  cost() ─────────► Σ item.cost()                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Item names are unique within a cart
//! - Insertion order survives every operation; removal never reorders
//! - Zero quantities are kept, nothing is pruned implicitly

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::cost::Cost;
use crate::discount::Discount;
use crate::error::CartResult;
use crate::item::Item;

/// The shopping cart.
///
/// Serializes as a plain array of items. Deserialization goes through
/// [`Cart::add`], so an input with repeated names is merged rather than
/// breaking the unique-name invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Item>", into = "Vec<Item>")]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds an item, merging it into an existing entry of the same name.
    ///
    /// ## Behavior
    /// - Name already in cart: the entry's quantity grows by
    ///   `item.quantity()`. Its position and price stay as they are; the
    ///   incoming price is discarded.
    /// - Name not in cart: the item is appended.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Cart, Item};
    ///
    /// let mut cart = Cart::new();
    /// cart.add(Item::new("banana", 1, 7));
    /// cart.add(Item::new("banana", 5, 2));
    ///
    /// assert_eq!(cart.size(), 1);
    /// assert_eq!(cart.get("banana"), Some(&Item::new("banana", 1, 9)));
    /// ```
    pub fn add(&mut self, item: Item) {
        if let Some((existing, index)) = self.find(item.name()) {
            existing.increase_quantity(item.quantity());
            debug!(
                name = %item.name(),
                index,
                quantity = existing.quantity(),
                "Merged item into existing cart entry"
            );
            return;
        }

        debug!(name = %item.name(), quantity = item.quantity(), "Appended item to cart");
        self.items.push(item);
    }

    /// Looks up an entry by name, returning it for in-place mutation along
    /// with its zero-based index.
    ///
    /// Returns `None` when no entry has that name.
    pub fn find(&mut self, name: &str) -> Option<(&mut Item, usize)> {
        self.items
            .iter_mut()
            .enumerate()
            .find(|(_, item)| item.name() == name)
            .map(|(index, item)| (item, index))
    }

    /// Read-only lookup by name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Zero-based index of the entry with that name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Grows the quantity of an existing entry by `delta`.
    ///
    /// Returns `false` and leaves the cart untouched when no entry has that
    /// name.
    pub fn increase_quantity(&mut self, name: &str, delta: i64) -> bool {
        match self.find(name) {
            Some((item, _)) => {
                item.increase_quantity(delta);
                true
            }
            None => false,
        }
    }

    /// Removes the entry with that name and returns it.
    ///
    /// The remaining entries keep their relative order. Removing a name that
    /// is not in the cart is a no-op and returns `None`.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let index = self.position(name)?;
        let removed = self.items.remove(index);
        debug!(name = %name, index, remaining = self.items.len(), "Removed item from cart");
        Some(removed)
    }

    /// Number of distinct entries (not summed quantities).
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the quantities of every entry.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(Item::quantity).sum()
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        debug!(cleared = self.items.len(), "Cleared cart");
        self.items.clear();
    }

    /// Serializes the cart as a JSON array of items.
    pub fn to_json(&self) -> CartResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a JSON array of items, merging repeated names.
    pub fn from_json(json: &str) -> CartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Cost for Cart {
    /// Σ of every entry's cost; an empty cart costs 0.
    fn cost(&self) -> i64 {
        self.items.cost()
    }
}

/// Renders the entries as `"[item0 item1 …]"`; an empty cart is `"[]"`.
impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

impl FromIterator<Item> for Cart {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut cart = Cart::new();
        cart.extend(iter);
        cart
    }
}

impl Extend<Item> for Cart {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl From<Vec<Item>> for Cart {
    fn from(items: Vec<Item>) -> Self {
        items.into_iter().collect()
    }
}

impl From<Cart> for Vec<Item> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Cart {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary, e.g. for a receipt footer or an API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    /// Cost before discount.
    pub cost: i64,
    /// Amount taken off by the discount.
    pub discount: i64,
    /// `cost - discount`.
    pub total: i64,
}

impl CartTotals {
    /// Summarizes `cart` with `discount` applied to its cost.
    pub fn new(cart: &Cart, discount: &Discount) -> Self {
        let cost = cart.cost();
        let saved = discount.calc(cart);
        CartTotals {
            item_count: cart.size(),
            total_quantity: cart.total_quantity(),
            cost,
            discount: saved,
            total: cost - saved,
        }
    }
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals::new(cart, &Discount::none())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn groceries() -> Cart {
        let mut cart = Cart::new();
        cart.add(Item::new("banana", 1, 7));
        cart.add(Item::new("eggs", 2, 3));
        cart.add(Item::new("milk", 3, 1));
        cart
    }

    fn names(cart: &Cart) -> Vec<&str> {
        cart.iter().map(Item::name).collect()
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert_eq!(cart.size(), 0);
        assert_eq!(cart.cost(), 0);
        assert_eq!(cart.to_string(), "[]");
        assert!(cart.is_empty());
        assert_eq!(cart.get("banana"), None);
    }

    #[test]
    fn test_add_appends_in_order() {
        let cart = groceries();
        assert_eq!(names(&cart), vec!["banana", "eggs", "milk"]);
        assert_eq!(cart.size(), 3);
    }

    #[test]
    fn test_add_existing_name_merges_quantity() {
        let mut cart = groceries();
        cart.add(Item::new("eggs", 99, 4));

        assert_eq!(cart.size(), 3);
        assert_eq!(cart.position("eggs"), Some(1));
        // Existing price wins over the incoming one.
        assert_eq!(cart.get("eggs"), Some(&Item::new("eggs", 2, 7)));
        assert_eq!(cart.get("banana"), Some(&Item::new("banana", 1, 7)));
    }

    #[test]
    fn test_add_zero_quantity_still_creates_entry() {
        let mut cart = Cart::new();
        cart.add(Item::new("ketchup", 4, 0));

        assert_eq!(cart.size(), 1);
        assert_eq!(cart.cost(), 0);

        cart.add(Item::new("ketchup", 4, 0));
        assert_eq!(cart.get("ketchup"), Some(&Item::new("ketchup", 4, 0)));
    }

    #[test]
    fn test_find_returns_mutable_entry_and_index() {
        let mut cart = groceries();

        let (item, index) = cart.find("milk").unwrap();
        assert_eq!(index, 2);
        item.increase_quantity(2);

        assert_eq!(cart.get("milk").map(Item::quantity), Some(3));
        assert!(cart.find("ketchup").is_none());
        assert!(Cart::new().find("milk").is_none());
    }

    #[test]
    fn test_increase_quantity() {
        let mut cart = groceries();

        assert!(cart.increase_quantity("banana", 3));
        assert_eq!(cart.get("banana").map(Item::quantity), Some(10));

        assert!(!cart.increase_quantity("ketchup", 3));
        assert_eq!(cart.size(), 3);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut cart = groceries();

        let removed = cart.remove("banana");
        assert_eq!(removed, Some(Item::new("banana", 1, 7)));
        assert_eq!(names(&cart), vec!["eggs", "milk"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = groceries();
        assert_eq!(cart.remove("ketchup"), None);
        assert_eq!(cart.size(), 3);

        let mut empty = Cart::new();
        assert_eq!(empty.remove("ketchup"), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_cost_and_quantity_totals() {
        let cart = groceries();
        // 1×7 + 2×3 + 3×1
        assert_eq!(cart.cost(), 16);
        assert_eq!(cart.total_quantity(), 11);
    }

    #[test]
    fn test_display() {
        let mut cart = Cart::new();
        cart.add(Item::new("ice cream", 2, 10));
        cart.add(Item::new("banana", 1, 7));

        assert_eq!(cart.to_string(), "[ice cream 10 x 2$ banana 7 x 1$]");
    }

    #[test]
    fn test_clear() {
        let mut cart = groceries();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.cost(), 0);
    }

    #[test]
    fn test_collect_merges_duplicates() {
        let cart: Cart = vec![
            Item::new("banana", 1, 7),
            Item::new("eggs", 2, 3),
            Item::new("banana", 1, 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.size(), 2);
        assert_eq!(cart.get("banana"), Some(&Item::new("banana", 1, 9)));
    }

    #[test]
    fn test_totals() {
        let cart = groceries();

        let plain = CartTotals::from(&cart);
        assert_eq!(plain.item_count, 3);
        assert_eq!(plain.total_quantity, 11);
        assert_eq!(plain.cost, 16);
        assert_eq!(plain.discount, 0);
        assert_eq!(plain.total, 16);

        let discounted = CartTotals::new(&cart, &Discount::new(25));
        assert_eq!(discounted.discount, 4);
        assert_eq!(discounted.total, 12);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    fn item_strategy() -> impl Strategy<Value = Item> {
        ("[a-e]", 0i64..1_000, 0i64..100)
            .prop_map(|(name, price, quantity)| Item::new(name, price, quantity))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Size counts the distinct names added and not removed since.
        #[test]
        fn size_tracks_distinct_live_names(
            added in prop::collection::vec(item_strategy(), 0..20),
            removed in prop::collection::vec("[a-g]", 0..5),
        ) {
            let mut cart = Cart::new();
            let mut live = HashSet::new();

            for item in added {
                live.insert(item.name().to_string());
                cart.add(item);
            }
            for name in &removed {
                live.remove(name);
                cart.remove(name);
            }

            prop_assert_eq!(cart.size(), live.len());
            for name in &live {
                prop_assert!(cart.contains(name));
            }
        }

        /// Names stay unique and cost is always the sum of entry costs.
        #[test]
        fn cost_is_sum_of_unique_entries(
            added in prop::collection::vec(item_strategy(), 0..20),
        ) {
            let cart: Cart = added.into_iter().collect();

            let unique: HashSet<&str> = cart.iter().map(Item::name).collect();
            prop_assert_eq!(unique.len(), cart.size());

            let expected: i64 = cart.iter().map(|item| item.price() * item.quantity()).sum();
            prop_assert_eq!(cart.cost(), expected);
        }

        /// Re-adding a known name only grows that entry's quantity.
        #[test]
        fn merge_only_touches_matching_entry(
            added in prop::collection::vec(item_strategy(), 1..20),
            pick in any::<prop::sample::Index>(),
            price in 0i64..1_000,
            extra in 0i64..100,
        ) {
            let mut cart: Cart = added.into_iter().collect();
            let before = cart.clone();
            let target = pick.get(before.items()).clone();

            cart.add(Item::new(target.name(), price, extra));

            prop_assert_eq!(cart.size(), before.size());
            for (after, prior) in cart.iter().zip(before.iter()) {
                if after.name() == target.name() {
                    prop_assert_eq!(after.quantity(), prior.quantity() + extra);
                    prop_assert_eq!(after.price(), prior.price());
                } else {
                    prop_assert_eq!(after, prior);
                }
            }
        }

        /// Removing then re-adding an entry keeps size, cost and membership.
        #[test]
        fn remove_then_readd_is_equivalent(
            added in prop::collection::vec(item_strategy(), 1..20),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut cart: Cart = added.into_iter().collect();
            let before = cart.clone();
            let target = pick.get(before.items()).name().to_string();

            let removed = cart.remove(&target);
            prop_assert!(removed.is_some());
            prop_assert!(!cart.contains(&target));
            cart.add(removed.unwrap());

            prop_assert_eq!(cart.size(), before.size());
            prop_assert_eq!(cart.cost(), before.cost());
            for item in &before {
                prop_assert_eq!(cart.get(item.name()), Some(item));
            }
        }
    }
}
