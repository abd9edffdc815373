//! Wishlist: an insertion-ordered set of product ids.

use serde::{Deserialize, Serialize};

use crate::ProductId;

/// Session key under which the wishlist is persisted.
pub const WISHLIST_STORAGE_KEY: &str = "lunarituals_wishlist";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<ProductId>,
}

impl Wishlist {
    /// Add an id. Adding an id already present is a no-op.
    ///
    /// Returns `true` if the id was inserted.
    pub fn add(&mut self, id: ProductId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.items.push(id);
        true
    }

    /// Remove an id. Returns `true` if it was present.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i != id);
        self.items.len() != before
    }

    /// Add the id if absent, otherwise remove it. Returns whether the id is
    /// in the wishlist afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.remove(&id) {
            false
        } else {
            self.items.push(id);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.contains(id)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Ids in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pid(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut w = Wishlist::default();
        assert!(w.add(pid("aff-001")));
        assert!(!w.add(pid("aff-001")));
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut w = Wishlist::default();
        w.add(pid("aff-003"));
        w.add(pid("aff-001"));
        w.add(pid("cnd-002"));
        let ids: Vec<_> = w.items().iter().map(ProductId::as_str).collect();
        assert_eq!(ids, ["aff-003", "aff-001", "cnd-002"]);
    }

    #[test]
    fn test_remove_and_toggle() {
        let mut w = Wishlist::default();
        w.add(pid("aff-001"));
        assert!(w.remove(&pid("aff-001")));
        assert!(!w.remove(&pid("aff-001")));

        assert!(w.toggle(pid("book-002")));
        assert!(w.contains(&pid("book-002")));
        assert!(!w.toggle(pid("book-002")));
        assert!(w.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut w = Wishlist::default();
        w.add(pid("aff-001"));
        w.add(pid("aff-002"));
        w.clear();
        assert!(w.is_empty());
    }
}
