//! Owned items, one ledger per category.

use crate::ids::ItemId;
use crate::item::{CatalogItem, Ingredient, ItemCategory, Potion, Tool};
use serde::{Deserialize, Serialize};

/// A held item together with how many units are owned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stack<T> {
    #[serde(flatten)]
    pub item: T,
    pub quantity: u32,
}

/// Insertion-ordered list of stacks, at most one per id, every quantity > 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger<T> {
    entries: Vec<Stack<T>>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T: CatalogItem> Ledger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Stack<T>> {
        self.entries.iter().find(|s| s.item.id() == id)
    }

    pub fn get_mut(&mut self, id: &ItemId) -> Option<&mut Stack<T>> {
        self.entries.iter_mut().find(|s| s.item.id() == id)
    }

    /// Units held of `id`, zero when absent.
    pub fn quantity(&self, id: &ItemId) -> u32 {
        self.get(id).map(|s| s.quantity).unwrap_or(0)
    }

    /// Merges `quantity` units into the stack for `item`'s id, creating it if
    /// needed. Returns the stack after the merge.
    pub fn add(&mut self, item: T, quantity: u32) -> &mut Stack<T> {
        let pos = self.entries.iter().position(|s| s.item.id() == item.id());
        let idx = match pos {
            Some(idx) => {
                let stack = &mut self.entries[idx];
                stack.quantity = stack.quantity.saturating_add(quantity);
                idx
            }
            None => {
                self.entries.push(Stack { item, quantity });
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx]
    }

    /// Removes up to `amount` units. A stack that would reach zero is dropped.
    /// Returns false if nothing with that id was held.
    pub fn remove(&mut self, id: &ItemId, amount: u32) -> bool {
        let Some(idx) = self.entries.iter().position(|s| s.item.id() == id) else {
            return false;
        };
        if self.entries[idx].quantity <= amount {
            self.entries.remove(idx);
        } else {
            self.entries[idx].quantity -= amount;
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stack<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every stack's quantity.
    pub fn total_units(&self) -> u64 {
        self.entries.iter().map(|s| s.quantity as u64).sum()
    }

    /// Stack with the highest quantity; the earliest wins ties.
    pub fn largest(&self) -> Option<&Stack<T>> {
        self.entries.iter().fold(None, |best: Option<&Stack<T>>, s| match best {
            Some(b) if b.quantity >= s.quantity => Some(b),
            _ => Some(s),
        })
    }
}

impl<T: CatalogItem> FromIterator<(T, u32)> for Ledger<T> {
    fn from_iter<I: IntoIterator<Item = (T, u32)>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        for (item, quantity) in iter {
            ledger.add(item, quantity);
        }
        ledger
    }
}

/// Everything the player owns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub ingredients: Ledger<Ingredient>,
    pub potions: Ledger<Potion>,
    pub tools: Ledger<Tool>,
}

impl Inventory {
    pub fn quantity(&self, category: ItemCategory, id: &ItemId) -> u32 {
        match category {
            ItemCategory::Ingredient => self.ingredients.quantity(id),
            ItemCategory::Potion => self.potions.quantity(id),
            ItemCategory::Tool => self.tools.quantity(id),
        }
    }

    /// Base price recorded on the held stack, which may differ from the
    /// catalog for enhanced potions.
    pub fn held_base_price(&self, category: ItemCategory, id: &ItemId) -> Option<u32> {
        match category {
            ItemCategory::Ingredient => self.ingredients.get(id).map(|s| s.item.base_price),
            ItemCategory::Potion => self.potions.get(id).map(|s| s.item.base_price),
            ItemCategory::Tool => self.tools.get(id).map(|s| s.item.base_price),
        }
    }

    /// See [`Ledger::remove`].
    pub fn remove(&mut self, category: ItemCategory, id: &ItemId, amount: u32) -> bool {
        match category {
            ItemCategory::Ingredient => self.ingredients.remove(id, amount),
            ItemCategory::Potion => self.potions.remove(id, amount),
            ItemCategory::Tool => self.tools.remove(id, amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn mint() -> Ingredient {
        catalog()
            .ingredient(&ItemId::from("herb_mint"))
            .cloned()
            .unwrap()
    }

    #[test]
    fn add_merges_by_id() {
        let mut l = Ledger::new();
        l.add(mint(), 2);
        l.add(mint(), 3);
        assert_eq!(l.len(), 1);
        assert_eq!(l.quantity(&ItemId::from("herb_mint")), 5);
    }

    #[test]
    fn remove_drops_stack_at_or_below_amount() {
        let id = ItemId::from("herb_mint");
        let mut l = Ledger::new();
        l.add(mint(), 3);
        assert!(l.remove(&id, 1));
        assert_eq!(l.quantity(&id), 2);
        assert!(l.remove(&id, 5));
        assert!(l.get(&id).is_none());
        assert!(!l.remove(&id, 1));
    }

    #[test]
    fn largest_prefers_first_on_ties() {
        let c = catalog();
        let mut l = Ledger::new();
        l.add(c.ingredients[1].clone(), 4);
        l.add(c.ingredients[0].clone(), 4);
        l.add(c.ingredients[2].clone(), 1);
        assert_eq!(l.largest().unwrap().item.id, c.ingredients[1].id);
    }

    #[test]
    fn stack_serializes_flat() {
        let mut l = Ledger::new();
        l.add(mint(), 3);
        let json = serde_json::to_value(&l).unwrap();
        assert_eq!(json[0]["id"], "herb_mint");
        assert_eq!(json[0]["quantity"], 3);
        assert_eq!(json[0]["growth_time"], 2);
        let back: Ledger<Ingredient> = serde_json::from_value(json).unwrap();
        assert_eq!(back, l);
    }
}
