use crate::ids::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inventory category an item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Growable ingredient (seed and crafting material at once).
    Ingredient,
    /// Crafted potion.
    Potion,
    /// Brewing tool, inventory-only.
    Tool,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Ingredient => "ingredient",
            ItemCategory::Potion => "potion",
            ItemCategory::Tool => "tool",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plant, mushroom or crystal that can be grown in the garden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalog id, e.g. `herb_mint`.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    pub description: String,
    /// Flavor text listing the ingredient's magical traits.
    pub properties: String,
    /// Days from planting until the plot can be harvested (> 0).
    pub growth_time: u32,
    /// Shop price before demand and effects.
    pub base_price: u32,
}

/// A brewed potion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Potion {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Flavor text describing what drinking the potion does.
    pub effect: String,
    pub base_price: u32,
}

/// A brewing tool. Tools are bought and sold but have no mechanical effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub function: String,
    pub base_price: u32,
}

/// Common view over the three item kinds, used by the inventory ledger.
pub trait CatalogItem: Clone {
    const CATEGORY: ItemCategory;

    fn id(&self) -> &ItemId;
    fn name(&self) -> &str;
    fn base_price(&self) -> u32;
    fn set_base_price(&mut self, price: u32);
}

macro_rules! catalog_item {
    ($ty:ty, $category:expr) => {
        impl CatalogItem for $ty {
            const CATEGORY: ItemCategory = $category;

            fn id(&self) -> &ItemId {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn base_price(&self) -> u32 {
                self.base_price
            }

            fn set_base_price(&mut self, price: u32) {
                self.base_price = price;
            }
        }
    };
}

catalog_item!(Ingredient, ItemCategory::Ingredient);
catalog_item!(Potion, ItemCategory::Potion);
catalog_item!(Tool, ItemCategory::Tool);

/// Any catalog item, tagged with its category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Item {
    Ingredient(Ingredient),
    Potion(Potion),
    Tool(Tool),
}

impl Item {
    pub fn category(&self) -> ItemCategory {
        match self {
            Item::Ingredient(_) => ItemCategory::Ingredient,
            Item::Potion(_) => ItemCategory::Potion,
            Item::Tool(_) => ItemCategory::Tool,
        }
    }

    pub fn id(&self) -> &ItemId {
        match self {
            Item::Ingredient(i) => &i.id,
            Item::Potion(p) => &p.id,
            Item::Tool(t) => &t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Ingredient(i) => &i.name,
            Item::Potion(p) => &p.name,
            Item::Tool(t) => &t.name,
        }
    }

    pub fn base_price(&self) -> u32 {
        match self {
            Item::Ingredient(i) => i.base_price,
            Item::Potion(p) => p.base_price,
            Item::Tool(t) => t.base_price,
        }
    }
}

impl From<Ingredient> for Item {
    fn from(i: Ingredient) -> Self {
        Item::Ingredient(i)
    }
}

impl From<Potion> for Item {
    fn from(p: Potion) -> Self {
        Item::Potion(p)
    }
}

impl From<Tool> for Item {
    fn from(t: Tool) -> Self {
        Item::Tool(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_reports_category_from_variant() {
        let tool = Tool {
            id: ItemId::from("tool_mortar"),
            name: "Mortar and Pestle".into(),
            description: String::new(),
            function: String::new(),
            base_price: 20,
        };
        let item = Item::from(tool);
        assert_eq!(item.category(), ItemCategory::Tool);
        assert_eq!(item.id(), &ItemId::from("tool_mortar"));
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"category\":\"tool\""));
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
