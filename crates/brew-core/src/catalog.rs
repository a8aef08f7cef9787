//! Static reference data: every ingredient, potion, tool, NPC and recipe in the game.
//!
//! Tables are kept in catalog order; that order is observable (starter items,
//! shop rotation and tie-breaking all depend on it).

use crate::ids::{ItemId, NpcId, RecipeId};
use crate::item::{Ingredient, Item, ItemCategory, Potion, Tool};
use crate::npc::NpcTemplate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Ingredients whose catalog price is at least this are "rare" and can be
/// offered by the shop after an Ingredient Seeker is used.
pub const RARE_INGREDIENT_MIN_PRICE: u32 = 25;

// (id, name, description, properties, growth_time, base_price)
#[rustfmt::skip]
const INGREDIENTS: &[(&str, &str, &str, &str, u32, u32)] = &[
    ("herb_mint", "Mint Leaves", "Fresh, aromatic mint leaves with a cooling effect.", "Cooling, refreshing, and calming properties.", 2, 5),
    ("herb_lavender", "Lavender", "Purple flowers with a soothing fragrance.", "Calming, sleep-inducing, and stress-relieving.", 3, 8),
    ("herb_sage", "Sage", "Gray-green leaves with a strong, earthy aroma.", "Cleansing, purifying, and wisdom-enhancing.", 3, 7),
    ("herb_rosemary", "Rosemary", "Needle-like leaves with a pine-like fragrance.", "Memory-enhancing, focus-improving, and protective.", 4, 6),
    ("herb_thyme", "Thyme", "Small, aromatic leaves with a subtle flavor.", "Courage-boosting, purifying, and healing.", 2, 5),
    ("mushroom_shiitake", "Shiitake Mushroom", "Brown, umbrella-shaped mushroom with a meaty texture.", "Vitality-boosting, immune-strengthening, and longevity-promoting.", 5, 12),
    ("mushroom_reishi", "Reishi Mushroom", "Red-brown, kidney-shaped mushroom with a bitter taste.", "Spiritual awakening, immortality-granting, and stress-reducing.", 6, 15),
    ("crystal_quartz", "Clear Quartz", "Transparent crystal with a hexagonal shape.", "Energy-amplifying, clarity-bringing, and intention-setting.", 7, 20),
    ("crystal_amethyst", "Amethyst", "Purple crystal with a calming energy.", "Intuition-enhancing, protection-providing, and stress-relieving.", 8, 25),
    ("flower_rose", "Rose Petals", "Soft, fragrant petals in various colors.", "Love-attracting, heart-healing, and beauty-enhancing.", 4, 10),
    ("root_ginger", "Ginger Root", "Knobbly, aromatic root with a spicy flavor.", "Warming, energizing, and circulation-improving.", 5, 8),
    ("berry_juniper", "Juniper Berries", "Small, blue-black berries with a pine-like flavor.", "Purifying, protective, and cleansing.", 4, 9),
    ("flower_chamomile", "Chamomile Flowers", "Daisy-like flowers with a sweet, apple-like scent.", "Soothing, calming, and sleep-promoting.", 3, 7),
    ("herb_basil", "Holy Basil", "Sacred herb with a spicy, peppery flavor.", "Protective, purifying, and spiritually uplifting.", 2, 6),
    ("crystal_jade", "Green Jade", "Smooth, green stone with a cool touch.", "Harmony-bringing, balance-restoring, and prosperity-attracting.", 9, 22),
    ("root_mandrake", "Mandrake Root", "Human-shaped root with mystical properties.", "Protection, fertility, and magical amplification.", 10, 30),
    ("mushroom_morel", "Morel Mushroom", "Honeycomb-textured mushroom with earthy flavor.", "Grounding, cleansing, and vision-enhancing.", 7, 18),
    ("berry_elderberry", "Elderberries", "Small, dark purple berries with potent properties.", "Protection, healing, and spiritual awakening.", 5, 12),
    ("crystal_moonstone", "Moonstone", "Pearly white stone that seems to glow in moonlight.", "Intuition-enhancing, feminine-energy-balancing, and dream-promoting.", 8, 28),
    ("herb_valerian", "Valerian Root", "Earthy-smelling root with powerful calming effects.", "Sleep-inducing, anxiety-reducing, and peace-bringing.", 6, 14),
    ("flower_lotus", "Lotus Flower", "Sacred flower that blooms in muddy waters.", "Spiritual-awakening, purity-symbolizing, and enlightenment-bringing.", 7, 20),
    ("mushroom_amanita", "Amanita Mushroom", "Red-capped mushroom with white spots, highly magical.", "Vision-inducing, reality-altering, and consciousness-expanding.", 9, 35),
    ("crystal_obsidian", "Obsidian", "Black volcanic glass with protective properties.", "Negativity-shielding, truth-revealing, and grounding.", 10, 32),
    ("herb_nettle", "Stinging Nettle", "Prickly herb with hidden healing properties.", "Purifying, strengthening, and protection-offering.", 3, 9),
    ("crystal_ruby", "Ruby Crystal", "Deep red crystal that pulses with inner fire.", "Energy-boosting, passion-igniting, and vitality-enhancing.", 12, 45),
    ("herb_nightshade", "Midnight Nightshade", "Rare herb that only blooms under the full moon.", "Shadow-walking, illusion-creating, and stealth-enhancing.", 8, 30),
    ("flower_sunblossom", "Sunblossom", "Radiant golden flower that tracks the sun's movement.", "Light-generating, warmth-providing, and clarity-bringing.", 6, 18),
    ("root_dreamroot", "Dreamroot", "Twisted root that glows faintly with a blue light.", "Dream-walking, prophecy-revealing, and insight-granting.", 9, 27),
    ("crystal_emerald", "Emerald Shard", "Vibrant green crystal with growth-enhancing properties.", "Nature-connecting, growth-accelerating, and prosperity-bringing.", 11, 40),
    ("mushroom_ghostcap", "Ghostcap Mushroom", "Translucent mushroom that's cool to the touch.", "Spirit-seeing, ethereal-walking, and boundary-crossing.", 7, 25),
    ("berry_frostberry", "Frostberries", "Ice-blue berries that never melt and remain cold.", "Cold-resistance, preservation, and winter-harnessing.", 5, 15),
    ("herb_dragonbreath", "Dragon's Breath Herb", "Fiery red leaves that feel warm even when dried.", "Fire-breathing, heat-resistance, and courage-instilling.", 8, 22),
];

// (id, name, description, effect, base_price)
#[rustfmt::skip]
const POTIONS: &[(&str, &str, &str, &str, u32)] = &[
    ("potion_healing", "Healing Elixir", "A ruby-red liquid that mends wounds and restores vitality.", "Heals minor injuries and provides a boost of energy.", 25),
    ("potion_invisibility", "Invisibility Brew", "A transparent potion that bends light around the drinker.", "Grants temporary invisibility for up to 10 minutes.", 50),
    ("potion_strength", "Strength Tonic", "A dark, bubbling liquid that smells of iron and earth.", "Temporarily increases physical strength and endurance.", 35),
    ("potion_wisdom", "Wisdom Infusion", "A shimmering blue liquid with swirling patterns.", "Enhances mental clarity and problem-solving abilities.", 40),
    ("potion_love", "Love Philter", "A pink, sweet-smelling potion with heart-shaped bubbles.", "Creates feelings of affection and attraction.", 45),
    ("potion_luck", "Liquid Luck", "A golden potion that seems to dance in its vial.", "Brings good fortune and favorable outcomes for a short time.", 60),
    ("potion_sleep", "Dreamless Sleep", "A deep purple potion with a calming aroma.", "Induces a peaceful, dreamless sleep for 8 hours.", 30),
    ("potion_fire_resistance", "Fire Resistance", "An orange potion that feels cool to the touch.", "Grants temporary immunity to fire and heat.", 55),
    ("potion_water_breathing", "Water Breathing", "A blue-green potion with bubbles that never pop.", "Allows breathing underwater for up to 1 hour.", 65),
    ("potion_night_vision", "Night Vision", "A glowing green potion that smells of owl feathers.", "Grants the ability to see clearly in darkness.", 45),
    ("potion_levitation", "Levitation Elixir", "A silvery potion that seems weightless in its bottle.", "Allows the drinker to float several feet above the ground.", 70),
    ("potion_truth", "Truth Serum", "A clear potion with a single swirl of gold.", "Compels the drinker to speak only truth for a short time.", 80),
    ("potion_youth", "Youth Restoration", "A pearly white potion that smells of fresh morning dew.", "Temporarily restores youthful appearance and energy.", 100),
    ("potion_shapeshifting", "Shapeshifter's Brew", "A swirling potion that constantly changes color.", "Allows limited transformation into a small animal.", 120),
    ("potion_courage", "Liquid Courage", "A fiery red potion that pulses with inner light.", "Banishes fear and instills bravery in the drinker.", 40),
    ("potion_silence", "Veil of Silence", "A misty gray potion that makes no sound when shaken.", "Creates a zone of silence around the drinker.", 55),
    ("potion_growth_acceleration", "Growth Accelerator", "A vibrant green potion with swirling emerald particles.", "Reduces garden growth time by 50% for one full day cycle.", 85),
    ("potion_market_insight", "Market Insight", "A shimmering potion with floating golden coins inside.", "Reveals optimal selling prices and increases all sales by 20% for one day.", 95),
    ("potion_ingredient_duplication", "Ingredient Duplicator", "A bubbling purple mixture that seems to multiply within its container.", "Has a 30% chance to duplicate any harvested ingredient for one day.", 110),
    ("potion_crafting_mastery", "Crafting Mastery", "A deep blue potion with glowing runes that shift and change.", "Reduces ingredient requirements for all potions by 1 (minimum 1) for one day.", 130),
    ("potion_haggling", "Merchant's Tongue", "A honey-colored potion that tastes of silver and gold.", "Improves buying prices by 15% and selling prices by 15% for one day.", 90),
    ("potion_garden_expansion", "Garden's Blessing", "A rich, soil-scented potion with tiny flowers floating inside.", "Temporarily unlocks one additional garden plot for three days.", 150),
    ("potion_rare_ingredient_finder", "Ingredient Seeker", "A compass-shaped bottle with swirling mist that points in changing directions.", "Guarantees one rare ingredient will appear in the shop on the next day.", 100),
    ("potion_npc_attraction", "Trader's Call", "A bell-shaped bottle with a potion that chimes when shaken.", "Attracts an additional rare trader with premium prices on the next day.", 120),
    ("potion_quality_enhancer", "Quality Enhancer", "A crystal-clear potion with rainbow reflections.", "Increases the quality and value of all crafted potions by 25% for one day.", 105),
    ("potion_gold_transmutation", "Gold Transmuter", "A metallic potion that feels heavy and shifts like liquid gold.", "Converts 5 of any ingredient into 50 gold. One-time use.", 75),
];

// (id, name, description, function, base_price)
#[rustfmt::skip]
const TOOLS: &[(&str, &str, &str, &str, u32)] = &[
    ("tool_mortar", "Mortar and Pestle", "A stone bowl and grinding tool for crushing ingredients.", "Allows for more efficient ingredient preparation.", 20),
    ("tool_cauldron", "Copper Cauldron", "A medium-sized cauldron made of polished copper.", "Required for brewing more advanced potions.", 50),
    ("tool_scales", "Precision Scales", "Delicate scales for measuring ingredients accurately.", "Improves potion quality and success rate.", 35),
    ("tool_gloves", "Dragon-Hide Gloves", "Protective gloves made from dragon scales.", "Protects hands when handling dangerous ingredients.", 45),
    ("tool_knife", "Silver Cutting Knife", "A sharp knife with a silver blade and wooden handle.", "Perfect for precise cutting of magical ingredients.", 30),
    ("tool_stirrer", "Enchanted Stirring Rod", "A glass rod that glows softly when stirring potions.", "Helps maintain consistent potion temperature and mixing.", 40),
    ("tool_alembic", "Crystal Alembic", "A delicate distillation apparatus made of enchanted crystal.", "Allows for extraction of pure essences from ingredients.", 75),
    ("tool_grimoire", "Alchemist's Grimoire", "An ancient book containing secret potion formulas.", "Provides hints for creating experimental potions.", 100),
    ("tool_filter", "Moonsilk Filter", "A fine mesh filter woven from threads of moonlight.", "Removes impurities from potions, increasing potency.", 60),
];

// (id, name, description, trading dialog)
#[rustfmt::skip]
const NPCS: &[(&str, &str, &str, &str)] = &[
    ("npc_alchemist", "Master Alchemist", "An elderly scholar with spectacles and a well-maintained beard.", "I'm always in search of rare and powerful concoctions. Show me what you've brewed!"),
    ("npc_witch", "Forest Witch", "A mysterious woman with wild hair and clothes adorned with feathers and bones.", "The forest spirits whisper of your brewing talents. Perhaps we can make a trade?"),
    ("npc_knight", "Royal Knight", "A tall, armored warrior with the royal crest emblazoned on their shield.", "By order of the crown, I seek potions to aid in our upcoming campaign."),
    ("npc_merchant", "Traveling Merchant", "A jovial trader with a colorful wagon full of exotic goods.", "Ah, a fellow entrepreneur! Let's see if we can strike a deal that benefits us both."),
    ("npc_healer", "Village Healer", "A gentle soul with kind eyes and hands stained from years of working with herbs.", "The village has many sick this season. I'm in desperate need of remedies."),
    ("npc_explorer", "Daring Explorer", "A rugged adventurer with weathered skin and tales of distant lands.", "I need potions for my next expedition into uncharted territories. What do you have?"),
    ("npc_noble", "Court Noble", "An elegantly dressed aristocrat with a haughty demeanor and expensive taste.", "I require the finest potions for an upcoming royal gathering. I pay well for quality."),
    ("npc_scholar", "Arcane Scholar", "A focused academic with ink-stained fingers and a book always at hand.", "I'm researching the effects of various magical concoctions. Would you assist my studies?"),
    ("npc_ranger", "Forest Ranger", "A quiet, observant guardian of the woods with keen eyes and a bow on their back.", "The creatures of the forest grow restless. I need potions to help maintain peace."),
    ("npc_mystic", "Wandering Mystic", "A serene figure draped in flowing robes with symbols of celestial bodies.", "The stars have guided me to your shop. I seek potions to commune with higher realms."),
    ("npc_diver", "Deep Sea Diver", "A muscular individual with salt-crusted hair and a necklace of unusual shells.", "The depths hold many secrets. I need special brews to explore the ocean floor."),
    ("npc_thief", "Shadow Guild Thief", "A nimble figure dressed in dark clothing with a perpetual smirk.", "I'm willing to pay handsomely for potions that aid in... discreet activities."),
    ("npc_bard", "Traveling Bard", "A charismatic performer with a lute strapped to their back and a voice like honey.", "I seek potions to enhance my performances and captivate audiences across the realm."),
    ("npc_hermit", "Mountain Hermit", "An elderly recluse with a long white beard and eyes that have seen centuries.", "In my solitude, I've gained wisdom. Now I seek potions to extend my meditation."),
    ("npc_hunter", "Night Hunter", "A mysterious hunter with unnaturally sharp teeth and pale skin.", "The creatures I hunt only emerge in darkness. I need potions to aid my nocturnal pursuits."),
    ("npc_gardener", "Master Gardener", "A soil-stained expert with plants woven into their hair and clothes.", "My gardens flourish, but I'm always seeking new ways to enhance growth and vitality."),
    ("npc_economist", "Royal Economist", "A sharp-eyed individual with ink-stained fingers and a ledger always at hand.", "The market fluctuates, but with the right potions, one can always stay ahead of trends."),
    ("npc_artificer", "Magical Artificer", "A creative inventor with glowing runes tattooed on their arms.", "I create wonders through magical crafting, but certain potions could enhance my work."),
];

/// Collectors of gameplay potions; a Trader's Call summons one of these.
const SPECIAL_NPCS: &[&str] = &["npc_gardener", "npc_economist", "npc_artificer"];

// (id, produced potion, [(ingredient, quantity)])
#[rustfmt::skip]
const RECIPES: &[(&str, &str, &[(&str, u32)])] = &[
    ("recipe_healing", "potion_healing", &[("herb_sage", 2), ("flower_rose", 1), ("root_ginger", 1)]),
    ("recipe_invisibility", "potion_invisibility", &[("mushroom_shiitake", 2), ("crystal_quartz", 1), ("herb_thyme", 2)]),
    ("recipe_strength", "potion_strength", &[("root_ginger", 2), ("herb_rosemary", 1), ("mushroom_reishi", 1)]),
    ("recipe_wisdom", "potion_wisdom", &[("herb_sage", 3), ("crystal_amethyst", 1), ("herb_rosemary", 1)]),
    ("recipe_love", "potion_love", &[("flower_rose", 3), ("herb_lavender", 2), ("herb_mint", 1)]),
    ("recipe_luck", "potion_luck", &[("crystal_amethyst", 1), ("berry_juniper", 2), ("mushroom_shiitake", 1)]),
    ("recipe_sleep", "potion_sleep", &[("herb_lavender", 3), ("herb_mint", 1), ("crystal_amethyst", 1)]),
    ("recipe_fire_resistance", "potion_fire_resistance", &[("crystal_quartz", 1), ("root_ginger", 2), ("berry_juniper", 2)]),
    ("recipe_water_breathing", "potion_water_breathing", &[("crystal_moonstone", 1), ("herb_nettle", 2), ("flower_lotus", 1)]),
    ("recipe_night_vision", "potion_night_vision", &[("mushroom_morel", 2), ("crystal_obsidian", 1), ("berry_elderberry", 2)]),
    ("recipe_levitation", "potion_levitation", &[("flower_lotus", 2), ("crystal_moonstone", 1), ("mushroom_amanita", 1)]),
    ("recipe_truth", "potion_truth", &[("herb_sage", 2), ("crystal_quartz", 2), ("flower_chamomile", 1)]),
    ("recipe_youth", "potion_youth", &[("flower_rose", 2), ("crystal_jade", 1), ("root_mandrake", 1)]),
    ("recipe_shapeshifting", "potion_shapeshifting", &[("mushroom_amanita", 2), ("root_mandrake", 1), ("crystal_moonstone", 1)]),
    ("recipe_courage", "potion_courage", &[("herb_basil", 2), ("root_ginger", 1), ("berry_elderberry", 1)]),
    ("recipe_silence", "potion_silence", &[("herb_valerian", 2), ("crystal_obsidian", 1), ("mushroom_morel", 1)]),
    ("recipe_growth_acceleration", "potion_growth_acceleration", &[("crystal_emerald", 1), ("herb_basil", 2), ("flower_sunblossom", 2)]),
    ("recipe_market_insight", "potion_market_insight", &[("crystal_jade", 1), ("herb_sage", 2), ("crystal_ruby", 1)]),
    ("recipe_ingredient_duplication", "potion_ingredient_duplication", &[("mushroom_ghostcap", 2), ("crystal_moonstone", 1), ("root_mandrake", 1)]),
    ("recipe_crafting_mastery", "potion_crafting_mastery", &[("crystal_amethyst", 1), ("root_dreamroot", 2), ("mushroom_amanita", 1)]),
    ("recipe_haggling", "potion_haggling", &[("herb_sage", 1), ("crystal_jade", 1), ("flower_lotus", 1)]),
    ("recipe_garden_expansion", "potion_garden_expansion", &[("crystal_emerald", 1), ("root_mandrake", 1), ("flower_sunblossom", 2)]),
    ("recipe_rare_ingredient_finder", "potion_rare_ingredient_finder", &[("crystal_quartz", 2), ("herb_nightshade", 1), ("mushroom_morel", 1)]),
    ("recipe_npc_attraction", "potion_npc_attraction", &[("flower_rose", 2), ("herb_lavender", 2), ("crystal_ruby", 1)]),
    ("recipe_quality_enhancer", "potion_quality_enhancer", &[("crystal_quartz", 2), ("crystal_amethyst", 1), ("flower_lotus", 1)]),
    ("recipe_gold_transmutation", "potion_gold_transmutation", &[("crystal_ruby", 1), ("herb_basil", 2), ("root_ginger", 2)]),
];

/// Inconsistencies in reference data.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// Two entries share an id.
    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),
    /// A recipe references an ingredient or potion that does not exist.
    #[error("recipe {recipe} references unknown item {item}")]
    UnknownReference { recipe: String, item: String },
    /// Growth time or recipe quantity of zero.
    #[error("zero quantity or growth time on {0}")]
    Zero(String),
}

/// Immutable lookup tables for every item, NPC and recipe.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub ingredients: Vec<Ingredient>,
    pub potions: Vec<Potion>,
    pub tools: Vec<Tool>,
    pub npcs: Vec<NpcTemplate>,
    pub recipes: Vec<Recipe>,
}

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub ingredient: ItemId,
    pub quantity: u32,
}

/// How to brew one potion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub potion_id: ItemId,
    pub ingredients: Vec<Requirement>,
}

impl Recipe {
    /// Requirements after applying Crafting Mastery: each quantity drops by
    /// one but never below one.
    pub fn effective_requirements(&self, crafting_mastery: bool) -> Vec<Requirement> {
        self.ingredients
            .iter()
            .map(|r| Requirement {
                ingredient: r.ingredient.clone(),
                quantity: if crafting_mastery {
                    r.quantity.saturating_sub(1).max(1)
                } else {
                    r.quantity
                },
            })
            .collect()
    }
}

impl Catalog {
    /// Builds the shipped game data.
    pub fn standard() -> Self {
        let ingredients = INGREDIENTS
            .iter()
            .map(|&(id, name, description, properties, growth_time, base_price)| Ingredient {
                id: ItemId::from(id),
                name: name.to_string(),
                description: description.to_string(),
                properties: properties.to_string(),
                growth_time,
                base_price,
            })
            .collect();
        let potions = POTIONS
            .iter()
            .map(|&(id, name, description, effect, base_price)| Potion {
                id: ItemId::from(id),
                name: name.to_string(),
                description: description.to_string(),
                effect: effect.to_string(),
                base_price,
            })
            .collect();
        let tools = TOOLS
            .iter()
            .map(|&(id, name, description, function, base_price)| Tool {
                id: ItemId::from(id),
                name: name.to_string(),
                description: description.to_string(),
                function: function.to_string(),
                base_price,
            })
            .collect();
        let npcs = NPCS
            .iter()
            .map(|&(id, name, description, dialog)| NpcTemplate {
                id: NpcId::from(id),
                name: name.to_string(),
                description: description.to_string(),
                dialog: dialog.to_string(),
                special: SPECIAL_NPCS.contains(&id),
            })
            .collect();
        let recipes = RECIPES
            .iter()
            .map(|&(id, potion, reqs)| Recipe {
                id: RecipeId::from(id),
                potion_id: ItemId::from(potion),
                ingredients: reqs
                    .iter()
                    .map(|&(ingredient, quantity)| Requirement {
                        ingredient: ItemId::from(ingredient),
                        quantity,
                    })
                    .collect(),
            })
            .collect();
        Self {
            ingredients,
            potions,
            tools,
            npcs,
            recipes,
        }
    }

    pub fn ingredient(&self, id: &ItemId) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| &i.id == id)
    }

    pub fn potion(&self, id: &ItemId) -> Option<&Potion> {
        self.potions.iter().find(|p| &p.id == id)
    }

    pub fn tool(&self, id: &ItemId) -> Option<&Tool> {
        self.tools.iter().find(|t| &t.id == id)
    }

    pub fn recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    pub fn recipe_for(&self, potion: &ItemId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.potion_id == potion)
    }

    pub fn npc(&self, id: &NpcId) -> Option<&NpcTemplate> {
        self.npcs.iter().find(|n| &n.id == id)
    }

    /// Looks an id up across all three item tables.
    pub fn item(&self, id: &ItemId) -> Option<Item> {
        self.ingredient(id)
            .cloned()
            .map(Item::Ingredient)
            .or_else(|| self.potion(id).cloned().map(Item::Potion))
            .or_else(|| self.tool(id).cloned().map(Item::Tool))
    }

    pub fn category_of(&self, id: &ItemId) -> Option<ItemCategory> {
        self.item(id).map(|i| i.category())
    }

    pub fn special_npcs(&self) -> impl Iterator<Item = &NpcTemplate> {
        self.npcs.iter().filter(|n| n.special)
    }

    pub fn rare_ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients
            .iter()
            .filter(|i| i.base_price >= RARE_INGREDIENT_MIN_PRICE)
    }
}

/// Shared instance of [`Catalog::standard`].
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let c = Catalog::standard();
        debug!(
            ingredients = c.ingredients.len(),
            potions = c.potions.len(),
            recipes = c.recipes.len(),
            "catalog loaded"
        );
        c
    })
}

/// Validate ids are unique and recipes only reference known items.
pub fn validate_catalog(c: &Catalog) -> Result<(), CatalogError> {
    let mut ids: BTreeSet<&str> = BTreeSet::new();
    let item_ids = c
        .ingredients
        .iter()
        .map(|i| i.id.as_str())
        .chain(c.potions.iter().map(|p| p.id.as_str()))
        .chain(c.tools.iter().map(|t| t.id.as_str()));
    for id in item_ids {
        if !ids.insert(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
    }
    for i in &c.ingredients {
        if i.growth_time == 0 {
            return Err(CatalogError::Zero(i.id.to_string()));
        }
    }
    let mut recipe_ids: BTreeSet<&str> = BTreeSet::new();
    for r in &c.recipes {
        if !recipe_ids.insert(r.id.as_str()) {
            return Err(CatalogError::DuplicateId(r.id.to_string()));
        }
        if c.potion(&r.potion_id).is_none() {
            return Err(CatalogError::UnknownReference {
                recipe: r.id.to_string(),
                item: r.potion_id.to_string(),
            });
        }
        for req in &r.ingredients {
            if c.ingredient(&req.ingredient).is_none() {
                return Err(CatalogError::UnknownReference {
                    recipe: r.id.to_string(),
                    item: req.ingredient.to_string(),
                });
            }
            if req.quantity == 0 {
                return Err(CatalogError::Zero(r.id.to_string()));
            }
        }
    }
    let mut npc_ids: BTreeSet<&str> = BTreeSet::new();
    for n in &c.npcs {
        if !npc_ids.insert(n.id.as_str()) {
            return Err(CatalogError::DuplicateId(n.id.to_string()));
        }
    }
    Ok(())
}
