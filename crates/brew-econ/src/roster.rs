//! NPC roster rolls.

use brew_core::{Catalog, ItemId, Npc, NpcId};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Range regular traders' price modifiers are drawn from.
pub const PRICE_MODIFIER_RANGE: (f64, f64) = (0.8, 1.2);
/// Fixed price modifier of a trader summoned by a Trader's Call.
pub const RARE_TRADER_MODIFIER: f64 = 1.5;
/// Prefix that keeps a summoned trader's id distinct from the regular roster.
pub const RARE_TRADER_PREFIX: &str = "rare_";

fn roll_interest<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Option<ItemId> {
    catalog.potions.choose(rng).map(|p| p.id.clone())
}

/// Every catalog NPC with a fresh interest and price modifier.
///
/// Empty when the catalog has no potions to be interested in.
pub fn roll_roster<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Vec<Npc> {
    catalog
        .npcs
        .iter()
        .map_while(|t| {
            let interest = roll_interest(catalog, rng)?;
            let modifier = rng.gen_range(PRICE_MODIFIER_RANGE.0..PRICE_MODIFIER_RANGE.1);
            Some(Npc::from_template(t, interest, modifier))
        })
        .collect()
}

/// One trader from the special subset, paying 1.5× for everything.
///
/// Returns None if the catalog has no special traders or no potions.
pub fn summon_rare_trader<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Option<Npc> {
    let specials: Vec<_> = catalog.special_npcs().collect();
    let template = specials.choose(rng)?;
    let interest = roll_interest(catalog, rng)?;
    let mut npc = Npc::from_template(template, interest, RARE_TRADER_MODIFIER);
    npc.id = NpcId(format!("{RARE_TRADER_PREFIX}{}", template.id));
    debug!(npc = %npc.id, interest = %npc.interest, "rare trader arrives");
    Some(npc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::catalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn roster_covers_catalog_with_modifiers_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let npcs = roll_roster(catalog(), &mut rng);
        assert_eq!(npcs.len(), catalog().npcs.len());
        for n in &npcs {
            assert!((0.8..1.2).contains(&n.price_modifier));
            assert!(catalog().potion(&n.interest).is_some());
        }
    }

    #[test]
    fn no_potions_means_no_traders() {
        let mut bare = catalog().clone();
        bare.potions.clear();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(roll_roster(&bare, &mut rng).is_empty());
        assert!(summon_rare_trader(&bare, &mut rng).is_none());
    }

    #[test]
    fn rare_trader_is_special_and_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let npc = summon_rare_trader(catalog(), &mut rng).unwrap();
        assert_eq!(npc.price_modifier, RARE_TRADER_MODIFIER);
        assert!(npc.id.as_str().starts_with(RARE_TRADER_PREFIX));
        let base = NpcId::from(&npc.id.as_str()[RARE_TRADER_PREFIX.len()..]);
        assert!(catalog().npc(&base).unwrap().special);
    }
}
