//! Per-potion demand multipliers and their daily random walk.

use brew_core::{ItemId, Potion, MAX_DEMAND, MIN_DEMAND};
use rand::Rng;
use std::collections::BTreeMap;

/// Largest absolute change in demand from one day to the next.
pub const DAILY_DRIFT: f64 = 0.2;
/// Opening demand is drawn uniformly from this band.
pub const OPENING_DEMAND: (f64, f64) = (0.75, 1.25);

/// Opening demand for every potion in the catalog.
pub fn initial_demand<R: Rng + ?Sized>(potions: &[Potion], rng: &mut R) -> BTreeMap<ItemId, f64> {
    potions
        .iter()
        .map(|p| (p.id.clone(), rng.gen_range(OPENING_DEMAND.0..OPENING_DEMAND.1)))
        .collect()
}

/// Next day's demand: each entry moves by a uniform delta in [-0.2, 0.2] and
/// is clamped to [MIN_DEMAND, MAX_DEMAND].
///
/// Entries are visited in key order so a seeded RNG gives the same walk.
pub fn drift_demand<R: Rng + ?Sized>(
    demand: &BTreeMap<ItemId, f64>,
    rng: &mut R,
) -> BTreeMap<ItemId, f64> {
    demand
        .iter()
        .map(|(id, &value)| {
            let delta: f64 = rng.gen_range(-DAILY_DRIFT..=DAILY_DRIFT);
            (id.clone(), (value + delta).clamp(MIN_DEMAND, MAX_DEMAND))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brew_core::catalog;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn opening_demand_covers_catalog_within_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let d = initial_demand(&catalog().potions, &mut rng);
        assert_eq!(d.len(), catalog().potions.len());
        assert!(d.values().all(|v| (0.75..1.25).contains(v)));
    }

    #[test]
    fn drift_is_seeded() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let d = initial_demand(&catalog().potions, &mut rng);
        let a = drift_demand(&d, &mut ChaCha8Rng::seed_from_u64(11));
        let b = drift_demand(&d, &mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(a, b);
        assert_eq!(a.len(), d.len());
    }

    #[test]
    fn drift_moves_at_most_point_two() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let d = initial_demand(&catalog().potions, &mut rng);
        let next = drift_demand(&d, &mut rng);
        for (id, v) in &next {
            assert!((v - d[id]).abs() <= DAILY_DRIFT + 1e-12);
        }
    }

    proptest! {
        #[test]
        fn demand_stays_in_band(seed in any::<u64>(), days in 1usize..60) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut d = initial_demand(&catalog().potions, &mut rng);
            for _ in 0..days {
                d = drift_demand(&d, &mut rng);
                for v in d.values() {
                    prop_assert!((MIN_DEMAND..=MAX_DEMAND).contains(v));
                }
            }
        }
    }
}
