use serde::{Deserialize, Serialize};

/// Name of the save slot the game writes to unless configured otherwise.
pub const DEFAULT_SAVE_SLOT: &str = "potionGameSave";

/// Runtime settings for a play session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the deterministic RNG.
    pub rng_seed: u64,
    /// Slot the snapshot is stored under.
    pub save_slot: String,
    /// Directory holding save files.
    pub save_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            save_slot: DEFAULT_SAVE_SLOT.to_string(),
            save_dir: "./saves".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"rng_seed": 7}"#).unwrap();
        assert_eq!(cfg.rng_seed, 7);
        assert_eq!(cfg.save_slot, DEFAULT_SAVE_SLOT);
        assert_eq!(cfg.save_dir, "./saves");
    }
}
