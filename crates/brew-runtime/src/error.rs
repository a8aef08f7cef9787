use crate::Notice;
use brew_core::{ItemId, NpcId, RecipeId};
use brew_econ::EconError;
use thiserror::Error;

/// Broad class of a rejection. Neither is fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The request is well-formed but the state does not allow it.
    Validation,
    /// The request names something that does not exist or is not held.
    NotFound,
}

/// Why an operation was rejected. A rejected operation changes nothing.
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: i64, available: i64 },
    #[error("missing ingredients for {0}")]
    MissingIngredients(RecipeId),
    #[error("plot {0} does not exist")]
    NoSuchPlot(usize),
    #[error("plot {0} is locked")]
    PlotLocked(usize),
    #[error("plot {0} is already planted")]
    PlotOccupied(usize),
    #[error("plot {0} is empty")]
    PlotEmpty(usize),
    #[error("plot {0} is not ready to harvest")]
    PlotNotReady(usize),
    #[error("every garden plot is already unlocked")]
    GardenFull,
    #[error("unknown item {0}")]
    UnknownItem(ItemId),
    #[error("unknown recipe {0}")]
    UnknownRecipe(RecipeId),
    #[error("no trader {0} in town")]
    UnknownNpc(NpcId),
    #[error("unknown task {0}")]
    UnknownTask(String),
    #[error("{0} is not in the inventory")]
    NotHeld(ItemId),
    #[error("only {held} of {item} held, {wanted} wanted")]
    InsufficientQuantity { item: ItemId, held: u32, wanted: u32 },
    #[error("need {needed} of one ingredient, largest stack has {held}")]
    InsufficientIngredient { needed: u32, held: u32 },
    #[error("{0} has no effect to activate")]
    NotActivatable(ItemId),
    #[error("{0} is not in stock today")]
    NotInStock(ItemId),
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("task {0} is not complete")]
    TaskIncomplete(String),
    #[error("task {0} was already claimed")]
    TaskClaimed(String),
    #[error(transparent)]
    Econ(#[from] EconError),
}

impl GameError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GameError::NoSuchPlot(_)
            | GameError::UnknownItem(_)
            | GameError::UnknownRecipe(_)
            | GameError::UnknownNpc(_)
            | GameError::UnknownTask(_)
            | GameError::NotHeld(_) => FailureKind::NotFound,
            _ => FailureKind::Validation,
        }
    }

    /// Player-facing notice describing the rejection.
    pub fn notice(&self) -> Notice {
        let title = match self {
            GameError::InsufficientGold { .. } => "Not Enough Gold",
            GameError::MissingIngredients(_) | GameError::InsufficientIngredient { .. } => {
                "Missing Ingredients"
            }
            GameError::GardenFull => "Garden Full",
            GameError::NotActivatable(_) => "No Effect",
            _ => match self.kind() {
                FailureKind::NotFound => "Not Found",
                FailureKind::Validation => "Action Failed",
            },
        };
        Notice::new(title, self.to_string())
    }
}
