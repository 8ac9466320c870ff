//! Player kinds and their decision surfaces.
//!
//! A player is its identity plus a kind tag; the computer kind routes every
//! decision to `yh-advisor`, the human kind prompts. The turn loop talks to
//! this one surface and never cares which kind it is driving.

use yh_advisor::Reason;
use yh_core::category::Category;
use yh_core::scorecard::{PlayerId, ScoreCard};

use crate::io;
use crate::roll::Roller;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Computer,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(name),
            kind: PlayerKind::Human,
        }
    }

    pub fn computer(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(name),
            kind: PlayerKind::Computer,
        }
    }

    pub fn name(&self) -> &str {
        self.id.name()
    }

    /// Produce `n` new dice. The human may type physical rolls; empty input
    /// (and the computer always) uses the shared roller.
    pub fn roll_dice(&self, roller: &mut Roller, n: usize) -> Vec<u8> {
        match self.kind {
            PlayerKind::Computer => roller.roll_dice(n),
            PlayerKind::Human => io::prompt_manual_roll(n).unwrap_or_else(|| roller.roll_dice(n)),
        }
    }

    pub fn dice_to_keep(&self, card: &ScoreCard, rolled: &[u8], kept: &[u8]) -> Vec<u8> {
        match self.kind {
            PlayerKind::Computer => yh_advisor::dice_to_keep(card, rolled, kept),
            PlayerKind::Human => {
                println!("Kept dice: {}", io::fmt_dice(kept));
                io::prompt_dice_to_keep(rolled)
            }
        }
    }

    pub fn wants_to_stand(&self, card: &ScoreCard, kept: &[u8], rolled: &[u8]) -> bool {
        match self.kind {
            PlayerKind::Computer => yh_advisor::wants_to_stand(card, kept, rolled),
            PlayerKind::Human => {
                println!("Kept dice: {}", io::fmt_dice(kept));
                println!("Current roll: {}", io::fmt_dice(rolled));
                io::prompt_yes_no("Do you want to stand?")
            }
        }
    }

    /// Only the human is ever offered advice; the computer plays its own.
    pub fn wants_help(&self) -> bool {
        match self.kind {
            PlayerKind::Computer => false,
            PlayerKind::Human => io::prompt_yes_no("Do you want help?"),
        }
    }

    /// The computer's declared pursuits, shown to the table; the human keeps
    /// their plans to themselves.
    pub fn category_pursuits(&self, card: &ScoreCard, kept: &[u8]) -> Option<Vec<Reason>> {
        match self.kind {
            PlayerKind::Computer => Some(yh_advisor::category_pursuits(card, kept)),
            PlayerKind::Human => None,
        }
    }

    pub fn target(&self, card: &ScoreCard, kept: &[u8]) -> Option<(Category, Vec<u8>)> {
        match self.kind {
            PlayerKind::Computer => yh_advisor::target(card, kept),
            PlayerKind::Human => None,
        }
    }
}
