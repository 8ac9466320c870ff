//! The shared scorecard both players compete over.
//!
//! Exactly one slot per category. A slot is claimed once (points, winner,
//! round) and never overwritten; the card is a persistent value object:
//! [`ScoreCard::add_entry`] returns a new card and leaves the old snapshot
//! untouched, so callers can hold onto earlier states freely.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::{Category, NUM_CATEGORIES};

/// Name-keyed player identity. Equality is by name; the rules never look
/// inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(name: impl Into<String>) -> Self {
        PlayerId(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One claimed slot: who scored how many points in which round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCardEntry {
    pub points: u32,
    pub winner: PlayerId,
    pub round: u32,
}

#[derive(Debug, Error)]
pub enum ScoreCardError {
    #[error("category {0} already has a score card entry")]
    CategoryAlreadyScored(Category),
}

/// Per-category slots, empty at game start and filled monotonically until
/// every category has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    slots: [Option<ScoreCardEntry>; NUM_CATEGORIES],
}

impl ScoreCard {
    /// An empty card.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for a category, if claimed.
    pub fn entry(&self, category: Category) -> Option<&ScoreCardEntry> {
        self.slots[category.index()].as_ref()
    }

    /// Unclaimed categories in **reverse declaration order** (Yahtzee
    /// first). Consumers rely on this ordering as the priority order when
    /// several categories tie on score.
    pub fn open_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .rev()
            .filter(|c| self.slots[c.index()].is_none())
            .collect()
    }

    /// Open categories a partial kept hand can still be completed into,
    /// preserving the [`ScoreCard::open_categories`] ordering.
    pub fn possible_categories(&self, dice: &[u8]) -> Vec<Category> {
        self.open_categories()
            .into_iter()
            .filter(|c| c.is_possible(dice))
            .collect()
    }

    /// The open category a complete five-die hand scores highest in, or
    /// `None` when the hand satisfies no open category.
    ///
    /// Ties are broken deterministically: the scan proceeds in reverse
    /// declaration order and the first category to reach the running
    /// maximum wins, so a tied Yahtzee beats a tied upper-section score.
    pub fn max_scoring_category(&self, dice: &[u8]) -> Option<Category> {
        let mut best: Option<Category> = None;
        let mut best_score = 0u32;
        for category in self.open_categories() {
            if !category.is_applicable(dice) {
                continue;
            }
            let score = category.score(dice);
            if score > best_score {
                best_score = score;
                best = Some(category);
            }
        }
        best
    }

    /// Claim a slot, returning the new card. Fails if the slot is taken.
    pub fn add_entry(
        &self,
        category: Category,
        points: u32,
        winner: PlayerId,
        round: u32,
    ) -> Result<ScoreCard, ScoreCardError> {
        if self.slots[category.index()].is_some() {
            return Err(ScoreCardError::CategoryAlreadyScored(category));
        }
        let mut next = self.clone();
        next.slots[category.index()] = Some(ScoreCardEntry {
            points,
            winner,
            round,
        });
        Ok(next)
    }

    /// Claim the best-scoring open slot for a finished hand. When the hand
    /// satisfies no open category (possible but rare once a third roll
    /// forces a result), the card is returned unchanged.
    pub fn add_best_entry(
        &self,
        round: u32,
        winner: PlayerId,
        dice: &[u8],
    ) -> Result<ScoreCard, ScoreCardError> {
        match self.max_scoring_category(dice) {
            Some(category) => self.add_entry(category, category.score(dice), winner, round),
            None => Ok(self.clone()),
        }
    }

    /// Whether every slot is claimed (terminal state).
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Total points claimed by a player.
    pub fn player_score(&self, player: &PlayerId) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|e| &e.winner == player)
            .map(|e| e.points)
            .sum()
    }

    /// Every player with at least one entry, in slot order, deduplicated.
    pub fn players(&self) -> Vec<PlayerId> {
        let mut players: Vec<PlayerId> = Vec::new();
        for entry in self.slots.iter().flatten() {
            if !players.contains(&entry.winner) {
                players.push(entry.winner.clone());
            }
        }
        players
    }

    /// The player with the strictly highest positive total, once the card
    /// is full. `None` while the card is open, on a tie, or on an all-zero
    /// card: the maximum must be positive, so a zero-total card has no
    /// winner.
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_full() {
            return None;
        }
        let mut best: Option<PlayerId> = None;
        let mut best_score = 0u32;
        for player in self.players() {
            let score = self.player_score(&player);
            if score > best_score {
                best_score = score;
                best = Some(player);
            } else if score == best_score {
                best = None;
            }
        }
        best
    }

    /// Whether the finished game is a draw: two or more players tied at a
    /// positive maximum. An all-zero card is not a draw, mirroring
    /// [`ScoreCard::winner`].
    pub fn is_draw(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        let totals: Vec<u32> = self
            .players()
            .iter()
            .map(|p| self.player_score(p))
            .collect();
        let max = totals.iter().copied().max().unwrap_or(0);
        max > 0 && totals.iter().filter(|&&t| t == max).count() > 1
    }
}

impl std::fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<20}{:<10}{:<15}{:<10}",
            "Category", "Round", "Winner", "Points"
        )?;
        writeln!(f, "{}", "-".repeat(50))?;
        for category in Category::ALL {
            match self.entry(category) {
                Some(e) => writeln!(
                    f,
                    "{:<20}{:<10}{:<15}{:<10}",
                    category.name(),
                    e.round,
                    e.winner.name(),
                    e.points
                )?,
                None => writeln!(
                    f,
                    "{:<20}{:<10}{:<15}{:<10}",
                    category.name(),
                    "-",
                    "-",
                    "-"
                )?,
            }
        }
        Ok(())
    }
}
