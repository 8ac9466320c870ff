//! The twelve scoring categories and their rules.
//!
//! Three questions are asked of a category:
//! - [`Category::is_applicable`]: does a complete five-die hand satisfy it?
//! - [`Category::score`]: what is that hand worth in it?
//! - [`Category::is_possible`]: can a partial kept hand still be completed
//!   into one that satisfies it?

use serde::{Deserialize, Serialize};

use crate::multiset;

/// One of the twelve fixed scoring categories, in declaration order.
///
/// Declaration order is load-bearing: it is the display order, and its
/// reverse is the priority order used to break score ties (see
/// [`crate::ScoreCard::open_categories`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    FourStraight,
    FiveStraight,
    Yahtzee,
}

/// Number of categories.
pub const NUM_CATEGORIES: usize = 12;

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::FourStraight,
        Category::FiveStraight,
        Category::Yahtzee,
    ];

    /// Position in declaration order (0..12).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::FourStraight => "Four Straight",
            Category::FiveStraight => "Five Straight",
            Category::Yahtzee => "Yahtzee",
        }
    }

    /// For the upper-section categories, the face they count. `None` for the
    /// lower section.
    fn upper_face(self) -> Option<u8> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// Whether a complete five-die hand satisfies this category.
    ///
    /// Only meaningful for hands of exactly five dice; the partial-hand
    /// question is [`Category::is_possible`].
    pub fn is_applicable(self, dice: &[u8]) -> bool {
        if let Some(face) = self.upper_face() {
            return multiset::contains_face(dice, face);
        }
        match self {
            Category::ThreeOfAKind => multiset::max_face_count(dice) >= 3,
            Category::FourOfAKind => multiset::max_face_count(dice) >= 4,
            Category::FullHouse => {
                let counts = multiset::face_counts(dice);
                counts[1..].contains(&2) && counts[1..].contains(&3)
            }
            Category::FourStraight => multiset::longest_run(dice) >= 4,
            Category::FiveStraight => {
                multiset::distinct_count(dice) == 5 && multiset::longest_run(dice) == 5
            }
            Category::Yahtzee => multiset::max_face_count(dice) == 5,
            _ => unreachable!("upper faces handled above"),
        }
    }

    /// Score for a complete five-die hand: 0 when the category does not
    /// apply, otherwise the fixed table. Face × count for the upper
    /// section, the sum of all five dice for three/four of a kind, and
    /// 25 / 30 / 40 / 50 for full house, four straight, five straight and
    /// Yahtzee.
    pub fn score(self, dice: &[u8]) -> u32 {
        if !self.is_applicable(dice) {
            return 0;
        }
        if let Some(face) = self.upper_face() {
            return multiset::count_of(dice, face) as u32 * face as u32;
        }
        match self {
            Category::ThreeOfAKind | Category::FourOfAKind => multiset::sum(dice),
            Category::FullHouse => 25,
            Category::FourStraight => 30,
            Category::FiveStraight => 40,
            Category::Yahtzee => 50,
            _ => unreachable!("upper faces handled above"),
        }
    }

    /// Whether a partial kept hand (0..=5 dice) can still be completed into
    /// one that satisfies this category. An empty hand can become anything.
    pub fn is_possible(self, dice: &[u8]) -> bool {
        if dice.is_empty() {
            return true;
        }
        let slots_left = 5 - dice.len() as u8;
        if let Some(face) = self.upper_face() {
            return multiset::contains_face(dice, face) || dice.len() < 5;
        }
        match self {
            Category::Yahtzee => multiset::distinct_count(dice) == 1,
            Category::FiveStraight => {
                // 1 and 6 together span six faces; only five slots exist.
                multiset::repeated_excess(dice) < 1
                    && !(multiset::contains_face(dice, 1) && multiset::contains_face(dice, 6))
            }
            Category::FourStraight => multiset::repeated_excess(dice) < 2,
            Category::FullHouse => {
                multiset::distinct_count(dice) <= 2 && multiset::max_face_count(dice) <= 3
            }
            Category::FourOfAKind => slots_left + multiset::max_face_count(dice) >= 4,
            Category::ThreeOfAKind => slots_left + multiset::max_face_count(dice) >= 3,
            _ => unreachable!("upper faces handled above"),
        }
    }

    /// The categories a complete hand satisfies, in declaration order.
    pub fn applicable_categories(dice: &[u8]) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| c.is_applicable(dice))
            .collect()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
