//! yh-advisor: the computer player's decision procedure.
//!
//! Every function here is a pure, deterministic computation over a scorecard
//! snapshot and the current turn's dice. The turn driver asks four questions
//! between rolls (which dice to keep, whether to stand, which category to
//! pursue and why, and what the target is) and applies the answers itself;
//! nothing in this crate mutates a scorecard or touches an RNG.
//!
//! The search is exhaustive rather than probabilistic: with `k` dice kept
//! there are only `C(10 - k, 5 - k)` reachable final hands (252 at worst),
//! so every candidate is scored against every open category and ranked.

use yh_core::category::Category;
use yh_core::multiset;
use yh_core::scorecard::ScoreCard;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Best-case/worst-case framing for one still-possible category: the top
/// score reachable from the kept dice (and the extra dice that get there),
/// and the smallest non-zero score that could still be locked in (and its
/// extra dice).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reason {
    pub pursued: Category,
    pub max_score: u32,
    pub roll_to_get_max: Vec<u8>,
    pub min_score: u32,
    pub roll_to_get_min: Vec<u8>,
}

/// Every final five-die hand reachable from the kept dice, each sorted
/// ascending: the kept dice plus one completion from
/// [`multiset::combinations`].
pub fn possible_final_rolls(kept: &[u8]) -> Vec<Vec<u8>> {
    debug_assert!(kept.len() <= 5, "kept more than five dice");
    multiset::combinations(5 - kept.len())
        .into_iter()
        .map(|completion| {
            let mut roll = kept.to_vec();
            roll.extend_from_slice(&completion);
            roll.sort_unstable();
            roll
        })
        .collect()
}

/// Score every reachable final hand against every open category, ranked by
/// score descending. The sort is stable, so hands tied on score stay in
/// enumeration order.
fn scored_rolls(final_rolls: &[Vec<u8>], card: &ScoreCard) -> Vec<(Vec<u8>, u32)> {
    let open = card.open_categories();
    let mut scores = Vec::with_capacity(final_rolls.len() * open.len());
    for roll in final_rolls {
        for &category in &open {
            scores.push((roll.clone(), category.score(roll)));
        }
    }
    scores.sort_by(|a, b| b.1.cmp(&a.1));
    scores
}

/// Among the hands tied at the top score, pick the one needing the fewest
/// dice changed relative to `reference` (smallest multiset difference).
fn find_best_roll(scores: &[(Vec<u8>, u32)], reference: &[u8]) -> Vec<u8> {
    let max_score = scores[0].1;
    let mut best = &scores[0].0;
    let mut best_diff = multiset::difference(best, reference).len();

    for (roll, score) in scores {
        if *score < max_score {
            break;
        }
        let diff = multiset::difference(roll, reference).len();
        if diff < best_diff {
            best = roll;
            best_diff = diff;
        }
    }

    best.clone()
}

/// The final hand the computer should aim for from its kept dice: the
/// highest-scoring reachable hand, ties broken by closeness to the dice
/// already kept.
pub fn best_roll(card: &ScoreCard, kept: &[u8]) -> Vec<u8> {
    assert!(!card.is_full(), "no open categories to aim for");
    let final_rolls = possible_final_rolls(kept);
    let scores = scored_rolls(&final_rolls, card);
    find_best_roll(&scores, kept)
}

/// Which of the just-rolled dice to set aside.
///
/// High-value fragile hands short-circuit the search: a completed Yahtzee
/// is kept whole, and if deduplicating the new roll already completes an
/// open five-straight (or else four-straight) those distinct dice are kept
/// as-is. Otherwise the keep-set is derived from the best reachable hand:
/// of the dice still needed for it, keep the ones the roll just provided.
pub fn dice_to_keep(card: &ScoreCard, rolled: &[u8], kept: &[u8]) -> Vec<u8> {
    assert!(!card.is_full(), "no open categories to aim for");
    let open = card.open_categories();

    let mut combined = kept.to_vec();
    combined.extend_from_slice(rolled);
    if open.contains(&Category::Yahtzee) && Category::Yahtzee.is_applicable(&combined) {
        return rolled.to_vec();
    }

    for straight in [Category::FiveStraight, Category::FourStraight] {
        if !open.contains(&straight) {
            continue;
        }
        let unique = multiset::distinct(rolled);
        let mut candidate = kept.to_vec();
        candidate.extend_from_slice(&unique);
        if straight.is_applicable(&candidate) {
            return unique;
        }
    }

    let final_rolls = possible_final_rolls(kept);
    let scores = scored_rolls(&final_rolls, card);
    let best = find_best_roll(&scores, rolled);
    let needed = multiset::difference(&best, kept);
    multiset::intersection(&needed, rolled)
}

/// Best-case/worst-case breakdown for every category the kept dice can
/// still reach, in [`ScoreCard::possible_categories`] order.
///
/// For each category the scan tracks the maximum score over all reachable
/// hands and the minimum non-zero score, each with the incremental dice
/// that produce it; a candidate displaces the incumbent only if its
/// incremental-dice count does not exceed the incumbent's. Possibility is
/// a cheap over-approximation, so a listed category can turn out to have
/// no scoring completion at all; its worst case then stays at zero.
pub fn category_pursuits(card: &ScoreCard, kept: &[u8]) -> Vec<Reason> {
    let final_rolls = possible_final_rolls(kept);

    card.possible_categories(kept)
        .into_iter()
        .map(|category| {
            let mut max_score = 0u32;
            let mut max_diff = usize::MAX;
            let mut roll_to_get_max = Vec::new();
            let mut min_score = u32::MAX;
            let mut min_diff = usize::MAX;
            let mut roll_to_get_min = Vec::new();

            for roll in &final_rolls {
                let increment = multiset::difference(roll, kept);
                let score = category.score(roll);

                if score >= max_score && increment.len() <= max_diff {
                    max_score = score;
                    max_diff = increment.len();
                    roll_to_get_max = increment.clone();
                }
                if score > 0 && score < min_score && increment.len() <= min_diff {
                    min_score = score;
                    min_diff = increment.len();
                    roll_to_get_min = increment;
                }
            }

            if min_score == u32::MAX {
                min_score = 0;
            }

            Reason {
                pursued: category,
                max_score,
                roll_to_get_max,
                min_score,
                roll_to_get_min,
            }
        })
        .collect()
}

/// The category the best reachable hand would be scored in, with the
/// incremental dice needed to get there. `None` when no open category
/// applies to that hand.
pub fn target(card: &ScoreCard, kept: &[u8]) -> Option<(Category, Vec<u8>)> {
    let best = best_roll(card, kept);
    let category = card.max_scoring_category(&best)?;
    Some((category, multiset::difference(&best, kept)))
}

/// Stop rolling exactly when the keep decision would keep every die just
/// rolled; rerolling nothing is pointless.
pub fn wants_to_stand(card: &ScoreCard, kept: &[u8], rolled: &[u8]) -> bool {
    let keep = dice_to_keep(card, rolled, kept);
    multiset::unordered_eq(&keep, rolled)
}
