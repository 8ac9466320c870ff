//! Renders the advisor's output as advice for a human player.
//!
//! The advisor itself stays pure; this module turns its keep/pursuit/target
//! answers for the *current* situation into the prose shown at the table.

use yh_core::scorecard::ScoreCard;

use crate::io::fmt_dice;

pub fn render_help(card: &ScoreCard, kept: &[u8], rolled: &[u8]) -> String {
    let keep = yh_advisor::dice_to_keep(card, rolled, kept);
    let mut help_dice = kept.to_vec();
    help_dice.extend_from_slice(&keep);

    let pursuits = yh_advisor::category_pursuits(card, &help_dice);
    let target = yh_advisor::target(card, &help_dice);

    let mut text = format!("You should keep: {} because:\n", fmt_dice(&keep));

    for reason in &pursuits {
        if reason.min_score == 0 {
            text.push_str(&format!(
                " - You can get {} with a score of {}. For example, by rolling {}\n",
                reason.pursued.name(),
                reason.max_score,
                fmt_dice(&reason.roll_to_get_max)
            ));
            continue;
        }
        text.push_str(&format!(
            " - You can get {} with a minimum score of {} by getting {} and a maximum score of {} by rolling {}\n",
            reason.pursued.name(),
            reason.min_score,
            fmt_dice(&reason.roll_to_get_min),
            reason.max_score,
            fmt_dice(&reason.roll_to_get_max)
        ));
    }

    text.push_str("\nConsidering this, your target should be to get ");
    match target {
        Some((category, dice)) => text.push_str(&format!(
            "{}. A way to do this would be to roll {} in your subsequent rolls.\n",
            category.name(),
            fmt_dice(&dice)
        )),
        None => text.push_str("None\n"),
    }

    if yh_advisor::wants_to_stand(card, kept, rolled) {
        text.push_str("You should stand.\n");
    } else {
        text.push_str("Do not stand. You should keep rolling.\n");
    }

    if keep.is_empty() {
        text.push_str("Do not keep any dice. You should roll all the dice.\n");
    } else {
        text.push_str(&format!(
            "You should keep the following dice before you roll: {}",
            fmt_dice(&keep)
        ));
    }

    text
}
