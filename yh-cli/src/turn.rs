//! One player's turn: up to three rolls, keeping dice in between.
//!
//! The third roll always ends the turn; before that a player may stand
//! (keep the whole roll) or set aside part of it and roll the rest.

use yh_core::scorecard::ScoreCard;

use crate::io;
use crate::player::Player;
use crate::roll::Roller;

/// Play a full turn and return the final five dice.
pub fn play_turn(player: &Player, card: &ScoreCard, roller: &mut Roller) -> Vec<u8> {
    let mut kept: Vec<u8> = Vec::new();
    let mut current_roll = 1;

    while current_roll <= 3 {
        println!("\nRoll {} of 3", current_roll);
        println!("Potential categories:");
        io::show_categories(&card.possible_categories(&kept));
        println!("{}'s current dice: {}", player.name(), io::fmt_dice(&kept));

        let rolled = player.roll_dice(roller, 5 - kept.len());
        println!("{} rolled: {}", player.name(), io::fmt_dice(&rolled));

        if current_roll == 3 {
            println!("End of turn.");
            kept.extend_from_slice(&rolled);
            break;
        }

        if player.wants_help() {
            println!("Help:\n{}\n", crate::help::render_help(card, &kept, &rolled));
        }

        if player.wants_to_stand(card, &kept, &rolled) {
            println!("{} chose to stand.", player.name());
            kept.extend_from_slice(&rolled);
            break;
        }

        let keep = player.dice_to_keep(card, &rolled, &kept);
        println!("{} kept: {}", player.name(), io::fmt_dice(&keep));
        kept.extend_from_slice(&keep);

        if kept.len() == 5 {
            println!("All dice kept. End of turn.");
            break;
        }

        if let Some(pursuits) = player.category_pursuits(card, &kept) {
            println!("{}'s pursuits:", player.name());
            io::show_category_pursuits(&pursuits);
        }
        if let Some((category, dice)) = player.target(card, &kept) {
            println!(
                "{}'s target: {} by rolling {}",
                player.name(),
                category.name(),
                io::fmt_dice(&dice)
            );
        }

        current_roll += 1;
    }

    println!(
        "{}'s final dice: {}\n",
        player.name(),
        io::fmt_dice(&kept)
    );
    kept
}
