//! Line-oriented prompt and display helpers.
//!
//! Everything that reads stdin lives here; the turn and round loops call
//! these for the human player only, so automated games never block.

use std::io::{BufRead, Write};

use yh_advisor::Reason;
use yh_core::category::Category;
use yh_core::multiset;

/// `[3 4 5]`: the display form used for every dice list.
pub fn fmt_dice(dice: &[u8]) -> String {
    let parts: Vec<String> = dice.iter().map(|d| d.to_string()).collect();
    format!("[{}]", parts.join(" "))
}

/// Parse whitespace-separated die values; `None` on anything malformed or
/// out of 1..=6.
pub fn parse_dice(input: &str) -> Option<Vec<u8>> {
    let mut dice = Vec::new();
    for token in input.split_whitespace() {
        match token.parse::<u8>() {
            Ok(d) if (1..=6).contains(&d) => dice.push(d),
            _ => return None,
        }
    }
    Some(dice)
}

pub fn show_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("  (none)");
        return;
    }
    let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
    println!("  {}", names.join(", "));
}

pub fn show_category_pursuits(pursuits: &[Reason]) {
    for reason in pursuits {
        if reason.min_score == 0 {
            println!(
                " - {}: up to {} points, e.g. by rolling {}",
                reason.pursued.name(),
                reason.max_score,
                fmt_dice(&reason.roll_to_get_max)
            );
        } else {
            println!(
                " - {}: at least {} points by getting {}, up to {} by rolling {}",
                reason.pursued.name(),
                reason.min_score,
                fmt_dice(&reason.roll_to_get_min),
                reason.max_score,
                fmt_dice(&reason.roll_to_get_max)
            );
        }
    }
}

fn read_trimmed_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

/// Ask until the answer starts with y/n.
pub fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        let answer = read_trimmed_line(&format!("{} (y/n): ", prompt)).to_lowercase();
        if answer.starts_with('y') {
            return true;
        }
        if answer.starts_with('n') {
            return false;
        }
        println!("Please answer y or n.");
    }
}

/// Manual dice entry for players rolling physical dice. Empty input means
/// "roll for me"; otherwise exactly `n` values are required.
pub fn prompt_manual_roll(n: usize) -> Option<Vec<u8>> {
    loop {
        let input = read_trimmed_line(&format!(
            "Enter your {} dice (or press enter to roll): ",
            n
        ));
        if input.is_empty() {
            return None;
        }
        match parse_dice(&input) {
            Some(dice) if dice.len() == n => return Some(dice),
            _ => println!("Please enter exactly {} values in 1..6.", n),
        }
    }
}

/// Ask which of the just-rolled dice to set aside, until the answer is a
/// sub-multiset of the roll. Empty input keeps nothing.
pub fn prompt_dice_to_keep(rolled: &[u8]) -> Vec<u8> {
    loop {
        let input = read_trimmed_line(&format!(
            "You rolled {}. Which dice do you keep? ",
            fmt_dice(rolled)
        ));
        match parse_dice(&input) {
            Some(keep) if multiset::difference(&keep, rolled).is_empty() => return keep,
            _ => println!("Keep must be a subset of the dice you rolled."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_dice_forms() {
        assert_eq!(fmt_dice(&[]), "[]");
        assert_eq!(fmt_dice(&[3, 4, 5]), "[3 4 5]");
    }

    #[test]
    fn parse_dice_accepts_only_die_values() {
        assert_eq!(parse_dice("1 2 6"), Some(vec![1, 2, 6]));
        assert_eq!(parse_dice(""), Some(vec![]));
        assert_eq!(parse_dice("0 1"), None);
        assert_eq!(parse_dice("7"), None);
        assert_eq!(parse_dice("two"), None);
    }
}
