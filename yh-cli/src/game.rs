//! Round and game orchestration.
//!
//! Each round every player takes one turn and the finished hand claims its
//! best open category. The player behind in points goes first; a tied
//! score is settled by a die toss.

use yh_core::scorecard::{ScoreCard, ScoreCardError};

use crate::events::{EventWriter, ScoreEventV1, TurnEventV1};
use crate::player::Player;
use crate::roll::Roller;
use crate::turn;

pub struct Game {
    pub scorecard: ScoreCard,
    pub round: u32,
    pub players: Vec<Player>,
}

impl Game {
    pub fn new(players: Vec<Player>, scorecard: ScoreCard, round: u32) -> Self {
        Self {
            scorecard,
            round,
            players,
        }
    }

    /// Terminal once every category is claimed.
    pub fn is_over(&self) -> bool {
        self.scorecard.is_full()
    }

    pub fn show_scores(&self) {
        println!("Scores:");
        for player in &self.players {
            println!(
                "{}: {}",
                player.name(),
                self.scorecard.player_score(&player.id)
            );
        }
        println!();
    }

    /// Indices into `players` in turn order: ascending total, a tied pair
    /// settled by a die toss (higher toss goes first).
    fn turn_order(&self, roller: &mut Roller) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.players.len()).collect();

        if self.players.len() == 2 {
            let a = self.scorecard.player_score(&self.players[0].id);
            let b = self.scorecard.player_score(&self.players[1].id);
            if a == b {
                println!("Scores are tied at {}. Tossing a die for the order.", a);
                loop {
                    let toss_a = roller.roll_die();
                    let toss_b = roller.roll_die();
                    println!(
                        "{} tossed {}, {} tossed {}.",
                        self.players[0].name(),
                        toss_a,
                        self.players[1].name(),
                        toss_b
                    );
                    if toss_a > toss_b {
                        return vec![0, 1];
                    }
                    if toss_b > toss_a {
                        return vec![1, 0];
                    }
                }
            }
        }

        order.sort_by_key(|&i| self.scorecard.player_score(&self.players[i].id));
        order
    }

    /// Play one round and return the next game state. The scorecard is
    /// persistent, so the caller's snapshot survives if this errs.
    pub fn play_round(
        self,
        roller: &mut Roller,
        events: &mut Option<EventWriter>,
    ) -> Result<Game, ScoreCardError> {
        if self.is_over() {
            println!("The game is over!");
            return Ok(self);
        }

        println!("Round {}", self.round);
        self.show_scores();

        let order = self.turn_order(roller);
        let mut card = self.scorecard.clone();

        for idx in order {
            if card.is_full() {
                break;
            }
            let player = &self.players[idx];

            println!("{}", card);
            println!("It's {}'s turn.", player.name());

            let dice = turn::play_turn(player, &card, roller);

            if let Some(w) = events.as_mut() {
                log_or_warn(w.write_event(&TurnEventV1 {
                    event: "turn",
                    round: self.round,
                    player: player.name().to_string(),
                    final_dice: dice.clone(),
                }));
            }

            match card.max_scoring_category(&dice) {
                Some(category) => {
                    let points = category.score(&dice);
                    println!(
                        "{} scored {} points in the {} category.\n",
                        player.name(),
                        points,
                        category.name()
                    );
                    card = card.add_entry(category, points, player.id.clone(), self.round)?;
                    if let Some(w) = events.as_mut() {
                        log_or_warn(w.write_event(&ScoreEventV1 {
                            event: "score",
                            round: self.round,
                            player: player.name().to_string(),
                            category: category.name().to_string(),
                            points,
                        }));
                    }
                }
                None => {
                    println!(
                        "{}'s dice {} fit no open category; the turn scores nothing.\n",
                        player.name(),
                        crate::io::fmt_dice(&dice)
                    );
                }
            }
        }

        if let Some(w) = events.as_mut() {
            log_or_warn(w.flush());
        }

        println!("Round ends");

        Ok(Game {
            scorecard: card,
            round: self.round + 1,
            players: self.players,
        })
    }
}

fn log_or_warn<E: std::fmt::Debug>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("event log write failed: {:?}", e);
    }
}
