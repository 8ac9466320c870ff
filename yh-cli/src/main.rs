//! yh: console duel Yahtzee against the computer.

use std::process;

use yh_cli::config::Config;
use yh_cli::events::EventWriter;
use yh_cli::game::Game;
use yh_cli::player::Player;
use yh_cli::roll::Roller;
use yh_cli::save::{self, SavedGame};
use yh_core::scorecard::ScoreCard;

fn print_help() {
    eprintln!(
        r#"yh - duel Yahtzee

USAGE:
    yh [OPTIONS]

OPTIONS:
    --config PATH   Load settings from a YAML file
    --seed N        Dice seed (overrides the config)
    --load          Resume the game saved at the configured save path
    -h, --help      Print this help message
    -V, --version   Print version
"#
    );
}

fn print_version() {
    println!("yh {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config_path: Option<String> = None;
    let mut seed_override: Option<u64> = None;
    let mut load_save = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--version" | "-V" => {
                print_version();
                return;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --config");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --seed");
                    process::exit(1);
                }
                seed_override = Some(args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i + 1]);
                    process::exit(1);
                }));
                i += 2;
            }
            "--load" => {
                load_save = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run `yh --help` for usage.");
                process::exit(1);
            }
        }
    }

    let config = match config_path {
        Some(path) => Config::load(&path).unwrap_or_else(|e| {
            eprintln!("Failed to load {}: {}", path, e);
            process::exit(1);
        }),
        None => Config::default(),
    };
    let seed = seed_override.unwrap_or(config.seed);

    let mut roller = Roller::from_seed(seed);
    let players = vec![
        Player::human(config.human_name.clone()),
        Player::computer(config.computer_name.clone()),
    ];

    let mut game = if load_save {
        match save::load_game(&config.save_path) {
            Ok(saved) => {
                println!("Resuming round {} from {}.", saved.round, config.save_path);
                Game::new(players, saved.scorecard, saved.round)
            }
            Err(e) => {
                eprintln!("Could not load {}: {}", config.save_path, e);
                process::exit(1);
            }
        }
    } else {
        Game::new(players, ScoreCard::new(), 1)
    };

    let mut events = config.event_log.as_ref().and_then(|path| {
        match EventWriter::open_append(path) {
            Ok(w) => Some(w),
            Err(e) => {
                eprintln!("Could not open event log {}: {:?}", path, e);
                None
            }
        }
    });

    println!("Welcome to duel Yahtzee!\n");

    while !game.is_over() {
        game = match game.play_round(&mut roller, &mut events) {
            Ok(next) => next,
            Err(e) => {
                eprintln!("Round failed: {}", e);
                process::exit(1);
            }
        };

        let saved = SavedGame {
            round: game.round,
            scorecard: game.scorecard.clone(),
        };
        if let Err(e) = save::save_game_atomic(&config.save_path, &saved) {
            eprintln!("Autosave to {} failed: {}", config.save_path, e);
        }
    }

    game.show_scores();

    if game.scorecard.is_draw() {
        println!("It's a draw!");
    } else if let Some(winner) = game.scorecard.winner() {
        println!("The winner is {}!", winner.name());
    } else {
        println!("No winner this time.");
    }

    if let Some(w) = events.as_mut() {
        let totals = game
            .players
            .iter()
            .map(|p| (p.name().to_string(), game.scorecard.player_score(&p.id)))
            .collect();
        let _ = w.write_event(&yh_cli::events::GameOverEventV1 {
            event: "game_over",
            winner: game.scorecard.winner().map(|w| w.name().to_string()),
            draw: game.scorecard.is_draw(),
            totals,
        });
        let _ = w.flush();
    }
}
