//! Saved games: a single JSON document written atomically.
//!
//! The write goes to a temp file first and is renamed into place, so a
//! crash mid-save never leaves a truncated save behind. Nothing about the
//! format is guaranteed across versions; a save that fails to parse is
//! rejected here before any core type is built from it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use yh_core::scorecard::ScoreCard;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("save file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("save file is not a valid saved game: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to resume: the next round number and the scorecard.
/// Player identities ride along inside the entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub round: u32,
    pub scorecard: ScoreCard,
}

pub fn save_game_atomic(path: impl AsRef<Path>, game: &SavedGame) -> Result<(), SaveError> {
    let path = path.as_ref();
    let tmp = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(game)?;
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_game(path: impl AsRef<Path>) -> Result<SavedGame, SaveError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yh_core::category::Category;
    use yh_core::scorecard::PlayerId;

    fn sample() -> SavedGame {
        let scorecard = ScoreCard::new()
            .add_entry(Category::Yahtzee, 50, PlayerId::new("Ada"), 1)
            .unwrap()
            .add_entry(Category::Fours, 12, PlayerId::new("Bo"), 1)
            .unwrap();
        SavedGame {
            round: 2,
            scorecard,
        }
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");

        let game = sample();
        save_game_atomic(&path, &game).unwrap();
        let loaded = load_game(&path).unwrap();
        assert_eq!(loaded, game);
    }

    #[test]
    fn stale_tmp_file_does_not_break_the_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");

        let game = sample();
        save_game_atomic(&path, &game).unwrap();

        // Simulate a crash that left a corrupt temp file around.
        std::fs::write(path.with_extension("json.tmp"), b"{not json").unwrap();
        assert_eq!(load_game(&path).unwrap(), game);

        // And the next save still overwrites cleanly.
        let mut game2 = game.clone();
        game2.round = 3;
        save_game_atomic(&path, &game2).unwrap();
        assert_eq!(load_game(&path).unwrap(), game2);
    }

    #[test]
    fn corrupt_save_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        std::fs::write(&path, b"{\"round\": \"not a number\"}").unwrap();
        assert!(matches!(load_game(&path), Err(SaveError::Json(_))));
    }

    #[test]
    fn missing_save_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(load_game(&path), Err(SaveError::Io(_))));
    }
}
