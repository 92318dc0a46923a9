//! Game-level evaluation: best of five quests, first side to three.

use types::{Game, GameVerdict, Verdict};

use crate::quests::evaluate_quest;

/// Decide the overall game from its quests in creation order. The 7+
/// player double-fail rule is applied inside quest evaluation, not here.
pub fn evaluate_game(game: &Game) -> GameVerdict {
    let player_count = game.player_count();
    let mut passes = 0;
    let mut fails = 0;
    for (quest_index, quest) in game.quests.iter().enumerate() {
        match evaluate_quest(quest, quest_index, player_count) {
            Verdict::Pass => passes += 1,
            Verdict::Fail => fails += 1,
            Verdict::Pending => {}
        }
    }
    if passes >= 3 {
        GameVerdict::GoodWins
    } else if fails >= 3 {
        GameVerdict::EvilWins
    } else {
        GameVerdict::Ongoing
    }
}
