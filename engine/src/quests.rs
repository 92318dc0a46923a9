//! Quest-level evaluation: fold a quest's rounds into a single verdict.

use types::{Quest, Verdict};

use crate::rounds::evaluate_round;

/// Fails needed to sabotage a quest: the 4th quest of a 7+ player game
/// needs two, every other quest needs one. `quest_index` is 0-based.
pub fn required_fails(game_player_count: usize, quest_index: usize) -> u32 {
    if game_player_count >= 7 && quest_index == 3 {
        2
    } else {
        1
    }
}

/// Decide a quest from its rounds in order. A successful mission can never
/// be undone, so a Pass anywhere wins over a Fail anywhere else in the
/// round history, whatever order they were recorded in.
pub fn evaluate_quest(quest: &Quest, quest_index: usize, game_player_count: usize) -> Verdict {
    let required = required_fails(game_player_count, quest_index);
    let verdicts: Vec<_> =
        quest.rounds.iter().map(|round| evaluate_round(round, required)).collect();
    if verdicts.contains(&Verdict::Pass) {
        Verdict::Pass
    } else if verdicts.contains(&Verdict::Fail) {
        Verdict::Fail
    } else {
        Verdict::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::{GamePlayer, Quest, Round};

    fn roster(n: i64) -> Vec<GamePlayer> {
        (1..=n).map(GamePlayer::new).collect()
    }

    /// An approved round with the given fail count.
    fn approved_round(id: i64, player_count: i64, fails: u32) -> Round {
        let mut round = Round::fresh(id, &roster(player_count), 1);
        for rp in round.round_players.iter_mut() {
            rp.approval = true;
        }
        for rp in round.round_players.iter_mut().take(3) {
            rp.team = true;
        }
        round.fails = fails;
        round
    }

    fn rejected_round(id: i64, player_count: i64) -> Round {
        Round::fresh(id, &roster(player_count), 1)
    }

    #[test]
    fn threshold_is_two_only_on_the_fourth_quest_of_large_games() {
        for player_count in 2..=10 {
            for quest_index in 0..5 {
                let expected = if player_count >= 7 && quest_index == 3 { 2 } else { 1 };
                assert_eq!(
                    required_fails(player_count, quest_index),
                    expected,
                    "{player_count} players, quest index {quest_index}"
                );
            }
        }
    }

    #[test]
    fn first_decisive_round_wins() {
        let quest = Quest {
            id: 1,
            rounds: vec![
                rejected_round(1, 5),
                rejected_round(2, 5),
                approved_round(3, 5, 0),
            ],
        };
        assert_eq!(evaluate_quest(&quest, 0, 5), Verdict::Pass);
    }

    #[test]
    fn pass_takes_priority_over_fail_anywhere_in_history() {
        let quest = Quest {
            id: 1,
            rounds: vec![approved_round(1, 5, 1), approved_round(2, 5, 0)],
        };
        assert_eq!(evaluate_quest(&quest, 0, 5), Verdict::Pass);

        let reversed = Quest {
            id: 2,
            rounds: vec![approved_round(1, 5, 0), approved_round(2, 5, 1)],
        };
        assert_eq!(evaluate_quest(&reversed, 0, 5), Verdict::Pass);
    }

    #[test]
    fn failed_round_fails_the_quest() {
        let quest = Quest {
            id: 1,
            rounds: vec![rejected_round(1, 5), approved_round(2, 5, 1)],
        };
        assert_eq!(evaluate_quest(&quest, 0, 5), Verdict::Fail);
    }

    #[test]
    fn single_fail_on_a_two_fail_quest_stays_pending() {
        let quest = Quest { id: 1, rounds: vec![approved_round(1, 7, 1)] };
        assert_eq!(evaluate_quest(&quest, 3, 7), Verdict::Pending);
        // same round on any other quest index fails outright
        assert_eq!(evaluate_quest(&quest, 2, 7), Verdict::Fail);
    }

    #[test]
    fn quest_with_only_rejections_is_pending() {
        let quest = Quest {
            id: 1,
            rounds: vec![rejected_round(1, 5), rejected_round(2, 5)],
        };
        assert_eq!(evaluate_quest(&quest, 0, 5), Verdict::Pending);
    }
}
