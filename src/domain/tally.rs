use serde::Serialize;

use super::models::{MatchDetail, MatchType, Participation, PlayerRecord, SetRow, Side, WinLoss};

/// One match's contribution to the player's record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchTally {
    pub singles: WinLoss,
    pub doubles: WinLoss,
}

impl MatchTally {
    pub fn is_empty(&self) -> bool {
        self.singles.played() == 0 && self.doubles.played() == 0
    }

    fn slot(&mut self, match_type: MatchType) -> &mut WinLoss {
        match match_type {
            MatchType::Singles => &mut self.singles,
            MatchType::Doubles => &mut self.doubles,
        }
    }
}

/// Find the player's side and 1-based position; home is checked first.
///
/// `player` must already be lowercased, like the roster names.
pub fn resolve_participation(detail: &MatchDetail, player: &str) -> Option<Participation> {
    let on_side = |roster: &[String], side: Side| {
        roster
            .iter()
            .position(|name| name == player)
            .map(|index| Participation {
                side,
                position: index + 1,
            })
    };

    on_side(detail.home_roster.as_slice(), Side::Home)
        .or_else(|| on_side(detail.away_roster.as_slice(), Side::Away))
}

/// Count the player's set wins and losses in one match
pub fn tally_match(detail: &MatchDetail, player: &str, winning_score: &str) -> MatchTally {
    let mut tally = MatchTally::default();

    let Some(participation) = resolve_participation(detail, player) else {
        return tally;
    };

    for set in &detail.sets {
        if !plays_in(set, participation) {
            continue;
        }
        let won = set.games_for(participation.side) == Some(winning_score);
        tally.slot(set.match_type()).record(won);
    }

    tally
}

/// Position columns hold concatenated digits (`"12"` for players 1 and 2)
fn plays_in(set: &SetRow, participation: Participation) -> bool {
    set.positions(participation.side)
        .contains(&participation.position.to_string())
}

/// Sum per-match tallies into the final record; order does not matter.
pub fn fold_tallies<I>(mut record: PlayerRecord, tallies: I) -> PlayerRecord
where
    I: IntoIterator<Item = MatchTally>,
{
    for tally in tallies {
        record.singles += tally.singles;
        record.doubles += tally.doubles;
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn detail(home: &[&str], away: &[&str], sets: Vec<SetRow>) -> MatchDetail {
        MatchDetail {
            home_roster: roster(home),
            away_roster: roster(away),
            sets,
        }
    }

    #[test]
    fn test_resolves_home_position() {
        let d = detail(&["a", "b", "target"], &["c", "d"], vec![]);
        assert_eq!(
            resolve_participation(&d, "target"),
            Some(Participation {
                side: Side::Home,
                position: 3
            })
        );
    }

    #[test]
    fn test_resolves_away_position() {
        let d = detail(&["a", "b"], &["c", "target"], vec![]);
        assert_eq!(
            resolve_participation(&d, "target"),
            Some(Participation {
                side: Side::Away,
                position: 2
            })
        );
    }

    #[test]
    fn test_home_singles_win() {
        let d = detail(&["target", "b"], &["c", "d"], vec![SetRow::new("1", "6-2", "1")]);
        let tally = tally_match(&d, "target", "6");
        assert_eq!(tally.singles, WinLoss { wins: 1, losses: 0 });
        assert_eq!(tally.doubles, WinLoss::default());
    }

    #[test]
    fn test_away_doubles_win() {
        let d = detail(&["a", "b"], &["target", "d"], vec![SetRow::new("12", "3-6", "12")]);
        let tally = tally_match(&d, "target", "6");
        assert_eq!(tally.doubles, WinLoss { wins: 1, losses: 0 });
        assert_eq!(tally.singles, WinLoss::default());
    }

    #[test]
    fn test_losses_and_sets_not_played() {
        let d = detail(
            &["a", "target"],
            &["c", "d"],
            vec![
                SetRow::new("1", "6-1", "1"),
                SetRow::new("2", "4-6", "2"),
                SetRow::new("12", "6-3", "12"),
                SetRow::new("2", "2-6", "1"),
            ],
        );
        let tally = tally_match(&d, "target", "6");
        assert_eq!(tally.singles, WinLoss { wins: 0, losses: 2 });
        assert_eq!(tally.doubles, WinLoss { wins: 1, losses: 0 });
    }

    #[test]
    fn test_absent_player_changes_nothing() {
        let d = detail(&["a", "b"], &["c", "d"], vec![SetRow::new("1", "6-2", "1")]);
        assert!(resolve_participation(&d, "target").is_none());
        assert!(tally_match(&d, "target", "6").is_empty());
    }

    #[test]
    fn test_fold_is_order_independent() {
        let first = MatchTally {
            singles: WinLoss { wins: 2, losses: 1 },
            doubles: WinLoss { wins: 0, losses: 1 },
        };
        let second = MatchTally {
            singles: WinLoss { wins: 0, losses: 1 },
            doubles: WinLoss { wins: 3, losses: 0 },
        };

        let forward = fold_tallies(PlayerRecord::new("P", "T"), [first, second]);
        let backward = fold_tallies(PlayerRecord::new("P", "T"), [second, first]);

        assert_eq!(forward, backward);
        assert_eq!(forward.singles, WinLoss { wins: 2, losses: 2 });
        assert_eq!(forward.doubles, WinLoss { wins: 3, losses: 1 });
    }
}
