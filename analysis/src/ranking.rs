use std::collections::HashMap;

use crate::games::Game;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankingEntry {
    pub player: String,
    pub kills: i64,
}

/// Cross-game standings: every player's per-game scores summed over `games`
/// in input order, highest total first. Equal totals keep the order in which
/// the players were first encountered.
pub fn rank(games: &[Game]) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for game in games {
        for (player, score) in game.kills.iter() {
            match positions.get(player) {
                Some(idx) => {
                    entries[*idx].kills += score;
                }
                None => {
                    positions.insert(player.clone(), entries.len());
                    entries.push(RankingEntry {
                        player: player.clone(),
                        kills: *score,
                    });
                }
            };
        }
    }

    // Stable sort, so ties stay in first-encounter order.
    entries.sort_by(|a, b| b.kills.cmp(&a.kills));

    entries
}
