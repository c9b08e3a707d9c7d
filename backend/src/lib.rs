pub mod api;
pub mod report;

/// Everything the query surface serves, parsed once at startup. Never
/// mutated afterwards, so handlers share it without locking.
pub struct AppState {
    pub games: Vec<analysis::games::Game>,
    pub ranking: Vec<analysis::ranking::RankingEntry>,
}

impl AppState {
    pub fn load<P>(log_file: P) -> std::io::Result<Self>
    where
        P: AsRef<std::path::Path>,
    {
        let games = analysis::games::parse_file(log_file)?;
        let ranking = analysis::ranking::rank(&games);

        Ok(Self { games, ranking })
    }
}

pub fn game_summary(game: &analysis::games::Game) -> common::GameSummary {
    common::GameSummary {
        game: format!("game_{}", game.id),
        id: game.id,
        total_kills: game.total_kills,
        players: game.players.clone(),
        kills: game.kills.clone(),
    }
}

pub fn ranking_entry(entry: &analysis::ranking::RankingEntry) -> common::RankingEntry {
    common::RankingEntry {
        player: entry.player.clone(),
        kills: entry.kills,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    fn sample_game() -> analysis::games::Game {
        analysis::games::Game {
            id: 3,
            total_kills: 5,
            players: vec!["Alice".to_owned(), "Bob".to_owned()],
            kills: [("Alice".to_owned(), 4), ("Bob".to_owned(), -1)]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn summary_carries_the_derived_label() {
        let summary = super::game_summary(&sample_game());

        let expected = common::GameSummary {
            game: "game_3".to_owned(),
            id: 3,
            total_kills: 5,
            players: vec!["Alice".to_owned(), "Bob".to_owned()],
            kills: [("Alice".to_owned(), 4), ("Bob".to_owned(), -1)]
                .into_iter()
                .collect(),
        };

        assert_eq!(summary, expected);
    }

    #[test]
    fn summary_wire_format() {
        let serialized = serde_json::to_value(super::game_summary(&sample_game())).unwrap();

        let expected = serde_json::json!({
            "game": "game_3",
            "id": 3,
            "total_kills": 5,
            "players": ["Alice", "Bob"],
            "kills": { "Alice": 4, "Bob": -1 },
        });

        assert_eq!(serialized, expected);
    }
}
