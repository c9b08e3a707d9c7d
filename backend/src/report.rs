//! Console twin of the HTTP API, rendering the same wire types.

pub fn render_game(summary: &common::GameSummary) -> String {
    let kills = summary
        .kills
        .iter()
        .map(|(player, score)| format!("{}: {}", player, score))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}: {{\n  total_kills: {}\n  players: [{}]\n  kills: {{{}}}\n}}\n",
        summary.game,
        summary.total_kills,
        summary.players.join(", "),
        kills,
    )
}

pub fn render_ranking(entries: &[common::RankingEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}: {}\n", entry.player, entry.kills))
        .collect()
}

pub fn print_reports(state: &crate::AppState) {
    println!("Game reports:\n");
    for game in state.games.iter() {
        println!("{}", render_game(&crate::game_summary(game)));
    }

    println!("Overall ranking:\n");
    let entries: Vec<_> = state.ranking.iter().map(crate::ranking_entry).collect();
    print!("{}", render_ranking(&entries));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    #[test]
    fn game_report_block() {
        let summary = common::GameSummary {
            game: "game_1".to_owned(),
            id: 1,
            total_kills: 45,
            players: vec!["Dono da Bola".to_owned(), "Isgalamido".to_owned()],
            kills: [
                ("Dono da Bola".to_owned(), 5),
                ("Isgalamido".to_owned(), 18),
            ]
            .into_iter()
            .collect(),
        };

        let expected = "game_1: {
  total_kills: 45
  players: [Dono da Bola, Isgalamido]
  kills: {Dono da Bola: 5, Isgalamido: 18}
}
";

        assert_eq!(super::render_game(&summary), expected);
    }

    #[test]
    fn game_report_without_players() {
        let summary = common::GameSummary {
            game: "game_1".to_owned(),
            id: 1,
            total_kills: 0,
            players: Vec::new(),
            kills: std::collections::BTreeMap::new(),
        };

        let expected = "game_1: {
  total_kills: 0
  players: []
  kills: {}
}
";

        assert_eq!(super::render_game(&summary), expected);
    }

    #[test]
    fn ranking_lines() {
        let entries = vec![
            common::RankingEntry {
                player: "Isgalamido".to_owned(),
                kills: 19,
            },
            common::RankingEntry {
                player: "Mocinha".to_owned(),
                kills: -2,
            },
        ];

        assert_eq!(
            super::render_ranking(&entries),
            "Isgalamido: 19\nMocinha: -2\n"
        );
    }
}
