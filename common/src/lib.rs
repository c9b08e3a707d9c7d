#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSummary {
    pub game: String,
    pub id: u32,
    pub total_kills: u64,
    pub players: Vec<String>,
    pub kills: std::collections::BTreeMap<String, i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankingEntry {
    pub player: String,
    pub kills: i64,
}
