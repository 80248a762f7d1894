use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One leaderboard row as served by the stats API.
///
/// The response array is ordered by descending rank: index 0 is rank 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRankEntry {
    pub user_name: String,
    pub finished_runs: i64,
}

/// Failure modes of a leaderboard fetch
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("leaderboard request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("leaderboard response was not a valid player list: {0}")]
    Decode(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_player_rank_entry() {
        let body = r#"[{"user_name":"alice","finished_runs":42},{"user_name":"bob","finished_runs":10}]"#;
        let players: Vec<PlayerRankEntry> = serde_json::from_str(body).unwrap();

        assert_eq!(
            players,
            vec![
                PlayerRankEntry {
                    user_name: "alice".to_string(),
                    finished_runs: 42,
                },
                PlayerRankEntry {
                    user_name: "bob".to_string(),
                    finished_runs: 10,
                },
            ]
        );
    }

    #[test]
    fn test_empty_array_deserializes() {
        let players: Vec<PlayerRankEntry> = serde_json::from_str("[]").unwrap();
        assert!(players.is_empty());
    }
}
