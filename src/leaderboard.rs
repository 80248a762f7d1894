use crate::constants::TOP10_PATH;
use crate::models::{LeaderboardError, PlayerRankEntry};
use std::fmt;
use tracing::debug;

/// HTTP client for the stats API leaderboard endpoint
#[derive(Clone, Debug)]
pub struct LeaderboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl LeaderboardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the top-10 players, ordered by descending rank.
    ///
    /// The response status is not inspected; a non-JSON error body
    /// surfaces as `LeaderboardError::Decode`.
    pub async fn fetch_top10(&self) -> Result<Vec<PlayerRankEntry>, LeaderboardError> {
        let url = format!("{}{}", self.base_url, TOP10_PATH);
        debug!("Fetching leaderboard from {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(LeaderboardError::Request)?;

        response
            .json::<Vec<PlayerRankEntry>>()
            .await
            .map_err(LeaderboardError::Decode)
    }
}

/// Rendered leaderboard: one row of three plain-text cells
/// (rank, user name, finished runs) per player
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LeaderboardTable {
    rows: Vec<[String; 3]>,
}

impl LeaderboardTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[[String; 3]] {
        &self.rows
    }

    /// Replace the table contents with one row per entry, in sequence
    /// order. Rank is the 1-based index. Clearing first keeps repeated
    /// refreshes from stacking duplicate rows.
    pub fn render(&mut self, players: &[PlayerRankEntry]) {
        self.rows.clear();
        for (index, player) in players.iter().enumerate() {
            self.rows.push([
                (index + 1).to_string(),
                player.user_name.clone(),
                player.finished_runs.to_string(),
            ]);
        }
    }

    /// Fetch the top-10 list and re-render the table from it.
    ///
    /// On error the table is left exactly as it was; the caller decides
    /// whether to log or surface the failure.
    pub async fn refresh(
        &mut self,
        client: &LeaderboardClient,
    ) -> Result<usize, LeaderboardError> {
        let players = client.fetch_top10().await?;
        self.render(&players);
        Ok(self.rows.len())
    }
}

impl fmt::Display for LeaderboardTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>4}  {:<24} {:>13}", "Rank", "Player", "Finished runs")?;
        for [rank, user_name, finished_runs] in &self.rows {
            writeln!(f, "{rank:>4}  {user_name:<24} {finished_runs:>13}")?;
        }
        Ok(())
    }
}
