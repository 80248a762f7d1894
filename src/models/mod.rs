pub mod leaderboard;

pub use leaderboard::{LeaderboardError, PlayerRankEntry};
