pub mod leaderboard;
pub mod percentile;
pub mod variables;
