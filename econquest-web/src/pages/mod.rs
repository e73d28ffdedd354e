pub mod leaderboard;
pub mod ministries;
pub mod players;
