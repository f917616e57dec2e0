pub mod chat;
pub mod dashboard;
pub mod energy;
pub mod landing;
pub mod leaderboard;
pub mod waste;
