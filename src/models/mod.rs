pub mod challenge;
pub mod config;
pub mod daily;
pub mod difficulty;
pub mod guide;
pub mod progress;
pub mod seed;
pub mod store;

pub use challenge::{find_challenge, Challenge};
pub use daily::daily_challenges;
pub use guide::{filter_guide, CategoryFilter, GuideCategory};
pub use progress::Progress;
pub use store::User;
