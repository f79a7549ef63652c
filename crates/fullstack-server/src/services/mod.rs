//! Business logic services

pub mod stats;
pub mod users;

pub use stats::StatsAggregator;
pub use users::UserService;
