//! HTTP handlers

pub mod health;
pub mod info;
pub mod stats;
pub mod users;

pub use health::health;
pub use info::index;

use chrono::{SecondsFormat, Utc};

/// Current instant as an ISO-8601 string with millisecond precision
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
