//! Full Stack Types - Pure data types shared by the demo services
//!
//! Only serde-serializable data lives here; no runtime or driver dependencies.

pub mod api;
pub mod stats;
pub mod user;

pub use api::*;
pub use stats::*;
pub use user::*;
