//! Full Stack Core Library
//!
//! Error type, storage ports and environment configuration shared by the
//! demo services.

// Re-export pure types from fullstack-types
pub use fullstack_types::*;

pub mod config;
pub mod error;
pub mod keys;
pub mod ports;

pub use self::config::{ApiSettings, HelloSettings};
pub use error::{FullstackError, Result};
