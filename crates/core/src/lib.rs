//! Core types for the chromactl maintenance CLI
//!
//! This crate provides the foundational abstractions shared across the
//! chromactl workspace:
//!
//! - **Configuration**: store connection and inspection settings
//! - **Error handling**: unified error types and the failure taxonomy
//!   (connection / not-found / store) applied at the client boundary
//!

pub mod config;
pub mod error;

// Re-export main types for convenience
pub use config::{Config, InspectConfig, StoreConfig};
pub use error::{Error, Result, ResultExt};

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
