// Bartender - Core Library
// Exposes the entity models for use in the demo binary and tests

pub mod entities;

// Re-export commonly used types
pub use entities::{Bartender, BartenderRecord, BartenderRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
