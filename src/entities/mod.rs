// Entity Models
// "Identity persists, values change"
//
// - Bartender: stable identity (UUID) + mutable name
// - BartenderRegistry: append-only record of every bartender hired

pub mod bartender;
pub mod registry;

pub use bartender::{Bartender, BartenderRecord};
pub use registry::BartenderRegistry;
