//! Configuration module for pocket-ledger
//!
//! - Data and settings path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
