//! Team Registry - In-memory store of teams and players
//!
//! This crate provides the TeamRegistry, which holds every registered team
//! and player, validates registrations, and answers a fixed set of
//! read-only ranking and lookup queries.

pub mod error;
pub mod queries;
pub mod registry;
pub mod types;

pub use error::RegistryError;
pub use registry::TeamRegistry;
pub use types::{Player, PlayerId, Team, TeamId};

// Result type alias
pub type Result<T> = std::result::Result<T, RegistryError>;
