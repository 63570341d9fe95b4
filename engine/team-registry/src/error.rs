//! Error types for TeamRegistry

use crate::types::{PlayerId, TeamId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Identifier is required")]
    MissingIdentifier,

    #[error("Identifier already registered: {id}")]
    DuplicateIdentifier { id: u64 },

    #[error("Team not found: {team_id}")]
    TeamNotFound { team_id: TeamId },

    /// Unknown player id; `None` when a ranking query ran against an
    /// empty roster and there is no id to report.
    #[error("Player not found{}", .player_id.map(|id| format!(": {id}")).unwrap_or_default())]
    PlayerNotFound { player_id: Option<PlayerId> },

    #[error("No captain assigned for team {team_id}")]
    CaptainNotSet { team_id: TeamId },

    #[error("Skill level out of range [0, 100]: {value}")]
    InvalidSkillLevel { value: u8 },
}
