//! Entity records held by the registry
//!
//! Teams and players reference each other by id only; the registry owns
//! the canonical storage and resolves references at query time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type TeamId = u64;
pub type PlayerId = u64;

/// A registered player. Immutable after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique caller-supplied identifier
    pub id: PlayerId,

    /// Team the player was registered into
    pub team_id: TeamId,

    pub name: String,

    pub birth_date: NaiveDate,

    /// Skill rating in [0, 100]
    pub skill_level: u8,

    /// Salary; negative values are not rejected
    pub salary: Decimal,
}

impl Player {
    pub fn new(
        id: PlayerId,
        team_id: TeamId,
        name: String,
        birth_date: NaiveDate,
        skill_level: u8,
        salary: Decimal,
    ) -> Self {
        Self { id, team_id, name, birth_date, skill_level, salary }
    }
}

/// A registered team. Only `captain` changes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique caller-supplied identifier
    pub id: TeamId,

    pub name: String,

    pub creation_date: NaiveDate,

    pub primary_kit_color: String,

    pub secondary_kit_color: String,

    /// Current captain, always one of `roster`; unset until assigned
    pub captain: Option<PlayerId>,

    /// Member player ids in registration order
    pub roster: Vec<PlayerId>,
}

impl Team {
    pub fn new(
        id: TeamId,
        name: String,
        creation_date: NaiveDate,
        primary_kit_color: String,
        secondary_kit_color: String,
    ) -> Self {
        Self {
            id,
            name,
            creation_date,
            primary_kit_color,
            secondary_kit_color,
            captain: None,
            roster: Vec::new(),
        }
    }
}
