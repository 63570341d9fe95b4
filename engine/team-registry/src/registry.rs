//! Registry store - owns the team and player collections
//!
//! Registrations validate against current state before touching either
//! collection, so a failed call leaves the store exactly as it was.

use crate::error::RegistryError;
use crate::Result;
use crate::types::{Player, PlayerId, Team, TeamId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::info;

/// In-memory store of every registered team and player.
///
/// Entities are keyed by caller-supplied id; cross-references between
/// them are plain ids resolved through this store. Roster order on each
/// team is registration order.
pub struct TeamRegistry {
    /// Map from team id to Team
    teams: HashMap<TeamId, Team>,

    /// Map from player id to Player
    players: HashMap<PlayerId, Player>,
}

impl TeamRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { teams: HashMap::new(), players: HashMap::new() }
    }

    /// Register a new team with an empty roster and no captain.
    ///
    /// The id is optional because callers may forward it from an outer
    /// boundary where it can be absent; `None` is rejected before any
    /// other check.
    pub fn register_team(
        &mut self,
        id: Option<TeamId>,
        name: String,
        creation_date: NaiveDate,
        primary_kit_color: String,
        secondary_kit_color: String,
    ) -> Result<()> {
        let id = id.ok_or(RegistryError::MissingIdentifier)?;

        if self.teams.contains_key(&id) {
            return Err(RegistryError::DuplicateIdentifier { id });
        }

        let team = Team::new(id, name, creation_date, primary_kit_color, secondary_kit_color);
        info!(team_id = id, name = %team.name, "registered team");
        self.teams.insert(id, team);

        Ok(())
    }

    /// Register a new player into an existing team.
    ///
    /// All checks run before either collection is mutated; on success the
    /// player lands in the global player map and on the team's roster in
    /// one step.
    pub fn register_player(
        &mut self,
        id: PlayerId,
        team_id: TeamId,
        name: String,
        birth_date: NaiveDate,
        skill_level: u8,
        salary: Decimal,
    ) -> Result<()> {
        if self.players.contains_key(&id) {
            return Err(RegistryError::DuplicateIdentifier { id });
        }

        let team = self
            .teams
            .get_mut(&team_id)
            .ok_or(RegistryError::TeamNotFound { team_id })?;

        if skill_level > 100 {
            return Err(RegistryError::InvalidSkillLevel { value: skill_level });
        }

        let player = Player::new(id, team_id, name, birth_date, skill_level, salary);
        info!(player_id = id, team_id, name = %player.name, "registered player");

        team.roster.push(id);
        self.players.insert(id, player);

        Ok(())
    }

    /// Make a player the captain of their own team, replacing any
    /// previous captain. Any roster member qualifies.
    pub fn assign_captain(&mut self, player_id: PlayerId) -> Result<()> {
        let team_id = self
            .players
            .get(&player_id)
            .ok_or(RegistryError::PlayerNotFound { player_id: Some(player_id) })?
            .team_id;

        // The player's team always exists while teams cannot be deleted;
        // resolved fallibly anyway rather than indexing.
        let team = self
            .teams
            .get_mut(&team_id)
            .ok_or(RegistryError::TeamNotFound { team_id })?;

        info!(player_id, team_id, "assigned captain");
        team.captain = Some(player_id);

        Ok(())
    }

    /// Get team count
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Get player count
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.players.is_empty()
    }

    pub(crate) fn teams(&self) -> &HashMap<TeamId, Team> {
        &self.teams
    }

    pub(crate) fn players(&self) -> &HashMap<PlayerId, Player> {
        &self.players
    }
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn registry_with_team(id: TeamId) -> TeamRegistry {
        let mut registry = TeamRegistry::new();
        registry
            .register_team(
                Some(id),
                format!("Team {id}"),
                date(2020, 1, 1),
                "red".to_string(),
                "white".to_string(),
            )
            .unwrap();
        registry
    }

    #[test]
    fn test_register_team() {
        let registry = registry_with_team(1);

        assert_eq!(registry.team_count(), 1);
        let team = registry.team(1).unwrap();
        assert_eq!(team.name, "Team 1");
        assert!(team.captain.is_none());
        assert!(team.roster.is_empty());
    }

    #[test]
    fn test_register_team_missing_id() {
        let mut registry = TeamRegistry::new();
        let err = registry
            .register_team(
                None,
                "Nameless".to_string(),
                date(2020, 1, 1),
                "red".to_string(),
                "white".to_string(),
            )
            .unwrap_err();

        assert_eq!(err, RegistryError::MissingIdentifier);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_team_duplicate_id() {
        let mut registry = registry_with_team(1);
        let err = registry
            .register_team(
                Some(1),
                "Again".to_string(),
                date(2021, 6, 1),
                "blue".to_string(),
                "black".to_string(),
            )
            .unwrap_err();

        assert_eq!(err, RegistryError::DuplicateIdentifier { id: 1 });
        // The original registration is untouched.
        assert_eq!(registry.team(1).unwrap().name, "Team 1");
    }

    #[test]
    fn test_register_player() {
        let mut registry = registry_with_team(1);
        registry
            .register_player(
                10,
                1,
                "X".to_string(),
                date(1990, 1, 1),
                80,
                dec!(1000),
            )
            .unwrap();

        assert_eq!(registry.player_count(), 1);
        let player = registry.player(10).unwrap();
        assert_eq!(player.team_id, 1);
        assert_eq!(player.skill_level, 80);
        assert_eq!(registry.team(1).unwrap().roster, vec![10]);
    }

    #[test]
    fn test_register_player_duplicate_id() {
        let mut registry = registry_with_team(1);
        registry
            .register_player(10, 1, "X".to_string(), date(1990, 1, 1), 80, dec!(1000))
            .unwrap();

        let err = registry
            .register_player(10, 1, "Y".to_string(), date(1992, 3, 4), 50, dec!(500))
            .unwrap_err();

        assert_eq!(err, RegistryError::DuplicateIdentifier { id: 10 });
        assert_eq!(registry.player_count(), 1);
        assert_eq!(registry.team(1).unwrap().roster.len(), 1);
    }

    #[test]
    fn test_register_player_unknown_team_leaves_no_trace() {
        let mut registry = registry_with_team(1);
        let err = registry
            .register_player(10, 99, "X".to_string(), date(1990, 1, 1), 80, dec!(1000))
            .unwrap_err();

        assert_eq!(err, RegistryError::TeamNotFound { team_id: 99 });
        assert_eq!(registry.player_count(), 0);
        assert!(registry.team(1).unwrap().roster.is_empty());
    }

    #[test]
    fn test_skill_level_bounds_inclusive() {
        let mut registry = registry_with_team(1);

        registry
            .register_player(10, 1, "Min".to_string(), date(1990, 1, 1), 0, dec!(100))
            .unwrap();
        registry
            .register_player(11, 1, "Max".to_string(), date(1991, 1, 1), 100, dec!(100))
            .unwrap();

        let err = registry
            .register_player(12, 1, "Over".to_string(), date(1992, 1, 1), 101, dec!(100))
            .unwrap_err();
        assert_eq!(err, RegistryError::InvalidSkillLevel { value: 101 });
        assert_eq!(registry.player_count(), 2);
    }

    #[test]
    fn test_assign_captain() {
        let mut registry = registry_with_team(1);
        registry
            .register_player(10, 1, "X".to_string(), date(1990, 1, 1), 80, dec!(1000))
            .unwrap();
        registry
            .register_player(11, 1, "Y".to_string(), date(1991, 1, 1), 70, dec!(900))
            .unwrap();

        registry.assign_captain(10).unwrap();
        assert_eq!(registry.captain_of(1).unwrap(), 10);

        // Reassignment overwrites the previous captain.
        registry.assign_captain(11).unwrap();
        assert_eq!(registry.captain_of(1).unwrap(), 11);
    }

    #[test]
    fn test_assign_captain_unknown_player() {
        let mut registry = registry_with_team(1);
        let err = registry.assign_captain(42).unwrap_err();
        assert_eq!(err, RegistryError::PlayerNotFound { player_id: Some(42) });
    }
}
