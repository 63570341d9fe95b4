//! Query engine - read-only lookups and rankings over the registry
//!
//! Every query resolves its subject entity first and reports
//! `TeamNotFound` / `PlayerNotFound` before computing anything. Ties in
//! the ranking queries break toward the lowest player id, except for
//! salary, which keeps the first maximum in roster order.

use crate::error::RegistryError;
use crate::Result;
use crate::registry::TeamRegistry;
use crate::types::{Player, PlayerId, Team, TeamId};
use rust_decimal::Decimal;
use std::cmp::Reverse;

impl TeamRegistry {
    /// Look up a team by id
    pub fn team(&self, team_id: TeamId) -> Result<&Team> {
        self.teams().get(&team_id).ok_or(RegistryError::TeamNotFound { team_id })
    }

    /// Look up a player by id
    pub fn player(&self, player_id: PlayerId) -> Result<&Player> {
        self.players()
            .get(&player_id)
            .ok_or(RegistryError::PlayerNotFound { player_id: Some(player_id) })
    }

    /// Get the id of a team's current captain
    pub fn captain_of(&self, team_id: TeamId) -> Result<PlayerId> {
        let team = self.team(team_id)?;
        team.captain.ok_or(RegistryError::CaptainNotSet { team_id })
    }

    /// Get a player's name
    pub fn player_name(&self, player_id: PlayerId) -> Result<&str> {
        Ok(self.player(player_id)?.name.as_str())
    }

    /// Get a team's name
    pub fn team_name(&self, team_id: TeamId) -> Result<&str> {
        Ok(self.team(team_id)?.name.as_str())
    }

    /// Get the ids of every player on a team, ascending
    pub fn players_of_team(&self, team_id: TeamId) -> Result<Vec<PlayerId>> {
        let mut ids = self.team(team_id)?.roster.clone();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Get the most skilled player on a team; ties go to the lowest id
    pub fn best_player_of_team(&self, team_id: TeamId) -> Result<PlayerId> {
        self.rank_roster(team_id, |p| (Reverse(p.skill_level), p.id))
    }

    /// Get the oldest player on a team; ties go to the lowest id
    pub fn oldest_player_of_team(&self, team_id: TeamId) -> Result<PlayerId> {
        self.rank_roster(team_id, |p| (p.birth_date, p.id))
    }

    /// Get the ids of every registered team, ascending
    pub fn all_team_ids(&self) -> Vec<TeamId> {
        let mut ids: Vec<TeamId> = self.teams().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Get the best-paid player on a team.
    ///
    /// On equal salaries the first maximum in roster (registration) order
    /// wins; the strict `>` scan keeps the earlier entry.
    pub fn highest_paid_player_of_team(
        &self,
        team_id: TeamId,
    ) -> Result<PlayerId> {
        let team = self.team(team_id)?;

        let mut best: Option<&Player> = None;
        for player in self.roster_players(team) {
            match best {
                Some(current) if player.salary > current.salary => best = Some(player),
                Some(_) => {}
                None => best = Some(player),
            }
        }

        best.map(|p| p.id).ok_or(RegistryError::PlayerNotFound { player_id: None })
    }

    /// Get a player's salary
    pub fn salary_of(&self, player_id: PlayerId) -> Result<Decimal> {
        Ok(self.player(player_id)?.salary)
    }

    /// Get the `n` most skilled players registry-wide, descending by
    /// skill then ascending by id. Asking for more players than exist
    /// returns everyone.
    pub fn top_players(&self, n: usize) -> Vec<PlayerId> {
        let mut players: Vec<&Player> = self.players().values().collect();
        players.sort_unstable_by_key(|p| (Reverse(p.skill_level), p.id));
        players.truncate(n);
        players.into_iter().map(|p| p.id).collect()
    }

    /// Get the kit color the away team should wear against the given
    /// home team: their secondary when the primaries clash
    /// (case-insensitively), their primary otherwise.
    pub fn away_kit_color(
        &self,
        home_team_id: TeamId,
        away_team_id: TeamId,
    ) -> Result<String> {
        let home = self.team(home_team_id)?;
        let away = self.team(away_team_id)?;

        if home.primary_kit_color.to_lowercase() == away.primary_kit_color.to_lowercase() {
            Ok(away.secondary_kit_color.clone())
        } else {
            Ok(away.primary_kit_color.clone())
        }
    }

    /// Pick the roster member minimizing `key`; `PlayerNotFound` on an
    /// empty roster.
    fn rank_roster<K: Ord>(
        &self,
        team_id: TeamId,
        key: impl Fn(&Player) -> K,
    ) -> Result<PlayerId> {
        let team = self.team(team_id)?;

        self.roster_players(team)
            .min_by_key(|&p| key(p))
            .map(|p| p.id)
            .ok_or(RegistryError::PlayerNotFound { player_id: None })
    }

    /// Resolve a team's roster ids to player records, roster order.
    fn roster_players<'a>(&'a self, team: &'a Team) -> impl Iterator<Item = &'a Player> {
        team.roster.iter().filter_map(|id| self.players().get(id))
    }
}
