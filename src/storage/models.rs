//! Data models for the storage layer

use crate::cli::types::{ColorId, PlayerId, StateId, TeamId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row of the `state` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub state_id: StateId,
    pub name: String,
}

/// A row of the `color` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub color_id: ColorId,
    pub name: String,
}

/// A row of the `team` table
///
/// Both references are nullable; deleting the referenced state or color
/// clears them instead of removing the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
    pub state_id: Option<StateId>,
    pub color_id: Option<ColorId>,
    pub wins: i64,
    pub losses: i64,
}

/// A row of the `player` table with its six per-game statistics
///
/// Only `player_id` is guaranteed. Stores provisioned without `NOT NULL`
/// constraints may leave any other cell empty, which renders as `NULL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub team_id: Option<TeamId>,
    pub uniform_num: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mpg: Option<i64>,
    pub ppg: Option<i64>,
    pub rpg: Option<i64>,
    pub apg: Option<i64>,
    pub spg: Option<f64>,
    pub bpg: Option<f64>,
}

/// Team name projection (teams by uniform color)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamName {
    pub name: Option<String>,
}

/// Player name projection (team roster)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Uniform number and name (players by state and color)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniformPlayer {
    pub uniform_num: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Player together with their team's name and win count
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WinningPlayer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team_name: Option<String>,
    pub wins: Option<i64>,
}

/// Text cell for a nullable column; forwards width and precision.
struct Cell<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Cell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("NULL"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {:.1} {:.1}",
            self.player_id,
            Cell(&self.team_id),
            Cell(&self.uniform_num),
            Cell(&self.first_name),
            Cell(&self.last_name),
            Cell(&self.mpg),
            Cell(&self.ppg),
            Cell(&self.rpg),
            Cell(&self.apg),
            Cell(&self.spg),
            Cell(&self.bpg)
        )
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Cell(&self.name))
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", Cell(&self.first_name), Cell(&self.last_name))
    }
}

impl fmt::Display for UniformPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            Cell(&self.uniform_num),
            Cell(&self.first_name),
            Cell(&self.last_name)
        )
    }
}

impl fmt::Display for WinningPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            Cell(&self.first_name),
            Cell(&self.last_name),
            Cell(&self.team_name),
            Cell(&self.wins)
        )
    }
}
