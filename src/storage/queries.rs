//! Read-only report queries against the four tables

use super::{models::*, schema::BballDatabase};
use crate::cli::types::{PlayerFilters, PlayerId, TeamId};
use crate::Result;
use rusqlite::{params, params_from_iter, Row};
use tracing::debug;

const PLAYER_COLUMNS: &str = "player_id, team_id, uniform_num, first_name, last_name,
        mpg, ppg, rpg, apg, spg, bpg";

/// Build the player listing SQL and its bound values.
///
/// Each filter becomes `(col >= ? AND col <= ?)`, joined with `AND`; no
/// filters means no `WHERE` clause at all.
pub fn build_player_range_query(filters: &PlayerFilters) -> (String, Vec<f64>) {
    let mut sql = format!("SELECT {} FROM player", PLAYER_COLUMNS);
    let mut values = Vec::with_capacity(filters.len() * 2);

    let conditions: Vec<String> = filters
        .iter()
        .map(|filter| {
            values.push(filter.min);
            values.push(filter.max);
            let column = filter.stat.column();
            format!("({column} >= ? AND {column} <= ?)")
        })
        .collect();

    if !filters.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY player_id");

    (sql, values)
}

impl BballDatabase {
    /// Players whose enabled statistics all fall inside their ranges
    pub fn players_in_ranges(&self, filters: &PlayerFilters) -> Result<Vec<Player>> {
        let (sql, values) = build_player_range_query(filters);
        debug!(sql = %sql, bound = values.len(), "executing player range query");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values.iter()), |row| {
            self.row_to_player(row)
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Names of teams whose uniform color is exactly `color`
    pub fn teams_with_color(&self, color: &str) -> Result<Vec<TeamName>> {
        let sql = "SELECT t.name
             FROM team t
             JOIN color c ON t.color_id = c.color_id
             WHERE c.name = ?";
        debug!(sql, bound = 1, "executing team color query");

        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![color], |row| {
            Ok(TeamName { name: row.get(0)? })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    /// Players on the team named `team`, highest points per game first
    pub fn roster_by_points(&self, team: &str) -> Result<Vec<PlayerName>> {
        let sql = "SELECT p.first_name, p.last_name
             FROM player p
             JOIN team t ON p.team_id = t.team_id
             WHERE t.name = ?
             ORDER BY p.ppg DESC";
        debug!(sql, bound = 1, "executing roster query");

        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![team], |row| {
            Ok(PlayerName {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Players whose team is in `state` and wears `color`
    pub fn players_in_state_with_color(
        &self,
        state: &str,
        color: &str,
    ) -> Result<Vec<UniformPlayer>> {
        let sql = "SELECT p.uniform_num, p.first_name, p.last_name
             FROM player p
             JOIN team t ON p.team_id = t.team_id
             JOIN state s ON t.state_id = s.state_id
             JOIN color c ON t.color_id = c.color_id
             WHERE s.name = ? AND c.name = ?";
        debug!(sql, bound = 2, "executing state and color query");

        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![state, color], |row| {
            Ok(UniformPlayer {
                uniform_num: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// One row per player whose team has strictly more than `wins` wins
    pub fn players_on_teams_with_wins_over(&self, wins: i64) -> Result<Vec<WinningPlayer>> {
        let sql = "SELECT p.first_name, p.last_name, t.name, t.wins
             FROM player p
             JOIN team t ON p.team_id = t.team_id
             WHERE t.wins > ?";
        debug!(sql, bound = 1, "executing winning teams query");

        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![wins], |row| {
            Ok(WinningPlayer {
                first_name: row.get(0)?,
                last_name: row.get(1)?,
                team_name: row.get(2)?,
                wins: row.get(3)?,
            })
        })?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Helper function to convert a `player` row to Player
    fn row_to_player(&self, row: &Row) -> rusqlite::Result<Player> {
        Ok(Player {
            player_id: PlayerId::new(row.get(0)?),
            team_id: row.get::<_, Option<i64>>(1)?.map(TeamId::new),
            uniform_num: row.get(2)?,
            first_name: row.get(3)?,
            last_name: row.get(4)?,
            mpg: row.get(5)?,
            ppg: row.get(6)?,
            rpg: row.get(7)?,
            apg: row.get(8)?,
            spg: row.get(9)?,
            bpg: row.get(10)?,
        })
    }
}
