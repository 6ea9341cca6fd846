//! Shared fixture: a temporary store with a known ACC data set.
//!
//! Teams worth remembering:
//! - Duke (NC, DarkBlue, 11 wins) has exactly two players
//! - UNC (NC, LightBlue) has exactly 10 wins
//! - NCSU is the only Red team
//! - Nomads have no state, Drifters have no color
//! - Lone Wolf plays for no team

#![allow(dead_code)]

use acc_bball::{
    storage::{create_tables, Color, Player, State, Team},
    ColorId, DatabaseConfig, PlayerId, StateId, TeamId,
};
use rusqlite::{params, Connection};
use tempfile::TempDir;

pub struct Fixture {
    // Keeps the directory alive for the duration of the test.
    _dir: TempDir,
    pub config: DatabaseConfig,
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
}

fn state(id: i64, name: &str) -> State {
    State {
        state_id: StateId::new(id),
        name: name.to_string(),
    }
}

fn color(id: i64, name: &str) -> Color {
    Color {
        color_id: ColorId::new(id),
        name: name.to_string(),
    }
}

fn team(id: i64, name: &str, state: Option<i64>, color: Option<i64>, wins: i64, losses: i64) -> Team {
    Team {
        team_id: TeamId::new(id),
        name: name.to_string(),
        state_id: state.map(StateId::new),
        color_id: color.map(ColorId::new),
        wins,
        losses,
    }
}

#[allow(clippy::too_many_arguments)]
fn player(
    id: i64,
    team: Option<i64>,
    uniform_num: i64,
    first_name: &str,
    last_name: &str,
    whole: [i64; 4],
    spg: f64,
    bpg: f64,
) -> Player {
    let [mpg, ppg, rpg, apg] = whole;
    Player {
        player_id: PlayerId::new(id),
        team_id: team.map(TeamId::new),
        uniform_num: Some(uniform_num),
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        mpg: Some(mpg),
        ppg: Some(ppg),
        rpg: Some(rpg),
        apg: Some(apg),
        spg: Some(spg),
        bpg: Some(bpg),
    }
}

pub fn states() -> Vec<State> {
    vec![state(1, "NC"), state(2, "VA"), state(3, "MA"), state(4, "FL")]
}

pub fn colors() -> Vec<Color> {
    vec![
        color(1, "DarkBlue"),
        color(2, "Red"),
        color(3, "Orange"),
        color(4, "Maroon"),
        color(5, "LightBlue"),
    ]
}

pub fn teams() -> Vec<Team> {
    vec![
        team(1, "Duke", Some(1), Some(1), 11, 3),
        team(2, "UNC", Some(1), Some(5), 10, 4),
        team(3, "NCSU", Some(1), Some(2), 8, 6),
        team(4, "Virginia", Some(2), Some(3), 13, 1),
        team(5, "BostonCollege", Some(3), Some(4), 4, 10),
        team(6, "Miami", Some(4), Some(3), 12, 2),
        team(7, "Nomads", None, Some(1), 9, 5),
        team(8, "Drifters", Some(1), None, 7, 7),
    ]
}

pub fn players() -> Vec<Player> {
    vec![
        player(1, Some(1), 1, "Zion", "Williamson", [30, 22, 9, 2], 2.1, 1.8),
        player(2, Some(1), 2, "RJ", "Barrett", [35, 23, 7, 4], 1.0, 0.4),
        player(3, Some(2), 2, "Coby", "White", [29, 16, 4, 4], 0.9, 0.3),
        player(4, Some(2), 13, "Cameron", "Johnson", [33, 17, 6, 2], 1.2, 0.4),
        player(5, Some(3), 11, "Markell", "Johnson", [31, 12, 3, 7], 1.5, 0.1),
        player(6, Some(4), 12, "DeAndre", "Hunter", [32, 15, 5, 2], 0.6, 0.6),
        player(7, Some(4), 5, "Kyle", "Guy", [34, 15, 4, 2], 0.7, 0.1),
        player(8, Some(6), 2, "Chris", "Lykes", [33, 16, 3, 3], 1.1, 0.0),
        player(9, Some(5), 3, "Ky", "Bowman", [37, 19, 7, 4], 1.5, 0.2),
        player(10, Some(7), 7, "Drew", "Nomad", [20, 5, 2, 1], 0.3, 0.0),
        player(11, Some(8), 8, "Sam", "Drifter", [22, 6, 3, 1], 0.4, 0.5),
        player(12, None, 9, "Lone", "Wolf", [10, 3, 1, 0], 0.2, 0.1),
    ]
}

fn insert_all(conn: &Connection, teams: &[Team], players: &[Player]) -> rusqlite::Result<()> {
    for s in states() {
        conn.execute(
            "INSERT INTO state (state_id, name) VALUES (?, ?)",
            params![s.state_id.as_i64(), s.name],
        )?;
    }
    for c in colors() {
        conn.execute(
            "INSERT INTO color (color_id, name) VALUES (?, ?)",
            params![c.color_id.as_i64(), c.name],
        )?;
    }
    for t in teams {
        conn.execute(
            "INSERT INTO team (team_id, name, state_id, color_id, wins, losses)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                t.team_id.as_i64(),
                t.name,
                t.state_id.map(|id| id.as_i64()),
                t.color_id.map(|id| id.as_i64()),
                t.wins,
                t.losses
            ],
        )?;
    }
    for p in players {
        conn.execute(
            "INSERT INTO player (player_id, team_id, uniform_num, first_name, last_name,
                                 mpg, ppg, rpg, apg, spg, bpg)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                p.player_id.as_i64(),
                p.team_id.map(|id| id.as_i64()),
                p.uniform_num,
                p.first_name,
                p.last_name,
                p.mpg,
                p.ppg,
                p.rpg,
                p.apg,
                p.spg,
                p.bpg
            ],
        )?;
    }
    Ok(())
}

/// Provision a populated store in a fresh temporary directory.
pub fn populated_store() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("acc_bball.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute("PRAGMA foreign_keys = ON", []).unwrap();
    create_tables(&conn).unwrap();

    let teams = teams();
    let players = players();
    insert_all(&conn, &teams, &players).unwrap();
    conn.close().unwrap();

    Fixture {
        _dir: dir,
        config: DatabaseConfig::new(path),
        players,
        teams,
    }
}

/// Provision a store with the tables but no rows.
pub fn empty_store() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.db");

    let conn = Connection::open(&path).unwrap();
    create_tables(&conn).unwrap();
    conn.close().unwrap();

    Fixture {
        _dir: dir,
        config: DatabaseConfig::new(path),
        players: Vec::new(),
        teams: Vec::new(),
    }
}

/// Provision a store whose data columns are all nullable, with a few
/// NULL cells: Duke's second player has no last name and no uniform number.
pub fn nullable_store() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nullable.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE state (state_id INTEGER PRIMARY KEY, name TEXT);
         CREATE TABLE color (color_id INTEGER PRIMARY KEY, name TEXT);
         CREATE TABLE team (team_id INTEGER PRIMARY KEY, name TEXT, state_id INTEGER,
                            color_id INTEGER, wins INTEGER, losses INTEGER);
         CREATE TABLE player (player_id INTEGER PRIMARY KEY, team_id INTEGER,
                              uniform_num INTEGER, first_name TEXT, last_name TEXT,
                              mpg INTEGER, ppg INTEGER, rpg INTEGER, apg INTEGER,
                              spg REAL, bpg REAL);
         INSERT INTO state VALUES (1, 'NC');
         INSERT INTO color VALUES (1, 'DarkBlue');
         INSERT INTO team VALUES (1, 'Duke', 1, 1, 11, 3);
         INSERT INTO player VALUES
            (1, 1, 1, 'Zion', 'Williamson', 30, 22, 9, 2, 2.1, 1.8),
            (2, 1, NULL, 'RJ', NULL, 35, 23, 7, 4, NULL, 0.4);",
    )
    .unwrap();
    conn.close().unwrap();

    Fixture {
        _dir: dir,
        config: DatabaseConfig::new(path),
        players: Vec::new(),
        teams: Vec::new(),
    }
}

/// Team lookup by id within the fixture data.
pub fn team_of<'a>(fixture: &'a Fixture, player: &Player) -> Option<&'a Team> {
    player
        .team_id
        .and_then(|id| fixture.teams.iter().find(|t| t.team_id == id))
}
