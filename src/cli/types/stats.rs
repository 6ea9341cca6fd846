//! Per-game statistics and the range filters applied to them.

use crate::error::{BballError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six per-game statistics stored on a player.
///
/// Minutes, points, rebounds and assists are whole numbers; steals and
/// blocks are fractional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Minutes per game
    Mpg,
    /// Points per game
    Ppg,
    /// Rebounds per game
    Rpg,
    /// Assists per game
    Apg,
    /// Steals per game
    Spg,
    /// Blocks per game
    Bpg,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Mpg,
        Stat::Ppg,
        Stat::Rpg,
        Stat::Apg,
        Stat::Spg,
        Stat::Bpg,
    ];

    /// Column name in the `player` table.
    pub fn column(&self) -> &'static str {
        match self {
            Stat::Mpg => "mpg",
            Stat::Ppg => "ppg",
            Stat::Rpg => "rpg",
            Stat::Apg => "apg",
            Stat::Spg => "spg",
            Stat::Bpg => "bpg",
        }
    }

    pub fn is_fractional(&self) -> bool {
        matches!(self, Stat::Spg | Stat::Bpg)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column().to_uppercase())
    }
}

impl FromStr for Stat {
    type Err = BballError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Stat::ALL
            .into_iter()
            .find(|stat| stat.column() == wanted)
            .ok_or_else(|| BballError::UnknownStat {
                name: s.to_string(),
            })
    }
}

/// Closed interval `[min, max]` on a single statistic.
///
/// A filter whose `min` exceeds its `max` is legal and simply matches no
/// player.
///
/// # Examples
///
/// ```rust
/// use acc_bball::{Stat, StatFilter};
///
/// let filter: StatFilter = "ppg=15..20".parse().unwrap();
/// assert_eq!(filter, StatFilter::new(Stat::Ppg, 15.0, 20.0));
/// assert!(filter.contains(20.0));
/// assert!(!filter.contains(20.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatFilter {
    pub stat: Stat,
    pub min: f64,
    pub max: f64,
}

impl StatFilter {
    pub fn new(stat: Stat, min: f64, max: f64) -> Self {
        Self { stat, min, max }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for StatFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}..{}", self.stat.column(), self.min, self.max)
    }
}

impl FromStr for StatFilter {
    type Err = BballError;

    /// Parses `stat=MIN..MAX`, e.g. `mpg=35..40` or `spg=1.5..3.0`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| BballError::InvalidStatFilter {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (name, range) = s
            .split_once('=')
            .ok_or_else(|| invalid("expected stat=MIN..MAX"))?;
        let stat: Stat = name.parse()?;
        let (min, max) = range
            .split_once("..")
            .ok_or_else(|| invalid("expected a MIN..MAX range"))?;

        let parse_bound = |text: &str, which: &str| -> Result<f64> {
            let value: f64 = text
                .trim()
                .parse()
                .map_err(|_| invalid(&format!("{} bound '{}' is not a number", which, text.trim())))?;
            if !value.is_finite() {
                return Err(invalid(&format!("{} bound must be finite", which)));
            }
            if !stat.is_fractional() && value.fract() != 0.0 {
                return Err(invalid(&format!(
                    "{} bounds must be whole numbers",
                    stat.column()
                )));
            }
            Ok(value)
        };

        Ok(Self::new(
            stat,
            parse_bound(min, "minimum")?,
            parse_bound(max, "maximum")?,
        ))
    }
}

/// Ordered list of range filters for the player listing.
///
/// Every filter must hold for a player to be listed; an empty list lists
/// every player. The same statistic may appear more than once, in which case
/// each interval applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerFilters {
    filters: Vec<StatFilter>,
}

impl PlayerFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a range on `stat`.
    pub fn with(mut self, stat: Stat, min: f64, max: f64) -> Self {
        self.filters.push(StatFilter::new(stat, min, max));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatFilter> {
        self.filters.iter()
    }
}

impl From<Vec<StatFilter>> for PlayerFilters {
    fn from(filters: Vec<StatFilter>) -> Self {
        Self { filters }
    }
}

impl fmt::Display for PlayerFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.filters.is_empty() {
            return write!(f, "no filters");
        }
        let parts: Vec<String> = self.filters.iter().map(|filter| filter.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}
