//! Row identifier types for the four tables.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(
    /// Primary key of a `state` row.
    StateId
);
row_id!(
    /// Primary key of a `color` row.
    ColorId
);
row_id!(
    /// Primary key of a `team` row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acc_bball::TeamId;
    ///
    /// let team_id = TeamId::new(3);
    /// assert_eq!(team_id.as_i64(), 3);
    /// assert_eq!(team_id.to_string(), "3");
    /// ```
    TeamId
);
row_id!(
    /// Primary key of a `player` row.
    PlayerId
);
