//! Type-safe wrappers for row identifiers and statistic filters.

pub mod ids;
pub mod stats;

pub use ids::{ColorId, PlayerId, StateId, TeamId};
pub use stats::{PlayerFilters, Stat, StatFilter};
