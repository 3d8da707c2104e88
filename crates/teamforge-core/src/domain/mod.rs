//! Domain model for hackathon teams
//!
//! A [`Team`] groups participants (`members`) with the staff assigned to
//! it (`juries` and `mentors`). A [`UserSummary`] describes a user looking
//! for a team and can be turned into a synthetic [`Member`] to simulate
//! joining one.

mod team;
mod user;

#[cfg(test)]
mod tests;

pub use team::{Member, Team, TeamStatus};
pub use user::{UserRole, UserSummary};
