//! Matchmaking constraint evaluation for TeamForge.
//!
//! This crate turns a team roster and a [`MatchmakingSettings`] value into
//! an ordered list of [`TeamConstraintViolation`]s, and answers the
//! participant question "which teams can I join":
//! - [`check_team_constraints`] evaluates one team
//! - [`check_all_teams`] evaluates a roster for organizer dashboards
//! - [`eligible_teams_for_user`] simulates a user joining each team
//! - [`filter_teams`] narrows a team listing for organizers
//!
//! # Architecture
//!
//! Every function is pure: inputs are borrowed, never mutated, and no
//! process-wide state is read. Callers may evaluate concurrently without
//! synchronization.
//!
//! [`MatchmakingSettings`]: teamforge_core::MatchmakingSettings
//! [`TeamConstraintViolation`]: teamforge_core::TeamConstraintViolation

pub mod aggregate;
pub mod checks;
pub mod eligibility;
pub mod filter;

#[cfg(test)]
mod aggregate_tests;
#[cfg(test)]
mod eligibility_tests;

pub use aggregate::{check_all_teams, check_team_constraints, violations_by_team, TeamViolations};
pub use checks::{check_role_presence, check_school_constraint, check_team_size};
pub use eligibility::{eligible_teams_for_user, is_team_eligible};
pub use filter::{filter_teams, ComplianceFilter, MemberPresence, TeamFilter};
