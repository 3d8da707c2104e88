//! TeamForge - Hackathon team matchmaking rules in Rust
//!
//! Check teams against organizer-defined size and school-balance rules,
//! and find the teams a participant may join.
//!
//! # Example
//!
//! ```rust
//! use teamforge::prelude::*;
//!
//! let settings = MatchmakingSettings::active(2, 4)
//!     .with_constraint(SchoolConstraint::single(Rule::Max, "EPITA", 1));
//!
//! let team = Team::new("t1", "Team Alpha", "subject")
//!     .with_member(Member::new("u1", "Alice", "Dupont", "EPITA", UserRole::Participant));
//!
//! let violations = check_team_constraints(&team, &settings);
//! assert_eq!(violations[0], TeamConstraintViolation::TeamSizeMin { count: 1 });
//!
//! let user = UserSummary::new("u2", "Bob", "Martin", UserRole::Participant).with_school("EPITA");
//! let teams = [team];
//! assert!(eligible_teams_for_user(&teams, &user, &settings).is_empty());
//! ```

// Domain types
pub use teamforge_core::{
    Member, MatchmakingSettings, Rule, SchoolConstraint, Team, TeamConstraintViolation,
    TeamForgeError, TeamStatus, UserRole, UserSummary, ViolationKind,
};

// Evaluation
pub use teamforge_scoring::{
    check_all_teams, check_role_presence, check_school_constraint, check_team_constraints,
    check_team_size, eligible_teams_for_user, filter_teams, is_team_eligible, violations_by_team,
    ComplianceFilter, MemberPresence, TeamFilter, TeamViolations,
};

// Configuration loading
#[cfg(feature = "config")]
pub use teamforge_config::{ConfigError, ConfigurationKey, ConfigurationRecord, MatchmakingConfig};

pub mod prelude {
    pub use super::{
        check_team_constraints, eligible_teams_for_user, filter_teams, MatchmakingSettings,
        Member, Rule, SchoolConstraint, Team, TeamConstraintViolation, TeamFilter, UserRole,
        UserSummary,
    };
    #[cfg(feature = "config")]
    pub use super::MatchmakingConfig;
}
