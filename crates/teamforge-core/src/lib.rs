//! TeamForge Core - Domain types for hackathon team matchmaking
//!
//! This crate provides the vocabulary shared by every TeamForge crate:
//! - Team rosters and the users who join them
//! - Matchmaking settings and the school constraints they carry
//! - The closed set of violation kinds the engine can report
//!
//! Enable the `serde` feature to (de)serialize these types using the
//! camelCase field names of the backend REST API.

pub mod constraint;
pub mod domain;
pub mod error;
pub mod settings;
pub mod violation;


pub use constraint::{Rule, SchoolConstraint};
pub use domain::{Member, Team, TeamStatus, UserRole, UserSummary};
pub use error::{Result, TeamForgeError};
pub use settings::MatchmakingSettings;
pub use violation::{TeamConstraintViolation, ViolationKind};
