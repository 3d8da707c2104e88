//! Shared test fixtures for TeamForge crates.
//!
//! This crate provides roster builders and a small mock hackathon.
//!
//! - [`roster`] - member, user and team builders
//! - [`hackathon`] - four mock teams with typical constraint problems
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! teamforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use teamforge_test::roster::{participant, team_of};
//! use teamforge_test::hackathon::mock_teams;
//! ```

pub mod hackathon;
pub mod roster;

pub use hackathon::mock_teams;
pub use roster::{candidate, jury, mentor, participant, staffed_team, team_of};
