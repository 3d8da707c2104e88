//! Individual rule checkers.
//!
//! Each checker is a pure function of a team and the part of the settings
//! it enforces. The aggregator in [`crate::aggregate`] fixes the order in
//! which their results are reported.

mod roles;
mod school;
mod size;


pub use roles::check_role_presence;
pub use school::check_school_constraint;
pub use size::check_team_size;
