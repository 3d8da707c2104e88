//! Jury and mentor presence.

use teamforge_core::{Team, TeamConstraintViolation};

/// Reports a missing jury, then a missing mentor.
pub fn check_role_presence(team: &Team) -> Vec<TeamConstraintViolation> {
    let mut violations = Vec::new();
    if team.juries.is_empty() {
        violations.push(TeamConstraintViolation::JuryMissing);
    }
    if team.mentors.is_empty() {
        violations.push(TeamConstraintViolation::MentorMissing);
    }
    violations
}
