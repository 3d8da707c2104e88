//! Ordered evaluation of every matchmaking rule for a team.

use std::collections::HashMap;

use teamforge_core::{MatchmakingSettings, Team, TeamConstraintViolation};
use tracing::debug;

use crate::checks::{check_role_presence, check_school_constraint, check_team_size};

/// Returns every rule a team breaks, in a stable order.
///
/// The order is: size violations, then jury and mentor presence, then one
/// entry per violated school constraint in configured order. The list is
/// empty when matchmaking is inactive or the team ignores constraints.
///
/// # Example
///
/// ```
/// use teamforge_core::{MatchmakingSettings, Team, TeamConstraintViolation};
/// use teamforge_scoring::check_team_constraints;
///
/// let team = Team::new("t1", "Empty", "s1");
///
/// let violations = check_team_constraints(&team, &MatchmakingSettings::active(1, 3));
/// assert_eq!(
///     violations,
///     vec![
///         TeamConstraintViolation::TeamSizeMin { count: 1 },
///         TeamConstraintViolation::JuryMissing,
///         TeamConstraintViolation::MentorMissing,
///     ]
/// );
///
/// let inactive = MatchmakingSettings::default();
/// assert!(check_team_constraints(&team, &inactive).is_empty());
/// ```
pub fn check_team_constraints(
    team: &Team,
    settings: &MatchmakingSettings,
) -> Vec<TeamConstraintViolation> {
    if !settings.is_active || team.ignore_constraints {
        return Vec::new();
    }

    let mut violations = check_team_size(team, settings);
    violations.extend(check_role_presence(team));
    violations.extend(
        settings
            .constraints
            .iter()
            .filter_map(|constraint| check_school_constraint(team, constraint)),
    );

    debug!(
        team = %team.id,
        members = team.size(),
        violations = violations.len(),
        "checked team constraints"
    );
    violations
}

/// Violations of one team, keyed by its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamViolations {
    pub team_id: String,
    pub violations: Vec<TeamConstraintViolation>,
}

impl TeamViolations {
    /// Returns true when the team breaks no rule.
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Evaluates every team, preserving input order.
pub fn check_all_teams(teams: &[Team], settings: &MatchmakingSettings) -> Vec<TeamViolations> {
    teams
        .iter()
        .map(|team| TeamViolations {
            team_id: team.id.clone(),
            violations: check_team_constraints(team, settings),
        })
        .collect()
}

/// Evaluates every team into a lookup table keyed by team id.
pub fn violations_by_team(
    teams: &[Team],
    settings: &MatchmakingSettings,
) -> HashMap<String, Vec<TeamConstraintViolation>> {
    check_all_teams(teams, settings)
        .into_iter()
        .map(|entry| (entry.team_id, entry.violations))
        .collect()
}
