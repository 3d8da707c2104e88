//! Team size bounds.

use teamforge_core::{MatchmakingSettings, Team, TeamConstraintViolation};

/// Checks the number of participants against the inclusive size bounds.
///
/// Both violations are reported when `team_size_min > team_size_max` and
/// the team falls outside both; settings consistency is not checked here.
///
/// # Example
///
/// ```
/// use teamforge_core::{MatchmakingSettings, Team, TeamConstraintViolation};
/// use teamforge_scoring::check_team_size;
///
/// let settings = MatchmakingSettings::active(2, 4);
/// let team = Team::new("t1", "Solo", "s1");
///
/// assert_eq!(
///     check_team_size(&team, &settings),
///     vec![TeamConstraintViolation::TeamSizeMin { count: 2 }]
/// );
/// ```
pub fn check_team_size(
    team: &Team,
    settings: &MatchmakingSettings,
) -> Vec<TeamConstraintViolation> {
    let size = team.size();
    let mut violations = Vec::new();

    if size < settings.team_size_min {
        violations.push(TeamConstraintViolation::TeamSizeMin {
            count: settings.team_size_min - size,
        });
    }
    if size > settings.team_size_max {
        violations.push(TeamConstraintViolation::TeamSizeMax {
            count: size - settings.team_size_max,
        });
    }

    violations
}
