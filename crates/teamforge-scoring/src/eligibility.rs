//! Which teams a user may join.
//!
//! Eligibility is computed by simulation: the user is appended to a copy
//! of each candidate team and the copy is evaluated like any other team.
//! Only overshoots tied to the user's school, or the team-size ceiling,
//! exclude a team. Shortfalls never do, since a new member can only help
//! reach a minimum.

use teamforge_core::{MatchmakingSettings, Team, UserSummary};
use tracing::debug;

use crate::aggregate::check_team_constraints;

/// Returns the teams `user` may join, in input order.
///
/// When matchmaking is inactive every team is returned. Otherwise, a user
/// with a favorite subject only sees teams working on that subject, and a
/// team is dropped when adding the user would produce a blocking
/// violation.
///
/// # Example
///
/// ```
/// use teamforge_core::{MatchmakingSettings, Member, Rule, SchoolConstraint, Team, UserRole, UserSummary};
/// use teamforge_scoring::eligible_teams_for_user;
///
/// let epita = Member::new("u1", "Alice", "Dupont", "EPITA", UserRole::Participant);
/// let full = Team::new("t1", "Full of EPITA", "s1").with_member(epita);
/// let open = Team::new("t2", "Open", "s1");
/// let teams = vec![full, open];
///
/// let settings = MatchmakingSettings::active(1, 4)
///     .with_constraint(SchoolConstraint::single(Rule::Max, "EPITA", 1));
/// let user = UserSummary::new("u2", "Bob", "Martin", UserRole::Participant).with_school("EPITA");
///
/// let eligible = eligible_teams_for_user(&teams, &user, &settings);
/// assert_eq!(eligible.len(), 1);
/// assert_eq!(eligible[0].id, "t2");
/// ```
pub fn eligible_teams_for_user<'a>(
    teams: &'a [Team],
    user: &UserSummary,
    settings: &MatchmakingSettings,
) -> Vec<&'a Team> {
    if !settings.is_active {
        return teams.iter().collect();
    }

    let eligible: Vec<&Team> = teams
        .iter()
        .filter(|team| is_team_eligible(team, user, settings))
        .collect();

    debug!(
        user = %user.id,
        candidates = teams.len(),
        eligible = eligible.len(),
        "computed eligible teams"
    );
    eligible
}

/// Returns true when `user` may join `team`.
pub fn is_team_eligible(team: &Team, user: &UserSummary, settings: &MatchmakingSettings) -> bool {
    if !settings.is_active {
        return true;
    }

    if let Some(subject) = user.favorite_subject_id.as_deref() {
        if team.subject_id != subject {
            return false;
        }
    }

    let school = user.school_or_empty();
    let simulated = team.with_candidate(user.as_member());

    match check_team_constraints(&simulated, settings)
        .into_iter()
        .find(|violation| violation.is_blocking_for(school))
    {
        Some(blocking) => {
            debug!(
                team = %team.id,
                user = %user.id,
                school,
                violation = %blocking.kind(),
                "blocking violation for candidate"
            );
            false
        }
        None => true,
    }
}
