//! School balance rules.

use std::cmp::Ordering;

use teamforge_core::{Rule, SchoolConstraint, Team, TeamConstraintViolation};
use tracing::trace;

/// Checks one school constraint against the participants of a team.
///
/// A constraint naming one school counts that school; a constraint naming
/// several pools their members and reports the `Schools*` kinds. Juries
/// and mentors are never counted. A constraint naming no school is a
/// no-op.
///
/// # Example
///
/// ```
/// use teamforge_core::{Member, Rule, SchoolConstraint, Team, TeamConstraintViolation, UserRole};
/// use teamforge_scoring::check_school_constraint;
///
/// let epita = |id: &str| Member::new(id, "A", "B", "EPITA", UserRole::Participant);
/// let team = Team::new("t1", "Team", "s1")
///     .with_member(epita("u1"))
///     .with_member(epita("u2"))
///     .with_member(epita("u3"));
///
/// let constraint = SchoolConstraint::single(Rule::Equal, "EPITA", 2);
/// assert_eq!(
///     check_school_constraint(&team, &constraint),
///     Some(TeamConstraintViolation::SchoolEqualTooMany { count: 1, schools: "EPITA".into() })
/// );
/// ```
pub fn check_school_constraint(
    team: &Team,
    constraint: &SchoolConstraint,
) -> Option<TeamConstraintViolation> {
    if constraint.schools.is_empty() {
        trace!(team = %team.id, "skipping school constraint without schools");
        return None;
    }

    let count: usize = constraint
        .schools
        .iter()
        .map(|school| team.school_count(school))
        .sum();
    let value = constraint.value;
    let pooled = constraint.is_pooled();
    let diff = count.abs_diff(value);

    use TeamConstraintViolation as V;
    let violation = match (constraint.rule, count.cmp(&value)) {
        (Rule::Min, Ordering::Less) => {
            let schools = constraint.label();
            if pooled {
                V::SchoolsMin { count: diff, schools }
            } else {
                V::SchoolMin { count: diff, schools }
            }
        }
        (Rule::Max, Ordering::Greater) => {
            let schools = constraint.label();
            if pooled {
                V::SchoolsMax { count: diff, schools }
            } else {
                V::SchoolMax { count: diff, schools }
            }
        }
        (Rule::Equal, Ordering::Greater) => {
            let schools = constraint.label();
            if pooled {
                V::SchoolsEqualTooMany { count: diff, schools }
            } else {
                V::SchoolEqualTooMany { count: diff, schools }
            }
        }
        (Rule::Equal, Ordering::Less) => {
            let schools = constraint.label();
            if pooled {
                V::SchoolsEqualTooFew { count: diff, schools }
            } else {
                V::SchoolEqualTooFew { count: diff, schools }
            }
        }
        _ => return None,
    };

    trace!(
        team = %team.id,
        rule = %constraint.rule,
        count,
        value,
        kind = %violation.kind(),
        "school constraint violated"
    );
    Some(violation)
}
