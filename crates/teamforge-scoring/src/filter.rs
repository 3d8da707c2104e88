//! Team listing filters for organizer views.

use std::collections::HashMap;

use teamforge_core::{Team, TeamConstraintViolation, TeamStatus, UserRole};

/// Filter on the constraint compliance of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceFilter {
    /// Teams without any violation.
    Compliant,
    /// Teams with at least one violation.
    NonCompliant,
}

/// Filter on whether a team has participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberPresence {
    WithMembers,
    WithoutMembers,
}

/// Criteria for [`filter_teams`]. Unset criteria match every team.
///
/// # Example
///
/// ```
/// use teamforge_core::TeamStatus;
/// use teamforge_scoring::{ComplianceFilter, TeamFilter};
///
/// let filter = TeamFilter::default()
///     .with_name("alpha")
///     .with_status(TeamStatus::Unlocked)
///     .with_compliance(ComplianceFilter::NonCompliant);
/// assert!(!filter.is_empty());
/// assert!(TeamFilter::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    /// Case-insensitive search in team names and member full names.
    pub name: Option<String>,
    pub status: Option<TeamStatus>,
    pub compliance: Option<ComplianceFilter>,
    pub member_presence: Option<MemberPresence>,
    /// Keeps teams with at least one member of this role.
    pub role: Option<UserRole>,
    /// Keeps teams with at least one member from this school.
    pub school: Option<String>,
}

impl TeamFilter {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_status(mut self, status: TeamStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_compliance(mut self, compliance: ComplianceFilter) -> Self {
        self.compliance = Some(compliance);
        self
    }

    pub fn with_member_presence(mut self, presence: MemberPresence) -> Self {
        self.member_presence = Some(presence);
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    /// Returns true when no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true when `team` satisfies every criterion.
    ///
    /// `violations` is the team's entry in the violation table, if any.
    pub fn matches(&self, team: &Team, violations: Option<&[TeamConstraintViolation]>) -> bool {
        self.matches_name(team)
            && self.status.map_or(true, |status| team.status == status)
            && self.matches_compliance(violations.unwrap_or_default())
            && self.matches_member_presence(team)
            && self
                .role
                .map_or(true, |role| team.members.iter().any(|m| m.role == role))
            && self
                .school
                .as_deref()
                .filter(|s| !s.is_empty())
                .map_or(true, |school| team.members.iter().any(|m| m.school == school))
    }

    fn matches_name(&self, team: &Team) -> bool {
        let Some(query) = self.name.as_deref().filter(|q| !q.is_empty()) else {
            return true;
        };
        let query = query.to_lowercase();
        team.name.to_lowercase().contains(&query)
            || team
                .members
                .iter()
                .any(|m| m.full_name().to_lowercase().contains(&query))
    }

    fn matches_compliance(&self, violations: &[TeamConstraintViolation]) -> bool {
        match self.compliance {
            None => true,
            Some(ComplianceFilter::Compliant) => violations.is_empty(),
            Some(ComplianceFilter::NonCompliant) => !violations.is_empty(),
        }
    }

    fn matches_member_presence(&self, team: &Team) -> bool {
        match self.member_presence {
            None => true,
            Some(MemberPresence::WithMembers) => !team.members.is_empty(),
            Some(MemberPresence::WithoutMembers) => team.members.is_empty(),
        }
    }
}

/// Returns the teams matching `filter`, in input order.
///
/// `violations` is keyed by team id, as built by
/// [`violations_by_team`](crate::violations_by_team). Teams absent from it
/// count as compliant.
pub fn filter_teams<'a>(
    teams: &'a [Team],
    filter: &TeamFilter,
    violations: &HashMap<String, Vec<TeamConstraintViolation>>,
) -> Vec<&'a Team> {
    teams
        .iter()
        .filter(|team| filter.matches(team, violations.get(&team.id).map(Vec::as_slice)))
        .collect()
}
