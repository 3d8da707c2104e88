//! Teams and their rosters.

use std::fmt;
use std::str::FromStr;

use crate::error::TeamForgeError;

use super::UserRole;

/// Lifecycle status of a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TeamStatus {
    /// Members may still join or leave.
    #[default]
    Unlocked,
    /// Roster is frozen.
    Locked,
}

impl TeamStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Unlocked => "UNLOCKED",
            TeamStatus::Locked => "LOCKED",
        }
    }
}

impl fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamStatus {
    type Err = TeamForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNLOCKED" => Ok(TeamStatus::Unlocked),
            "LOCKED" => Ok(TeamStatus::Locked),
            other => Err(TeamForgeError::UnknownValue {
                field: "team status",
                value: other.to_string(),
            }),
        }
    }
}

/// One entry of a team roster.
///
/// Staff entries (juries, mentors) usually carry an empty `school`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub school: String,
    pub role: UserRole,
}

impl Member {
    /// Creates a roster entry.
    pub fn new(
        id: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        school: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            school: school.into(),
            role,
        }
    }

    /// Returns `"firstname lastname"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// A hackathon team.
///
/// `members` only holds participants; juries and mentors assigned to the
/// team live in their own lists and never count towards team size or
/// school balance.
///
/// # Example
///
/// ```
/// use teamforge_core::{Member, Team, UserRole};
///
/// let team = Team::new("t1", "Team Alpha", "subject-1")
///     .with_member(Member::new("u1", "Alice", "Dupont", "EPITA", UserRole::Participant))
///     .with_member(Member::new("u2", "Bob", "Martin", "ISG", UserRole::Participant));
///
/// assert_eq!(team.size(), 2);
/// assert_eq!(team.school_count("EPITA"), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Team {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub theme_id: Option<String>,
    pub subject_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: TeamStatus,
    /// Exempts the team from every matchmaking rule.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ignore_constraints: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<Member>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub juries: Vec<Member>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mentors: Vec<Member>,
}

impl Team {
    /// Creates an unlocked team with empty rosters.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subject_id: subject_id.into(),
            ..Self::default()
        }
    }

    /// Adds a participant to the team.
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Returns a copy of this team with `candidate` appended to `members`.
    ///
    /// The original team is left untouched.
    pub fn with_candidate(&self, candidate: Member) -> Self {
        let mut simulated = self.clone();
        simulated.members.push(candidate);
        simulated
    }

    /// Adds a jury to the team.
    pub fn with_jury(mut self, jury: Member) -> Self {
        self.juries.push(jury);
        self
    }

    /// Adds a mentor to the team.
    pub fn with_mentor(mut self, mentor: Member) -> Self {
        self.mentors.push(mentor);
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: TeamStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the constraint override flag.
    pub fn with_ignore_constraints(mut self, ignore: bool) -> Self {
        self.ignore_constraints = ignore;
        self
    }

    /// Number of participants in the team.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Number of participants coming from `school`.
    pub fn school_count(&self, school: &str) -> usize {
        self.members.iter().filter(|m| m.school == school).count()
    }
}
