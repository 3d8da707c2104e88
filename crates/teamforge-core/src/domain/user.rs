//! Users and their roles.

use std::fmt;
use std::str::FromStr;

use crate::error::TeamForgeError;

use super::Member;

/// Role of a user on the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum UserRole {
    /// Hackathon participant; the only role counted in team size.
    #[default]
    Participant,
    /// Jury member evaluating teams.
    Jury,
    /// Mentor supervising teams.
    Mentor,
    /// Organizer administrating the hackathon.
    Organizer,
}

impl UserRole {
    /// Returns the wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Participant => "PARTICIPANT",
            UserRole::Jury => "JURY",
            UserRole::Mentor => "MENTOR",
            UserRole::Organizer => "ORGANIZER",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = TeamForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PARTICIPANT" => Ok(UserRole::Participant),
            "JURY" => Ok(UserRole::Jury),
            "MENTOR" => Ok(UserRole::Mentor),
            "ORGANIZER" => Ok(UserRole::Organizer),
            other => Err(TeamForgeError::UnknownValue {
                field: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// Reduced view of a user, as returned by the user directory.
///
/// # Example
///
/// ```
/// use teamforge_core::{UserRole, UserSummary};
///
/// let user = UserSummary::new("u1", "Alice", "Dupont", UserRole::Participant)
///     .with_school("EPITA");
/// let member = user.as_member();
/// assert_eq!(member.school, "EPITA");
/// assert_eq!(member.full_name(), "Alice Dupont");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct UserSummary {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: String,
    pub role: UserRole,
    #[cfg_attr(feature = "serde", serde(default))]
    pub school: Option<String>,
    /// Subject the user would like to work on, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub favorite_subject_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub team_id: Option<String>,
}

impl UserSummary {
    /// Creates a user without school, email, subject preference or team.
    pub fn new(
        id: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            role,
            ..Self::default()
        }
    }

    /// Sets the school of the user.
    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    /// Sets the preferred subject of the user.
    pub fn with_favorite_subject(mut self, subject_id: impl Into<String>) -> Self {
        self.favorite_subject_id = Some(subject_id.into());
        self
    }

    /// Returns the school of the user, or `""` when none is declared.
    pub fn school_or_empty(&self) -> &str {
        self.school.as_deref().unwrap_or("")
    }

    /// Builds the roster entry this user would occupy in a team.
    pub fn as_member(&self) -> Member {
        Member {
            id: self.id.clone(),
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            school: self.school_or_empty().to_string(),
            role: self.role,
        }
    }
}
