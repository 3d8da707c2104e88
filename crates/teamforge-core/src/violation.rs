//! Violation records reported by the matchmaking engine.
//!
//! Each [`TeamConstraintViolation`] variant carries exactly the data its
//! kind needs: size violations carry a `count`, school violations carry a
//! `count` and the `schools` label, and role violations carry nothing.

use std::fmt;

/// Separator used to join school names into a violation label.
pub const SCHOOL_LABEL_SEPARATOR: &str = ", ";

/// One broken rule for one team.
///
/// `count` is always the distance to the bound: how many members are
/// missing or in excess.
///
/// # Example
///
/// ```
/// use teamforge_core::{TeamConstraintViolation, ViolationKind};
///
/// let v = TeamConstraintViolation::SchoolsMax { count: 1, schools: "A, B".to_string() };
/// assert_eq!(v.kind(), ViolationKind::SchoolsMax);
/// assert_eq!(v.count(), Some(1));
/// assert!(v.involves_school("B"));
/// assert!(v.is_blocking_for("A"));
/// assert!(!v.is_blocking_for("C"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum TeamConstraintViolation {
    TeamSizeMin { count: usize },
    TeamSizeMax { count: usize },
    SchoolMin { count: usize, schools: String },
    SchoolMax { count: usize, schools: String },
    SchoolEqualTooMany { count: usize, schools: String },
    SchoolEqualTooFew { count: usize, schools: String },
    SchoolsMin { count: usize, schools: String },
    SchoolsMax { count: usize, schools: String },
    SchoolsEqualTooMany { count: usize, schools: String },
    SchoolsEqualTooFew { count: usize, schools: String },
    JuryMissing,
    MentorMissing,
}

impl TeamConstraintViolation {
    /// Returns the kind of this violation.
    pub fn kind(&self) -> ViolationKind {
        use TeamConstraintViolation as V;
        match self {
            V::TeamSizeMin { .. } => ViolationKind::TeamSizeMin,
            V::TeamSizeMax { .. } => ViolationKind::TeamSizeMax,
            V::SchoolMin { .. } => ViolationKind::SchoolMin,
            V::SchoolMax { .. } => ViolationKind::SchoolMax,
            V::SchoolEqualTooMany { .. } => ViolationKind::SchoolEqualTooMany,
            V::SchoolEqualTooFew { .. } => ViolationKind::SchoolEqualTooFew,
            V::SchoolsMin { .. } => ViolationKind::SchoolsMin,
            V::SchoolsMax { .. } => ViolationKind::SchoolsMax,
            V::SchoolsEqualTooMany { .. } => ViolationKind::SchoolsEqualTooMany,
            V::SchoolsEqualTooFew { .. } => ViolationKind::SchoolsEqualTooFew,
            V::JuryMissing => ViolationKind::JuryMissing,
            V::MentorMissing => ViolationKind::MentorMissing,
        }
    }

    /// Returns the magnitude of the violation, if the kind has one.
    pub fn count(&self) -> Option<usize> {
        use TeamConstraintViolation as V;
        match self {
            V::TeamSizeMin { count }
            | V::TeamSizeMax { count }
            | V::SchoolMin { count, .. }
            | V::SchoolMax { count, .. }
            | V::SchoolEqualTooMany { count, .. }
            | V::SchoolEqualTooFew { count, .. }
            | V::SchoolsMin { count, .. }
            | V::SchoolsMax { count, .. }
            | V::SchoolsEqualTooMany { count, .. }
            | V::SchoolsEqualTooFew { count, .. } => Some(*count),
            V::JuryMissing | V::MentorMissing => None,
        }
    }

    /// Returns the governing school label of a school violation.
    pub fn schools(&self) -> Option<&str> {
        use TeamConstraintViolation as V;
        match self {
            V::SchoolMin { schools, .. }
            | V::SchoolMax { schools, .. }
            | V::SchoolEqualTooMany { schools, .. }
            | V::SchoolEqualTooFew { schools, .. }
            | V::SchoolsMin { schools, .. }
            | V::SchoolsMax { schools, .. }
            | V::SchoolsEqualTooMany { schools, .. }
            | V::SchoolsEqualTooFew { schools, .. } => Some(schools),
            V::TeamSizeMin { .. } | V::TeamSizeMax { .. } | V::JuryMissing | V::MentorMissing => {
                None
            }
        }
    }

    /// Returns true when the school label contains `school`.
    ///
    /// This is a substring test on the whole label, so an empty school
    /// is involved in every school violation.
    pub fn involves_school(&self, school: &str) -> bool {
        self.schools().is_some_and(|label| label.contains(school))
    }

    /// Returns true when this violation forbids a user from `school` to join.
    ///
    /// Only overshoots block: the team-size ceiling, and the school
    /// ceilings and equalities exceeded for a pool containing `school`.
    /// Shortfalls never block.
    pub fn is_blocking_for(&self, school: &str) -> bool {
        let kind = self.kind();
        match kind {
            ViolationKind::TeamSizeMax => true,
            _ => kind.is_school_related() && kind.is_overshoot() && self.involves_school(school),
        }
    }
}

impl fmt::Display for TeamConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TeamConstraintViolation as V;
        match self {
            V::TeamSizeMin { count } => write!(f, "team is missing {count} member(s)"),
            V::TeamSizeMax { count } => write!(f, "team has {count} member(s) too many"),
            V::SchoolMin { count, schools } | V::SchoolsMin { count, schools } => {
                write!(f, "team needs {count} more member(s) from {schools}")
            }
            V::SchoolMax { count, schools } | V::SchoolsMax { count, schools } => {
                write!(f, "team has {count} member(s) too many from {schools}")
            }
            V::SchoolEqualTooMany { count, schools } | V::SchoolsEqualTooMany { count, schools } => {
                write!(f, "team exceeds the required number of members from {schools} by {count}")
            }
            V::SchoolEqualTooFew { count, schools } | V::SchoolsEqualTooFew { count, schools } => {
                write!(f, "team lacks {count} member(s) from {schools} to reach the required number")
            }
            V::JuryMissing => f.write_str("team has no jury"),
            V::MentorMissing => f.write_str("team has no mentor"),
        }
    }
}

/// Payload-free kind of a [`TeamConstraintViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    TeamSizeMin,
    TeamSizeMax,
    SchoolMin,
    SchoolMax,
    SchoolEqualTooMany,
    SchoolEqualTooFew,
    SchoolsMin,
    SchoolsMax,
    SchoolsEqualTooMany,
    SchoolsEqualTooFew,
    JuryMissing,
    MentorMissing,
}

impl ViolationKind {
    /// All kinds, in declaration order.
    pub const ALL: [ViolationKind; 12] = [
        ViolationKind::TeamSizeMin,
        ViolationKind::TeamSizeMax,
        ViolationKind::SchoolMin,
        ViolationKind::SchoolMax,
        ViolationKind::SchoolEqualTooMany,
        ViolationKind::SchoolEqualTooFew,
        ViolationKind::SchoolsMin,
        ViolationKind::SchoolsMax,
        ViolationKind::SchoolsEqualTooMany,
        ViolationKind::SchoolsEqualTooFew,
        ViolationKind::JuryMissing,
        ViolationKind::MentorMissing,
    ];

    /// Returns the wire tag of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::TeamSizeMin => "teamSizeMin",
            ViolationKind::TeamSizeMax => "teamSizeMax",
            ViolationKind::SchoolMin => "schoolMin",
            ViolationKind::SchoolMax => "schoolMax",
            ViolationKind::SchoolEqualTooMany => "schoolEqualTooMany",
            ViolationKind::SchoolEqualTooFew => "schoolEqualTooFew",
            ViolationKind::SchoolsMin => "schoolsMin",
            ViolationKind::SchoolsMax => "schoolsMax",
            ViolationKind::SchoolsEqualTooMany => "schoolsEqualTooMany",
            ViolationKind::SchoolsEqualTooFew => "schoolsEqualTooFew",
            ViolationKind::JuryMissing => "juryMissing",
            ViolationKind::MentorMissing => "mentorMissing",
        }
    }

    /// Returns true for kinds produced by a school constraint.
    pub fn is_school_related(&self) -> bool {
        !matches!(
            self,
            ViolationKind::TeamSizeMin
                | ViolationKind::TeamSizeMax
                | ViolationKind::JuryMissing
                | ViolationKind::MentorMissing
        )
    }

    /// Returns true for kinds meaning "too many members".
    pub fn is_overshoot(&self) -> bool {
        matches!(
            self,
            ViolationKind::TeamSizeMax
                | ViolationKind::SchoolMax
                | ViolationKind::SchoolsMax
                | ViolationKind::SchoolEqualTooMany
                | ViolationKind::SchoolsEqualTooMany
        )
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
