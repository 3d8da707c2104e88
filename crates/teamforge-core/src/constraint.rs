//! School constraint types.
//!
//! A [`SchoolConstraint`] bounds how many members of a team may come from
//! one school, or from a pool of schools counted together.

use std::fmt;
use std::str::FromStr;

use crate::error::TeamForgeError;
use crate::violation::SCHOOL_LABEL_SEPARATOR;

/// Comparison applied by a school constraint.
///
/// # Example
///
/// ```
/// use teamforge_core::Rule;
///
/// let rule: Rule = "EQUAL".parse().unwrap();
/// assert_eq!(rule, Rule::Equal);
/// assert_eq!(rule.to_string(), "EQUAL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Rule {
    /// At least `value` members.
    Min,
    /// At most `value` members.
    Max,
    /// Exactly `value` members.
    Equal,
}

impl Rule {
    /// Returns the wire name of the rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::Min => "MIN",
            Rule::Max => "MAX",
            Rule::Equal => "EQUAL",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = TeamForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIN" => Ok(Rule::Min),
            "MAX" => Ok(Rule::Max),
            "EQUAL" => Ok(Rule::Equal),
            other => Err(TeamForgeError::UnknownValue {
                field: "rule",
                value: other.to_string(),
            }),
        }
    }
}

/// A configured rule on the school composition of a team.
///
/// With a single school the rule applies to that school alone. With
/// several schools the members of all of them are pooled and the rule
/// applies to the total. The `multiple` flag is carried for the
/// configuration UI; evaluation always branches on the number of schools.
///
/// # Example
///
/// ```
/// use teamforge_core::{Rule, SchoolConstraint};
///
/// let pooled = SchoolConstraint::new(Rule::Max, ["A", "B"], 3);
/// assert!(pooled.is_pooled());
/// assert_eq!(pooled.label(), "A, B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchoolConstraint {
    pub rule: Rule,
    pub schools: Vec<String>,
    pub value: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub multiple: bool,
}

impl SchoolConstraint {
    /// Creates a constraint, deriving `multiple` from the number of schools.
    pub fn new<I, S>(rule: Rule, schools: I, value: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let schools: Vec<String> = schools.into_iter().map(Into::into).collect();
        let multiple = schools.len() > 1;
        Self {
            rule,
            schools,
            value,
            multiple,
        }
    }

    /// Creates a single-school constraint.
    pub fn single(rule: Rule, school: impl Into<String>, value: usize) -> Self {
        let school: String = school.into();
        Self::new(rule, [school], value)
    }

    /// Returns true when members of several schools are counted together.
    pub fn is_pooled(&self) -> bool {
        self.schools.len() > 1
    }

    /// Returns the governed schools joined with `", "`.
    pub fn label(&self) -> String {
        self.schools.join(SCHOOL_LABEL_SEPARATOR)
    }

    /// Returns true when `school` is one of the governed schools.
    pub fn governs(&self, school: &str) -> bool {
        self.schools.iter().any(|s| s == school)
    }
}
