//! Matchmaking settings.

use crate::constraint::SchoolConstraint;
use crate::error::{Result, TeamForgeError};

/// Organizer-defined matchmaking rules.
///
/// `Default` matches the value the configuration service stores before an
/// organizer edits it: inactive, teams of exactly one, no school rules.
///
/// # Example
///
/// ```
/// use teamforge_core::{MatchmakingSettings, Rule, SchoolConstraint};
///
/// let settings = MatchmakingSettings::active(2, 4)
///     .with_constraint(SchoolConstraint::single(Rule::Min, "EPITA", 1));
///
/// assert!(settings.is_active);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MatchmakingSettings {
    /// Master switch; no violation is ever reported while false.
    pub is_active: bool,
    /// Inclusive lower bound on the number of participants.
    pub team_size_min: usize,
    /// Inclusive upper bound on the number of participants.
    pub team_size_max: usize,
    /// School rules, evaluated in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Vec<SchoolConstraint>,
}

impl Default for MatchmakingSettings {
    fn default() -> Self {
        Self {
            is_active: false,
            team_size_min: 1,
            team_size_max: 1,
            constraints: Vec::new(),
        }
    }
}

impl MatchmakingSettings {
    /// Creates active settings with the given size bounds and no school rule.
    pub fn active(team_size_min: usize, team_size_max: usize) -> Self {
        Self {
            is_active: true,
            team_size_min,
            team_size_max,
            constraints: Vec::new(),
        }
    }

    /// Appends a school constraint.
    pub fn with_constraint(mut self, constraint: SchoolConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Toggles the master switch.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Checks the settings for inconsistencies an organizer should fix.
    ///
    /// The engine evaluates settings whether or not they pass this check.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: inverted size bounds, a constraint
    /// without schools, or a blank school name.
    pub fn validate(&self) -> Result<()> {
        if self.team_size_min > self.team_size_max {
            return Err(TeamForgeError::TeamSizeBounds {
                min: self.team_size_min,
                max: self.team_size_max,
            });
        }
        for (index, constraint) in self.constraints.iter().enumerate() {
            if constraint.schools.is_empty() {
                return Err(TeamForgeError::EmptyConstraint { index });
            }
            if constraint.schools.iter().any(|s| s.trim().is_empty()) {
                return Err(TeamForgeError::BlankSchool { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Rule;

    #[test]
    fn test_default_is_inactive_singleton() {
        let settings = MatchmakingSettings::default();
        assert!(!settings.is_active);
        assert_eq!(settings.team_size_min, 1);
        assert_eq!(settings.team_size_max, 1);
        assert!(settings.constraints.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let settings = MatchmakingSettings::active(5, 3);
        assert_eq!(
            settings.validate(),
            Err(TeamForgeError::TeamSizeBounds { min: 5, max: 3 })
        );
    }

    #[test]
    fn test_validate_empty_constraint() {
        let settings = MatchmakingSettings::active(2, 4)
            .with_constraint(SchoolConstraint::single(Rule::Min, "EPITA", 1))
            .with_constraint(SchoolConstraint::new(Rule::Max, Vec::<String>::new(), 2));
        assert_eq!(
            settings.validate(),
            Err(TeamForgeError::EmptyConstraint { index: 1 })
        );
    }

    #[test]
    fn test_validate_blank_school() {
        let settings = MatchmakingSettings::active(2, 4)
            .with_constraint(SchoolConstraint::new(Rule::Max, ["EPITA", "  "], 2));
        assert_eq!(
            settings.validate(),
            Err(TeamForgeError::BlankSchool { index: 0 })
        );
    }
}
