//! Roster builders.
//!
//! # Example
//!
//! ```
//! use teamforge_test::roster::{participant, staffed_team};
//!
//! let team = staffed_team("t1", &["EPITA", "EPITA", "ISG"]);
//! assert_eq!(team.members.len(), 3);
//! assert_eq!(team.juries.len(), 1);
//! assert_eq!(participant("u1", "ISG").school, "ISG");
//! ```

use teamforge_core::{Member, Team, UserRole, UserSummary};

/// Creates a participant from `school`.
pub fn participant(id: &str, school: &str) -> Member {
    Member::new(id, "Participant", id, school, UserRole::Participant)
}

/// Creates a jury with no school.
pub fn jury(id: &str) -> Member {
    Member::new(id, "Jury", id, "", UserRole::Jury)
}

/// Creates a mentor with no school.
pub fn mentor(id: &str) -> Member {
    Member::new(id, "Mentor", id, "", UserRole::Mentor)
}

/// Creates a participant user looking for a team.
pub fn candidate(id: &str, school: &str) -> UserSummary {
    UserSummary::new(id, "Candidate", id, UserRole::Participant).with_school(school)
}

/// Creates a team on subject `"subject"` with one participant per school
/// and no staff.
pub fn team_of(id: &str, schools: &[&str]) -> Team {
    schools
        .iter()
        .enumerate()
        .fold(Team::new(id, format!("Team {id}"), "subject"), |team, (i, school)| {
            team.with_member(participant(&format!("{id}-u{i}"), school))
        })
}

/// Like [`team_of`], with one jury and one mentor assigned.
pub fn staffed_team(id: &str, schools: &[&str]) -> Team {
    team_of(id, schools)
        .with_jury(jury(&format!("{id}-jury")))
        .with_mentor(mentor(&format!("{id}-mentor")))
}
