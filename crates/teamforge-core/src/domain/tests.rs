//! Tests for teams and users

use super::*;

fn participant(id: &str, school: &str) -> Member {
    Member::new(id, "First", id, school, UserRole::Participant)
}

#[test]
fn test_team_counts_only_members() {
    let team = Team::new("t1", "Team Alpha", "s1")
        .with_member(participant("u1", "EPITA"))
        .with_member(participant("u2", "EPITA"))
        .with_member(participant("u3", "ISG"))
        .with_jury(Member::new("j1", "Jane", "Jury", "EPITA", UserRole::Jury))
        .with_mentor(Member::new("m1", "Mark", "Mentor", "", UserRole::Mentor));

    assert_eq!(team.size(), 3);
    assert_eq!(team.school_count("EPITA"), 2);
    assert_eq!(team.school_count("ISG"), 1);
    assert_eq!(team.school_count("Unknown"), 0);
}

#[test]
fn test_with_candidate_leaves_original_untouched() {
    let team = Team::new("t1", "Team Alpha", "s1").with_member(participant("u1", "EPITA"));
    let simulated = team.with_candidate(participant("u2", "ISG"));

    assert_eq!(team.size(), 1);
    assert_eq!(simulated.size(), 2);
    assert_eq!(simulated.members[1].id, "u2");
    assert_eq!(simulated.id, team.id);
}

#[test]
fn test_user_without_school_becomes_empty_school_member() {
    let user = UserSummary::new("u1", "Alice", "Dupont", UserRole::Participant);
    let member = user.as_member();

    assert_eq!(member.school, "");
    assert_eq!(member.role, UserRole::Participant);
    assert_eq!(user.school_or_empty(), "");
}

#[test]
fn test_role_and_status_parsing() {
    assert_eq!("JURY".parse::<UserRole>().unwrap(), UserRole::Jury);
    assert_eq!("LOCKED".parse::<TeamStatus>().unwrap(), TeamStatus::Locked);
    assert!("locked".parse::<TeamStatus>().is_err());
    assert_eq!(TeamStatus::default(), TeamStatus::Unlocked);
    assert_eq!(UserRole::Organizer.to_string(), "ORGANIZER");
}

#[cfg(feature = "serde")]
#[test]
fn test_team_from_backend_json() {
    let json = r#"{
        "id": "team2",
        "name": "Team Beta",
        "subjectId": "subject-7",
        "status": "LOCKED",
        "createdAt": "2025-10-19T11:00:00Z",
        "members": [
            { "id": "u5", "firstname": "Fiona", "lastname": "Petit",
              "school": "Université de Sherbrooke", "role": "PARTICIPANT" }
        ],
        "juries": [
            { "id": "j1", "firstname": "Isabelle", "lastname": "Robert",
              "school": "", "role": "JURY" }
        ]
    }"#;

    let team: Team = serde_json::from_str(json).unwrap();
    assert_eq!(team.status, TeamStatus::Locked);
    assert!(!team.ignore_constraints);
    assert_eq!(team.members.len(), 1);
    assert_eq!(team.juries[0].role, UserRole::Jury);
    assert!(team.mentors.is_empty());
    assert_eq!(team.description, None);
}
