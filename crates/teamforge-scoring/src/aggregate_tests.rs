//! Tests for the constraint aggregator

use teamforge_core::{MatchmakingSettings, Rule, SchoolConstraint, TeamConstraintViolation as V};
use teamforge_test::hackathon::{mock_teams, EPITA, ISG};
use teamforge_test::roster::{mentor, staffed_team, team_of};

use crate::aggregate::*;

fn strict_settings() -> MatchmakingSettings {
    MatchmakingSettings::active(2, 4)
        .with_constraint(SchoolConstraint::single(Rule::Min, "EPITA", 1))
        .with_constraint(SchoolConstraint::new(Rule::Max, ["A", "B"], 3))
        .with_constraint(SchoolConstraint::single(Rule::Equal, "C", 1))
}

#[test]
fn test_inactive_settings_report_nothing() {
    let settings = strict_settings().with_active(false);
    for team in [team_of("t", &[]), team_of("t", &["A"; 9]), staffed_team("t", &["EPITA"])] {
        assert!(check_team_constraints(&team, &settings).is_empty());
    }
}

#[test]
fn test_ignore_constraints_override() {
    let team = team_of("t", &["A"; 9]).with_ignore_constraints(true);
    assert!(check_team_constraints(&team, &strict_settings()).is_empty());
}

#[test]
fn test_violation_order() {
    let team = team_of("t", &["A", "A", "B", "B", "B"]);

    assert_eq!(
        check_team_constraints(&team, &strict_settings()),
        vec![
            V::TeamSizeMax { count: 1 },
            V::JuryMissing,
            V::MentorMissing,
            V::SchoolMin { count: 1, schools: "EPITA".into() },
            V::SchoolsMax { count: 2, schools: "A, B".into() },
            V::SchoolEqualTooFew { count: 1, schools: "C".into() },
        ]
    );
}

#[test]
fn test_jury_missing_without_mentor_missing() {
    let team = team_of("t", &["EPITA", "C"]).with_mentor(mentor("m"));
    let violations = check_team_constraints(&team, &strict_settings());

    assert_eq!(violations, vec![V::JuryMissing]);
}

#[test]
fn test_compliant_team() {
    let team = staffed_team("t", &["EPITA", "C", "A"]);
    assert!(check_team_constraints(&team, &strict_settings()).is_empty());
}

#[test]
fn test_evaluation_is_idempotent() {
    let team = team_of("t", &["A", "B", "B", "A", "C", "C"]);
    let settings = strict_settings();
    assert_eq!(
        check_team_constraints(&team, &settings),
        check_team_constraints(&team, &settings)
    );
}

#[test]
fn test_check_all_teams_on_mock_hackathon() {
    let settings = MatchmakingSettings::active(3, 4)
        .with_constraint(SchoolConstraint::single(Rule::Min, EPITA, 1))
        .with_constraint(SchoolConstraint::single(Rule::Max, ISG, 1));
    let report = check_all_teams(&mock_teams(), &settings);

    let ids: Vec<_> = report.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(ids, ["team1", "team2", "team3", "team4"]);

    assert!(report[0].is_compliant());
    assert_eq!(report[1].violations, vec![V::MentorMissing]);
    assert_eq!(
        report[2].violations,
        vec![
            V::TeamSizeMin { count: 1 },
            V::SchoolMin { count: 1, schools: EPITA.into() },
        ]
    );
    assert!(report[3].is_compliant());
}

#[test]
fn test_violations_by_team() {
    let teams = vec![team_of("a", &["EPITA"]), staffed_team("b", &["EPITA", "C"])];
    let table = violations_by_team(&teams, &strict_settings());

    assert_eq!(table.len(), 2);
    assert!(table["b"].is_empty());
    assert_eq!(table["a"][0], V::TeamSizeMin { count: 1 });
}
