//! End-to-end matchmaking: load settings, review teams, place a participant.

use teamforge::prelude::*;
use teamforge::{check_all_teams, ComplianceFilter, TeamForgeError};
use teamforge_test::hackathon::{mock_teams, EPITA, ISG, SHERBROOKE};
use teamforge_test::roster::candidate;

const SETTINGS: &str = r#"{
    "isActive": true,
    "teamSizeMin": 3,
    "teamSizeMax": 4,
    "constraints": [
        { "rule": "MIN", "schools": ["EPITA"], "value": 1, "multiple": false },
        { "rule": "MAX", "schools": ["ISG Paris Business School", "Université de Sherbrooke"], "value": 2, "multiple": true }
    ]
}"#;

fn settings() -> MatchmakingSettings {
    let config = MatchmakingConfig::from_json_str(SETTINGS).unwrap();
    config.validate().unwrap();
    config.into_settings()
}

#[test]
fn organizer_dashboard() {
    let teams = mock_teams();
    let report = check_all_teams(&teams, &settings());

    let broken: Vec<_> = report
        .iter()
        .filter(|r| !r.is_compliant())
        .map(|r| r.team_id.as_str())
        .collect();
    assert_eq!(broken, ["team2", "team3", "team4"]);

    // Delta has two Sherbrooke students and one ISG student
    assert_eq!(
        report[3].violations,
        vec![TeamConstraintViolation::SchoolsMax {
            count: 1,
            schools: format!("{ISG}, {SHERBROOKE}"),
        }]
    );

    let violations = teamforge::violations_by_team(&teams, &settings());
    let filter = TeamFilter::default().with_compliance(ComplianceFilter::Compliant);
    let clean: Vec<_> = filter_teams(&teams, &filter, &violations)
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(clean, ["team1"]);
}

#[test]
fn participant_placement() {
    let teams = mock_teams();
    let settings = settings();

    let isg: Vec<_> = eligible_teams_for_user(&teams, &candidate("u", ISG), &settings)
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    // Gamma already pools two of the capped schools
    assert_eq!(isg, ["team1", "team2"]);

    let epita: Vec<_> = eligible_teams_for_user(&teams, &candidate("u", EPITA), &settings)
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(epita, ["team1", "team2", "team3"]);
}

#[test]
fn invalid_settings_are_reported_but_still_evaluated() {
    let settings = MatchmakingSettings::active(4, 2);
    assert_eq!(
        settings.validate(),
        Err(TeamForgeError::TeamSizeBounds { min: 4, max: 2 })
    );

    let team = Team::new("t", "Trio", "s")
        .with_member(Member::new("a", "A", "A", "X", UserRole::Participant))
        .with_member(Member::new("b", "B", "B", "X", UserRole::Participant))
        .with_member(Member::new("c", "C", "C", "X", UserRole::Participant));
    let violations = check_team_constraints(&team, &settings);
    assert_eq!(violations[0], TeamConstraintViolation::TeamSizeMin { count: 1 });
    assert_eq!(violations[1], TeamConstraintViolation::TeamSizeMax { count: 1 });
}
