//! Tests for join eligibility

use teamforge_core::{MatchmakingSettings, Rule, SchoolConstraint, UserRole, UserSummary};
use teamforge_test::hackathon::{mock_teams, CLIMATE_MODELING, EPITA, SHERBROOKE};
use teamforge_test::roster::{candidate, staffed_team, team_of};

use crate::eligibility::*;

fn ids<'a>(teams: &[&'a teamforge_core::Team]) -> Vec<&'a str> {
    teams.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_school_max_for_own_school_excludes_team() {
    let teams = vec![team_of("full", &["X", "X"]), team_of("open", &["X", "Y"])];
    let settings =
        MatchmakingSettings::active(1, 5).with_constraint(SchoolConstraint::single(Rule::Max, "X", 2));

    let eligible = eligible_teams_for_user(&teams, &candidate("u", "X"), &settings);
    assert_eq!(ids(&eligible), ["open"]);
}

#[test]
fn test_school_max_for_other_school_does_not_exclude() {
    let teams = vec![team_of("t", &["X", "X", "X"])];
    let settings =
        MatchmakingSettings::active(1, 5).with_constraint(SchoolConstraint::single(Rule::Max, "X", 2));

    let eligible = eligible_teams_for_user(&teams, &candidate("u", "Y"), &settings);
    assert_eq!(ids(&eligible), ["t"]);
}

#[test]
fn test_minimum_shortfall_never_blocks() {
    let teams = vec![team_of("t", &["Y"])];
    let settings = MatchmakingSettings::active(1, 5)
        .with_constraint(SchoolConstraint::single(Rule::Min, "X", 3))
        .with_constraint(SchoolConstraint::new(Rule::Equal, ["X", "Z"], 4));

    assert!(is_team_eligible(&teams[0], &candidate("u", "X"), &settings));
}

#[test]
fn test_team_size_ceiling_blocks_everyone() {
    let teams = vec![staffed_team("full", &["A", "B", "C"]), staffed_team("room", &["A", "B"])];
    let settings = MatchmakingSettings::active(1, 3);

    let eligible = eligible_teams_for_user(&teams, &candidate("u", "D"), &settings);
    assert_eq!(ids(&eligible), ["room"]);
}

#[test]
fn test_pooled_equality_overshoot_blocks_pool_members() {
    let teams = vec![team_of("t", &["A", "B"])];
    let settings = MatchmakingSettings::active(1, 5)
        .with_constraint(SchoolConstraint::new(Rule::Equal, ["A", "B"], 2));

    assert!(!is_team_eligible(&teams[0], &candidate("u", "B"), &settings));
    assert!(is_team_eligible(&teams[0], &candidate("u", "C"), &settings));
}

#[test]
fn test_inactive_matchmaking_makes_every_team_eligible() {
    let teams = mock_teams();
    let settings = MatchmakingSettings::active(1, 1).with_active(false);
    let user = candidate("u", EPITA).with_favorite_subject(CLIMATE_MODELING);

    let eligible = eligible_teams_for_user(&teams, &user, &settings);
    assert_eq!(eligible.len(), teams.len());
}

#[test]
fn test_favorite_subject_restricts_candidates() {
    let teams = mock_teams();
    let settings = MatchmakingSettings::active(1, 6);
    let user = candidate("u", SHERBROOKE).with_favorite_subject(CLIMATE_MODELING);

    let eligible = eligible_teams_for_user(&teams, &user, &settings);
    assert_eq!(ids(&eligible), ["team2"]);
}

#[test]
fn test_mock_hackathon_with_school_cap() {
    let teams = mock_teams();
    let settings = MatchmakingSettings::active(3, 4)
        .with_constraint(SchoolConstraint::single(Rule::Max, SHERBROOKE, 1));

    let eligible = eligible_teams_for_user(&teams, &candidate("u", SHERBROOKE), &settings);
    // team1 ignores constraints, team4 is already full
    assert_eq!(ids(&eligible), ["team1"]);

    let eligible = eligible_teams_for_user(&teams, &candidate("u", EPITA), &settings);
    assert_eq!(ids(&eligible), ["team1", "team2", "team3"]);
}

#[test]
fn test_user_without_school_is_blocked_by_school_overshoot() {
    let teams = vec![team_of("t", &["X", "X"])];
    let settings =
        MatchmakingSettings::active(1, 5).with_constraint(SchoolConstraint::single(Rule::Max, "X", 1));
    let user = UserSummary::new("u", "No", "School", UserRole::Participant);

    assert!(!is_team_eligible(&teams[0], &user, &settings));
}

#[test]
fn test_user_without_school_ignores_shortfalls() {
    let teams = vec![team_of("t", &["Y"])];
    let settings =
        MatchmakingSettings::active(1, 5).with_constraint(SchoolConstraint::single(Rule::Min, "X", 2));
    let user = UserSummary::new("u", "No", "School", UserRole::Participant);

    assert!(is_team_eligible(&teams[0], &user, &settings));
}

#[test]
fn test_school_contained_in_governed_name_is_blocked() {
    let teams = vec![team_of("t", &["ISG Paris Business School"])];
    let settings = MatchmakingSettings::active(1, 5).with_constraint(SchoolConstraint::single(
        Rule::Max,
        "ISG Paris Business School",
        0,
    ));

    assert!(!is_team_eligible(&teams[0], &candidate("u", "ISG"), &settings));
}

#[test]
fn test_inputs_are_not_mutated() {
    let teams = mock_teams();
    let user = candidate("u", EPITA);
    let settings = MatchmakingSettings::active(1, 4);

    let _ = eligible_teams_for_user(&teams, &user, &settings);
    assert_eq!(teams, mock_teams());
}
