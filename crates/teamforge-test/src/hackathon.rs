//! Mock hackathon teams.
//!
//! | team | status | problems |
//! |---|---|---|
//! | `team1` Alpha | unlocked | no jury, but ignores constraints |
//! | `team2` Beta | unlocked | no mentor |
//! | `team3` Gamma | unlocked | two members, no EPITA student |
//! | `team4` Delta | locked | complete |

use teamforge_core::{Member, Team, TeamStatus, UserRole};

pub const EPITA: &str = "EPITA";
pub const TOURS: &str = "Université de Tours";
pub const ISG: &str = "ISG Paris Business School";
pub const SHERBROOKE: &str = "Université de Sherbrooke";

pub const DRUG_DISCOVERY: &str = "1c6f9d3b-3b89-4a9f-bde3-0c7a1c0f1a12";
pub const CLIMATE_MODELING: &str = "4a5e6b7c-8d9f-4b3a-91e2-5f7c6a3d2b18";
pub const TRAFFIC_FLOW: &str = "7d8f9a0b-1c2d-4e3f-94f5-8d0e9f6a4b51";
pub const ENERGY_OPTIMIZATION: &str = "5b6f7c8d-9a0b-4c2e-92f3-6a8b7d4e1c29";

fn student(id: &str, firstname: &str, lastname: &str, school: &str) -> Member {
    Member::new(id, firstname, lastname, school, UserRole::Participant)
}

fn staff(id: &str, firstname: &str, lastname: &str, role: UserRole) -> Member {
    Member::new(id, firstname, lastname, "", role)
}

/// Returns the four mock teams, in id order.
pub fn mock_teams() -> Vec<Team> {
    vec![
        Team::new("team1", "Team Alpha", DRUG_DISCOVERY)
            .with_ignore_constraints(true)
            .with_member(student("user1", "Alice", "Dupont", EPITA))
            .with_member(student("user2", "Bob", "Martin", TOURS))
            .with_member(student("user3", "Charlie", "Nguyen", ISG))
            .with_member(student("user4", "David", "Leclerc", EPITA))
            .with_mentor(staff("mentor1", "Eva", "Moreau", UserRole::Mentor)),
        Team::new("team2", "Team Beta", CLIMATE_MODELING)
            .with_member(student("user5", "Fiona", "Petit", SHERBROOKE))
            .with_member(student("user6", "George", "Durand", TOURS))
            .with_member(student("user7", "Hana", "Khan", EPITA))
            .with_jury(staff("jury1", "Isabelle", "Robert", UserRole::Jury)),
        Team::new("team3", "Team Gamma", TRAFFIC_FLOW)
            .with_member(student("user8", "Ian", "Lemoine", SHERBROOKE))
            .with_member(student("user9", "Julia", "Caron", ISG))
            .with_jury(staff("jury2", "Kevin", "Benoit", UserRole::Jury))
            .with_mentor(staff("mentor2", "Laura", "Fournier", UserRole::Mentor)),
        Team::new("team4", "Team Delta", ENERGY_OPTIMIZATION)
            .with_status(TeamStatus::Locked)
            .with_member(student("user10", "Lucas", "Bernard", SHERBROOKE))
            .with_member(student("user11", "Marie", "Gauthier", SHERBROOKE))
            .with_member(student("user12", "Nina", "Rossi", EPITA))
            .with_member(student("user13", "Omar", "Benali", ISG))
            .with_jury(staff("jury3", "Patrick", "Leblanc", UserRole::Jury))
            .with_mentor(staff("mentor3", "Quentin", "Rousseau", UserRole::Mentor)),
    ]
}
