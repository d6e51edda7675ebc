//! Frontend Models
//!
//! Data structures matching the mission API entities.

use serde::{Deserialize, Serialize};

/// A sub-objective of a mission. `id` is absent until the server assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub country: String,
    pub notes: String,
    pub state: bool,
}

/// A mission as returned by the API. `cat` is the assigned cat id, if any.
/// `state` is false while active, true once completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: u32,
    pub cat: Option<u32>,
    pub state: bool,
    pub targets: Vec<Target>,
}

impl Mission {
    pub fn status_label(&self) -> &'static str {
        if self.state { "Completed" } else { "Active" }
    }

    pub fn cat_label(&self) -> String {
        match self.cat {
            Some(cat) => cat.to_string(),
            None => "Unassigned".to_string(),
        }
    }
}

/// Body for `PATCH /missions/{id}/assign_cat/`
#[derive(Debug, Serialize)]
pub struct AssignCatPayload {
    pub cat: u32,
}

/// Body for `POST /missions/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMission {
    pub cat: Option<u32>,
    pub targets: Vec<Target>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_decodes_from_api_json() {
        let json = r#"[{"id":1,"cat":null,"state":false,"targets":[]}]"#;
        let missions: Vec<Mission> = serde_json::from_str(json).unwrap();
        assert_eq!(missions.len(), 1);
        let mission = &missions[0];
        assert_eq!(mission.id, 1);
        assert_eq!(mission.cat, None);
        assert!(!mission.state);
        assert!(mission.targets.is_empty());
    }

    #[test]
    fn mission_with_targets_decodes() {
        let json = r#"{"id":3,"cat":7,"state":true,"targets":[
            {"id":9,"name":"Mr. Whiskers","country":"Norway","notes":"Initial notes.","state":false}
        ]}"#;
        let mission: Mission = serde_json::from_str(json).unwrap();
        assert_eq!(mission.cat, Some(7));
        assert_eq!(mission.targets[0].id, Some(9));
        assert_eq!(mission.targets[0].country, "Norway");
    }

    #[test]
    fn labels_follow_state() {
        let mut mission = Mission { id: 1, cat: None, state: false, targets: vec![] };
        assert_eq!(mission.status_label(), "Active");
        assert_eq!(mission.cat_label(), "Unassigned");

        mission.state = true;
        mission.cat = Some(42);
        assert_eq!(mission.status_label(), "Completed");
        assert_eq!(mission.cat_label(), "42");
    }

    #[test]
    fn unsaved_target_serializes_without_id() {
        let target = Target {
            id: None,
            name: "Tom".to_string(),
            country: "France".to_string(),
            notes: "Initial notes.".to_string(),
            state: false,
        };
        let json = serde_json::to_string(&target).unwrap();
        assert!(!json.contains("\"id\""));
    }
}
