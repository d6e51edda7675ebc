//! Form Input Parsing
//!
//! Required-field checks for the two forms. Anything rejected here never
//! reaches the network.

use crate::models::{NewMission, Target};

/// Notes attached to the single target of every newly created mission.
pub const DEFAULT_TARGET_NOTES: &str = "Initial notes.";

/// Prompt text naming the fields that blocked submission.
pub fn missing_fields_prompt(missing: &[&str]) -> String {
    format!("Please enter {}.", missing.join(" and "))
}

/// Parse the assign-cat form. Both ids are required integers.
pub fn parse_assign_cat(mission_id: &str, cat_id: &str) -> Result<(u32, u32), Vec<&'static str>> {
    let mut missing = Vec::new();
    let mission_id = mission_id.trim().parse::<u32>();
    if mission_id.is_err() {
        missing.push("Mission ID");
    }
    let cat_id = cat_id.trim().parse::<u32>();
    if cat_id.is_err() {
        missing.push("Cat ID");
    }
    match (mission_id, cat_id) {
        (Ok(mission_id), Ok(cat_id)) => Ok((mission_id, cat_id)),
        _ => Err(missing),
    }
}

/// Parse the create-mission form. The cat id is optional; target name and
/// country are required. The new mission always carries exactly one target
/// with defaulted notes and an active state.
pub fn build_new_mission(
    cat_id: &str,
    name: &str,
    country: &str,
) -> Result<NewMission, Vec<&'static str>> {
    let mut missing = Vec::new();

    let cat = match cat_id.trim() {
        "" => None,
        raw => match raw.parse::<u32>() {
            Ok(id) => Some(id),
            Err(_) => {
                missing.push("Cat ID");
                None
            }
        },
    };
    if name.trim().is_empty() {
        missing.push("Target Name");
    }
    if country.trim().is_empty() {
        missing.push("Target Country");
    }
    if !missing.is_empty() {
        return Err(missing);
    }

    Ok(NewMission {
        cat,
        targets: vec![Target {
            id: None,
            name: name.trim().to_string(),
            country: country.trim().to_string(),
            notes: DEFAULT_TARGET_NOTES.to_string(),
            state: false,
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_cat_requires_both_ids() {
        assert_eq!(parse_assign_cat("3", "7"), Ok((3, 7)));
        assert_eq!(parse_assign_cat("", "7"), Err(vec!["Mission ID"]));
        assert_eq!(parse_assign_cat("3", ""), Err(vec!["Cat ID"]));
        assert_eq!(parse_assign_cat("", ""), Err(vec!["Mission ID", "Cat ID"]));
        assert_eq!(parse_assign_cat("three", "7"), Err(vec!["Mission ID"]));
    }

    #[test]
    fn new_mission_requires_name_and_country() {
        assert_eq!(build_new_mission("", "", "Norway"), Err(vec!["Target Name"]));
        assert_eq!(build_new_mission("", "Tom", ""), Err(vec!["Target Country"]));
        assert_eq!(
            build_new_mission("", "", ""),
            Err(vec!["Target Name", "Target Country"])
        );
    }

    #[test]
    fn new_mission_cat_is_optional() {
        let without = build_new_mission("", "Tom", "France").unwrap();
        assert_eq!(without.cat, None);

        let with = build_new_mission("5", "Tom", "France").unwrap();
        assert_eq!(with.cat, Some(5));

        assert_eq!(build_new_mission("five", "Tom", "France"), Err(vec!["Cat ID"]));
    }

    #[test]
    fn new_mission_gets_one_defaulted_target() {
        let mission = build_new_mission("", "Tom", "France").unwrap();
        assert_eq!(mission.targets.len(), 1);
        let target = &mission.targets[0];
        assert_eq!(target.id, None);
        assert_eq!(target.notes, DEFAULT_TARGET_NOTES);
        assert!(!target.state);
    }

    #[test]
    fn prompt_names_the_missing_fields() {
        assert_eq!(
            missing_fields_prompt(&["Mission ID", "Cat ID"]),
            "Please enter Mission ID and Cat ID."
        );
        assert_eq!(missing_fields_prompt(&["Target Name"]), "Please enter Target Name.");
    }
}
