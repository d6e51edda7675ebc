//! UI Components
//!
//! Leptos components for the mission control page.

mod assign_cat_form;
mod new_mission_form;
mod mission_list;
mod mission_card;
mod notice_area;
mod error_page;

pub use assign_cat_form::AssignCatForm;
pub use new_mission_form::NewMissionForm;
pub use mission_list::MissionList;
pub use mission_card::MissionCard;
pub use notice_area::NoticeArea;
pub use error_page::ErrorPage;

/// Blocking browser prompt for required-field failures.
pub(crate) fn blocking_prompt(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
