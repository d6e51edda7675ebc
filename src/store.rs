//! Global View State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. Holds the last
//! successfully fetched mission list plus the loading flag, the blocking
//! error, and the transient notices. The mission list is only ever replaced
//! wholesale after a refetch, never merged.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::models::{Mission, NewMission};

/// How long a transient notice stays on screen before auto-dismissing.
const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// A dismissable transient alert.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}

/// Global view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last successfully fetched mission list
    pub missions: Vec<Mission>,
    /// A list fetch is in flight
    pub loading: bool,
    /// Blocking error from the last list fetch; replaces the whole view
    pub error: Option<String>,
    /// Transient alerts from failed or succeeded mutations
    pub notices: Vec<Notice>,
    /// Next notice id
    pub next_notice_id: u32,
}

impl AppState {
    /// Initial state: loading until the first fetch settles.
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the mission list wholesale
pub fn store_replace_missions(store: &AppStore, missions: Vec<Mission>) {
    *store.missions().write() = missions;
}

/// Push a transient notice, returning its id
pub fn store_push_notice(store: &AppStore, message: String) -> u32 {
    let id = store.next_notice_id().get_untracked();
    *store.next_notice_id().write() = id + 1;
    store.notices().write().push(Notice { id, message });
    id
}

/// Remove a notice by id (dismiss button or timeout, whichever fires first)
pub fn store_dismiss_notice(store: &AppStore, notice_id: u32) {
    store.notices().write().retain(|notice| notice.id != notice_id);
}

/// Push a transient notice that auto-dismisses after a few seconds
pub fn notify(store: &AppStore, message: impl Into<String>) {
    let id = store_push_notice(store, message.into());
    let store = *store;
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        store_dismiss_notice(&store, id);
    });
}

// ========================
// Actions
// ========================

/// Refetch the mission list. Failure here is blocking: it sets the error
/// that swaps the whole view for the fallback screen.
pub async fn refresh(store: AppStore) {
    store.loading().set(true);
    store.error().set(None);
    match api::list_missions().await {
        Ok(missions) => store_replace_missions(&store, missions),
        Err(err) => store.error().set(Some(err.to_string())),
    }
    store.loading().set(false);
}

/// Assign a cat to a mission, then refetch. Returns true on success so the
/// form can clear itself. Failure is transient and leaves the list alone.
pub async fn assign_cat(store: AppStore, mission_id: u32, cat_id: u32) -> bool {
    match api::assign_cat(mission_id, cat_id).await {
        Ok(_) => {
            notify(&store, "Cat assigned successfully!");
            refresh(store).await;
            true
        }
        Err(err) => {
            notify(&store, format!("Error assigning cat: {}", err));
            false
        }
    }
}

/// Create a mission with its single target, then refetch.
pub async fn create_mission(store: AppStore, mission: &NewMission) -> bool {
    match api::create_mission(mission).await {
        Ok(_) => {
            notify(&store, "Mission created successfully!");
            refresh(store).await;
            true
        }
        Err(err) => {
            notify(&store, format!("Error creating mission: {}", err));
            false
        }
    }
}

/// Mark a mission completed, then refetch.
pub async fn complete_mission(store: AppStore, mission_id: u32) {
    match api::complete_mission(mission_id).await {
        Ok(_) => {
            notify(&store, "Mission completed successfully!");
            refresh(store).await;
        }
        Err(err) => notify(&store, format!("Error completing mission: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_mission(id: u32) -> Mission {
        Mission { id, cat: None, state: false, targets: vec![] }
    }

    #[test]
    fn replace_missions_leaves_no_stale_entries() {
        let store = Store::new(AppState::default());
        store_replace_missions(&store, vec![make_mission(1), make_mission(2)]);
        assert_eq!(store.missions().read_untracked().len(), 2);

        store_replace_missions(&store, vec![make_mission(3)]);
        let missions = store.missions().read_untracked();
        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].id, 3);
    }

    #[test]
    fn notices_get_unique_ids_and_dismiss_by_id() {
        let store = Store::new(AppState::default());
        let first = store_push_notice(&store, "one".to_string());
        let second = store_push_notice(&store, "two".to_string());
        assert_ne!(first, second);
        assert_eq!(store.notices().read_untracked().len(), 2);

        store_dismiss_notice(&store, first);
        let notices = store.notices().read_untracked();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "two");
    }
}
