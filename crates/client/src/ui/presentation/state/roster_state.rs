//! Roster state management using Dioxus signals
//!
//! `RosterModel` holds the single owned `Roster`, the current `FilteredView`
//! and the text in the filter box. `RosterState` wraps it in a signal for the
//! components. All filtering is delegated to the pure view functions in the
//! domain crate.

use dioxus::prelude::*;
use kartsim_domain::{Character, CharacterId, FilteredView, PowerChange, Roster};

use crate::application::services::CharacterService;
use crate::application::ServiceError;
use crate::ports::outbound::StorageProvider;

/// Message shown when a filter matches nothing
pub const NOT_FOUND_MESSAGE: &str = "That character is not in the list";

/// Where the roster load stands
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Roster, current view and filter input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RosterModel {
    roster: Roster,
    view: FilteredView,
    query: String,
    /// Bumped on every reset so the header can flash its loading banner
    resets: u32,
}

impl RosterModel {
    pub fn new(roster: Roster) -> Self {
        Self {
            view: FilteredView::all(&roster),
            roster,
            query: String::new(),
            resets: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn resets(&self) -> u32 {
        self.resets
    }

    /// Characters in the current view, resolved against the roster
    pub fn visible(&self) -> Vec<Character> {
        self.view.characters(&self.roster).cloned().collect()
    }

    /// True when the last filter matched nothing
    pub fn not_found(&self) -> bool {
        self.view.no_match()
    }

    /// Exact-name filter over the full roster, from the current query
    pub fn submit_filter(&mut self) {
        self.view = FilteredView::exact(&self.roster, &self.query);
        tracing::debug!(query = %self.query, matches = self.view.len(), "Exact filter");
    }

    /// Record a keystroke and narrow the currently displayed subset
    pub fn autocomplete(&mut self, input: String) {
        self.view = self.view.narrow(&self.roster, &input);
        self.query = input;
    }

    /// Clear the query and show the whole roster again
    pub fn reset(&mut self) {
        self.query.clear();
        self.view = FilteredView::all(&self.roster);
        self.resets += 1;
    }

    /// Raise one character's power through the character service
    pub fn increment<S: StorageProvider>(
        &mut self,
        service: &CharacterService<S>,
        id: CharacterId,
    ) -> Result<PowerChange, ServiceError> {
        service.increment_power(&mut self.roster, id)
    }
}

#[derive(Clone, Copy)]
pub struct RosterState {
    pub model: Signal<RosterModel>,
    pub status: Signal<LoadStatus>,
}

impl RosterState {
    pub fn new() -> Self {
        Self {
            model: Signal::new(RosterModel::default()),
            status: Signal::new(LoadStatus::Loading),
        }
    }

    pub fn set_loaded(&mut self, roster: Roster) {
        self.model.set(RosterModel::new(roster));
        self.status.set(LoadStatus::Ready);
    }

    pub fn set_failed(&mut self, message: impl Into<String>) {
        self.status.set(LoadStatus::Failed(message.into()));
    }

    pub fn submit_filter(&mut self) {
        self.model.write().submit_filter();
    }

    pub fn autocomplete(&mut self, input: String) {
        self.model.write().autocomplete(input);
    }

    pub fn reset(&mut self) {
        self.model.write().reset();
    }

    pub fn increment<S: StorageProvider>(
        &mut self,
        service: &CharacterService<S>,
        id: CharacterId,
    ) -> Result<PowerChange, ServiceError> {
        self.model.write().increment(service, id)
    }
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the RosterState from context
pub fn use_roster_state() -> RosterState {
    use_context::<RosterState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::infrastructure::platform::mock::MockStorageProvider;
    use crate::infrastructure::testing::fixtures::character;
    use crate::ports::outbound::MockRawApiPort;
    use std::sync::Arc;

    fn model() -> RosterModel {
        RosterModel::new(
            Roster::new(vec![
                character(1, "Peach", 40),
                character(2, "Mario", 50),
                character(3, "Luigi", 50),
                character(6, "Toad", 100),
            ])
            .unwrap(),
        )
    }

    fn names(model: &RosterModel) -> Vec<String> {
        model.visible().into_iter().map(|c| c.name).collect()
    }

    fn service() -> (CharacterService<MockStorageProvider>, MockStorageProvider) {
        let storage = MockStorageProvider::new();
        let api = Api::new(Arc::new(MockRawApiPort::new()));
        (
            CharacterService::new(api, storage.clone(), "/assets/data/characters.json"),
            storage,
        )
    }

    #[test]
    fn new_model_shows_whole_roster() {
        let m = model();
        assert_eq!(names(&m), vec!["Peach", "Mario", "Luigi", "Toad"]);
        assert!(!m.not_found());
        assert_eq!(m.resets(), 0);
    }

    #[test]
    fn autocomplete_records_query_and_narrows() {
        let mut m = model();
        m.autocomplete("lu".to_string());
        assert_eq!(m.query(), "lu");
        assert_eq!(names(&m).len(), 4);

        m.autocomplete("lui".to_string());
        assert_eq!(names(&m), vec!["Luigi"]);
    }

    #[test]
    fn submit_without_match_reports_not_found() {
        let mut m = model();
        m.autocomplete("Wario".to_string());
        m.submit_filter();
        assert!(m.visible().is_empty());
        assert!(m.not_found());
    }

    #[test]
    fn submit_empty_query_shows_everything() {
        let mut m = model();
        m.autocomplete("mar".to_string());
        m.autocomplete(String::new());
        m.submit_filter();
        assert_eq!(names(&m).len(), 4);
    }

    #[test]
    fn reset_clears_query_and_message() {
        let mut m = model();
        m.autocomplete("xyz".to_string());
        assert!(m.not_found());

        m.reset();
        assert_eq!(m.query(), "");
        assert!(!m.not_found());
        assert_eq!(names(&m), vec!["Peach", "Mario", "Luigi", "Toad"]);
        assert_eq!(m.resets(), 1);

        m.reset();
        assert_eq!(m.resets(), 2);
    }

    #[test]
    fn increment_updates_the_visible_gauge() {
        let mut m = model();
        let (svc, storage) = service();
        m.autocomplete("mar".to_string());

        let change = m.increment(&svc, CharacterId::new(2)).unwrap();

        assert!(matches!(change, PowerChange::Raised { .. }));
        let mario = &m.visible()[0];
        assert_eq!(mario.power().value(), 60);
        assert_eq!(mario.power().percent_label(), "60%");
        assert_eq!(storage.load("Mario").as_deref(), Some("60"));
    }

    #[test]
    fn increment_at_max_changes_nothing() {
        let mut m = model();
        let (svc, storage) = service();

        let change = m.increment(&svc, CharacterId::new(6)).unwrap();

        assert_eq!(change, PowerChange::AlreadyMax);
        let toad = m.visible().into_iter().find(|c| c.name == "Toad").unwrap();
        assert_eq!(toad.power().value(), 100);
        assert!(storage.is_empty());
    }
}
