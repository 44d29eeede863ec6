use crate::catalog::{self, SuggestionIndex, POPULAR};
use crate::location::Navigator;
use crate::selection::{Selection, INGREDIENTS_PARAM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(&'static str),
    Unknown,
    Duplicate(&'static str),
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Active,
    Locked,
}

#[derive(Default)]
pub struct IngredientSearch {
    selection: Selection,
    pending: String,
    suggestions: Vec<&'static str>,
    index: SuggestionIndex,
    synced_param: Option<String>,
}

impl IngredientSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derives the selection when the parameter differs from the last value
    /// seen. Returns whether the selection was replaced.
    pub fn sync_from_location<N: Navigator>(&mut self, nav: &N) -> bool {
        let param = nav.location().query().get(INGREDIENTS_PARAM);
        if param == self.synced_param.as_deref() {
            return false;
        }

        self.selection = Selection::from_param(param);
        self.synced_param = param.map(str::to_owned);
        log::debug!("Selection synced from location: {:?}", param);
        true
    }

    pub fn set_input(&mut self, value: &str) {
        self.pending = value.to_lowercase();
        self.suggestions = self.index.search(&self.pending, &self.selection);
    }

    pub fn add<N: Navigator>(&mut self, candidate: &str, nav: &mut N) -> AddOutcome {
        let outcome = match catalog::canonical(candidate) {
            None => AddOutcome::Unknown,
            Some(entry) if self.selection.contains(entry) => AddOutcome::Duplicate(entry),
            Some(_) if self.selection.is_full() => AddOutcome::Full,
            Some(entry) => AddOutcome::Added(entry),
        };

        match outcome {
            AddOutcome::Added(entry) => {
                let next = self.selection.with_added(entry);
                self.publish(next, nav);
                self.pending.clear();
                self.suggestions.clear();
                log::info!("Added ingredient {entry}");
            }
            rejected => log::debug!("Ignored add of {candidate:?}: {rejected:?}"),
        }
        outcome
    }

    pub fn submit<N: Navigator>(&mut self, nav: &mut N) -> Option<AddOutcome> {
        if self.pending.is_empty() {
            return None;
        }
        let candidate = self.pending.clone();
        Some(self.add(&candidate, nav))
    }

    pub fn remove<N: Navigator>(&mut self, entry: &str, nav: &mut N) -> bool {
        let removed = self.selection.contains(entry);
        let next = self.selection.without(entry);
        self.publish(next, nav);
        if removed {
            log::info!("Removed ingredient {entry}");
        }
        removed
    }

    fn publish<N: Navigator>(&mut self, next: Selection, nav: &mut N) {
        let mut location = nav.location().clone();
        let param = next.to_param();
        match param.as_deref() {
            Some(value) => location.query_mut().set(INGREDIENTS_PARAM, value),
            None => location.query_mut().delete(INGREDIENTS_PARAM),
        }
        nav.push(location);

        self.selection = next;
        self.synced_param = param;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    pub fn input_state(&self) -> InputState {
        if self.selection.is_full() {
            InputState::Locked
        } else {
            InputState::Active
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self.input_state() {
            InputState::Active => "Add up to 5 ingredients...",
            InputState::Locked => "Maximum 5 ingredients reached",
        }
    }

    /// Whether the explicit Add action is available. Requires an exact match,
    /// unlike the substring match behind suggestions.
    pub fn can_add(&self) -> bool {
        !self.pending.is_empty()
            && self.input_state() == InputState::Active
            && catalog::is_known(&self.pending)
    }

    pub fn popular_tags(&self) -> Vec<&'static str> {
        if self.selection.is_full() {
            return Vec::new();
        }
        POPULAR
            .iter()
            .copied()
            .filter(|entry| !self.selection.contains(entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{History, Location};
    use proptest::prelude::*;
    use rstest::rstest;

    fn history_at(address: &str) -> History {
        History::new(Location::parse(address).unwrap())
    }

    fn synced(history: &History) -> IngredientSearch {
        let mut search = IngredientSearch::new();
        search.sync_from_location(history);
        search
    }

    fn selected(search: &IngredientSearch) -> Vec<&str> {
        search.selection().iter().collect()
    }

    fn full_history() -> History {
        history_at("/?ingredients=chicken,beef,pasta,rice,potato")
    }

    #[test]
    fn test_typing_chi_suggests_chicken() {
        let history = History::default();
        let mut search = synced(&history);
        search.set_input("chi");
        assert_eq!(search.suggestions(), &["chicken"]);
    }

    #[test]
    fn test_single_character_suggests_nothing() {
        let mut search = IngredientSearch::new();
        search.set_input("c");
        assert!(search.suggestions().is_empty());
    }

    #[test]
    fn test_input_is_stored_lowercase() {
        let mut search = IngredientSearch::new();
        search.set_input("ToMa");
        assert_eq!(search.pending(), "toma");
        assert_eq!(search.suggestions(), &["tomato"]);
    }

    #[test]
    fn test_full_selection_locks_everything() {
        let mut history = full_history();
        let mut search = synced(&history);
        let before = search.selection().clone();

        assert_eq!(search.input_state(), InputState::Locked);
        assert_eq!(search.placeholder(), "Maximum 5 ingredients reached");
        assert!(search.popular_tags().is_empty());

        let attempts = [
            ("cheese", AddOutcome::Full),
            ("CHEESE", AddOutcome::Full),
            ("chicken", AddOutcome::Duplicate("chicken")),
            ("nope", AddOutcome::Unknown),
        ];
        for (candidate, expected) in attempts {
            assert_eq!(search.add(candidate, &mut history), expected);
        }
        assert_eq!(search.selection(), &before);
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_removing_last_entry_deletes_param() {
        let mut history = history_at("/?ingredients=chicken");
        let mut search = synced(&history);

        assert!(search.remove("chicken", &mut history));

        assert_eq!(search.selection(), &Selection::default());
        assert_eq!(history.location().query().get(INGREDIENTS_PARAM), None);
        assert_eq!(history.location().to_string(), "/");
    }

    #[test]
    fn test_add_stores_canonical_form() {
        let mut history = History::default();
        let mut search = synced(&history);

        assert_eq!(search.add("CHEESE", &mut history), AddOutcome::Added("cheese"));
        assert_eq!(selected(&search), vec!["cheese"]);
        assert_eq!(history.location().query().get(INGREDIENTS_PARAM), Some("cheese"));
    }

    #[test]
    fn test_successful_add_clears_input_and_suggestions() {
        let mut history = History::default();
        let mut search = synced(&history);
        search.set_input("rice");
        assert_eq!(search.suggestions(), &["rice"]);

        assert_eq!(search.submit(&mut history), Some(AddOutcome::Added("rice")));
        assert_eq!(search.pending(), "");
        assert!(search.suggestions().is_empty());
    }

    #[test]
    fn test_rejected_add_keeps_input() {
        let mut history = History::default();
        let mut search = synced(&history);
        search.set_input("chi");

        assert_eq!(search.submit(&mut history), Some(AddOutcome::Unknown));
        assert_eq!(search.pending(), "chi");
        assert_eq!(search.suggestions(), &["chicken"]);
        assert_eq!(search.selection(), &Selection::default());
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_submit_with_empty_input_does_nothing() {
        let mut history = History::default();
        let mut search = synced(&history);
        assert_eq!(search.submit(&mut history), None);
        assert!(!history.can_go_back());
    }

    #[rstest]
    #[case("chicken")]
    #[case("Chicken")]
    #[case("CHICKEN")]
    fn test_duplicate_add_is_noop(#[case] candidate: &str) {
        let mut history = history_at("/?ingredients=chicken,rice");
        let mut search = synced(&history);

        assert_eq!(search.add(candidate, &mut history), AddOutcome::Duplicate("chicken"));
        assert_eq!(selected(&search), vec!["chicken", "rice"]);
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_remove_then_add_appends_at_end() {
        let mut history = history_at("/?ingredients=beef,rice,egg");
        let mut search = synced(&history);

        search.remove("beef", &mut history);
        search.add("beef", &mut history);

        assert_eq!(selected(&search), vec!["rice", "egg", "beef"]);
        assert_eq!(
            history.location().query().get(INGREDIENTS_PARAM),
            Some("rice,egg,beef")
        );
    }

    #[test]
    fn test_mutations_keep_other_params() {
        let mut history = history_at("/recipes?sort=fast&ingredients=rice&page=3");
        let mut search = synced(&history);

        search.add("egg", &mut history);
        assert_eq!(
            history.location().to_string(),
            "/recipes?sort=fast&ingredients=rice%2Cegg&page=3"
        );

        search.remove("rice", &mut history);
        search.remove("egg", &mut history);
        assert_eq!(history.location().to_string(), "/recipes?sort=fast&page=3");
    }

    #[test]
    fn test_fifth_add_locks_and_removal_unlocks() {
        let mut history = history_at("/?ingredients=chicken,beef,pasta,rice");
        let mut search = synced(&history);
        assert_eq!(search.input_state(), InputState::Active);

        search.add("egg", &mut history);
        assert_eq!(search.input_state(), InputState::Locked);

        search.remove("beef", &mut history);
        assert_eq!(search.input_state(), InputState::Active);
        assert_eq!(search.placeholder(), "Add up to 5 ingredients...");
    }

    #[test]
    fn test_location_change_replaces_selection() {
        let mut history = History::default();
        let mut search = synced(&history);
        search.add("rice", &mut history);
        search.add("egg", &mut history);

        history.back();
        assert!(search.sync_from_location(&history));
        assert_eq!(selected(&search), vec!["rice"]);

        history.back();
        assert!(search.sync_from_location(&history));
        assert_eq!(search.selection(), &Selection::default());
    }

    #[test]
    fn test_resync_after_own_push_is_unchanged() {
        let mut history = History::default();
        let mut search = synced(&history);
        search.add("rice", &mut history);
        assert!(!search.sync_from_location(&history));
    }

    #[test]
    fn test_can_add_requires_exact_match() {
        let mut search = IngredientSearch::new();
        assert!(!search.can_add());

        search.set_input("chick");
        assert!(!search.suggestions().is_empty());
        assert!(!search.can_add());

        search.set_input("Chicken");
        assert!(search.can_add());
    }

    #[test]
    fn test_can_add_false_when_locked() {
        let mut search = synced(&full_history());
        search.set_input("cheese");
        assert!(!search.can_add());
    }

    #[test]
    fn test_popular_tags_skip_selected() {
        let history = history_at("/?ingredients=tomato,onion");
        let search = synced(&history);
        assert_eq!(search.popular_tags(), vec!["chicken", "cheese", "potato"]);
    }

    #[test]
    fn test_suggestions_skip_selected() {
        let history = history_at("/?ingredients=potato");
        let mut search = synced(&history);
        search.set_input("to");
        assert_eq!(search.suggestions(), &["tomato"]);
    }

    proptest! {
        #[test]
        fn unknown_candidates_leave_selection_unchanged(candidate in "\\PC{0,16}") {
            prop_assume!(!catalog::is_known(&candidate));
            let mut history = history_at("/?ingredients=rice");
            let mut search = synced(&history);
            let before = search.selection().clone();

            prop_assert_eq!(search.add(&candidate, &mut history), AddOutcome::Unknown);
            prop_assert_eq!(search.selection(), &before);
            prop_assert!(!history.can_go_back());
        }

        #[test]
        fn full_selection_rejects_every_candidate(
            idx in 0..catalog::VOCABULARY.len(),
            upper in any::<bool>(),
        ) {
            let mut history = full_history();
            let mut search = synced(&history);
            let before = search.selection().clone();
            let entry = catalog::VOCABULARY[idx];
            let candidate = if upper { entry.to_uppercase() } else { entry.to_owned() };

            let outcome = search.add(&candidate, &mut history);
            prop_assert!(!matches!(outcome, AddOutcome::Added(_)));
            prop_assert_eq!(search.selection(), &before);
        }
    }
}
