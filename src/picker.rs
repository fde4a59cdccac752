//! Suggestion Picker State
//!
//! Turns free text into a reference to an existing ingredient or recipe.
//! The component in `components::suggestion_picker` feeds DOM events in and
//! reads the outcome back; nothing here touches the DOM or the network.
//!
//! Debounce: every accepted edit gets a new generation number and the caller
//! arms a timer carrying it. Only the timer whose generation is still pending
//! when it fires may issue a lookup. In-flight lookups are never cancelled,
//! so a slow response can still replace the list after a newer keystroke; the
//! next debounce cycle corrects it.

use crate::error::ApiError;
use crate::models::SuggestionItem;

/// Keys the picker reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Other,
}

impl PickerKey {
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowDown" => PickerKey::ArrowDown,
            "ArrowUp" => PickerKey::ArrowUp,
            "Enter" => PickerKey::Enter,
            _ => PickerKey::Other,
        }
    }
}

/// What the caller must do after an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Query too short: cancel any pending timer, no lookup
    Cleared,
    /// Re-arm the debounce timer with this generation
    Debounce(u64),
}

/// What the caller must do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Key consumed by the list; suppress the browser default
    Handled,
    /// Highlighted suggestion committed
    Committed(SuggestionItem),
    /// Not for the picker; let the browser handle it (e.g. form submit)
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickerState {
    query: String,
    suggestions: Vec<SuggestionItem>,
    highlighted: Option<usize>,
    selected: Option<SuggestionItem>,
    open: bool,
    generation: u64,
    pending: Option<u64>,
    min_chars: usize,
}

impl PickerState {
    pub fn new(min_chars: usize) -> Self {
        Self {
            min_chars,
            ..Default::default()
        }
    }

    /// Picker pre-filled with an existing choice (edit forms)
    pub fn with_selection(min_chars: usize, item: SuggestionItem) -> Self {
        Self {
            query: item.label.clone(),
            selected: Some(item),
            ..Self::new(min_chars)
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[SuggestionItem] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn selected(&self) -> Option<&SuggestionItem> {
        self.selected.as_ref()
    }

    /// List is shown only when open and non-empty
    pub fn is_open(&self) -> bool {
        self.open && !self.suggestions.is_empty()
    }

    /// Text typed into the input. Any edit drops the current selection.
    pub fn input(&mut self, text: &str) -> InputAction {
        self.query = text.to_string();
        self.selected = None;

        if text.trim().chars().count() < self.min_chars {
            self.suggestions.clear();
            self.highlighted = None;
            self.open = false;
            self.pending = None;
            return InputAction::Cleared;
        }

        self.generation += 1;
        self.pending = Some(self.generation);
        InputAction::Debounce(self.generation)
    }

    /// Debounce timer fired. Returns the query to look up if this timer is
    /// the one still pending.
    pub fn timer_fired(&mut self, generation: u64) -> Option<String> {
        if self.pending != Some(generation) {
            return None;
        }
        self.pending = None;
        Some(self.query.trim().to_string())
    }

    /// Lookup result (an empty list on transport failure)
    pub fn show_suggestions(&mut self, items: Vec<SuggestionItem>) {
        self.highlighted = if items.is_empty() { None } else { Some(0) };
        self.open = !items.is_empty();
        self.suggestions = items;
    }

    pub fn key(&mut self, key: PickerKey) -> KeyAction {
        if !self.is_open() {
            return KeyAction::Ignored;
        }
        let n = self.suggestions.len();
        match key {
            PickerKey::ArrowDown => {
                self.highlighted = Some(self.highlighted.map_or(0, |i| (i + 1) % n));
                KeyAction::Handled
            }
            PickerKey::ArrowUp => {
                self.highlighted = Some(self.highlighted.map_or(n - 1, |i| (i + n - 1) % n));
                KeyAction::Handled
            }
            PickerKey::Enter => match self.highlighted.and_then(|i| self.commit(i)) {
                Some(item) => KeyAction::Committed(item),
                None => KeyAction::Ignored,
            },
            PickerKey::Other => KeyAction::Ignored,
        }
    }

    /// Commit the suggestion at `index` (Enter or click)
    pub fn commit(&mut self, index: usize) -> Option<SuggestionItem> {
        let item = self.suggestions.get(index)?.clone();
        self.query = item.label.clone();
        self.selected = Some(item.clone());
        self.highlighted = Some(index);
        self.open = false;
        self.pending = None;
        Some(item)
    }

    /// Highlight under the pointer. Returns whether the highlight moved.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.suggestions.len() || self.highlighted == Some(index) {
            return false;
        }
        self.highlighted = Some(index);
        true
    }

    /// Pointer went elsewhere: hide the list, keep the selection
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Selection for a form that needs one
    pub fn require_selection(&self, message: &str) -> Result<&SuggestionItem, ApiError> {
        self.selected.as_ref().ok_or_else(|| ApiError::validation(message))
    }

    /// Selection for a form where the field may stay empty. Text that was
    /// typed but never resolved to a suggestion is still an error.
    pub fn optional_selection(&self, message: &str) -> Result<Option<&SuggestionItem>, ApiError> {
        match &self.selected {
            Some(item) => Ok(Some(item)),
            None if self.query.trim().is_empty() => Ok(None),
            None => Err(ApiError::validation(message)),
        }
    }

    /// Back to an empty input after a successful submit
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation,
            ..Self::new(self.min_chars)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, label: &str) -> SuggestionItem {
        SuggestionItem { id, label: label.to_string() }
    }

    fn with_three() -> PickerState {
        let mut picker = PickerState::new(2);
        let InputAction::Debounce(gen) = picker.input("to") else {
            panic!("expected debounce");
        };
        picker.timer_fired(gen);
        picker.show_suggestions(vec![item(1, "Tofu"), item(2, "Tomato"), item(3, "Tortilla")]);
        picker
    }

    #[test]
    fn test_short_query_clears_without_lookup() {
        let mut picker = with_three();
        assert_eq!(picker.input(" t "), InputAction::Cleared);
        assert!(picker.suggestions().is_empty());
        assert!(!picker.is_open());
        assert_eq!(picker.input(""), InputAction::Cleared);
    }

    #[test]
    fn test_short_query_cancels_pending_timer() {
        let mut picker = PickerState::new(2);
        let InputAction::Debounce(gen) = picker.input("tom") else {
            panic!("expected debounce");
        };
        picker.input("t");
        assert_eq!(picker.timer_fired(gen), None);
    }

    #[test]
    fn test_burst_of_keystrokes_issues_one_lookup_with_last_query() {
        let mut picker = PickerState::new(2);
        let gens: Vec<u64> = ["to", "tom", "toma"]
            .iter()
            .filter_map(|q| match picker.input(q) {
                InputAction::Debounce(g) => Some(g),
                InputAction::Cleared => None,
            })
            .collect();
        assert_eq!(gens.len(), 3);

        let lookups: Vec<String> = gens.iter().filter_map(|g| picker.timer_fired(*g)).collect();
        assert_eq!(lookups, vec!["toma".to_string()]);

        // The surviving timer cannot fire twice
        assert_eq!(picker.timer_fired(gens[2]), None);
    }

    #[test]
    fn test_first_suggestion_highlighted() {
        let picker = with_three();
        assert!(picker.is_open());
        assert_eq!(picker.highlighted(), Some(0));
    }

    #[test]
    fn test_empty_result_hides_list() {
        let mut picker = with_three();
        picker.show_suggestions(Vec::new());
        assert!(!picker.is_open());
        assert_eq!(picker.highlighted(), None);
        assert_eq!(picker.key(PickerKey::Enter), KeyAction::Ignored);
    }

    #[test]
    fn test_arrow_navigation_wraps() {
        let mut picker = with_three();
        assert_eq!(picker.key(PickerKey::ArrowUp), KeyAction::Handled);
        assert_eq!(picker.highlighted(), Some(2));
        assert_eq!(picker.key(PickerKey::ArrowDown), KeyAction::Handled);
        assert_eq!(picker.highlighted(), Some(0));
        picker.key(PickerKey::ArrowDown);
        picker.key(PickerKey::ArrowDown);
        assert_eq!(picker.highlighted(), Some(2));
        picker.key(PickerKey::ArrowDown);
        assert_eq!(picker.highlighted(), Some(0));
    }

    #[test]
    fn test_enter_commits_highlighted() {
        let mut picker = with_three();
        picker.key(PickerKey::ArrowDown);
        assert_eq!(picker.key(PickerKey::Enter), KeyAction::Committed(item(2, "Tomato")));
        assert_eq!(picker.query(), "Tomato");
        assert_eq!(picker.selected(), Some(&item(2, "Tomato")));
        assert!(!picker.is_open());

        // List closed: Enter goes back to the form
        assert_eq!(picker.key(PickerKey::Enter), KeyAction::Ignored);
    }

    #[test]
    fn test_click_commits_like_enter() {
        let mut picker = with_three();
        assert_eq!(picker.commit(2), Some(item(3, "Tortilla")));
        assert_eq!(picker.query(), "Tortilla");
        assert_eq!(picker.selected().map(|s| s.id), Some(3));
        assert_eq!(picker.commit(9), None);
    }

    #[test]
    fn test_edit_after_selection_clears_it() {
        let mut picker = with_three();
        picker.commit(1);
        picker.input("Tomatoes");
        assert_eq!(picker.selected(), None);
        assert!(picker.require_selection("pick one").is_err());
    }

    #[test]
    fn test_other_keys_leave_selection() {
        let mut picker = with_three();
        assert_eq!(picker.key(PickerKey::Other), KeyAction::Ignored);
        picker.commit(0);
        picker.key(PickerKey::Other);
        assert_eq!(picker.selected().map(|s| s.id), Some(1));
    }

    #[test]
    fn test_dismiss_keeps_selection() {
        let mut picker = with_three();
        picker.commit(0);
        picker.dismiss();
        assert_eq!(picker.selected().map(|s| s.id), Some(1));

        let mut picker = with_three();
        picker.dismiss();
        assert!(!picker.is_open());
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn test_stale_lookup_still_replaces_list() {
        let mut picker = with_three();
        picker.input("tortil");
        picker.show_suggestions(vec![item(1, "Tofu")]);
        assert_eq!(picker.suggestions(), &[item(1, "Tofu")]);
    }

    #[test]
    fn test_tomato_scenario() {
        let mut picker = PickerState::new(2);
        let InputAction::Debounce(gen) = picker.input("tom") else {
            panic!("expected debounce");
        };
        assert_eq!(picker.timer_fired(gen).as_deref(), Some("tom"));
        picker.show_suggestions(vec![item(5, "Tomato")]);
        assert_eq!(picker.key(PickerKey::Enter), KeyAction::Committed(item(5, "Tomato")));
        assert_eq!(picker.query(), "Tomato");
        assert_eq!(picker.require_selection("pick one").map(|s| s.id), Ok(5));
    }

    #[test]
    fn test_optional_selection() {
        let mut picker = PickerState::new(2);
        assert_eq!(picker.optional_selection("pick"), Ok(None));
        picker.input("ratat");
        assert_eq!(picker.optional_selection("pick"), Err(ApiError::validation("pick")));
    }

    #[test]
    fn test_with_selection_and_reset() {
        let mut picker = PickerState::with_selection(2, item(4, "Lasagna"));
        assert_eq!(picker.query(), "Lasagna");
        assert_eq!(picker.selected().map(|s| s.id), Some(4));
        picker.reset();
        assert_eq!(picker.query(), "");
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn test_hover_reports_only_real_moves() {
        let mut picker = with_three();
        assert_eq!(picker.highlighted(), Some(0));
        assert!(!picker.hover(0));
        assert!(picker.hover(2));
        assert!(!picker.hover(2));
        assert!(!picker.hover(7));
        assert_eq!(picker.highlighted(), Some(2));
    }
}
