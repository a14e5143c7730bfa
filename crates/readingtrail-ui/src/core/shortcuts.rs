//! Keyboard shortcuts for the catalog search box.

/// Selector for the search input.
pub const SEARCH_INPUT_SELECTOR: &str = "input[name=\"search\"]";
/// Selector for the catalog search form.
pub const SEARCH_FORM_SELECTOR: &str = "form[action*=\"index\"]";

/// Shortcut bound to a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    /// `Ctrl/Cmd + K`: focus the search input.
    FocusSearch,
    /// `Escape`: clear the focused search input.
    ClearSearch,
}

impl ShortcutAction {
    /// Match a key press.
    #[must_use]
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        if (ctrl || meta) && key == "k" {
            return Some(Self::FocusSearch);
        }
        if key == "Escape" {
            return Some(Self::ClearSearch);
        }
        None
    }

    /// Whether the browser default must be suppressed.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::FocusSearch)
    }
}

/// Escape only clears a search input that is focused and non-empty.
#[must_use]
pub const fn should_clear(focused: bool, value: &str) -> bool {
    focused && !value.is_empty()
}
