//! User-menu visibility state machine

use serde::{Deserialize, Serialize};

/// Visibility of the user menu
///
/// `Hovered` and `Focused` are both shown; they differ in which event
/// hides the menu again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityState {
    #[default]
    Hidden,
    /// Shown because the pointer is over the trigger region
    Hovered,
    /// Shown because keyboard focus is inside the trigger region
    Focused,
}

/// Input events that drive `VisibilityState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityEvent {
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
}

impl VisibilityState {
    pub fn is_shown(&self) -> bool {
        !matches!(self, VisibilityState::Hidden)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityState::Hidden => "hidden",
            VisibilityState::Hovered => "hovered",
            VisibilityState::Focused => "focused",
        }
    }

    /// Next state after `event`
    ///
    /// Focus entering a hover-opened menu hands it over to the keyboard, so
    /// the links stay while focus is inside. Otherwise only the source that
    /// opened the menu can close it.
    pub fn apply(self, event: VisibilityEvent) -> Self {
        use VisibilityEvent::*;
        use VisibilityState::*;

        match (self, event) {
            (Hidden, PointerEnter) => Hovered,
            (Hidden | Hovered, FocusIn) => Focused,
            (Hovered, PointerLeave) => Hidden,
            (Focused, FocusOut) => Hidden,
            (state, _) => state,
        }
    }
}
