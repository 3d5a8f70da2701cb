//! Navigation state definition

use serde::{Deserialize, Serialize};

use super::catalog::HOME_MENU;

/// Currently visible top-level panel
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// Landing panel
    #[default]
    Home,
    /// Tile grid of one section
    Submenu { section: String },
    /// Single item of a section, browsable with prev/next
    Detail { section: String, index: usize },
    /// Contact panel
    Contact,
}

impl View {
    /// Section shown by this view, if any
    pub fn section(&self) -> Option<&str> {
        match self {
            View::Submenu { section } | View::Detail { section, .. } => Some(section.as_str()),
            View::Home | View::Contact => None,
        }
    }
}

/// The single mutable navigation record.
///
/// `current_section` is `Some` whenever the view is a submenu or a detail,
/// and `current_index` addresses an item of that section whenever the view
/// is a detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub current_view: View,
    /// Last activated top-level menu link
    pub current_menu: String,
    pub current_section: Option<String>,
    pub current_index: usize,
    pub previous_view: Option<View>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            current_view: View::Home,
            current_menu: HOME_MENU.to_string(),
            current_section: None,
            current_index: 0,
            previous_view: None,
        }
    }

    /// Switch the visible view, remembering the one it replaces
    pub(crate) fn show(&mut self, view: View) {
        let previous = std::mem::replace(&mut self.current_view, view);
        self.previous_view = Some(previous);
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
