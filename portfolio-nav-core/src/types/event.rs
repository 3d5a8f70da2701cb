//! Input events consumed by the state machine

/// Keyboard keys the navigation layer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Navigation event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Top menu link activated
    SelectMenu(String),
    /// Submenu tile activated
    SelectItem { section: String, item_id: u32 },
    /// `<` button
    NavigatePrev,
    /// `>` button
    NavigateNext,
    /// `<<` button
    NavigateBack,
    KeyPressed(Key),
    /// Carousel is about to move to another slide
    SlideChangeStarted,
    /// Carousel settled on its new slide
    SlideChangeFinished,
}

impl NavEvent {
    pub fn select_menu(menu_id: impl Into<String>) -> Self {
        Self::SelectMenu(menu_id.into())
    }

    pub fn select_item(section: impl Into<String>, item_id: u32) -> Self {
        Self::SelectItem {
            section: section.into(),
            item_id,
        }
    }
}
