//! Render commands emitted after each transition

use std::fmt;

/// Top-level panel of the render target
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Contact,
    Submenu(String),
    Detail,
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewId::Home => f.write_str("view-home"),
            ViewId::Contact => f.write_str("view-kontakt"),
            ViewId::Submenu(section) => write!(f, "view-submenu-{section}"),
            ViewId::Detail => f.write_str("view-detail"),
        }
    }
}

/// Text elements the render step writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    BreadcrumbSection,
    BreadcrumbItem,
    DetailTitle,
    /// "current/total" counter of the detail view
    DetailPosition,
}

impl ElementId {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::BreadcrumbSection => "breadcrumb-section",
            ElementId::BreadcrumbItem => "breadcrumb-item",
            ElementId::DetailTitle => "detail-title",
            ElementId::DetailPosition => "detail-position",
        }
    }
}

/// Detail view buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Prev,
    Next,
    Back,
}

impl ButtonId {
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonId::Prev => "btn-prev",
            ButtonId::Next => "btn-next",
            ButtonId::Back => "btn-back",
        }
    }
}

/// Element an animation is requested on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnimationTarget {
    /// Tile grid of a section's submenu
    SubmenuGrid(String),
    /// Split container of the detail view
    DetailContainer,
    /// The carousel's slide list
    Carousel,
}

impl fmt::Display for AnimationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationTarget::SubmenuGrid(section) => {
                write!(f, "view-submenu-{section} .submenu-grid")
            }
            AnimationTarget::DetailContainer => f.write_str("view-detail .split-container"),
            AnimationTarget::Carousel => f.write_str("slick-list"),
        }
    }
}

/// Cosmetic animation hints. None of them carries state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Hide every tile, then reveal them one after another
    Stagger,
    /// Slide the detail in from the left
    SlidePrev,
    /// Slide the detail in from the right
    SlideNext,
    MotionBlurOn,
    MotionBlurOff,
}

/// A single mutation of the render target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    SetVisible { view: ViewId, visible: bool },
    SetElementText { element: ElementId, text: String },
    SetButtonEnabled { button: ButtonId, enabled: bool },
    SetMenuActive { menu_id: String, active: bool },
    RequestAnimation { target: AnimationTarget, kind: AnimationKind },
}

impl RenderCommand {
    pub fn animation(target: AnimationTarget, kind: AnimationKind) -> Self {
        Self::RequestAnimation { target, kind }
    }

    pub fn is_animation(&self) -> bool {
        matches!(self, RenderCommand::RequestAnimation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_ids_match_page_element_ids() {
        assert_eq!(ViewId::Home.to_string(), "view-home");
        assert_eq!(ViewId::Contact.to_string(), "view-kontakt");
        assert_eq!(ViewId::Detail.to_string(), "view-detail");
        assert_eq!(
            ViewId::Submenu("rower".to_string()).to_string(),
            "view-submenu-rower"
        );
    }

    #[test]
    fn element_and_button_ids() {
        assert_eq!(ElementId::BreadcrumbItem.as_str(), "breadcrumb-item");
        assert_eq!(ButtonId::Back.as_str(), "btn-back");
    }
}
