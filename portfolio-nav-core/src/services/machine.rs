//! Navigation state machine
//!
//! `transition` is a pure function: it never touches a render target and
//! never mutates the state it is given. A rejected event yields an error and
//! the caller keeps its old state; an event that does not apply in the
//! current view yields an empty transition.

use log::debug;

use super::projection::render_commands;
use crate::error::{NavError, NavResult};
use crate::types::{
    AnimationKind, AnimationTarget, Catalog, Key, NavEvent, NavigationState, RenderCommand, View,
    CONTACT_MENU, HOME_MENU,
};

/// Result of feeding one event to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State to commit once `commands` are applied
    pub state: NavigationState,
    /// Render commands to apply, animation hints last
    pub commands: Vec<RenderCommand>,
}

impl Transition {
    fn unchanged(state: &NavigationState) -> Self {
        Self {
            state: state.clone(),
            commands: Vec::new(),
        }
    }

    fn cosmetic(state: &NavigationState, command: RenderCommand) -> Self {
        Self {
            state: state.clone(),
            commands: vec![command],
        }
    }

    fn enter(
        state: NavigationState,
        catalog: &Catalog,
        animation: RenderCommand,
    ) -> NavResult<Self> {
        let mut commands = render_commands(&state, catalog)?;
        commands.push(animation);
        Ok(Self { state, commands })
    }

    /// Whether nothing needs to be rendered
    pub fn is_noop(&self) -> bool {
        self.commands.is_empty()
    }

    /// Animation hints carried by this transition
    pub fn animations(&self) -> impl Iterator<Item = &RenderCommand> {
        self.commands.iter().filter(|c| c.is_animation())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Prev,
    Next,
}

/// Compute the next state and the render commands for `event`
pub fn transition(
    state: &NavigationState,
    catalog: &Catalog,
    event: &NavEvent,
) -> NavResult<Transition> {
    match event {
        NavEvent::SelectMenu(menu_id) => select_menu(state, catalog, menu_id),
        NavEvent::SelectItem { section, item_id } => select_item(state, catalog, section, *item_id),
        NavEvent::NavigatePrev | NavEvent::KeyPressed(Key::ArrowLeft) => {
            step(state, catalog, Direction::Prev)
        }
        NavEvent::NavigateNext | NavEvent::KeyPressed(Key::ArrowRight) => {
            step(state, catalog, Direction::Next)
        }
        NavEvent::NavigateBack => navigate_back(state, catalog),
        NavEvent::KeyPressed(Key::Escape) => handle_escape(state, catalog),
        NavEvent::SlideChangeStarted => Ok(Transition::cosmetic(
            state,
            RenderCommand::animation(AnimationTarget::Carousel, AnimationKind::MotionBlurOn),
        )),
        NavEvent::SlideChangeFinished => Ok(Transition::cosmetic(
            state,
            RenderCommand::animation(AnimationTarget::Carousel, AnimationKind::MotionBlurOff),
        )),
    }
}

fn select_menu(state: &NavigationState, catalog: &Catalog, menu_id: &str) -> NavResult<Transition> {
    debug!("Menu: {menu_id}");
    let mut next = state.clone();

    match menu_id {
        HOME_MENU => {
            next.current_menu = HOME_MENU.to_string();
            next.current_section = None;
            next.show(View::Home);
            let commands = render_commands(&next, catalog)?;
            Ok(Transition { state: next, commands })
        }
        CONTACT_MENU => {
            next.current_menu = CONTACT_MENU.to_string();
            next.current_section = None;
            next.show(View::Contact);
            let commands = render_commands(&next, catalog)?;
            Ok(Transition { state: next, commands })
        }
        section if catalog.contains_section(section) => {
            next.current_menu = section.to_string();
            next.current_section = Some(section.to_string());
            next.current_index = 0;
            next.show(View::Submenu {
                section: section.to_string(),
            });
            Transition::enter(next, catalog, stagger(section))
        }
        unknown => Err(NavError::UnknownMenu(unknown.to_string())),
    }
}

fn select_item(
    state: &NavigationState,
    catalog: &Catalog,
    section: &str,
    item_id: u32,
) -> NavResult<Transition> {
    debug!("Tile: {section} - {item_id}");
    let index = catalog
        .require_section(section)?
        .index_of(item_id)
        .ok_or_else(|| NavError::UnknownItem {
            section: section.to_string(),
            item_id,
        })?;

    let mut next = state.clone();
    next.current_section = Some(section.to_string());
    next.current_index = index;
    next.show(View::Detail {
        section: section.to_string(),
        index,
    });

    let commands = render_commands(&next, catalog)?;
    Ok(Transition { state: next, commands })
}

fn step(state: &NavigationState, catalog: &Catalog, direction: Direction) -> NavResult<Transition> {
    let View::Detail { section, index } = &state.current_view else {
        return Ok(Transition::unchanged(state));
    };
    let len = catalog.require_section(section)?.len();

    let target = match direction {
        Direction::Prev if *index > 0 => index - 1,
        Direction::Next if index + 1 < len => index + 1,
        _ => return Ok(Transition::unchanged(state)),
    };
    debug!("Navigation: {}/{len}", target + 1);

    let mut next = state.clone();
    next.current_index = target;
    next.show(View::Detail {
        section: section.clone(),
        index: target,
    });

    let kind = match direction {
        Direction::Prev => AnimationKind::SlidePrev,
        Direction::Next => AnimationKind::SlideNext,
    };
    Transition::enter(
        next,
        catalog,
        RenderCommand::animation(AnimationTarget::DetailContainer, kind),
    )
}

fn navigate_back(state: &NavigationState, catalog: &Catalog) -> NavResult<Transition> {
    let View::Detail { section, .. } = &state.current_view else {
        return Ok(Transition::unchanged(state));
    };
    debug!("Back to submenu: {section}");

    let section = section.clone();
    let mut next = state.clone();
    next.current_section = Some(section.clone());
    next.show(View::Submenu {
        section: section.clone(),
    });
    Transition::enter(next, catalog, stagger(&section))
}

fn handle_escape(state: &NavigationState, catalog: &Catalog) -> NavResult<Transition> {
    match &state.current_view {
        View::Detail { .. } => navigate_back(state, catalog),
        View::Submenu { .. } => select_menu(state, catalog, HOME_MENU),
        View::Home | View::Contact => Ok(Transition::unchanged(state)),
    }
}

fn stagger(section: &str) -> RenderCommand {
    RenderCommand::animation(
        AnimationTarget::SubmenuGrid(section.to_string()),
        AnimationKind::Stagger,
    )
}
