//! Navigation controller: owns the state and drives a render target

use log::{debug, error, info, warn};

use super::machine::{transition, Transition};
use super::projection::render_commands;
use crate::error::{NavError, NavResult};
use crate::traits::RenderTarget;
use crate::types::{Catalog, Key, NavEvent, NavigationState, HOME_MENU};

/// Outcome of dispatching one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Commands applied and the new state committed
    Applied,
    /// Event had no effect in the current view
    Unchanged,
    /// Event or its rendering failed; state left as it was
    Rejected(NavError),
}

impl Dispatch {
    pub fn is_applied(&self) -> bool {
        matches!(self, Dispatch::Applied)
    }
}

/// Single owner of the navigation state.
///
/// Every event goes through the pure state machine; the resulting commands
/// are applied to the render target and the new state is committed only if
/// all of them succeeded.
pub struct NavigationController {
    catalog: Catalog,
    state: NavigationState,
}

impl NavigationController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: NavigationState::new(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Render the initial (home) state onto a fresh target
    pub fn initialize<R: RenderTarget + ?Sized>(&mut self, target: &mut R) -> NavResult<()> {
        info!("Initializing navigation");
        let commands = render_commands(&self.state, &self.catalog)?;
        for command in &commands {
            target.apply(command)?;
        }
        info!("Shortcuts: ESC back, ← previous tile, → next tile");
        for line in self.catalog.summary().lines() {
            info!("  {line}");
        }
        Ok(())
    }

    /// Feed one event through the state machine and render the result.
    ///
    /// A render failure rolls the target back to the committed state before
    /// the event is rejected.
    pub fn dispatch<R: RenderTarget + ?Sized>(
        &mut self,
        event: &NavEvent,
        target: &mut R,
    ) -> Dispatch {
        let t = match transition(&self.state, &self.catalog, event) {
            Ok(t) => t,
            Err(err) => return Self::reject(event, err),
        };

        if t.is_noop() {
            debug!("Ignored {event:?} in {:?}", self.state.current_view);
            return Dispatch::Unchanged;
        }

        if let Err(err) = Self::render(&t, target) {
            self.restore(target);
            return Self::reject(event, err);
        }

        if t.state.current_view != self.state.current_view {
            debug!("View: {:?} -> {:?}", self.state.current_view, t.state.current_view);
        }
        self.state = t.state;
        Dispatch::Applied
    }

    fn reject(event: &NavEvent, err: NavError) -> Dispatch {
        if err.is_expected() {
            warn!("Navigation rejected {event:?}: {err}");
        } else {
            error!("Navigation failed on {event:?}: {err}");
        }
        Dispatch::Rejected(err)
    }

    fn render<R: RenderTarget + ?Sized>(t: &Transition, target: &mut R) -> NavResult<()> {
        for command in &t.commands {
            target.apply(command)?;
        }
        Ok(())
    }

    /// Re-apply the committed state after a partial render. Commands that
    /// fail again are skipped so the rest still lands.
    fn restore<R: RenderTarget + ?Sized>(&self, target: &mut R) {
        let commands = match render_commands(&self.state, &self.catalog) {
            Ok(commands) => commands,
            Err(err) => {
                error!("Cannot restore {:?}: {err}", self.state.current_view);
                return;
            }
        };
        for command in &commands {
            if let Err(err) = target.apply(command) {
                debug!("Restore skipped {command:?}: {err}");
            }
        }
    }

    pub fn select_menu<R: RenderTarget + ?Sized>(
        &mut self,
        menu_id: &str,
        target: &mut R,
    ) -> Dispatch {
        self.dispatch(&NavEvent::select_menu(menu_id), target)
    }

    pub fn select_item<R: RenderTarget + ?Sized>(
        &mut self,
        section: &str,
        item_id: u32,
        target: &mut R,
    ) -> Dispatch {
        self.dispatch(&NavEvent::select_item(section, item_id), target)
    }

    pub fn navigate_prev<R: RenderTarget + ?Sized>(&mut self, target: &mut R) -> Dispatch {
        self.dispatch(&NavEvent::NavigatePrev, target)
    }

    pub fn navigate_next<R: RenderTarget + ?Sized>(&mut self, target: &mut R) -> Dispatch {
        self.dispatch(&NavEvent::NavigateNext, target)
    }

    pub fn navigate_back<R: RenderTarget + ?Sized>(&mut self, target: &mut R) -> Dispatch {
        self.dispatch(&NavEvent::NavigateBack, target)
    }

    pub fn handle_escape<R: RenderTarget + ?Sized>(&mut self, target: &mut R) -> Dispatch {
        self.dispatch(&NavEvent::KeyPressed(Key::Escape), target)
    }

    pub fn handle_key<R: RenderTarget + ?Sized>(&mut self, key: Key, target: &mut R) -> Dispatch {
        self.dispatch(&NavEvent::KeyPressed(key), target)
    }

    /// Shortcut used by the landing link
    pub fn go_home<R: RenderTarget + ?Sized>(&mut self, target: &mut R) -> Dispatch {
        self.select_menu(HOME_MENU, target)
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
