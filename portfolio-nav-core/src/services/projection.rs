//! Projection of a navigation state onto render commands

use crate::error::{NavError, NavResult};
use crate::types::{ButtonId, Catalog, ElementId, NavigationState, RenderCommand, View, ViewId};

/// Every view the render target knows about, in menu order
pub fn all_views(catalog: &Catalog) -> Vec<ViewId> {
    let mut views = Vec::with_capacity(catalog.sections().len() + 3);
    views.push(ViewId::Home);
    views.extend(
        catalog
            .sections()
            .iter()
            .map(|section| ViewId::Submenu(section.id.clone())),
    );
    views.push(ViewId::Detail);
    views.push(ViewId::Contact);
    views
}

/// View id showing the given view
pub fn view_id(view: &View) -> ViewId {
    match view {
        View::Home => ViewId::Home,
        View::Contact => ViewId::Contact,
        View::Submenu { section } => ViewId::Submenu(section.clone()),
        View::Detail { .. } => ViewId::Detail,
    }
}

/// Full render of `state`: exactly one visible view, the active menu link,
/// and for a detail view its breadcrumb, title, counter and buttons.
///
/// Fails only when the state addresses content the catalog does not have.
pub fn render_commands(
    state: &NavigationState,
    catalog: &Catalog,
) -> NavResult<Vec<RenderCommand>> {
    let active = view_id(&state.current_view);

    let mut commands: Vec<RenderCommand> = all_views(catalog)
        .into_iter()
        .map(|view| {
            let visible = view == active;
            RenderCommand::SetVisible { view, visible }
        })
        .collect();

    commands.extend(catalog.menu_ids().into_iter().map(|menu_id| {
        RenderCommand::SetMenuActive {
            active: menu_id == state.current_menu,
            menu_id: menu_id.to_string(),
        }
    }));

    if let View::Detail { section, index } = &state.current_view {
        let section_data = catalog.require_section(section)?;
        let item = section_data.item_at(*index).ok_or_else(|| {
            NavError::InvalidCatalog(format!(
                "section '{section}' has no item at position {index}"
            ))
        })?;
        let total = section_data.len();

        commands.push(RenderCommand::SetElementText {
            element: ElementId::BreadcrumbSection,
            text: catalog.label(section).to_string(),
        });
        commands.push(RenderCommand::SetElementText {
            element: ElementId::BreadcrumbItem,
            text: item.title.clone(),
        });
        commands.push(RenderCommand::SetElementText {
            element: ElementId::DetailTitle,
            text: item.title.clone(),
        });
        commands.push(RenderCommand::SetElementText {
            element: ElementId::DetailPosition,
            text: format!("{}/{}", index + 1, total),
        });
        commands.push(RenderCommand::SetButtonEnabled {
            button: ButtonId::Prev,
            enabled: *index > 0,
        });
        commands.push(RenderCommand::SetButtonEnabled {
            button: ButtonId::Next,
            enabled: index + 1 < total,
        });
        commands.push(RenderCommand::SetButtonEnabled {
            button: ButtonId::Back,
            enabled: true,
        });
    }

    Ok(commands)
}
