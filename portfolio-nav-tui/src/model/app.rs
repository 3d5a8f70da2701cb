//! 应用主状态结构

use log::error;
use portfolio_nav_core::{Catalog, NavigationController, View};

use super::{FocusPanel, MenuState, TerminalSurface, TileCursor};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 菜单光标
    pub menu: MenuState,

    /// 子菜单方块光标
    pub tiles: TileCursor,

    /// 导航控制器（导航状态的唯一持有者）
    pub controller: NavigationController,

    /// 渲染面（控制器写入，View 层读取）
    pub surface: TerminalSurface,
}

impl App {
    /// 创建新的应用实例，并把首页渲染到渲染面上
    pub fn new(catalog: Catalog) -> Self {
        let surface = TerminalSurface::new(&catalog);
        let menu = MenuState::new(&catalog);

        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Menu,
            menu,
            tiles: TileCursor::default(),
            controller: NavigationController::new(catalog),
            surface,
        };

        if let Err(err) = app.controller.initialize(&mut app.surface) {
            error!("Initial render failed: {err}");
        }

        app
    }

    /// 当前视图
    pub fn view(&self) -> &View {
        &self.controller.state().current_view
    }

    /// 当前分区的方块数（不在分区内时为 0）
    pub fn section_len(&self) -> usize {
        self.view()
            .section()
            .and_then(|id| self.controller.catalog().section(id))
            .map_or(0, |section| section.len())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
