//! 终端渲染面：`RenderTarget` 的终端实现
//!
//! 导航核心只会“写”这个面（显示/隐藏视图、写文字、启用按钮、请求动画），
//! View 层再从这里“读”出要画什么。

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::trace;
use portfolio_nav_core::services::all_views;
use portfolio_nav_core::{
    AnimationKind, AnimationTarget, ButtonId, Catalog, ElementId, NavError, NavResult,
    RenderTarget, ViewId,
};

/// 交错动画开始前的延迟
pub const STAGGER_DELAY: Duration = Duration::from_millis(50);
/// 每个方块依次出现的间隔
pub const STAGGER_STEP: Duration = Duration::from_millis(60);
/// 详情页滑入动画时长
pub const SLIDE_DURATION: Duration = Duration::from_millis(500);
/// 滑入起始偏移（列）
pub const SLIDE_OFFSET: u16 = 6;

/// 子菜单方块的交错出现动画
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stagger {
    section: String,
    tiles: usize,
    started: Instant,
}

impl Stagger {
    fn revealed(&self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.started);
        let Some(running) = elapsed.checked_sub(STAGGER_DELAY) else {
            return 0;
        };
        let steps = running.as_millis() / STAGGER_STEP.as_millis() + 1;
        usize::try_from(steps).map_or(self.tiles, |steps| steps.min(self.tiles))
    }
}

/// 详情页的方向性滑入动画
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slide {
    from_right: bool,
    started: Instant,
}

/// 终端渲染面
pub struct TerminalSurface {
    /// 已知视图 -> 是否可见
    views: HashMap<ViewId, bool>,
    /// 各分区的方块数量
    tile_counts: HashMap<String, usize>,
    texts: HashMap<ElementId, String>,
    buttons: HashMap<ButtonId, bool>,
    active_menu: Option<String>,
    stagger: Option<Stagger>,
    slide: Option<Slide>,
    motion_blur: bool,
}

impl TerminalSurface {
    /// 按目录创建渲染面：首页、联系页、详情页，以及每个分区一个子菜单视图
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            views: all_views(catalog).into_iter().map(|view| (view, false)).collect(),
            tile_counts: catalog
                .sections()
                .iter()
                .map(|section| (section.id.clone(), section.len()))
                .collect(),
            texts: HashMap::new(),
            buttons: HashMap::new(),
            active_menu: None,
            stagger: None,
            slide: None,
            motion_blur: false,
        }
    }

    /// 当前可见的视图
    pub fn visible_view(&self) -> Option<&ViewId> {
        self.views
            .iter()
            .find_map(|(view, visible)| visible.then_some(view))
    }

    /// 元素文字，未写入过则为空串
    pub fn text(&self, element: ElementId) -> &str {
        self.texts.get(&element).map_or("", String::as_str)
    }

    /// 按钮是否可用，未设置过的按钮视为禁用
    pub fn is_enabled(&self, button: ButtonId) -> bool {
        self.buttons.get(&button).copied().unwrap_or(false)
    }

    pub fn active_menu(&self) -> Option<&str> {
        self.active_menu.as_deref()
    }

    pub fn motion_blur(&self) -> bool {
        self.motion_blur
    }

    /// 子菜单中已出现的方块数；没有进行中的动画时全部显示
    pub fn revealed_tiles(&self, section: &str, total: usize, now: Instant) -> usize {
        match &self.stagger {
            Some(stagger) if stagger.section == section => stagger.revealed(now).min(total),
            _ => total,
        }
    }

    /// 详情页当前的水平偏移（负数为从左侧滑入）
    pub fn slide_offset(&self, now: Instant) -> i32 {
        let Some(slide) = self.slide else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(slide.started);
        if elapsed >= SLIDE_DURATION {
            return 0;
        }
        let remaining = SLIDE_DURATION - elapsed;
        let offset = i32::from(SLIDE_OFFSET);
        let millis = i32::try_from(remaining.as_millis()).unwrap_or(0);
        let total = i32::try_from(SLIDE_DURATION.as_millis()).unwrap_or(1);
        let shift = offset * millis / total;
        if slide.from_right {
            shift
        } else {
            -shift
        }
    }

    pub fn is_animating(&self) -> bool {
        self.stagger.is_some() || self.slide.is_some()
    }

    /// 结算已结束的动画，返回本次是否有滑入动画结束
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(stagger) = &self.stagger {
            if stagger.revealed(now) >= stagger.tiles {
                trace!("Stagger settled: {}", stagger.section);
                self.stagger = None;
            }
        }

        match self.slide {
            Some(slide) if now.saturating_duration_since(slide.started) >= SLIDE_DURATION => {
                self.slide = None;
                true
            }
            _ => false,
        }
    }
}

impl RenderTarget for TerminalSurface {
    fn set_visible(&mut self, view: &ViewId, visible: bool) -> NavResult<()> {
        let slot = self
            .views
            .get_mut(view)
            .ok_or_else(|| NavError::ElementNotFound(view.to_string()))?;
        *slot = visible;
        Ok(())
    }

    fn set_element_text(&mut self, element: ElementId, text: &str) -> NavResult<()> {
        self.texts.insert(element, text.to_string());
        Ok(())
    }

    fn set_button_enabled(&mut self, button: ButtonId, enabled: bool) -> NavResult<()> {
        self.buttons.insert(button, enabled);
        Ok(())
    }

    fn set_menu_active(&mut self, menu_id: &str, active: bool) -> NavResult<()> {
        if active {
            self.active_menu = Some(menu_id.to_string());
        } else if self.active_menu.as_deref() == Some(menu_id) {
            self.active_menu = None;
        }
        Ok(())
    }

    fn request_animation(
        &mut self,
        target: &AnimationTarget,
        kind: AnimationKind,
    ) -> NavResult<()> {
        let now = Instant::now();
        match (target, kind) {
            (AnimationTarget::SubmenuGrid(section), AnimationKind::Stagger) => {
                let tiles = *self
                    .tile_counts
                    .get(section)
                    .ok_or_else(|| NavError::ElementNotFound(target.to_string()))?;
                self.stagger = Some(Stagger {
                    section: section.clone(),
                    tiles,
                    started: now,
                });
            }
            (
                AnimationTarget::DetailContainer,
                AnimationKind::SlidePrev | AnimationKind::SlideNext,
            ) => {
                self.slide = Some(Slide {
                    from_right: kind == AnimationKind::SlideNext,
                    started: now,
                });
            }
            (AnimationTarget::Carousel, AnimationKind::MotionBlurOn) => self.motion_blur = true,
            (AnimationTarget::Carousel, AnimationKind::MotionBlurOff) => self.motion_blur = false,
            (target, kind) => {
                trace!("Ignoring animation {kind:?} on {target}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn surface() -> TerminalSurface {
        TerminalSurface::new(&Catalog::builtin())
    }

    #[test]
    fn knows_one_submenu_per_section() {
        let mut s = surface();
        assert!(s.set_visible(&ViewId::Submenu("rower".to_string()), true).is_ok());
        assert_eq!(
            s.set_visible(&ViewId::Submenu("blog".to_string()), true),
            Err(NavError::ElementNotFound("view-submenu-blog".to_string()))
        );
        assert_eq!(s.visible_view(), Some(&ViewId::Submenu("rower".to_string())));
    }

    #[test]
    fn stagger_reveals_tiles_over_time() {
        let mut s = surface();
        s.request_animation(
            &AnimationTarget::SubmenuGrid("aplikacje".to_string()),
            AnimationKind::Stagger,
        )
        .unwrap();
        let started = s.stagger.as_ref().unwrap().started;

        assert_eq!(s.revealed_tiles("aplikacje", 6, started), 0);
        assert_eq!(s.revealed_tiles("aplikacje", 6, started + STAGGER_DELAY), 1);
        assert_eq!(
            s.revealed_tiles("aplikacje", 6, started + STAGGER_DELAY + STAGGER_STEP * 2),
            3
        );
        // other sections are not affected
        assert_eq!(s.revealed_tiles("rower", 2, started), 2);

        assert!(!s.tick(started + STAGGER_DELAY));
        assert!(s.is_animating());
        assert!(!s.tick(started + Duration::from_secs(2)));
        assert!(!s.is_animating());
        assert_eq!(s.revealed_tiles("aplikacje", 6, started), 6);
    }

    #[test]
    fn slide_offset_shrinks_to_zero() {
        let mut s = surface();
        s.request_animation(&AnimationTarget::DetailContainer, AnimationKind::SlideNext)
            .unwrap();
        let started = s.slide.unwrap().started;
        assert_eq!(s.slide_offset(started), i32::from(SLIDE_OFFSET));
        assert_eq!(s.slide_offset(started + SLIDE_DURATION), 0);

        s.request_animation(&AnimationTarget::DetailContainer, AnimationKind::SlidePrev)
            .unwrap();
        let started = s.slide.unwrap().started;
        assert_eq!(s.slide_offset(started), -i32::from(SLIDE_OFFSET));

        assert!(s.tick(started + SLIDE_DURATION));
        assert_eq!(s.slide_offset(started), 0);
    }

    #[test]
    fn motion_blur_follows_carousel_hints() {
        let mut s = surface();
        s.request_animation(&AnimationTarget::Carousel, AnimationKind::MotionBlurOn)
            .unwrap();
        assert!(s.motion_blur());
        s.request_animation(&AnimationTarget::Carousel, AnimationKind::MotionBlurOff)
            .unwrap();
        assert!(!s.motion_blur());
    }

    #[test]
    fn menu_highlight_is_exclusive() {
        let mut s = surface();
        s.set_menu_active("home", true).unwrap();
        s.set_menu_active("inne", false).unwrap();
        assert_eq!(s.active_menu(), Some("home"));
        s.set_menu_active("home", false).unwrap();
        s.set_menu_active("inne", true).unwrap();
        assert_eq!(s.active_menu(), Some("inne"));
    }

    #[test]
    fn unset_buttons_are_disabled() {
        let mut s = surface();
        assert!(!s.is_enabled(ButtonId::Prev));
        s.set_button_enabled(ButtonId::Prev, true).unwrap();
        assert!(s.is_enabled(ButtonId::Prev));
    }
}
