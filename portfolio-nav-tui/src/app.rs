//!
//! app.rs
//! 应用主循环
//!
//! 主循环大约每 30 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入
//!         let msg = handle_event(event , &app);           // 接收原始事件并翻译为消息
//!         update::update(&mut app , msg)                  // 更新状态
//!     }
//!     update::update(&mut app , Tick)                 // 结算已结束的动画
//! }
//!
//! 每个事件都在下一个事件被读取之前处理完毕，动画只在 Tick 中结算，
//! 因此导航状态不会与动画产生竞争。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 有动画时的刷新间隔
const FRAME_INTERVAL: Duration = Duration::from_millis(30);
/// 空闲时的轮询间隔
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（动画进行中时缩短等待）
        let timeout = if app.surface.is_animating() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };
        if let Some(event) = event::poll_event(timeout)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }

        // 6. 结算动画
        update::update(app, AppMessage::Tick);
    }

    Ok(())
}
