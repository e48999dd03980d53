//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，终端初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     status_message = None,                          // 状态栏消息
//!     feed = Feed::Top,                               // 根层来源（来自配置）
//!     browse: BrowseState {
//!         cache,                                      // 空缓存
//!         stack = None,                               // 根层 ID 尚未到达
//!         ...
//!     },
//!     viewport,                                       // 偏移全部为 0
//!     modal = None,
//!
//! }
//!
//! 随后发起根层加载（CoreService::load_root），结果经通道回到主循环。
//!
//!
//! 主循环在空闲时大约每 100 ms 执行一次，过渡动画进行中缩短为 16 ms：
//! loop {
//!
//!     while let Ok(msg) = rx.try_recv() {...}         // 后台消息（根层加载结果）
//!     cache.drain_completions()                       // 写入已完成的获取 → NodesResolved
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event(timeout) {      // 轮询获取输入
//!         let msg = handle_event(event , &app , &registry);  // 交给监听器翻译为消息
//!         update::update(&mut app , msg)                      // 更新终端状态
//!     }
//! }

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::backend::CoreService;
use crate::event::{self, AppKeys, InputRouter, ListenerRegistry};
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 空闲时的轮询间隔
const IDLE_TICK: Duration = Duration::from_millis(100);
/// 过渡进行中的轮询间隔
const FRAME_TICK: Duration = Duration::from_millis(16);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, service: &CoreService) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    service.load_root(tx.clone(), AppMessage::RootLoaded);

    // 导航路由在前，应用级按键在后
    let registry = ListenerRegistry::new();
    let mut router = InputRouter::new();
    router.install(&registry);
    let _app_keys = registry.register(Rc::new(AppKeys));

    loop {
        // 1. 处理后台结果
        pump_background(app, service, &tx, &mut rx);

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件
        let timeout = if app.viewport.is_animating(Instant::now()) {
            FRAME_TICK
        } else {
            IDLE_TICK
        };
        if let Some(event) = event::poll_event(timeout)? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app, &registry);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    router.uninstall();
    log::info!("主循环退出");
    Ok(())
}

/// 应用后台消息与缓存完成结果
fn pump_background(
    app: &mut App,
    service: &CoreService,
    tx: &UnboundedSender<AppMessage>,
    rx: &mut UnboundedReceiver<AppMessage>,
) {
    while let Ok(msg) = rx.try_recv() {
        update::update(app, msg);
    }

    let resolved = app.browse.cache.drain_completions();
    if !resolved.is_empty() {
        update::update(app, AppMessage::NodesResolved(resolved));
    }

    if std::mem::take(&mut app.browse.reload_root) {
        log::info!("重新加载根层");
        service.load_root(tx.clone(), AppMessage::RootLoaded);
    }
}
