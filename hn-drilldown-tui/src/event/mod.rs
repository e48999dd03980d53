//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ NavMsg    │          ┌──────────┐         │   │
//！│  │   │  View   │          │           │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步获取          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  hn-drilldown-    │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘与终端尺寸事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件轮询与分发、应用级按键
//!         mod keymap;         // 快捷键映射
//!         mod listeners;      // 监听器注册表
//!         mod router;         // 导航输入路由
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件，交给监听器注册表
//!             Event::Resize(width , height)       // 终端窗口大小发生变化
//!             其余事件                             // 忽略
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 监听器注册表
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     按键不再由一个大 match 处理，而是交给注册表中的监听器：
//!
//!         ListenerRegistry
//!             ├── [0] NavigationKeys   (InputRouter 安装)   ↑ ↓ ← → Enter
//!             └── [1] AppKeys                               q ? r Esc Ctrl+C
//!
//!     按注册顺序询问，第一个返回 Some 的监听器消费该按键。
//!     register() 返回 Registration，丢弃即注销：
//!
//!         let mut router = InputRouter::new();
//!         router.install(&registry);      // 重复调用不会重复注册
//!         ...
//!         router.uninstall();             // 或者直接丢弃 router
//!
//!     弹窗打开时 NavigationKeys 放行，由 AppKeys 处理关闭：
//!             Esc / Enter / q → ModalMessage::Close
//!             其他按键         → AppMessage::Noop（被吞掉）
//!
//!
//!     在 src/app.rs 中，有：
//!         let msg = handle_event(event , app , &registry);
//!         update::update(app , msg);
//!                              ↑↑↑                    // 在此作为参数传入 update 层

mod handler;
mod keymap;
mod listeners;
mod router;

pub use handler::{handle_event, poll_event, AppKeys};
pub use listeners::{KeyListener, ListenerRegistry, Registration};
pub use router::InputRouter;
