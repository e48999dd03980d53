//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 浏览 / 视口 / 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             pub feed: Feed,                     // 根层来源
//!             pub browse: BrowseState,            // 导航栈 + 内容缓存
//!             pub viewport: ViewportState,        // 偏移过渡
//!             pub modal: ModalState,              // 弹窗状态
//!             pub opener: Box<dyn ExternalOpener> // 外部链接打开器
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、浏览状态（BrowseState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     stack 在根层 ID 到达前为 None。
//!     cache 是唯一会被异步结果修改的状态，修改只发生在主循环里
//!     （drain_completions），因此 Model 始终单线程访问。
//!
//!     deferred 记录“在待定节点上按了 →”：
//!         用户按 →，焦点节点仍是 Pending
//!             ↓
//!         update 记录 DeferredDescend { depth, id }
//!             ↓
//!         缓存写入 id 的结果 → AppMessage::NodesResolved
//!             ↓
//!         焦点未移动则再次 descend()
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、视口状态（ViewportState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每层一个垂直 Transition，整个栈一个水平 Transition。
//!     View 层以当前时刻采样，过渡进行中主循环缩短轮询间隔。

mod app;
pub mod state;

pub use app::App;
pub use state::{BrowseState, DeferredDescend, Modal, ModalState, ViewportState};
