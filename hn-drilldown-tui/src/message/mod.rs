//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Message 是 Event 层与 Update 层之间唯一的约定：
//!     - 按键经监听器翻译为 AppMessage（见 event/）
//!     - 后台结果（根层加载、缓存写入）也包装成 AppMessage
//!     - update::update 是修改 Model 的唯一入口
//!
//!
//!     AppMessage
//!         ├── Navigation(NavigationMessage)   // ↑ ↓ ← → Enter
//!         ├── Modal(ModalMessage)             // Esc 关闭弹窗
//!         ├── Retry / ShowHelp / Quit         // 应用级按键
//!         ├── Resize(w, h)                    // 终端尺寸变化
//!         ├── RootLoaded(result)              // 根层 ID 到达
//!         └── NodesResolved(ids)              // 缓存条目完成

mod app;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
