//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!     mod terminal;       // 终端初始化、恢复与 panic 钩子
//!     mod text;           // HTML 片段转纯文本、按显示宽度截断与折行
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!           日志因此写入文件而不是终端（见 main.rs）。

mod terminal;
mod text;

pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
pub use text::{html_to_text, truncate_to_width, wrap_to_width};
