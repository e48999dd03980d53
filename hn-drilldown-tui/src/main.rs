//! hn-drilldown TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! hn-drilldown 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，终端处于原始模式时不能输出到屏幕
//!     load_config()           // 读取配置，失败则使用默认值
//!     Runtime::new()          // 获取任务运行在 tokio 多线程运行时上
//!     CoreService::from_config()
//!     init_terminal()         // 初始化终端，得到 terminal: Terminal<...>
//!     model::App::new()       // 创建 APP 实例
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//!
//! 当启动程序时，main.rs：
//!     `init_terminal()`         // from util/terminal.rs
//!
//!     有：
//!         · enable_raw_mode()
//!             - 以关闭终端行缓冲模式、关闭回显与允许读取单个按键事件
//!         · execute!(io::stdout , EnterAlternateScreen)?
//!             - 切换到 备用屏幕
//!         · 返回 Terminal 对象
//!
//!
//!     App::new()              // from model/app.rs
//!     创建终端初始状态（在 /app.rs 下细嗦）
//!
//!
//!     进入主循环 app::run()   // from /app.rs
//!
//!
//! 主循环运行在主线程上，不在运行时内部：
//!     运行时只负责执行获取任务，结果通过通道回到主线程，
//!     因此 Model 始终只被主线程访问。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use backend::{AppConfig, BrowserOpener, ConfigService, CoreService, JsonConfigService};
use i18n::Language;
use message::AppMessage;
use util::{init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    if let Err(e) = init_logging() {
        eprintln!("日志初始化失败: {e:#}");
    }

    // 2. 加载配置
    let config = load_config();
    view::theme::set_theme(config.theme);
    let language = Language::from_code(&config.language).unwrap_or_default();
    i18n::set_language(language);
    log::info!("界面语言: {}，根层来源: {}", language.code(), config.feed.as_str());

    // 3. 创建运行时与核心服务
    let runtime = tokio::runtime::Runtime::new().context("无法创建 tokio 运行时")?;
    let service = CoreService::from_config(&config, runtime.handle().clone())
        .context("无法创建 Hacker News 客户端")?;

    // 4. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(&config, service.cache(), Box::new(BrowserOpener));
    let size = terminal.size()?;
    update::update(&mut app, AppMessage::Resize(size.width, size.height));

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app, &service);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 8. 返回结果
    result
}

/// 日志文件路径
fn log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("hn-drilldown")
        .join("hn-drilldown.log")
}

/// 初始化日志：写入文件，级别由 `RUST_LOG` 控制，默认 info
fn init_logging() -> Result<()> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("无法创建日志目录: {}", dir.display()))?;
    }
    let file = File::create(&path).with_context(|| format!("无法创建日志文件: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .context("日志订阅器已存在")?;

    tracing::info!("hn-drilldown v{} 启动", env!("CARGO_PKG_VERSION"));
    Ok(())
}

/// 加载配置，失败时使用默认值
///
/// 首次运行时写出默认配置文件，便于用户修改。
fn load_config() -> AppConfig {
    let service = JsonConfigService::new();
    if !service.path().exists() {
        match service.save(&AppConfig::default()) {
            Ok(()) => log::info!("已写入默认配置: {}", service.path().display()),
            Err(e) => log::warn!("写入默认配置失败: {e:#}"),
        }
    }

    match service.load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("配置加载失败，使用默认配置: {e:#}");
            AppConfig::default()
        }
    }
}
