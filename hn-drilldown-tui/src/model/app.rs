use std::time::Instant;

use hn_drilldown_core::{ContentCache, ExternalOpener, LevelWindow};
use hn_drilldown_provider::Feed;

use super::{BrowseState, ModalState, ViewportState};
use crate::backend::AppConfig;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 根层来源
    pub feed: Feed,

    /// 浏览状态（导航栈 + 缓存）
    pub browse: BrowseState,

    /// 视口状态
    pub viewport: ViewportState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 外部链接打开器
    pub opener: Box<dyn ExternalOpener>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig, cache: ContentCache, opener: Box<dyn ExternalOpener>) -> Self {
        Self {
            should_quit: false,
            status_message: None,
            feed: config.feed,
            browse: BrowseState::new(cache, LevelWindow::new(config.window_radius)),
            viewport: ViewportState::new(config.column_width, config.item_height, Instant::now()),
            modal: ModalState::new(),
            opener,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
