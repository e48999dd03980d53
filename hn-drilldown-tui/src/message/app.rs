//! 应用主消息

use hn_drilldown_core::ItemId;

use super::{ModalMessage, NavigationMessage};
use crate::backend::RootResult;

/// 应用主消息
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 重新请求焦点处加载失败的节点
    Retry,

    /// 显示帮助
    ShowHelp,

    /// 终端尺寸变化
    Resize(u16, u16),

    /// 根层 ID 加载完成
    RootLoaded(RootResult),

    /// 缓存中这些条目的状态已更新
    NodesResolved(Vec<ItemId>),

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
