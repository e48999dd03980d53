//! 导航消息

/// 作用于导航栈顶层的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 焦点上移
    MoveUp,
    /// 焦点下移
    MoveDown,
    /// 回到根层
    Ascend,
    /// 展开焦点节点的回复
    Descend,
    /// 打开焦点节点的链接
    Activate,
}
