//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：帮助与错误弹窗的内容都放在 modal 下
//! 3. **条目渲染归 `item.*`**：层级列中单个条目的文本
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 条目渲染文本
    pub item: ItemTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub no_data: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub up_down: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub enter: &'static str,
    pub esc: &'static str,
    pub retry: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 动作描述
pub struct ActionTexts {
    pub move_focus: &'static str,
    pub back_to_root: &'static str,
    pub open_replies: &'static str,
    pub open_link: &'static str,
    pub retry: &'static str,
    pub help: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 条目
// ============================================================================

/// 条目渲染文本
pub struct ItemTexts {
    pub loading: &'static str,
    pub failed: &'static str,
    pub retry_hint: &'static str,
    pub deleted: &'static str,
    pub dead: &'static str,
    pub anonymous: &'static str,
    pub points: &'static str,
    pub replies: &'static str,
    pub no_replies: &'static str,
    pub placeholder: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub cached: &'static str,
    pub pending: &'static str,
    pub depth: &'static str,
    pub opened: &'static str,
    pub no_link: &'static str,
    pub no_children: &'static str,
    pub waiting: &'static str,
    pub still_failed: &'static str,
    pub retrying: &'static str,
    pub nothing_to_retry: &'static str,
    pub loading_root: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub help_title: &'static str,
    pub help_navigation: &'static str,
    pub help_actions: &'static str,
    pub help_close: &'static str,
    pub error_title: &'static str,
    pub error_close: &'static str,
    pub root_failed: &'static str,
}
