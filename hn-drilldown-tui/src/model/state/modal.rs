//! 弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 快捷键帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态：同一时间至多一个弹窗
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
