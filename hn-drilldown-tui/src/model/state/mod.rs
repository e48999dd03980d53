//! 状态模块
//!
//! 定义浏览、视口与弹窗的状态数据结构

mod browse;
mod modal;
mod viewport;

pub use browse::{BrowseState, DeferredDescend};
pub use modal::{Modal, ModalState};
pub use viewport::{ViewportState, STATUS_HEIGHT, TITLE_HEIGHT};
