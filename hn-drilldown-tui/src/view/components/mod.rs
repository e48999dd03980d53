//! UI 组件

pub mod item;
pub mod levels;
pub mod modal;
pub mod statusbar;
