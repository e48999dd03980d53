//! 导航栈
//!
//! 栈中每一层（Level）是一组兄弟节点 ID 及其焦点索引。
//! 第 0 层为根层，来自榜单；其余每一层都是上一层焦点节点的子节点列表。

mod level;
mod stack;

pub use level::Level;
pub use stack::{DescendOutcome, LevelSnapshot, NavigationStack};
