//! Core type definitions

mod node;

pub use hn_drilldown_provider::ItemId;
pub use node::{Node, NodeKind};
