//! Collaborator abstraction trait definition

mod fetcher;
mod opener;

pub use fetcher::{Fetcher, TopLevelIdsProvider};
pub use opener::ExternalOpener;
