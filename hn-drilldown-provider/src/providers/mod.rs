//! Content provider implementations

mod hacker_news;

pub use hacker_news::HackerNewsProvider;
