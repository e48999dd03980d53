//! 业务逻辑服务层

mod provider_fetcher;

pub use provider_fetcher::ProviderFetcher;
