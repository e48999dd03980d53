//! Hacker News Firebase provider

mod http;
mod provider;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::types::ProviderConfig;

pub(crate) const PROVIDER_NAME: &str = "hacker-news";

/// Hacker News Firebase provider
pub struct HackerNewsProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl HackerNewsProvider {
    /// 使用给定配置创建 provider
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = HttpUtils::create_client(&config, PROVIDER_NAME)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}
