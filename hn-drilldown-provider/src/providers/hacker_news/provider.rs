//! Hacker News ContentProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::ContentProvider;
use crate::types::{Feed, ItemId, RawItem};

use super::http::{decode_feed, decode_item};
use super::{HackerNewsProvider, PROVIDER_NAME};

#[async_trait]
impl ContentProvider for HackerNewsProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_feed(&self, feed: Feed) -> Result<Vec<ItemId>> {
        let (status, body) = self.get(feed.endpoint()).await?;
        let ids = decode_feed(feed, status, &body)?;
        log::info!("[{PROVIDER_NAME}] {} returned {} ids", feed.endpoint(), ids.len());
        Ok(ids)
    }

    async fn fetch_item(&self, id: ItemId) -> Result<RawItem> {
        let (status, body) = self.get(&format!("item/{id}")).await?;
        decode_item(id, status, &body)
    }
}
