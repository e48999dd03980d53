//! Hacker News HTTP 请求方法与响应解码
//!
//! Firebase 对不存在的路径返回 `null`（部分代理返回 404）。
//! 条目接口把两者都视为条目不存在；榜单接口必然存在，两者都是错误。

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::types::{Feed, ItemId, RawItem};

use super::{HackerNewsProvider, PROVIDER_NAME};

impl HackerNewsProvider {
    /// 拼接 `<base>/<path>.json`
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{path}.json", self.base_url)
    }

    /// 执行 GET 请求，返回状态码与响应体
    pub(crate) async fn get(&self, path: &str) -> Result<(u16, String)> {
        let url = self.endpoint_url(path);
        HttpUtils::execute_request(self.client.get(&url), PROVIDER_NAME, "GET", &url).await
    }
}

/// 解码 `/item/<id>.json` 的响应
pub(crate) fn decode_item(id: ItemId, status: u16, body: &str) -> Result<RawItem> {
    if status == 404 {
        return Err(not_found(id));
    }
    HttpUtils::ensure_success(status, body, PROVIDER_NAME)?;

    let item = HttpUtils::parse_json::<Option<RawItem>>(body, PROVIDER_NAME)?
        .ok_or_else(|| not_found(id))?;
    if item.id != id {
        return Err(ProviderError::ParseError {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("requested item {id}, got {}", item.id),
        });
    }
    Ok(item)
}

/// 解码榜单接口的响应
pub(crate) fn decode_feed(feed: Feed, status: u16, body: &str) -> Result<Vec<ItemId>> {
    HttpUtils::ensure_success(status, body, PROVIDER_NAME)?;

    HttpUtils::parse_json::<Option<Vec<ItemId>>>(body, PROVIDER_NAME)?.ok_or_else(|| {
        log::warn!("[{PROVIDER_NAME}] {} answered null", feed.endpoint());
        ProviderError::ParseError {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("feed {} returned null", feed.endpoint()),
        }
    })
}

fn not_found(item_id: ItemId) -> ProviderError {
    ProviderError::ItemNotFound {
        provider: PROVIDER_NAME.to_string(),
        item_id,
    }
}
