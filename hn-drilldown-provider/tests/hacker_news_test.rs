//! Hacker News 在线集成测试
//!
//! 默认跳过；设置 `HN_DRILLDOWN_LIVE_TESTS=1` 后访问真实 API。

mod common;

use hn_drilldown_provider::{ContentProvider, Feed, ProviderError};

#[tokio::test]
async fn test_fetch_top_feed() {
    skip_unless_live!();
    let Some(provider) = common::live_provider() else {
        panic!("failed to build provider");
    };

    let ids = require_ok!(provider.fetch_feed(Feed::Top).await);
    assert!(!ids.is_empty());
}

#[tokio::test]
async fn test_fetch_known_story() {
    skip_unless_live!();
    let Some(provider) = common::live_provider() else {
        panic!("failed to build provider");
    };

    let item = require_ok!(provider.fetch_item(8863).await);
    assert_eq!(item.id, 8863);
    assert_eq!(item.kind.as_deref(), Some("story"));
    assert_eq!(item.by.as_deref(), Some("dhouston"));
    assert!(!item.kids.is_empty());
}

#[tokio::test]
async fn test_fetch_missing_item() {
    skip_unless_live!();
    let Some(provider) = common::live_provider() else {
        panic!("failed to build provider");
    };

    let result = provider.fetch_item(u64::from(u32::MAX) * 16).await;
    assert!(matches!(result, Err(ProviderError::ItemNotFound { .. })));
}
