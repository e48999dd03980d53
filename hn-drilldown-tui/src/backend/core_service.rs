//! 核心服务
//!
//! 组装 provider、获取服务与内容缓存，并负责启动时加载根层。

use std::sync::Arc;
use std::time::Duration;

use hn_drilldown_core::services::ProviderFetcher;
use hn_drilldown_core::{ContentCache, CoreResult, ErrorInfo, Fetcher, ItemId, TopLevelIdsProvider};
use hn_drilldown_provider::{HackerNewsProvider, ProviderConfig};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use super::config_service::AppConfig;

/// 根层加载结果
pub type RootResult = Result<Vec<ItemId>, ErrorInfo>;

/// TUI 核心服务
///
/// 持有获取服务与运行时句柄，提供给 UI 层调用
pub struct CoreService {
    fetcher: Arc<dyn Fetcher>,
    roots: Arc<dyn TopLevelIdsProvider>,
    runtime: Handle,
}

impl CoreService {
    /// 按配置创建 Hacker News 服务
    pub fn from_config(config: &AppConfig, runtime: Handle) -> CoreResult<Self> {
        let provider_config = ProviderConfig {
            base_url: config.api_base_url.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            ..ProviderConfig::default()
        };
        let provider = Arc::new(HackerNewsProvider::new(provider_config)?);
        let fetcher = Arc::new(
            ProviderFetcher::new(provider)
                .with_feed(config.feed)
                .with_limit(config.max_top_items),
        );

        Ok(Self::new(fetcher.clone(), fetcher, runtime))
    }

    /// 使用任意获取实现创建
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        roots: Arc<dyn TopLevelIdsProvider>,
        runtime: Handle,
    ) -> Self {
        Self {
            fetcher,
            roots,
            runtime,
        }
    }

    /// 创建内容缓存
    pub fn cache(&self) -> ContentCache {
        ContentCache::new(Arc::clone(&self.fetcher), self.runtime.clone())
    }

    /// 异步加载根层，结果经 `tx` 回送
    pub fn load_root<M>(&self, tx: UnboundedSender<M>, wrap: fn(RootResult) -> M)
    where
        M: Send + 'static,
    {
        let roots = Arc::clone(&self.roots);
        self.runtime.spawn(async move {
            let result = match roots.fetch_top_ids().await {
                Ok(ids) => Ok(ids),
                Err(e) => {
                    log::error!("根层加载失败: {e}");
                    Err(ErrorInfo::from(e))
                }
            };
            // 主循环已退出时直接丢弃
            let _ = tx.send(wrap(result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hn_drilldown_core::{CoreError, ErrorKind, Node};
    use tokio::sync::mpsc;

    struct FixedRoots(CoreResult<Vec<ItemId>>);

    #[async_trait]
    impl TopLevelIdsProvider for FixedRoots {
        async fn fetch_top_ids(&self) -> CoreResult<Vec<ItemId>> {
            match &self.0 {
                Ok(ids) => Ok(ids.clone()),
                Err(_) => Err(CoreError::NetworkError("offline".to_string())),
            }
        }
    }

    struct NoNodes;

    #[async_trait]
    impl Fetcher for NoNodes {
        async fn fetch_node(&self, id: ItemId) -> CoreResult<Node> {
            Err(CoreError::NotFound(id))
        }
    }

    fn service(roots: FixedRoots) -> CoreService {
        CoreService::new(Arc::new(NoNodes), Arc::new(roots), Handle::current())
    }

    #[test]
    fn root_ids_are_delivered_over_the_channel() {
        tokio_test::block_on(async {
            let (tx, mut rx) = mpsc::unbounded_channel();
            service(FixedRoots(Ok(vec![3, 1, 2]))).load_root(tx, |r| r);
            assert_eq!(rx.recv().await, Some(Ok(vec![3, 1, 2])));
        });
    }

    #[test]
    fn root_failure_is_reported_as_error_info() {
        tokio_test::block_on(async {
            let (tx, mut rx) = mpsc::unbounded_channel();
            service(FixedRoots(Err(CoreError::NetworkError(String::new())))).load_root(tx, |r| r);
            let received = rx.recv().await;
            let kind = received.and_then(Result::err).map(|info| info.kind);
            assert_eq!(kind, Some(ErrorKind::Network));
        });
    }

    #[test]
    fn service_builds_from_default_config() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let service = CoreService::from_config(&AppConfig::default(), runtime.handle().clone());
        assert!(service.is_ok());
    }
}
