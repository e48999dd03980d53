//! 共享测试工具和辅助函数

#![allow(dead_code)]

use hn_drilldown_provider::{HackerNewsProvider, ProviderConfig};

/// 开启在线测试的环境变量
pub const LIVE_TESTS_ENV: &str = "HN_DRILLDOWN_LIVE_TESTS";

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_unless_live {
    () => {
        if std::env::var($crate::common::LIVE_TESTS_ENV).is_err() {
            eprintln!(
                "跳过测试: 未设置环境变量 {}",
                $crate::common::LIVE_TESTS_ENV
            );
            return;
        }
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 使用默认配置创建 provider
pub fn live_provider() -> Option<HackerNewsProvider> {
    HackerNewsProvider::new(ProviderConfig::default()).ok()
}
