//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          └───────────┘          └────┬─────┘         │   │
//！│  │        ▲                     ▲                     │ 修改          │   │
//！│  │   ┌─────────┐                │ 完成回送             ▼               │   │
//！│  │   │  View   │ ◀── 读取 ──────┼──────────────  ┌──────────┐         │   │
//！│  │   │   层    │                │                │  Model   │         │   │
//！│  │   └─────────┘                │                └────┬─────┘         │   │
//！│  └──────────────────────────────│─────────────────────│───────────────┘   │
//！│                                 │                     │ request / retry   │
//！│                            ┌────┴─────────────────────▼───┐               │
//！│                            │        Backend 层            │               │
//！│                            │  CoreService · ContentCache  │               │
//！│                            └──────────────┬───────────────┘               │
//！│                                           ▼                               │
//！│                                ┌───────────────────┐                      │
//！│                                │  hn-drilldown-    │                      │
//！│                                │  core / provider  │                      │
//！│                                └───────────────────┘                      │
//！└─────────────────────────────────────────────────────────────────────────────┘

mod config_service;
mod core_service;
mod opener;

pub use config_service::{AppConfig, ConfigService, JsonConfigService};
pub use core_service::{CoreService, RootResult};
pub use opener::BrowserOpener;
