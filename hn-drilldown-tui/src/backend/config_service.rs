//! 配置服务
//!
//! 配置文件位于 `<config_dir>/hn-drilldown/config.json`，缺失时使用默认值。
//! 越界的数值在加载时被夹到合法范围。

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hn_drilldown_provider::{Feed, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AppConfig {
    pub theme: Theme,
    pub language: String,
    /// 根层来源
    pub feed: Feed,
    /// 根层条目上限
    pub max_top_items: usize,
    /// 实体化窗口半径
    pub window_radius: usize,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// 层级列宽度（含边框）
    pub column_width: u16,
    /// 每个条目占用的行数
    pub item_height: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            feed: Feed::Top,
            max_top_items: 40,
            window_radius: 8,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 15,
            column_width: 48,
            item_height: 4,
        }
    }
}

impl AppConfig {
    /// 将越界的数值夹到合法范围
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.max_top_items = self.max_top_items.max(1);
        self.window_radius = self.window_radius.max(1);
        self.item_height = self.item_height.max(2);
        self.column_width = self.column_width.max(16);
        self.request_timeout_secs = self.request_timeout_secs.max(1);
        let trimmed = self.api_base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            self.api_base_url = DEFAULT_BASE_URL.to_string();
        } else if trimmed.len() != self.api_base_url.len() {
            self.api_base_url = trimmed.to_string();
        }
        self
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hn-drilldown")
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    /// 使用平台配置目录
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    /// 使用指定路径
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("配置文件不存在，使用默认配置: {}", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("读取配置文件失败: {}", self.path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", self.path.display()))?;

        Ok(config.normalized())
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("创建配置目录失败: {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("写入配置文件失败: {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir()
            .join(format!("hn-drilldown-test-{}-{nanos}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let service = JsonConfigService::with_path(scratch_path("absent.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let service = JsonConfigService::with_path(scratch_path("config.json"));
        let config = AppConfig {
            theme: Theme::Light,
            language: "zh-CN".to_string(),
            feed: Feed::Ask,
            window_radius: 3,
            ..AppConfig::default()
        };

        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);

        if let Some(dir) = service.path().parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn partial_file_fills_defaults_and_clamps() {
        let json = r#"{ "feed": "best", "window_radius": 0, "item_height": 1, "api_base_url": "http://localhost:9000/v0/" }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        let config = config.normalized();

        assert_eq!(config.feed, Feed::Best);
        assert_eq!(config.window_radius, 1);
        assert_eq!(config.item_height, 2);
        assert_eq!(config.max_top_items, 40);
        assert_eq!(config.api_base_url, "http://localhost:9000/v0");
    }

    #[test]
    fn invalid_json_is_an_error() {
        let path = scratch_path("broken.json");
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(&path, "{ not json").unwrap();

        let service = JsonConfigService::with_path(&path);
        assert!(service.load().is_err());

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
