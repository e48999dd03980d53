//! Wire types of the Hacker News item API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Item identifier as used by the remote API.
pub type ItemId = u64;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Server-ranked feeds that provide a top-level id list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feed {
    #[default]
    Top,
    New,
    Best,
    Ask,
    Show,
    Job,
}

impl Feed {
    /// Path segment of the feed endpoint (without `.json`).
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Top => "topstories",
            Self::New => "newstories",
            Self::Best => "beststories",
            Self::Ask => "askstories",
            Self::Show => "showstories",
            Self::Job => "jobstories",
        }
    }

    /// Lowercase name, as written in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::New => "new",
            Self::Best => "best",
            Self::Ask => "ask",
            Self::Show => "show",
            Self::Job => "job",
        }
    }
}

/// Raw item record exactly as served by `/item/<id>.json`.
///
/// Every field except `id` is optional on the wire; deleted items in
/// particular carry little more than `id`, `deleted` and `time`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawItem {
    pub id: ItemId,
    #[serde(default)]
    pub deleted: bool,
    /// `story`, `comment`, `job`, `poll` or `pollopt`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub by: Option<String>,
    /// Unix time, seconds.
    #[serde(default)]
    pub time: Option<i64>,
    /// HTML fragment.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub dead: bool,
    #[serde(default)]
    pub parent: Option<ItemId>,
    #[serde(default)]
    pub poll: Option<ItemId>,
    #[serde(default)]
    pub kids: Vec<ItemId>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub parts: Vec<ItemId>,
    #[serde(default)]
    pub descendants: Option<u64>,
}

/// Connection settings for a provider instance.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// API root without trailing slash.
    pub base_url: String,
    /// Whole-request timeout.
    pub request_timeout: Duration,
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(10),
        }
    }
}
