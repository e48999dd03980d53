use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// Unified error type for all content provider operations.
///
/// Each variant includes a `provider` field identifying which backend produced
/// the error, plus variant-specific context. All variants are serializable for
/// structured error reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-success HTTP status.
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        raw_message: Option<String>,
    },

    /// The requested item does not exist (the API answers `null` or 404).
    ItemNotFound {
        /// Provider that produced the error.
        provider: String,
        /// ID of the missing item.
        item_id: ItemId,
    },

    /// Failed to parse the provider's response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The HTTP client could not be constructed.
    ClientBuild {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（条目不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. })
    }

    /// 是否属于传输层错误（网络、超时、HTTP 状态码）
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::HttpStatus { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                provider,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{provider}] HTTP {status}")
                }
            }
            Self::ItemNotFound { provider, item_id } => {
                write!(f, "[{provider}] Item {item_id} not found")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::ClientBuild { provider, detail } => {
                write!(f, "[{provider}] Failed to build HTTP client: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Library Result type alias
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_provider_and_context() {
        let err = ProviderError::ItemNotFound {
            provider: "hacker-news".to_string(),
            item_id: 99,
        };
        assert_eq!(err.to_string(), "[hacker-news] Item 99 not found");

        let err = ProviderError::HttpStatus {
            provider: "hacker-news".to_string(),
            status: 503,
            raw_message: None,
        };
        assert_eq!(err.to_string(), "[hacker-news] HTTP 503");
    }

    #[test]
    fn only_missing_items_are_expected() {
        let missing = ProviderError::ItemNotFound {
            provider: "hacker-news".to_string(),
            item_id: 1,
        };
        let timeout = ProviderError::Timeout {
            provider: "hacker-news".to_string(),
            detail: "deadline elapsed".to_string(),
        };
        assert!(missing.is_expected());
        assert!(!missing.is_transport());
        assert!(!timeout.is_expected());
        assert!(timeout.is_transport());
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = ProviderError::ParseError {
            provider: "hacker-news".to_string(),
            detail: "expected value".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "ParseError");
        assert_eq!(json["detail"], "expected value");
    }
}
