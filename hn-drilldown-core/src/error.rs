//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::ItemId;

// Re-export library error type
pub use hn_drilldown_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Item does not exist upstream
    #[error("Item not found: {0}")]
    NotFound(ItemId),

    /// Response did not describe a valid node
    #[error("Malformed response for item {id}: {detail}")]
    MalformedResponse { id: ItemId, detail: String },

    /// network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// No tokio runtime to run fetches on
    #[error("Runtime unavailable: {0}")]
    RuntimeUnavailable(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (item missing upstream), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Provider(e) => e.is_expected(),
            _ => false,
        }
    }

    /// 归类到三种对外可见的错误类别
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) | Self::Provider(ProviderError::ItemNotFound { .. }) => {
                ErrorKind::NotFound
            }
            Self::MalformedResponse { .. } | Self::Provider(ProviderError::ParseError { .. }) => {
                ErrorKind::MalformedResponse
            }
            Self::NetworkError(_) | Self::RuntimeUnavailable(_) | Self::Provider(_) => {
                ErrorKind::Network
            }
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// 失败类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    Network,
    NotFound,
    MalformedResponse,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Network => "network error",
            Self::NotFound => "not found",
            Self::MalformedResponse => "malformed response",
        };
        f.write_str(name)
    }
}

/// 记录在缓存条目中的错误信息
///
/// `CoreError` 不可克隆，缓存只保存类别与消息。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CoreError> for ErrorInfo {
    fn from(err: &CoreError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<CoreError> for ErrorInfo {
    fn from(err: CoreError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_err(err: ProviderError) -> CoreError {
        CoreError::from(err)
    }

    #[test]
    fn provider_errors_are_classified() {
        let missing = provider_err(ProviderError::ItemNotFound {
            provider: "hacker-news".to_string(),
            item_id: 7,
        });
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert!(missing.is_expected());

        let parse = provider_err(ProviderError::ParseError {
            provider: "hacker-news".to_string(),
            detail: "eof".to_string(),
        });
        assert_eq!(parse.kind(), ErrorKind::MalformedResponse);

        let timeout = provider_err(ProviderError::Timeout {
            provider: "hacker-news".to_string(),
            detail: "elapsed".to_string(),
        });
        assert_eq!(timeout.kind(), ErrorKind::Network);
        assert!(!timeout.is_expected());
    }

    #[test]
    fn error_info_keeps_kind_and_message() {
        let info = ErrorInfo::from(CoreError::MalformedResponse {
            id: 3,
            detail: "missing type".to_string(),
        });
        assert_eq!(info.kind, ErrorKind::MalformedResponse);
        assert_eq!(info.message, "Malformed response for item 3: missing type");
        assert_eq!(
            info.to_string(),
            "malformed response: Malformed response for item 3: missing type"
        );
    }
}
