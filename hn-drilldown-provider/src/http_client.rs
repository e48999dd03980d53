//! Generic HTTP client tools
//!
//! Reusable request handling shared by provider implementations: client
//! construction, sending with logging, status checks and JSON parsing.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::types::ProviderConfig;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Builds a client with the configured timeouts.
    pub fn create_client(config: &ProviderConfig, provider_name: &str) -> Result<Client, ProviderError> {
        Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::ClientBuild {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            })
    }

    /// Performs an HTTP request and returns status code and response text
    ///
    /// Unified processing: sending requests, logging, transport error mapping.
    /// The status code is returned as-is; use [`Self::ensure_success`] to turn
    /// non-2xx answers into errors.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers)
    /// * `provider_name` - Provider name (for logging)
    /// * `method_name` - request method name (for logging)
    /// * `url` - target URL (for logging)
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Maps a non-2xx status to [`ProviderError::HttpStatus`].
    pub fn ensure_success(
        status_code: u16,
        response_text: &str,
        provider_name: &str,
    ) -> Result<(), ProviderError> {
        if (200..300).contains(&status_code) {
            return Ok(());
        }
        log::warn!("[{provider_name}] Unexpected HTTP status {status_code}");
        Err(ProviderError::HttpStatus {
            provider: provider_name.to_string(),
            status: status_code,
            raw_message: if response_text.is_empty() {
                None
            } else {
                Some(truncate_for_log(response_text))
            },
        })
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_passes() {
        assert!(HttpUtils::ensure_success(200, "", "test").is_ok());
        assert!(HttpUtils::ensure_success(204, "", "test").is_ok());
    }

    #[test]
    fn server_error_maps_to_http_status() {
        let err = HttpUtils::ensure_success(503, "unavailable", "test").unwrap_err();
        assert!(matches!(
            err,
            ProviderError::HttpStatus { status: 503, raw_message: Some(ref m), .. } if m == "unavailable"
        ));
    }

    #[test]
    fn parse_json_reports_parse_error() {
        let res: Result<Vec<u64>, _> = HttpUtils::parse_json("{not json", "test");
        assert!(matches!(res, Err(ProviderError::ParseError { .. })));

        let ids: Vec<u64> = HttpUtils::parse_json("[1,2,3]", "test").unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
