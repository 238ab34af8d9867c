//! Generic HTTP client tools
//!
//! Reusable request processing for the `QuotesApi` client: sending
//! requests, logging, and reading responses. There is deliberately no
//! retry layer — the interaction contract for every consumer is a
//! single-shot request whose failure leaves client state untouched.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::CoreError;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response status and body.
    ///
    /// Unified processing: sending the request, logging, error mapping.
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on any completed exchange,
    ///   regardless of status class
    /// * `Err(CoreError::Timeout)` when the transport reports a timeout
    /// * `Err(CoreError::NetworkError)` for every other transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), CoreError> {
        log::debug!("[quotes] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(e.to_string())
            } else {
                CoreError::NetworkError(e.to_string())
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[quotes] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("Failed to read response body: {e}")))?;

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T, CoreError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[quotes] JSON parse failed: {e}");
            CoreError::ParseError(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, CoreError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, CoreError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(CoreError::ParseError(_))),
            "unexpected parse result: {result:?}"
        );
    }
}
