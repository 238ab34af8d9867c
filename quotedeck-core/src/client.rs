//! Quotes service HTTP client

use crate::error::{CoreError, CoreResult};
use crate::http::HttpUtils;
use crate::types::{NewQuote, ProfileUpdate, QuoteRecord, QuoteSummary, QuoteUpdate};

/// HTTP client for the quotes service.
///
/// All methods are single-shot: a failed exchange maps to a `CoreError`
/// and the caller decides what (if anything) to do with its state. No
/// request-level timeout is configured; completion and failure
/// signalling are left entirely to the transport.
pub struct QuotesApi {
    http: reqwest::Client,
    base_url: String,
}

impl QuotesApi {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
        }
    }

    /// Join a path onto the configured base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Resolve a submission URL the service handed out.
    ///
    /// `quote_url` arrives either absolute or host-relative; a relative
    /// one is resolved against the configured base.
    fn resolve(&self, action_url: &str) -> String {
        if action_url.starts_with("http://") || action_url.starts_with("https://") {
            action_url.to_string()
        } else {
            self.url(action_url)
        }
    }

    /// Fetch a single quote record: `GET /quotes/{id}`.
    pub async fn get_quote(&self, id: &str) -> CoreResult<QuoteRecord> {
        let url = self.url(&format!("/quotes/{}", urlencoding::encode(id)));
        let (status, body) =
            HttpUtils::execute_request(self.http.get(&url), "GET", &url).await?;

        match status {
            200..=299 => HttpUtils::parse_json(&body),
            404 => Err(CoreError::QuoteNotFound(id.to_string())),
            _ => Err(CoreError::UnexpectedStatus { status }),
        }
    }

    /// Fetch the quote listing: `GET /api/v1/quotes`.
    pub async fn list_quotes(&self) -> CoreResult<Vec<QuoteSummary>> {
        let url = self.url("/api/v1/quotes");
        let (status, body) =
            HttpUtils::execute_request(self.http.get(&url), "GET", &url).await?;

        match status {
            200..=299 => HttpUtils::parse_json(&body),
            _ => Err(CoreError::UnexpectedStatus { status }),
        }
    }

    /// Submit a new quote: form-encoded `POST /quotes/add`.
    pub async fn create_quote(&self, quote: &NewQuote) -> CoreResult<()> {
        let url = self.url("/quotes/add");
        let request = self.http.post(&url).form(quote);
        let (status, _body) = HttpUtils::execute_request(request, "POST", &url).await?;

        match status {
            // The service answers form posts with a redirect to the page
            200..=399 => Ok(()),
            _ => Err(CoreError::UnexpectedStatus { status }),
        }
    }

    /// Submit an update to the record's canonical URL.
    ///
    /// `action_url` must be the `quote_url` the fetched record supplied.
    pub async fn update_quote(&self, action_url: &str, update: &QuoteUpdate) -> CoreResult<()> {
        let url = self.resolve(action_url);
        let request = self.http.post(&url).form(update);
        let (status, _body) = HttpUtils::execute_request(request, "POST", &url).await?;

        match status {
            200..=399 => Ok(()),
            _ => Err(CoreError::UnexpectedStatus { status }),
        }
    }

    /// Submit a profile update: form-encoded
    /// `POST /profiles/update/{user_id}/{profile_id}`.
    pub async fn update_profile(
        &self,
        user_id: &str,
        profile_id: &str,
        update: &ProfileUpdate,
    ) -> CoreResult<()> {
        let url = self.url(&format!(
            "/profiles/update/{}/{}",
            urlencoding::encode(user_id),
            urlencoding::encode(profile_id)
        ));
        let request = self.http.post(&url).form(update);
        let (status, _body) = HttpUtils::execute_request(request, "POST", &url).await?;

        match status {
            200..=399 => Ok(()),
            _ => Err(CoreError::UnexpectedStatus { status }),
        }
    }
}

fn trim_trailing_slash(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = QuotesApi::new("http://localhost:5000/");
        assert_eq!(api.url("/quotes/q1"), "http://localhost:5000/quotes/q1");
    }

    #[test]
    fn relative_action_url_resolves_against_base() {
        let api = QuotesApi::new("http://localhost:5000");
        assert_eq!(
            api.resolve("/quotes/update/q1"),
            "http://localhost:5000/quotes/update/q1"
        );
    }

    #[test]
    fn absolute_action_url_is_kept() {
        let api = QuotesApi::new("http://localhost:5000");
        assert_eq!(
            api.resolve("http://quotes.example/quotes/update/q1"),
            "http://quotes.example/quotes/update/q1"
        );
    }

    #[tokio::test]
    async fn unreachable_service_maps_to_transport_error() {
        // Port 1 is never serving; the transport failure must surface
        // as an unexpected error, not a panic or a 404 mapping
        let api = QuotesApi::new("http://127.0.0.1:1");
        let result = api.get_quote("q1").await;
        let Err(err) = result else {
            panic!("request against a closed port should fail");
        };
        assert!(matches!(
            err,
            CoreError::NetworkError(_) | CoreError::Timeout(_)
        ));
        assert!(!err.is_expected());
    }
}
