//! HTTP client for the translation backend
//!
//! Thin typed wrapper around `reqwest` covering the four backend endpoints.
//! The translate call returns the raw streaming response; consuming the
//! event stream is the application layer's job so that this client stays
//! free of view-state concerns.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response, multipart};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::models::{HistoryRecord, TranslationResult};
use crate::infrastructure::api_error::{ApiError, ApiResult};

/// HTTP client configuration for backend access
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiClientConfig {
    /// Backend origin, e.g. `http://localhost:8000`
    pub base_url: String,
    pub user_agent: String,
    /// Total timeout for the short JSON endpoints
    pub request_timeout_seconds: u64,
    /// Connect timeout applied to every request, including the stream
    pub connect_timeout_seconds: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            user_agent: format!("po-prevoditelj/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

/// Backend error body shape for non-2xx JSON responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Debug, Deserialize)]
struct LanguagesResponse {
    languages: HashMap<String, String>,
}

/// Typed client over the backend's `/api` surface
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: ApiClientConfig) -> ApiResult<Self> {
        // Validate the origin up front so a typo fails at startup, not on
        // the first request.
        Url::parse(&config.base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| ApiError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: format!("invalid user agent: {e}"),
            })?,
        );

        // No total timeout on the client itself: the translate response body
        // streams for the whole job. Short endpoints set one per request.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::RequestFailed {
                url: config.base_url.clone(),
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.request_timeout_seconds)
    }

    /// Fetch the supported language map (code to display name)
    pub async fn fetch_languages(&self) -> ApiResult<HashMap<String, String>> {
        let url = self.endpoint("languages");
        debug!("Fetching supported languages from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&url, &e))?;
        let response = Self::ensure_success(response, &url).await?;

        let body: LanguagesResponse =
            response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponseBody {
                    url: url.clone(),
                    message: e.to_string(),
                })?;
        Ok(body.languages)
    }

    /// Fetch the translation history, newest first
    pub async fn fetch_history(&self) -> ApiResult<Vec<HistoryRecord>> {
        let url = self.endpoint("translations");
        debug!("Fetching translation history from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&url, &e))?;
        let response = Self::ensure_success(response, &url).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponseBody {
                url,
                message: e.to_string(),
            })
    }

    /// Fetch the stored detail record of a single translation
    pub async fn fetch_translation(&self, id: &str) -> ApiResult<TranslationResult> {
        let url = self.endpoint(&format!("translations/{id}"));
        debug!("Fetching translation detail from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout())
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&url, &e))?;
        let response = Self::ensure_success(response, &url).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponseBody {
                url,
                message: e.to_string(),
            })
    }

    /// Fetch the artifact bytes of a stored translation
    pub async fn download_translation(&self, id: &str) -> ApiResult<Vec<u8>> {
        let url = self.endpoint(&format!("translations/{id}/download"));
        debug!("Downloading translation artifact from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.request_timeout())
            .send()
            .await
            .map_err(|e| ApiError::DownloadFailed {
                id: id.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ApiError::DownloadFailed {
                id: id.to_string(),
                message: format!("backend responded with status {}", response.status()),
            });
        }

        let bytes = response.bytes().await.map_err(|e| ApiError::DownloadFailed {
            id: id.to_string(),
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }

    /// Submit a file for translation and return the streaming response.
    ///
    /// A non-success status is turned into [`ApiError::RejectedRequest`]
    /// carrying the backend's `detail` message; the event stream is never
    /// opened in that case.
    pub async fn start_translation(
        &self,
        file_name: &str,
        file_bytes: Vec<u8>,
        source_lang: &str,
        target_lang: &str,
    ) -> ApiResult<Response> {
        let url = self.endpoint("translate");
        debug!(
            "Submitting {} for translation ({} -> {})",
            file_name, source_lang, target_lang
        );

        let file_part = multipart::Part::bytes(file_bytes).file_name(file_name.to_string());
        let form = multipart::Form::new()
            .part("file", file_part)
            .text("source_lang", source_lang.to_string())
            .text("target_lang", target_lang.to_string());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(&url, &e))?;
        Self::ensure_success(response, &url).await
    }

    /// Get the configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Map a non-success response to a typed rejection, extracting the
    /// backend's `detail` message when the body is the documented JSON shape.
    async fn ensure_success(response: Response, url: &str) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .map(|b| b.detail);
        Err(ApiError::rejected(status.as_u16(), detail, url))
    }
}
