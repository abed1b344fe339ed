//! Typed errors for backend communication
//!
//! This module provides detailed error types for the HTTP and event-stream
//! operations, with context-aware reporting and a recoverability
//! classification the presentation layer uses to decide what to show.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Invalid backend base URL: {url} - {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Request to {url} failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("Backend rejected the request with status {status}")]
    RejectedRequest {
        status: u16,
        /// `detail` field of the backend's JSON error body, when present
        detail: Option<String>,
        url: String,
    },

    #[error("Event stream interrupted: {message}")]
    StreamInterrupted { message: String },

    #[error("Event stream stalled for {idle_seconds}s without data")]
    StreamStalled { idle_seconds: u64 },

    #[error("Download of translation {id} failed: {message}")]
    DownloadFailed { id: String, message: String },

    #[error("Unexpected response body from {url}: {message}")]
    InvalidResponseBody { url: String, message: String },
}

impl ApiError {
    /// Create a request error from a transport-level failure
    pub fn request_failed(url: &str, source: &reqwest::Error) -> Self {
        Self::RequestFailed {
            url: url.to_string(),
            message: source.to_string(),
        }
    }

    /// Create a rejection error from a non-success status and optional body
    pub fn rejected(status: u16, detail: Option<String>, url: &str) -> Self {
        Self::RejectedRequest {
            status,
            detail,
            url: url.to_string(),
        }
    }

    /// Server-provided message to surface to the user, when one exists
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::RejectedRequest { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Whether the user can simply retry the action that caused this error.
    ///
    /// Transport and stream failures end the current job but leave the client
    /// usable; only a misconfigured base URL needs intervention first.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidBaseUrl { .. } => false,
            Self::RequestFailed { .. } => true,
            Self::RejectedRequest { status, .. } => *status < 500,
            Self::StreamInterrupted { .. } => true,
            Self::StreamStalled { .. } => true,
            Self::DownloadFailed { .. } => true,
            Self::InvalidResponseBody { .. } => true,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
