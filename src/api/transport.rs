//
//  unsplash-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The executor talks to the network through the [`Transport`] trait so the
//! pipeline can be exercised without a live server. [`ReqwestTransport`] is the
//! production implementation.
//!
//! A transport performs exactly one round trip per call. It never retries and
//! never interprets the status code; that is the executor's job.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use thiserror::Error;
use url::Url;

/// A fully-built request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    /// Bearer token to attach as `Authorization: Bearer ...`, if any.
    pub bearer_token: Option<String>,
}

/// The raw result of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Returns the body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Checks whether the server labelled the body as JSON.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.starts_with("application/json"))
            .unwrap_or(false)
    }
}

/// Whole-request timeout used by [`ReqwestTransport::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A transport-level failure: DNS, connection, TLS, timeout or an interrupted
/// body. Carries a human-readable description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let description = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self(description)
    }
}

/// Performs a single HTTP round trip.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the crate's `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend could not be initialised.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            http: Client::builder()
                .user_agent(format!("unsplash-client/{}", crate::VERSION))
                .timeout(DEFAULT_TIMEOUT)
                .build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .header("Accept-Version", "v1");

        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_helpers() {
        let response = RawResponse {
            status: 200,
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: br#"{"ok":true}"#.to_vec(),
        };
        assert!(response.is_json());
        assert_eq!(response.text(), r#"{"ok":true}"#);

        let binary = RawResponse {
            status: 200,
            content_type: Some("image/jpeg".to_string()),
            body: vec![0xff, 0xd8, 0xff],
        };
        assert!(!binary.is_json());
    }
}
