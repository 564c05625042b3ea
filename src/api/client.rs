//
//  unsplash-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Unsplash API Client
//!
//! This module provides the request executor every endpoint operation runs
//! through. It attaches credentials, performs one request per call and turns
//! whatever happens into a single [`Outcome`].
//!
//! ## Pipeline
//!
//! 1. Build the URL (`client_id` first, absent parameters dropped).
//! 2. Send it once through the [`Transport`]. A transport error becomes
//!    [`Outcome::TransportFailure`].
//! 3. Compare the status with the endpoint's expected status. A mismatch
//!    becomes [`Outcome::StatusMismatch`] and the body is not decoded.
//! 4. Decode the body ([`fetch`](UnsplashClient::fetch)) or hand it back
//!    untouched ([`fetch_raw`](UnsplashClient::fetch_raw)).

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use super::common::api_error_message;
use super::outcome::{decode_body, Outcome};
use super::request::Endpoint;
use super::transport::{HttpRequest, RawResponse, ReqwestTransport, Transport};
use crate::auth::Credentials;
use crate::config::Config;

/// Base URL of the public Unsplash API.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Why a request stopped before reaching the decode step.
enum Failure {
    Transport(String),
    Status(u16),
    MissingBearerToken,
}

impl Failure {
    fn into_outcome<T>(self) -> Outcome<T> {
        match self {
            Self::Transport(description) => Outcome::TransportFailure { description },
            Self::Status(status) => Outcome::StatusMismatch { status },
            Self::MissingBearerToken => Outcome::MissingBearerToken,
        }
    }
}

/// The client for the Unsplash API.
///
/// Cloning is cheap: credentials and transport are shared behind `Arc`, so a
/// clone can be moved into a spawned task while the original keeps issuing
/// requests.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use unsplash_client::api::UnsplashClient;
/// use unsplash_client::auth::Credentials;
///
/// let client = UnsplashClient::new(Credentials::new("your-access-key"))?;
/// assert_eq!(client.base_url().as_str(), "https://api.unsplash.com/");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Clone)]
pub struct UnsplashClient {
    transport: Arc<dyn Transport>,
    credentials: Arc<Credentials>,
    base_url: Url,
}

impl UnsplashClient {
    /// Creates a client for the public API using a reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client could not be created.
    pub fn new(credentials: Credentials) -> anyhow::Result<Self> {
        Self::with_transport(credentials, ReqwestTransport::new()?)
    }

    /// Creates a client that sends requests through `transport`.
    ///
    /// # Errors
    ///
    /// Returns an error if [`DEFAULT_BASE_URL`] fails to parse.
    pub fn with_transport(
        credentials: Credentials,
        transport: impl Transport + 'static,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            transport: Arc::new(transport),
            credentials: Arc::new(credentials),
            base_url: Url::parse(DEFAULT_BASE_URL)?,
        })
    }

    /// Creates a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no access key is configured, the configured base
    /// URL is invalid or the HTTP client could not be created.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let credentials = config.credentials()?;
        Self::new(credentials)?.with_base_url(&config.api.base_url)
    }

    /// Points the client at a different host, e.g. a proxy or a test server.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> anyhow::Result<Self> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            anyhow::bail!("Invalid API base URL: {}", base_url);
        }
        self.base_url = parsed;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Builds the absolute URL `endpoint` would be sent to.
    pub fn build_url(&self, endpoint: &Endpoint) -> Url {
        endpoint.url(&self.base_url, self.credentials.access_key())
    }

    /// Executes `endpoint` and decodes the body as `T`.
    ///
    /// Always yields exactly one outcome; see the [module docs](self).
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Outcome<T> {
        let response = match self.execute(endpoint).await {
            Ok(response) => response,
            Err(failure) => return failure.into_outcome(),
        };

        match decode_body::<T>(&response.body) {
            Ok(value) => Outcome::Decoded {
                value,
                status: response.status,
            },
            Err((kind, path)) => {
                debug!(
                    path = endpoint.path(),
                    %kind,
                    field = path.as_deref().unwrap_or("<root>"),
                    "Response did not match the expected shape"
                );
                Outcome::DecodeFailure { kind, path }
            }
        }
    }

    /// Executes `endpoint` and returns the undecoded body and status.
    ///
    /// Shares the transport and status checks with [`fetch`](Self::fetch).
    pub async fn fetch_raw(&self, endpoint: &Endpoint) -> Outcome<RawResponse> {
        match self.execute(endpoint).await {
            Ok(response) => Outcome::Decoded {
                status: response.status,
                value: response,
            },
            Err(failure) => failure.into_outcome(),
        }
    }

    /// Spawns `request` on the tokio runtime and hands its outcome to
    /// `continuation` exactly once.
    ///
    /// ```rust,no_run
    /// use unsplash_client::api::UnsplashClient;
    /// use unsplash_client::auth::Credentials;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = UnsplashClient::new(Credentials::new("key"))?;
    /// let worker = client.clone();
    /// let handle = UnsplashClient::dispatch(
    ///     async move { worker.total_stats().await },
    ///     |outcome| println!("status: {:?}", outcome.status()),
    /// );
    /// handle.await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn dispatch<T, F, C>(request: F, continuation: C) -> JoinHandle<()>
    where
        T: Send + 'static,
        F: Future<Output = Outcome<T>> + Send + 'static,
        C: FnOnce(Outcome<T>) + Send + 'static,
    {
        tokio::spawn(async move { continuation(request.await) })
    }

    async fn execute(&self, endpoint: &Endpoint) -> Result<RawResponse, Failure> {
        let bearer_token = if endpoint.requires_auth() {
            match self.credentials.bearer_token() {
                Some(token) => Some(token.to_string()),
                None => {
                    warn!(path = endpoint.path(), "No bearer token for a user-scoped request");
                    return Err(Failure::MissingBearerToken);
                }
            }
        } else {
            None
        };

        let request = HttpRequest {
            method: endpoint.method().clone(),
            url: self.build_url(endpoint),
            bearer_token,
        };

        debug!(method = %request.method, path = endpoint.path(), "Sending request");

        let response = self.transport.execute(request).await.map_err(|err| {
            warn!(path = endpoint.path(), error = %err, "Request failed");
            Failure::Transport(err.to_string())
        })?;

        if response.status != endpoint.expected_status() {
            debug!(
                path = endpoint.path(),
                status = response.status,
                expected = endpoint.expected_status(),
                api_message = api_error_message(&response.body).as_deref().unwrap_or(""),
                "Unexpected status"
            );
            return Err(Failure::Status(response.status));
        }

        debug!(path = endpoint.path(), status = response.status, "Request succeeded");
        Ok(response)
    }
}
