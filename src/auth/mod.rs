//
//  unsplash-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Unsplash identifies an application by its **access key**, sent as the
//! `client_id` query parameter on every request. Operations acting on behalf of
//! a user (liking or updating a photo) additionally need a **bearer token**
//! obtained through the OAuth flow, which this crate does not perform.
//!
//! [`Credentials`] holds both. It is built once, never mutated, and shared
//! read-only by every request in flight.
//!
//! ## Example
//!
//! ```rust
//! use unsplash_client::auth::Credentials;
//!
//! let credentials = Credentials::new("my-access-key")
//!     .with_secret_key("my-secret-key")
//!     .with_bearer_token("user-token");
//!
//! assert_eq!(credentials.access_key(), "my-access-key");
//! assert!(credentials.has_bearer_token());
//! ```

use std::fmt;

use url::Url;

/// Application and user credentials for the Unsplash API.
///
/// # Fields
///
/// - `access_key`: Required. Sent as `client_id` on every request.
/// - `secret_key`: Optional. Only needed for the OAuth token exchange.
/// - `redirect_uri`: Optional. Where the OAuth flow returns the user.
/// - `bearer_token`: Optional. Attached as `Authorization: Bearer` to
///   user-scoped operations.
///
/// # Notes
///
/// - The `Debug` output redacts every secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    secret_key: Option<String>,
    redirect_uri: Option<Url>,
    bearer_token: Option<String>,
}

impl Credentials {
    /// Creates credentials from the application's access key.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: None,
            redirect_uri: None,
            bearer_token: None,
        }
    }

    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn with_redirect_uri(mut self, redirect_uri: Url) -> Self {
        self.redirect_uri = Some(redirect_uri);
        self
    }

    /// Sets the user bearer token. A blank token leaves the credentials
    /// without one.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.bearer_token = (!token.trim().is_empty()).then_some(token);
        self
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    pub fn redirect_uri(&self) -> Option<&Url> {
        self.redirect_uri.as_ref()
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    pub fn has_bearer_token(&self) -> bool {
        self.bearer_token.is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &mask(&self.access_key))
            .field("secret_key", &self.secret_key.as_deref().map(mask))
            .field("redirect_uri", &self.redirect_uri.as_ref().map(Url::as_str))
            .field("bearer_token", &self.bearer_token.as_deref().map(mask))
            .finish()
    }
}

/// Masks a secret for display, keeping the first four characters.
///
/// ```rust
/// use unsplash_client::auth::mask;
///
/// assert_eq!(mask("abcdefgh"), "abcd****");
/// assert_eq!(mask("abc"), "****");
/// ```
pub fn mask(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        let prefix: String = secret.chars().take(4).collect();
        format!("{prefix}****")
    }
}
