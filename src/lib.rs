//
//  unsplash-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Unsplash Client Library
//!
//! A typed, asynchronous client for the Unsplash REST API, plus the pieces the
//! `unsplash` command-line tool is built from.
//!
//! ## Overview
//!
//! Every endpoint operation funnels through one pipeline:
//!
//! 1. An [`api::Endpoint`] describes the method, path and optional query parameters.
//! 2. The request builder turns it into an absolute URL, always injecting `client_id`.
//! 3. The executor performs a single request and classifies the result into an
//!    [`api::Outcome`]: decoded value, status mismatch, transport failure or
//!    decode failure.
//!
//! No request is ever retried, cached or silently dropped.
//!
//! ## Module Structure
//!
//! - [`api`]: Request builder, executor, records and endpoint operations
//! - [`auth`]: Immutable client credentials
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (Table, JSON)
//! - [`cli`]: Command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use unsplash_client::api::{Outcome, Pagination, Order, UnsplashClient};
//! use unsplash_client::auth::Credentials;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = UnsplashClient::new(Credentials::new("your-access-key"))?;
//!
//! match client.list_photos(Pagination::default(), Order::Latest).await {
//!     Outcome::Decoded { value, .. } => println!("{} photos", value.len()),
//!     other => eprintln!("request failed: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains the `unsplash` command tree defined using the clap derive API.
pub mod cli;

/// Unsplash API pipeline, records and endpoint operations.
pub mod api;

/// Client credentials (access key, secret key, redirect URI, bearer token).
pub mod auth;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/unsplash/config.toml`
/// - macOS: `~/Library/Application Support/unsplash/config.toml`
/// - Windows: `%APPDATA%\unsplash\config.toml`
pub mod config;

/// Output formatting for the CLI (table and JSON).
pub mod output;

// Re-export commonly used types at the crate root for convenience.
pub use api::{Outcome, UnsplashClient};
pub use auth::Credentials;
pub use config::Config;

/// The current version of the library and CLI.
///
/// Sent as part of the `User-Agent` header on every request.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments, including a missing access key.
    pub const USAGE: i32 = 2;

    /// Authentication required or rejected (401/403, or no bearer token
    /// for a user-scoped operation).
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found (404).
    pub const NOT_FOUND: i32 = 8;

    /// The response did not match the expected shape.
    pub const DECODE_ERROR: i32 = 16;

    /// The API could not be reached (DNS, connection, timeout) or answered
    /// with a server error.
    pub const SERVICE_ERROR: i32 = 32;

    /// Picks the exit code for an error returned by a command.
    pub fn for_error(err: &anyhow::Error) -> i32 {
        use crate::api::ApiError;
        use crate::config::MissingAccessKey;

        if err.is::<MissingAccessKey>() {
            return USAGE;
        }

        match err.downcast_ref::<ApiError>() {
            Some(ApiError::AuthRequired | ApiError::Unauthorized | ApiError::Forbidden) => {
                AUTH_ERROR
            }
            Some(ApiError::NotFound) => NOT_FOUND,
            Some(ApiError::Decode { .. }) => DECODE_ERROR,
            Some(ApiError::Transport(_) | ApiError::ServerError(_) | ApiError::RateLimited) => {
                SERVICE_ERROR
            }
            Some(ApiError::UnexpectedStatus(_)) | None => ERROR,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::api::{ApiError, DecodeErrorKind};

        #[test]
        fn test_api_errors_map_to_codes() {
            let code = |err: ApiError| for_error(&anyhow::Error::from(err));

            assert_eq!(code(ApiError::AuthRequired), AUTH_ERROR);
            assert_eq!(code(ApiError::Forbidden), AUTH_ERROR);
            assert_eq!(code(ApiError::NotFound), NOT_FOUND);
            assert_eq!(code(ApiError::RateLimited), SERVICE_ERROR);
            assert_eq!(code(ApiError::Transport("timed out".into())), SERVICE_ERROR);
            assert_eq!(code(ApiError::UnexpectedStatus(204)), ERROR);
            assert_eq!(
                code(ApiError::Decode {
                    kind: DecodeErrorKind::Malformed,
                    path: None
                }),
                DECODE_ERROR
            );
        }

        #[test]
        fn test_other_errors() {
            let missing = anyhow::Error::from(crate::config::MissingAccessKey);
            assert_eq!(for_error(&missing), USAGE);
            assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
        }

        #[test]
        fn test_context_does_not_hide_the_cause() {
            let err = anyhow::Error::from(ApiError::NotFound).context("Failed to load photo");
            assert_eq!(for_error(&err), NOT_FOUND);
        }
    }
}
