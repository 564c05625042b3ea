//
//  unsplash-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Unsplash endpoints
//!
//! This module provides the types shared by every endpoint family: the error
//! type used when an [`Outcome`](super::Outcome) is converted into a `Result`,
//! the closed option enums with their wire strings, and small response shapes.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for `?`-style callers
//! - [`Order`], [`Orientation`], [`Resolution`] - Closed request options
//! - [`UrlResponse`] - `{"url": ...}` bodies (download tracking, portfolio)
//! - Pagination types (re-exported from [`pagination`] submodule)
//!
//! # Wire strings
//!
//! | Type | Variant | Wire value |
//! |------|---------|------------|
//! | `Order` | `Latest` / `Oldest` / `Popular` | `latest` / `oldest` / `popular` |
//! | `Orientation` | `Landscape` / `Portrait` / `Squarish` | `landscape` / `portrait` / `squarish` |
//! | `Resolution` | `Days` | `days` |

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::outcome::DecodeErrorKind;

mod pagination;

pub use pagination::*;

/// Unified error type for Unsplash API operations.
///
/// Produced by [`Outcome::into_result`](super::Outcome::into_result); the
/// pipeline itself never returns it.
///
/// | Variant | Source |
/// |---------|--------|
/// | `AuthRequired` | No bearer token for a user-scoped operation |
/// | `Unauthorized` | 401 |
/// | `Forbidden` | 403 |
/// | `NotFound` | 404 |
/// | `RateLimited` | 429 |
/// | `ServerError` | 5xx |
/// | `UnexpectedStatus` | Any other status that did not match |
/// | `Transport` | DNS, connection, timeout |
/// | `Decode` | Body did not match the expected shape |
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// A user bearer token is required but none was configured.
    #[error("Authentication required: this operation needs a user bearer token")]
    AuthRequired,

    /// The access key or bearer token was rejected.
    #[error("Unauthorized: the access key or bearer token was rejected")]
    Unauthorized,

    /// The credentials lack the scope for this operation.
    #[error("Permission denied: the token lacks the required scope")]
    Forbidden,

    /// The requested resource does not exist.
    #[error("Resource not found")]
    NotFound,

    /// The hourly request allowance is used up.
    #[error("Rate limit exceeded: try again later")]
    RateLimited,

    /// The API failed with a 5xx status.
    #[error("Server error (HTTP {0})")]
    ServerError(u16),

    /// Any other status that did not match the expected one.
    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// The request never completed.
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("Invalid response: {kind} at {}", .path.as_deref().unwrap_or("<root>"))]
    Decode {
        kind: DecodeErrorKind,
        path: Option<String>,
    },
}

impl ApiError {
    /// Maps a mismatched status code to the closest error variant.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError(status),
            _ => Self::UnexpectedStatus(status),
        }
    }
}

/// Extracts a human-readable message from an Unsplash error body.
///
/// Unsplash returns errors as:
/// ```json
/// {"errors": ["Couldn't find Photo"]}
/// ```
///
/// OAuth failures use `{"error": "...", "error_description": "..."}`.
/// Returns `None` when neither shape is present.
pub fn api_error_message(body: &[u8]) -> Option<String> {
    let json: serde_json::Value = serde_json::from_slice(body).ok()?;

    if let Some(errors) = json.get("errors").and_then(|e| e.as_array()) {
        let messages: Vec<&str> = errors.iter().filter_map(|e| e.as_str()).collect();
        if !messages.is_empty() {
            return Some(messages.join("; "));
        }
    }

    json.get("error_description")
        .or_else(|| json.get("error"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

/// How to sort photo listings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Latest,
    Oldest,
    Popular,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
        }
    }
}

/// Photo orientation filter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::Squarish => "squarish",
        }
    }
}

/// Granularity of historical statistics. The API only offers days.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    #[default]
    Days,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "days",
        }
    }
}

macro_rules! display_as_wire_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_wire_str!(Order, Orientation, Resolution);

/// Default number of days covered by statistics endpoints.
pub const DEFAULT_STATS_QUANTITY: u32 = 30;

/// A `{"url": ...}` body.
///
/// Returned by the download-tracking endpoint and the user portfolio endpoint.
/// The portfolio URL is `null` for users without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlResponse {
    pub url: Option<Url>,
}

/// Body of `GET photos/{id}/download`.
pub type DownloadLink = UrlResponse;

/// Body of `GET users/{username}/portfolio`.
pub type Portfolio = UrlResponse;
