//
//  unsplash-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the request/response pipeline for the Unsplash REST API
//! and the endpoint operations built on top of it.
//!
//! ## Architecture
//!
//! - [`request`]: Request builder (endpoint descriptors, query parameters, URLs)
//! - [`transport`]: The HTTP seam and its reqwest implementation
//! - [`outcome`]: The typed result of one request and decode classification
//! - [`client`]: The executor tying credentials, transport and decoding together
//! - [`common`]: Shared types (errors, option enums, pagination)
//! - [`photos`], [`users`], [`collections`], [`search`], [`stats`]: Records and
//!   endpoint operations, one module per endpoint family
//!
//! Every endpoint operation is declared as a pure function returning an
//! [`Endpoint`], plus an async method on [`UnsplashClient`] that fetches it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use unsplash_client::api::{Orientation, Outcome, Pagination, UnsplashClient};
//! use unsplash_client::auth::Credentials;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = UnsplashClient::new(Credentials::new("your-access-key"))?;
//!
//! let outcome = client
//!     .search_photos("mountains", Pagination::new(1, 20), &[], Orientation::Landscape)
//!     .await;
//!
//! if let Outcome::Decoded { value, .. } = outcome {
//!     println!("{} matches", value.total);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod collections;
pub mod common;
pub mod outcome;
pub mod photos;
pub mod request;
pub mod search;
pub mod stats;
pub mod transport;
pub mod users;

pub use client::{UnsplashClient, DEFAULT_BASE_URL};
pub use collections::Collection;
pub use common::{
    ApiError, DownloadLink, Order, Orientation, Pagination, Portfolio, Resolution,
    SearchResults, UrlResponse,
};
pub use outcome::{DecodeErrorKind, Outcome};
pub use photos::{Photo, PhotoSize, PhotoUpdate, RandomPhotoFilters};
pub use request::{Endpoint, QueryParams};
pub use stats::{MonthStats, PhotoStatistics, TotalStats, UserStatistics};
pub use transport::{RawResponse, Transport};
pub use users::User;
