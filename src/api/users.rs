//
//  unsplash-client
//  api/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User records and the public profile endpoints.
//!
//! | Operation | Request | Body |
//! |-----------|---------|------|
//! | [`user`](UnsplashClient::user) | `GET users/{username}` | [`User`] |
//! | [`user_portfolio`](UnsplashClient::user_portfolio) | `GET users/{username}/portfolio` | [`Portfolio`] |
//! | [`user_photos`](UnsplashClient::user_photos) | `GET users/{username}/photos` | `Vec<Photo>` |
//! | [`user_likes`](UnsplashClient::user_likes) | `GET users/{username}/likes` | `Vec<Photo>` |
//! | [`user_collections`](UnsplashClient::user_collections) | `GET users/{username}/collections` | `Vec<Collection>` |
//! | [`user_statistics`](UnsplashClient::user_statistics) | `GET users/{username}/statistics` | [`UserStatistics`] |

use serde::{Deserialize, Serialize};
use url::Url;

use super::client::UnsplashClient;
use super::collections::Collection;
use super::common::{Order, Pagination, Portfolio, Resolution, DEFAULT_STATS_QUANTITY};
use super::outcome::Outcome;
use super::photos::Photo;
use super::request::{Endpoint, QueryParams};
use super::stats::UserStatistics;

/// A public Unsplash profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    pub username: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub twitter_username: Option<String>,

    #[serde(default)]
    pub instagram_username: Option<String>,

    /// Free text; not always a valid URL.
    #[serde(default)]
    pub portfolio_url: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    pub total_likes: u64,

    pub total_photos: u64,

    pub total_collections: u64,

    #[serde(default)]
    pub accepted_tos: Option<bool>,

    #[serde(default)]
    pub profile_image: Option<ProfileImage>,

    pub links: UserLinks,
}

impl User {
    /// Best name to show: full name, then username.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLinks {
    #[serde(rename = "self")]
    pub self_link: Url,
    pub html: Url,
    pub photos: Url,
    pub likes: Url,
    pub portfolio: Url,
    #[serde(default)]
    pub following: Option<Url>,
    #[serde(default)]
    pub followers: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub small: Url,
    pub medium: Url,
    pub large: Url,
}

/// Whether to embed per-photo statistics in a user's photo listing.
///
/// `resolution` and `quantity` are always sent; the API ignores them unless
/// `include` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoStatsOptions {
    pub include: bool,
    pub resolution: Resolution,
    pub quantity: u32,
}

impl Default for PhotoStatsOptions {
    fn default() -> Self {
        Self {
            include: false,
            resolution: Resolution::Days,
            quantity: DEFAULT_STATS_QUANTITY,
        }
    }
}

impl PhotoStatsOptions {
    fn to_params(self) -> QueryParams {
        QueryParams::new()
            .with("stats", self.include)
            .with("resolution", self.resolution)
            .with("quantity", self.quantity)
    }
}

pub fn user_endpoint(username: &str) -> Endpoint {
    Endpoint::get("users").segment(username)
}

pub fn user_portfolio_endpoint(username: &str) -> Endpoint {
    Endpoint::get("users").segment(username).segment("portfolio")
}

pub fn user_photos_endpoint(
    username: &str,
    pagination: Pagination,
    order: Order,
    stats: PhotoStatsOptions,
) -> Endpoint {
    Endpoint::get("users").segment(username).segment("photos").params(
        pagination
            .to_params()
            .with("order_by", order)
            .extend(stats.to_params()),
    )
}

pub fn user_likes_endpoint(username: &str, pagination: Pagination, order: Order) -> Endpoint {
    Endpoint::get("users")
        .segment(username)
        .segment("likes")
        .params(pagination.to_params().with("order_by", order))
}

pub fn user_collections_endpoint(username: &str, pagination: Pagination) -> Endpoint {
    Endpoint::get("users")
        .segment(username)
        .segment("collections")
        .params(pagination.to_params())
}

pub fn user_statistics_endpoint(username: &str, resolution: Resolution, quantity: u32) -> Endpoint {
    Endpoint::get("users").segment(username).segment("statistics").params(
        QueryParams::new()
            .with("resolution", resolution)
            .with("quantity", quantity),
    )
}

impl UnsplashClient {
    pub async fn user(&self, username: &str) -> Outcome<User> {
        self.fetch(&user_endpoint(username)).await
    }

    /// Retrieves the user's external portfolio link, if they set one.
    pub async fn user_portfolio(&self, username: &str) -> Outcome<Portfolio> {
        self.fetch(&user_portfolio_endpoint(username)).await
    }

    /// Lists photos uploaded by the user.
    pub async fn user_photos(
        &self,
        username: &str,
        pagination: Pagination,
        order: Order,
        stats: PhotoStatsOptions,
    ) -> Outcome<Vec<Photo>> {
        self.fetch(&user_photos_endpoint(username, pagination, order, stats))
            .await
    }

    /// Lists photos the user has liked.
    pub async fn user_likes(
        &self,
        username: &str,
        pagination: Pagination,
        order: Order,
    ) -> Outcome<Vec<Photo>> {
        self.fetch(&user_likes_endpoint(username, pagination, order))
            .await
    }

    pub async fn user_collections(
        &self,
        username: &str,
        pagination: Pagination,
    ) -> Outcome<Vec<Collection>> {
        self.fetch(&user_collections_endpoint(username, pagination))
            .await
    }

    /// Retrieves download and view totals for everything the user uploaded.
    pub async fn user_statistics(
        &self,
        username: &str,
        resolution: Resolution,
        quantity: u32,
    ) -> Outcome<UserStatistics> {
        self.fetch(&user_statistics_endpoint(username, resolution, quantity))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = include_str!("../../tests/fixtures/user.json");

    #[test]
    fn test_user_decodes_fixture() {
        let user: User = serde_json::from_str(USER).unwrap();

        assert_eq!(user.username, "jimmyexample");
        assert_eq!(user.display_name(), "James Example");
        assert_eq!(user.total_photos, 74);
        assert_eq!(user.links.self_link.path(), "/users/jimmyexample");
        assert!(user.profile_image.is_some());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let mut user: User = serde_json::from_str(USER).unwrap();
        user.name = Some("  ".to_string());
        assert_eq!(user.display_name(), "jimmyexample");
        user.name = None;
        assert_eq!(user.display_name(), "jimmyexample");
    }

    #[test]
    fn test_user_photos_endpoint_sends_stats_window() {
        let endpoint = user_photos_endpoint(
            "ngoni",
            Pagination::new(2, 40),
            Order::Oldest,
            PhotoStatsOptions::default(),
        );

        assert_eq!(endpoint.path(), "users/ngoni/photos");
        let query = endpoint.query();
        assert_eq!(query.get("page"), Some("2"));
        assert_eq!(query.get("per_page"), Some("30"));
        assert_eq!(query.get("order_by"), Some("oldest"));
        assert_eq!(query.get("stats"), Some("false"));
        assert_eq!(query.get("resolution"), Some("days"));
        assert_eq!(query.get("quantity"), Some("30"));
    }

    #[test]
    fn test_user_statistics_path() {
        let endpoint = user_statistics_endpoint("ngoni", Resolution::Days, 7);
        assert_eq!(endpoint.path(), "users/ngoni/statistics");
        assert_eq!(endpoint.query().get("quantity"), Some("7"));
    }

    #[test]
    fn test_collections_and_likes_paths() {
        assert_eq!(
            user_collections_endpoint("ngoni", Pagination::default()).path(),
            "users/ngoni/collections"
        );
        assert_eq!(
            user_likes_endpoint("ngoni", Pagination::default(), Order::Latest).path(),
            "users/ngoni/likes"
        );
        assert_eq!(user_portfolio_endpoint("ngoni").path(), "users/ngoni/portfolio");
    }
}
