//
//  unsplash-client
//  api/photos.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Photo records and endpoints.
//!
//! # Endpoints
//!
//! | Operation | Request | Body |
//! |-----------|---------|------|
//! | [`list_photos`](UnsplashClient::list_photos) | `GET photos` | `Vec<Photo>` |
//! | [`photo`](UnsplashClient::photo) | `GET photos/{id}` | [`Photo`] |
//! | [`random_photo`](UnsplashClient::random_photo) | `GET photos/random` | [`Photo`] |
//! | [`random_photos`](UnsplashClient::random_photos) | `GET photos/random?count=n` | `Vec<Photo>` |
//! | [`photo_statistics`](UnsplashClient::photo_statistics) | `GET photos/{id}/statistics` | [`PhotoStatistics`] |
//! | [`track_download`](UnsplashClient::track_download) | `GET photos/{id}/download` | [`DownloadLink`] |
//! | [`update_photo`](UnsplashClient::update_photo) | `PUT photos/{id}` | [`Photo`] |
//! | [`like_photo`](UnsplashClient::like_photo) | `POST photos/{id}/like` (201) | [`LikeResponse`] |
//! | [`unlike_photo`](UnsplashClient::unlike_photo) | `DELETE photos/{id}/like` | [`LikeResponse`] |
//!
//! The last three act on behalf of a user and need a bearer token with the
//! `write_photos` / `write_likes` scope.
//!
//! # Notes
//!
//! - The API guidelines require calling [`track_download`](UnsplashClient::track_download)
//!   every time the application downloads a photo.
//! - `random_photo` and `random_photos` hit the same path; the API returns an
//!   array only when `count` is sent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::client::UnsplashClient;
use super::common::{DownloadLink, Order, Orientation, Pagination, Resolution};
use super::outcome::Outcome;
use super::request::{Endpoint, QueryParams};
use super::stats::PhotoStatistics;
use super::users::User;

/// A photo as returned by the photo, listing, search and random endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,

    #[serde(default)]
    pub slug: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    pub width: u32,

    pub height: u32,

    /// Dominant colour as a hex string, e.g. `#60544D`.
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub blur_hash: Option<String>,

    pub likes: u64,

    /// Only meaningful for requests made with a bearer token.
    #[serde(default)]
    pub liked_by_user: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub alt_description: Option<String>,

    pub urls: PhotoUrls,

    pub links: PhotoLinks,

    /// The photographer.
    pub user: User,

    /// Only present on the single-photo endpoints.
    #[serde(default)]
    pub exif: Option<Exif>,

    /// Only present on the single-photo endpoints.
    #[serde(default)]
    pub location: Option<Location>,

    #[serde(default)]
    pub views: Option<u64>,

    #[serde(default)]
    pub downloads: Option<u64>,
}

impl Photo {
    /// Returns the image URL for `size`.
    ///
    /// ```rust,no_run
    /// use unsplash_client::api::{Photo, PhotoSize};
    ///
    /// fn thumbnail(photo: &Photo) -> &str {
    ///     photo.url(PhotoSize::Thumb).as_str()
    /// }
    /// ```
    pub fn url(&self, size: PhotoSize) -> &Url {
        match size {
            PhotoSize::Raw => &self.urls.raw,
            PhotoSize::Full => &self.urls.full,
            PhotoSize::Regular => &self.urls.regular,
            PhotoSize::Small => &self.urls.small,
            PhotoSize::Thumb => &self.urls.thumb,
        }
    }
}

/// The rendition sizes Unsplash serves for every photo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PhotoSize {
    Raw,
    Full,
    #[default]
    Regular,
    Small,
    Thumb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub raw: Url,
    pub full: Url,
    pub regular: Url,
    pub small: Url,
    pub thumb: Url,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoLinks {
    /// API URL of the photo.
    #[serde(rename = "self")]
    pub self_link: Url,

    /// Web page of the photo.
    pub html: Url,

    pub download: Url,

    /// Call through [`track_download`](UnsplashClient::track_download), not directly.
    pub download_location: Url,
}

/// Camera settings recorded in the photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exif {
    pub make: Option<String>,
    pub model: Option<String>,
    pub name: Option<String>,
    pub exposure_time: Option<String>,
    pub aperture: Option<String>,
    pub focal_length: Option<String>,
    pub iso: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub position: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Filters for the random photo endpoint.
///
/// # Example
///
/// ```rust
/// use unsplash_client::api::{Orientation, RandomPhotoFilters};
///
/// let filters = RandomPhotoFilters::new()
///     .collections(["499830", "194162"])
///     .orientation(Orientation::Portrait)
///     .featured(true);
///
/// let params = filters.to_params();
/// assert_eq!(params.get("collections"), Some("499830,194162"));
/// assert_eq!(params.get("orientation"), Some("portrait"));
/// assert_eq!(params.get("query"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandomPhotoFilters {
    collections: Vec<String>,
    featured: Option<bool>,
    username: Option<String>,
    query: Option<String>,
    orientation: Option<Orientation>,
}

impl RandomPhotoFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the selection to these public collection IDs.
    pub fn collections<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collections = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Limits the selection to featured photos.
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    /// Limits the selection to one photographer.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Limits the selection to photos matching a search term.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Returns the filter parameters; unset filters are absent.
    pub fn to_params(&self) -> QueryParams {
        let collections = (!self.collections.is_empty()).then(|| self.collections.join(","));
        QueryParams::new()
            .with_opt("collections", collections)
            .with_opt("featured", self.featured)
            .with_opt("username", self.username.as_deref())
            .with_opt("query", self.query.as_deref())
            .with_opt("orientation", self.orientation)
    }
}

/// Fields of a photo the owner can change. Unset fields are left untouched.
///
/// # Example
///
/// ```rust
/// use unsplash_client::api::PhotoUpdate;
///
/// let update = PhotoUpdate {
///     description: Some("Morning fog over the valley".to_string()),
///     tags: Some(vec!["fog".to_string(), "valley".to_string()]),
///     ..Default::default()
/// };
///
/// let params = update.to_params();
/// assert_eq!(params.get("tags"), Some("fog,valley"));
/// assert_eq!(params.get("show_on_profile"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhotoUpdate {
    pub description: Option<String>,
    pub show_on_profile: Option<bool>,
    pub tags: Option<Vec<String>>,
    pub location: LocationUpdate,
    pub exif: ExifUpdate,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationUpdate {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub confidential: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifUpdate {
    pub make: Option<String>,
    pub model: Option<String>,
    pub exposure_time: Option<String>,
    pub aperture_value: Option<String>,
    pub focal_length: Option<String>,
    pub iso_speed_ratings: Option<u32>,
}

impl PhotoUpdate {
    pub fn to_params(&self) -> QueryParams {
        let location = &self.location;
        let exif = &self.exif;
        QueryParams::new()
            .with_opt("description", self.description.as_deref())
            .with_opt("show_on_profile", self.show_on_profile)
            .with_opt("tags", self.tags.as_ref().map(|tags| tags.join(",")))
            .with_opt("location[latitude]", location.latitude)
            .with_opt("location[longitude]", location.longitude)
            .with_opt("location[name]", location.name.as_deref())
            .with_opt("location[city]", location.city.as_deref())
            .with_opt("location[country]", location.country.as_deref())
            .with_opt("location[confidential]", location.confidential)
            .with_opt("exif[make]", exif.make.as_deref())
            .with_opt("exif[model]", exif.model.as_deref())
            .with_opt("exif[exposure_time]", exif.exposure_time.as_deref())
            .with_opt("exif[aperture_value]", exif.aperture_value.as_deref())
            .with_opt("exif[focal_length]", exif.focal_length.as_deref())
            .with_opt("exif[iso_speed_ratings]", exif.iso_speed_ratings)
    }
}

/// Body of the like / unlike endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub photo: LikedPhoto,
    pub user: LikingUser,
}

/// The abbreviated photo embedded in a [`LikeResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikedPhoto {
    pub id: String,
    pub likes: u64,
    pub liked_by_user: bool,
}

/// The abbreviated user embedded in a [`LikeResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikingUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
}

pub fn list_photos_endpoint(pagination: Pagination, order: Order) -> Endpoint {
    Endpoint::get("photos").params(pagination.to_params().with("order_by", order))
}

pub fn photo_endpoint(id: &str) -> Endpoint {
    Endpoint::get("photos").segment(id)
}

pub fn random_photo_endpoint(filters: &RandomPhotoFilters) -> Endpoint {
    Endpoint::get("photos/random").params(filters.to_params())
}

pub fn random_photos_endpoint(filters: &RandomPhotoFilters, count: u32) -> Endpoint {
    Endpoint::get("photos/random").params(filters.to_params().with("count", count))
}

pub fn photo_statistics_endpoint(id: &str, resolution: Resolution, quantity: u32) -> Endpoint {
    Endpoint::get("photos").segment(id).segment("statistics").params(
        QueryParams::new()
            .with("resolution", resolution)
            .with("quantity", quantity),
    )
}

pub fn track_download_endpoint(id: &str) -> Endpoint {
    Endpoint::get("photos").segment(id).segment("download")
}

pub fn update_photo_endpoint(id: &str, update: &PhotoUpdate) -> Endpoint {
    Endpoint::put("photos")
        .segment(id)
        .params(update.to_params())
        .authenticated()
}

pub fn like_photo_endpoint(id: &str) -> Endpoint {
    Endpoint::post("photos")
        .segment(id)
        .segment("like")
        .expect_status(201)
        .authenticated()
}

pub fn unlike_photo_endpoint(id: &str) -> Endpoint {
    Endpoint::delete("photos").segment(id).segment("like").authenticated()
}

impl UnsplashClient {
    /// Lists one page of the editorial feed.
    pub async fn list_photos(&self, pagination: Pagination, order: Order) -> Outcome<Vec<Photo>> {
        self.fetch(&list_photos_endpoint(pagination, order)).await
    }

    /// Retrieves a single photo, including EXIF and location.
    pub async fn photo(&self, id: &str) -> Outcome<Photo> {
        self.fetch(&photo_endpoint(id)).await
    }

    /// Retrieves one random photo matching `filters`.
    pub async fn random_photo(&self, filters: &RandomPhotoFilters) -> Outcome<Photo> {
        self.fetch(&random_photo_endpoint(filters)).await
    }

    /// Retrieves `count` random photos matching `filters`.
    pub async fn random_photos(
        &self,
        filters: &RandomPhotoFilters,
        count: u32,
    ) -> Outcome<Vec<Photo>> {
        self.fetch(&random_photos_endpoint(filters, count)).await
    }

    /// Retrieves download, view and like totals plus their history over the
    /// last `quantity` days.
    pub async fn photo_statistics(
        &self,
        id: &str,
        resolution: Resolution,
        quantity: u32,
    ) -> Outcome<PhotoStatistics> {
        self.fetch(&photo_statistics_endpoint(id, resolution, quantity))
            .await
    }

    /// Registers a download with Unsplash and returns the file URL.
    pub async fn track_download(&self, id: &str) -> Outcome<DownloadLink> {
        self.fetch(&track_download_endpoint(id)).await
    }

    /// Updates a photo owned by the authenticated user.
    pub async fn update_photo(&self, id: &str, update: &PhotoUpdate) -> Outcome<Photo> {
        self.fetch(&update_photo_endpoint(id, update)).await
    }

    /// Likes a photo on behalf of the authenticated user. Idempotent.
    pub async fn like_photo(&self, id: &str) -> Outcome<LikeResponse> {
        self.fetch(&like_photo_endpoint(id)).await
    }

    /// Removes the authenticated user's like. Idempotent.
    pub async fn unlike_photo(&self, id: &str) -> Outcome<LikeResponse> {
        self.fetch(&unlike_photo_endpoint(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    const PHOTO: &str = include_str!("../../tests/fixtures/photo.json");

    #[test]
    fn test_photo_decodes_fixture() {
        let photo: Photo = serde_json::from_str(PHOTO).unwrap();

        assert_eq!(photo.id, "Dwu85P9SOIk");
        assert_eq!((photo.width, photo.height), (2448, 3264));
        assert_eq!(photo.user.username, "cristina_gottardi");
        assert_eq!(photo.exif.as_ref().and_then(|e| e.iso), Some(100));
        assert_eq!(
            photo.location.as_ref().and_then(|l| l.city.as_deref()),
            Some("Montreal")
        );
        assert_eq!(
            photo.url(PhotoSize::Thumb).as_str(),
            "https://images.unsplash.com/photo-1417325384643-aac51acc9e5d?w=200"
        );
        assert_eq!(photo.url(PhotoSize::default()), &photo.urls.regular);
    }

    #[test]
    fn test_list_photos_endpoint_clamps() {
        let endpoint = list_photos_endpoint(Pagination::new(0, 31), Order::Popular);
        assert_eq!(endpoint.path(), "photos");
        assert_eq!(endpoint.query().get("page"), Some("1"));
        assert_eq!(endpoint.query().get("per_page"), Some("30"));
        assert_eq!(endpoint.query().get("order_by"), Some("popular"));
    }

    #[test]
    fn test_random_filters_default_to_absent() {
        let params = RandomPhotoFilters::new().to_params();
        assert_eq!(params.present().count(), 0);

        let endpoint = random_photos_endpoint(&RandomPhotoFilters::new().query("cats"), 3);
        assert_eq!(endpoint.query().get("count"), Some("3"));
        assert_eq!(endpoint.query().get("query"), Some("cats"));
    }

    #[test]
    fn test_statistics_endpoint() {
        let endpoint = photo_statistics_endpoint("abc", Resolution::Days, 14);
        assert_eq!(endpoint.path(), "photos/abc/statistics");
        assert_eq!(endpoint.query().get("resolution"), Some("days"));
        assert_eq!(endpoint.query().get("quantity"), Some("14"));
    }

    #[test]
    fn test_user_scoped_endpoints() {
        let like = like_photo_endpoint("abc");
        assert_eq!(like.method(), &Method::POST);
        assert_eq!(like.expected_status(), 201);
        assert!(like.requires_auth());

        let unlike = unlike_photo_endpoint("abc");
        assert_eq!(unlike.method(), &Method::DELETE);
        assert_eq!(unlike.path(), "photos/abc/like");
        assert_eq!(unlike.expected_status(), 200);

        let update = update_photo_endpoint(
            "abc",
            &PhotoUpdate {
                show_on_profile: Some(false),
                location: LocationUpdate {
                    city: Some("Harare".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        assert_eq!(update.method(), &Method::PUT);
        assert!(update.requires_auth());
        assert_eq!(update.query().get("show_on_profile"), Some("false"));
        assert_eq!(update.query().get("location[city]"), Some("Harare"));
        assert_eq!(update.query().get("description"), None);
    }

    #[test]
    fn test_read_endpoints_are_not_authenticated() {
        for endpoint in [
            photo_endpoint("abc"),
            track_download_endpoint("abc"),
            random_photo_endpoint(&RandomPhotoFilters::new()),
        ] {
            assert!(!endpoint.requires_auth());
            assert_eq!(endpoint.method(), &Method::GET);
        }
    }
}
