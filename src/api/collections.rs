//
//  unsplash-client
//  api/collections.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Collection records and endpoints.
//!
//! Collections come in two flavours: regular (user-made, `collections/{id}`)
//! and curated (editorial, `collections/curated/{id}`). Listings can be limited
//! to featured collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::client::UnsplashClient;
use super::common::Pagination;
use super::outcome::Outcome;
use super::photos::{Photo, PhotoUrls};
use super::request::Endpoint;
use super::users::User;

/// A collection of photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_collected_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub curated: bool,

    #[serde(default)]
    pub featured: bool,

    pub total_photos: u64,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub share_key: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<Tag>>,

    #[serde(default)]
    pub links: Option<CollectionLinks>,

    /// The curator. Absent on some embedded collections.
    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub cover_photo: Option<Box<Photo>>,

    #[serde(default)]
    pub preview_photos: Option<Vec<PreviewPhoto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Url,
    pub html: Url,
    pub photos: Url,
    #[serde(default)]
    pub related: Option<Url>,
}

/// Thumbnail entry in [`Collection::preview_photos`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewPhoto {
    pub id: String,
    #[serde(default)]
    pub blur_hash: Option<String>,
    pub urls: PhotoUrls,
}

fn collection_root(curated: bool) -> &'static str {
    if curated {
        "collections/curated"
    } else {
        "collections"
    }
}

/// `collections`, or `collections/featured` when `featured` is set.
pub fn list_collections_endpoint(pagination: Pagination, featured: bool) -> Endpoint {
    let path = if featured {
        "collections/featured"
    } else {
        "collections"
    };
    Endpoint::get(path).params(pagination.to_params())
}

pub fn collection_endpoint(id: &str, curated: bool) -> Endpoint {
    Endpoint::get(collection_root(curated)).segment(id)
}

pub fn collection_photos_endpoint(id: &str, pagination: Pagination) -> Endpoint {
    Endpoint::get("collections")
        .segment(id)
        .segment("photos")
        .params(pagination.to_params())
}

impl UnsplashClient {
    /// Lists one page of collections, optionally only featured ones.
    pub async fn list_collections(
        &self,
        pagination: Pagination,
        featured: bool,
    ) -> Outcome<Vec<Collection>> {
        self.fetch(&list_collections_endpoint(pagination, featured))
            .await
    }

    /// Retrieves a regular or curated collection.
    pub async fn collection(&self, id: &str, curated: bool) -> Outcome<Collection> {
        self.fetch(&collection_endpoint(id, curated)).await
    }

    pub async fn collection_photos(&self, id: &str, pagination: Pagination) -> Outcome<Vec<Photo>> {
        self.fetch(&collection_photos_endpoint(id, pagination))
            .await
    }
}
