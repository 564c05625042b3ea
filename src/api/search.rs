//
//  unsplash-client
//  api/search.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search endpoints.
//!
//! All three return a [`SearchResults`] page. Only photo search accepts
//! filters: a list of collection IDs (joined with `,`, omitted when empty) and
//! an orientation.

use super::client::UnsplashClient;
use super::collections::Collection;
use super::common::{Orientation, Pagination, SearchResults};
use super::outcome::Outcome;
use super::photos::Photo;
use super::request::{Endpoint, QueryParams};
use super::users::User;

fn search_params(query: &str, pagination: Pagination) -> QueryParams {
    QueryParams::new()
        .with("query", query)
        .extend(pagination.to_params())
}

pub fn search_photos_endpoint(
    query: &str,
    pagination: Pagination,
    collections: &[&str],
    orientation: Orientation,
) -> Endpoint {
    let collections = (!collections.is_empty()).then(|| collections.join(","));
    Endpoint::get("search/photos").params(
        search_params(query, pagination)
            .with_opt("collections", collections)
            .with("orientation", orientation),
    )
}

pub fn search_collections_endpoint(query: &str, pagination: Pagination) -> Endpoint {
    Endpoint::get("search/collections").params(search_params(query, pagination))
}

pub fn search_users_endpoint(query: &str, pagination: Pagination) -> Endpoint {
    Endpoint::get("search/users").params(search_params(query, pagination))
}

impl UnsplashClient {
    /// Searches photos, optionally within specific collections.
    pub async fn search_photos(
        &self,
        query: &str,
        pagination: Pagination,
        collections: &[&str],
        orientation: Orientation,
    ) -> Outcome<SearchResults<Photo>> {
        self.fetch(&search_photos_endpoint(
            query,
            pagination,
            collections,
            orientation,
        ))
        .await
    }

    pub async fn search_collections(
        &self,
        query: &str,
        pagination: Pagination,
    ) -> Outcome<SearchResults<Collection>> {
        self.fetch(&search_collections_endpoint(query, pagination))
            .await
    }

    pub async fn search_users(
        &self,
        query: &str,
        pagination: Pagination,
    ) -> Outcome<SearchResults<User>> {
        self.fetch(&search_users_endpoint(query, pagination)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_photos_params() {
        let endpoint = search_photos_endpoint(
            "cats",
            Pagination::new(1, 10),
            &["a", "b"],
            Orientation::Squarish,
        );

        assert_eq!(endpoint.path(), "search/photos");
        let query = endpoint.query();
        assert_eq!(query.get("query"), Some("cats"));
        assert_eq!(query.get("page"), Some("1"));
        assert_eq!(query.get("per_page"), Some("10"));
        assert_eq!(query.get("collections"), Some("a,b"));
        assert_eq!(query.get("orientation"), Some("squarish"));
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        let endpoint =
            search_photos_endpoint("cats", Pagination::default(), &[], Orientation::default());
        assert_eq!(endpoint.query().get("collections"), None);
        assert_eq!(endpoint.query().get("orientation"), Some("landscape"));
    }

    #[test]
    fn test_search_collections_and_users() {
        let collections = search_collections_endpoint("office", Pagination::new(3, 50));
        assert_eq!(collections.path(), "search/collections");
        assert_eq!(collections.query().get("page"), Some("3"));
        assert_eq!(collections.query().get("per_page"), Some("30"));

        let users = search_users_endpoint("tom", Pagination::default());
        assert_eq!(users.path(), "search/users");
        assert_eq!(users.query().get("query"), Some("tom"));
        assert_eq!(users.query().get("orientation"), None);
    }
}
