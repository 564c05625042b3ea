//
//  unsplash-client
//  tests/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoint operation tests: paths, query parameters and authenticated calls.

use mockito::{Matcher, Server};

use unsplash_client::api::collections::{collection_photos_endpoint, list_collections_endpoint};
use unsplash_client::api::photos::{list_photos_endpoint, random_photo_endpoint};
use unsplash_client::api::search::{
    search_collections_endpoint, search_photos_endpoint, search_users_endpoint,
};
use unsplash_client::api::users::{
    user_collections_endpoint, user_endpoint, user_likes_endpoint, user_photos_endpoint,
    PhotoStatsOptions,
};
use unsplash_client::api::{
    Endpoint, Order, Orientation, Outcome, Pagination, PhotoUpdate, RandomPhotoFilters,
    UnsplashClient,
};
use unsplash_client::Credentials;

const COLLECTION: &str = include_str!("fixtures/collection.json");
const PHOTO: &str = include_str!("fixtures/photo.json");

const LIKE_RESPONSE: &str = r#"{
  "photo": { "id": "abc", "likes": 13, "liked_by_user": true },
  "user": { "id": "u1", "username": "jimmyexample", "name": "James Example" }
}"#;

fn client(base_url: &str, credentials: Credentials) -> UnsplashClient {
    UnsplashClient::new(credentials)
        .unwrap()
        .with_base_url(base_url)
        .unwrap()
}

fn client_id() -> Matcher {
    Matcher::UrlEncoded("client_id".into(), "test-key".into())
}

#[tokio::test]
async fn test_search_photos_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/photos")
        .match_query(Matcher::AllOf(vec![
            client_id(),
            Matcher::UrlEncoded("query".into(), "mountains".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("per_page".into(), "30".into()),
            Matcher::UrlEncoded("collections".into(), "1,2".into()),
            Matcher::UrlEncoded("orientation".into(), "landscape".into()),
        ]))
        .with_status(200)
        .with_body(format!(
            r#"{{"total":1,"total_pages":1,"results":[{PHOTO}]}}"#
        ))
        .create_async()
        .await;

    let client = client(&server.url(), Credentials::new("test-key"));
    let results = client
        .search_photos(
            "mountains",
            Pagination::new(0, 50),
            &["1", "2"],
            Orientation::Landscape,
        )
        .await
        .into_result()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(results.total, 1);
    assert_eq!(results.results[0].id, "Dwu85P9SOIk");

    let url = client.build_url(&search_photos_endpoint(
        "mountains",
        Pagination::new(0, 50),
        &["1", "2"],
        Orientation::Landscape,
    ));
    assert_eq!(
        url.query(),
        Some("client_id=test-key&query=mountains&page=1&per_page=30&collections=1,2&orientation=landscape")
    );
}

#[test]
fn test_search_without_collections_omits_parameter() {
    let endpoint = search_photos_endpoint("fog", Pagination::default(), &[], Orientation::Portrait);
    assert_eq!(endpoint.query().get("collections"), None);
    assert_eq!(endpoint.query().get("orientation"), Some("portrait"));
}

#[tokio::test]
async fn test_curated_collection_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/collections/curated/123")
        .match_query(client_id())
        .with_status(200)
        .with_body(COLLECTION)
        .create_async()
        .await;

    let collection = client(&server.url(), Credentials::new("test-key"))
        .collection("123", true)
        .await
        .into_result()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(collection.title, "Makers: Cat and Ben");
    assert_eq!(collection.total_photos, 12);
}

#[test]
fn test_paging_is_clamped_on_every_paged_endpoint() {
    let paging = Pagination::new(0, 100);
    let endpoints: Vec<Endpoint> = vec![
        list_photos_endpoint(paging, Order::Latest),
        list_collections_endpoint(paging, false),
        list_collections_endpoint(paging, true),
        collection_photos_endpoint("206", paging),
        user_photos_endpoint("jimmy", paging, Order::Popular, PhotoStatsOptions::default()),
        user_likes_endpoint("jimmy", paging, Order::Oldest),
        user_collections_endpoint("jimmy", paging),
        search_photos_endpoint("cats", paging, &[], Orientation::Squarish),
        search_collections_endpoint("cats", paging),
        search_users_endpoint("cats", paging),
    ];

    for endpoint in endpoints {
        assert_eq!(endpoint.query().get("page"), Some("1"), "{}", endpoint.path());
        assert_eq!(endpoint.query().get("per_page"), Some("30"), "{}", endpoint.path());
    }
}

#[test]
fn test_default_random_filters_send_only_client_id() {
    let client = UnsplashClient::new(Credentials::new("test-key")).unwrap();
    let url = client.build_url(&random_photo_endpoint(&RandomPhotoFilters::default()));
    assert_eq!(
        url.as_str(),
        "https://api.unsplash.com/photos/random?client_id=test-key"
    );
}

#[tokio::test]
async fn test_like_and_unlike_send_bearer_token() {
    let mut server = Server::new_async().await;
    let like = server
        .mock("POST", "/photos/abc/like")
        .match_query(client_id())
        .match_header("authorization", "Bearer user-token")
        .with_status(201)
        .with_body(LIKE_RESPONSE)
        .create_async()
        .await;
    let unlike = server
        .mock("DELETE", "/photos/abc/like")
        .match_query(client_id())
        .match_header("authorization", "Bearer user-token")
        .with_status(200)
        .with_body(LIKE_RESPONSE.replace("true", "false"))
        .create_async()
        .await;

    let client = client(
        &server.url(),
        Credentials::new("test-key").with_bearer_token("user-token"),
    );

    let liked = client.like_photo("abc").await.into_result().unwrap();
    assert!(liked.photo.liked_by_user);
    assert_eq!(liked.user.username, "jimmyexample");

    let unliked = client.unlike_photo("abc").await.into_result().unwrap();
    assert!(!unliked.photo.liked_by_user);

    like.assert_async().await;
    unlike.assert_async().await;
}

#[tokio::test]
async fn test_update_photo_sends_fields_as_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/photos/Dwu85P9SOIk")
        .match_query(Matcher::AllOf(vec![
            client_id(),
            Matcher::UrlEncoded("description".into(), "Morning fog".into()),
            Matcher::UrlEncoded("location[city]".into(), "Montreal".into()),
        ]))
        .match_header("authorization", "Bearer user-token")
        .with_status(200)
        .with_body(PHOTO)
        .create_async()
        .await;

    let mut update = PhotoUpdate {
        description: Some("Morning fog".to_string()),
        ..Default::default()
    };
    update.location.city = Some("Montreal".to_string());

    let photo = client(
        &server.url(),
        Credentials::new("test-key").with_bearer_token("user-token"),
    )
    .update_photo("Dwu85P9SOIk", &update)
    .await
    .into_result()
    .unwrap();

    mock.assert_async().await;
    assert_eq!(photo.id, "Dwu85P9SOIk");
}

#[tokio::test]
async fn test_like_without_token_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/photos/abc/like")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    for credentials in [
        Credentials::new("test-key"),
        Credentials::new("test-key").with_bearer_token(""),
    ] {
        let outcome = client(&server.url(), credentials).like_photo("abc").await;
        assert_eq!(outcome, Outcome::MissingBearerToken);
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_ids_stay_inside_their_resource() {
    let mut server = Server::new_async().await;
    let stats = server
        .mock("GET", "/stats/total")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let photos = server
        .mock("GET", Matcher::Regex(r"^/photos/[^/]+$".to_string()))
        .match_query(client_id())
        .with_status(404)
        .with_body(r#"{"errors":["Couldn't find Photo"]}"#)
        .create_async()
        .await;

    let client = client(&server.url(), Credentials::new("test-key"));
    let outcome = client.photo("../stats/total").await;

    assert_eq!(outcome, Outcome::StatusMismatch { status: 404 });
    photos.assert_async().await;
    stats.assert_async().await;

    let url = client.build_url(&user_endpoint("x/likes"));
    assert_eq!(url.path(), "/users/x%2Flikes");
}
