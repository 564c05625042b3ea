//
//  unsplash-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Builder
//!
//! Turns an endpoint path plus a mapping of optional query parameters into a
//! fully-qualified URL.
//!
//! ## Rules
//!
//! - `client_id` is always the first query parameter.
//! - A parameter whose value is `None` is never transmitted.
//! - A parameter whose value is present (including the empty string) is
//!   transmitted exactly once, in insertion order.
//! - Names and values are form-encoded except for `,`, which stays literal.
//! - The path may or may not start with `/`; the result always has exactly one
//!   separator between the base URL and the path.
//! - Caller-supplied values added with [`Endpoint::segment`] stay a single
//!   path segment: `/`, `?` and `%` are percent-encoded and a bare `.` or `..`
//!   is dropped, so an ID can never climb out of its resource.
//!
//! The builder performs no clamping of `page` / `per_page`. That policy lives
//! in [`Pagination`](super::Pagination), which every paged endpoint uses.
//!
//! ## Example
//!
//! ```rust
//! use unsplash_client::api::request::{build_url, QueryParams};
//! use url::Url;
//!
//! let base = Url::parse("https://api.unsplash.com").unwrap();
//! let params = QueryParams::new()
//!     .with("page", 2)
//!     .with_opt("order_by", None::<&str>);
//!
//! let url = build_url(&base, "access-key", "/photos", &params);
//! assert_eq!(url.as_str(), "https://api.unsplash.com/photos?client_id=access-key&page=2");
//! ```

use reqwest::Method;
use url::{form_urlencoded, Url};

/// Name of the query parameter carrying the application's access key.
pub const CLIENT_ID_PARAM: &str = "client_id";

/// Ordered mapping of query parameter name to optional value.
///
/// Absent values are kept in the mapping (so endpoint declarations read like
/// the API documentation) but are skipped when the URL is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter with a present value.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((name.into(), Some(value.to_string())));
        self
    }

    /// Adds a parameter whose value may be absent.
    pub fn with_opt<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.pairs
            .push((name.into(), value.map(|value| value.to_string())));
        self
    }

    /// Appends every entry of `other`, preserving its order.
    pub fn extend(mut self, other: QueryParams) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    /// Returns the value of the first parameter named `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Iterates over the parameters that will actually be transmitted.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name.as_str(), value)))
    }

    /// Number of entries, absent ones included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

/// Describes one API operation: method, relative path, parameters, the status
/// code that counts as success and whether user authentication is required.
///
/// Endpoint descriptors are plain data; they are turned into requests by
/// [`UnsplashClient`](super::UnsplashClient).
///
/// # Example
///
/// ```rust
/// use unsplash_client::api::request::{Endpoint, QueryParams};
///
/// let endpoint = Endpoint::post("photos/abc/like")
///     .expect_status(201)
///     .authenticated();
///
/// assert_eq!(endpoint.path(), "photos/abc/like");
/// assert_eq!(endpoint.expected_status(), 201);
/// assert!(endpoint.requires_auth());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    method: Method,
    path: String,
    segments: Vec<String>,
    params: QueryParams,
    expected_status: u16,
    requires_auth: bool,
}

impl Endpoint {
    /// Creates an endpoint for `method` and `path`, expecting `200 OK`.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        let segments = split_path(&path).map(str::to_string).collect();
        Self {
            method,
            path,
            segments,
            params: QueryParams::new(),
            expected_status: 200,
            requires_auth: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends one path segment, e.g. a photo ID or username.
    ///
    /// The value is encoded as a single segment whatever it contains.
    ///
    /// ```rust
    /// use unsplash_client::api::request::Endpoint;
    /// use url::Url;
    ///
    /// let base = Url::parse("https://api.unsplash.com").unwrap();
    /// let endpoint = Endpoint::get("users").segment("a/b").segment("likes");
    /// assert_eq!(endpoint.url(&base, "key").path(), "/users/a%2Fb/likes");
    /// ```
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if !self.path.is_empty() && !self.path.ends_with('/') {
            self.path.push('/');
        }
        self.path.push_str(&value);
        self.segments.push(value);
        self
    }

    /// Replaces the query parameters.
    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Overrides the status code that counts as success (default 200).
    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Marks the endpoint as requiring a user bearer token.
    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.params
    }

    pub fn expected_status(&self) -> u16 {
        self.expected_status
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// Builds the absolute URL for this endpoint. See [`build_url`].
    pub fn url(&self, base: &Url, client_id: &str) -> Url {
        join(base, client_id, self.segments.iter().map(String::as_str), &self.params)
    }
}

/// Builds an absolute URL from a base, the access key, a relative path and a
/// parameter mapping.
///
/// Any query already present on `base` is discarded. Names and values are
/// encoded with `application/x-www-form-urlencoded` rules, leaving `,` literal.
pub fn build_url(base: &Url, client_id: &str, path: &str, params: &QueryParams) -> Url {
    join(base, client_id, split_path(path), params)
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn join<'a>(
    base: &Url,
    client_id: &str,
    segments: impl Iterator<Item = &'a str>,
    params: &QueryParams,
) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    // Bases without a hierarchical path are rejected by `with_base_url`.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty();
        for segment in segments.filter(|segment| !matches!(*segment, "." | "..")) {
            path.push(segment);
        }
    }

    let query: Vec<String> = std::iter::once((CLIENT_ID_PARAM, client_id))
        .chain(params.present())
        .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
        .collect();
    url.set_query(Some(&query.join("&")));

    url
}

/// Form-encodes a query component, leaving `,` literal so list values such as
/// `collections=1,2` read as sent.
fn encode(component: &str) -> String {
    form_urlencoded::byte_serialize(component.as_bytes())
        .collect::<String>()
        .replace("%2C", ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.unsplash.com").unwrap()
    }

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_client_id_is_first_and_always_present() {
        let url = build_url(&base(), "key", "stats/total", &QueryParams::new());
        assert_eq!(pairs(&url), vec![("client_id".into(), "key".into())]);

        let params = QueryParams::new().with("page", 3).with("per_page", 5);
        let url = build_url(&base(), "key", "photos", &params);
        assert_eq!(pairs(&url)[0], ("client_id".into(), "key".into()));
        assert_eq!(pairs(&url).len(), 3);
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let params = QueryParams::new()
            .with_opt("query", None::<String>)
            .with("count", 2)
            .with_opt("username", None::<String>);
        let url = build_url(&base(), "key", "photos/random", &params);

        let names: Vec<String> = pairs(&url).into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["client_id", "count"]);
    }

    #[test]
    fn test_empty_string_is_transmitted_once() {
        let params = QueryParams::new().with("description", "");
        let url = build_url(&base(), "key", "photos/abc", &params);

        let matching: Vec<_> = pairs(&url)
            .into_iter()
            .filter(|(k, _)| k == "description")
            .collect();
        assert_eq!(matching, vec![("description".into(), String::new())]);
    }

    #[test]
    fn test_path_separator_is_normalized() {
        let with_slash = build_url(&base(), "key", "/photos/abc", &QueryParams::new());
        let without_slash = build_url(&base(), "key", "photos/abc", &QueryParams::new());
        assert_eq!(with_slash, without_slash);
        assert_eq!(with_slash.path(), "/photos/abc");

        let nested = Url::parse("http://127.0.0.1:1234/proxy/").unwrap();
        let url = build_url(&nested, "key", "/stats/month", &QueryParams::new());
        assert_eq!(url.path(), "/proxy/stats/month");
    }

    #[test]
    fn test_segment_cannot_change_the_resource() {
        let climbing = Endpoint::get("photos").segment("../stats/total");
        let url = climbing.url(&base(), "key");
        assert_eq!(url.path(), "/photos/..%2Fstats%2Ftotal");
        assert_eq!(
            url.as_str(),
            "https://api.unsplash.com/photos/..%2Fstats%2Ftotal?client_id=key"
        );

        let nested = Endpoint::get("users").segment("x/likes");
        assert_eq!(nested.url(&base(), "key").path(), "/users/x%2Flikes");

        let query = Endpoint::get("photos").segment("a?b#c");
        let url = query.url(&base(), "key");
        assert_eq!(url.path(), "/photos/a%3Fb%23c");
        assert_eq!(url.query(), Some("client_id=key"));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_dot_segments_are_dropped() {
        for id in [".", ".."] {
            let endpoint = Endpoint::get("photos").segment(id).segment("like");
            assert_eq!(endpoint.url(&base(), "key").path(), "/photos/like");
        }
        let url = build_url(&base(), "key", "photos/../stats/total", &QueryParams::new());
        assert_eq!(url.path(), "/photos/stats/total");

        let encoded = Endpoint::get("photos").segment("%2e%2e");
        assert_eq!(encoded.url(&base(), "key").path(), "/photos/%252e%252e");
    }

    #[test]
    fn test_segment_keeps_display_path() {
        let endpoint = Endpoint::get("photos").segment("abc").segment("statistics");
        assert_eq!(endpoint.path(), "photos/abc/statistics");
        assert_eq!(
            endpoint.url(&base(), "key").path(),
            "/photos/abc/statistics"
        );
    }

    #[test]
    fn test_values_are_encoded() {
        let params = QueryParams::new()
            .with("query", "snowy mountains & lakes")
            .with("collections", "1,2");
        let url = build_url(&base(), "key", "search/photos", &params);

        assert!(!url.as_str().contains(' '));
        let decoded = pairs(&url);
        assert!(decoded.contains(&("query".into(), "snowy mountains & lakes".into())));
        assert!(decoded.contains(&("collections".into(), "1,2".into())));
    }

    #[test]
    fn test_commas_stay_literal() {
        let params = QueryParams::new()
            .with("query", "fog, rain")
            .with("collections", "1,2")
            .with("location[city]", "Montréal");
        let url = build_url(&base(), "key", "search/photos", &params);

        assert_eq!(
            url.query(),
            Some("client_id=key&query=fog,+rain&collections=1,2&location%5Bcity%5D=Montr%C3%A9al")
        );
        assert!(pairs(&url).contains(&("collections".into(), "1,2".into())));
    }

    #[test]
    fn test_base_query_is_discarded() {
        let base = Url::parse("https://api.unsplash.com/?client_id=stale").unwrap();
        let url = build_url(&base, "fresh", "photos", &QueryParams::new());
        assert_eq!(pairs(&url), vec![("client_id".into(), "fresh".into())]);
    }

    #[test]
    fn test_query_params_lookup() {
        let params: QueryParams = vec![
            ("a", Some("1".to_string())),
            ("b", None),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), None);
        assert_eq!(params.present().count(), 1);
    }
}
