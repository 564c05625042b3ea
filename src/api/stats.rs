//
//  unsplash-client
//  api/stats.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Statistics records and the site-wide stats endpoints.
//!
//! Per-photo and per-user statistics are fetched through
//! [`photo_statistics`](UnsplashClient::photo_statistics) and
//! [`user_statistics`](UnsplashClient::user_statistics); their records live
//! here alongside the site-wide totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::client::UnsplashClient;
use super::common::Resolution;
use super::outcome::Outcome;
use super::request::Endpoint;

/// Site-wide totals since launch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalStats {
    pub photos: u64,
    pub downloads: u64,
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub photographers: u64,
    #[serde(default)]
    pub pixels: u64,
    #[serde(default)]
    pub downloads_per_second: u64,
    #[serde(default)]
    pub views_per_second: u64,
    #[serde(default)]
    pub developers: u64,
    #[serde(default)]
    pub applications: u64,
    #[serde(default)]
    pub requests: u64,
}

/// Site-wide activity over the past 30 days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthStats {
    pub downloads: u64,
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub new_photos: u64,
    #[serde(default)]
    pub new_photographers: u64,
    #[serde(default)]
    pub new_pixels: u64,
    #[serde(default)]
    pub new_developers: u64,
    #[serde(default)]
    pub new_applications: u64,
    #[serde(default)]
    pub new_requests: u64,
}

/// Statistics for one photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoStatistics {
    pub id: String,
    pub downloads: StatDetail,
    pub views: StatDetail,
    #[serde(default)]
    pub likes: Option<StatDetail>,
}

/// Statistics across every photo a user uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatistics {
    pub username: String,
    pub downloads: StatDetail,
    pub views: StatDetail,
    #[serde(default)]
    pub likes: Option<StatDetail>,
}

/// A running total with its recent history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDetail {
    pub total: u64,
    pub historical: Historical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Historical {
    /// Sum over the window.
    pub change: i64,
    #[serde(default)]
    pub average: Option<u64>,
    pub resolution: Resolution,
    pub quantity: u32,
    pub values: Vec<HistoricalValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalValue {
    pub date: NaiveDate,
    pub value: u64,
}

impl Historical {
    /// The day with the highest value, if any.
    pub fn peak(&self) -> Option<&HistoricalValue> {
        self.values.iter().max_by_key(|v| v.value)
    }
}

pub fn total_stats_endpoint() -> Endpoint {
    Endpoint::get("stats/total")
}

pub fn month_stats_endpoint() -> Endpoint {
    Endpoint::get("stats/month")
}

impl UnsplashClient {
    pub async fn total_stats(&self) -> Outcome<TotalStats> {
        self.fetch(&total_stats_endpoint()).await
    }

    pub async fn month_stats(&self) -> Outcome<MonthStats> {
        self.fetch(&month_stats_endpoint()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHOTO_STATISTICS: &str = include_str!("../../tests/fixtures/photo_statistics.json");

    #[test]
    fn test_photo_statistics_decodes_fixture() {
        let stats: PhotoStatistics = serde_json::from_str(PHOTO_STATISTICS).unwrap();

        assert_eq!(stats.id, "LF8gK8-HGSg");
        assert_eq!(stats.downloads.total, 1545);
        assert_eq!(stats.views.historical.resolution, Resolution::Days);
        assert_eq!(stats.downloads.historical.values.len(), 3);

        let peak = stats.downloads.historical.peak().unwrap();
        assert_eq!(peak.date, NaiveDate::from_ymd_opt(2017, 1, 28).unwrap());
        assert!(stats.likes.is_some());
    }

    #[test]
    fn test_totals_tolerate_missing_counters() {
        let json = r#"{"photos": 10, "downloads": 20, "views": 30}"#;
        let stats: TotalStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.views, 30);
        assert_eq!(stats.developers, 0);
    }

    #[test]
    fn test_paths() {
        assert_eq!(total_stats_endpoint().path(), "stats/total");
        assert_eq!(month_stats_endpoint().path(), "stats/month");
        assert!(total_stats_endpoint().query().is_empty());
    }
}
