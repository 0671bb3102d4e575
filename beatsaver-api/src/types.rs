//! Request-side types: query parameter sets and search filters.
//!
//! Responses are not modelled; every operation returns the service's JSON
//! payload as a [`serde_json::Value`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Encoding of a single query parameter value.
///
/// | Rust type     | Wire form          |
/// |---------------|--------------------|
/// | `bool`        | `true` / `false`   |
/// | `f64`         | `4.0`, `4.5`       |
/// | integers      | `120`              |
/// | strings       | unchanged          |
/// | [`SortOrder`] | `Latest`, `Rating` |
pub trait QueryValue {
    /// Render the value as it appears after `key=`, before URL encoding.
    fn to_query_value(&self) -> String;
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

/// Non-finite values are not rejected here and go out as `NaN`, `inf` or
/// `-inf`; the service answers those with a 400.
impl QueryValue for f64 {
    fn to_query_value(&self) -> String {
        // Debug keeps the fractional part on whole numbers (4.0, not 4).
        format!("{self:?}")
    }
}

impl QueryValue for u32 {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_owned()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for SortOrder {
    fn to_query_value(&self) -> String {
        self.as_str().to_owned()
    }
}

/// Ordered set of query parameters, built fresh for each call.
///
/// Unset values are skipped at insertion time, so a key is either present
/// with a value or absent altogether. An explicit `false` or `0` is a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value`.
    pub fn push<V: QueryValue + ?Sized>(&mut self, key: &'static str, value: &V) {
        self.0.push((key, value.to_query_value()));
    }

    /// Append `key=value` only if `value` is `Some`.
    pub fn push_opt<V: QueryValue>(&mut self, key: &'static str, value: Option<&V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append `key=value` only if `value` is `Some` and not empty.
    pub fn push_non_empty(&mut self, key: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.push(key, value);
        }
    }

    /// Look up the value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parameter names in emission order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result ordering for map search, sent as `sortOrder`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Newest uploads first.
    #[default]
    Latest,
    /// Best text match first.
    Relevance,
    /// Highest rated first.
    Rating,
    /// Most recently curated first.
    Curated,
    /// Shuffled.
    Random,
}

impl SortOrder {
    /// The name the service expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Relevance => "Relevance",
            Self::Rating => "Rating",
            Self::Curated => "Curated",
            Self::Random => "Random",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for `GET /search/text/{page}`.
///
/// Every field except `page` and `sort_order` is optional; `None` means the
/// filter is not applied and the key is not sent. `Some(false)` and
/// `Some(0.0)` are real filter values and are always sent.
///
/// Deserializes from the service's own camelCase names, so filter sets can
/// be stored as JSON:
///
/// ```
/// use beatsaver_api::types::SearchQuery;
///
/// let q: SearchQuery = serde_json::from_str(r#"{"minNps": 4.0, "chroma": true}"#).unwrap();
/// assert_eq!(q.min_nps, Some(4.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchQuery {
    /// Zero-based result page (path segment, not a query parameter).
    pub page: u32,
    /// Free-text query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automapper: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chroma: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cinema: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curated: Option<bool>,
    /// Comma-separated environment names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followed: Option<bool>,
    /// Lower bound on upload date (ISO-8601), sent as `from`.
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    pub from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_spread: Option<bool>,
    /// Leaderboard filter (`All`, `Ranked`, `BeatLeader`, `ScoreSaber`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaderboard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bpm: Option<f64>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nps: Option<f64>,
    /// `0.0..=1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bpm: Option<f64>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_nps: Option<f64>,
    /// `0.0..=1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noodle: Option<bool>,
    pub sort_order: SortOrder,
    /// Tag expression, passed through verbatim (e.g. `tech|dance,!meme`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    /// Upper bound on upload date (ISO-8601), sent as `to`.
    #[serde(rename = "to", skip_serializing_if = "Option::is_none")]
    pub to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl SearchQuery {
    /// An unfiltered query for `page`.
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Build the query string parameters. `sortOrder` is always present;
    /// every other key appears only if its filter is set.
    pub fn to_params(&self) -> QueryParams {
        let mut p = QueryParams::new();
        p.push_opt("q", self.q.as_ref());
        p.push_opt("automapper", self.automapper.as_ref());
        p.push_opt("chroma", self.chroma.as_ref());
        p.push_opt("cinema", self.cinema.as_ref());
        p.push_opt("curated", self.curated.as_ref());
        p.push_opt("environments", self.environments.as_ref());
        p.push_opt("followed", self.followed.as_ref());
        p.push_opt("from", self.from_date.as_ref());
        p.push_opt("fullSpread", self.full_spread.as_ref());
        p.push_opt("leaderboard", self.leaderboard.as_ref());
        p.push_opt("maxBpm", self.max_bpm.as_ref());
        p.push_opt("maxDuration", self.max_duration.as_ref());
        p.push_opt("maxNps", self.max_nps.as_ref());
        p.push_opt("maxRating", self.max_rating.as_ref());
        p.push_opt("me", self.me.as_ref());
        p.push_opt("minBpm", self.min_bpm.as_ref());
        p.push_opt("minDuration", self.min_duration.as_ref());
        p.push_opt("minNps", self.min_nps.as_ref());
        p.push_opt("minRating", self.min_rating.as_ref());
        p.push_opt("noodle", self.noodle.as_ref());
        p.push("sortOrder", &self.sort_order);
        p.push_opt("tags", self.tags.as_ref());
        p.push_opt("to", self.to_date.as_ref());
        p.push_opt("verified", self.verified.as_ref());
        p
    }
}
