//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::dataset::TrainFare;
use crate::domain::JourneyPath;
use crate::search::ReviewMatch;
use crate::service::JourneyService;
use crate::suggest::Suggestion;

/// Query for the shortest-path endpoint.
#[derive(Debug, Deserialize)]
pub struct ShortestPathQuery {
    /// Origin station code
    pub from: String,

    /// Destination station code
    pub to: String,

    /// Override for the configured stop bound
    pub max_stops: Option<usize>,
}

/// Query for the alternative-routes endpoint.
#[derive(Debug, Deserialize)]
pub struct AlternativesQuery {
    pub from: String,
    pub to: String,

    /// Maximum number of routes to return
    pub limit: Option<usize>,
}

/// Query for station/keyword autocomplete.
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    /// The prefix typed so far
    pub q: String,
    pub limit: Option<usize>,
}

/// Query for review keyword search.
#[derive(Debug, Deserialize)]
pub struct ReviewSearchQuery {
    pub q: String,
}

/// Query for the sorted fares listing.
#[derive(Debug, Deserialize)]
pub struct FaresQuery {
    /// Comma-separated sort keys, first is primary (e.g. "class,price")
    pub sort_by: Option<String>,

    /// "asc" (default) or "desc"
    pub order: Option<String>,

    pub limit: Option<usize>,
}

/// Query for the fare range endpoint.
#[derive(Debug, Deserialize)]
pub struct FareRangeQuery {
    pub min: f64,
    pub max: f64,
}

/// One hop of a journey in a response.
#[derive(Debug, Serialize)]
pub struct HopResult {
    /// Station code
    pub station: String,

    /// Station display name, when the snapshot knows it
    pub name: Option<String>,

    /// Distance of the segment that reached this hop (absent for the origin)
    pub distance: Option<f64>,

    /// Trains serving that segment
    pub trains: Vec<String>,
}

/// A journey path in a response.
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub hops: Vec<HopResult>,
    pub total_distance: f64,
    pub total_stops: usize,
}

impl PathResult {
    /// Render a path, resolving station names against the snapshot.
    pub fn from_path(path: &JourneyPath, service: &JourneyService) -> Self {
        let hops = path
            .hops
            .iter()
            .map(|hop| HopResult {
                station: hop.station.to_string(),
                name: service.station(hop.station).map(|s| s.name.clone()),
                distance: hop.via.as_ref().map(|seg| seg.distance),
                trains: hop
                    .via
                    .as_ref()
                    .map(|seg| seg.trains.clone())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            hops,
            total_distance: path.total_distance,
            total_stops: path.total_stops,
        }
    }
}

/// Response for the alternative-routes endpoint.
#[derive(Debug, Serialize)]
pub struct AlternativesResponse {
    pub routes: Vec<PathResult>,
}

/// One autocomplete suggestion in a response.
#[derive(Debug, Serialize)]
pub struct SuggestionResult {
    pub text: String,
    pub score: u64,
    /// Station code, when the suggestion resolves to a station
    pub station: Option<String>,
}

impl SuggestionResult {
    pub fn from_suggestion(s: &Suggestion) -> Self {
        Self {
            text: s.text.clone(),
            score: s.score,
            station: s.station.map(|c| c.to_string()),
        }
    }
}

/// Response for autocomplete.
#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<SuggestionResult>,
}

/// One matching review with highlight offsets (in chars).
#[derive(Debug, Serialize)]
pub struct ReviewMatchResult {
    pub id: String,
    pub body: String,
    pub offsets: Vec<usize>,
}

impl ReviewMatchResult {
    pub fn from_match(m: &ReviewMatch) -> Self {
        Self {
            id: m.id.clone(),
            body: m.body.clone(),
            offsets: m.offsets.clone(),
        }
    }
}

/// Response for review search.
#[derive(Debug, Serialize)]
pub struct ReviewSearchResponse {
    pub matches: Vec<ReviewMatchResult>,
}

/// Response for the sorted fares listing.
#[derive(Debug, Serialize)]
pub struct FaresResponse {
    pub fares: Vec<TrainFare>,
}

/// Response for the fare range query.
#[derive(Debug, Serialize)]
pub struct FareRangeResponse {
    pub fares: Vec<TrainFare>,

    /// Fare records ignored for lacking a usable price
    pub skipped: usize,
}

/// Error payload for all failing responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
