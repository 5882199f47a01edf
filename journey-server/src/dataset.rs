//! Dataset records and the JSON file loader.
//!
//! The authoritative station/route/review/fare data arrives as one JSON
//! document, produced by the surrounding application from its database.
//! The engine rebuilds its in-memory structures wholesale from it at
//! startup and on refresh.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, RouteSegment, Station, StationCode};
use crate::search::Review;
use crate::stats::Priced;

/// Error loading or validating a dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("inconsistent dataset: {0}")]
    Build(#[from] DomainError),
}

/// A station as it appears in the dataset, with its popularity counter
/// (how often it has been searched or booked; seeds suggestion ranking).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub code: StationCode,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default = "default_popularity")]
    pub popularity: u64,
}

fn default_popularity() -> u64 {
    1
}

impl StationRecord {
    /// The domain station this record describes.
    pub fn to_station(&self) -> Station {
        Station {
            code: self.code,
            name: self.name.clone(),
            city: self.city.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A route segment as it appears in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub source: StationCode,
    pub destination: StationCode,
    pub distance: f64,
    #[serde(default)]
    pub trains: Vec<String>,
}

impl RouteRecord {
    /// The directed segment this record describes.
    pub fn to_segment(&self) -> RouteSegment {
        RouteSegment::with_trains(
            self.source,
            self.destination,
            self.distance,
            self.trains.clone(),
        )
    }
}

/// A fare entry, possibly priceless (incomplete records are tolerated and
/// skipped by the price index).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainFare {
    pub train: String,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl Priced for TrainFare {
    fn price(&self) -> Option<f64> {
        self.price
    }
}

/// The whole dataset document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub fares: Vec<TrainFare>,
}

impl Dataset {
    /// Load a dataset from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let bytes = tokio::fs::read(path).await?;
        let dataset = serde_json::from_slice(&bytes)?;
        Ok(dataset)
    }
}
