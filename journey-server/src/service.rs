//! The query-serving engine facade.
//!
//! [`JourneyService`] is one immutable snapshot of every query structure:
//! the rail network, the suggestion trie, the review corpus and the fare
//! list. Queries borrow a snapshot and run to completion against it.
//!
//! [`ServiceHandle`] makes the snapshot refreshable: a rebuild constructs
//! the replacement off to the side and swaps the `Arc` under a short write
//! lock, so in-flight queries keep the old, fully-consistent snapshot.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::dataset::{Dataset, DatasetError, TrainFare};
use crate::domain::{DomainError, JourneyPath, Station, StationCode};
use crate::network::RailNetwork;
use crate::planner::{SearchConfig, find_alternatives, shortest_path};
use crate::search::{Review, ReviewMatch, search_reviews};
use crate::stats::{Comparator, PriceIndex, chain, quicksort};
use crate::suggest::{SuggestIndex, Suggestion};

/// Review-body words shorter than this are not indexed for autocomplete.
const MIN_KEYWORD_LEN: usize = 4;

/// Sort key for fare listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareSortKey {
    Price,
    Train,
    Class,
}

impl FromStr for FareSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "train" => Ok(Self::Train),
            "class" => Ok(Self::Class),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// Sort direction for fare listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Result of a fare range query, including how many records were skipped
/// for lacking a usable price.
#[derive(Debug, Clone)]
pub struct FareRange {
    pub fares: Vec<TrainFare>,
    pub skipped: usize,
}

/// One immutable snapshot of the query structures.
pub struct JourneyService {
    network: RailNetwork,
    suggestions: SuggestIndex,
    reviews: Vec<Review>,
    fares: Vec<TrainFare>,
    config: SearchConfig,
}

impl JourneyService {
    /// Build a snapshot from a dataset.
    ///
    /// The suggestion index is seeded from station names and codes (scored
    /// by their popularity counter) and from review-body keywords.
    pub fn build(dataset: &Dataset, config: SearchConfig) -> Result<Self, DomainError> {
        let network = RailNetwork::from_records(
            dataset.stations.iter().map(|s| s.to_station()).collect(),
            dataset.routes.iter().map(|r| r.to_segment()).collect(),
        )?;

        let mut suggestions = SuggestIndex::new();
        for record in &dataset.stations {
            suggestions.insert_station(&record.name, record.popularity, record.code);
            suggestions.insert_station(record.code.as_str(), record.popularity, record.code);
        }
        for review in &dataset.reviews {
            for keyword in keywords(&review.body) {
                suggestions.insert(&keyword, 1);
            }
        }

        debug!(
            stations = network.station_count(),
            segments = network.segment_count(),
            suggestions = suggestions.len(),
            reviews = dataset.reviews.len(),
            fares = dataset.fares.len(),
            "built journey service snapshot"
        );

        Ok(Self {
            network,
            suggestions,
            reviews: dataset.reviews.clone(),
            fares: dataset.fares.clone(),
            config,
        })
    }

    /// The underlying network (read-only).
    pub fn network(&self) -> &RailNetwork {
        &self.network
    }

    /// The active search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Look up a station record.
    pub fn station(&self, code: StationCode) -> Option<&Station> {
        self.network.station(code)
    }

    /// Shortest path between two stations, within the stop bound.
    ///
    /// `max_stops` overrides the configured bound when given.
    pub fn shortest(
        &self,
        from: StationCode,
        to: StationCode,
        max_stops: Option<usize>,
    ) -> Result<Option<JourneyPath>, DomainError> {
        let bound = max_stops.unwrap_or(self.config.max_stops);
        shortest_path(&self.network, from, to, bound)
    }

    /// Alternative routes between two stations, cheapest first.
    ///
    /// `limit` overrides the configured result cap when given.
    pub fn alternatives(
        &self,
        from: StationCode,
        to: StationCode,
        limit: Option<usize>,
    ) -> Result<Vec<JourneyPath>, DomainError> {
        let max_paths = limit.unwrap_or(self.config.max_alternatives);
        find_alternatives(
            &self.network,
            from,
            to,
            self.config.alt_max_stops,
            max_paths,
        )
    }

    /// Ranked autocomplete suggestions for a prefix.
    pub fn suggest(&self, prefix: &str, limit: Option<usize>) -> Vec<Suggestion> {
        let limit = limit.unwrap_or(self.config.suggestion_limit);
        self.suggestions.suggest(prefix, limit)
    }

    /// Keyword search over the review corpus.
    pub fn reviews_matching(&self, query: &str) -> Vec<ReviewMatch> {
        search_reviews(&self.reviews, query)
    }

    /// The fare list sorted by the given keys, first key primary.
    ///
    /// Train name is always appended as a final tie-break so the quicksort's
    /// instability cannot leak into responses.
    pub fn sorted_fares(
        &self,
        keys: &[FareSortKey],
        order: SortOrder,
        limit: Option<usize>,
    ) -> Vec<TrainFare> {
        let mut comparators: Vec<Comparator<TrainFare>> =
            keys.iter().map(|&key| fare_comparator(key)).collect();
        comparators.push(Box::new(|a: &TrainFare, b: &TrainFare| {
            a.train.cmp(&b.train)
        }));
        let cmp = chain(comparators);

        let mut fares = self.fares.clone();
        match order {
            SortOrder::Ascending => quicksort(&mut fares, cmp),
            SortOrder::Descending => quicksort(&mut fares, |a, b| cmp(b, a)),
        }
        if let Some(limit) = limit {
            fares.truncate(limit);
        }
        fares
    }

    /// Fares priced within `[min, max]`, ascending by price.
    ///
    /// The price index is built fresh for the call and discarded; fares
    /// without a usable price are skipped and counted.
    pub fn fares_in_range(&self, min: f64, max: f64) -> FareRange {
        let index = PriceIndex::from_items(self.fares.iter().cloned());
        let skipped = index.skipped();
        let fares = index
            .find_in_range(min, max)
            .into_iter()
            .cloned()
            .collect();
        FareRange { fares, skipped }
    }
}

/// Lower-cased alphanumeric words of at least `MIN_KEYWORD_LEN` characters.
fn keywords(body: &str) -> impl Iterator<Item = String> + '_ {
    body.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.chars().count() >= MIN_KEYWORD_LEN)
        .map(str::to_lowercase)
}

fn fare_comparator(key: FareSortKey) -> Comparator<TrainFare> {
    match key {
        // Priceless fares sort last so they don't pollute "cheapest first"
        FareSortKey::Price => Box::new(|a, b| match (a.price, b.price) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }),
        FareSortKey::Train => Box::new(|a, b| a.train.cmp(&b.train)),
        FareSortKey::Class => Box::new(|a, b| a.class.cmp(&b.class)),
    }
}

/// A clone-able handle to the current service snapshot.
///
/// Queries take a snapshot and run against it unlocked; `refresh` replaces
/// the snapshot wholesale from the dataset file.
#[derive(Clone)]
pub struct ServiceHandle {
    inner: Arc<RwLock<Arc<JourneyService>>>,
    dataset_path: PathBuf,
    config: SearchConfig,
}

impl ServiceHandle {
    /// Load the dataset file and build the initial snapshot.
    pub async fn load(
        dataset_path: impl Into<PathBuf>,
        config: SearchConfig,
    ) -> Result<Self, DatasetError> {
        let dataset_path = dataset_path.into();
        let dataset = Dataset::load(&dataset_path).await?;
        let service = JourneyService::build(&dataset, config.clone())?;

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(service))),
            dataset_path,
            config,
        })
    }

    /// The current snapshot. Cheap: clones an `Arc`.
    pub async fn snapshot(&self) -> Arc<JourneyService> {
        self.inner.read().await.clone()
    }

    /// Rebuild the snapshot from the dataset file.
    ///
    /// The replacement is built before the lock is taken; on any failure
    /// the existing snapshot stays in place and the error is returned.
    /// Returns the station count of the new snapshot.
    pub async fn refresh(&self) -> Result<usize, DatasetError> {
        let dataset = Dataset::load(&self.dataset_path).await?;
        let service = JourneyService::build(&dataset, self.config.clone())?;
        let count = service.network().station_count();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(service);
        drop(guard);

        info!(stations = count, "refreshed journey service snapshot");
        Ok(count)
    }
}
