//! Search configuration for the journey planner.

/// Configuration parameters for pathfinding and suggestions.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of stops (traversed segments) for shortest-path
    /// search. Paths needing more hops are not considered, even if they
    /// would be shorter overall; this is admission control, not an
    /// optimality guarantee.
    pub max_stops: usize,

    /// Maximum number of stops for alternative-route enumeration.
    /// Deliberately tighter than `max_stops`: the DFS is exponential in
    /// this bound.
    pub alt_max_stops: usize,

    /// Maximum number of alternative routes to return.
    pub max_alternatives: usize,

    /// Default number of autocomplete suggestions to return.
    pub suggestion_limit: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_stops: usize,
        alt_max_stops: usize,
        max_alternatives: usize,
        suggestion_limit: usize,
    ) -> Self {
        Self {
            max_stops,
            alt_max_stops,
            max_alternatives,
            suggestion_limit,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_stops: 10,
            alt_max_stops: 5,
            max_alternatives: 5,
            suggestion_limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.max_stops, 10);
        assert_eq!(config.alt_max_stops, 5);
        assert_eq!(config.max_alternatives, 5);
        assert_eq!(config.suggestion_limit, 10);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(6, 3, 2, 20);

        assert_eq!(config.max_stops, 6);
        assert_eq!(config.alt_max_stops, 3);
        assert_eq!(config.max_alternatives, 2);
        assert_eq!(config.suggestion_limit, 20);
    }
}
