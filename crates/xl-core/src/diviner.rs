//! Memoizing front door to the engine.
//!
//! Results are a pure function of the request, so the cache never needs
//! invalidation; when it fills up it is simply cleared.

use std::collections::HashMap;

use tracing::trace;

use crate::config::DivinerConfig;
use crate::error::XlResult;
use crate::grid::{DivinationRequest, DivinationResult, compute_request};

/// Runs divinations and remembers recent results.
#[derive(Debug, Default)]
pub struct Diviner {
    config: DivinerConfig,
    cache: HashMap<DivinationRequest, DivinationResult>,
    hits: u64,
    misses: u64,
}

impl Diviner {
    /// Create a diviner with the given configuration.
    pub fn new(config: DivinerConfig) -> Self {
        Self {
            config,
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DivinerConfig {
        &self.config
    }

    /// Validate a request against this diviner's day limit.
    pub fn request(&self, month: u32, day: u32, hour: u32) -> XlResult<DivinationRequest> {
        DivinationRequest::with_max_day(month, day, hour, self.config.max_day)
    }

    /// Validate the inputs and divine.
    pub fn cast(&mut self, month: u32, day: u32, hour: u32) -> XlResult<DivinationResult> {
        let request = self.request(month, day, hour)?;
        self.cast_request(&request)
    }

    /// Divine for a validated request, reusing a cached result when present.
    pub fn cast_request(&mut self, request: &DivinationRequest) -> XlResult<DivinationResult> {
        if let Some(hit) = self.cache.get(request) {
            self.hits += 1;
            trace!(?request, "cache hit");
            return Ok(hit.clone());
        }

        self.misses += 1;
        let result = compute_request(request)?;

        if self.config.cache_capacity > 0 {
            if self.cache.len() >= self.config.cache_capacity {
                trace!(entries = self.cache.len(), "cache full, clearing");
                self.cache.clear();
            }
            self.cache.insert(*request, result.clone());
        }

        Ok(result)
    }

    /// Number of cached results.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// `(hits, misses)` since creation.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XlError;
    use crate::grid::compute_grid;

    #[test]
    fn cached_result_matches_fresh() {
        let mut d = Diviner::default();
        let first = d.cast(4, 9, 6).unwrap();
        let second = d.cast(4, 9, 6).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, compute_grid(4, 9, 6).unwrap());
        assert_eq!(d.stats(), (1, 1));
        assert_eq!(d.cached(), 1);
    }

    #[test]
    fn zero_capacity_disables_cache() {
        let mut d = Diviner::new(DivinerConfig::default().with_cache_capacity(0));
        d.cast(1, 1, 1).unwrap();
        d.cast(1, 1, 1).unwrap();
        assert_eq!(d.cached(), 0);
        assert_eq!(d.stats(), (0, 2));
    }

    #[test]
    fn full_cache_is_cleared() {
        let mut d = Diviner::new(DivinerConfig::default().with_cache_capacity(2));
        d.cast(1, 1, 1).unwrap();
        d.cast(1, 1, 2).unwrap();
        assert_eq!(d.cached(), 2);
        d.cast(1, 1, 3).unwrap();
        assert_eq!(d.cached(), 1);
    }

    #[test]
    fn day_limit_from_config() {
        let mut d = Diviner::new(DivinerConfig::default().with_max_day(30));
        assert_eq!(
            d.cast(1, 31, 1),
            Err(XlError::DayOutOfRange { day: 31, max: 30 })
        );
        assert!(d.cast(1, 30, 1).is_ok());
    }
}
