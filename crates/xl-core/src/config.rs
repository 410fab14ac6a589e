//! Configuration for a [`Diviner`](crate::Diviner).

use crate::grid::MAX_DAY;

/// Configuration for a diviner.
#[derive(Debug, Clone)]
pub struct DivinerConfig {
    /// Maximum number of memoized results. 0 disables the cache.
    pub cache_capacity: usize,
    /// Largest accepted lunar day (29-31).
    pub max_day: u32,
}

impl Default for DivinerConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 256,
            max_day: MAX_DAY,
        }
    }
}

impl DivinerConfig {
    /// Set the cache capacity (0 disables memoization).
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the largest accepted lunar day (clamped to 29-31).
    pub fn with_max_day(mut self, max_day: u32) -> Self {
        self.max_day = max_day.clamp(29, MAX_DAY);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = DivinerConfig::default();
        assert_eq!(cfg.cache_capacity, 256);
        assert_eq!(cfg.max_day, 31);
    }

    #[test]
    fn builder_methods() {
        let cfg = DivinerConfig::default()
            .with_cache_capacity(8)
            .with_max_day(30);
        assert_eq!(cfg.cache_capacity, 8);
        assert_eq!(cfg.max_day, 30);
    }

    #[test]
    fn max_day_clamped() {
        assert_eq!(DivinerConfig::default().with_max_day(10).max_day, 29);
        assert_eq!(DivinerConfig::default().with_max_day(40).max_day, 31);
    }
}
