//! Closed choice lists of the prediction form.
//!
//! The frontend renders exactly these options and the backend accepts exactly
//! these values.

use std::ops::RangeInclusive;

pub const PROMOTION_MIN: u32 = 0;
pub const PROMOTION_MAX: u32 = 726;

pub const CLUSTERS: RangeInclusive<u32> = 1..=17;
pub const STORES: RangeInclusive<u32> = 1..=54;

/// Ranges of the per-session random features, `(low, high)`
pub const SALES_LAG_RANGE: (f64, f64) = (0.0, 9.0);
pub const ROLLING_MEAN_RANGE: (f64, f64) = (0.0, 5.0);
pub const ROLLING_STD_RANGE: (f64, f64) = (0.0, 4.0);

pub fn cluster_ids() -> Vec<u32> {
    CLUSTERS.collect()
}

pub fn store_ids() -> Vec<u32> {
    STORES.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(cluster_ids().len(), 17);
        assert_eq!(store_ids().len(), 54);
        assert_eq!(cluster_ids().first(), Some(&1));
        assert_eq!(store_ids().last(), Some(&54));
    }
}
