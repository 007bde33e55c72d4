//! Decision policy: thresholding the chance into a verdict.
//!
//! The threshold is `52`, not the `50` midpoint. A chance of exactly 50 or 51 is still
//! "not placed".

/// Minimum chance (inclusive) for a "placed" verdict.
pub const PLACEMENT_THRESHOLD: u8 = 52;

#[inline]
#[must_use]
pub fn is_placed(chance: u8) -> bool {
    chance >= PLACEMENT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive_at_52() {
        assert!(!is_placed(0));
        assert!(!is_placed(50));
        assert!(!is_placed(51));
        assert!(is_placed(52));
        assert!(is_placed(100));
    }
}
