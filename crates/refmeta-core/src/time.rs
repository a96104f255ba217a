//! Elapsed-time helpers.
//!
//! Converts monotonic tick counts into fractional milliseconds. The division
//! happens in floating point so sub-millisecond precision survives.

use std::time::{Duration, Instant};

/// Tick frequency of the process monotonic clock as exposed here: one tick per
/// nanosecond.
pub const TICKS_PER_SECOND: u64 = 1_000_000_000;

/// Convert `ticks` at `frequency` ticks per second into milliseconds.
///
/// # Example
///
/// ```
/// use refmeta_core::time::elapsed_millis;
///
/// assert_eq!(elapsed_millis(1500, 1000), 1500.0);
/// assert_eq!(elapsed_millis(1, 4000), 0.25);
/// ```
pub fn elapsed_millis(ticks: u64, frequency: u64) -> f64 {
    ticks as f64 / frequency as f64 * 1000.0
}

/// Fractional-millisecond view of a measured interval.
pub trait ElapsedMillis {
    fn elapsed_millis(&self) -> f64;
}

impl ElapsedMillis for Duration {
    /// Length of the duration.
    fn elapsed_millis(&self) -> f64 {
        // u128 nanos only overflow u64 after ~584 years.
        let ticks = u64::try_from(self.as_nanos()).unwrap_or(u64::MAX);
        elapsed_millis(ticks, TICKS_PER_SECOND)
    }
}

impl ElapsedMillis for Instant {
    /// Time passed since this instant.
    fn elapsed_millis(&self) -> f64 {
        self.elapsed().elapsed_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_seconds() {
        assert_eq!(elapsed_millis(1500, 1000), 1500.0);
        assert_eq!(elapsed_millis(3, 1), 3000.0);
    }

    #[test]
    fn test_zero_ticks() {
        assert_eq!(elapsed_millis(0, 1000), 0.0);
        assert_eq!(elapsed_millis(0, TICKS_PER_SECOND), 0.0);
    }

    #[test]
    fn test_keeps_sub_millisecond_precision() {
        assert_eq!(elapsed_millis(1, 4000), 0.25);
        assert!((elapsed_millis(1_500_000, TICKS_PER_SECOND) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_duration_extension() {
        let d = Duration::from_micros(2_500);
        assert!((d.elapsed_millis() - 2.5).abs() < 1e-12);
        assert_eq!(Duration::ZERO.elapsed_millis(), 0.0);
    }

    #[test]
    fn test_instant_extension_is_monotonic() {
        let start = Instant::now();
        let first = start.elapsed_millis();
        std::thread::sleep(Duration::from_millis(2));
        let second = start.elapsed_millis();
        assert!(first >= 0.0);
        assert!(second >= first);
        assert!(second >= 2.0);
    }
}
