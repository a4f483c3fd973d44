//! Deciding when an operation should fail.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// Statistics about injection attempts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InjectorStats {
    /// Total number of attempts recorded.
    pub attempts: u64,
    /// Number of times failure was triggered.
    pub failures: u64,
    /// Number of successful (non-failed) operations.
    pub successes: u64,
}

/// Decides whether the next operation should fail, and keeps count.
///
/// # Example
///
/// ```rust
/// use testkit_bytes::chaos::{CountingInjector, FailureInjector};
///
/// let injector = CountingInjector::fail_first(1);
///
/// assert!(injector.should_fail());
/// injector.record_attempt();
/// assert!(!injector.should_fail());
/// injector.record_attempt();
///
/// assert_eq!(injector.stats().failures, 1);
/// assert_eq!(injector.stats().successes, 1);
/// ```
pub trait FailureInjector {
    /// Check if the next operation should fail.
    ///
    /// Call this before attempting the operation.
    fn should_fail(&self) -> bool;

    /// Record that an attempt was made, whether or not it failed.
    fn record_attempt(&self);

    /// Get current statistics.
    fn stats(&self) -> InjectorStats;

    /// Reset the injector to its initial state.
    fn reset(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CountingMode {
    /// Fail the first N attempts.
    First(u64),
    /// Fail every Nth attempt (1-indexed).
    Every(u64),
    /// Fail after N successful attempts.
    After(u64),
}

/// A failure injector driven by the attempt count.
#[derive(Debug)]
pub struct CountingInjector {
    mode: CountingMode,
    count: AtomicU64,
    stats: Mutex<InjectorStats>,
}

impl CountingInjector {
    fn with_mode(mode: CountingMode) -> Self {
        Self {
            mode,
            count: AtomicU64::new(0),
            stats: Mutex::new(InjectorStats::default()),
        }
    }

    /// Create an injector that fails the first N attempts.
    #[must_use]
    pub fn fail_first(n: u64) -> Self {
        Self::with_mode(CountingMode::First(n))
    }

    /// Create an injector that fails every Nth attempt.
    ///
    /// Uses 1-based indexing: `fail_every(3)` fails attempts 3, 6, 9, etc.
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    #[must_use]
    pub fn fail_every(n: u64) -> Self {
        assert!(n > 0, "fail_every requires n > 0");
        Self::with_mode(CountingMode::Every(n))
    }

    /// Create an injector that lets N attempts through, then fails the rest.
    #[must_use]
    pub fn fail_after(n: u64) -> Self {
        Self::with_mode(CountingMode::After(n))
    }

    /// Create an injector that fails every attempt.
    #[must_use]
    pub fn always() -> Self {
        Self::fail_after(0)
    }

    /// Create an injector that never fails.
    #[must_use]
    pub fn never() -> Self {
        Self::fail_first(0)
    }

    /// Returns the current attempt count.
    #[must_use]
    pub fn attempt_count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }
}

impl FailureInjector for CountingInjector {
    fn should_fail(&self) -> bool {
        let current = self.count.load(Ordering::SeqCst);
        let fails = match self.mode {
            CountingMode::First(n) => current < n,
            CountingMode::Every(n) => (current + 1) % n == 0,
            CountingMode::After(n) => current >= n,
        };

        let mut stats = self.stats.lock();
        if fails {
            stats.failures += 1;
        } else {
            stats.successes += 1;
        }
        fails
    }

    fn record_attempt(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.stats.lock().attempts += 1;
    }

    fn stats(&self) -> InjectorStats {
        *self.stats.lock()
    }

    fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
        *self.stats.lock() = InjectorStats::default();
    }
}
