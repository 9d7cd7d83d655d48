use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts throws currently on the wire and remembers the highest value seen.
///
/// Shared by every hammer of a run; updates are single atomic operations.
#[derive(Debug, Default)]
pub struct InFlightGauge {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl InFlightGauge {
    /// Marks one throw as in flight until the guard is dropped.
    #[must_use]
    pub fn enter(&self) -> InFlightGuard<'_> {
        let now = self.current.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        self.peak.fetch_max(now, Ordering::Relaxed);
        InFlightGuard { gauge: self }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }
}

pub struct InFlightGuard<'gauge> {
    gauge: &'gauge InFlightGauge,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        loop {
            let current = self.gauge.current.load(Ordering::Relaxed);
            let Some(next) = current.checked_sub(1) else {
                break;
            };
            if self
                .gauge
                .current
                .compare_exchange(current, next, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                break;
            }
        }
    }
}
