//! Cancel-and-replace debounce cell for settings reactions.
use std::mem;
use std::time::{Duration, Instant};

/// Quiet period before a settings change takes effect. A settings slider
/// can notify on every intermediate value; only the settled one counts.
pub const SETTLE_DELAY: Duration = Duration::from_millis(250);

/// Per-key debounce state. At most one timer is in flight: a new
/// [`begin`](Debounce::begin) always replaces any pending one, and a
/// replaced timer never fires.
#[derive(Debug)]
pub enum Debounce<T> {
    Idle,
    Pending { deadline: Instant, snapshot: T },
}

impl<T> Default for Debounce<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Debounce<T> {
    pub fn begin(&mut self, deadline: Instant, snapshot: T) {
        *self = Self::Pending { deadline, snapshot };
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        match self {
            Self::Pending { deadline, .. } => Some(*deadline),
            Self::Idle => None,
        }
    }

    /// Take the snapshot if the deadline has passed, returning to `Idle`.
    /// A cell that is not yet due is left untouched.
    pub fn fire_due(&mut self, now: Instant) -> Option<T> {
        match mem::replace(self, Self::Idle) {
            Self::Pending { deadline, snapshot } if now >= deadline => Some(snapshot),
            other => {
                *self = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_replaces_a_pending_timer() {
        let start = Instant::now();
        let mut cell = Debounce::Idle;
        cell.begin(start + Duration::from_millis(250), 10);
        cell.begin(start + Duration::from_millis(400), 20);

        // The first deadline passing fires nothing; the cell carries the
        // replacement only.
        assert_eq!(cell.fire_due(start + Duration::from_millis(300)), None);
        assert!(cell.is_pending());
        assert_eq!(cell.fire_due(start + Duration::from_millis(400)), Some(20));
        assert!(!cell.is_pending());
    }

    #[test]
    fn firing_early_leaves_the_cell_pending() {
        let start = Instant::now();
        let mut cell = Debounce::Idle;
        cell.begin(start + Duration::from_millis(250), ());
        assert_eq!(cell.fire_due(start), None);
        assert_eq!(cell.deadline(), Some(start + Duration::from_millis(250)));
    }

    #[test]
    fn fired_cell_does_not_fire_again() {
        let start = Instant::now();
        let mut cell = Debounce::Idle;
        cell.begin(start, 1);
        assert_eq!(cell.fire_due(start), Some(1));
        assert_eq!(cell.fire_due(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut cell = Debounce::Idle;
        cell.begin(start, 1);
        cell.cancel();
        assert_eq!(cell.fire_due(start + Duration::from_secs(1)), None);
        assert_eq!(cell.deadline(), None);
    }
}
