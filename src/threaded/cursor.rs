use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared counter handing out the indices `0..end`, each exactly once.
///
/// Claiming is optimistic: load the next index, then try to bump it with a
/// compare-and-swap. Losing the race just means reloading and trying again;
/// nobody blocks.
#[derive(Debug)]
pub struct ClaimCursor {
    next: AtomicUsize,
    end: usize,
}

impl ClaimCursor {
    pub fn new(end: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            end,
        }
    }

    /// Reserves the next unclaimed index, or `None` once all are taken.
    pub fn claim(&self) -> Option<usize> {
        let mut current = self.next.load(Ordering::Relaxed);
        loop {
            if current >= self.end {
                return None;
            }
            match self.next.compare_exchange_weak(
                current,
                current + 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(claimed) => return Some(claimed),
                Err(actual) => current = actual,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end == 0
    }
}
