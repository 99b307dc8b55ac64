use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Page-wide suppression of background scrolling.
///
/// The page is locked while at least one [`ScrollLockGuard`] is alive. Guards
/// release on drop, so every exit path of an overlay (explicit close, teardown,
/// or an early return) gives the scroll back to the page.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    depth: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let prev = self.depth.fetch_add(1, Ordering::AcqRel);
        if prev == 0 {
            tracing::debug!("page scroll locked");
        }

        ScrollLockGuard {
            depth: Arc::clone(&self.depth),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.depth.load(Ordering::Acquire) > 0
    }

    /// Number of live guards
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    depth: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let prev = self.depth.fetch_sub(1, Ordering::AcqRel);
        if prev == 1 {
            tracing::debug!("page scroll released");
        }
    }
}
