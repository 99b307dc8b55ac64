use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Registry of page-level keyboard listeners.
///
/// A listener is registered by [`KeyListeners::subscribe`] and stays registered
/// until its guard is dropped. Hosts consult [`KeyListeners::is_listening`] to
/// decide whether global key events should be routed at all.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    active: Arc<AtomicUsize>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, owner: &'static str) -> KeyListenerGuard {
        self.active.fetch_add(1, Ordering::AcqRel);
        tracing::trace!(owner, "key listener registered");

        KeyListenerGuard {
            owner,
            active: Arc::clone(&self.active),
        }
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    pub fn is_listening(&self) -> bool {
        self.active() > 0
    }
}

#[derive(Debug)]
#[must_use = "the listener is unregistered as soon as the guard is dropped"]
pub struct KeyListenerGuard {
    owner: &'static str,
    active: Arc<AtomicUsize>,
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::AcqRel);
        tracing::trace!(owner = self.owner, "key listener removed");
    }
}
