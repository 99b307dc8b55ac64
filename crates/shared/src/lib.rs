//! Page-level resources shared between the lightbox and its host.

pub mod icon;
pub mod key_listeners;
pub mod scroll_lock;

pub use icon::IconTag;
pub use key_listeners::{KeyListenerGuard, KeyListeners};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
