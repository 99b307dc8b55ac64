use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

/// Label used for alt text when a gallery has no title.
pub const FALLBACK_TITLE: &str = "View Image";

/// Opaque image locator, never validated by the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new<S: Into<String>>(locator: S) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for ImageRef {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered images of one viewing session.
///
/// Cloning shares the underlying list, so the owning page can hand the same
/// gallery to the viewer on every open without copying it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery {
    images: Arc<[ImageRef]>,
}

impl Gallery {
    pub fn new<I, T>(images: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ImageRef>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&ImageRef> {
        self.images.get(idx)
    }

    /// Pull `idx` into `[0, len - 1]`, `None` when the gallery is empty
    pub fn clamp_index(&self, idx: usize) -> Option<usize> {
        self.images.len().checked_sub(1).map(|last| idx.min(last))
    }
}

impl<T: Into<ImageRef>> FromIterator<T> for Gallery {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Human readable position, e.g. `3 / 16`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub position: usize,
    pub total: usize,
}

impl Counter {
    /// Built from a 0-based index; galleries with fewer than two images get no counter
    pub fn new(index: usize, total: usize) -> Option<Self> {
        if total > 1 && index < total {
            Some(Self {
                position: index + 1,
                total,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.position, self.total)
    }
}

/// Snapshot of a viewer session as seen by the host page.
///
/// `current_index` is `None` while closed and while the gallery is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    pub current_index: Option<usize>,
    pub is_open: bool,
}

impl ViewerState {
    pub const CLOSED: ViewerState = ViewerState {
        current_index: None,
        is_open: false,
    };

    pub fn open(current_index: Option<usize>) -> Self {
        Self {
            current_index,
            is_open: true,
        }
    }
}
