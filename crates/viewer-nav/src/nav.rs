use viewer_types::{Counter, Gallery, ImageRef};

/// Wraparound cursor over a [`Gallery`].
///
/// The cursor is `Some` exactly when the gallery is non-empty.
#[derive(Debug, Clone)]
pub struct NavState {
    images: Gallery,
    cur_idx: Option<usize>,
}

impl NavState {
    /// Cursor over `images` positioned at `start`, clamped into bounds
    pub fn starting_at(images: Gallery, start: usize) -> Self {
        let cur_idx = images.clamp_index(start);
        if cur_idx.is_some_and(|idx| idx != start) {
            tracing::warn!(start, total = images.len(), "start index out of range, clamped");
        }

        Self { images, cur_idx }
    }

    pub fn current(&self) -> Option<&ImageRef> {
        self.cur_idx.and_then(|idx| self.images.get(idx))
    }

    pub fn index(&self) -> Option<usize> {
        self.cur_idx
    }

    pub fn total(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &Gallery {
        &self.images
    }

    pub fn counter(&self) -> Option<Counter> {
        self.cur_idx.and_then(|idx| Counter::new(idx, self.images.len()))
    }

    /// Swap the image list, keeping the cursor where it was if it still fits.
    /// A previously empty list starts at the first image.
    pub fn set_images(&mut self, images: Gallery) {
        self.images = images;
        self.cur_idx = self.images.clamp_index(self.cur_idx.unwrap_or_default());
    }

    pub fn go_next(&mut self) -> Option<&ImageRef> {
        let current = self.cur_idx?;
        self.cur_idx = Some((current + 1) % self.images.len());
        self.current()
    }

    pub fn go_prev(&mut self) -> Option<&ImageRef> {
        let current = self.cur_idx?;

        self.cur_idx = Some(if current == 0 {
            self.images.len() - 1
        } else {
            current - 1
        });

        self.current()
    }

    /// Jump to `idx`, clamped into bounds
    pub fn go_to(&mut self, idx: usize) -> Option<&ImageRef> {
        self.cur_idx = self.images.clamp_index(idx);
        self.current()
    }
}
