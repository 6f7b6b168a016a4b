//! Image cursor for the proof detail modal.
//!
//! Unlike the card carousels, the modal gallery wraps in both directions.

/// Position within a fixed-length image list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    /// A cursor at the first of `len` images.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether paging controls are worth showing.
    pub fn has_multiple(&self) -> bool {
        self.len > 1
    }

    pub fn step_forward(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn step_back(&mut self) {
        if self.len > 0 {
            self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        }
    }

    /// Jump to `index`; out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Relative placement of image `i`, for slide transitions.
    pub fn placement(&self, i: usize) -> std::cmp::Ordering {
        i.cmp(&self.index)
    }
}
