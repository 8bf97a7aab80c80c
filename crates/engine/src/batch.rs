//! Fixed-capacity accumulation buffers.
//!
//! Each destination table gets its own [`Batch`]: facts accumulate in memory
//! and the owner flushes the whole buffer in one bulk insert once it reaches
//! capacity. Draining leaves the buffer empty and ready for reuse.

/// A named buffer that signals when it has reached its flush threshold.
///
/// `Batch` never flushes itself; [`is_full`](Batch::is_full) only reports
/// that the threshold has been crossed, and the owner decides when to call
/// [`drain`](Batch::drain). An oversized `extend` can therefore push the
/// buffer past its nominal capacity, which is fine: the capacity is a flush
/// trigger, not a hard limit.
#[derive(Debug)]
pub struct Batch<T> {
    name: &'static str,
    capacity: usize,
    items: Vec<T>,
}

impl<T> Batch<T> {
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    /// Takes every buffered item, leaving the batch empty.
    pub fn drain(&mut self) -> Vec<T> {
        std::mem::replace(&mut self.items, Vec::with_capacity(self.capacity))
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;
