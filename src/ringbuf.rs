use std::fmt;

use tracing::{debug, trace};

use crate::error::{BufferError, BufferResult};

/// A fixed-capacity FIFO queue over a circular slot array.
///
/// Storage is allocated once in [`RingBuffer::new`] and never resized. Emptiness and
/// fullness are told apart by `size`, since `head == tail` holds in both states.
#[derive(Clone)]
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    /// Oldest occupied slot; meaningless while `size == 0`.
    head: usize,
    /// Next slot to write. Always `(head + size) % capacity`.
    tail: usize,
    size: usize,
}

impl<T> RingBuffer<T> {
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be positive");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            tail: 0,
            size: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.slots.len()
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Append `item`, failing with [`BufferError::Full`] when no slot is free.
    pub fn enqueue(&mut self, item: T) -> BufferResult<()> {
        if self.is_full() {
            return Err(BufferError::Full);
        }
        self.write_tail(item);
        self.size += 1;
        Ok(())
    }

    /// Same as [`enqueue`](Self::enqueue) but reports a full buffer as `false`.
    /// The rejected item is dropped.
    pub fn try_enqueue(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        self.write_tail(item);
        self.size += 1;
        true
    }

    /// Append `item`, discarding the oldest element if the buffer is full.
    pub fn enqueue_overwrite(&mut self, item: T) {
        if self.is_full() {
            trace!(head = self.head, "ring buffer full, evicting oldest element");
            self.write_tail(item);
            self.head = self.advance(self.head);
        } else {
            self.write_tail(item);
            self.size += 1;
        }
    }

    fn write_tail(&mut self, item: T) {
        self.slots[self.tail] = Some(item);
        self.tail = self.advance(self.tail);
    }

    /// Borrow the oldest element without removing it.
    pub fn peek(&self) -> BufferResult<&T> {
        if self.is_empty() {
            return Err(BufferError::Empty);
        }
        self.slots[self.head].as_ref().ok_or(BufferError::Empty)
    }

    /// Remove and return the oldest element. Its slot is left empty.
    pub fn dequeue(&mut self) -> BufferResult<T> {
        self.try_dequeue().ok_or(BufferError::Empty)
    }

    pub fn try_dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.advance(self.head);
        self.size -= 1;
        item
    }

    /// Forget all elements without touching the slots. Stale values stay allocated
    /// until they are overwritten or [`clear`](Self::clear) runs.
    pub fn reset(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.size = 0;
    }

    /// Drop every stored value, then [`reset`](Self::reset).
    pub fn clear(&mut self) {
        debug!(capacity = self.capacity(), len = self.size, "clearing ring buffer");
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.reset();
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buf: self,
            offset: 0,
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("items", &DebugItems(self))
            .finish()
    }
}

struct DebugItems<'a, T>(&'a RingBuffer<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    buf: &'a RingBuffer<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.offset < self.buf.size {
            let index = (self.buf.head + self.offset) % self.buf.capacity();
            self.offset += 1;
            if let Some(item) = self.buf.slots[index].as_ref() {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buf.size - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
