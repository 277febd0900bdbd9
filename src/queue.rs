use std::collections::VecDeque;
use std::iter::FromIterator;

use crate::error::CollectionError;

const PREALLOC_LIMIT: usize = 1024;

/// Unbounded FIFO queue backed by a ring buffer.
///
/// Both `enqueue` and `dequeue` are amortized O(1); nothing is shifted on
/// removal from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    buffer: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            buffer: VecDeque::new(),
        }
    }

    /// Preallocates room for up to `capacity` items (capped). The queue
    /// still grows past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Queue {
            buffer: VecDeque::with_capacity(capacity.min(PREALLOC_LIMIT)),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.buffer.push_back(item);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.buffer.pop_front()
    }

    pub fn try_dequeue(&mut self) -> Result<T, CollectionError> {
        self.dequeue().ok_or(CollectionError::Empty)
    }

    pub fn peek(&self) -> Option<&T> {
        self.buffer.front()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn size(&self) -> usize {
        self.buffer.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Front-to-back, the order `dequeue` would return.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.buffer.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            buffer: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}
