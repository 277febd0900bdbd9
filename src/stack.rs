use tracing::debug;

use crate::error::CapacityError;

/// Largest up-front allocation `new` makes; beyond it the `Vec` grows on push.
const PREALLOC_LIMIT: usize = 1024;

// =============================================================================
// Bounded LIFO stack
// =============================================================================

/// A LIFO stack that never holds more than `capacity` items.
///
/// A full stack rejects pushes instead of growing; the rejection is an
/// ordinary return value, not a panic. A capacity of 0 rejects every push.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        BoundedStack {
            items: Vec::with_capacity(capacity.min(PREALLOC_LIMIT)),
            capacity,
        }
    }

    /// Pushes `item` on top. Returns `false` and leaves the stack untouched
    /// when it is already full.
    pub fn push(&mut self, item: T) -> bool {
        self.try_push(item).is_ok()
    }

    /// Like [`push`](Self::push), but hands the rejected item back.
    pub fn try_push(&mut self, item: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            debug!(capacity = self.capacity, "push rejected, stack full");
            return Err(CapacityError::new(item, self.capacity));
        }
        self.items.push(item);
        Ok(())
    }

    /// Pushes items until the stack fills up.
    ///
    /// Returns how many were accepted, or the first rejected item inside a
    /// [`CapacityError`]. Items after the rejected one are not consumed.
    pub fn push_all<I>(&mut self, iter: I) -> Result<usize, CapacityError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut accepted = 0;
        for item in iter {
            self.try_push(item)?;
            accepted += 1;
        }
        Ok(accepted)
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from top to bottom, i.e. in the order `pop` would return.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_lifo() {
        let mut stack = BoundedStack::new(3);
        assert!(stack.push(10));
        assert!(stack.push(20));
        assert!(stack.push(30));

        assert_eq!(stack.pop(), Some(30));
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_push_rejected_when_full() {
        let mut stack = BoundedStack::new(2);
        stack.push('a');
        stack.push('b');

        assert!(stack.is_full());
        assert!(!stack.push('c'));
        assert_eq!(stack.size(), 2);
        assert_eq!(stack.peek(), Some(&'b'));
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut stack = BoundedStack::new(0);
        assert!(stack.is_empty());
        assert!(stack.is_full());
        assert!(!stack.push(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_try_push_returns_item() {
        let mut stack = BoundedStack::new(1);
        stack.try_push(String::from("kept")).unwrap();

        let err = stack.try_push(String::from("bounced")).unwrap_err();
        assert_eq!(err.capacity(), 1);
        assert_eq!(err.into_item(), "bounced");
        assert_eq!(stack.peek().map(String::as_str), Some("kept"));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = BoundedStack::new(4);
        assert_eq!(stack.peek(), None);
        stack.push(5);
        assert_eq!(stack.peek(), Some(&5));
        assert_eq!(stack.peek(), Some(&5));
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_push_all_stops_when_full() {
        let mut stack = BoundedStack::new(3);
        let mut items = 1..=5;

        let err = stack.push_all(&mut items).unwrap_err();
        assert_eq!(err.into_item(), 4);
        assert_eq!(items.next(), Some(5));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_push_all_counts_accepted() {
        let mut stack = BoundedStack::new(4);
        assert_eq!(stack.push_all(vec![1, 2]).unwrap(), 2);
        assert_eq!(stack.size(), 2);
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let mut stack = BoundedStack::<i64>::new(usize::MAX);
        assert_eq!(stack.capacity(), usize::MAX);
        assert!(!stack.is_full());
        assert!(stack.push(1));
        assert_eq!(stack.pop(), Some(1));
    }

    #[test]
    fn test_clear_frees_room() {
        let mut stack = BoundedStack::new(1);
        stack.push(1);
        stack.clear();
        assert!(stack.is_empty());
        assert!(stack.push(2));
        assert_eq!(stack.capacity(), 1);
    }
}
