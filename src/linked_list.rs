//! Singly linked list built from exclusively owned boxed nodes.
//!
//! Every node is owned by exactly one `next` link (or by the list's head),
//! so no operation can build a cycle and dropping the list releases the
//! whole chain.

use std::fmt;
use std::iter::FromIterator;

use tracing::debug;

use crate::error::CollectionError;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(data: T) -> Self {
        Node { data, next: None }
    }
}

pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        SinglyLinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds `item` after the current tail. Walks the whole chain, O(n).
    pub fn append(&mut self, item: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(item)));
        self.len += 1;
    }

    /// Makes `item` the new head, O(1).
    pub fn prepend(&mut self, item: T) {
        let mut node = Box::new(Node::new(item));
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.data)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.len -= 1;
            node.data
        })
    }

    /// Lazy head-to-tail walk. Borrowing, so it can be restarted at will.
    pub fn traverse(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.traverse()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, key: &T) -> bool {
        self.traverse().any(|item| item == key)
    }

    /// Removes the first node equal to `key`. Returns `false` when nothing
    /// matched; the list is left unchanged in that case.
    pub fn delete(&mut self, key: &T) -> bool {
        self.remove(key).is_ok()
    }

    /// Like [`delete`](Self::delete), but hands back the removed value.
    pub fn remove(&mut self, key: &T) -> Result<T, CollectionError> {
        let head_matches = match &self.head {
            None => {
                debug!("delete on empty list");
                return Err(CollectionError::NotFound);
            }
            Some(head) => head.data == *key,
        };

        if head_matches {
            return self.pop_front().ok_or(CollectionError::NotFound);
        }

        // `trailing` always points at the node before the candidate.
        let mut trailing = match self.head.as_mut() {
            Some(head) => head,
            None => return Err(CollectionError::NotFound),
        };
        loop {
            let next_matches = match &trailing.next {
                None => break,
                Some(next) => next.data == *key,
            };

            if next_matches {
                if let Some(mut matched) = trailing.next.take() {
                    trailing.next = matched.next.take();
                    self.len -= 1;
                    return Ok(matched.data);
                }
            }

            trailing = match trailing.next.as_mut() {
                Some(next) => next,
                None => break,
            };
        }

        debug!(len = self.len, "delete found no matching node");
        Err(CollectionError::NotFound)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink node by node; the default recursive drop of `Box<Node>` would use
// one stack frame per element.
impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.traverse()).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.traverse().eq(other.traverse())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.traverse().cloned().collect()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        let mut tail = &mut list.head;
        for item in iter {
            let node = tail.insert(Box::new(Node::new(item)));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

// =============================================================================
// Iterators
// =============================================================================

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

// Manual impl: cloning the cursor must not require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
        list.traverse().cloned().collect()
    }

    #[test]
    fn test_append_and_prepend() {
        let mut list = SinglyLinkedList::new();
        list.append(10);
        list.append(20);
        list.append(30);
        list.prepend(5);

        assert_eq!(items(&list), vec![5, 10, 20, 30]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.front(), Some(&5));
    }

    #[test]
    fn test_delete_middle_keeps_order() {
        let mut list: SinglyLinkedList<_> = vec![5, 10, 20, 30].into_iter().collect();
        assert!(list.delete(&20));
        assert_eq!(items(&list), vec![5, 10, 30]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_head_and_tail() {
        let mut list: SinglyLinkedList<_> = (1..=4).collect();
        assert!(list.delete(&1));
        assert!(list.delete(&4));
        assert_eq!(items(&list), vec![2, 3]);

        // A fresh append must still land after the new tail.
        list.append(9);
        assert_eq!(items(&list), vec![2, 3, 9]);
    }

    #[test]
    fn test_delete_missing_leaves_list_unchanged() {
        let mut list: SinglyLinkedList<_> = vec![5, 10, 30].into_iter().collect();
        assert!(!list.delete(&99));
        assert_eq!(list.remove(&99), Err(CollectionError::NotFound));
        assert_eq!(items(&list), vec![5, 10, 30]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_on_empty_list() {
        let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(!list.delete(&1));
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_removes_first_match_only() {
        let mut list: SinglyLinkedList<_> = vec![1, 2, 1, 2].into_iter().collect();
        assert_eq!(list.remove(&2), Ok(2));
        assert_eq!(items(&list), vec![1, 1, 2]);
    }

    #[test]
    fn test_traverse_is_restartable() {
        let list: SinglyLinkedList<_> = vec!["a", "b"].into_iter().collect();
        let walk = list.traverse();
        assert_eq!(walk.clone().count(), 2);
        assert_eq!(walk.collect::<Vec<_>>(), vec![&"a", &"b"]);
        assert_eq!(list.traverse().count(), 2);
    }

    #[test]
    fn test_into_iter_consumes_in_order() {
        let list: SinglyLinkedList<_> = (1..=3).collect();
        let iter = list.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_debug_and_clone() {
        let list: SinglyLinkedList<_> = (1..=3).collect();
        let copy = list.clone();
        assert_eq!(list, copy);
        assert_eq!(format!("{:?}", copy), "[1, 2, 3]");
        assert!(copy.contains(&2));
        assert!(!copy.contains(&7));
    }

    #[test]
    fn test_long_list_drops_without_overflow() {
        let list: SinglyLinkedList<_> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
