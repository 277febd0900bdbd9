//! Unbalanced binary search tree with exclusively owned child links.
//!
//! Every operation descends iteratively, so a degenerate tree (keys
//! inserted in sorted order) costs O(n) time but never O(n) call-stack
//! depth. Dropping the tree is iterative for the same reason.
//!
//! Inserting a key that is already present overwrites its value in place;
//! no duplicate node is ever created.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use tracing::{debug, trace};

use crate::error::CollectionError;

type Tree<K, V> = Option<Box<BstNode<K, V>>>;

struct BstNode<K, V> {
    key: K,
    value: V,
    left: Tree<K, V>,
    right: Tree<K, V>,
}

impl<K, V> BstNode<K, V> {
    fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(BstNode {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

pub struct BinarySearchTree<K, V> {
    root: Tree<K, V>,
    len: usize,
}

impl<K, V> BinarySearchTree<K, V> {
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Ascending-key walk over `(key, value)` pairs.
    pub fn traverse_in_order(&self) -> InOrder<'_, K, V> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    pub fn iter(&self) -> InOrder<'_, K, V> {
        self.traverse_in_order()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.traverse_in_order().map(|(key, _)| key)
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&BstNode<K, V>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                pending.push((child, depth + 1));
            }
        }
        height
    }

    pub fn clear(&mut self) {
        let mut pending: Vec<Box<BstNode<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<K: Ord, V> BinarySearchTree<K, V> {
    /// Walks from `slot` towards `key` and returns the slot that holds it,
    /// or the empty slot where it would be inserted.
    fn locate<'a>(mut slot: &'a mut Tree<K, V>, key: &K) -> &'a mut Tree<K, V> {
        loop {
            let ordering = slot.as_deref().map(|node| key.cmp(&node.key));
            slot = match (ordering, slot) {
                (Some(Ordering::Less), Some(node)) => &mut node.left,
                (Some(Ordering::Greater), Some(node)) => &mut node.right,
                (_, found) => return found,
            };
        }
    }

    /// Unlinks the minimum node of the subtree at `slot`, putting that
    /// node's right child in its place.
    fn detach_min(mut slot: &mut Tree<K, V>) -> Tree<K, V> {
        loop {
            let descend = matches!(slot.as_deref(), Some(node) if node.left.is_some());
            slot = match (descend, slot) {
                (true, Some(node)) => &mut node.left,
                (_, leftmost) => {
                    let mut min = leftmost.take()?;
                    *leftmost = min.right.take();
                    return Some(min);
                }
            };
        }
    }

    /// Inserts `key`, or overwrites the value stored under an equal key.
    /// Returns the previous value on overwrite.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let slot = Self::locate(&mut self.root, &key);
        match slot {
            Some(node) => Some(mem::replace(&mut node.value, value)),
            None => {
                *slot = Some(BstNode::leaf(key, value));
                self.len += 1;
                None
            }
        }
    }

    pub fn search(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    pub fn search_mut(&mut self, key: &K) -> Option<&mut V> {
        Self::locate(&mut self.root, key)
            .as_deref_mut()
            .map(|node| &mut node.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Removes `key`. Returns `false` and leaves the tree untouched when the
    /// key is absent.
    pub fn delete(&mut self, key: &K) -> bool {
        self.remove(key).is_ok()
    }

    /// Like [`delete`](Self::delete), but hands back the removed entry.
    pub fn remove(&mut self, key: &K) -> Result<(K, V), CollectionError> {
        let slot = Self::locate(&mut self.root, key);
        let mut node = match slot.take() {
            Some(node) => node,
            None => {
                debug!(len = self.len, "delete found no matching key");
                return Err(CollectionError::NotFound);
            }
        };
        self.len -= 1;

        match (node.left.take(), node.right.take()) {
            (None, None) => {
                trace!("deleted leaf");
                Ok((node.key, node.value))
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("spliced out node with one child");
                *slot = Some(child);
                Ok((node.key, node.value))
            }
            (Some(left), Some(right)) => {
                trace!("replacing node with its in-order successor");
                let mut right = Some(right);
                match Self::detach_min(&mut right) {
                    Some(successor) => {
                        let BstNode {
                            key: successor_key,
                            value: successor_value,
                            ..
                        } = *successor;
                        let removed = (
                            mem::replace(&mut node.key, successor_key),
                            mem::replace(&mut node.value, successor_value),
                        );
                        node.left = Some(left);
                        node.right = right;
                        *slot = Some(node);
                        Ok(removed)
                    }
                    // An empty right subtree means `left` is the only child.
                    None => {
                        *slot = Some(left);
                        Ok((node.key, node.value))
                    }
                }
            }
        }
    }
}

impl<K, V> Default for BinarySearchTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for BinarySearchTree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinarySearchTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.traverse_in_order()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinarySearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinarySearchTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

// =============================================================================
// In-order iterator
// =============================================================================

/// Explicit-stack in-order walk. The stack holds the left spine of the
/// subtree still to be visited, so its depth is bounded by the tree height.
pub struct InOrder<'a, K, V> {
    stack: Vec<&'a BstNode<K, V>>,
}

impl<'a, K, V> InOrder<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a BstNode<K, V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<K, V> Clone for InOrder<'_, K, V> {
    fn clone(&self) -> Self {
        InOrder {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> IntoIterator for &'a BinarySearchTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = InOrder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse_in_order()
    }
}
