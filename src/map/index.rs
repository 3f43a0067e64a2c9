//! Ordered Index Module
//!
//! Hash table plus doubly-linked insertion order over the same entries.
//!
//! Nodes live in a slab (`Vec<Option<Node<V>>>`) and link to each other by
//! slot number, so unlinking is O(1) and there are no ownership cycles.
//! Vacated slots are recycled through a free list.

use std::collections::HashMap;
use std::mem;
use std::ops::ControlFlow;

use tokio::time::Instant;

use crate::map::Entry;

// == Node ==
/// One indexed entry: key, value, deadline and its position in the order.
#[derive(Debug, Clone)]
pub struct Node<V> {
    key: String,
    value: V,
    deadline: Option<Instant>,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<V> Node<V> {
    fn new(key: String, value: V, deadline: Option<Instant>) -> Self {
        Self {
            key,
            value,
            deadline,
            prev: None,
            next: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// `None` means the node never expires.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn deadline_mut(&mut self) -> &mut Option<Instant> {
        &mut self.deadline
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn into_entry(self) -> Entry<V> {
        Entry {
            key: self.key,
            value: self.value,
        }
    }
}

// == Ordered Index ==
/// Key lookup in O(1) with a stable insertion order.
///
/// Updating an existing key keeps its position; only new keys are appended.
#[derive(Debug)]
pub struct OrderedIndex<V> {
    /// Node storage, addressed by slot
    slots: Vec<Option<Node<V>>>,
    /// Vacant slots available for reuse
    free: Vec<usize>,
    /// Key to slot lookup
    keys: HashMap<String, usize>,
    /// Oldest node
    head: Option<usize>,
    /// Newest node
    tail: Option<usize>,
}

impl<V> Default for OrderedIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedIndex<V> {
    // == Constructor ==
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            keys: HashMap::new(),
            head: None,
            tail: None,
        }
    }

    // == Upsert ==
    /// Inserts a new key at the tail, or replaces value and deadline of an
    /// existing key in place.
    pub fn upsert(&mut self, key: String, value: V, deadline: Option<Instant>) {
        if let Some(node) = self.get_mut(&key) {
            node.value = value;
            node.deadline = deadline;
            return;
        }

        let mut node = Node::new(key, value, deadline);
        node.prev = self.tail;
        let key = node.key.clone();

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.tail.and_then(|tail| self.node_at_mut(tail)) {
            Some(tail) => tail.next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.keys.insert(key, slot);
    }

    // == Get ==
    /// Looks up a node by key without touching the order.
    pub fn get(&self, key: &str) -> Option<&Node<V>> {
        let slot = *self.keys.get(key)?;
        self.node_at(slot)
    }

    /// Mutable lookup. Callers may change value and deadline only.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        let slot = *self.keys.get(key)?;
        self.node_at_mut(slot)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    // == Remove ==
    /// Unlinks a key from both the table and the order in O(1).
    pub fn remove(&mut self, key: &str) -> Option<Node<V>> {
        let slot = self.keys.remove(key)?;
        self.unlink(slot)
    }

    /// Removes every node matching `pred`, returned in order.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Vec<Node<V>>
    where
        F: FnMut(&Node<V>) -> bool,
    {
        let mut matched = Vec::new();
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let Some(node) = self.node_at(slot) else {
                break;
            };
            if pred(node) {
                matched.push(slot);
            }
            cursor = node.next;
        }

        matched
            .into_iter()
            .filter_map(|slot| {
                let node = self.unlink(slot)?;
                self.keys.remove(&node.key);
                Some(node)
            })
            .collect()
    }

    // == Drain All ==
    /// Detaches everything at once, leaving the index empty.
    ///
    /// Detaching is O(1); the returned iterator walks the old order. The
    /// old key table travels with it, so its keys are freed wherever the
    /// iterator is dropped rather than here.
    pub fn drain_all(&mut self) -> Drain<V> {
        let cursor = self.head.take();
        self.tail = None;
        self.free.clear();
        Drain {
            slots: mem::take(&mut self.slots),
            _keys: mem::take(&mut self.keys),
            cursor,
        }
    }

    // == Traversal ==
    /// Iterates nodes from oldest to newest.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            index: self,
            cursor: self.head,
            remaining: self.keys.len(),
        }
    }

    /// Keys from oldest to newest.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(Node::key)
    }

    /// Visits nodes head to tail until the visitor breaks.
    pub fn for_each_in_order<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<V>) -> ControlFlow<()>,
    {
        for node in self.iter() {
            if visitor(node).is_break() {
                break;
            }
        }
    }

    /// Like [`for_each_in_order`](Self::for_each_in_order) but the visitor
    /// may update values and deadlines. Links are never exposed.
    pub fn for_each_in_order_mut<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut Node<V>) -> ControlFlow<()>,
    {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let Some(node) = self.node_at_mut(slot) else {
                break;
            };
            cursor = node.next;
            if visitor(node).is_break() {
                break;
            }
        }
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // == Internals ==
    fn node_at(&self, slot: usize) -> Option<&Node<V>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn node_at_mut(&mut self, slot: usize) -> Option<&mut Node<V>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Detaches a slot from the order; the key table is the caller's job.
    fn unlink(&mut self, slot: usize) -> Option<Node<V>> {
        let mut node = self.slots.get_mut(slot)?.take()?;

        match node.prev.and_then(|prev| self.node_at_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.node_at_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        node.prev = None;
        node.next = None;
        self.free.push(slot);
        Some(node)
    }

    /// Panics if the table and the order disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut seen = 0;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.node_at(slot).expect("link points at vacant slot");
            assert_eq!(node.prev, prev, "broken back link at {}", node.key);
            assert_eq!(self.keys.get(&node.key), Some(&slot), "key table mismatch");
            seen += 1;
            assert!(seen <= self.keys.len(), "order has a cycle");
            prev = Some(slot);
            cursor = node.next;
        }
        assert_eq!(self.tail, prev, "tail does not end the chain");
        assert_eq!(seen, self.keys.len(), "order and table sizes differ");
        assert_eq!(
            self.slots.iter().filter(|s| s.is_some()).count(),
            self.keys.len(),
            "orphaned nodes in slab"
        );
    }
}

// == Iterators ==
/// Borrowing head-to-tail iterator over an [`OrderedIndex`].
pub struct Iter<'a, V> {
    index: &'a OrderedIndex<V>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.index.node_at(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Owning iterator over a detached chain, oldest first.
pub struct Drain<V> {
    slots: Vec<Option<Node<V>>>,
    _keys: HashMap<String, usize>,
    cursor: Option<usize>,
}

impl<V> Iterator for Drain<V> {
    type Item = Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.slots.get_mut(self.cursor?)?.take()?;
        self.cursor = node.next.take();
        node.prev = None;
        Some(node)
    }
}
