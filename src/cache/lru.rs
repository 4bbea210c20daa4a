//! Recency List Module
//!
//! Intrusive doubly linked list used to order keys by last access.

// == Node ==
#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Tracks access order for LRU eviction strategy.
///
/// Nodes live in a slab and link to each other by slot index:
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// Every operation is O(1). Freed slots are reused by later insertions, so a
/// slot handle is only meaningful until the key it was issued for is removed.
#[derive(Debug)]
pub struct RecencyList<K> {
    /// Slab of nodes, `None` marks a free slot
    slots: Vec<Option<Node<K>>>,
    /// Most recently used slot
    head: Option<usize>,
    /// Least recently used slot
    tail: Option<usize>,
    /// Free slots available for reuse
    free: Vec<usize>,
    len: usize,
}

impl<K> Default for RecencyList<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RecencyList<K> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: Vec::new(),
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a key as the most recently used and returns its slot.
    pub fn push_front(&mut self, key: K) -> usize {
        let node = Node {
            key,
            prev: None,
            next: self.head,
        };

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

        match self.head {
            Some(old_head) => self.set_prev(old_head, Some(slot)),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
        slot
    }

    // == Touch ==
    /// Marks a slot as most recently used (moves to front).
    ///
    /// Unknown or freed slots are ignored.
    pub fn touch(&mut self, slot: usize) {
        if self.head == Some(slot) || !self.is_occupied(slot) {
            return;
        }

        self.unlink(slot);
        if let Some(node) = self.slots[slot].as_mut() {
            node.prev = None;
            node.next = self.head;
        }
        match self.head {
            Some(old_head) => self.set_prev(old_head, Some(slot)),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    // == Remove ==
    /// Removes a slot from the list and returns its key.
    pub fn remove(&mut self, slot: usize) -> Option<K> {
        if !self.is_occupied(slot) {
            return None;
        }

        self.unlink(slot);
        let node = self.slots[slot].take()?;
        self.free.push(slot);
        self.len -= 1;
        Some(node.key)
    }

    // == Pop Back ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<K> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Peek Back ==
    /// Returns the least recently used key without removing it.
    pub fn peek_back(&self) -> Option<&K> {
        self.tail
            .and_then(|slot| self.slots[slot].as_ref())
            .map(|node| &node.key)
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every node and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Iter ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }

    fn is_occupied(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(Some(_)))
    }

    fn set_prev(&mut self, slot: usize, prev: Option<usize>) {
        if let Some(node) = self.slots[slot].as_mut() {
            node.prev = prev;
        }
    }

    fn set_next(&mut self, slot: usize, next: Option<usize>) {
        if let Some(node) = self.slots[slot].as_mut() {
            node.next = next;
        }
    }

    /// Detaches a node from its neighbours, patching head and tail.
    fn unlink(&mut self, slot: usize) {
        let (prev, next) = match self.slots[slot].as_ref() {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev) => self.set_next(prev, next),
            None => self.head = next,
        }
        match next {
            Some(next) => self.set_prev(next, prev),
            None => self.tail = prev,
        }
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, K> {
    list: &'a RecencyList<K>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.next?;
        let node = self.list.slots[slot].as_ref()?;
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<&'static str>) -> Vec<&'static str> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.peek_back(), None);
    }

    #[test]
    fn test_list_push_front_orders_newest_first() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(list.peek_back(), Some(&"key1"));
        assert_eq!(keys(&list), vec!["key3", "key2", "key1"]);
    }

    #[test]
    fn test_list_touch_existing_slot() {
        let mut list = RecencyList::new();

        let key1 = list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        // Touch key1 again - should move to front
        list.touch(key1);

        assert_eq!(list.len(), 3);
        // key2 is now oldest
        assert_eq!(list.peek_back(), Some(&"key2"));
        assert_eq!(keys(&list), vec!["key1", "key3", "key2"]);
    }

    #[test]
    fn test_list_touch_head_is_noop() {
        let mut list = RecencyList::new();

        list.push_front("a");
        let b = list.push_front("b");
        list.touch(b);

        assert_eq!(keys(&list), vec!["b", "a"]);
    }

    #[test]
    fn test_list_touch_middle() {
        let mut list = RecencyList::new();

        list.push_front("a");
        let b = list.push_front("b");
        list.push_front("c");
        list.touch(b);

        assert_eq!(keys(&list), vec!["b", "c", "a"]);
        assert_eq!(list.peek_back(), Some(&"a"));
    }

    #[test]
    fn test_list_pop_back() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.pop_back(), Some("key1"));
        assert_eq!(list.len(), 2);

        assert_eq!(list.pop_back(), Some("key2"));
        assert_eq!(list.len(), 1);

        assert_eq!(list.pop_back(), Some("key3"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_list_pop_empty() {
        let mut list: RecencyList<&str> = RecencyList::new();
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    fn test_list_remove() {
        let mut list = RecencyList::new();

        list.push_front("key1");
        let key2 = list.push_front("key2");
        list.push_front("key3");

        assert_eq!(list.remove(key2), Some("key2"));

        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), vec!["key3", "key1"]);
    }

    #[test]
    fn test_list_remove_stale_slot() {
        let mut list = RecencyList::new();

        let key1 = list.push_front("key1");
        list.push_front("key2");

        assert_eq!(list.remove(key1), Some("key1"));
        // Removing or touching a freed slot should not panic or affect others
        assert_eq!(list.remove(key1), None);
        list.touch(key1);
        list.touch(99);

        assert_eq!(list.len(), 1);
        assert_eq!(keys(&list), vec!["key2"]);
    }

    #[test]
    fn test_list_reuses_freed_slots() {
        let mut list = RecencyList::new();

        list.push_front("a");
        list.push_front("b");
        list.pop_back();
        let c = list.push_front("c");

        assert_eq!(c, 0);
        assert_eq!(keys(&list), vec!["c", "b"]);
    }

    #[test]
    fn test_list_order_after_multiple_touches() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        // Access in a different order
        list.touch(a);
        list.touch(c);
        list.touch(b);

        // front=[b, c, a]=back
        assert_eq!(list.pop_back(), Some("a"));
        assert_eq!(list.pop_back(), Some("c"));
        assert_eq!(list.pop_back(), Some("b"));
    }

    #[test]
    fn test_list_single_node_touch_and_pop() {
        let mut list = RecencyList::new();

        let only = list.push_front("only");
        list.touch(only);

        assert_eq!(list.peek_back(), Some(&"only"));
        assert_eq!(list.pop_back(), Some("only"));
        assert!(list.is_empty());

        // List is usable again after draining
        list.push_front("again");
        assert_eq!(keys(&list), vec!["again"]);
    }

    #[test]
    fn test_list_clear() {
        let mut list = RecencyList::new();

        list.push_front("a");
        list.push_front("b");
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.iter().len(), 0);
        assert_eq!(list.pop_back(), None);
    }
}
