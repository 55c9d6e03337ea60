//! A queue of owned strings on top of [`List`].
//!
//! [`Queue`] is the facade used by callers: it copies strings in at either
//! end, hands removed [`Element`]s back to the caller, and exposes the list
//! algorithms with string ordering. [`merge_queues`] combines a chain of
//! [`QueueContext`]s into the first one.

use crate::error::{QueueError, Result};
use crate::list::{List, Order, SortKind};
use crate::Iter;
use rand::Rng;
use std::fmt;
use tracing::{debug, trace};

/// An owned string payload. Elements compare byte-wise lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    value: String,
}

impl Element {
    /// Copy `value` into a fresh element, reporting allocation failure
    /// instead of aborting.
    fn try_new(value: &str) -> Result<Self> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|_| QueueError::AllocationFailure {
                requested: value.len(),
            })?;
        owned.push_str(value);
        Ok(Self { value: owned })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Copy the value into `buf`, truncating so that a terminating NUL byte
    /// always fits. Returns the number of value bytes copied.
    ///
    /// Nothing is written into an empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail("hello")?;
    ///
    /// let mut buf = [0xff; 4];
    /// let element = queue.remove_head_into(&mut buf).unwrap();
    /// assert_eq!(&buf, b"hel\0");
    /// assert_eq!(element.value(), "hello");
    /// # Ok::<(), cyclic_queue::QueueError>(())
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let Some(capacity) = buf.len().checked_sub(1) else {
            return 0;
        };
        let bytes = self.value.as_bytes();
        let len = bytes.len().min(capacity);
        buf[..len].copy_from_slice(&bytes[..len]);
        buf[len] = 0;
        len
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A queue of strings backed by a cyclic doubly-linked list.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("b")?;
/// queue.insert_head("a")?;
/// queue.insert_tail("c")?;
/// assert_eq!(queue.size(), 3);
///
/// queue.reverse();
/// assert_eq!(queue.remove_head().map(|e| e.into_value()), Some("c".to_string()));
/// # Ok::<(), cyclic_queue::QueueError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Queue {
    list: List<Element>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a copy of `value` at the head. On failure the queue is
    /// unchanged.
    pub fn insert_head(&mut self, value: &str) -> Result<()> {
        let element = Element::try_new(value)?;
        self.list.push_front(element);
        trace!(len = value.len(), "inserted at head");
        Ok(())
    }

    /// Insert a copy of `value` at the tail. On failure the queue is
    /// unchanged.
    pub fn insert_tail(&mut self, value: &str) -> Result<()> {
        let element = Element::try_new(value)?;
        self.list.push_back(element);
        trace!(len = value.len(), "inserted at tail");
        Ok(())
    }

    /// Detach the head element and hand it to the caller, or `None` if the
    /// queue is empty.
    pub fn remove_head(&mut self) -> Option<Element> {
        let element = self.list.pop_front()?;
        trace!(len = element.value.len(), "removed from head");
        Some(element)
    }

    /// Detach the tail element and hand it to the caller, or `None` if the
    /// queue is empty.
    pub fn remove_tail(&mut self) -> Option<Element> {
        let element = self.list.pop_back()?;
        trace!(len = element.value.len(), "removed from tail");
        Some(element)
    }

    /// Like [`Queue::remove_head`], also copying the value into `buf` as
    /// described by [`Element::copy_to`].
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.remove_head()?;
        element.copy_to(buf);
        Some(element)
    }

    /// Like [`Queue::remove_tail`], also copying the value into `buf` as
    /// described by [`Element::copy_to`].
    pub fn remove_tail_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.remove_tail()?;
        element.copy_to(buf);
        Some(element)
    }

    /// Release an element previously handed out by a removal.
    pub fn release(element: Element) {
        drop(element);
    }

    /// Number of elements, counted by walking the queue.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn head(&self) -> Option<&str> {
        self.list.front().map(Element::value)
    }

    pub fn tail(&self) -> Option<&str> {
        self.list.back().map(Element::value)
    }

    pub fn iter(&self) -> Iter<'_, Element> {
        self.list.iter()
    }

    /// Delete the element at index ⌊*n* / 2⌋.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if there is nothing to delete.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{Queue, QueueError};
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.delete_mid(), Err(QueueError::Empty));
    /// for value in ["a", "b", "c"] {
    ///     queue.insert_tail(value)?;
    /// }
    /// queue.delete_mid()?;
    /// assert_eq!(Vec::from_iter(queue.iter().map(|e| e.value())), ["a", "c"]);
    /// # Ok::<(), QueueError>(())
    /// ```
    pub fn delete_mid(&mut self) -> Result<()> {
        let element = self.list.remove_middle().ok_or(QueueError::Empty)?;
        trace!(len = element.value.len(), "deleted middle");
        Ok(())
    }

    /// Sort ascending, then delete every value that occurs more than once.
    /// Returns the number of deleted elements.
    pub fn delete_dup(&mut self) -> usize {
        let removed = self.list.remove_duplicates();
        debug!(removed, "deleted duplicates");
        removed
    }

    /// Swap every two adjacent elements.
    pub fn swap(&mut self) {
        self.list.swap_pairs();
    }

    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    /// Reverse the elements in consecutive groups of `k`, leaving a shorter
    /// trailing group as is.
    pub fn reverse_k(&mut self, k: usize) {
        self.list.reverse_k(k);
    }

    /// Stable sort, descending if `descend` is set.
    pub fn sort(&mut self, descend: bool) {
        self.sort_with(SortKind::default(), Order::from(descend));
    }

    pub fn sort_with(&mut self, kind: SortKind, order: Order) {
        debug!(?kind, ?order, "sorting queue");
        self.list.sort_with(kind, order);
    }

    /// Delete every element that has a strictly smaller element to its
    /// right. Returns the resulting size.
    pub fn ascend(&mut self) -> usize {
        self.list.retain_ascending()
    }

    /// Delete every element that has a strictly greater element to its
    /// right. Returns the resulting size.
    pub fn descend(&mut self) -> usize {
        self.list.retain_descending()
    }

    pub fn shuffle(&mut self) {
        self.list.shuffle();
    }

    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        self.list.shuffle_with(rng);
    }
}

/// One queue in a chain of queues to merge, with its cached size and an
/// optional caller-supplied tag.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueueContext {
    pub queue: Queue,
    pub size: usize,
    pub tag: Option<u64>,
}

impl QueueContext {
    pub fn new(queue: Queue) -> Self {
        let size = queue.size();
        Self {
            queue,
            size,
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: u64) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// Move the elements of every queue in `chain` into the first one and sort
/// it in the given order. Absorbed contexts are left empty with a cached size
/// of zero. Returns the combined size, which is also cached on the first
/// context.
///
/// A chain of a single queue is not sorted; an empty chain yields zero.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{merge_queues, List, Order, Queue, QueueContext};
///
/// let mut chain = List::new();
/// for values in [&["b", "d"][..], &["a"][..], &["c"][..]] {
///     let mut queue = Queue::new();
///     for value in values {
///         queue.insert_tail(value)?;
///     }
///     chain.push_back(QueueContext::new(queue));
/// }
///
/// assert_eq!(merge_queues(&mut chain, Order::Ascending), 4);
/// let merged = chain.front().unwrap();
/// assert_eq!(Vec::from_iter(merged.queue.iter().map(|e| e.value())), ["a", "b", "c", "d"]);
/// # Ok::<(), cyclic_queue::QueueError>(())
/// ```
pub fn merge_queues(chain: &mut List<QueueContext>, order: Order) -> usize {
    let mut contexts = chain.iter_mut();
    let Some(first) = contexts.next() else {
        return 0;
    };
    let mut absorbed = 0_usize;
    for context in contexts {
        first.queue.list.append(&mut context.queue.list);
        context.size = 0;
        absorbed += 1;
    }
    if absorbed > 0 {
        first.queue.sort_with(SortKind::default(), order);
    }
    first.size = first.queue.size();
    debug!(absorbed, size = first.size, "merged queues");
    first.size
}
