//! Fixed-capacity ring buffer shared between worker threads.
//!
//! [`BoundedQueue`] keeps its slots and the read cursor and live count in
//! one shared allocation behind a [`SpinLock`]. Cloning the queue clones a
//! handle to that allocation, so a queue can be moved by value into any
//! number of workers. Every operation takes the lock before reading a
//! control word and releases it on every return path.

use std::fmt;
use std::sync::Arc;

use crate::spin::SpinLock;

/// Ring state: `count` live items starting at `start`, wrapping at
/// `slots.len()`.
struct Ring<T> {
    slots: Box<[Option<T>]>,
    start: usize,
    count: usize,
}

impl<T> Ring<T> {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn push_back(&mut self, item: T) -> Result<(), T> {
        if self.count == self.capacity() {
            return Err(item);
        }
        let tail = (self.start + self.count) % self.capacity();
        self.slots[tail] = Some(item);
        self.count += 1;
        Ok(())
    }

    fn pop_front(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let item = self.slots[self.start].take();
        self.start = (self.start + 1) % self.capacity();
        self.count -= 1;
        item
    }
}

/// A bounded multi-producer, multi-consumer FIFO queue.
///
/// Enqueue on a full queue and dequeue on an empty one are expected
/// outcomes and are reported through the return value. The `_checked`
/// variants treat them as caller bugs instead.
pub struct BoundedQueue<T> {
    ring: Arc<SpinLock<Ring<T>>>,
    capacity: usize,
}

// Compile-time assertion: queues can be handed to worker threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<BoundedQueue<u64>>();
};

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "BoundedQueue capacity must be > 0, got {capacity}");
        let slots = (0..capacity).map(|_| None).collect();
        Self {
            ring: Arc::new(SpinLock::new(Ring {
                slots,
                start: 0,
                count: 0,
            })),
            capacity,
        }
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items at the moment of the call.
    pub fn len(&self) -> usize {
        self.ring.lock().count
    }

    /// Whether the queue held no items at the moment of the call.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the queue was full at the moment of the call.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Append `item` at the back.
    ///
    /// Returns `Err(item)` without modifying the queue when it is full.
    pub fn try_enqueue(&self, item: T) -> Result<(), T> {
        self.ring.lock().push_back(item)
    }

    /// Remove and return the front item, or `None` when empty.
    pub fn try_dequeue(&self) -> Option<T> {
        self.ring.lock().pop_front()
    }

    /// Remove every item.
    pub fn clear(&self) {
        let mut ring = self.ring.lock();
        for slot in ring.slots.iter_mut() {
            *slot = None;
        }
        ring.start = 0;
        ring.count = 0;
    }

    /// Append `item`, treating a full queue as a caller bug.
    ///
    /// # Panics
    ///
    /// Panics when the queue is full and contract checks are compiled in.
    /// Otherwise the item is dropped.
    #[track_caller]
    pub fn enqueue_checked(&self, item: T) {
        let accepted = self.try_enqueue(item).is_ok();
        navtk_core::nav_check!(accepted, "enqueue on a full BoundedQueue (capacity {})", self.capacity);
    }

    /// Remove the front item, treating an empty queue as a caller bug.
    ///
    /// # Panics
    ///
    /// Panics when the queue is empty and contract checks are compiled in.
    /// Otherwise returns `None`.
    #[track_caller]
    pub fn dequeue_checked(&self) -> Option<T> {
        let item = self.try_dequeue();
        navtk_core::nav_check!(item.is_some(), "dequeue on an empty BoundedQueue");
        item
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// A copy of the front item without removing it.
    pub fn try_peek(&self) -> Option<T> {
        let ring = self.ring.lock();
        if ring.count == 0 {
            return None;
        }
        ring.slots[ring.start].clone()
    }
}

impl<T> Clone for BoundedQueue<T> {
    /// Another handle to the same queue.
    fn clone(&self) -> Self {
        Self {
            ring: Arc::clone(&self.ring),
            capacity: self.capacity,
        }
    }
}

impl<T> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish()
    }
}
