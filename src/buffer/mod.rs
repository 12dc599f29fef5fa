//! The core implementation of the bounded FIFO buffer.

use crate::error::{
  CloseError, ForcePushError, PopError, PopTimeoutError, PushError, PushTimeoutError,
  TryPopError, TryPushError,
};

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace};


/// State guarded by the buffer's mutex. Everything mutable lives here;
/// no field is touched without holding the lock.
struct Inner<T> {
  items: VecDeque<T>,
  dropped: u64,
  closed: bool,
}

/// A fixed-capacity, thread-safe FIFO buffer.
///
/// The buffer is a classic monitor: one mutex over the backing store plus
/// two wait conditions, `space_available` (producers park here when the
/// buffer is full) and `element_available` (consumers park here when it is
/// empty). Every successful removal wakes one producer, every successful
/// insertion wakes one consumer, and [`close`](BoundedBuffer::close) wakes
/// everyone. All waits re-check their predicate after waking, so spurious
/// wakeups are harmless.
///
/// Share it across threads with an `Arc`:
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use weir::BoundedBuffer;
///
/// let buf = Arc::new(BoundedBuffer::new(8));
/// let producer = {
///   let buf = Arc::clone(&buf);
///   thread::spawn(move || {
///     for i in 0..32 {
///       buf.push(i).unwrap();
///     }
///   })
/// };
/// for i in 0..32 {
///   assert_eq!(buf.pop().unwrap(), i);
/// }
/// producer.join().unwrap();
/// ```
///
/// Rejected insertions on the capacity path (`try_push` against a full
/// buffer, `push_timeout` expiry) are tallied in
/// [`dropped`](BoundedBuffer::dropped). Eviction by
/// [`force_push`](BoundedBuffer::force_push) is not a drop, and neither is
/// a rejection due to closure — in both cases the element ends up somewhere
/// the caller can observe.
pub struct BoundedBuffer<T> {
  inner: Mutex<Inner<T>>,
  space_available: Condvar,
  element_available: Condvar,
  capacity: usize,
  default_timeout: Duration,
}

impl<T> BoundedBuffer<T> {
  /// Creates a buffer holding at most `capacity` elements, with a zero
  /// default timeout (default-timed calls return immediately when not
  /// satisfiable).
  ///
  /// # Panics
  ///
  /// Panics if `capacity` is zero.
  pub fn new(capacity: usize) -> Self {
    Self::with_timeout(capacity, Duration::ZERO)
  }

  /// Creates a buffer holding at most `capacity` elements whose
  /// `*_timeout_default` operations wait up to `default_timeout`.
  ///
  /// # Panics
  ///
  /// Panics if `capacity` is zero.
  pub fn with_timeout(capacity: usize, default_timeout: Duration) -> Self {
    assert!(capacity > 0, "BoundedBuffer capacity must be positive");
    BoundedBuffer {
      inner: Mutex::new(Inner {
        items: VecDeque::with_capacity(capacity),
        dropped: 0,
        closed: false,
      }),
      space_available: Condvar::new(),
      element_available: Condvar::new(),
      capacity,
      default_timeout,
    }
  }

  // --- Observation ---

  /// Returns the number of elements currently buffered.
  pub fn len(&self) -> usize {
    self.inner.lock().items.len()
  }

  /// Returns `true` if the buffer holds no elements.
  pub fn is_empty(&self) -> bool {
    self.inner.lock().items.is_empty()
  }

  /// Returns `true` if the buffer is at capacity.
  pub fn is_full(&self) -> bool {
    let inner = self.inner.lock();
    inner.items.len() == self.capacity
  }

  /// Returns the maximum number of resident elements. Constant; no lock.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the default wait bound used by the `*_timeout_default`
  /// operations. Constant; no lock.
  pub fn default_timeout(&self) -> Duration {
    self.default_timeout
  }

  /// Returns how many push attempts have been rejected on the capacity
  /// path (failed `try_push`, expired `push_timeout`). Monotonic.
  /// Evictions and closed-buffer rejections are not counted.
  pub fn dropped(&self) -> u64 {
    self.inner.lock().dropped
  }

  /// Returns `true` once [`close`](BoundedBuffer::close) has been called.
  pub fn is_closed(&self) -> bool {
    self.inner.lock().closed
  }

  // --- Insertion ---

  /// Attempts to append `value` without blocking.
  ///
  /// Fails with [`TryPushError::Full`] if the buffer is at capacity
  /// (counted as a drop) or [`TryPushError::Closed`] if the buffer has
  /// been closed.
  pub fn try_push(&self, value: T) -> Result<(), TryPushError<T>> {
    let mut inner = self.inner.lock();
    if inner.closed {
      return Err(TryPushError::Closed(value));
    }
    if inner.items.len() == self.capacity {
      inner.dropped += 1;
      trace!(dropped = inner.dropped, capacity = self.capacity, "try_push rejected, buffer full");
      return Err(TryPushError::Full(value));
    }
    inner.items.push_back(value);
    self.element_available.notify_one();
    Ok(())
  }

  /// Appends `value`, blocking the current thread until a slot is free.
  ///
  /// Never counts a drop. Fails only if the buffer is closed while
  /// waiting (or was already closed).
  pub fn push(&self, value: T) -> Result<(), PushError<T>> {
    let mut inner = self.inner.lock();
    loop {
      if inner.closed {
        return Err(PushError::Closed(value));
      }
      if inner.items.len() < self.capacity {
        inner.items.push_back(value);
        self.element_available.notify_one();
        return Ok(());
      }
      // Releases the lock while parked, reacquires it on wake.
      self.space_available.wait(&mut inner);
    }
  }

  /// Appends `value`, blocking for at most `timeout`.
  ///
  /// On expiry with the buffer still full, counts a drop and hands the
  /// value back as [`PushTimeoutError::Timeout`]. The element-available
  /// condition is signaled only when an element was actually inserted.
  pub fn push_timeout(&self, value: T, timeout: Duration) -> Result<(), PushTimeoutError<T>> {
    let deadline = Instant::now() + timeout;
    let mut inner = self.inner.lock();
    loop {
      if inner.closed {
        return Err(PushTimeoutError::Closed(value));
      }
      if inner.items.len() < self.capacity {
        inner.items.push_back(value);
        self.element_available.notify_one();
        return Ok(());
      }
      if self.space_available.wait_until(&mut inner, deadline).timed_out() {
        // One last look: the slot may have been freed in the same instant
        // the deadline fired.
        if inner.closed {
          return Err(PushTimeoutError::Closed(value));
        }
        if inner.items.len() < self.capacity {
          inner.items.push_back(value);
          self.element_available.notify_one();
          return Ok(());
        }
        inner.dropped += 1;
        trace!(dropped = inner.dropped, "push_timeout expired, buffer still full");
        return Err(PushTimeoutError::Timeout(value));
      }
    }
  }

  /// [`push_timeout`](BoundedBuffer::push_timeout) with the default bound
  /// configured at construction. A zero default means "fail immediately
  /// if full".
  pub fn push_timeout_default(&self, value: T) -> Result<(), PushTimeoutError<T>> {
    self.push_timeout(value, self.default_timeout)
  }

  /// Appends `value` unconditionally, evicting the oldest element first
  /// if the buffer is full.
  ///
  /// Never blocks and never fails on capacity. Returns the evicted
  /// element, if any; eviction is not counted as a drop. Fails only on a
  /// closed buffer.
  pub fn force_push(&self, value: T) -> Result<Option<T>, ForcePushError<T>> {
    let mut inner = self.inner.lock();
    if inner.closed {
      return Err(ForcePushError::Closed(value));
    }
    let evicted = if inner.items.len() == self.capacity {
      trace!(capacity = self.capacity, "force_push evicting oldest element");
      inner.items.pop_front()
    } else {
      None
    };
    inner.items.push_back(value);
    self.element_available.notify_one();
    Ok(evicted)
  }

  // --- Removal ---

  /// Attempts to take the oldest element without blocking.
  ///
  /// Fails with [`TryPopError::Empty`] on an empty open buffer, or
  /// [`TryPopError::Closed`] once the buffer is both closed and drained.
  pub fn try_pop(&self) -> Result<T, TryPopError> {
    let mut inner = self.inner.lock();
    match inner.items.pop_front() {
      Some(value) => {
        self.space_available.notify_one();
        Ok(value)
      }
      None if inner.closed => Err(TryPopError::Closed),
      None => Err(TryPopError::Empty),
    }
  }

  /// Takes the oldest element, blocking the current thread until one is
  /// available.
  ///
  /// A closed buffer is drained before [`PopError::Closed`] is reported.
  pub fn pop(&self) -> Result<T, PopError> {
    let mut inner = self.inner.lock();
    loop {
      if let Some(value) = inner.items.pop_front() {
        self.space_available.notify_one();
        return Ok(value);
      }
      if inner.closed {
        return Err(PopError::Closed);
      }
      self.element_available.wait(&mut inner);
    }
  }

  /// Takes the oldest element, blocking for at most `timeout`.
  pub fn pop_timeout(&self, timeout: Duration) -> Result<T, PopTimeoutError> {
    let deadline = Instant::now() + timeout;
    let mut inner = self.inner.lock();
    loop {
      if let Some(value) = inner.items.pop_front() {
        self.space_available.notify_one();
        return Ok(value);
      }
      if inner.closed {
        return Err(PopTimeoutError::Closed);
      }
      if self.element_available.wait_until(&mut inner, deadline).timed_out() {
        // Re-check once; an element may have arrived as the deadline fired.
        if let Some(value) = inner.items.pop_front() {
          self.space_available.notify_one();
          return Ok(value);
        }
        if inner.closed {
          return Err(PopTimeoutError::Closed);
        }
        return Err(PopTimeoutError::Timeout);
      }
    }
  }

  /// [`pop_timeout`](BoundedBuffer::pop_timeout) with the default bound
  /// configured at construction.
  pub fn pop_timeout_default(&self) -> Result<T, PopTimeoutError> {
    self.pop_timeout(self.default_timeout)
  }

  // --- Lifecycle ---

  /// Removes every buffered element.
  ///
  /// Leaves the drop counter untouched and wakes all producers waiting
  /// for space. Consumers are not woken; there is nothing to deliver.
  pub fn clear(&self) {
    let mut inner = self.inner.lock();
    let discarded = inner.items.len();
    inner.items.clear();
    if discarded > 0 {
      debug!(discarded, "buffer cleared");
    }
    self.space_available.notify_all();
  }

  /// Closes the buffer.
  ///
  /// Wakes every parked producer and consumer. Subsequent pushes fail
  /// with a `Closed` error carrying the value back; pops drain whatever
  /// remains buffered, then report `Closed`.
  ///
  /// Returns [`CloseError`] if the buffer was already closed.
  pub fn close(&self) -> Result<(), CloseError> {
    let mut inner = self.inner.lock();
    if inner.closed {
      return Err(CloseError);
    }
    inner.closed = true;
    debug!(remaining = inner.items.len(), "buffer closed");
    self.space_available.notify_all();
    self.element_available.notify_all();
    Ok(())
  }
}

impl<T: Clone> BoundedBuffer<T> {
  /// Returns a copy of the oldest element, or `None` if the buffer is
  /// empty.
  pub fn front(&self) -> Option<T> {
    self.inner.lock().items.front().cloned()
  }

  /// Returns a copy of the newest element, or `None` if the buffer is
  /// empty.
  pub fn back(&self) -> Option<T> {
    self.inner.lock().items.back().cloned()
  }
}

impl<T> fmt::Debug for BoundedBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let inner = self.inner.lock();
    f.debug_struct("BoundedBuffer")
      .field("len", &inner.items.len())
      .field("capacity", &self.capacity)
      .field("dropped", &inner.dropped)
      .field("closed", &inner.closed)
      .finish()
  }
}
