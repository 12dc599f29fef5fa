//! A sentinel-returning convenience layer over [`BoundedBuffer`].
//!
//! Some call sites predate `Option`-shaped results and want a plain value
//! back from every `pop`, with a designated "nothing there" stand-in.
//! [`SentinelBuffer`] provides that surface as a thin shim over the core
//! buffer rather than a second synchronization implementation, so the wait
//! protocol exists in exactly one place.

use crate::buffer::BoundedBuffer;
use crate::error::CloseError;

use std::fmt;
use std::time::Duration;

/// A bounded FIFO buffer whose `pop` returns a configured sentinel value
/// instead of an error when nothing can be delivered in time.
///
/// Caller contract: the sentinel must be a value that legitimate payloads
/// can never take. The shim has no way to distinguish "popped an element
/// that happens to equal the sentinel" from "timed out" — that ambiguity
/// is inherent to the surface. Prefer [`BoundedBuffer`] for new code.
pub struct SentinelBuffer<T: Clone> {
  buf: BoundedBuffer<T>,
  empty_sentinel: T,
}

impl<T: Clone> SentinelBuffer<T> {
  /// Creates a sentinel buffer with the given capacity, default wait
  /// bound, and "nothing there" stand-in value.
  ///
  /// # Panics
  ///
  /// Panics if `capacity` is zero.
  pub fn new(capacity: usize, default_timeout: Duration, empty_sentinel: T) -> Self {
    SentinelBuffer {
      buf: BoundedBuffer::with_timeout(capacity, default_timeout),
      empty_sentinel,
    }
  }

  /// Appends `value`, waiting up to the default bound for space.
  ///
  /// Failure is silent: a timed-out push is observable only through
  /// [`dropped`](SentinelBuffer::dropped), and a push against a closed
  /// buffer discards the value.
  pub fn push(&self, value: T) {
    let _ = self.buf.push_timeout_default(value);
  }

  /// Takes the oldest element, waiting up to the default bound.
  ///
  /// Returns the configured sentinel when the bound elapses with the
  /// buffer still empty, or once the buffer is closed and drained.
  pub fn pop(&self) -> T {
    match self.buf.pop_timeout_default() {
      Ok(value) => value,
      Err(_) => self.empty_sentinel.clone(),
    }
  }

  /// Returns the sentinel value this buffer was configured with.
  pub fn empty_sentinel(&self) -> &T {
    &self.empty_sentinel
  }

  // --- Delegated introspection ---

  /// Returns the number of elements currently buffered.
  pub fn len(&self) -> usize {
    self.buf.len()
  }

  /// Returns `true` if the buffer holds no elements.
  pub fn is_empty(&self) -> bool {
    self.buf.is_empty()
  }

  /// Returns the maximum number of resident elements.
  pub fn capacity(&self) -> usize {
    self.buf.capacity()
  }

  /// Returns how many push attempts have been silently dropped.
  pub fn dropped(&self) -> u64 {
    self.buf.dropped()
  }

  /// Returns a copy of the oldest element, or `None` if empty.
  pub fn front(&self) -> Option<T> {
    self.buf.front()
  }

  /// Returns a copy of the newest element, or `None` if empty.
  pub fn back(&self) -> Option<T> {
    self.buf.back()
  }

  /// Removes every buffered element.
  pub fn clear(&self) {
    self.buf.clear()
  }

  /// Closes the buffer, waking all waiters.
  pub fn close(&self) -> Result<(), CloseError> {
    self.buf.close()
  }

  /// Returns `true` once the buffer has been closed.
  pub fn is_closed(&self) -> bool {
    self.buf.is_closed()
  }
}

impl<T: Clone> fmt::Debug for SentinelBuffer<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SentinelBuffer").field("buf", &self.buf).finish()
  }
}
