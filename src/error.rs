// src/error.rs

use core::fmt;

/// Error returned by `try_push` when the value could not be placed
/// immediately. The rejected value is handed back to the caller.
#[derive(PartialEq, Eq, Clone)]
pub enum TryPushError<T> {
  /// The buffer is at capacity. This rejection is counted as a drop.
  Full(T),
  /// The buffer has been closed; no further insertions are accepted.
  Closed(T),
}

impl<T> TryPushError<T> {
  /// Consumes the error, returning the rejected value.
  #[inline]
  pub fn into_inner(self) -> T {
    match self {
      TryPushError::Full(v) | TryPushError::Closed(v) => v,
    }
  }
}

impl<T> fmt::Debug for TryPushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TryPushError::Full(_) => write!(f, "TryPushError::Full(..)"),
      TryPushError::Closed(_) => write!(f, "TryPushError::Closed(..)"),
    }
  }
}

impl<T> fmt::Display for TryPushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TryPushError::Full(_) => f.write_str("buffer full"),
      TryPushError::Closed(_) => f.write_str("buffer closed"),
    }
  }
}

impl<T> std::error::Error for TryPushError<T> {}

/// Error returned by the indefinitely blocking `push`.
#[derive(PartialEq, Eq, Clone)]
pub enum PushError<T> {
  /// The buffer was closed before space became available.
  Closed(T),
}

impl<T> PushError<T> {
  /// Consumes the error, returning the rejected value.
  #[inline]
  pub fn into_inner(self) -> T {
    match self {
      PushError::Closed(v) => v,
    }
  }
}

impl<T> fmt::Debug for PushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PushError::Closed(_) => write!(f, "PushError::Closed(..)"),
    }
  }
}

impl<T> fmt::Display for PushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PushError::Closed(_) => f.write_str("buffer closed"),
    }
  }
}

impl<T> std::error::Error for PushError<T> {}

/// Error returned by `push_timeout` and `push_timeout_default`.
#[derive(PartialEq, Eq, Clone)]
pub enum PushTimeoutError<T> {
  /// The wait bound elapsed with the buffer still full. This rejection is
  /// counted as a drop.
  Timeout(T),
  /// The buffer was closed before space became available.
  Closed(T),
}

impl<T> PushTimeoutError<T> {
  /// Consumes the error, returning the rejected value.
  #[inline]
  pub fn into_inner(self) -> T {
    match self {
      PushTimeoutError::Timeout(v) | PushTimeoutError::Closed(v) => v,
    }
  }
}

impl<T> fmt::Debug for PushTimeoutError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PushTimeoutError::Timeout(_) => write!(f, "PushTimeoutError::Timeout(..)"),
      PushTimeoutError::Closed(_) => write!(f, "PushTimeoutError::Closed(..)"),
    }
  }
}

impl<T> fmt::Display for PushTimeoutError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PushTimeoutError::Timeout(_) => f.write_str("push timed out waiting for space"),
      PushTimeoutError::Closed(_) => f.write_str("buffer closed"),
    }
  }
}

impl<T> std::error::Error for PushTimeoutError<T> {}

/// Error returned by `force_push` — which never fails on capacity, only on
/// a closed buffer.
#[derive(PartialEq, Eq, Clone)]
pub enum ForcePushError<T> {
  /// The buffer has been closed; no further insertions are accepted.
  Closed(T),
}

impl<T> ForcePushError<T> {
  /// Consumes the error, returning the rejected value.
  #[inline]
  pub fn into_inner(self) -> T {
    match self {
      ForcePushError::Closed(v) => v,
    }
  }
}

impl<T> fmt::Debug for ForcePushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ForcePushError::Closed(_) => write!(f, "ForcePushError::Closed(..)"),
    }
  }
}

impl<T> fmt::Display for ForcePushError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ForcePushError::Closed(_) => f.write_str("buffer closed"),
    }
  }
}

impl<T> std::error::Error for ForcePushError<T> {}

/// Error returned by `try_pop` when no element could be taken immediately.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TryPopError {
  /// The buffer holds no elements.
  Empty,
  /// The buffer is closed and fully drained.
  Closed,
}

impl std::error::Error for TryPopError {}
impl fmt::Display for TryPopError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TryPopError::Empty => write!(f, "buffer empty"),
      TryPopError::Closed => write!(f, "buffer closed (empty and no longer accepting elements)"),
    }
  }
}

/// Error returned by the indefinitely blocking `pop`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PopError {
  /// The buffer is closed and fully drained.
  Closed,
}

impl std::error::Error for PopError {}
impl fmt::Display for PopError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PopError::Closed => write!(f, "buffer closed (empty and no longer accepting elements)"),
    }
  }
}

/// Error returned by `pop_timeout` and `pop_timeout_default`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PopTimeoutError {
  /// The wait bound elapsed with the buffer still empty.
  Timeout,
  /// The buffer is closed and fully drained.
  Closed,
}

impl std::error::Error for PopTimeoutError {}
impl fmt::Display for PopTimeoutError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PopTimeoutError::Timeout => write!(f, "pop timed out waiting for an element"),
      PopTimeoutError::Closed => {
        write!(f, "buffer closed (empty and no longer accepting elements)")
      }
    }
  }
}

/// Error returned when closing an already-closed buffer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CloseError;
impl std::error::Error for CloseError {}
impl fmt::Display for CloseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "buffer is already closed")
  }
}
