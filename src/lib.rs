//! Fixed-capacity, thread-safe FIFO buffering for concurrent Rust.
//!
//! Weir provides a single synchronization primitive, [`BoundedBuffer`],
//! shared by arbitrary numbers of producer and consumer threads. Every
//! access mode the classic bounded-buffer problem calls for is covered:
//! non-blocking (`try_push`/`try_pop`), indefinitely blocking
//! (`push`/`pop`), deadline-bounded (`push_timeout`/`pop_timeout`), and
//! unconditional eviction (`force_push`). A sentinel-returning shim,
//! [`SentinelBuffer`], is layered on top for callers that want a plain
//! value back instead of a `Result`.

pub mod buffer;
pub mod error;
pub mod sentinel;

pub use buffer::BoundedBuffer;
pub use sentinel::SentinelBuffer;

pub use error::{
  CloseError, ForcePushError, PopError, PopTimeoutError, PushError, PushTimeoutError,
  TryPopError, TryPushError,
};
