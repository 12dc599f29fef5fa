mod common;
use common::*;

use weir::error::{PopError, PopTimeoutError, PushError, PushTimeoutError};
use weir::BoundedBuffer;

use std::sync::Arc;
use std::thread;
use std::time::Instant;

#[test]
fn pop_blocks_until_push() {
  let buf = Arc::new(BoundedBuffer::new(5));

  let producer = {
    let buf = Arc::clone(&buf);
    thread::spawn(move || {
      thread::sleep(SHORT_DELAY);
      buf.try_push(3).unwrap();
    })
  };

  let start = Instant::now();
  assert_eq!(buf.pop(), Ok(3));
  // Released by the push, not by a timeout of our own.
  assert!(start.elapsed() < LONG_TIMEOUT);
  assert!(buf.is_empty());
  producer.join().unwrap();
}

#[test]
fn push_blocks_until_pop() {
  let buf = Arc::new(BoundedBuffer::new(1));
  buf.try_push(1).unwrap();

  let producer = {
    let buf = Arc::clone(&buf);
    thread::spawn(move || {
      buf.push(2).unwrap(); // This should block.
    })
  };

  thread::sleep(SHORT_DELAY);
  assert!(!producer.is_finished(), "push should have blocked on a full buffer");

  assert_eq!(buf.pop(), Ok(1));
  producer.join().expect("producer thread panicked");
  assert_eq!(buf.pop(), Ok(2));
}

#[test]
fn timed_push_released_by_pop() {
  // Fill to capacity, then free one slot from another thread well inside
  // the wait bound. The waiting push must complete promptly and land at
  // the back.
  let buf = Arc::new(BoundedBuffer::new(5));
  for i in 1..=5 {
    buf.try_push(i).unwrap();
  }

  let consumer = {
    let buf = Arc::clone(&buf);
    thread::spawn(move || {
      thread::sleep(SHORT_DELAY);
      assert_eq!(buf.try_pop(), Ok(1));
    })
  };

  let start = Instant::now();
  buf.push_timeout(6, LONG_TIMEOUT).unwrap();
  assert!(start.elapsed() < LONG_TIMEOUT / 2, "push should not have run out the bound");

  consumer.join().unwrap();
  assert_eq!(buf.front(), Some(2));
  assert_eq!(buf.back(), Some(6));
  assert_eq!(buf.len(), 5);
  assert_eq!(buf.dropped(), 0);
}

#[test]
fn timed_pop_released_by_push() {
  let buf = Arc::new(BoundedBuffer::new(5));

  let producer = {
    let buf = Arc::clone(&buf);
    thread::spawn(move || {
      thread::sleep(SHORT_DELAY);
      buf.try_push(3).unwrap();
    })
  };

  let start = Instant::now();
  assert_eq!(buf.pop_timeout(LONG_TIMEOUT), Ok(3));
  assert!(start.elapsed() < LONG_TIMEOUT / 2);
  assert_eq!(buf.len(), 0);
  producer.join().unwrap();
}

#[test]
fn pop_timeout_expires_no_earlier_than_the_bound() {
  let buf = BoundedBuffer::<i32>::new(1);

  let start = Instant::now();
  assert_eq!(buf.pop_timeout(SHORT_TIMEOUT), Err(PopTimeoutError::Timeout));
  let elapsed = start.elapsed();

  assert!(elapsed >= SHORT_TIMEOUT, "returned {elapsed:?} before the bound");
  assert!(elapsed < SHORT_TIMEOUT + LONG_TIMEOUT, "overshoot too large: {elapsed:?}");
}

#[test]
fn push_timeout_expires_and_counts_a_drop() {
  let buf = BoundedBuffer::new(1);
  buf.try_push(1).unwrap();

  let start = Instant::now();
  assert_eq!(
    buf.push_timeout(2, SHORT_TIMEOUT),
    Err(PushTimeoutError::Timeout(2))
  );
  let elapsed = start.elapsed();

  assert!(elapsed >= SHORT_TIMEOUT, "returned {elapsed:?} before the bound");
  assert_eq!(buf.dropped(), 1);
  assert_eq!(buf.len(), 1);
  assert_eq!(buf.front(), Some(1));
}

#[test]
fn close_wakes_blocked_pop() {
  let buf = Arc::new(BoundedBuffer::<i32>::new(1));

  let consumer = {
    let buf = Arc::clone(&buf);
    thread::spawn(move || buf.pop())
  };

  thread::sleep(SHORT_DELAY);
  assert!(!consumer.is_finished(), "pop should have blocked on an empty buffer");

  buf.close().unwrap();
  assert_eq!(consumer.join().unwrap(), Err(PopError::Closed));
}

#[test]
fn close_wakes_blocked_push() {
  let buf = Arc::new(BoundedBuffer::new(1));
  buf.try_push(1).unwrap();

  let producer = {
    let buf = Arc::clone(&buf);
    thread::spawn(move || buf.push(2))
  };

  thread::sleep(SHORT_DELAY);
  assert!(!producer.is_finished(), "push should have blocked on a full buffer");

  buf.close().unwrap();
  assert_eq!(producer.join().unwrap(), Err(PushError::Closed(2)));
  // The resident element survives the close and can still be drained.
  assert_eq!(buf.try_pop(), Ok(1));
}

#[test]
fn clear_wakes_blocked_push() {
  let buf = Arc::new(BoundedBuffer::new(2));
  buf.try_push(1).unwrap();
  buf.try_push(2).unwrap();

  let producer = {
    let buf = Arc::clone(&buf);
    thread::spawn(move || buf.push(3))
  };

  thread::sleep(SHORT_DELAY);
  assert!(!producer.is_finished(), "push should have blocked on a full buffer");

  buf.clear();
  producer.join().unwrap().unwrap();
  assert_eq!(buf.len(), 1);
  assert_eq!(buf.front(), Some(3));
}

#[test]
fn force_push_releases_blocked_pop() {
  let buf = Arc::new(BoundedBuffer::new(2));

  let consumer = {
    let buf = Arc::clone(&buf);
    thread::spawn(move || buf.pop())
  };

  thread::sleep(SHORT_DELAY);
  buf.force_push(9).unwrap();
  assert_eq!(consumer.join().unwrap(), Ok(9));
}
