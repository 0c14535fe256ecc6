//! A fixed-capacity circular FIFO queue with strict, lenient and overwriting variants
//! of its enqueue and dequeue operations.

pub mod error;
pub mod ringbuf;

pub use error::{BufferError, BufferResult};
pub use ringbuf::{Iter, RingBuffer};
