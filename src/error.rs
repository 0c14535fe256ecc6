use thiserror::Error;

/// Failure of a strict enqueue/dequeue/peek. No state is changed when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("ring buffer is full")]
    Full,

    #[error("ring buffer is empty")]
    Empty,
}

pub type BufferResult<T> = Result<T, BufferError>;
