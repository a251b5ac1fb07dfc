use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterError {
    #[error("outer counter must be non-negative, got {0}")]
    NegativeOuter(i64),
    #[error("inner counter must be non-negative, got {0}")]
    NegativeInner(i64),
    #[error("step count does not fit in 64 bits")]
    Overflow,
}
