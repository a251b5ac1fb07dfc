mod counter;
mod error;
pub mod timing;

pub use counter::{count, Counter, State, States, RESET};
pub use error::CounterError;
