use std::iter::FusedIterator;

use crate::error::CounterError;

/// Value the inner counter is restored to each time it runs out.
pub const RESET: u64 = 3;

/// One point of the countdown grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    pub outer: u64,
    pub inner: u64,
}

impl State {
    /// Builds a state from signed inputs, rejecting negative counters.
    pub fn new(outer: i64, inner: i64) -> Result<Self, CounterError> {
        let outer = u64::try_from(outer).map_err(|_| CounterError::NegativeOuter(outer))?;
        let inner = u64::try_from(inner).map_err(|_| CounterError::NegativeInner(inner))?;
        Ok(Self { outer, inner })
    }

    /// True once the outer counter has run out.
    pub fn is_terminal(&self) -> bool {
        self.outer == 0
    }
}

/// Two-counter countdown with a fixed inner reset width.
///
/// Starting from `(outer, inner)` the descent decrements `inner` until it
/// hits zero, then decrements `outer` and restores `inner` to `reset`. The
/// walk stops as soon as `outer` is zero; the inner counter is never looked
/// at in that state. Every visited state, the terminal one included, counts
/// as one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    reset: u64,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(RESET)
    }
}

impl Counter {
    pub const fn new(reset: u64) -> Self {
        Self { reset }
    }

    pub fn reset(&self) -> u64 {
        self.reset
    }

    /// Next state of the descent, or `None` once `state` is terminal.
    pub fn step(&self, state: State) -> Option<State> {
        match state {
            State { outer: 0, .. } => None,
            State { outer, inner: 0 } => Some(State {
                outer: outer - 1,
                inner: self.reset,
            }),
            State { outer, inner } => Some(State {
                outer,
                inner: inner - 1,
            }),
        }
    }

    /// Every state visited from `(outer, inner)`, in order, ending with the
    /// terminal one.
    pub fn states(&self, outer: i64, inner: i64) -> Result<States, CounterError> {
        let start = State::new(outer, inner)?;
        Ok(States {
            counter: *self,
            next: Some(start),
        })
    }

    /// Number of steps the descent from `(outer, inner)` takes.
    ///
    /// Walks the states with an accumulator, so stack usage does not grow
    /// with the inputs.
    pub fn count(&self, outer: i64, inner: i64) -> Result<u64, CounterError> {
        let mut state = State::new(outer, inner)?;
        let mut total: u64 = 1;
        while let Some(next) = self.step(state) {
            total = total.checked_add(1).ok_or(CounterError::Overflow)?;
            state = next;
        }
        Ok(total)
    }

    /// Same result as [`Counter::count`], computed by plain structural
    /// recursion. Stack depth grows with the step count.
    pub fn count_recursive(&self, outer: i64, inner: i64) -> Result<u64, CounterError> {
        let start = State::new(outer, inner)?;
        Ok(self.descend(start.outer, start.inner))
    }

    fn descend(&self, outer: u64, inner: u64) -> u64 {
        if outer == 0 {
            return 1;
        }
        if inner == 0 {
            return 1 + self.descend(outer - 1, self.reset);
        }
        1 + self.descend(outer, inner - 1)
    }

    /// Row-by-row evaluation: the first (possibly partial) row, then one
    /// full row of `reset + 1` steps per remaining outer value, then the
    /// terminal state.
    pub fn count_nested_loops(&self, outer: i64, inner: i64) -> Result<u64, CounterError> {
        let start = State::new(outer, inner)?;
        if start.is_terminal() {
            return Ok(1);
        }
        let row = self.reset.checked_add(1).ok_or(CounterError::Overflow)?;
        let mut total = start.inner.checked_add(2).ok_or(CounterError::Overflow)?;
        for _ in (1..start.outer).rev() {
            total = total.checked_add(row).ok_or(CounterError::Overflow)?;
        }
        Ok(total)
    }

    /// `(reset + 1) * (outer - 1) + inner + 2` for `outer > 0`, `1` otherwise.
    pub fn closed_form(&self, outer: i64, inner: i64) -> Result<u64, CounterError> {
        let start = State::new(outer, inner)?;
        if start.is_terminal() {
            return Ok(1);
        }
        self.reset
            .checked_add(1)
            .and_then(|row| row.checked_mul(start.outer - 1))
            .and_then(|rows| rows.checked_add(start.inner))
            .and_then(|total| total.checked_add(2))
            .ok_or(CounterError::Overflow)
    }
}

/// Iterator returned by [`Counter::states`].
#[derive(Debug, Clone)]
pub struct States {
    counter: Counter,
    next: Option<State>,
}

impl Iterator for States {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        let current = self.next?;
        self.next = self.counter.step(current);
        Some(current)
    }
}

impl FusedIterator for States {}

/// Step count of the default countdown (`RESET = 3`).
pub fn count(outer: i64, inner: i64) -> Result<u64, CounterError> {
    Counter::default().count(outer, inner)
}
