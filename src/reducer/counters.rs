//! Counters kept by the reducer thread.
//!
//! Counters are atomic, written by the reducer thread and read by the search when reporting statistics.

use std::sync::atomic::{AtomicU64, Ordering};

use super::ReductionResult;

#[derive(Default)]
pub struct ReducerCounters {
    inputs: AtomicU64,
    input_literals: AtomicU64,
    outputs: AtomicU64,
    output_literals: AtomicU64,
}

/// A copy of the reducer counters at some point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReducerTally {
    /// Clauses taken from the workset.
    pub inputs: u64,
    pub input_literals: u64,
    /// Results other than [Unchanged](ReductionResult::Unchanged).
    pub outputs: u64,
    pub output_literals: u64,
}

impl ReducerCounters {
    pub fn note_input(&self, size: usize) {
        self.inputs.fetch_add(1, Ordering::Relaxed);
        self.input_literals
            .fetch_add(size as u64, Ordering::Relaxed);
    }

    pub fn note_result(&self, result: &ReductionResult) {
        let output_size = match result {
            ReductionResult::Unchanged => return,
            ReductionResult::Strengthened { literals, .. } => literals.len(),
            ReductionResult::Unit(_) => 1,
            ReductionResult::Contradiction => 0,
        };
        self.outputs.fetch_add(1, Ordering::Relaxed);
        self.output_literals
            .fetch_add(output_size as u64, Ordering::Relaxed);
    }

    pub fn tally(&self) -> ReducerTally {
        ReducerTally {
            inputs: self.inputs.load(Ordering::Relaxed),
            input_literals: self.input_literals.load(Ordering::Relaxed),
            outputs: self.outputs.load(Ordering::Relaxed),
            output_literals: self.output_literals.load(Ordering::Relaxed),
        }
    }
}
