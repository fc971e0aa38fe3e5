/*!
The reducer: a thread beside the search which strengthens learnt clauses.

# Overview

During a solve each learnt clause (within a size limit) is handed to the reducer through the [workset], tagged with the key of the clause in the clause database and the [epoch](crate::db::trail::Epoch) of the trail at which the clause was learnt.

The reducer thread takes entries from the workset, and [strengthens](strengthen::strengthen) each clause against a [snapshot](knowledge::Knowledge) of facts which hold regardless of any decision: the literals valued at level zero and the binary clauses of the clause database.
The result of strengthening, a [Reduction], is sent back to the search along a second channel.

The search reads results only at safe points, between propagation and the next decision, through the [Coordinator].
So, the clause database, the trail and the watch lists are only ever mutated by the search.
For details on how a result is applied, see [apply_reductions](crate::procedures::apply_reductions).

# Sharing

The only state shared between the search and the reducer is:
- The two channels.
- The [snapshot](knowledge::Knowledge), behind a [RwLock](std::sync::RwLock).
  The search takes the write lock to publish fresh facts, and the reducer takes the read lock only to copy the snapshot when a fresh generation is published.
- A shutdown flag, and the interrupt flag of the context.
- [Atomic counters](counters::ReducerCounters) for statistics.

# Soundness

Every result is either unchanged, or a subset of the input clause which is entailed by the input clause together with the snapshot.
As the snapshot is entailed by the formula, so is the result.
*/

pub mod coordinator;
pub mod counters;
pub mod knowledge;
pub mod reduction;
pub mod strengthen;
pub mod workset;

pub use coordinator::Coordinator;
pub use reduction::{Reduction, ReductionResult};

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, RwLock,
    },
    time::Duration,
};

use crossbeam::channel::{Receiver, RecvTimeoutError, Sender};

use crate::{misc::log::targets, structures::clause::Clause};

use counters::ReducerCounters;
use knowledge::Knowledge;
use workset::WorksetEntry;

/// The longest the reducer waits for an entry before checking for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Everything owned by the reducer thread.
pub(crate) struct Worker {
    pub entries: Receiver<WorksetEntry>,
    pub results: Sender<Reduction>,
    pub knowledge: Arc<RwLock<Knowledge>>,
    pub shutdown: Arc<AtomicBool>,
    pub interrupt: Arc<AtomicBool>,
    pub counters: Arc<ReducerCounters>,
}

impl Worker {
    fn stopped(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed) || self.interrupt.load(Ordering::Relaxed)
    }

    /// The loop of the reducer thread.
    ///
    /// Runs until shutdown or interrupt is requested, or either channel is disconnected.
    pub fn run(self) {
        log::debug!(target: targets::REDUCER, "Reducer started");
        let mut local = Knowledge::default();

        while !self.stopped() {
            let entry = match self.entries.recv_timeout(POLL_INTERVAL) {
                Ok(entry) => entry,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            };

            self.counters.note_input(entry.clause.size());

            match self.knowledge.read() {
                Ok(shared) => {
                    if shared.generation() != local.generation() {
                        local.clone_from(&shared);
                        log::trace!(target: targets::REDUCER, "Snapshot generation {}", local.generation());
                    }
                }
                Err(_) => {
                    log::error!(target: targets::REDUCER, "Snapshot poisoned");
                    break;
                }
            }

            let result = strengthen::strengthen(&entry.clause, &local);
            self.counters.note_result(&result);
            log::trace!(target: targets::REDUCER, "{}: {result}", entry.key);

            let reduction = Reduction {
                key: entry.key,
                epoch: entry.epoch,
                input_size: entry.clause.len(),
                result,
            };

            if self.results.send(reduction).is_err() {
                break;
            }
        }

        log::debug!(target: targets::REDUCER, "Reducer stopped");
    }
}
