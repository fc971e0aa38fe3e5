/*!
The search side of the reducer.

A [Coordinator] is created at the start of each solve (when the reducer is enabled), and spawns the reducer thread.
Through the coordinator the search:
- [Submits](Coordinator::submit) learnt clauses to the workset.
- [Drains](Coordinator::drain) results, without waiting for the reducer.
- [Publishes](Coordinator::publish) fresh facts to the snapshot read by the reducer.

At the end of a solve the coordinator is [finished](Coordinator::finish), and the reducer thread joined.
Dropping a coordinator also stops and joins the thread.
*/

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, RwLock,
    },
    thread::JoinHandle,
};

use crossbeam::channel::{self, Receiver};

use crate::{
    config::reducer::ReducerConfig,
    misc::log::targets,
    structures::{clause::CClause, literal::CLiteral},
    types::err::ReducerError,
};

use super::{
    counters::ReducerCounters,
    knowledge::Knowledge,
    workset::{self, Workset, WorksetEntry, WorksetPush},
    Reduction, Worker,
};

/// How much of the clause database and trail has been published to the snapshot.
#[derive(Default)]
struct Published {
    units: usize,
    original_binary: usize,
    addition_binary: usize,
}

pub struct Coordinator {
    workset: Workset,
    results: Receiver<Reduction>,
    knowledge: Arc<RwLock<Knowledge>>,
    shutdown: Arc<AtomicBool>,
    interrupt: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    published: Published,
}

impl Coordinator {
    /// Spawns a reducer thread, returning the coordinator of the thread.
    ///
    /// The thread stops when the coordinator is finished or dropped, or when `interrupt` is set.
    pub fn spawn(
        config: &ReducerConfig,
        interrupt: Arc<AtomicBool>,
        counters: Arc<ReducerCounters>,
    ) -> Result<Self, ReducerError> {
        let (workset, entries) = workset::workset(config.workset_capacity.value);
        let (result_sender, results) = channel::unbounded();
        let knowledge = Arc::new(RwLock::new(Knowledge::default()));
        let shutdown = Arc::new(AtomicBool::new(false));

        let worker = Worker {
            entries,
            results: result_sender,
            knowledge: knowledge.clone(),
            shutdown: shutdown.clone(),
            interrupt: interrupt.clone(),
            counters,
        };

        let handle = std::thread::Builder::new()
            .name("reducer".to_string())
            .spawn(move || worker.run())
            .map_err(|_| ReducerError::Spawn)?;

        log::info!(target: targets::COORDINATOR, "Spawned reducer with a workset of {}", workset.capacity());

        Ok(Coordinator {
            workset,
            results,
            knowledge,
            shutdown,
            interrupt,
            handle: Some(handle),
            published: Published::default(),
        })
    }

    /// Hands `entry` to the reducer.
    pub fn submit(&self, entry: WorksetEntry) -> Result<WorksetPush, ReducerError> {
        self.workset.push(entry)
    }

    /// Every result the reducer has produced since the last drain, in the order produced.
    ///
    /// Never waits for the reducer.
    /// Returns an error if the reducer thread has stopped without being asked to.
    pub fn drain(&self) -> Result<Vec<Reduction>, ReducerError> {
        let reductions = self.results.try_iter().collect::<Vec<_>>();
        if reductions.is_empty() && !self.is_alive() {
            log::error!(target: targets::COORDINATOR, "The reducer stopped unexpectedly");
            return Err(ReducerError::Disconnected);
        }
        Ok(reductions)
    }

    /// Whether the reducer thread is running, or was stopped on request.
    fn is_alive(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
            || self.interrupt.load(Ordering::Relaxed)
            || self
                .handle
                .as_ref()
                .is_some_and(|handle| !handle.is_finished())
    }

    /// Publishes facts to the snapshot read by the reducer.
    ///
    /// Each slice is expected to extend the slice given on the previous call, and only the extension is published.
    /// Returns true if some fact was published.
    pub fn publish(
        &mut self,
        level_zero: &[CLiteral],
        original_binary: &[CClause],
        addition_binary: &[CClause],
    ) -> Result<bool, ReducerError> {
        let fresh_units = level_zero.get(self.published.units..).unwrap_or_default();
        let fresh_original = original_binary
            .get(self.published.original_binary..)
            .unwrap_or_default();
        let fresh_addition = addition_binary
            .get(self.published.addition_binary..)
            .unwrap_or_default();

        if fresh_units.is_empty() && fresh_original.is_empty() && fresh_addition.is_empty() {
            return Ok(false);
        }

        {
            let mut knowledge = self
                .knowledge
                .write()
                .map_err(|_| ReducerError::PoisonedSnapshot)?;

            for literal in fresh_units {
                knowledge.add_unit(*literal);
            }
            for clause in fresh_original.iter().chain(fresh_addition) {
                if let [a, b] = clause.as_slice() {
                    knowledge.add_binary(*a, *b);
                }
            }
            knowledge.advance_generation();
            log::trace!(target: targets::COORDINATOR, "Published generation {}", knowledge.generation());
        }

        self.published.units = level_zero.len();
        self.published.original_binary = original_binary.len();
        self.published.addition_binary = addition_binary.len();
        Ok(true)
    }

    /// Stops the reducer thread and waits for the thread to finish.
    ///
    /// Returns an error if the thread panicked.
    pub fn finish(mut self) -> Result<(), ReducerError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<(), ReducerError> {
        self.shutdown.store(true, Ordering::Relaxed);
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| ReducerError::Disconnected),
            None => Ok(()),
        }
    }
}

impl Drop for Coordinator {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        db::{trail::Trail, ClauseKey},
        reducer::ReductionResult,
    };
    use std::time::{Duration, Instant};

    fn coordinator() -> (Coordinator, Arc<ReducerCounters>) {
        let counters = Arc::new(ReducerCounters::default());
        let coordinator = Coordinator::spawn(
            &Config::default().reducer,
            Arc::new(AtomicBool::new(false)),
            counters.clone(),
        )
        .expect("spawn");
        (coordinator, counters)
    }

    fn await_results(coordinator: &Coordinator, count: usize) -> Vec<Reduction> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut results = Vec::default();
        while results.len() < count && Instant::now() < deadline {
            results.extend(coordinator.drain().expect("drain"));
            std::thread::sleep(Duration::from_millis(1));
        }
        results
    }

    #[test]
    fn round_trip() {
        let (mut coordinator, counters) = coordinator();
        assert!(coordinator.publish(&[-3], &[vec![-1, 2]], &[]).expect("publish"));
        assert!(!coordinator.publish(&[-3], &[vec![-1, 2]], &[]).expect("publish"));

        let entry = WorksetEntry {
            key: ClauseKey::Original(7),
            epoch: Trail::default().epoch(),
            clause: vec![1, 2, 3, 4],
        };
        assert!(coordinator.submit(entry).is_ok());

        let results = await_results(&coordinator, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, ClauseKey::Original(7));
        assert_eq!(
            results[0].result,
            ReductionResult::Strengthened {
                literals: vec![2, 4],
                removed: vec![3, 1]
            }
        );

        assert!(coordinator.finish().is_ok());
        assert_eq!(counters.tally().inputs, 1);
        assert_eq!(counters.tally().output_literals, 2);
    }

    #[test]
    fn interrupt_stops_reducer() {
        let interrupt = Arc::new(AtomicBool::new(false));
        let coordinator = Coordinator::spawn(
            &Config::default().reducer,
            interrupt.clone(),
            Arc::new(ReducerCounters::default()),
        )
        .expect("spawn");

        interrupt.store(true, Ordering::Relaxed);
        // Stopped on request, so no error.
        assert!(coordinator.drain().is_ok());
        assert!(coordinator.finish().is_ok());
    }
}
