//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! A solve is a loop of conflict-driven clause learning, where each iteration:
//!
//! 1. Checks for a request to stop (the interrupt flag, the terminate callback, the time limit, or the conflict budget), returning [Unknown](Report::Unknown) if any holds.
//! 2. Propagates every assignment not yet propagated.
//!    - On a conflict at level zero the formula is unsatisfiable.
//!    - On any other conflict a clause is learnt by [analysis](crate::procedures::analysis), the search backjumps to the level where the clause asserts a literal, and the literal is asserted.
//!      The clause is then handed to the reducer, if the reducer is enabled and the clause is not too long.
//! 3. Applies results from the reducer, at this point where propagation is complete.
//! 4. Restarts, or reduces the clause database, if due.
//! 5. Makes the next assumption, or otherwise a decision.
//!    If every atom has a value the formula is satisfiable, and the valuation is kept as the model.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!                    +----------+     conflict     +----------+
//!        +---------->| propagate|----------------->| analysis |---+
//!        |           +----------+                  +----------+   |
//!        |                | no conflict                           |
//!        |                ⌄                                       ⌄
//!        |        +------------------+                   +--------------------+
//!        |        | apply_reductions |                   | backjump and learn |
//!        |        +------------------+                   +--------------------+
//!        |                |                                       |
//!        |                ⌄                                       |
//!        |      +---------------------+                           |
//!        +------| assume, or decide   |<--------------------------+
//!               +---------------------+
//! ```
//!
//! The reducer thread lives for the duration of a solve.
//! The thread is spawned at the start, and finished at the end, of each solve.
//!
//! # Example
//!
//! ```rust
//! # use otter_red::context::Context;
//! # use otter_red::config::Config;
//! # use otter_red::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! let [p, q] = *the_context.fresh_or_max_literals(2).as_slice() else { panic!() };
//!
//! assert!(the_context.add_clause(vec![p, q]).is_ok());
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//!
//! assert_eq!(the_context.solve_given(vec![-q]), Ok(Report::Unsatisfiable));
//! assert_eq!(the_context.failed_assumptions(), &[-q]);
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! ```

use std::{sync::atomic::Ordering, time::Instant};

use crate::{
    context::{ContextState, GenericContext},
    db::{trail::Epoch, ClauseKey},
    misc::log::targets::{self},
    procedures::{
        analysis::Analysis, apply_reductions::ApplyOk, assumptions::AssumptionOk,
    },
    reducer::{workset::WorksetEntry, workset::WorksetPush, Coordinator},
    reports::Report,
    structures::{
        clause::{CClause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{BCPError, BuildError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.solve_given(Vec::default())
    }

    /// Determines the satisfiability of the formula in the context, under the given assumptions.
    ///
    /// The assumptions hold for this solve only.
    /// If the formula is unsatisfiable due to the assumptions, the responsible assumptions are available from [failed_assumptions](GenericContext::failed_assumptions).
    pub fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind> {
        for assumption in &assumptions {
            if *assumption == 0 {
                return Err(BuildError::ZeroLiteral.into());
            }
            if assumption.atom() as usize >= self.atom_db.count() {
                return Err(BuildError::UnknownAssumption.into());
            }
        }

        let start = Instant::now();
        self.backjump(0);
        self.failed_assumptions.clear();
        self.model.clear();

        if let ContextState::Unsatisfiable(_) = self.state {
            return Ok(Report::Unsatisfiable);
        }

        self.state = ContextState::Solving;
        self.assumptions = assumptions;
        self.counters.solve_conflicts = 0;
        self.counters.fresh_conflicts = 0;
        let budget = self.conflict_limit.take();

        log::info!(target: targets::SOLVE, "Solve with {} assumptions", self.assumptions.len());

        let result = self.start_reducer().and_then(|_| self.search(budget, start));

        let finished = match self.coordinator.take() {
            Some(coordinator) => coordinator.finish(),
            None => Ok(()),
        };
        self.counters.reducer = self.reducer_counters.tally();
        self.counters.time = start.elapsed();

        let report = match result {
            Ok(report) => {
                finished?;
                report
            }

            Err(ErrorKind::OutOfMemory) => {
                log::warn!(target: targets::SOLVE, "Out of memory");
                Report::Unknown
            }

            Err(e) => {
                self.backjump(0);
                self.state = ContextState::Input;
                return Err(e);
            }
        };

        if report == Report::Unknown {
            self.backjump(0);
            self.state = ContextState::Input;
        }

        log::info!(target: targets::SOLVE, "Solve: {report}");
        Ok(report)
    }

    /// Spawns the reducer, if enabled, and publishes the facts known before the search.
    fn start_reducer(&mut self) -> Result<(), ErrorKind> {
        if !self.config.reducer.enabled.value {
            return Ok(());
        }
        let coordinator = Coordinator::spawn(
            &self.config.reducer,
            self.interrupt.clone(),
            self.reducer_counters.clone(),
        )?;
        self.coordinator = Some(coordinator);
        self.publish_knowledge()?;
        Ok(())
    }

    /// Whether the solve should stop with an unknown result.
    fn should_stop(&mut self, budget: Option<u64>, start: Instant) -> bool {
        if self.interrupt.load(Ordering::Relaxed) || self.check_callback_terminate() {
            return true;
        }
        if let Some(limit) = self.config.time_limit.value {
            if start.elapsed() > limit {
                return true;
            }
        }
        budget.is_some_and(|budget| self.counters.solve_conflicts >= budget)
    }

    fn search(&mut self, budget: Option<u64>, start: Instant) -> Result<Report, ErrorKind> {
        loop {
            self.counters.iterations += 1;

            if self.should_stop(budget, start) {
                return Ok(Report::Unknown);
            }

            match self.propagate() {
                Ok(()) => {}

                Err(BCPError::Conflict(key)) => {
                    self.counters.conflicts += 1;
                    self.counters.fresh_conflicts += 1;
                    self.counters.solve_conflicts += 1;

                    if self.trail.level() == 0 {
                        self.state = ContextState::Unsatisfiable(key);
                        return Ok(Report::Unsatisfiable);
                    }

                    let trail_length = self.trail.literals.len();
                    let analysis = self.conflict_analysis(key)?;
                    self.note_conflict_for_restarts(analysis.lbd, trail_length);

                    self.backjump(analysis.backjump_level);
                    self.learn(analysis)?;

                    self.atom_db.decay_activity();
                    self.clause_db.decay_activity();

                    let interval = self.config.verbosity_interval.value as u64;
                    if self.config.verbosity.value > 0
                        && interval > 0
                        && self.counters.conflicts % interval == 0
                    {
                        self.make_callback_progress();
                    }
                    continue;
                }

                Err(e) => return Err(e.into()),
            }

            match self.apply_reductions()? {
                ApplyOk::Contradiction => return Ok(Report::Unsatisfiable),
                ApplyOk::Changed => continue,
                ApplyOk::Quiet => {}
            }

            if self.restart_due() {
                self.restart();
                continue;
            }

            if self.reduction_due() {
                self.reduce_clause_db();
            }

            match self.next_assumption() {
                AssumptionOk::Made => continue,

                AssumptionOk::Failed(assumption) => {
                    self.analyze_final(assumption);
                    self.state = ContextState::AssumptionsFailed;
                    return Ok(Report::Unsatisfiable);
                }

                AssumptionOk::Exhausted => {}
            }

            match self.choose_decision() {
                Some(decision) => self.make_decision(decision),

                None => {
                    self.model.clone_from(self.atom_db.valuation());
                    self.state = ContextState::Satisfiable;
                    return Ok(Report::Satisfiable);
                }
            }
        }
    }

    /// Stores the clause of `analysis`, asserts the asserted literal, and hands the clause to the reducer.
    ///
    /// The search is expected to have backjumped to the level of the analysis.
    fn learn(&mut self, analysis: Analysis) -> Result<(), ErrorKind> {
        let Analysis { clause, lbd, .. } = analysis;
        let asserted = clause[0];

        match clause.len() {
            1 => self.counters.learnt_unit += 1,
            2 => self.counters.learnt_binary += 1,
            _ => {}
        }
        if lbd <= 2 {
            self.counters.learnt_glue_two += 1;
        }

        let submission = match self.coordinator {
            Some(_) if clause.len() > 1 && clause.len() <= self.config.reducer.max_clause_size.value => {
                let mut copy = CClause::new();
                copy.try_reserve(clause.len())
                    .map_err(|_| ErrorKind::OutOfMemory)?;
                copy.extend_from_slice(&clause);
                Some(copy)
            }
            _ => None,
        };

        let epoch = self.trail.epoch();
        let key = self
            .clause_db
            .store(clause, ClauseSource::Resolution, lbd, &mut self.watches)?;
        self.assign(asserted, Some(key));

        if let Some(copy) = submission {
            self.submit(key, epoch, copy)?;
        }
        Ok(())
    }

    /// Hands a learnt clause to the reducer.
    fn submit(&mut self, key: ClauseKey, epoch: Epoch, clause: CClause) -> Result<(), ErrorKind> {
        let Some(coordinator) = &self.coordinator else {
            return Ok(());
        };
        let size = clause.len() as u64;

        match coordinator.submit(WorksetEntry { key, epoch, clause })? {
            WorksetPush::Inserted => {}
            WorksetPush::Evicted(evicted) => {
                self.counters.workset_deletions += 1;
                self.counters.workset_deletion_literals += evicted.clause.len() as u64;
            }
        }
        self.counters.workset_inserts += 1;
        self.counters.workset_insert_literals += size;
        Ok(())
    }
}
