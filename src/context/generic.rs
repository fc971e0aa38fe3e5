use std::sync::{atomic::AtomicBool, Arc};

use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches, ClauseKey},
    procedures::restarts::RestartState,
    reducer::{counters::ReducerCounters, Coordinator},
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::{vValuation, Valuation},
    },
    types::err::ErrorKind,
};

use super::{
    callbacks::{CallbackProgress, CallbackTerminate},
    ContextState, Counters,
};

/// A generic context, paramaterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use otter_red::context::GenericContext;
/// # use otter_red::generic::minimal_pcg::MinimalPCG32;
/// # use otter_red::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config_with_rng(Config::default(), MinimalPCG32::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Watch lists, for each literal.
    pub watches: Watches,

    /// The trail of assignments.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// Restart bookkeeping.
    pub(crate) restarts: RestartState,

    /// The conflict count at which the clause database is next reduced.
    pub(crate) next_reduction: u64,

    /// The assumptions of the current (or last) solve.
    pub(crate) assumptions: Vec<CLiteral>,

    /// A subset of the assumptions of the last solve, inconsistent with the formula.
    pub(crate) failed_assumptions: Vec<CLiteral>,

    /// The valuation found by the last satisfiable solve.
    pub(crate) model: vValuation,

    /// A limit on conflicts for the next solve.
    pub(crate) conflict_limit: Option<u64>,

    /// A literal fixed as true, if one has been requested.
    pub(crate) true_literal: Option<CLiteral>,

    /// Marks on atoms, used during analysis.
    pub(crate) seen: Vec<bool>,

    /// The coordinator of the reducer thread, during a solve.
    pub(crate) coordinator: Option<Coordinator>,

    /// Counters kept by the reducer thread.
    pub(crate) reducer_counters: Arc<ReducerCounters>,

    /// Set from any thread to interrupt a solve.
    pub(crate) interrupt: Arc<AtomicBool>,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,

    /// Receives progress reports.
    pub(super) callback_progress: Option<Box<CallbackProgress>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_with_rng(config: Config, rng: R) -> Self {
        let next_reduction = config.clause_db.reduction_first.value;
        GenericContext {
            atom_db: AtomDB::new(&config),
            clause_db: ClauseDB::new(&config),
            watches: Watches::default(),
            trail: Trail::default(),
            restarts: RestartState::new(&config.restarts),
            next_reduction,

            config,
            counters: Counters::default(),
            state: ContextState::Configuration,
            rng,

            assumptions: Vec::default(),
            failed_assumptions: Vec::default(),
            model: Vec::default(),
            conflict_limit: None,
            true_literal: None,
            seen: Vec::default(),

            coordinator: None,
            reducer_counters: Arc::new(ReducerCounters::default()),
            interrupt: Arc::new(AtomicBool::new(false)),

            callback_terminate: None,
            callback_progress: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The clause with which unsatisfiability of the context was determined by.
    pub fn unsatisfiable_clause(&self) -> Result<ClauseKey, ErrorKind> {
        match self.state {
            ContextState::Unsatisfiable(key) => Ok(key),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// A fresh atom, part of the language of the context.
    pub fn fresh_atom(&mut self) -> Result<Atom, ErrorKind> {
        let previous_value = self.rng.gen_bool(self.config.polarity_lean.value);
        let atom = self.atom_db.fresh_atom(previous_value)?;
        Ok(atom)
    }

    /// A fresh atom, or the maximum atom if no fresh atom is available.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(_) => (self.atom_db.count() - 1) as Atom,
        }
    }

    /// A collection of `count` fresh positive literals, stopping early if atoms are exhausted.
    pub fn fresh_or_max_literals(&mut self, count: usize) -> Vec<CLiteral> {
        let mut literals = Vec::with_capacity(count);
        for _ in 0..count {
            match self.fresh_atom() {
                Ok(atom) => literals.push(CLiteral::new(atom, true)),
                Err(_) => break,
            }
        }
        literals
    }

    /// Ensures every atom up to and including `atom` is part of the language of the context.
    pub fn ensure_atom(&mut self, atom: Atom) -> Result<(), ErrorKind> {
        while self.atom_db.count() <= atom as usize {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// A count of atoms in the context, excluding the internal top atom.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count() - 1
    }

    /// The value of `atom`.
    ///
    /// After a satisfiable solve, the value in the model found.
    /// Otherwise, the value of the atom at level zero, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        match self.state {
            ContextState::Satisfiable => self.model.value_of(atom),
            _ => match self.atom_db.level_of(atom) {
                0 => self.atom_db.value_of(atom),
                _ => None,
            },
        }
    }

    /// The model found by the last solve, if the solve was satisfiable.
    pub fn model(&self) -> Option<&vValuation> {
        match self.state {
            ContextState::Satisfiable => Some(&self.model),
            _ => None,
        }
    }

    /// A subset of the assumptions of the last solve which is inconsistent with the formula, if the solve failed due to the assumptions.
    pub fn failed_assumptions(&self) -> &[CLiteral] {
        &self.failed_assumptions
    }

    /// A flag which, when set from any thread, interrupts a solve.
    ///
    /// The solve returns with an unknown result at the next iteration, and the flag remains set until cleared.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupt.clone()
    }

    /// Limits the next solve to `limit` conflicts.
    pub fn set_conflict_limit(&mut self, limit: Option<u64>) {
        self.conflict_limit = limit;
    }

    /// A literal fixed as true, created on first request.
    pub fn true_literal(&mut self) -> Result<CLiteral, ErrorKind> {
        if let Some(literal) = self.true_literal {
            return Ok(literal);
        }
        let atom = self.fresh_atom()?;
        let literal = CLiteral::new(atom, true);
        self.add_clause(literal)?;
        self.true_literal = Some(literal);
        Ok(literal)
    }
}
