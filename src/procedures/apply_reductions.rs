/*!
Application of results from the [reducer](crate::reducer) to the search.

Results are applied at safe points of a solve, after propagation has finished without a conflict, in the order the reducer produced them.

# Staleness

Each result is tagged with the [epoch](crate::db::trail::Epoch) of the trail when the clause was learnt.
If the search has since backjumped below (or past) the level of that epoch the result is stale, and is discarded without change to the search.
Results whose clause has since been removed from the clause database are discarded in the same way.

# Results

- Unchanged, nothing happens.
- A contradiction, the formula is unsatisfiable.
- A unit, the search backjumps to level zero (if not there already) and asserts the unit, unless the unit is already true at level zero.
  If the negation of the unit is true at level zero, the formula is unsatisfiable.
- A strengthened clause replaces the live clause, after a check that the strengthened clause is a subset of the live clause.

On replacement, the strengthened clause may be false or unit on the current valuation.
So, the search backjumps to the highest level where the clause is neither, and asserts the clause if unit at that level:
- If some literal is true, or two literals have no value, nothing is required.
- If exactly one literal has no value, the clause asserts that literal at the highest level of the false literals.
- If every literal is false at level zero, the formula is unsatisfiable.
- If every literal is false and a single literal has the highest level, the clause asserts that literal at the second highest level.
- Otherwise, the search backjumps to one below the highest level.

Each backjump made in order to apply a result is counted as a forced backtrack of the reducer.

After all results are applied the facts at level zero, and the binary clauses, are published to the reducer.
*/

use crate::{
    context::{ContextState, GenericContext},
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    reducer::{Reduction, ReductionResult},
    structures::{
        clause::{CClause, Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{ErrorKind, ReducerError},
};

/// Possible 'Ok' results from applying reductions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOk {
    /// Nothing changed on the trail.
    Quiet,

    /// The clause database or the trail changed, so propagation may be required.
    Changed,

    /// The formula is unsatisfiable.
    Contradiction,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Applies every result of the reducer received since the last application, and publishes fresh facts to the reducer.
    pub fn apply_reductions(&mut self) -> Result<ApplyOk, ErrorKind> {
        let reductions = match &self.coordinator {
            Some(coordinator) => coordinator.drain()?,
            None => return Ok(ApplyOk::Quiet),
        };

        let mut outcome = ApplyOk::Quiet;
        for reduction in reductions {
            match self.apply_reduction(reduction)? {
                ApplyOk::Contradiction => return Ok(ApplyOk::Contradiction),
                ApplyOk::Changed => outcome = ApplyOk::Changed,
                ApplyOk::Quiet => {}
            }
        }

        self.publish_knowledge()?;
        Ok(outcome)
    }

    /// Publishes the facts at level zero, and the binary clauses, to the reducer.
    pub fn publish_knowledge(&mut self) -> Result<bool, ErrorKind> {
        let Some(coordinator) = &mut self.coordinator else {
            return Ok(false);
        };
        let published = coordinator.publish(
            self.trail.level_zero_assignments(),
            self.clause_db.original_binary(),
            self.clause_db.addition_binary(),
        )?;
        Ok(published)
    }

    /// Applies a single result of the reducer.
    pub fn apply_reduction(&mut self, reduction: Reduction) -> Result<ApplyOk, ErrorKind> {
        if !self.trail.is_live(reduction.epoch) {
            log::trace!(target: targets::COORDINATOR, "Stale result for {}", reduction.key);
            self.counters.reducer_stale += 1;
            self.counters.reducer_not_output_literals += reduction.input_size as u64;
            return Ok(ApplyOk::Quiet);
        }
        self.counters.reducer_not_output_literals += reduction.literals_not_output() as u64;

        let key = reduction.key;
        match reduction.result {
            ReductionResult::Unchanged => Ok(ApplyOk::Quiet),

            ReductionResult::Contradiction => {
                log::info!(target: targets::COORDINATOR, "Contradiction from {key}");
                self.forced_backjump(0);
                self.state = ContextState::Unsatisfiable(key);
                Ok(ApplyOk::Contradiction)
            }

            ReductionResult::Unit(literal) => self.apply_unit(literal),

            ReductionResult::Strengthened { literals, .. } => {
                self.apply_strengthened(key, literals)
            }
        }
    }

    /// Backjumps to `target`, counting the backjump as forced by the reducer.
    fn forced_backjump(&mut self, target: LevelIndex) {
        let current = self.trail.level();
        if target >= current {
            return;
        }
        self.counters.reducer_backtracks += 1;
        self.counters.reducer_backtrack_levels += (current - target) as u64;
        self.counters.reducer_backtrack_level_before += current as u64;
        if target == 0 {
            self.counters.reducer_backtracks_to_zero += 1;
        }
        self.backjump(target);
    }

    fn apply_unit(&mut self, literal: CLiteral) -> Result<ApplyOk, ErrorKind> {
        let atom = literal.atom();
        let fixed = match self.atom_db.level_of(atom) {
            0 => self.atom_db.literal_value(literal),
            _ => None,
        };

        match fixed {
            Some(true) => Ok(ApplyOk::Quiet),

            Some(false) => {
                let key = self
                    .atom_db
                    .reason_of(atom)
                    .unwrap_or(ClauseKey::AdditionUnit(literal.negate()));
                log::info!(target: targets::COORDINATOR, "Unit {literal} contradicts level zero");
                self.forced_backjump(0);
                self.state = ContextState::Unsatisfiable(key);
                Ok(ApplyOk::Contradiction)
            }

            None => {
                log::trace!(target: targets::COORDINATOR, "Unit {literal}");
                self.forced_backjump(0);
                let key = self
                    .clause_db
                    .store(vec![literal], ClauseSource::Reducer, 1, &mut self.watches)?;
                self.assign(literal, Some(key));
                self.counters.reduced_clauses += 1;
                Ok(ApplyOk::Changed)
            }
        }
    }

    fn apply_strengthened(&mut self, key: ClauseKey, literals: CClause) -> Result<ApplyOk, ErrorKind> {
        let live = match self.clause_db.get(key) {
            Ok(db_clause) if db_clause.is_active() => db_clause,
            _ => {
                log::trace!(target: targets::COORDINATOR, "Result for missing clause {key}");
                return Ok(ApplyOk::Quiet);
            }
        };

        if !literals.subsumes(live) {
            log::error!(target: targets::COORDINATOR, "{} is not a subset of {live}", literals.as_dimacs(false));
            return Err(ReducerError::NotSubsumed(key).into());
        }
        if literals.len() >= live.len() {
            return Ok(ApplyOk::Quiet);
        }

        let mut satisfied = false;
        let mut unvalued = 0;
        let mut false_levels = Vec::with_capacity(literals.len());
        for literal in &literals {
            match self.atom_db.literal_value(*literal) {
                Some(true) => satisfied = true,
                Some(false) => false_levels.push(self.atom_db.level_of(literal.atom())),
                None => unvalued += 1,
            }
        }
        false_levels.sort_unstable_by(|a, b| b.cmp(a));

        let assert = match (satisfied, unvalued) {
            (true, _) | (false, 2..) => false,

            (false, 1) => {
                self.forced_backjump(false_levels.first().copied().unwrap_or(0));
                true
            }

            (false, _) => match false_levels.as_slice() {
                [0, ..] | [] => {
                    log::info!(target: targets::COORDINATOR, "Strengthened {key} is false at level zero");
                    self.forced_backjump(0);
                    self.state = ContextState::Unsatisfiable(key);
                    return Ok(ApplyOk::Contradiction);
                }

                [highest, next, ..] if highest > next => {
                    self.forced_backjump(*next);
                    true
                }

                [highest, ..] => {
                    self.forced_backjump(highest - 1);
                    false
                }
            },
        };

        let key = match literals.len() {
            2 => {
                let binary_key = self.clause_db.transfer_to_binary(
                    key,
                    literals,
                    &self.atom_db,
                    &mut self.watches,
                )?;
                for literal in self.clause_db.literals_of(binary_key)? {
                    if self.atom_db.reason_of(literal.atom()) == Some(key) {
                        self.atom_db.set_reason(literal.atom(), Some(binary_key));
                    }
                }
                binary_key
            }

            _ => {
                self.clause_db
                    .replace_long(key, literals, &self.atom_db, &mut self.watches)?;
                key
            }
        };
        self.counters.reduced_clauses += 1;

        if assert {
            let asserted = self.clause_db.literals_of(key)?[0];
            log::trace!(target: targets::COORDINATOR, "{key} asserts {asserted} at level {}", self.trail.level());
            self.assign(asserted, Some(key));
        }

        Ok(ApplyOk::Changed)
    }
}
