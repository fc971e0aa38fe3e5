//! Assumptions
//!
//! # Overview
//!
//! Assumptions are given to a solve through [solve_given](GenericContext::solve_given), and hold for that solve only.
//!
//! Assumptions are made as the first decisions of a solve, one level for each assumption, and are made again after each backjump or restart which removes them.
//! An assumption which is already true is given an empty level, so the level of each assumption matches its position.
//!
//! # Failure
//!
//! If an assumption is false when due to be made, the assumptions are inconsistent with the formula.
//! The assumptions responsible are found by walking back through the implication graph from the false assumption, collecting each assumption (a literal without a reason above level zero) met.
//! The result is available from [failed_assumptions](GenericContext::failed_assumptions).

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// Possible results of making the next assumption.
pub enum AssumptionOk {
    /// An assumption was made on a fresh level.
    Made,

    /// Every assumption is made.
    Exhausted,

    /// The assumption is false.
    Failed(CLiteral),
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Makes the next assumption, if any.
    pub fn next_assumption(&mut self) -> AssumptionOk {
        while (self.trail.level() as usize) < self.assumptions.len() {
            let assumption = self.assumptions[self.trail.level() as usize];

            match self.atom_db.literal_value(assumption) {
                Some(true) => self.trail.push_level(),

                Some(false) => return AssumptionOk::Failed(assumption),

                None => {
                    self.trail.push_level();
                    self.assign(assumption, None);
                    return AssumptionOk::Made;
                }
            }
        }
        AssumptionOk::Exhausted
    }

    /// Records the assumptions responsible for `assumption` being false as the failed assumptions.
    pub fn analyze_final(&mut self, assumption: CLiteral) {
        self.failed_assumptions.clear();
        self.failed_assumptions.push(assumption);

        if self.atom_db.level_of(assumption.atom()) == 0 {
            return;
        }

        let atom_count = self.atom_db.count();
        if self.seen.len() < atom_count {
            self.seen.resize(atom_count, false);
        }
        self.seen[assumption.atom() as usize] = true;

        let level_zero_length = self.trail.level_zero_assignments().len();
        for index in (level_zero_length..self.trail.literals.len()).rev() {
            let literal = self.trail.literals[index];
            let atom = literal.atom();
            if !self.seen[atom as usize] {
                continue;
            }

            match self.atom_db.reason_of(atom) {
                None => self.failed_assumptions.push(literal),

                Some(reason) => {
                    if let Ok(reason_literals) = self.clause_db.literals_of(reason) {
                        for other in reason_literals {
                            let other_atom = other.atom();
                            if other_atom != atom && self.atom_db.level_of(other_atom) > 0 {
                                self.seen[other_atom as usize] = true;
                            }
                        }
                    }
                }
            }
            self.seen[atom as usize] = false;
        }

        log::info!(target: targets::SOLVE, "Failed assumptions: {:?}", self.failed_assumptions);
    }
}
