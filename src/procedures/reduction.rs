//! Reduction of the clause database.
//!
//! When the count of conflicts reaches the scheduled point, (roughly) half of the removable learnt clauses are removed, preferring clauses with high lbd and low activity.
//! A clause is removable if long, above the lbd bound, and not the reason for a current assignment.
//!
//! After each reduction the next is scheduled `reduction_first + reduction_increment * reductions` conflicts later.

use crate::{context::GenericContext, structures::literal::Literal};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Whether a reduction of the clause database is scheduled.
    pub fn reduction_due(&self) -> bool {
        self.counters.conflicts >= self.next_reduction
    }

    /// Reduces the clause database, and schedules the next reduction.
    pub fn reduce_clause_db(&mut self) {
        let atom_db = &self.atom_db;
        let removed = self.clause_db.reduce(|db_clause| {
            let watched = db_clause[0];
            atom_db.literal_value(watched) == Some(true)
                && atom_db.reason_of(watched.atom()) == Some(db_clause.key())
        });

        self.counters.reductions += 1;
        self.counters.removed_clauses += removed as u64;

        let config = &self.config.clause_db;
        self.next_reduction += config.reduction_first.value
            + config.reduction_increment.value * self.counters.reductions;
    }
}
