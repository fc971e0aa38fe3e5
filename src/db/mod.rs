//! Databases for holding information relevant to a solve.
//!
//!   - [The clause database](crate::db::clause)
//!     + A collection of clauses, each indexed by a [clause key](ClauseKey). \
//!       From an external perspective there are two important kinds of clause:
//!       * Original clauses \
//!         Original clauses are added to the context from some external source (e.g. directly or through some DIMACS file).
//!         Original clauses are never removed.
//!       * Added clauses \
//!         Clauses added to the context by some procedure (resolution during analysis, or the reducer).
//!         Every added clause is a consequence of the collection of original clauses.
//!         Long added clauses may be removed during a [reduction](crate::procedures::reduction).
//!
//!   - [The atom database](crate::db::atom)
//!     + Properties of atoms: the current valuation, with the level and reason of each value, the saved phase and the activity of each atom.
//!
//!   - [The trail](crate::db::trail)
//!     + The order in which literals were assigned, partitioned into levels.
//!
//!   - [Watches](crate::db::watches)
//!     + For each literal, the clauses in which the literal is watched.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;

/// The index of a decision level.
pub type LevelIndex = u32;

use crate::{context::GenericContext, structures::literal::CLiteral};

/// Canonical methods to record assignments to the context.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Assigns `literal` at the current level for `reason`, and records the assignment on the trail.
    ///
    /// # Soundness
    /// The atom of `literal` must not have a value.
    pub fn assign(&mut self, literal: CLiteral, reason: Option<ClauseKey>) {
        if self
            .atom_db
            .set_value(literal, self.trail.level(), reason)
            .is_ok()
        {
            self.trail.store_assignment(literal);
        }
    }
}
