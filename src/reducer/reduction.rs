//! The results of the reducer.

use crate::{
    db::{trail::Epoch, ClauseKey},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
};

/// The result of strengthening a clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReductionResult {
    /// Nothing could be removed from the clause.
    Unchanged,

    /// A strict subset of the clause, together with the literals removed.
    Strengthened {
        literals: CClause,
        removed: Vec<CLiteral>,
    },

    /// The clause was reduced to a single literal, which holds at level zero.
    Unit(CLiteral),

    /// Every literal of the clause was removed, and so the formula is unsatisfiable.
    Contradiction,
}

impl std::fmt::Display for ReductionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unchanged => write!(f, "Unchanged"),
            Self::Strengthened { literals, removed } => write!(
                f,
                "Strengthened to {} removing {}",
                literals.as_dimacs(false),
                removed.as_dimacs(false)
            ),
            Self::Unit(literal) => write!(f, "Unit {literal}"),
            Self::Contradiction => write!(f, "Contradiction"),
        }
    }
}

/// A result of the reducer, tagged with the key and epoch of the entry the result was derived from.
#[derive(Clone, Debug)]
pub struct Reduction {
    pub key: ClauseKey,
    pub epoch: Epoch,
    /// The size of the clause given to the reducer.
    pub input_size: usize,
    pub result: ReductionResult,
}

impl Reduction {
    /// The number of literals given to the reducer which are not part of the result.
    pub fn literals_not_output(&self) -> usize {
        match &self.result {
            ReductionResult::Unchanged => 0,
            ReductionResult::Strengthened { literals, .. } => self.input_size - literals.len(),
            ReductionResult::Unit(_) => self.input_size - 1,
            ReductionResult::Contradiction => self.input_size,
        }
    }
}
