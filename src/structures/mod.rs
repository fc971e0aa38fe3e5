//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! The conjunction of clauses in the [clause database](crate::db::clause) is always entailed by the formula given to the context, though the two may differ as clauses are learnt, strengthened, or forgotten.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
