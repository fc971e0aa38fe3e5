//! Procedures of a solve, each implemented as methods on a context.
//!
//! - [solve] for the loop which ties the procedures together.
//! - [bcp] for boolean constraint propagation.
//! - [analysis] for conflict analysis.
//! - [backjump] for removing levels from the trail.
//! - [decision] for choosing a literal to assign.
//! - [restarts] for the restart policies.
//! - [reduction] for reduction of the clause database.
//! - [assumptions] for assumptions made during a solve, and analysis of a failure.
//! - [simplify] for propagation alone.
//! - [apply_reductions] for applying the results of the [reducer](crate::reducer) to the search.

pub mod analysis;
pub mod apply_reductions;
pub mod assumptions;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod reduction;
pub mod restarts;
pub mod simplify;
pub mod solve;
