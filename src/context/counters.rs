use std::time::Duration;

use crate::reducer::counters::ReducerTally;

/// Counts for various things which count, roughly.
///
/// Counts are kept over the life of a context, across solves, with the exception of `fresh_conflicts` and `time`.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every conflict seen.
    pub conflicts: u64,

    /// A count of conflicts seen since the last restart.
    pub fresh_conflicts: u64,

    /// A count of conflicts seen during the current (or last) solve.
    pub solve_conflicts: u64,

    /// A count of all decisions made, including random decisions.
    pub decisions: u64,

    /// A count of decisions made at random.
    pub random_decisions: u64,

    /// A count of literals propagated.
    pub propagations: u64,

    /// The total number of iterations through a solve.
    pub iterations: u64,

    /// A count of restarts.
    pub restarts: u64,

    /// A count of restarts blocked due to a long trail.
    pub blocked_restarts: u64,

    /// A count of restarts blocked while the previous restart was also blocked.
    pub blocked_restarts_in_row: u64,

    /// The count of restarts when a restart was last blocked.
    pub last_block_at_restart: u64,

    /// A count of reductions of the clause database.
    pub reductions: u64,

    /// A count of clauses removed from the clause database.
    pub removed_clauses: u64,

    /// A count of learnt clauses with an lbd of at most two.
    pub learnt_glue_two: u64,

    /// A count of learnt binary clauses.
    pub learnt_binary: u64,

    /// A count of learnt unit clauses.
    pub learnt_unit: u64,

    /// A count of literals in learnt clauses, before minimization.
    pub max_literals: u64,

    /// A count of literals in learnt clauses, after minimization.
    pub tot_literals: u64,

    /// A count of clauses in the clause database revised by a result of the reducer.
    pub reduced_clauses: u64,

    /// A count of clauses inserted to the workset.
    pub workset_inserts: u64,

    /// A count of literals in clauses inserted to the workset.
    pub workset_insert_literals: u64,

    /// A count of clauses evicted from the workset before reaching the reducer.
    pub workset_deletions: u64,

    /// A count of literals in clauses evicted from the workset.
    pub workset_deletion_literals: u64,

    /// A count of results of the reducer discarded as stale.
    pub reducer_stale: u64,

    /// A count of literals given to the reducer which did not reach the clause database, through removal or a discarded result.
    pub reducer_not_output_literals: u64,

    /// A count of backjumps forced by a result of the reducer.
    pub reducer_backtracks: u64,

    /// The sum of levels skipped by backjumps forced by the reducer.
    pub reducer_backtrack_levels: u64,

    /// The sum of levels from which backjumps were forced by the reducer.
    pub reducer_backtrack_level_before: u64,

    /// A count of backjumps to level zero forced by the reducer.
    pub reducer_backtracks_to_zero: u64,

    /// Counts kept by the reducer thread, as of the end of the last solve.
    pub reducer: ReducerTally,

    /// The time taken during the current (or last) solve.
    pub time: Duration,
}
