/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the [targets] below.
These are intended to provide useful information when extending the library or tracking down an issue.

No log implementation is provided by the library.
The binary installs [env_logger](https://docs.rs/env_logger) when built with the `log` feature, and so logs may be filtered by target.
For example, `RUST_LOG=reducer=trace,coordinator=info` shows everything the reducer thread does and each result applied to the search.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [reduction](crate::procedures::reduction) of the clause database
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [restarts](crate::procedures::restarts)
    pub const RESTART: &str = "restart";

    /// Logs related to the [workset](crate::reducer::workset)
    pub const WORKSET: &str = "workset";

    /// Logs made by the [reducer](crate::reducer) thread
    pub const REDUCER: &str = "reducer";

    /// Logs related to [applying](crate::procedures::apply_reductions) the output of the reducer
    pub const COORDINATOR: &str = "coordinator";

    /// Logs related to the [solve](crate::procedures::solve) loop
    pub const SOLVE: &str = "solve";
}
