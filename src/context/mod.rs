/*!
The context to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over the source of randomness.
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use otter_red::context::Context;
# use otter_red::config::Config;
# use otter_red::reports::Report;
# use otter_red::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);

assert!(the_context.add_clause(not_p).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

assert_eq!(the_context.value_of(p), Some(false));
assert_eq!(the_context.value_of(q), Some(true));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

use crate::db::ClauseKey;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// The consistency of the database is unknown.
    Solving,

    /// The database is known to be consistent, with a complete valuation.
    Satisfiable,

    /// The database is known to be inconsistent, with an unsatisfiable clause identified.
    Unsatisfiable(ClauseKey),

    /// The database is inconsistent with the assumptions of the last solve.
    AssumptionsFailed,
}

impl ContextState {
    fn rank(&self) -> u8 {
        match self {
            Self::Configuration => 0,
            Self::Input => 1,
            Self::Solving
            | Self::Satisfiable
            | Self::Unsatisfiable(_)
            | Self::AssumptionsFailed => 2,
        }
    }

    /// Whether `self` comes before `other` in the life of a context.
    pub fn precedes(&self, other: &ContextState) -> bool {
        self.rank() < other.rank()
    }
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable(_) => write!(f, "Unsatisfiable"),
            Self::AssumptionsFailed => write!(f, "AssumptionsFailed"),
        }
    }
}
