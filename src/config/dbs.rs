//! Configuration of databases, typically derived from the configuration of a context.

use crate::context::ContextState;

use super::{Activity, ConfigOption, LBD};

/// Configuration for the atom database.
#[derive(Clone)]
pub struct AtomDBConfig {
    /// The initial bump given to the activity of an atom, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay applied to atom activity on each conflict.
    pub decay: ConfigOption<Activity>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN_POSITIVE,
                max: (2.0 as Activity).powi(512),
                max_state: ContextState::Configuration,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "atom_decay",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.95,
            },
        }
    }
}

/// Configuration for the clause database.
#[derive(Clone)]
pub struct ClauseDBConfig {
    /// The initial bump given to the activity of a clause, dynamically adjusted.
    pub bump: ConfigOption<Activity>,

    /// The decay applied to clause activity on each conflict.
    pub decay: ConfigOption<Activity>,

    /// Learnt clauses with lbd within the bound (lbd ≤ bound) are not removed from the clause database.
    pub lbd_bound: ConfigOption<LBD>,

    /// The number of conflicts before the first reduction of the clause database.
    pub reduction_first: ConfigOption<u64>,

    /// The growth of the interval between reductions, per reduction.
    pub reduction_increment: ConfigOption<u64>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN_POSITIVE,
                max: (2.0 as Activity).powi(512),
                max_state: ContextState::Configuration,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.999,
            },

            lbd_bound: ConfigOption {
                name: "lbd_bound",
                min: LBD::MIN,
                max: LBD::MAX,
                max_state: ContextState::Input,
                value: 2,
            },

            reduction_first: ConfigOption {
                name: "reduction_first",
                min: 1,
                max: u32::MAX as u64,
                max_state: ContextState::Input,
                value: 2000,
            },

            reduction_increment: ConfigOption {
                name: "reduction_increment",
                min: 0,
                max: u32::MAX as u64,
                max_state: ContextState::Input,
                value: 300,
            },
        }
    }
}
