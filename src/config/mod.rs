/*!
Configuration of a context.

All configuration for a context is contained within the [Config] structure stored on the context.
Some structures (the clause database, the reducer thread, etc.) clone the parts of the configuration they rely on when created.

Each option is a [ConfigOption], which records the range of permitted values and the last [state](crate::context::ContextState) of a context in which the option may be revised.

```rust
# use otter_red::config::Config;
# use otter_red::context::ContextState;
let mut config = Config::default();

assert!(config.restarts.glucose_k.set(0.7).is_ok());
assert!(config.restarts.glucose_k.set(1.5).is_err());

// Reducer options may only be revised before input is given to a context.
assert!(config.reducer.workset_capacity.set_in_state(64, &ContextState::Configuration).is_ok());
assert!(config.reducer.workset_capacity.set_in_state(64, &ContextState::Input).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::{AtomDBConfig, ClauseDBConfig};

pub mod restarts;
use restarts::RestartConfig;

pub mod reducer;
use reducer::ReducerConfig;

use crate::context::ContextState;

/// Representation of the activity of atoms and clauses.
pub type Activity = f64;

/// Literal block distance, a.k.a 'glue'.
///
/// See [On the Glucose SAT Solver](https://dx.doi.org/10.1142/S0218213018400018) for an overview of LBD.
pub type LBD = u8;

/// Representation for the probability of choosing `true`
pub type PolarityLean = f64;

/// Representation for the probability of making a random decision
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// Configuration of restarts.
    pub restarts: RestartConfig,

    /// Configuration of the reducer thread and the workset.
    pub reducer: ReducerConfig,

    /// How much is said about a solve: 0 is silent, 1 reports progress, 2 is verbose.
    pub verbosity: ConfigOption<u8>,

    /// The number of conflicts between progress reports.
    pub verbosity_interval: ConfigOption<u32>,

    /// The probability of making a random decision rather than taking the most active atom.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// The probability of assigning positive polarity to an atom when freely choosing an atom without a saved phase.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// Default to the last set value of an atom when choosing a value for the atom.
    pub phase_saving: ConfigOption<bool>,

    /// The seed given to the source of randomness.
    pub random_seed: ConfigOption<u64>,

    /// The time limit for a solve, if any.
    pub time_limit: ConfigOption<Option<std::time::Duration>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),
            restarts: RestartConfig::default(),
            reducer: ReducerConfig::default(),

            verbosity: ConfigOption {
                name: "verbosity",
                min: 0,
                max: 2,
                max_state: ContextState::Solving,
                value: 1,
            },

            verbosity_interval: ConfigOption {
                name: "verbosity_interval",
                min: 1,
                max: i32::MAX as u32,
                max_state: ContextState::Solving,
                value: 10_000,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Input,
                value: 0.0,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Input,
                value: 0.0,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                max_state: ContextState::Input,
                value: true,
            },

            random_seed: ConfigOption {
                name: "random_seed",
                min: u64::MIN,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: None,
                max: Some(std::time::Duration::MAX),
                max_state: ContextState::Input,
                value: None,
            },
        }
    }
}
