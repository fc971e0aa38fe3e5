//! Configuration of the reducer thread.

use crate::context::ContextState;

use super::ConfigOption;

#[derive(Clone)]
pub struct ReducerConfig {
    /// Whether learnt clauses are handed to a reducer thread.
    pub enabled: ConfigOption<bool>,

    /// The number of clauses the workset holds before the oldest is dropped.
    pub workset_capacity: ConfigOption<usize>,

    /// Learnt clauses longer than this are not handed to the reducer.
    pub max_clause_size: ConfigOption<usize>,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        ReducerConfig {
            enabled: ConfigOption {
                name: "reducer",
                min: false,
                max: true,
                max_state: ContextState::Input,
                value: true,
            },

            workset_capacity: ConfigOption {
                name: "workset_capacity",
                min: 1,
                max: 1 << 20,
                max_state: ContextState::Configuration,
                value: 1_000,
            },

            max_clause_size: ConfigOption {
                name: "max_clause_size",
                min: 2,
                max: 1 << 16,
                max_state: ContextState::Input,
                value: 64,
            },
        }
    }
}
