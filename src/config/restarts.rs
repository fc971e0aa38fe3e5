//! Configuration of restarts.

use crate::{context::ContextState, generic::luby::LubyRepresentation};

use super::ConfigOption;

/// The policy used to decide when to restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RestartPolicy {
    /// Never restart.
    Never,

    /// Restart after `u` times the next element of the luby sequence conflicts.
    Luby,

    /// Restart when the recent lbd of learnt clauses is high, compared to the average, unless blocked by a long trail.
    Glucose,
}

impl RestartPolicy {
    pub const MIN: RestartPolicy = RestartPolicy::Never;
    pub const MAX: RestartPolicy = RestartPolicy::Glucose;
}

impl std::fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Never => write!(f, "never"),
            Self::Luby => write!(f, "luby"),
            Self::Glucose => write!(f, "glucose"),
        }
    }
}

#[derive(Clone)]
pub struct RestartConfig {
    pub policy: ConfigOption<RestartPolicy>,

    /// A restart happens when the recent average lbd, scaled by K, exceeds the global average.
    pub glucose_k: ConfigOption<f64>,

    /// A restart is blocked when the trail is R times longer than the recent average.
    pub glucose_r: ConfigOption<f64>,

    /// The number of recent lbd values averaged.
    pub lbd_queue_size: ConfigOption<usize>,

    /// The number of recent trail lengths averaged.
    pub trail_queue_size: ConfigOption<usize>,

    /// No restart is blocked before this many conflicts.
    pub blocking_threshold: ConfigOption<u64>,

    /// The `u` value to multiply the luby sequence by.
    pub luby_u: ConfigOption<LubyRepresentation>,
}

impl Default for RestartConfig {
    fn default() -> Self {
        RestartConfig {
            policy: ConfigOption {
                name: "restart_policy",
                min: RestartPolicy::MIN,
                max: RestartPolicy::MAX,
                max_state: ContextState::Input,
                value: RestartPolicy::Glucose,
            },

            glucose_k: ConfigOption {
                name: "glucose_k",
                min: f64::MIN_POSITIVE,
                max: 1.0,
                max_state: ContextState::Input,
                value: 0.8,
            },

            glucose_r: ConfigOption {
                name: "glucose_r",
                min: 1.0,
                max: 5.0,
                max_state: ContextState::Input,
                value: 1.4,
            },

            lbd_queue_size: ConfigOption {
                name: "lbd_queue_size",
                min: 10,
                max: 1_000,
                max_state: ContextState::Configuration,
                value: 50,
            },

            trail_queue_size: ConfigOption {
                name: "trail_queue_size",
                min: 10,
                max: 10_000,
                max_state: ContextState::Configuration,
                value: 5_000,
            },

            blocking_threshold: ConfigOption {
                name: "blocking_threshold",
                min: 0,
                max: u64::MAX,
                max_state: ContextState::Input,
                value: 10_000,
            },

            luby_u: ConfigOption {
                name: "luby_u",
                min: 1,
                max: LubyRepresentation::MAX,
                max_state: ContextState::Input,
                value: 128,
            },
        }
    }
}
