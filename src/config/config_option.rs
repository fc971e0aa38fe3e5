use crate::{context::ContextState, types::err::ConfigError};

/// A configurable value, together with the range of values permitted and the last state in which the value may be revised.
#[derive(Clone)]
pub struct ConfigOption<T> {
    /// A name, used when reporting errors.
    pub name: &'static str,

    /// The minimum permitted value.
    pub min: T,

    /// The maximum permitted value.
    pub max: T,

    /// The last state of a context in which the option may be revised.
    pub max_state: ContextState,

    /// The current value.
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: PartialOrd> ConfigOption<T> {
    /// Sets the option to `value`, if `value` is within the permitted range.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        if value < self.min || self.max < value {
            return Err(ConfigError::OutOfRange { name: self.name });
        }
        self.value = value;
        Ok(())
    }

    /// As [set](ConfigOption::set), though the option is only revised if `state` does not follow the last state in which the option may be revised.
    pub fn set_in_state(&mut self, value: T, state: &ContextState) -> Result<(), ConfigError> {
        if self.max_state.precedes(state) {
            return Err(ConfigError::InvalidState { name: self.name });
        }
        self.set(value)
    }
}
