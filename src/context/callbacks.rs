/*!
General callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the solver is non-mutable.
*/

use super::{Counters, GenericContext};

/// Polled on each iteration of a solve, and the solve stops with an unknown result if true is returned.
pub type CallbackTerminate = dyn FnMut() -> bool;

/// Called with the counters of a context every `verbosity_interval` conflicts, when the verbosity is positive.
pub type CallbackProgress = dyn FnMut(&Counters);

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    pub fn set_callback_progress(&mut self, callback: Box<CallbackProgress>) {
        self.callback_progress = Some(callback);
    }

    pub fn make_callback_progress(&mut self) {
        if let Some(callback) = &mut self.callback_progress {
            callback(&self.counters)
        }
    }
}
