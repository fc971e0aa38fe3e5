//! Propagation at level zero, without a search.
//!
//! Useful to find an unsatisfiable formula before a solve, as done by the binary.

use crate::{
    context::{ContextState, GenericContext},
    types::err::{BCPError, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates every assignment at level zero.
    ///
    /// Returns false if the formula is found unsatisfiable, and true otherwise.
    pub fn simplify(&mut self) -> Result<bool, ErrorKind> {
        if let ContextState::Unsatisfiable(_) = self.state {
            return Ok(false);
        }
        self.backjump(0);

        match self.propagate() {
            Ok(()) => Ok(true),

            Err(BCPError::Conflict(key)) => {
                self.state = ContextState::Unsatisfiable(key);
                Ok(false)
            }

            Err(e) => Err(e.into()),
        }
    }

    /// Whether the formula has not been found unsatisfiable.
    pub fn okay(&self) -> bool {
        !matches!(self.state, ContextState::Unsatisfiable(_))
    }
}
