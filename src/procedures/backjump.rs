//! Recovery from a conflict.
//!
//! A backjump is a 'jump' from some (higher) level to some previous (lower) level.
//!
//! All assignments made above the target level are undone, with the value of each atom saved as the phase of the atom, and each atom returned to the activity heap.
//!
//! Passing a target level at or above the current level is safe, as nothing happens.

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    pub fn backjump(&mut self, target: LevelIndex) {
        if target >= self.trail.level() {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        for literal in self.trail.clear_assignments_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
    }
}
