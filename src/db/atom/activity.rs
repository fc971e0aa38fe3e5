use crate::{config::Activity, db::atom::AtomDB, structures::atom::Atom};

/// Activity above which the activity of every atom is rescaled.
const RESCALE_LIMIT: Activity = 1e100;

/// Methods for inspecting and mutating the activity of atoms, following the variable state independent decaying sum heuristic.
impl AtomDB {
    /// Pops the most active atom from the activity heap.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }

    /// Pops atoms from the activity heap until an atom without a value is found.
    pub fn most_active_unvalued(&mut self) -> Option<Atom> {
        while let Some(atom) = self.heap_pop_most_active() {
            if self.value_of(atom).is_none() {
                return Some(atom);
            }
        }
        None
    }

    /// The activity of an atom, regardless of whether it is on the activity heap.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        *self.activity_heap.value_at(atom as usize)
    }

    /// Bumps the activity of an atom, rescaling the activity of all atoms if the activity exceeds the limit.
    pub fn bump_activity(&mut self, atom: Atom) {
        let bump = self.config.bump.value;
        self.activity_heap
            .apply_to_index(atom as usize, |activity| activity + bump);

        if self.activity_of(atom) > RESCALE_LIMIT {
            self.rescale_activity();
        }
    }

    /// Increases the bump applied to atoms, so the activity of past bumps decays relative to future bumps.
    pub fn decay_activity(&mut self) {
        self.config.bump.value /= self.config.decay.value;
    }

    /// Rescales the activity of all atoms and the activity bump, preserving order.
    fn rescale_activity(&mut self) {
        let factor = 1.0 / RESCALE_LIMIT;
        self.activity_heap.apply_to_all(|activity| activity * factor);
        self.config.bump.value *= factor;
    }

    /// Replaces the activity of every atom with a small random activity, shuffling the order of decisions.
    pub fn randomize_activity(&mut self, rng: &mut impl rand::Rng) {
        for atom in 1..self.count() {
            self.activity_heap
                .revalue(atom, rng.gen::<Activity>() * 0.00001);
        }
        self.activity_heap.heapify();
        self.reactivate_unvalued();
    }

    /// Activates every unvalued atom on the heap, other than the top atom.
    pub fn reactivate_unvalued(&mut self) {
        for atom in 1..self.count() {
            if self.value_of(atom as Atom).is_none() {
                self.activity_heap.activate(atom);
            }
        }
    }
}
