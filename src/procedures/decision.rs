/*!
Methods for choosing the value of an atom.

A decision is represented as a literal, whose atom is the atom chosen and whose polarity is the value chosen.

# Atom

With probability [random_decision_bias](crate::config::Config::random_decision_bias) an atom without a value is chosen at random.
Otherwise the most active atom without a value is taken from the activity heap of the [atom database](crate::db::atom).

# Polarity

With phase saving, an atom is valued as it was when last cleared from the trail.
Without phase saving, the value is chosen at random, biased by [polarity_lean](crate::config::Config::polarity_lean).
*/

use rand::seq::IteratorRandom;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A decision, as a literal, or None if every atom has a value.
    ///
    /// The decision is not made, only chosen.
    pub fn choose_decision(&mut self) -> Option<CLiteral> {
        let bias = self.config.random_decision_bias.value;

        let mut chosen = None;
        if bias > 0.0 && self.rng.gen_bool(bias) {
            chosen = self
                .atom_db
                .valuation()
                .unvalued_atoms()
                .choose(&mut self.rng);
            if chosen.is_some() {
                self.counters.random_decisions += 1;
            }
        }

        let atom = match chosen {
            Some(atom) => atom,
            None => self.atom_db.most_active_unvalued()?,
        };

        let polarity = match self.config.phase_saving.value {
            true => self.atom_db.previous_value_of(atom),
            false => self.rng.gen_bool(self.config.polarity_lean.value),
        };

        Some(CLiteral::new(atom, polarity))
    }

    /// Makes `decision` on a fresh level.
    pub fn make_decision(&mut self, decision: CLiteral) {
        self.counters.decisions += 1;
        self.trail.push_level();
        log::trace!(target: targets::VALUATION, "Decision {decision} at level {}", self.trail.level());
        self.assign(decision, None);
    }
}
