//! Valuations, as a (partial) map from atoms to boolean values.
//!
//! The canonical valuation is a vector indexed by atoms, where `None` indicates an atom without a value.

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical implementation of a valuation.
#[allow(non_camel_case_types)]
pub type vValuation = Vec<Option<bool>>;

/// Methods on a valuation.
pub trait Valuation {
    /// The value of an atom, if the atom has a value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The value of a literal on the valuation, if the atom of the literal has a value.
    fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// An iterator through all atoms without a value, excluding the top atom.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_;

    /// A count of atoms, including the top atom.
    fn atom_count(&self) -> usize;
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(atom as usize).copied().flatten()
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
