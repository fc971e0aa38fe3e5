//! A snapshot of facts which hold regardless of any decision.
//!
//! The facts are:
//! - Literals valued at level zero, recorded by atom.
//! - Binary clauses, recorded as implications indexed by literal.
//!   A binary clause *a ∨ b* is recorded as the implications *¬a → b* and *¬b → a*.
//!
//! Each snapshot has a generation, incremented whenever facts are added, so the reducer thread may skip copying a snapshot it already holds.
//!
//! ```rust
//! # use otter_red::reducer::knowledge::Knowledge;
//! let mut knowledge = Knowledge::default();
//! knowledge.add_binary(1, -2);
//! knowledge.add_unit(3);
//! knowledge.advance_generation();
//!
//! assert_eq!(knowledge.implied_by(-1), &[-2]);
//! assert_eq!(knowledge.implied_by(2), &[1]);
//! assert_eq!(knowledge.literal_value(-3), Some(false));
//! assert_eq!(knowledge.generation(), 1);
//! ```

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

#[derive(Clone, Default)]
pub struct Knowledge {
    generation: u64,
    units: Vec<Option<bool>>,
    implications: Vec<Vec<CLiteral>>,
}

impl Knowledge {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn advance_generation(&mut self) {
        self.generation += 1;
    }

    /// Records `literal` as true.
    pub fn add_unit(&mut self, literal: CLiteral) {
        let atom = literal.atom() as usize;
        if self.units.len() <= atom {
            self.units.resize(atom + 1, None);
        }
        self.units[atom] = Some(literal.polarity());
    }

    /// Records the binary clause `a ∨ b`.
    pub fn add_binary(&mut self, a: CLiteral, b: CLiteral) {
        let required = (a.index().max(b.index()) | 1) + 1;
        if self.implications.len() < required {
            self.implications.resize_with(required, Vec::default);
        }
        self.implications[a.negate().index()].push(b);
        self.implications[b.negate().index()].push(a);
    }

    /// The value of `atom`, if the atom is valued at level zero.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.units.get(atom as usize).copied().flatten()
    }

    /// The value of `literal`, if the atom of the literal is valued at level zero.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The literals directly implied by `literal` through some binary clause.
    pub fn implied_by(&self, literal: CLiteral) -> &[CLiteral] {
        match self.implications.get(literal.index()) {
            Some(implied) => implied,
            None => &[],
        }
    }
}
