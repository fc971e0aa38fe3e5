/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) [valuation](Valuation), and the previous value of each atom (its saved phase).
- The level at which each atom was valued, and the reason for the value, if the value was not a decision.
- An [IndexHeap] recording the activity of atoms, where any atom without a value is 'active' on the heap.
- Whether an atom has been frozen by a user of the [backend](crate::backend).

Atom 0 is valued true on creation of the database, at level zero, and is never part of a clause.
In particular, atom 0 is never active on the heap, and so never the subject of a decision.
*/

#[doc(hidden)]
pub mod activity;

use crate::{
    config::{dbs::AtomDBConfig, Activity, Config},
    db::{ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX, TOP_ATOM},
        literal::{CLiteral, Literal},
        valuation::{vValuation, Valuation},
    },
    types::err::AtomDBError,
};

/// The atom database.
pub struct AtomDB {
    /// A current (often partial) [valuation](Valuation).
    valuation: vValuation,

    /// The level at which each atom was valued, if valued.
    levels: Vec<LevelIndex>,

    /// The reason for the value of each atom, if valued through propagation.
    reasons: Vec<Option<ClauseKey>>,

    /// The previous value of each atom (or some initial value).
    previous_valuation: Vec<bool>,

    /// An [IndexHeap] recording the activity of atoms, where any atom without a value is 'active' on the heap.
    activity_heap: IndexHeap<Activity>,

    /// Atoms frozen by a user of the backend.
    frozen: Vec<bool>,

    /// A local configuration, typically derived from the configuration of a context.
    pub config: AtomDBConfig,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        let mut db = AtomDB {
            valuation: vec![Some(true)],
            levels: vec![0],
            reasons: vec![None],
            previous_valuation: vec![true],
            activity_heap: IndexHeap::default(),
            frozen: vec![false],
            config: config.atom_db.clone(),
        };
        db.activity_heap.add(TOP_ATOM as usize, 0.0);
        db
    }

    /// A count of atoms in the [AtomDB], including the top atom.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation.
    pub fn valuation(&self) -> &vValuation {
        &self.valuation
    }

    /// A fresh atom, initially unvalued and active on the heap.
    ///
    /// On Ok the atom is part of the language of the context.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, AtomDBError> {
        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => return Err(AtomDBError::AtomsExhausted),
        };

        self.valuation.push(None);
        self.levels.push(0);
        self.reasons.push(None);
        self.previous_valuation.push(previous_value);
        self.frozen.push(false);

        self.activity_heap.add(atom as usize, 0.0);
        self.activity_heap.activate(atom as usize);

        Ok(atom)
    }

    /// The value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// The value of `literal` on the current valuation, if the atom of the literal has a value.
    pub fn literal_value(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// The level at which `atom` was valued.
    ///
    /// The level of an atom without a value is not meaningful.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.levels.get(atom as usize).copied().unwrap_or(0)
    }

    /// The reason for the value of `atom`, if the value was not a decision.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons.get(atom as usize).copied().flatten()
    }

    /// Revises the reason for the value of `atom`, e.g. when the reason is moved in the clause database.
    pub fn set_reason(&mut self, atom: Atom, reason: Option<ClauseKey>) {
        if let Some(stored) = self.reasons.get_mut(atom as usize) {
            *stored = reason
        }
    }

    /// The previous value of `atom`.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation
            .get(atom as usize)
            .copied()
            .unwrap_or(true)
    }

    /// Values the atom of `literal` to match the polarity of `literal`, at `level` for `reason`.
    ///
    /// Returns the existing value if the atom already has a value, and in this case nothing is revised.
    pub fn set_value(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        reason: Option<ClauseKey>,
    ) -> Result<(), bool> {
        let atom = literal.atom() as usize;
        match self.valuation[atom] {
            Some(value) => Err(value),
            None => {
                log::trace!(target: targets::VALUATION, "{literal} at {level}");
                self.valuation[atom] = Some(literal.polarity());
                self.levels[atom] = level;
                self.reasons[atom] = reason;
                Ok(())
            }
        }
    }

    /// Clears the value of `atom`, saving the value as the previous value and activating the atom on the heap.
    pub fn drop_value(&mut self, atom: Atom) {
        let index = atom as usize;
        if let Some(value) = self.valuation[index].take() {
            self.previous_valuation[index] = value;
        }
        self.reasons[index] = None;
        self.activity_heap.activate(index);
    }

    /// Notes `atom` as frozen.
    pub fn freeze(&mut self, atom: Atom) {
        if let Some(frozen) = self.frozen.get_mut(atom as usize) {
            *frozen = true
        }
    }

    /// Notes `atom` as not frozen.
    pub fn thaw(&mut self, atom: Atom) {
        if let Some(frozen) = self.frozen.get_mut(atom as usize) {
            *frozen = false
        }
    }

    /// Whether `atom` is frozen.
    pub fn is_frozen(&self, atom: Atom) -> bool {
        self.frozen.get(atom as usize).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_atom_is_true() {
        let db = AtomDB::new(&Config::default());
        assert_eq!(db.count(), 1);
        assert_eq!(db.value_of(TOP_ATOM), Some(true));
        assert_eq!(db.level_of(TOP_ATOM), 0);
    }

    #[test]
    fn drop_saves_phase() {
        let mut db = AtomDB::new(&Config::default());
        let atom = db.fresh_atom(true).expect("fresh atom");
        assert_eq!(db.heap_pop_most_active(), Some(atom));

        assert!(db.set_value(CLiteral::new(atom, false), 3, None).is_ok());
        assert_eq!(db.set_value(CLiteral::new(atom, true), 3, None), Err(false));
        assert_eq!(db.literal_value(CLiteral::new(atom, false)), Some(true));

        db.drop_value(atom);
        assert_eq!(db.value_of(atom), None);
        assert!(!db.previous_value_of(atom));
        assert_eq!(db.heap_pop_most_active(), Some(atom));
    }
}
