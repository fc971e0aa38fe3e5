//! A struct holding a long [clause](Clause) and associated metadata.
//!
//! # Watched literals
//!
//! The literals at positions 0 and 1 of a clause are watched.
//! When the watches of a clause are (re)initialised the two best watch candidates are moved to these positions, where candidates are ranked:
//! - Literals which are true.
//! - Literals without a value.
//! - Literals which are false, with those valued at a higher level preferred.
//!
//! So, if a clause has no true literal and a single literal without a value, the clause is unit with the literal at position 0.
//! And, if every literal is false, the literals at positions 0 and 1 are those valued at the highest levels.

use crate::{
    config::{Activity, LBD},
    db::{atom::AtomDB, keys::ClauseKey, LevelIndex},
    structures::{
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
};

/// A clause together with some metadata.
#[allow(non_camel_case_types)]
pub struct dbClause {
    /// A key for accessing the clause
    key: ClauseKey,

    /// The clause.
    clause: CClause,

    /// Whether the clause is active.
    active: bool,

    /// The lbd of the clause when stored, or since improved.
    lbd: LBD,

    /// The activity of the clause.
    pub activity: Activity,
}

/// The rank of `literal` as a watch candidate, where lower is better.
fn watch_rank(literal: CLiteral, atom_db: &AtomDB) -> (u8, LevelIndex) {
    match atom_db.literal_value(literal) {
        Some(true) => (0, 0),
        None => (1, 0),
        Some(false) => (2, LevelIndex::MAX - atom_db.level_of(literal.atom())),
    }
}

/// Moves the two best watch candidates of `literals` to positions 0 and 1, otherwise preserving order.
pub fn initialise_watches(literals: &mut [CLiteral], atom_db: &AtomDB) {
    for position in 0..literals.len().min(2) {
        let best = (position..literals.len())
            .min_by_key(|&index| watch_rank(literals[index], atom_db))
            .unwrap_or(position);
        literals.swap(position, best);
    }
}

impl dbClause {
    /// Bundles a [ClauseKey] and clause into a [dbClause].
    ///
    /// Note: This does not store the [dbClause] in the [clause database](crate::db::clause::ClauseDB), and watches are not initialised.
    pub fn new(key: ClauseKey, clause: CClause, lbd: LBD, activity: Activity) -> Self {
        dbClause {
            key,
            clause,
            active: true,
            lbd,
            activity,
        }
    }

    pub fn key(&self) -> ClauseKey {
        self.key
    }

    pub fn lbd(&self) -> LBD {
        self.lbd
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false
    }

    /// The literals of the clause, in the order stored.
    pub fn literals_slice(&self) -> &[CLiteral] {
        &self.clause
    }

    /// Mutable access to the literals of the clause, e.g. to update the watched literals.
    pub fn literals_mut(&mut self) -> &mut [CLiteral] {
        &mut self.clause
    }

    /// Replaces the literals of the clause, and initialises watches on the valuation of `atom_db`.
    ///
    /// Returns the previously watched literals.
    pub fn replace(&mut self, literals: CClause, atom_db: &AtomDB) -> [CLiteral; 2] {
        let previous = [self.clause[0], self.clause[1]];
        self.clause = literals;
        initialise_watches(&mut self.clause, atom_db);
        self.lbd = self.lbd.min(self.clause.len().min(LBD::MAX as usize) as LBD);
        previous
    }
}

impl std::ops::Deref for dbClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

impl std::fmt::Display for dbClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.clause.as_dimacs(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn watch_order() {
        let mut atom_db = AtomDB::new(&Config::default());
        for _ in 0..5 {
            let _ = atom_db.fresh_atom(true);
        }
        let _ = atom_db.set_value(-1, 1, None);
        let _ = atom_db.set_value(-2, 3, None);
        let _ = atom_db.set_value(-3, 2, None);

        // Every literal false, so the highest levels are watched.
        let mut clause: CClause = vec![1, 3, 2];
        initialise_watches(&mut clause, &atom_db);
        assert_eq!(&clause[..2], &[2, 3]);

        // A literal without a value is preferred to false literals.
        let mut clause: CClause = vec![1, 2, 4, 3];
        initialise_watches(&mut clause, &atom_db);
        assert_eq!(&clause[..2], &[4, 2]);

        // And a true literal is preferred to all.
        let mut clause: CClause = vec![2, 4, -1];
        initialise_watches(&mut clause, &atom_db);
        assert_eq!(clause[0], -1);
        assert_eq!(clause[1], 4);
    }
}
