/*!
A database of clauses.

Clauses are stored by kind and source:
- Unit clauses are recorded as literals. These are also (and primarily) recorded as level zero assignments on the [trail](crate::db::trail).
- Binary clauses are stored in vectors, and are never removed.
- Long original clauses are stored in a vector, and are never removed.
- Long added clauses are stored in an arena ([DenseSlotMap]) indexed by [AdditionKey]s.

Long added clauses are the only clauses removed from the database, during a [reduction](ClauseDB::reduce).
Removal marks clauses as inactive and then compacts the arena, though keys to clauses which remain are unaffected and keys to removed clauses fail to resolve.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
*/

pub mod db_clause;

use db_clause::{dbClause, initialise_watches};
use slotmap::DenseSlotMap;

use crate::{
    config::{dbs::ClauseDBConfig, Activity, Config, LBD},
    db::{
        atom::AtomDB,
        keys::{AdditionKey, ClauseKey, FormulaIndex},
        watches::Watches,
    },
    misc::log::targets::{self},
    structures::{
        clause::{CClause, ClauseSource},
        literal::CLiteral,
    },
    types::err::ClauseDBError,
};

/// Activity above which the activity of every added clause is rescaled.
const RESCALE_LIMIT: Activity = 1e20;

/// A database of clauses.
pub struct ClauseDB {
    /// Clause database specific configuration parameters.
    pub config: ClauseDBConfig,

    original_unit: Vec<CLiteral>,

    addition_unit: Vec<CLiteral>,

    original_binary: Vec<CClause>,

    addition_binary: Vec<CClause>,

    /// Long original clauses.
    original: Vec<dbClause>,

    /// Long added clauses.
    addition: DenseSlotMap<AdditionKey, dbClause>,
}

impl ClauseDB {
    /// A new [ClauseDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            config: config.clause_db.clone(),

            original_unit: Vec::default(),
            addition_unit: Vec::default(),

            original_binary: Vec::default(),
            addition_binary: Vec::default(),

            original: Vec::default(),
            addition: DenseSlotMap::with_key(),
        }
    }

    /// Stores a clause, and watches the clause if the clause has two or more literals.
    ///
    /// The literals at positions 0 and 1 of the clause are watched, and it is the responsibility of the caller to order the clause appropriately.
    pub fn store(
        &mut self,
        clause: CClause,
        source: ClauseSource,
        lbd: LBD,
        watches: &mut Watches,
    ) -> Result<ClauseKey, ClauseDBError> {
        let original = source == ClauseSource::Original;

        let key = match clause.len() {
            0 => return Err(ClauseDBError::EmptyClause),

            1 => {
                let literal = clause[0];
                match original {
                    true => {
                        self.original_unit.push(literal);
                        ClauseKey::OriginalUnit(literal)
                    }
                    false => {
                        self.addition_unit.push(literal);
                        ClauseKey::AdditionUnit(literal)
                    }
                }
            }

            2 => {
                let binaries = match original {
                    true => &mut self.original_binary,
                    false => &mut self.addition_binary,
                };
                let index = FormulaIndex::try_from(binaries.len())
                    .map_err(|_| ClauseDBError::StorageExhausted)?;
                let key = match original {
                    true => ClauseKey::OriginalBinary(index),
                    false => ClauseKey::AdditionBinary(index),
                };
                watches.watch_binary(clause[0], clause[1], key);
                watches.watch_binary(clause[1], clause[0], key);
                binaries.push(clause);
                key
            }

            _ => {
                let watched = [clause[0], clause[1]];
                let key = match original {
                    true => {
                        let index = FormulaIndex::try_from(self.original.len())
                            .map_err(|_| ClauseDBError::StorageExhausted)?;
                        let key = ClauseKey::Original(index);
                        self.original.push(dbClause::new(key, clause, lbd, 0.0));
                        key
                    }
                    false => {
                        let activity = self.config.bump.value;
                        let addition_key = self.addition.insert_with_key(|addition_key| {
                            dbClause::new(ClauseKey::Addition(addition_key), clause, lbd, activity)
                        });
                        ClauseKey::Addition(addition_key)
                    }
                };
                watches.watch_long(watched[0], key);
                watches.watch_long(watched[1], key);
                key
            }
        };

        log::trace!(target: targets::CLAUSE_DB, "Stored {key} from {source:?}");
        Ok(key)
    }

    /// The long clause indexed by `key`.
    pub fn get(&self, key: ClauseKey) -> Result<&dbClause, ClauseDBError> {
        match key {
            ClauseKey::Original(index) => self
                .original
                .get(index as usize)
                .ok_or(ClauseDBError::InvalidKeyIndex),
            ClauseKey::Addition(addition_key) => {
                self.addition.get(addition_key).ok_or(ClauseDBError::Missing)
            }
            ClauseKey::OriginalUnit(_) | ClauseKey::AdditionUnit(_) => Err(ClauseDBError::UnitKey),
            ClauseKey::OriginalBinary(_) | ClauseKey::AdditionBinary(_) => {
                Err(ClauseDBError::InvalidKeyIndex)
            }
        }
    }

    /// The long clause indexed by `key`, mutably.
    pub fn get_mut(&mut self, key: ClauseKey) -> Result<&mut dbClause, ClauseDBError> {
        match key {
            ClauseKey::Original(index) => self
                .original
                .get_mut(index as usize)
                .ok_or(ClauseDBError::InvalidKeyIndex),
            ClauseKey::Addition(addition_key) => self
                .addition
                .get_mut(addition_key)
                .ok_or(ClauseDBError::Missing),
            ClauseKey::OriginalUnit(_) | ClauseKey::AdditionUnit(_) => Err(ClauseDBError::UnitKey),
            ClauseKey::OriginalBinary(_) | ClauseKey::AdditionBinary(_) => {
                Err(ClauseDBError::InvalidKeyIndex)
            }
        }
    }

    /// The literals of the (binary or long) clause indexed by `key`.
    pub fn literals_of(&self, key: ClauseKey) -> Result<&[CLiteral], ClauseDBError> {
        match key {
            ClauseKey::OriginalBinary(index) => self
                .original_binary
                .get(index as usize)
                .map(|clause| clause.as_slice())
                .ok_or(ClauseDBError::InvalidKeyIndex),
            ClauseKey::AdditionBinary(index) => self
                .addition_binary
                .get(index as usize)
                .map(|clause| clause.as_slice())
                .ok_or(ClauseDBError::InvalidKeyIndex),
            _ => self.get(key).map(|db_clause| db_clause.literals_slice()),
        }
    }

    /// Whether `key` indexes an active clause.
    pub fn is_active(&self, key: ClauseKey) -> bool {
        match key {
            ClauseKey::Original(_) | ClauseKey::Addition(_) => {
                self.get(key).is_ok_and(|db_clause| db_clause.is_active())
            }
            _ => true,
        }
    }

    /// Replaces the literals of the long added clause `key` with `literals`, and re-initialises the watches of the clause on the current valuation.
    ///
    /// Watches on literals no longer watched are left to be dropped lazily.
    pub fn replace_long(
        &mut self,
        key: ClauseKey,
        literals: CClause,
        atom_db: &AtomDB,
        watches: &mut Watches,
    ) -> Result<(), ClauseDBError> {
        if literals.len() < 3 {
            return Err(ClauseDBError::TransferBinary);
        }
        let db_clause = self.get_mut(key)?;
        let previous = db_clause.replace(literals, atom_db);
        for watched in [db_clause[0], db_clause[1]] {
            if !previous.contains(&watched) {
                watches.watch_long(watched, key);
            }
        }
        log::trace!(target: targets::CLAUSE_DB, "Replaced {db_clause}");
        Ok(())
    }

    /// Removes the long added clause `key` and stores `literals` as a binary clause in its place, returning the key to the binary clause.
    ///
    /// If `key` was the reason for some assignment, it is the responsibility of the caller to update the reason.
    pub fn transfer_to_binary(
        &mut self,
        key: ClauseKey,
        mut literals: CClause,
        atom_db: &AtomDB,
        watches: &mut Watches,
    ) -> Result<ClauseKey, ClauseDBError> {
        if literals.len() != 2 {
            return Err(ClauseDBError::TransferBinary);
        }
        let ClauseKey::Addition(addition_key) = key else {
            return Err(ClauseDBError::TransferBinary);
        };
        if self.addition.remove(addition_key).is_none() {
            return Err(ClauseDBError::Missing);
        }
        initialise_watches(&mut literals, atom_db);
        let binary_key = self.store(literals, ClauseSource::Reducer, 1, watches)?;
        log::trace!(target: targets::CLAUSE_DB, "Transferred {key} to {binary_key}");
        Ok(binary_key)
    }

    /// Bumps the activity of the added clause `key`, rescaling the activity of all added clauses if the activity exceeds the limit.
    pub fn bump_activity(&mut self, key: ClauseKey) {
        let ClauseKey::Addition(addition_key) = key else {
            return;
        };
        let bump = self.config.bump.value;
        let Some(db_clause) = self.addition.get_mut(addition_key) else {
            return;
        };
        db_clause.activity += bump;

        if db_clause.activity > RESCALE_LIMIT {
            let factor = 1.0 / RESCALE_LIMIT;
            for (_, db_clause) in self.addition.iter_mut() {
                db_clause.activity *= factor;
            }
            self.config.bump.value *= factor;
        }
    }

    /// Increases the bump applied to clauses, so the activity of past bumps decays relative to future bumps.
    pub fn decay_activity(&mut self) {
        self.config.bump.value /= self.config.decay.value;
    }

    /// Removes (roughly) half of the removable long added clauses, returning a count of clauses removed.
    ///
    /// A clause is removable if active, not locked, and the lbd of the clause is greater than the lbd bound.
    /// Removable clauses are ordered by lbd (highest first) and then activity (lowest first), and removed in order.
    pub fn reduce(&mut self, is_locked: impl Fn(&dbClause) -> bool) -> usize {
        let lbd_bound = self.config.lbd_bound.value;

        let mut candidates = self
            .addition
            .iter()
            .filter(|(_, db_clause)| {
                db_clause.is_active() && db_clause.lbd() > lbd_bound && !is_locked(db_clause)
            })
            .map(|(key, db_clause)| (key, db_clause.lbd(), db_clause.activity))
            .collect::<Vec<_>>();

        candidates.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.total_cmp(&b.2)));

        let removals = candidates.len() / 2;
        for (key, _, _) in candidates.into_iter().take(removals) {
            if let Some(db_clause) = self.addition.get_mut(key) {
                db_clause.deactivate();
            }
        }

        let before = self.addition.len();
        self.addition.retain(|_, db_clause| db_clause.is_active());
        let removed = before - self.addition.len();

        log::debug!(target: targets::REDUCTION, "Removed {removed} clauses, {} remain", self.addition.len());
        removed
    }

    /// Binary original clauses, in order of storage.
    pub fn original_binary(&self) -> &[CClause] {
        &self.original_binary
    }

    /// Binary added clauses, in order of storage.
    pub fn addition_binary(&self) -> &[CClause] {
        &self.addition_binary
    }

    /// Long added clauses.
    pub fn addition_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.addition.values()
    }

    /// A count of original clauses, of any size.
    pub fn original_count(&self) -> usize {
        self.original_unit.len() + self.original_binary.len() + self.original.len()
    }

    /// A count of added clauses, of any size.
    pub fn addition_count(&self) -> usize {
        self.addition_unit.len() + self.addition_binary.len() + self.addition.len()
    }

    /// A count of long added clauses.
    pub fn long_addition_count(&self) -> usize {
        self.addition.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_with(lbds: &[LBD]) -> (ClauseDB, Watches, Vec<ClauseKey>) {
        let mut clause_db = ClauseDB::new(&Config::default());
        let mut watches = Watches::default();
        let keys = lbds
            .iter()
            .map(|lbd| {
                clause_db
                    .store(vec![1, 2, 3], ClauseSource::Resolution, *lbd, &mut watches)
                    .expect("store")
            })
            .collect();
        (clause_db, watches, keys)
    }

    #[test]
    fn store_by_size() {
        let mut clause_db = ClauseDB::new(&Config::default());
        let mut watches = Watches::default();

        assert_eq!(
            clause_db.store(vec![], ClauseSource::Original, 0, &mut watches),
            Err(ClauseDBError::EmptyClause)
        );
        assert_eq!(
            clause_db.store(vec![-4], ClauseSource::Original, 0, &mut watches),
            Ok(ClauseKey::OriginalUnit(-4))
        );
        assert_eq!(
            clause_db.store(vec![1, 2], ClauseSource::Resolution, 1, &mut watches),
            Ok(ClauseKey::AdditionBinary(0))
        );
        assert_eq!(
            clause_db.store(vec![1, 2, 3], ClauseSource::Original, 0, &mut watches),
            Ok(ClauseKey::Original(0))
        );

        assert_eq!(clause_db.literals_of(ClauseKey::AdditionBinary(0)), Ok([1, 2].as_slice()));
        assert_eq!(
            clause_db.literals_of(ClauseKey::OriginalUnit(-4)),
            Err(ClauseDBError::UnitKey)
        );
        assert_eq!(clause_db.original_count(), 2);
        assert_eq!(clause_db.addition_count(), 1);
    }

    #[test]
    fn reduce_keeps_glue_and_locked() {
        let (mut clause_db, _watches, keys) = db_with(&[2, 5, 6, 7, 8]);
        let locked = keys[4];

        // Candidates are lbd 5, 6 and 7, as 8 is locked and 2 is within the bound.
        let removed = clause_db.reduce(|db_clause| db_clause.key() == locked);
        assert_eq!(removed, 1);

        assert!(clause_db.get(keys[0]).is_ok());
        assert!(clause_db.get(keys[1]).is_ok());
        assert!(clause_db.get(keys[2]).is_ok());
        assert_eq!(clause_db.get(keys[3]).err(), Some(ClauseDBError::Missing));
        assert!(clause_db.get(keys[4]).is_ok());
    }

    #[test]
    fn keys_survive_compaction() {
        let (mut clause_db, mut watches, keys) = db_with(&[9, 9, 9, 9]);
        clause_db.reduce(|_| false);
        assert_eq!(clause_db.long_addition_count(), 2);

        let fresh = clause_db
            .store(vec![4, 5, 6], ClauseSource::Resolution, 3, &mut watches)
            .expect("store");
        for key in keys {
            if let Ok(db_clause) = clause_db.get(key) {
                assert_eq!(db_clause.key(), key);
                assert_ne!(key, fresh);
            }
        }
    }
}
