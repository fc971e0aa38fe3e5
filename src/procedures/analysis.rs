/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation and returns an asserting clause, together with the level to backjump to and the lbd of the clause.

The clause is derived by resolution on the trail, from the most recent assignment backwards, stopping at the first unique implication point of the current level.
That is, the first point at which exactly one literal of the resolvent was assigned at the current level.

The resolvent is then minimized by removing any literal whose reason contains only (the negation of) literals already in the resolvent, or literals false at level zero.

After analysis:
- The asserted literal is at position 0 of the clause.
- If the clause has two or more literals, a literal of the highest remaining level is at position 1.

So, after a backjump to the returned level, the clause is ready to be stored with the literals at positions 0 and 1 watched.

Each atom met during resolution has its activity bumped, as does each added clause used.

# Example

```rust,ignore
let analysis = self.conflict_analysis(key)?;
self.backjump(analysis.backjump_level);
```
*/

use crate::{
    config::LBD,
    context::GenericContext,
    db::{ClauseKey, LevelIndex},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{AnalysisError, ErrorKind},
};

/// An asserting clause, with the level at which the clause asserts.
#[derive(Debug)]
pub struct Analysis {
    pub clause: CClause,
    pub backjump_level: LevelIndex,
    pub lbd: LBD,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::analysis](crate::procedures::analysis).
    pub fn conflict_analysis(&mut self, key: ClauseKey) -> Result<Analysis, ErrorKind> {
        let current_level = self.trail.level();
        log::trace!(target: targets::ANALYSIS, "Analysis of {key} at level {current_level}");

        let atom_count = self.atom_db.count();
        if self.seen.len() < atom_count {
            self.seen.resize(atom_count, false);
        }

        let mut clause = CClause::new();
        clause
            .try_reserve(self.clause_db.literals_of(key)?.len())
            .map_err(|_| ErrorKind::OutOfMemory)?;
        // Position 0 is reserved for the asserted literal.
        clause.push(0);

        let mut path_count = 0;
        let mut trail_index = self.trail.literals.len();
        let mut reason = key;
        let mut resolved: Option<CLiteral> = None;

        loop {
            self.clause_db.bump_activity(reason);

            for &literal in self.clause_db.literals_of(reason)? {
                if Some(literal) == resolved {
                    continue;
                }
                let atom = literal.atom();
                let level = self.atom_db.level_of(atom);
                if self.seen[atom as usize] || level == 0 {
                    continue;
                }

                self.seen[atom as usize] = true;
                self.atom_db.bump_activity(atom);
                if level == current_level {
                    path_count += 1;
                } else {
                    clause.push(literal);
                }
            }

            let pivot = loop {
                if trail_index == 0 {
                    return Err(AnalysisError::NoAssertion.into());
                }
                trail_index -= 1;
                let literal = self.trail.literals[trail_index];
                if self.seen[literal.atom() as usize] {
                    break literal;
                }
            };

            self.seen[pivot.atom() as usize] = false;
            resolved = Some(pivot);
            path_count -= 1;

            if path_count == 0 {
                break;
            }

            reason = self
                .atom_db
                .reason_of(pivot.atom())
                .ok_or(AnalysisError::NoAssertion)?;
        }

        match resolved {
            Some(pivot) => clause[0] = pivot.negate(),
            None => return Err(AnalysisError::EmptyResolution.into()),
        }

        self.counters.max_literals += clause.len() as u64;
        let marked = clause[1..].iter().map(|l| l.atom()).collect::<Vec<Atom>>();

        let mut kept = 1;
        for index in 1..clause.len() {
            let literal = clause[index];
            if !self.is_redundant(literal) {
                clause[kept] = literal;
                kept += 1;
            }
        }
        clause.truncate(kept);
        self.counters.tot_literals += clause.len() as u64;

        for atom in marked {
            self.seen[atom as usize] = false;
        }

        let backjump_level = match clause.len() {
            1 => 0,
            _ => {
                let mut highest = 1;
                for index in 2..clause.len() {
                    if self.atom_db.level_of(clause[index].atom())
                        > self.atom_db.level_of(clause[highest].atom())
                    {
                        highest = index;
                    }
                }
                clause.swap(1, highest);
                self.atom_db.level_of(clause[1].atom())
            }
        };

        let lbd = clause.lbd(&self.atom_db);

        log::trace!(target: targets::ANALYSIS, "Learnt {} asserting at {backjump_level}", clause.as_dimacs(false));
        Ok(Analysis {
            clause,
            backjump_level,
            lbd,
        })
    }

    /// Whether the false `literal` follows from the literals marked as seen, together with facts at level zero.
    fn is_redundant(&self, literal: CLiteral) -> bool {
        let atom = literal.atom();
        let Some(reason) = self.atom_db.reason_of(atom) else {
            return false;
        };
        let Ok(reason_literals) = self.clause_db.literals_of(reason) else {
            return false;
        };
        reason_literals.iter().all(|other| {
            let other_atom = other.atom();
            other_atom == atom
                || self.seen[other_atom as usize]
                || self.atom_db.level_of(other_atom) == 0
        })
    }
}
