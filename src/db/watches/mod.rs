/*!
Watch lists, for each literal.

Every clause of two or more literals is watched on the literals at positions 0 and 1 of the clause.
Watches are indexed by the watched literal, and the clauses watched on a literal are examined when the literal becomes false.

- For a binary clause, the watch records the *other* literal of the clause, so propagation needs no access to the clause database.
- For a long clause, the watch records only the key of the clause.

Watches of long clauses are removed lazily.
A watch is dropped during [BCP](crate::procedures::bcp) when the clause is missing from the database, is inactive, or no longer has the literal at position 0 or 1.
So, revising the literals of a clause, or removing a clause, requires no search through watch lists.
*/

use crate::{
    db::ClauseKey,
    structures::literal::{CLiteral, Literal},
};

/// A watch on a binary clause, recording the other literal of the clause.
#[derive(Clone, Copy, Debug)]
pub struct BinaryWatch {
    pub literal: CLiteral,
    pub key: ClauseKey,
}

/// A watch on a long clause.
#[derive(Clone, Copy, Debug)]
pub struct LongWatch {
    pub key: ClauseKey,
}

#[derive(Default)]
pub struct Watches {
    binary: Vec<Vec<BinaryWatch>>,
    long: Vec<Vec<LongWatch>>,
}

impl Watches {
    fn ensure(&mut self, literal: CLiteral) -> usize {
        let index = literal.index();
        if self.binary.len() <= index {
            // Both literals of an atom are supported together.
            let required = (index | 1) + 1;
            self.binary.resize_with(required, Vec::default);
            self.long.resize_with(required, Vec::default);
        }
        index
    }

    /// Watches the binary clause `key` on `literal`, with `other` the other literal of the clause.
    pub fn watch_binary(&mut self, literal: CLiteral, other: CLiteral, key: ClauseKey) {
        let index = self.ensure(literal);
        self.binary[index].push(BinaryWatch {
            literal: other,
            key,
        });
    }

    /// Watches the long clause `key` on `literal`.
    pub fn watch_long(&mut self, literal: CLiteral, key: ClauseKey) {
        let index = self.ensure(literal);
        self.long[index].push(LongWatch { key });
    }

    /// The binary clauses watched on `literal`.
    pub fn binary_watchers(&self, literal: CLiteral) -> &[BinaryWatch] {
        match self.binary.get(literal.index()) {
            Some(watches) => watches,
            None => &[],
        }
    }

    /// Takes the long clauses watched on `literal`, leaving an empty list until [restored](Watches::restore_long).
    pub fn take_long(&mut self, literal: CLiteral) -> Vec<LongWatch> {
        match self.long.get_mut(literal.index()) {
            Some(watches) => std::mem::take(watches),
            None => Vec::default(),
        }
    }

    /// Restores a list of long watches taken from `literal`.
    ///
    /// Any watches added to `literal` since the list was taken are kept.
    pub fn restore_long(&mut self, literal: CLiteral, mut watches: Vec<LongWatch>) {
        let index = self.ensure(literal);
        watches.append(&mut self.long[index]);
        self.long[index] = watches;
    }

    /// A count of long watches on `literal`, including any which are stale.
    pub fn long_count(&self, literal: CLiteral) -> usize {
        self.long.get(literal.index()).map_or(0, |watches| watches.len())
    }
}
