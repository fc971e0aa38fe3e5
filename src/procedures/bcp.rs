/*!
A context method to aid boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview
Propagates a literal which has become true.

This is done by examining clauses watching the negation of the literal (which has become false), and for each clause either:
- Moving the watch to some other literal which is not false.
- Assigning the other watched literal, if the clause is unit.
- Noting a conflict, if every literal of the clause is false.

Propagation happens in two steps, distinguished by clause length:
- First, binary clauses, where the watch holds the other literal of the clause and so no access to the clause database is required.
- Second, long clauses.

# Long clauses

The watch list of the false literal is taken from the watch database for the duration of propagation, and restored after.
This avoids a borrow of the watch database overlapping with updates to other watch lists.
The taken list is never updated during propagation, as the false literal is never a candidate for a watch.

Watches to clauses which are missing, inactive, or which no longer watch the false literal are dropped from the list.

```rust,ignore
match self.propagate() {
    Err(err::BCPError::Conflict(key)) => {
        let analysis = self.conflict_analysis(key)?;
        ...
    }
    Err(err::BCPError::CorruptWatch) => ...
    Ok(()) => {
        ...
    }
}
```
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::BCPError,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Propagates every literal on the trail which has not been propagated.
    pub fn propagate(&mut self) -> Result<(), BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.counters.propagations += 1;
            self.bcp(literal)?;
        }
        Ok(())
    }

    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), BCPError> {
        let false_literal = literal.negate();

        // Binary clause block.
        let binary_count = self.watches.binary_watchers(false_literal).len();
        for index in 0..binary_count {
            let watch = self.watches.binary_watchers(false_literal)[index];

            match self.atom_db.literal_value(watch.literal) {
                Some(true) => {}

                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {} and {literal} is contradiction.", watch.key);
                    return Err(BCPError::Conflict(watch.key));
                }

                None => self.assign(watch.literal, Some(watch.key)),
            }
        }

        // Long clause block.
        let mut watchers = self.watches.take_long(false_literal);
        let mut kept = 0;
        let mut index = 0;
        let mut result = Ok(());

        'long_loop: while index < watchers.len() {
            let watch = watchers[index];
            index += 1;

            let db_clause = match self.clause_db.get_mut(watch.key) {
                Ok(db_clause) if db_clause.is_active() => db_clause,
                _ => continue 'long_loop,
            };

            let literals = db_clause.literals_mut();
            if literals.len() < 2 {
                result = Err(BCPError::CorruptWatch);
                break 'long_loop;
            }

            if literals[0] == false_literal {
                literals.swap(0, 1);
            }
            if literals[1] != false_literal {
                // A stale watch.
                continue 'long_loop;
            }

            let first = literals[0];
            if self.atom_db.literal_value(first) == Some(true) {
                watchers[kept] = watch;
                kept += 1;
                continue 'long_loop;
            }

            for candidate in 2..literals.len() {
                if self.atom_db.literal_value(literals[candidate]) != Some(false) {
                    literals.swap(1, candidate);
                    self.watches.watch_long(literals[1], watch.key);
                    continue 'long_loop;
                }
            }

            watchers[kept] = watch;
            kept += 1;

            match self.atom_db.literal_value(first) {
                None => self.assign(first, Some(watch.key)),

                _ => {
                    log::trace!(target: targets::PROPAGATION, "Conflict on {} from {literal}.", watch.key);
                    while index < watchers.len() {
                        watchers[kept] = watchers[index];
                        kept += 1;
                        index += 1;
                    }
                    result = Err(BCPError::Conflict(watch.key));
                }
            }
        }

        watchers.truncate(kept);
        self.watches.restore_long(false_literal, watchers);
        result
    }
}
