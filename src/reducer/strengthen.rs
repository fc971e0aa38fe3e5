/*!
Strengthening a clause against a [snapshot](Knowledge) of facts.

Given a clause *C* a literal *l* of *C* is removed if the clause *C* less *l* is entailed by *C* together with the snapshot.
This is the case if:
- *l* is false at level zero.
- *l* implies some other literal *m* of the clause, through a chain of binary clauses.
  For, if *l* is true then *m* is true, and if *l* is false then some other literal of *C* is true.
- *l* implies its own negation, or some literal false at level zero, through a chain of binary clauses.
  For, in either case *l* is false.

Literals are tested in order, against the literals which remain, until no further literal is removed.
Each test is a bounded breadth first search through the implications of the snapshot.

```rust
# use otter_red::reducer::{knowledge::Knowledge, strengthen::strengthen, ReductionResult};
let mut knowledge = Knowledge::default();
// 1 → 2
knowledge.add_binary(-1, 2);

let result = strengthen(&[1, 2, 3], &knowledge);
assert_eq!(
    result,
    ReductionResult::Strengthened {
        literals: vec![2, 3],
        removed: vec![1]
    }
);
```

If the clause is satisfied at level zero the clause is left unchanged.
*/

use std::collections::{HashSet, VecDeque};

use crate::structures::{
    clause::CClause,
    literal::{CLiteral, Literal},
};

use super::{knowledge::Knowledge, ReductionResult};

/// The number of literals visited when testing whether a literal may be removed.
const SEARCH_LIMIT: usize = 512;

/// Strengthens `clause` against `knowledge`.
pub fn strengthen(clause: &[CLiteral], knowledge: &Knowledge) -> ReductionResult {
    if clause
        .iter()
        .any(|literal| knowledge.literal_value(*literal) == Some(true))
    {
        return ReductionResult::Unchanged;
    }

    let (mut removed, mut kept): (Vec<CLiteral>, CClause) = clause
        .iter()
        .partition(|literal| knowledge.literal_value(**literal) == Some(false));

    loop {
        let mut fixpoint = true;
        let mut position = 0;
        while position < kept.len() {
            let literal = kept[position];
            if removable(literal, &kept, knowledge) {
                kept.remove(position);
                removed.push(literal);
                fixpoint = false;
            } else {
                position += 1;
            }
        }
        if fixpoint {
            break;
        }
    }

    match kept.len() {
        0 => ReductionResult::Contradiction,
        _ if removed.is_empty() => ReductionResult::Unchanged,
        1 => ReductionResult::Unit(kept[0]),
        _ => ReductionResult::Strengthened {
            literals: kept,
            removed,
        },
    }
}

/// Whether `literal` may be removed from `clause`.
fn removable(literal: CLiteral, clause: &[CLiteral], knowledge: &Knowledge) -> bool {
    let negation = literal.negate();

    let mut visited = HashSet::from([literal]);
    let mut queue = VecDeque::from([literal]);

    while let Some(current) = queue.pop_front() {
        for &implied in knowledge.implied_by(current) {
            if implied == negation || knowledge.literal_value(implied) == Some(false) {
                return true;
            }
            if implied != literal && clause.contains(&implied) {
                return true;
            }
            if visited.len() >= SEARCH_LIMIT {
                return false;
            }
            if visited.insert(implied) {
                queue.push_back(implied);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfied_unchanged() {
        let mut knowledge = Knowledge::default();
        knowledge.add_unit(2);
        knowledge.add_unit(-3);

        assert_eq!(strengthen(&[1, 2, 3], &knowledge), ReductionResult::Unchanged);
    }

    #[test]
    fn level_zero_false_removed() {
        let mut knowledge = Knowledge::default();
        knowledge.add_unit(-3);

        assert_eq!(
            strengthen(&[1, 2, 3], &knowledge),
            ReductionResult::Strengthened {
                literals: vec![1, 2],
                removed: vec![3]
            }
        );
        assert_eq!(strengthen(&[1, 3], &knowledge), ReductionResult::Unit(1));
        assert_eq!(strengthen(&[3], &knowledge), ReductionResult::Contradiction);
    }

    #[test]
    fn chains_of_implications() {
        let mut knowledge = Knowledge::default();
        // 1 → 4 → 5 → 2
        knowledge.add_binary(-1, 4);
        knowledge.add_binary(-4, 5);
        knowledge.add_binary(-5, 2);

        assert_eq!(
            strengthen(&[1, 2, 3], &knowledge),
            ReductionResult::Strengthened {
                literals: vec![2, 3],
                removed: vec![1]
            }
        );
    }

    #[test]
    fn mutual_implication_keeps_one() {
        let mut knowledge = Knowledge::default();
        // 1 → 2 and 2 → 1
        knowledge.add_binary(-1, 2);
        knowledge.add_binary(-2, 1);

        assert_eq!(strengthen(&[1, 2], &knowledge), ReductionResult::Unit(2));
    }

    #[test]
    fn self_refuting_literal() {
        let mut knowledge = Knowledge::default();
        // 1 → 6 → -1, and 2 → -7 with 7 true.
        knowledge.add_binary(-1, 6);
        knowledge.add_binary(-6, -1);
        knowledge.add_binary(-2, -7);
        knowledge.add_unit(7);

        assert_eq!(strengthen(&[1, 2, 3], &knowledge), ReductionResult::Unit(3));
        assert_eq!(strengthen(&[1, 2], &knowledge), ReductionResult::Contradiction);
    }

    #[test]
    fn nothing_known() {
        let knowledge = Knowledge::default();
        assert_eq!(strengthen(&[1, -2, 3], &knowledge), ReductionResult::Unchanged);
    }
}
