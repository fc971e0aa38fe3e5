/*!
The trail: every literal assigned, in order of assignment, partitioned into levels.

Level zero holds the literals which are true regardless of any decision, and is never cleared.
Each later level begins with a decision (or an assumption) followed by the consequences of that decision.

Each level is also given a *stamp* when opened, unique over the lifetime of the trail.
The pair of a level and its stamp is an [Epoch], and an epoch remains [live](Trail::is_live) only for as long as the level it records has not been cleared.
Epochs are used to tag clauses handed to the [reducer](crate::reducer), so that results derived in an epoch the search has since backjumped past are discarded.

```rust
# use otter_red::db::trail::Trail;
let mut trail = Trail::default();
trail.store_assignment(4);

trail.push_level();
trail.store_assignment(-2);
let epoch = trail.epoch();
assert!(trail.is_live(epoch));

trail.clear_assignments_above(0);
trail.push_level();
assert_eq!(trail.level(), epoch.level);
assert!(!trail.is_live(epoch));
```
*/

use crate::structures::literal::CLiteral;

use super::LevelIndex;

/// A level of the trail, together with the stamp given to the level when opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Epoch {
    pub level: LevelIndex,
    pub stamp: u64,
}

#[derive(Default)]
pub struct Trail {
    /// The assigned literals, in order of assignment.
    pub literals: Vec<CLiteral>,

    /// The index of the first literal of each level above zero.
    pub level_indicies: Vec<usize>,

    /// The stamp of each level above zero.
    level_stamps: Vec<u64>,

    /// The last stamp issued.
    stamp_counter: u64,

    /// The index of the next literal to propagate.
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment at the current level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Opens a fresh level.
    pub fn push_level(&mut self) {
        self.stamp_counter += 1;
        self.level_indicies.push(self.literals.len());
        self.level_stamps.push(self.stamp_counter);
    }

    /// The epoch of the current level.
    pub fn epoch(&self) -> Epoch {
        Epoch {
            level: self.level(),
            stamp: self.level_stamps.last().copied().unwrap_or(0),
        }
    }

    /// Whether the level recorded by `epoch` remains on the trail.
    pub fn is_live(&self, epoch: Epoch) -> bool {
        match epoch.level {
            0 => true,
            level => {
                level <= self.level() && self.level_stamps[level as usize - 1] == epoch.stamp
            }
        }
    }

    /// Removes levels above `level`, returning the removed literals in order of assignment.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of the literals.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        match self.level_indicies.get(level as usize) {
            Some(&level_start) => {
                self.level_indicies.truncate(level as usize);
                self.level_stamps.truncate(level as usize);
                self.q_head = self.q_head.min(level_start);
                self.literals.split_off(level_start)
            }
            None => Vec::default(),
        }
    }

    /// The assignments made at level zero.
    pub fn level_zero_assignments(&self) -> &[CLiteral] {
        match self.level_indicies.first() {
            Some(&level_start) => &self.literals[..level_start],
            None => &self.literals,
        }
    }

    /// The assignments made at the current level.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        match self.level_indicies.last() {
            Some(&level_start) => &self.literals[level_start..],
            None => &self.literals,
        }
    }

    /// The first literal of `level`, if `level` is above zero and on the trail.
    pub fn first_at(&self, level: LevelIndex) -> Option<CLiteral> {
        let index = *self.level_indicies.get((level as usize).checked_sub(1)?)?;
        self.literals.get(index).copied()
    }

    /// The next literal to propagate, if any, advancing the queue.
    pub fn next_to_propagate(&mut self) -> Option<CLiteral> {
        let literal = self.literals.get(self.q_head).copied()?;
        self.q_head += 1;
        Some(literal)
    }

    /// Whether every assignment has been propagated.
    pub fn fully_propagated(&self) -> bool {
        self.q_head == self.literals.len()
    }
}
