/*!
The workset: a bounded queue of learnt clauses, from the search to the reducer.

A push never blocks the search.
If the workset is full when a clause is pushed, the oldest clause in the workset is evicted to make room.
Evicted clauses are returned to the caller, to be counted as workset deletions.

The workset is a bounded [crossbeam channel](crossbeam::channel::bounded), and the search keeps a receiving end of the channel (the *evictor*) alongside the sending end in order to evict entries.

```rust
# use otter_red::reducer::workset::{workset, WorksetEntry, WorksetPush};
# use otter_red::db::{ClauseKey, trail::Trail};
let (workset, receiver) = workset(2);
let epoch = Trail::default().epoch();

let entry = |index| WorksetEntry {
    key: ClauseKey::Original(index),
    epoch,
    clause: vec![1, 2],
};

assert!(matches!(workset.push(entry(0)), Ok(WorksetPush::Inserted)));
assert!(matches!(workset.push(entry(1)), Ok(WorksetPush::Inserted)));

match workset.push(entry(2)) {
    Ok(WorksetPush::Evicted(evicted)) => assert_eq!(evicted.key, ClauseKey::Original(0)),
    _ => panic!("Expected an eviction"),
}

assert_eq!(receiver.recv().map(|entry| entry.key), Ok(ClauseKey::Original(1)));
```
*/

use crossbeam::channel::{self, Receiver, Sender, TryRecvError, TrySendError};

use crate::{
    db::{trail::Epoch, ClauseKey},
    misc::log::targets,
    structures::clause::CClause,
    types::err::ReducerError,
};

/// A clause handed to the reducer.
#[derive(Clone, Debug)]
pub struct WorksetEntry {
    /// The key of the clause in the clause database.
    pub key: ClauseKey,

    /// The epoch of the trail when the clause was learnt.
    pub epoch: Epoch,

    /// A copy of the literals of the clause.
    pub clause: CClause,
}

/// The outcome of a push.
#[derive(Debug)]
pub enum WorksetPush {
    /// The entry was inserted without eviction.
    Inserted,

    /// The entry was inserted, and the oldest entry evicted.
    Evicted(WorksetEntry),
}

/// The sending end of the workset.
pub struct Workset {
    sender: Sender<WorksetEntry>,
    evictor: Receiver<WorksetEntry>,
    capacity: usize,
}

/// A workset with capacity for `capacity` entries, and the receiving end for the reducer.
pub fn workset(capacity: usize) -> (Workset, Receiver<WorksetEntry>) {
    let capacity = capacity.max(1);
    let (sender, receiver) = channel::bounded(capacity);
    let workset = Workset {
        sender,
        evictor: receiver.clone(),
        capacity,
    };
    (workset, receiver)
}

impl Workset {
    /// Pushes `entry`, evicting the oldest entry if the workset is full.
    pub fn push(&self, entry: WorksetEntry) -> Result<WorksetPush, ReducerError> {
        let mut entry = entry;
        let mut evicted = None;

        loop {
            match self.sender.try_send(entry) {
                Ok(()) => {
                    return Ok(match evicted {
                        None => WorksetPush::Inserted,
                        Some(oldest) => WorksetPush::Evicted(oldest),
                    });
                }

                Err(TrySendError::Full(returned)) => {
                    entry = returned;
                    match self.evictor.try_recv() {
                        Ok(oldest) => {
                            log::trace!(target: targets::WORKSET, "Evicted {}", oldest.key);
                            evicted = Some(oldest);
                        }
                        // The reducer took an entry in the meantime.
                        Err(TryRecvError::Empty) => {}
                        Err(TryRecvError::Disconnected) => return Err(ReducerError::Disconnected),
                    }
                }

                Err(TrySendError::Disconnected(_)) => return Err(ReducerError::Disconnected),
            }
        }
    }

    /// A count of entries waiting for the reducer.
    pub fn len(&self) -> usize {
        self.sender.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::trail::Trail;

    fn entry(index: u32, clause: CClause) -> WorksetEntry {
        WorksetEntry {
            key: ClauseKey::Original(index),
            epoch: Trail::default().epoch(),
            clause,
        }
    }

    #[test]
    fn evicts_in_order() {
        let (workset, receiver) = workset(3);
        for index in 0..3 {
            assert!(matches!(
                workset.push(entry(index, vec![1, 2])),
                Ok(WorksetPush::Inserted)
            ));
        }
        assert_eq!(workset.len(), 3);

        let mut evicted = Vec::default();
        for index in 3..5 {
            if let Ok(WorksetPush::Evicted(oldest)) = workset.push(entry(index, vec![1, 2])) {
                evicted.push(oldest.key);
            }
        }
        assert_eq!(evicted, vec![ClauseKey::Original(0), ClauseKey::Original(1)]);

        let remaining = receiver.try_iter().map(|entry| entry.key).collect::<Vec<_>>();
        assert_eq!(
            remaining,
            vec![
                ClauseKey::Original(2),
                ClauseKey::Original(3),
                ClauseKey::Original(4)
            ]
        );
    }

    #[test]
    fn zero_capacity_holds_one() {
        let (workset, _receiver) = workset(0);
        assert_eq!(workset.capacity(), 1);
        assert!(matches!(
            workset.push(entry(0, vec![1, 2, 3])),
            Ok(WorksetPush::Inserted)
        ));
        assert!(matches!(
            workset.push(entry(1, vec![1, 2, 3])),
            Ok(WorksetPush::Evicted(_))
        ));
    }
}
