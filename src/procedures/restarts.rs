/*!
Restart policies.

A restart backjumps to level zero, keeping learnt clauses, activity and saved phases.

# Glucose

Two bounded queues are kept:
- The lbd of recent learnt clauses.
- The length of the trail at recent conflicts.

A restart is due when the lbd queue is full and the recent average lbd, scaled by [K](crate::config::restarts::RestartConfig::glucose_k), exceeds the average lbd over every conflict.

A restart is blocked, by clearing the lbd queue, when the trail at a conflict is [R](crate::config::restarts::RestartConfig::glucose_r) times longer than the recent average trail, as the search may be close to a model.
Blocking only happens after [blocking_threshold](crate::config::restarts::RestartConfig::blocking_threshold) conflicts.

# Luby

A restart is due after `u` times the next element of the [luby sequence](crate::generic::luby) conflicts.
*/

use crate::{
    config::{
        restarts::{RestartConfig, RestartPolicy},
        LBD,
    },
    context::GenericContext,
    generic::{bounded_queue::BoundedQueue, luby::Luby},
    misc::log::targets::{self},
};

/// Bookkeeping for restarts.
pub struct RestartState {
    lbd_queue: BoundedQueue,
    trail_queue: BoundedQueue,

    /// The sum of the lbd of every learnt clause.
    sum_lbd: u64,

    /// Conflicts seen for the purpose of restarts.
    conflicts: u64,

    luby: Luby,

    /// Conflicts since the last restart at which a luby restart is due.
    luby_limit: u64,

    /// Whether a restart was blocked since the last restart.
    blocked: bool,
}

impl RestartState {
    pub fn new(config: &RestartConfig) -> Self {
        let mut luby = Luby::default();
        let luby_limit = Self::luby_limit(&mut luby, config);
        RestartState {
            lbd_queue: BoundedQueue::new(config.lbd_queue_size.value),
            trail_queue: BoundedQueue::new(config.trail_queue_size.value),
            sum_lbd: 0,
            conflicts: 0,
            luby,
            luby_limit,
            blocked: false,
        }
    }

    fn luby_limit(luby: &mut Luby, config: &RestartConfig) -> u64 {
        let element = luby.next().unwrap_or(u32::MAX) as u64;
        element.saturating_mul(config.luby_u.value as u64)
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Notes a conflict, where analysis gave a clause with `lbd` and the trail held `trail_length` literals at the conflict.
    pub fn note_conflict_for_restarts(&mut self, lbd: LBD, trail_length: usize) {
        let config = &self.config.restarts;
        if config.policy.value != RestartPolicy::Glucose {
            return;
        }

        let restarts = &mut self.restarts;
        restarts.conflicts += 1;
        restarts.sum_lbd += lbd as u64;

        if self.counters.conflicts > config.blocking_threshold.value
            && restarts.lbd_queue.is_full()
            && trail_length as f64 > config.glucose_r.value * restarts.trail_queue.average()
        {
            restarts.lbd_queue.clear();
            self.counters.blocked_restarts += 1;
            if !restarts.blocked {
                restarts.blocked = true;
                self.counters.blocked_restarts_in_row += 1;
                self.counters.last_block_at_restart = self.counters.restarts;
            }
            log::trace!(target: targets::RESTART, "Restart blocked with a trail of {trail_length}");
        }

        restarts.trail_queue.push(trail_length as u64);
        restarts.lbd_queue.push(lbd as u64);
    }

    /// Whether a restart is due, by the configured policy.
    pub fn restart_due(&self) -> bool {
        let restarts = &self.restarts;
        match self.config.restarts.policy.value {
            RestartPolicy::Never => false,

            RestartPolicy::Luby => self.counters.fresh_conflicts >= restarts.luby_limit,

            RestartPolicy::Glucose => {
                restarts.lbd_queue.is_full()
                    && restarts.conflicts > 0
                    && restarts.lbd_queue.average() * self.config.restarts.glucose_k.value
                        > restarts.sum_lbd as f64 / restarts.conflicts as f64
            }
        }
    }

    /// Restarts the search, backjumping to level zero.
    pub fn restart(&mut self) {
        self.backjump(0);
        self.counters.restarts += 1;
        self.counters.fresh_conflicts = 0;

        let restarts = &mut self.restarts;
        restarts.lbd_queue.clear();
        restarts.blocked = false;
        if self.config.restarts.policy.value == RestartPolicy::Luby {
            restarts.luby_limit = RestartState::luby_limit(&mut restarts.luby, &self.config.restarts);
        }

        log::trace!(target: targets::RESTART, "Restart {}", self.counters.restarts);
    }
}
