//! Timer scheduler for the session loop.
//!
//! Holds at most one pending timer per [`TimerKind`] against a logical
//! millisecond clock. Timers fire in `(deadline, kind)` order, so two timers
//! sharing a deadline always fire in the same order.
//!
//! Pausing freezes every armed timer to its remaining duration; resuming
//! re-arms each one with exactly that remainder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The timers the session loop runs on.
///
/// Declaration order is the tie-break order for equal deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Per-post answer window.
    AnswerWindow,
    /// Combo decay window.
    ComboDecay,
    /// Admits the next post.
    Spawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Armed { deadline_ms: u64 },
    Suspended { remaining_ms: u64 },
}

/// A fired timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTimer {
    pub kind: TimerKind,
    pub deadline_ms: u64,
}

/// Cancel-and-reschedule timers with remaining-duration tracking.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    timers: BTreeMap<TimerKind, Pending>,
    paused: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` to fire `delay_ms` after `now_ms`, replacing any pending
    /// timer of that kind. While paused the timer is stored suspended.
    pub fn schedule(&mut self, kind: TimerKind, now_ms: u64, delay_ms: u64) {
        let pending = if self.paused {
            Pending::Suspended { remaining_ms: delay_ms }
        } else {
            Pending::Armed {
                deadline_ms: now_ms.saturating_add(delay_ms),
            }
        };
        self.timers.insert(kind, pending);
    }

    /// Drop the pending timer of `kind`. Returns whether one existed.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.timers.remove(&kind).is_some()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Freeze every armed timer at its remaining duration.
    pub fn pause(&mut self, now_ms: u64) {
        if self.paused {
            return;
        }
        self.paused = true;
        for pending in self.timers.values_mut() {
            if let Pending::Armed { deadline_ms } = *pending {
                *pending = Pending::Suspended {
                    remaining_ms: deadline_ms.saturating_sub(now_ms),
                };
            }
        }
    }

    /// Re-arm every suspended timer with its remaining duration.
    pub fn resume(&mut self, now_ms: u64) {
        if !self.paused {
            return;
        }
        self.paused = false;
        for pending in self.timers.values_mut() {
            if let Pending::Suspended { remaining_ms } = *pending {
                *pending = Pending::Armed {
                    deadline_ms: now_ms.saturating_add(remaining_ms),
                };
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.timers.contains_key(&kind)
    }

    /// Deadline of an armed timer. `None` if absent or suspended.
    pub fn deadline(&self, kind: TimerKind) -> Option<u64> {
        match self.timers.get(&kind)? {
            Pending::Armed { deadline_ms } => Some(*deadline_ms),
            Pending::Suspended { .. } => None,
        }
    }

    /// Time left on a pending timer as seen at `now_ms`.
    pub fn remaining(&self, kind: TimerKind, now_ms: u64) -> Option<u64> {
        match self.timers.get(&kind)? {
            Pending::Armed { deadline_ms } => Some(deadline_ms.saturating_sub(now_ms)),
            Pending::Suspended { remaining_ms } => Some(*remaining_ms),
        }
    }

    /// Earliest armed deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.earliest().map(|due| due.deadline_ms)
    }

    /// Remove and return the earliest timer due at or before `now_ms`.
    /// Nothing fires while paused.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<DueTimer> {
        if self.paused {
            return None;
        }
        let due = self.earliest().filter(|due| due.deadline_ms <= now_ms)?;
        self.timers.remove(&due.kind);
        Some(due)
    }

    fn earliest(&self) -> Option<DueTimer> {
        self.timers
            .iter()
            .filter_map(|(kind, pending)| match pending {
                Pending::Armed { deadline_ms } => Some(DueTimer {
                    kind: *kind,
                    deadline_ms: *deadline_ms,
                }),
                Pending::Suspended { .. } => None,
            })
            .min_by_key(|due| (due.deadline_ms, due.kind))
    }
}
