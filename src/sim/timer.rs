//! Deferred round transitions
//!
//! Sinking the ball and finishing the round both pause briefly before the
//! game moves on. The timer holds at most one armed transition, so a second
//! request while one is in flight is refused instead of double-advancing.

use serde::{Deserialize, Serialize};

/// Work to run once a delay elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredAction {
    /// Move on to the next hole (or finish the round after the last one)
    AdvanceHole,
    /// Ask the player whether to start a new round
    OfferRestart,
}

/// An armed transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Deferred {
    action: DeferredAction,
    remaining_ms: f32,
}

/// Single-slot timer for deferred transitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitionTimer {
    pending: Option<Deferred>,
}

impl TransitionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `action` to fire after `delay_ms`
    ///
    /// Returns false (and leaves the armed transition alone) if one is
    /// already in flight.
    pub fn schedule(&mut self, action: DeferredAction, delay_ms: f32) -> bool {
        if let Some(existing) = self.pending {
            log::debug!(
                "Refusing {:?}: {:?} already in flight",
                action,
                existing.action
            );
            return false;
        }
        self.pending = Some(Deferred {
            action,
            remaining_ms: delay_ms.max(0.0),
        });
        true
    }

    /// Drop the armed transition, returning what was pending
    pub fn cancel(&mut self) -> Option<DeferredAction> {
        self.pending.take().map(|d| d.action)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Count down by `elapsed_ms`; yields the action once when it comes due
    pub fn advance(&mut self, elapsed_ms: f32) -> Option<DeferredAction> {
        let deferred = self.pending.as_mut()?;
        deferred.remaining_ms -= elapsed_ms.max(0.0);
        if deferred.remaining_ms <= 0.0 {
            self.pending.take().map(|d| d.action)
        } else {
            None
        }
    }
}
