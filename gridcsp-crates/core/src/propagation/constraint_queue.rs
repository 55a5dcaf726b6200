use std::collections::VecDeque;

use crate::containers::KeyedVec;
use crate::engine::ConstraintId;
use crate::gridcsp_assert_moderate;

/// A FIFO queue of constraints in which every constraint occurs at most once.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConstraintQueue {
    queue: VecDeque<ConstraintId>,
    is_enqueued: KeyedVec<ConstraintId, bool>,
}

impl ConstraintQueue {
    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Appends `constraint` unless it is already in the queue.
    pub(crate) fn enqueue(&mut self, constraint: ConstraintId) {
        if !self.is_enqueued(constraint) {
            self.is_enqueued.accomodate(constraint, false);
            self.is_enqueued[constraint] = true;
            self.queue.push_back(constraint);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<ConstraintId> {
        let next_constraint = self.queue.pop_front();

        if let Some(constraint) = next_constraint {
            gridcsp_assert_moderate!(self.is_enqueued[constraint]);
            self.is_enqueued[constraint] = false;
        }

        next_constraint
    }

    pub(crate) fn clear(&mut self) {
        for constraint in self.queue.drain(..) {
            self.is_enqueued[constraint] = false;
        }
    }

    pub(crate) fn is_enqueued(&self, constraint: ConstraintId) -> bool {
        self.is_enqueued
            .get(constraint)
            .copied()
            .unwrap_or_default()
    }
}
