//! A deterministic, clock-free [`StepScheduler`].
//!
//! `ManualScheduler` only records requests. Whoever owns the loop pops the
//! next pending ticket (honouring the requested delay or not) and hands it
//! to [`crate::session::MazeSession::on_tick`]. Tests drain it synchronously;
//! the terminal driver sleeps for the delay first.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::contract::{ScheduleHandle, StepScheduler, StepTicket};

/// One pending continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTick {
    pub handle: ScheduleHandle,
    pub delay: Duration,
    pub ticket: StepTicket,
}

/// FIFO of scheduled ticks, keyed by monotonically increasing handles.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    pending: BTreeMap<ScheduleHandle, (Duration, StepTicket)>,
    next_handle: u64,
    scheduled: u64,
    cancelled: u64,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the oldest pending tick.
    pub fn pop_next(&mut self) -> Option<PendingTick> {
        let (handle, (delay, ticket)) = self.pending.pop_first()?;
        Some(PendingTick {
            handle,
            delay,
            ticket,
        })
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Total `schedule_after` calls.
    #[must_use]
    pub fn scheduled(&self) -> u64 {
        self.scheduled
    }

    /// Total `cancel` calls that removed a pending tick.
    #[must_use]
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl StepScheduler for ManualScheduler {
    fn schedule_after(&mut self, delay: Duration, ticket: StepTicket) -> ScheduleHandle {
        let handle = ScheduleHandle(self.next_handle);
        self.next_handle += 1;
        self.scheduled += 1;
        self.pending.insert(handle, (delay, ticket));
        handle
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        if self.pending.remove(&handle).is_some() {
            self.cancelled += 1;
        }
    }
}
