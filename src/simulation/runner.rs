//! Background step worker and the hand-off to the display side
//!
//! The worker thread owns the entity collection outright. A tick request is
//! accepted only when no step is in flight (skip, never queue). When a step
//! completes, a snapshot is published into a single-slot [`Mailbox`] that the
//! display side drains; an unread snapshot is simply overwritten.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::error::{Result, SimulationError};
use crate::simulation::states::Entity;
use crate::simulation::universe::Universe;

/// Single-slot, overwrite-on-publish mailbox
pub struct Mailbox<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for Mailbox<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace whatever is in the slot; returns true if an unread value was dropped
    pub fn publish(&self, value: T) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.replace(value).is_some()
    }

    /// Take the latest value, leaving the slot empty
    pub fn take(&self) -> Option<T> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).is_none()
    }
}

/// One background thread running `Universe::step` on request
pub struct StepWorker {
    requests: Option<Sender<()>>,
    busy: Arc<AtomicBool>,
    handle: Option<JoinHandle<Vec<Entity>>>,
}

impl StepWorker {
    /// Start the worker; it owns `entities` until [`StepWorker::shutdown`]
    pub fn spawn(universe: Universe, entities: Vec<Entity>, mailbox: Mailbox<Vec<Entity>>) -> Self {
        let (tx, rx) = mpsc::channel::<()>();
        let busy = Arc::new(AtomicBool::new(false));
        let worker_busy = Arc::clone(&busy);

        let handle = thread::spawn(move || {
            let mut entities = entities;
            let mut tick: u64 = 0;
            // Ends when every sender is dropped
            while rx.recv().is_ok() {
                let (next, report) = universe.step_with_report(entities);
                entities = next;
                tick += 1;
                if mailbox.publish(entities.clone()) {
                    debug!(tick, "unread snapshot overwritten");
                }
                debug!(tick, entities = report.entities_out, merges = report.merges, "step published");
                worker_busy.store(false, Ordering::Release);
            }
            entities
        });

        Self {
            requests: Some(tx),
            busy,
            handle: Some(handle),
        }
    }

    /// Ask for one step; returns false (and does nothing) if a step is still running
    pub fn request_step(&self) -> bool {
        let Some(tx) = &self.requests else {
            return false;
        };
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        if tx.send(()).is_err() {
            warn!("step worker is gone, request dropped");
            self.busy.store(false, Ordering::Release);
            return false;
        }
        true
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Stop the worker after any in-flight step and return the final collection
    ///
    /// Fails with [`SimulationError::WorkerPanicked`] if the thread died.
    pub fn shutdown(mut self) -> Result<Vec<Entity>> {
        self.stop()
    }

    fn stop(&mut self) -> Result<Vec<Entity>> {
        self.requests.take();
        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(entities)) => Ok(entities),
            Some(Err(_)) => {
                warn!("step worker panicked");
                Err(SimulationError::WorkerPanicked)
            }
            None => Ok(Vec::new()),
        }
    }
}

impl Drop for StepWorker {
    fn drop(&mut self) {
        if self.handle.is_some() {
            let _ = self.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailbox_keeps_only_latest() {
        let mailbox = Mailbox::new();
        assert!(!mailbox.publish(1));
        assert!(mailbox.publish(2));
        assert_eq!(mailbox.take(), Some(2));
        assert!(mailbox.is_empty());
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn mailbox_clones_share_slot() {
        let a = Mailbox::new();
        let b = a.clone();
        a.publish("snapshot");
        assert_eq!(b.take(), Some("snapshot"));
    }
}
