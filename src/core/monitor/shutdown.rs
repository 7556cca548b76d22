//! Interrupt handling for the refresh loop.
//!
//! The interrupt handler never exits the process itself. It raises a flag and
//! wakes the loop through a stop channel; the loop then prints its summary and
//! returns like any other run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, SyspeekError};

/// Observed side of the cancellation signal, owned by the refresh loop
pub struct ShutdownSignal {
    requested: Arc<AtomicBool>,
    stop_rx: Receiver<()>,
}

/// Raising side of the cancellation signal
#[derive(Clone)]
pub struct ShutdownTrigger {
    requested: Arc<AtomicBool>,
    stop_tx: Sender<()>,
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        self.requested.store(true, Ordering::SeqCst);
        // The receiver may already be gone once the loop has returned
        let _ = self.stop_tx.send(());
    }
}

impl ShutdownSignal {
    /// Install the process-wide SIGINT/SIGTERM handler.
    ///
    /// Can only succeed once per process.
    pub fn install() -> Result<Self> {
        let (signal, trigger) = Self::manual();

        ctrlc::set_handler(move || {
            log::info!("Interrupt received, stopping refresh loop");
            trigger.trigger();
        })
        .map_err(|e| SyspeekError::signal_handler(e.to_string()))?;

        Ok(signal)
    }

    /// Signal driven only by the returned trigger
    pub fn manual() -> (Self, ShutdownTrigger) {
        let requested = Arc::new(AtomicBool::new(false));
        let (stop_tx, stop_rx) = mpsc::channel();

        let signal = Self {
            requested: requested.clone(),
            stop_rx,
        };
        let trigger = ShutdownTrigger { requested, stop_tx };

        (signal, trigger)
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Sleep for `interval`, waking early on interrupt.
    ///
    /// Returns `true` if shutdown was requested.
    pub fn wait(&self, interval: Duration) -> bool {
        if self.is_requested() {
            return true;
        }

        match self.stop_rx.recv_timeout(interval) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) => self.is_requested(),
            Err(RecvTimeoutError::Disconnected) => {
                // No trigger left to wake us
                std::thread::sleep(interval);
                self.is_requested()
            }
        }
    }
}
