//! The elapsed-time counter shown while a request is in flight.
//!
//! A dedicated thread wakes on a fixed interval, publishes the elapsed
//! milliseconds into a shared atomic, and asks the UI to repaint so the
//! "You've been waiting N seconds" line stays live. The clock is stopped
//! exactly once, when the request settles; dropping it is the stop.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::constant::WAIT_CLOCK_TICK_MS;

pub struct WaitClock {
    /// Elapsed milliseconds, published by the ticking thread.
    elapsed_ms: Arc<AtomicU64>,
    /// Held only so that dropping the clock disconnects the thread.
    _stop: mpsc::Sender<()>,
}

impl WaitClock {
    /// Start ticking. `ctx` gets a repaint request on every tick.
    pub fn start(ctx: egui::Context) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel::<()>();
        let elapsed_ms = Arc::new(AtomicU64::new(0));

        let published = Arc::clone(&elapsed_ms);
        thread::spawn(move || {
            let begun = Instant::now();
            loop {
                match stop_receiver.recv_timeout(Duration::from_millis(WAIT_CLOCK_TICK_MS)) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        published.store(begun.elapsed().as_millis() as u64, Ordering::Relaxed);
                        ctx.request_repaint();
                    }
                }
            }
        });

        Self {
            elapsed_ms,
            _stop: stop_sender,
        }
    }

    /// Seconds waited so far, rounded to the nearest, as of the last tick.
    pub fn seconds(&self) -> u64 {
        to_whole_seconds(self.elapsed_ms.load(Ordering::Relaxed))
    }

    /// Stop the clock. Consumes the handle so it cannot be stopped twice or
    /// read after stopping.
    pub fn stop(self) {
        drop(self);
    }
}

fn to_whole_seconds(ms: u64) -> u64 {
    (ms + 500) / 1000
}
