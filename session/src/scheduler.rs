use crate::Session;
use rink_core::Params;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// The fixed simulation period. A configuration constant, not derived from
/// wall-clock delta: the simulation is deliberately not frame-rate
/// independent.
pub const TICK_PERIOD: Duration = Duration::from_millis(Params::TICK_PERIOD_MS);

/// Fixed-period driver for a shared session.
///
/// Every mutation funnels through the session mutex: the tick thread and
/// the transport callbacks take turns, which preserves the single-writer
/// ordering the simulation assumes.
pub struct Ticker {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn(session: Arc<Mutex<Session>>, period: Duration) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let handle = thread::spawn(move || {
            while flag.load(Ordering::Relaxed) {
                match session.lock() {
                    Ok(mut session) => session.tick(),
                    // A panicked writer leaves nothing worth ticking.
                    Err(_) => break,
                }
                thread::sleep(period);
            }
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Stop the loop and wait for the tick thread to exit.
    pub fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}
