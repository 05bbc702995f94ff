//! Owned, cancelable interval timers.
//!
//! A `Ticker` runs its callback on a background thread at a fixed
//! interval until stopped. Dropping the handle stops it, so a ticker
//! can never outlive (or keep updating state for) the view that owns
//! it. `stop()` joins the thread; once it returns, no further tick
//! will run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Run `tick` every `interval` until the returned handle is
    /// stopped or dropped.
    pub fn spawn<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            // Poll well below the interval so stop() is honored promptly.
            let poll = (interval / 4)
                .min(Duration::from_millis(25))
                .max(Duration::from_millis(1));
            let mut next = Instant::now() + interval;

            while !stop_flag.load(Ordering::Relaxed) {
                if Instant::now() >= next {
                    tick();
                    next += interval;
                }
                thread::sleep(poll);
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the ticker and wait for its thread to finish.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("TICKER_THREAD_PANICKED");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
