use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Instant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::analysis;

use super::messages::{JobRequest, JobResult};

/// Background analysis thread. Exits when either channel end is dropped.
pub fn spawn_worker_thread(rx: Receiver<JobRequest>, tx: Sender<JobResult>) {
    thread::spawn(move || {
        while let Ok(req) = rx.recv() {
            let start = Instant::now();

            // A panicking pass must not take the worker down with it
            let result = catch_unwind(AssertUnwindSafe(|| analysis::analyze(&req.bars)))
                .map(Arc::new)
                .map_err(|panic| {
                    panic
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| panic.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "zone analysis panicked".to_string())
                });

            let elapsed = start.elapsed().as_millis();

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_worker_jobs {
                log::debug!(
                    "Worker: job {} ({} bars) done in {} ms",
                    req.generation,
                    req.bars.len(),
                    elapsed
                );
            }

            let sent = tx.send(JobResult {
                generation: req.generation,
                bar_count: req.bars.len(),
                duration_ms: elapsed,
                result,
            });
            if sent.is_err() {
                // Engine dropped; nobody is listening
                break;
            }
        }
    });
}
