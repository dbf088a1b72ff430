use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::task::{SpeechTask, SpeechTaskId};
use crate::services::tts::SpeechSynthesizer;
use crate::Result;

/// Single-consumer FIFO in front of a synthesis backend.
///
/// `enqueue` never blocks. A dedicated OS thread takes tasks one at a time
/// and hands them to the backend; a failed or panicking task is logged and
/// dropped, and the next one proceeds. No retry, no cancellation.
pub struct SpeechDispatcher {
    tx: Option<mpsc::UnboundedSender<SpeechTask>>,
    worker: Option<JoinHandle<()>>,
    next_seq: u64,
}

impl SpeechDispatcher {
    pub fn spawn<S>(backend: S) -> Result<Self>
    where
        S: SpeechSynthesizer + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = thread::Builder::new()
            .name("speech-dispatch".to_string())
            .spawn(move || run_worker(backend, rx))?;

        Ok(Self {
            tx: Some(tx),
            worker: Some(worker),
            next_seq: 0,
        })
    }

    /// Queue `text` for synthesis and return immediately.
    ///
    /// Returns `None` if the worker is gone; the text is dropped.
    pub fn enqueue(&mut self, text: impl Into<String>) -> Option<SpeechTaskId> {
        let task = SpeechTask::new(self.next_seq, text.into());
        let id = task.id;
        let seq = task.seq;
        self.next_seq += 1;

        let tx = self.tx.as_ref()?;
        match tx.send(task) {
            Ok(()) => {
                debug!(seq, "speech task queued");
                Some(id)
            }
            Err(_) => {
                warn!(seq, "speech worker stopped, dropping task");
                None
            }
        }
    }

    /// Number of tasks handed to `enqueue` so far.
    pub fn enqueued(&self) -> u64 {
        self.next_seq
    }

    /// Close the queue and wait for the worker to drain what is left.
    pub fn shutdown(mut self) {
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("speech worker exited abnormally");
            }
        }
    }
}

impl Drop for SpeechDispatcher {
    fn drop(&mut self) {
        // Closing the channel lets the worker finish on its own; we don't
        // join here since a stalled backend would hang the caller.
        self.tx.take();
    }
}

fn run_worker<S: SpeechSynthesizer>(mut backend: S, mut rx: mpsc::UnboundedReceiver<SpeechTask>) {
    info!(backend = backend.name(), "speech worker started");

    // Idle: parked on the queue. Dispatching: exactly one task in flight.
    while let Some(task) = rx.blocking_recv() {
        let started = Instant::now();
        let waited_ms = started.duration_since(task.enqueued_at).as_millis() as u64;

        let outcome = catch_unwind(AssertUnwindSafe(|| backend.speak(&task.text)));
        let took_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(Ok(())) => debug!(seq = task.seq, waited_ms, took_ms, "speech task done"),
            Ok(Err(e)) => warn!(seq = task.seq, error = %e, "speech synthesis failed, task dropped"),
            Err(_) => warn!(seq = task.seq, "speech backend panicked, task dropped"),
        }
    }

    info!(backend = backend.name(), "speech worker stopped");
}
