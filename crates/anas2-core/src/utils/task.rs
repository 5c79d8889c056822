// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cancellable background tasks.
//!
//! A [`TaskHandle`] owns a worker thread that runs a callback on a fixed period
//! until it is cancelled. Cancellation is signalled over a channel so the worker
//! wakes immediately instead of finishing its current sleep.

use std::borrow::Cow;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, Sender};

/// Handle to a scheduled, repeating task.
///
/// Dropping the handle cancels the task and joins its worker.
#[derive(Debug)]
pub struct TaskHandle {
    name: Cow<'static, str>,
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl TaskHandle {
    /// Spawns a worker thread that calls `tick` every `period` until cancelled.
    ///
    /// If the operating system refuses to spawn the thread, the failure is logged
    /// and an inactive handle is returned.
    pub fn spawn_interval<F>(name: impl Into<Cow<'static, str>>, period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let name = name.into();
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);

        let spawned = thread::Builder::new().name(name.to_string()).spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => tick(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        match spawned {
            Ok(worker) => {
                log::debug!("Scheduled task '{}' every {:?}", name, period);
                Self {
                    name,
                    stop_tx: Some(stop_tx),
                    worker: Some(worker),
                }
            }
            Err(e) => {
                log::error!("Failed to spawn task '{}': {}", name, e);
                Self::inactive(name)
            }
        }
    }

    /// Creates a handle with no worker behind it.
    ///
    /// Used by hosts that drive callbacks themselves and have nothing to cancel.
    pub fn inactive(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            stop_tx: None,
            worker: None,
        }
    }

    /// Returns the task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` while the worker thread has not been cancelled.
    pub fn is_active(&self) -> bool {
        self.worker.is_some()
    }

    /// Stops the worker and waits for it to exit. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            // A full or disconnected channel both mean the worker will stop.
            let _ = stop_tx.try_send(());
        }
        if let Some(worker) = self.worker.take() {
            // A task cancelling itself from its own callback must not join itself.
            if worker.thread().id() == thread::current().id() {
                return;
            }
            if worker.join().is_err() {
                log::warn!("Task '{}' panicked before cancellation", self.name);
            } else {
                log::debug!("Cancelled task '{}'", self.name);
            }
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn interval_task_ticks_until_cancelled() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let mut handle = TaskHandle::spawn_interval("test-ticker", Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(handle.is_active());
        thread::sleep(Duration::from_millis(100));
        handle.cancel();
        assert!(!handle.is_active());

        let after_cancel = ticks.load(Ordering::SeqCst);
        assert!(after_cancel > 0, "task should have ticked at least once");

        thread::sleep(Duration::from_millis(30));
        assert_eq!(ticks.load(Ordering::SeqCst), after_cancel);
    }

    #[test]
    fn cancel_interrupts_long_period() {
        let mut handle = TaskHandle::spawn_interval("slow-ticker", Duration::from_secs(60), || {});
        let started = Instant::now();
        handle.cancel();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn inactive_handle_is_inert() {
        let mut handle = TaskHandle::inactive("manual");
        assert_eq!(handle.name(), "manual");
        assert!(!handle.is_active());
        handle.cancel();
        handle.cancel();
    }
}
