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

//! The performance monitor service.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use anas2_core::config::{ConfigError, MonitorConfig};
use anas2_core::host::HostCapabilities;
use anas2_core::telemetry::{round_half_up, LoadTimings, MetricKind, MetricSeries, PerformanceWarning};
use anas2_core::utils::task::TaskHandle;
use chrono::{SecondsFormat, Utc};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::display;
use crate::report::{self, PerformanceData, PerformanceReport};

/// Maximum number of undelivered warnings buffered for subscribers.
/// If the buffer is full, new warnings are dropped.
const WARNING_BUFFER_SIZE: usize = 256;

const FRAME_TASK: &str = "anas2-frames";
const MEMORY_TASK: &str = "anas2-memory";
const REPORT_TASK: &str = "anas2-report";

#[derive(Debug)]
struct SamplerState {
    data: PerformanceData,
    frame_count: u32,
    last_flush_ms: f64,
}

/// State shared between the monitor and its scheduled callbacks.
#[derive(Debug)]
struct Sampler {
    config: MonitorConfig,
    host: HostCapabilities,
    state: Mutex<SamplerState>,
    warning_tx: Sender<PerformanceWarning>,
}

impl Sampler {
    fn lock_state(&self) -> MutexGuard<'_, SamplerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn sample_frame(&self) -> Option<f64> {
        let now = self.host.clock.now_ms();
        let fps = {
            let mut state = self.lock_state();
            state.frame_count += 1;

            let elapsed = now - state.last_flush_ms;
            if elapsed < self.config.fps_window_ms as f64 || elapsed <= 0.0 {
                return None;
            }

            let fps = round_half_up(f64::from(state.frame_count) * 1000.0 / elapsed);
            state.data.fps.record(fps);
            state.frame_count = 0;
            state.last_flush_ms = now;
            fps
        };

        display::render_fps(self.host.displays.as_deref(), fps);
        self.check_and_raise(MetricKind::Fps, fps);
        Some(fps)
    }

    fn sample_memory(&self) -> Option<f64> {
        let used = self.host.heap.as_ref()?.used_heap_bytes()? as f64;
        self.lock_state().data.memory.record(used);

        display::render_memory(self.host.displays.as_deref(), used);
        self.check_and_raise(MetricKind::Memory, used);
        Some(used)
    }

    fn capture_load_timings(&self) -> Option<LoadTimings> {
        let total = self.host.clock.now_ms();
        let timings = self
            .host
            .navigation
            .as_ref()
            .and_then(|source| source.navigation_entries().into_iter().next())
            .map(|entry| LoadTimings::from_entry(&entry, total));

        {
            let mut state = self.lock_state();
            state.data.load_times.push(total);
            if timings.is_some() {
                state.data.timings = timings;
            }
        }

        match &timings {
            Some(t) => log::info!(
                "Page loaded in {}ms (dns {}ms, tcp {}ms, request {}ms)",
                round_half_up(total),
                t.dns,
                t.tcp,
                t.request
            ),
            None => log::info!("Page loaded in {}ms", round_half_up(total)),
        }

        display::render_load_time(self.host.displays.as_deref(), total);
        self.check_and_raise(MetricKind::LoadTime, total);
        timings
    }

    fn log_periodic(&self) {
        if !self.config.enabled {
            return;
        }
        let data = self.lock_state().data.clone();
        log::info!("{}", report::summary(&data, self.host.has_heap_probe()));
    }

    fn check_and_raise(&self, metric: MetricKind, value: f64) {
        let thresholds = &self.config.warning_thresholds;
        if !thresholds.is_exceeded(metric, value) {
            return;
        }

        let warning = PerformanceWarning {
            metric,
            value,
            threshold: thresholds.threshold(metric),
        };
        log::warn!("{}", warning);

        match self.warning_tx.try_send(warning) {
            Ok(()) | Err(TrySendError::Disconnected(_)) => {}
            Err(TrySendError::Full(_)) => {
                log::trace!("Warning buffer full, dropping {} warning", metric);
            }
        }
    }
}

/// Samples frame rate, heap usage, and load timings, and reports on them.
///
/// The monitor owns its scheduled tasks. Frame sampling runs on the host's
/// frame scheduler; heap sampling (only when the host exposes a heap probe) and
/// the periodic summary run on interval workers. All of them are cancelled by
/// [`stop`](Self::stop) or when the monitor is dropped.
///
/// Sampling state is guarded by a single mutex, since frame and interval
/// callbacks are independent producers.
#[derive(Debug)]
pub struct PerformanceMonitor {
    sampler: Arc<Sampler>,
    warning_rx: Receiver<PerformanceWarning>,
    tasks: Vec<TaskHandle>,
    started: bool,
}

impl PerformanceMonitor {
    /// Creates a monitor without scheduling anything.
    pub fn new(config: MonitorConfig, host: HostCapabilities) -> Result<Self, ConfigError> {
        config.validate()?;
        let (warning_tx, warning_rx) = crossbeam_channel::bounded(WARNING_BUFFER_SIZE);
        let last_flush_ms = host.clock.now_ms();

        Ok(Self {
            sampler: Arc::new(Sampler {
                config,
                host,
                state: Mutex::new(SamplerState {
                    data: PerformanceData::default(),
                    frame_count: 0,
                    last_flush_ms,
                }),
                warning_tx,
            }),
            warning_rx,
            tasks: Vec::new(),
            started: false,
        })
    }

    /// Creates a monitor and immediately starts it.
    pub fn initialize(config: MonitorConfig, host: HostCapabilities) -> Result<Self, ConfigError> {
        let mut monitor = Self::new(config, host)?;
        monitor.start();
        Ok(monitor)
    }

    /// Schedules the frame, heap, and reporting loops.
    ///
    /// Does nothing when the configuration is disabled or the monitor is already
    /// running.
    pub fn start(&mut self) {
        let config = &self.sampler.config;
        if !config.enabled {
            log::info!("Performance monitoring is disabled");
            return;
        }
        if self.started {
            log::debug!("Performance monitor already started, ignoring");
            return;
        }

        log::info!("Starting performance monitor...");
        {
            let mut state = self.sampler.lock_state();
            state.frame_count = 0;
            state.last_flush_ms = self.sampler.host.clock.now_ms();
        }

        let sampler = Arc::clone(&self.sampler);
        let frames = self.sampler.host.frames.schedule_frames(Box::new(move || {
            sampler.sample_frame();
        }));
        self.tasks.push(frames);

        if self.sampler.host.has_heap_probe() {
            let sampler = Arc::clone(&self.sampler);
            self.tasks.push(TaskHandle::spawn_interval(
                MEMORY_TASK,
                Duration::from_millis(config.memory_interval_ms),
                move || {
                    sampler.sample_memory();
                },
            ));
        } else {
            log::debug!("No heap probe available, memory sampling disabled");
        }

        let sampler = Arc::clone(&self.sampler);
        self.tasks.push(TaskHandle::spawn_interval(
            REPORT_TASK,
            Duration::from_millis(config.log_interval_ms),
            move || sampler.log_periodic(),
        ));

        self.started = true;
        log::info!("Performance monitor ready ({} tasks)", self.tasks.len());
    }

    /// Cancels every scheduled loop. Safe to call more than once.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        for task in &mut self.tasks {
            task.cancel();
        }
        self.tasks.clear();
        self.started = false;
        log::info!("Performance monitor stopped");
    }

    /// Returns `true` while the monitor's loops are scheduled.
    pub fn is_running(&self) -> bool {
        self.started
    }

    /// Returns the names of the currently scheduled tasks.
    pub fn scheduled_tasks(&self) -> Vec<&str> {
        self.tasks.iter().map(TaskHandle::name).collect()
    }

    /// Counts one rendered frame, flushing an FPS sample once per window.
    ///
    /// Returns the flushed FPS value, or `None` between flushes and when the
    /// monitor is disabled.
    pub fn sample_frame(&self) -> Option<f64> {
        if !self.sampler.config.enabled {
            return None;
        }
        self.sampler.sample_frame()
    }

    /// Records the current heap usage.
    ///
    /// Returns `None` without recording anything if the monitor is disabled, the
    /// host has no heap probe, or the probe has no reading.
    pub fn sample_memory(&self) -> Option<f64> {
        if !self.sampler.config.enabled {
            return None;
        }
        self.sampler.sample_memory()
    }

    /// Captures the page load timings. Call once, when the host's load event fires.
    ///
    /// The load time is always appended to the history; phase timings are only
    /// stored when the host has a navigation entry. Does nothing when disabled.
    pub fn capture_load_timings(&self) -> Option<LoadTimings> {
        if !self.sampler.config.enabled {
            return None;
        }
        self.sampler.capture_load_timings()
    }

    /// Logs the current summary.
    pub fn log_periodic(&self) {
        self.sampler.log_periodic();
    }

    /// Returns the human-readable summary without logging it.
    pub fn summary(&self) -> String {
        let data = self.sampler.lock_state().data.clone();
        report::summary(&data, self.sampler.host.has_heap_probe())
    }

    /// Returns `true` if `value` violates the configured threshold for `metric`.
    pub fn check_warning(&self, metric: MetricKind, value: f64) -> bool {
        self.sampler.config.warning_thresholds.is_exceeded(metric, value)
    }

    /// Returns a receiver for raised warnings.
    ///
    /// Receivers share one queue: each warning is delivered to one of them.
    pub fn warnings(&self) -> Receiver<PerformanceWarning> {
        self.warning_rx.clone()
    }

    /// Returns a copy of the sampled data.
    pub fn data(&self) -> PerformanceData {
        self.sampler.lock_state().data.clone()
    }

    /// Returns the frame rate series.
    pub fn fps(&self) -> MetricSeries {
        self.sampler.lock_state().data.fps.clone()
    }

    /// Returns the heap usage series.
    pub fn memory(&self) -> MetricSeries {
        self.sampler.lock_state().data.memory.clone()
    }

    /// Takes a detached snapshot of everything sampled so far.
    pub fn report(&self) -> PerformanceReport {
        let environment = &self.sampler.host.environment;
        PerformanceReport {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: environment.user_agent().into_owned(),
            viewport: environment.viewport(),
            performance: self.data(),
        }
    }
}

impl Drop for PerformanceMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anas2_core::host::{Clock, FrameCallback, FrameScheduler, HostEnvironment, Viewport};
    use std::borrow::Cow;

    #[derive(Debug)]
    struct FrozenClock;

    impl Clock for FrozenClock {
        fn now_ms(&self) -> f64 {
            0.0
        }
    }

    #[derive(Debug)]
    struct NoFrames;

    impl FrameScheduler for NoFrames {
        fn schedule_frames(&self, _callback: FrameCallback) -> TaskHandle {
            TaskHandle::inactive(FRAME_TASK)
        }
    }

    #[derive(Debug)]
    struct Headless;

    impl HostEnvironment for Headless {
        fn viewport(&self) -> Viewport {
            Viewport::default()
        }

        fn user_agent(&self) -> Cow<'static, str> {
            Cow::Borrowed("headless")
        }
    }

    fn host() -> HostCapabilities {
        HostCapabilities::new(Arc::new(FrozenClock), Arc::new(NoFrames), Arc::new(Headless))
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = MonitorConfig {
            log_interval_ms: 0,
            ..Default::default()
        };
        assert!(PerformanceMonitor::new(config, host()).is_err());
    }

    #[test]
    fn test_disabled_monitor_schedules_nothing() {
        let config = MonitorConfig {
            enabled: false,
            ..Default::default()
        };
        let monitor = PerformanceMonitor::initialize(config, host()).unwrap();

        assert!(!monitor.is_running());
        assert!(monitor.scheduled_tasks().is_empty());
        assert!(monitor.capture_load_timings().is_none());
        assert!(monitor.data().load_times.is_empty());
    }

    #[test]
    fn test_start_is_guarded() {
        let mut monitor = PerformanceMonitor::new(MonitorConfig::default(), host()).unwrap();
        monitor.start();
        monitor.start();

        assert_eq!(monitor.scheduled_tasks(), vec![FRAME_TASK, REPORT_TASK]);
        monitor.stop();
        assert!(!monitor.is_running());
        assert!(monitor.scheduled_tasks().is_empty());
        monitor.stop();
    }

    #[test]
    fn test_frame_with_zero_elapsed_does_not_flush() {
        let monitor = PerformanceMonitor::new(MonitorConfig::default(), host()).unwrap();
        for _ in 0..10 {
            assert_eq!(monitor.sample_frame(), None);
        }
        assert!(monitor.fps().is_empty());
    }

    #[test]
    fn test_check_warning_uses_config() {
        let mut config = MonitorConfig::default();
        config.warning_thresholds.fps = 55.0;
        let monitor = PerformanceMonitor::new(config, host()).unwrap();

        assert!(monitor.check_warning(MetricKind::Fps, 54.0));
        assert!(!monitor.check_warning(MetricKind::Fps, 55.0));
    }
}
