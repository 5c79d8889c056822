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

//! Navigation timing recorded by the host as its startup phases complete.

use std::sync::{Arc, Mutex, PoisonError};

use anas2_core::host::{Clock, NavigationTimingSource};
use anas2_core::telemetry::NavigationEntry;

/// A phase boundary of the host's load sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPhase {
    DomainLookupStart,
    DomainLookupEnd,
    ConnectStart,
    ConnectEnd,
    RequestStart,
    ResponseEnd,
}

impl NavigationPhase {
    const COUNT: usize = 6;

    fn index(self) -> usize {
        self as usize
    }
}

/// Collects phase timestamps and exposes them as a single navigation entry.
///
/// No entry is reported until every phase has been marked.
#[derive(Debug)]
pub struct RecordedNavigation {
    clock: Arc<dyn Clock>,
    marks: Mutex<[Option<f64>; NavigationPhase::COUNT]>,
}

impl RecordedNavigation {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            marks: Mutex::new([None; NavigationPhase::COUNT]),
        }
    }

    /// Marks `phase` at the current clock time.
    pub fn mark(&self, phase: NavigationPhase) {
        self.record(phase, self.clock.now_ms());
    }

    /// Marks `phase` at an explicit time.
    pub fn record(&self, phase: NavigationPhase, at_ms: f64) {
        let mut marks = self.marks.lock().unwrap_or_else(PoisonError::into_inner);
        marks[phase.index()] = Some(at_ms);
    }

    /// Returns the entry once all phases are marked.
    pub fn entry(&self) -> Option<NavigationEntry> {
        let marks = *self.marks.lock().unwrap_or_else(PoisonError::into_inner);
        let get = |phase: NavigationPhase| marks[phase.index()];
        Some(NavigationEntry {
            domain_lookup_start: get(NavigationPhase::DomainLookupStart)?,
            domain_lookup_end: get(NavigationPhase::DomainLookupEnd)?,
            connect_start: get(NavigationPhase::ConnectStart)?,
            connect_end: get(NavigationPhase::ConnectEnd)?,
            request_start: get(NavigationPhase::RequestStart)?,
            response_end: get(NavigationPhase::ResponseEnd)?,
        })
    }
}

impl NavigationTimingSource for RecordedNavigation {
    fn navigation_entries(&self) -> Vec<NavigationEntry> {
        self.entry().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::clock::SystemClock;

    #[test]
    fn incomplete_recording_has_no_entry() {
        let navigation = RecordedNavigation::new(Arc::new(SystemClock::new()));
        navigation.record(NavigationPhase::DomainLookupStart, 1.0);
        navigation.record(NavigationPhase::DomainLookupEnd, 3.0);
        assert!(navigation.navigation_entries().is_empty());
    }

    #[test]
    fn complete_recording_yields_one_entry() {
        let navigation = RecordedNavigation::new(Arc::new(SystemClock::new()));
        let phases = [
            (NavigationPhase::DomainLookupStart, 1.0),
            (NavigationPhase::DomainLookupEnd, 3.0),
            (NavigationPhase::ConnectStart, 3.5),
            (NavigationPhase::ConnectEnd, 9.0),
            (NavigationPhase::RequestStart, 9.5),
            (NavigationPhase::ResponseEnd, 40.0),
        ];
        for (phase, at) in phases {
            navigation.record(phase, at);
        }

        let entries = navigation.navigation_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].domain_lookup_end, 3.0);
        assert_eq!(entries[0].response_end, 40.0);
    }

    #[test]
    fn mark_uses_the_clock() {
        let navigation = RecordedNavigation::new(Arc::new(SystemClock::new()));
        navigation.mark(NavigationPhase::RequestStart);
        let marks = navigation.marks.lock().unwrap();
        assert!(marks[NavigationPhase::RequestStart.index()].is_some());
    }
}
