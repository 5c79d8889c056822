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

//! Process memory probe.
//!
//! Native processes have no managed heap counter, so the probe reports the
//! resident set size of the current process as reported by `sysinfo`.

use std::sync::{Mutex, PoisonError};

use anas2_core::host::HeapProbe;
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

/// Reports the current process's resident memory in bytes.
#[derive(Debug)]
pub struct ProcessHeapProbe {
    pid: Pid,
    system: Mutex<System>,
}

impl ProcessHeapProbe {
    /// Creates a probe for the current process, or `None` if the platform
    /// cannot identify it.
    pub fn detect() -> Option<Self> {
        match sysinfo::get_current_pid() {
            Ok(pid) => Some(Self {
                pid,
                system: Mutex::new(System::new()),
            }),
            Err(e) => {
                log::info!("Process memory telemetry unavailable: {}", e);
                None
            }
        }
    }
}

impl HeapProbe for ProcessHeapProbe {
    fn used_heap_bytes(&self) -> Option<u64> {
        let mut system = self.system.lock().unwrap_or_else(PoisonError::into_inner);
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        system.process(self.pid).map(|process| process.memory())
    }
}
