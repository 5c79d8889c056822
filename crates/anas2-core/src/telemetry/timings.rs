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

//! Page load timing types.

use serde::{Deserialize, Serialize};

/// Raw phase timestamps of the current page load, in milliseconds since the
/// clock origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// When the DNS lookup started.
    pub domain_lookup_start: f64,
    /// When the DNS lookup finished.
    pub domain_lookup_end: f64,
    /// When the TCP connection started.
    pub connect_start: f64,
    /// When the TCP connection was established.
    pub connect_end: f64,
    /// When the request was sent.
    pub request_start: f64,
    /// When the last byte of the response arrived.
    pub response_end: f64,
}

/// Phase durations derived from a [`NavigationEntry`], in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadTimings {
    /// Time spent resolving the host name.
    pub dns: f64,
    /// Time spent establishing the connection.
    pub tcp: f64,
    /// Time from sending the request to receiving the full response.
    pub request: f64,
    /// Time from the clock origin until the load event fired.
    pub total: f64,
}

impl LoadTimings {
    /// Derives phase durations from a navigation entry and the load-event time.
    pub fn from_entry(entry: &NavigationEntry, total: f64) -> Self {
        Self {
            dns: entry.domain_lookup_end - entry.domain_lookup_start,
            tcp: entry.connect_end - entry.connect_start,
            request: entry.response_end - entry.request_start,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timings_from_entry() {
        let entry = NavigationEntry {
            domain_lookup_start: 2.0,
            domain_lookup_end: 7.5,
            connect_start: 8.0,
            connect_end: 20.0,
            request_start: 21.0,
            response_end: 121.0,
        };

        let timings = LoadTimings::from_entry(&entry, 480.0);
        assert_eq!(timings.dns, 5.5);
        assert_eq!(timings.tcp, 12.0);
        assert_eq!(timings.request, 100.0);
        assert_eq!(timings.total, 480.0);
    }
}
