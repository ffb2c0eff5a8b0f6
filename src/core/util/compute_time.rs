// Copyright 2019 Zhizhesihai (Beijing) Technology Limited.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// See the License for the specific language governing permissions and
// limitations under the License.


use std::time;

/// Stopwatch for reporting how long a block of work took.
/// Typical use:
/// let timer = ComputeTime::start("warm");
/// ...
/// info!("done in {}ms", timer.elapsed_ms());
#[derive(Debug)]
pub struct ComputeTime {
    task: &'static str,
    instant: time::Instant,
}

impl ComputeTime {
    pub fn start(task: &'static str) -> Self {
        ComputeTime {
            task,
            instant: time::Instant::now(),
        }
    }

    pub fn task(&self) -> &'static str {
        self.task
    }

    pub fn elapsed_ms(&self) -> u64 {
        Self::elapsed_ms_since(self.instant)
    }

    #[inline]
    pub fn elapsed_ms_since(when: time::Instant) -> u64 {
        let elapsed = when.elapsed();
        elapsed.as_secs() * 1000 + u64::from(elapsed.subsec_nanos()) / 1_000_000
    }
}
