// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::concrete::Concrete;
use std::sync::{Mutex, MutexGuard};

/// This is a structure which contains the state relating to instrumenting a
/// command callback. The callback records each call (and the values it was
/// called with) through a shared reference, so the test can inspect them
/// afterwards. Because it has internal synchronization, this can be done
/// without retaining a mutable reference.
#[derive(Debug, Default)]
pub struct FnInstrumentation {
    calls: Mutex<Vec<Concrete>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl FnInstrumentation {
    /// Construct a new instrumentation state, with no calls recorded.
    pub fn new() -> FnInstrumentation {
        FnInstrumentation::default()
    }

    /// Record that the function being instrumented was called with the given
    /// resolved values.
    pub fn record_call(&self, concrete: &Concrete) {
        lock(&self.calls).push(concrete.clone());
    }

    /// Return the current number of calls recorded.
    pub fn get_call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Return the values the most recent call was made with, if any.
    pub fn last_call(&self) -> Option<Concrete> {
        lock(&self.calls).last().cloned()
    }
}
