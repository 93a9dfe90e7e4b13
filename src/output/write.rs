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

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// SharedWriter wraps a Write implementation so several handles (e.g. an
/// Output and the test inspecting what it wrote) can use the same underlying
/// writer.
pub struct SharedWriter<T: Write> {
    writer: Arc<Mutex<T>>,
}

impl<T: Write> SharedWriter<T> {
    /// Wrap the given writer.
    pub fn new(writer: T) -> Self {
        SharedWriter {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Lock the underlying writer for direct access. A writer poisoned by a
    /// panicking thread is still returned, since its contents remain usable.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SharedWriter<Vec<u8>> {
    /// Construct a SharedWriter which writes into an in-memory buffer.
    pub fn buffer() -> Self {
        SharedWriter::new(vec![])
    }

    /// Returns everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(self.lock().as_slice()).into_owned()
    }
}

impl<T: Write> Write for SharedWriter<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock().flush()
    }
}

// Clone can't be derived, since that would require T: Clone.
impl<T: Write> Clone for SharedWriter<T> {
    fn clone(&self) -> Self {
        SharedWriter {
            writer: self.writer.clone(),
        }
    }
}
