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

/// fn_instrumentation provides utilities for instrumenting command callbacks
/// during unit tests.
pub mod fn_instrumentation;

pub use self::fn_instrumentation::FnInstrumentation;

use crate::error::*;
use crate::output::{Capabilities, Formatter, Output, SharedWriter};

/// Construct an Output which writes into an in-memory buffer, rendering for
/// a terminal with only basic capabilities. The returned SharedWriter can be
/// used to inspect what was written.
pub fn buffered_output(decorated: bool) -> Result<(Output, SharedWriter<Vec<u8>>)> {
    let buffer = SharedWriter::buffer();
    let output = Output::with_writer(
        buffer.clone(),
        Formatter::with_capabilities(decorated, Capabilities::basic())?,
    );
    Ok((output, buffer))
}
