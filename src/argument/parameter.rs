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

use crate::argument::{Core, Mode};
use crate::error::*;
use crate::value::Value;
use std::fmt;

/// A parameter is a positional argument. Its value is identified purely by
/// its position in the list of command-line arguments, not by name.
///
/// A parameter may be REQUIRED (a value must be given), and it may be COMPLEX
/// (it collects all of the remaining positional values). Whether these make
/// sense given a command's *other* parameters is checked by the Definition
/// the parameter is added to, not here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parameter {
    core: Core,
}

impl Parameter {
    /// Construct a new Parameter. This fails if the name or mode are invalid,
    /// or if the default values contradict the mode (a REQUIRED parameter
    /// can't have a default, and only COMPLEX parameters can have more than
    /// one).
    pub fn new(name: &str, mode: Mode, description: &str, defaults: &[&str]) -> Result<Parameter> {
        let mut core = Core::new(name, description, mode, Mode::COMPLEX | Mode::REQUIRED)?;
        core.set_default(defaults)?;
        Ok(Parameter { core: core })
    }

    /// Returns this parameter's name.
    pub fn name(&self) -> &str {
        self.core.name()
    }

    /// Returns the human-readable description of this parameter.
    pub fn description(&self) -> &str {
        self.core.description()
    }

    /// Returns the mode this parameter was constructed with.
    pub fn mode(&self) -> Mode {
        self.core.mode()
    }

    /// Returns this parameter's default value, if it has one.
    pub fn default_value(&self) -> Option<&Value> {
        self.core.default()
    }

    /// Returns true if a value must be provided for this parameter.
    pub fn is_required(&self) -> bool {
        self.core.is_required()
    }

    /// Returns true if this parameter collects more than one value.
    pub fn is_complex(&self) -> bool {
        self.core.is_complex()
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())?;
        if self.is_complex() {
            f.write_str("...")?;
        }
        Ok(())
    }
}
