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
use std::option::Option as Optional;

/// An option is a named argument to a command. It is passed either by its
/// full name ("--name") or by its single-character shortcut ("-n").
///
/// An option with neither REQUIRED nor OPTIONAL set is a boolean flag: it
/// accepts no value, and is simply present or not. A REQUIRED option must be
/// given a value whenever it is passed. An OPTIONAL option may be passed
/// without a value, in which case it takes on its default value; for this
/// reason OPTIONAL options must always have a default, and other options
/// never do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Option {
    core: Core,
    shortcut: Optional<char>,
}

fn check_shortcut(shortcut: Optional<char>) -> Result<()> {
    if let Some(shortcut) = shortcut {
        if shortcut.is_whitespace() || shortcut == '-' {
            return Err(Error::InvalidArgument(format!(
                "The option shortcut '{}' must be a non-whitespace character other than '-'.",
                shortcut
            )));
        }
    }
    Ok(())
}

impl Option {
    /// Construct a new Option. This fails if the name, mode or shortcut are
    /// malformed, or if the mode and default values contradict each other.
    pub fn new(
        name: &str,
        shortcut: Optional<char>,
        mode: Mode,
        description: &str,
        defaults: &[&str],
    ) -> Result<Option> {
        let mut core = Core::new(
            name,
            description,
            mode,
            Mode::COMPLEX | Mode::REQUIRED | Mode::OPTIONAL,
        )?;

        let optional = mode.contains(Mode::OPTIONAL);
        if core.is_required() && optional {
            return Err(Error::Logic(
                "Option modes REQUIRED and OPTIONAL cannot coexist.".to_owned(),
            ));
        }
        if core.is_complex() && !(core.is_required() || optional) {
            return Err(Error::Logic(
                "Option mode COMPLEX cannot exist without REQUIRED or OPTIONAL.".to_owned(),
            ));
        }

        check_shortcut(shortcut)?;

        if optional == defaults.is_empty() {
            return Err(Error::Logic(format!(
                "Option '{}' must have a default value if and only if its mode contains OPTIONAL.",
                name
            )));
        }
        core.set_default(defaults)?;

        Ok(Option {
            core: core,
            shortcut: shortcut,
        })
    }

    /// A convenience constructor for a boolean flag, which accepts no value.
    pub fn flag(name: &str, shortcut: Optional<char>, description: &str) -> Result<Option> {
        Option::new(name, shortcut, Mode::NONE, description, &[])
    }

    /// Returns this option's full name.
    pub fn name(&self) -> &str {
        self.core.name()
    }

    /// Returns this option's single-character shortcut, if it has one.
    pub fn shortcut(&self) -> Optional<char> {
        self.shortcut
    }

    /// Returns the human-readable description of this option.
    pub fn description(&self) -> &str {
        self.core.description()
    }

    /// Returns the mode this option was constructed with.
    pub fn mode(&self) -> Mode {
        self.core.mode()
    }

    /// Returns this option's default value, if it has one.
    pub fn default_value(&self) -> Optional<&Value> {
        self.core.default()
    }

    /// Returns true if a value must be provided whenever this option is
    /// passed.
    pub fn is_required(&self) -> bool {
        self.core.is_required()
    }

    /// Returns true if this option collects more than one value.
    pub fn is_complex(&self) -> bool {
        self.core.is_complex()
    }

    /// Returns true if this option may be passed with or without a value.
    pub fn is_optional(&self) -> bool {
        self.core.mode().contains(Mode::OPTIONAL)
    }

    /// Returns true if this option accepts any value at all (as opposed to
    /// being a simple boolean flag).
    pub fn accept_value(&self) -> bool {
        self.is_required() || self.is_optional()
    }
}

impl fmt::Display for Option {
    /// Formats this option the way it appears in a command's synopsis, e.g.
    /// "[-o|--output OUTPUT]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        if let Some(shortcut) = self.shortcut {
            write!(f, "-{}|", shortcut)?;
        }
        write!(f, "--{}", self.name())?;
        if self.is_optional() {
            write!(f, " [{}]", self.name().to_uppercase())?;
        } else if self.is_required() {
            write!(f, " {}", self.name().to_uppercase())?;
        }
        f.write_str("]")
    }
}
