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

/// option defines named arguments, which are passed as `--name` or `-n`.
pub mod option;
/// parameter defines positional arguments.
pub mod parameter;

pub use self::option::Option;
pub use self::parameter::Parameter;

use crate::error::*;
use crate::value::Value;
use std::ops::BitOr;
use std::option::Option as Optional;

/// Mode is a bitset which describes how an argument accepts values.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Mode(u32);

impl Mode {
    /// No flags set: an ordinary, optional, single-valued parameter, or a
    /// boolean option which accepts no value.
    pub const NONE: Mode = Mode(0);
    /// The argument accepts (and resolves to) an ordered list of values.
    pub const COMPLEX: Mode = Mode(0b1);
    /// A value must be provided for the argument.
    pub const REQUIRED: Mode = Mode(0b10);
    /// Options only: a value may, but need not, be provided.
    pub const OPTIONAL: Mode = Mode(0b100);

    /// Construct a Mode from raw bits. The bits are validated when the Mode is
    /// used to construct an argument, not here.
    pub const fn from_bits(bits: u32) -> Mode {
        Mode(bits)
    }

    /// Returns the raw bits of this Mode.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Returns true if every flag set in `other` is also set in this Mode.
    pub fn contains(&self, other: Mode) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Mode {
    type Output = Mode;

    fn bitor(self, rhs: Mode) -> Mode {
        Mode(self.0 | rhs.0)
    }
}

/// Argument is either of the two kinds of argument a Definition can hold.
/// This is mainly useful for building a whole Definition from one list.
#[derive(Clone, Debug)]
pub enum Argument {
    /// A positional parameter.
    Parameter(Parameter),
    /// A named option.
    Option(Option),
}

impl From<Parameter> for Argument {
    fn from(p: Parameter) -> Self {
        Argument::Parameter(p)
    }
}

impl From<Option> for Argument {
    fn from(o: Option) -> Self {
        Argument::Option(o)
    }
}

/// The state shared by every kind of argument. Parameter and Option each wrap
/// one of these, and add their own kind-specific validation on top.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Core {
    name: String,
    description: String,
    mode: Mode,
    default: Optional<Value>,
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidArgument(
            "The name cannot be empty.".to_owned(),
        ));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidArgument(format!(
            "The name '{}' cannot contain whitespace.",
            name
        )));
    }
    Ok(())
}

impl Core {
    /// Validate the name and mode of a new argument. `max_mode` is every flag
    /// this kind of argument understands; anything outside of it is rejected.
    pub(crate) fn new(name: &str, description: &str, mode: Mode, max_mode: Mode) -> Result<Core> {
        check_name(name)?;
        if mode.bits() & !max_mode.bits() != 0 {
            return Err(Error::InvalidArgument(format!(
                "The argument mode '{}' is not valid.",
                mode.bits()
            )));
        }

        Ok(Core {
            name: name.to_owned(),
            description: description.to_owned(),
            mode: mode,
            default: None,
        })
    }

    /// Normalize and store the given default values, according to this
    /// argument's mode.
    pub(crate) fn set_default(&mut self, defaults: &[&str]) -> Result<()> {
        if self.is_required() && !defaults.is_empty() {
            return Err(Error::Logic(
                "Cannot set a default value when using REQUIRED mode.".to_owned(),
            ));
        }
        if !self.is_complex() && defaults.len() > 1 {
            return Err(Error::Logic(
                "Multiple default values can only be set when using COMPLEX mode.".to_owned(),
            ));
        }

        self.default = Value::from_strs(defaults, self.is_complex());
        Ok(())
    }

    pub(crate) fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn description(&self) -> &str {
        self.description.as_str()
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn default(&self) -> Optional<&Value> {
        self.default.as_ref()
    }

    pub(crate) fn is_required(&self) -> bool {
        self.mode.contains(Mode::REQUIRED)
    }

    pub(crate) fn is_complex(&self) -> bool {
        self.mode.contains(Mode::COMPLEX)
    }
}
