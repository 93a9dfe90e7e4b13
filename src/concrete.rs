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

use crate::value::Value;
use std::collections::HashMap;

/// A map from argument name to its resolved value. A name which is present
/// but maps to None was given without any value (e.g. a boolean flag).
pub type Values = HashMap<String, Option<Value>>;

/// Concrete is the final, resolved set of parameter and option values for
/// one invocation of a command. It is produced by `Definition::resolve`, and
/// is read-only afterwards.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Concrete {
    parameters: Values,
    options: Values,
}

impl Concrete {
    /// Construct a Concrete from already-resolved values.
    pub fn new(parameters: Values, options: Values) -> Concrete {
        Concrete {
            parameters: parameters,
            options: options,
        }
    }

    /// Returns true if the named parameter has a value.
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Returns the value of the named parameter, if any.
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name).and_then(|v| v.as_ref())
    }

    /// Returns true if the named option was resolved, even if it has no
    /// value (a boolean flag that was passed is present, but valueless).
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Returns the value of the named option, if any.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name).and_then(|v| v.as_ref())
    }

    /// Returns every resolved parameter.
    pub fn parameters(&self) -> &Values {
        &self.parameters
    }

    /// Returns every resolved option.
    pub fn options(&self) -> &Values {
        &self.options
    }
}
