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

use std::fmt;

/// A Value is the value associated with a given parameter or option, either as
/// a declared default or after resolving it from command-line input. Complex
/// arguments always have Complex values, and all other arguments always have
/// Single values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// A single string value.
    Single(String),
    /// An ordered list of string values.
    Complex(Vec<String>),
}

impl Value {
    /// Build a Value from the given list of strings. If `complex` is true, the
    /// whole list is kept, otherwise only its first element is. An empty list
    /// has no Value.
    pub fn from_strs<S: AsRef<str>>(values: &[S], complex: bool) -> Option<Value> {
        if values.is_empty() {
            return None;
        }
        Some(match complex {
            false => Value::Single(values[0].as_ref().to_owned()),
            true => Value::Complex(values.iter().map(|v| v.as_ref().to_owned()).collect()),
        })
    }

    /// Returns the single string this Value holds, or None if it is Complex.
    pub fn as_single(&self) -> Option<&str> {
        match *self {
            Value::Single(ref v) => Some(v.as_str()),
            Value::Complex(_) => None,
        }
    }

    /// Returns the list of strings this Value holds, or None if it is Single.
    pub fn as_complex(&self) -> Option<&[String]> {
        match *self {
            Value::Single(_) => None,
            Value::Complex(ref vs) => Some(vs.as_slice()),
        }
    }

    /// Returns all of the strings this Value holds, regardless of its kind.
    pub fn to_vec(&self) -> Vec<String> {
        match *self {
            Value::Single(ref v) => vec![v.clone()],
            Value::Complex(ref vs) => vs.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Single(ref v) => f.write_str(v),
            Value::Complex(ref vs) => f.write_str(vs.join(" ").as_str()),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Single(v.to_owned())
    }
}

impl From<Vec<&str>> for Value {
    fn from(vs: Vec<&str>) -> Self {
        Value::Complex(vs.into_iter().map(|v| v.to_owned()).collect())
    }
}
