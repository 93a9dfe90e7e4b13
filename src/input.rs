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

use crate::argument::Option;
use crate::error::*;
use crate::value::Value;
use indexmap::IndexMap;
use log::debug;
use std::collections::VecDeque;
use std::env;
use std::option::Option as Optional;

/// The token which marks the end of options: everything after it is
/// positional, even if it starts with "-".
pub const END_OF_OPTIONS: &str = "--";

/// Captured is an ordered list of raw values, along with the index of the
/// token each value came from. The indices let the resolver put values back
/// in their original order, if an option turns out not to want them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Captured {
    values: Vec<String>,
    indices: Vec<usize>,
}

impl Captured {
    fn push(&mut self, index: usize, value: String) {
        self.indices.push(index);
        self.values.push(value);
    }

    /// The raw values, in the order they were given.
    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }

    /// The index (in the original token list) of each value.
    pub fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Each value paired with its token index.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.indices
            .iter()
            .cloned()
            .zip(self.values.iter().map(|v| v.as_str()))
    }

    /// Returns true if no values were captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of values captured.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Which option, if any, bare values are currently being attached to.
enum Target {
    Parameters,
    Long(String),
    Short(char),
}

/// Input is the result of splitting a raw list of command-line tokens into
/// positional values, long options ("--name") and short options ("-n").
///
/// Input knows nothing about which options exist or how many values they
/// take; every bare value following an option is captured by it. Deciding
/// which of those values to keep is left to `Definition::resolve`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Input {
    tokens: Vec<String>,
    parameters: Captured,
    long_options: IndexMap<String, Captured>,
    short_options: IndexMap<char, Captured>,
}

impl Input {
    /// Tokenize the given list of command-line tokens. This fails only if one
    /// of the tokens is a lone "-".
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Input> {
        let mut input = Input {
            tokens: tokens.iter().map(|t| t.as_ref().to_owned()).collect(),
            parameters: Captured::default(),
            long_options: IndexMap::new(),
            short_options: IndexMap::new(),
        };
        input.parse()?;
        debug!(
            "Tokenized {:?} into {} parameter(s), {} long option(s) and {} short option(s)",
            input.tokens,
            input.parameters.len(),
            input.long_options.len(),
            input.short_options.len()
        );
        Ok(input)
    }

    /// Tokenize this process's command-line arguments, omitting the first one
    /// (the executable).
    pub fn from_env() -> Result<Input> {
        let tokens: Vec<String> = env::args().skip(1).collect();
        Input::new(tokens.as_slice())
    }

    fn parse(&mut self) -> Result<()> {
        let mut queue: VecDeque<(usize, String)> =
            self.tokens.iter().cloned().enumerate().collect();
        let mut target = Target::Parameters;

        while let Some((index, token)) = queue.pop_front() {
            if token == END_OF_OPTIONS {
                for (index, token) in queue.drain(..) {
                    self.parameters.push(index, token);
                }
            } else if let Some(name) = token.strip_prefix("--") {
                target = self.parse_long_option(index, name);
            } else if let Some(name) = token.strip_prefix('-') {
                target = self.parse_short_option(name)?;
            } else {
                match target {
                    Target::Parameters => self.parameters.push(index, token),
                    Target::Long(ref name) => self
                        .long_options
                        .entry(name.clone())
                        .or_default()
                        .push(index, token),
                    Target::Short(shortcut) => self
                        .short_options
                        .entry(shortcut)
                        .or_default()
                        .push(index, token),
                }
            }
        }

        Ok(())
    }

    fn parse_long_option(&mut self, index: usize, name: &str) -> Target {
        let (name, value) = match name.find('=') {
            None => (name, None),
            Some(eq) => (&name[..eq], Some(&name[eq + 1..])),
        };
        let captured = self.long_options.entry(name.to_owned()).or_default();
        if let Some(value) = value {
            captured.push(index, value.to_owned());
        }
        Target::Long(name.to_owned())
    }

    fn parse_short_option(&mut self, name: &str) -> Result<Target> {
        let shortcuts: Vec<char> = name.chars().collect();
        let (last, stacked) = match shortcuts.split_last() {
            None => {
                return Err(Error::Runtime(
                    "The option shortcut cannot be empty.".to_owned(),
                ))
            }
            Some(split) => split,
        };

        // Every shortcut but the last is a flag; only the last one can take
        // values.
        for &shortcut in stacked {
            self.short_options.entry(shortcut).or_default();
        }
        self.short_options.entry(*last).or_default();
        Ok(Target::Short(*last))
    }

    /// Returns the raw tokens this Input was built from.
    pub fn tokens(&self) -> &[String] {
        self.tokens.as_slice()
    }

    /// Returns all of the positional values, in order.
    pub fn parameters(&self) -> &[String] {
        self.parameters.values()
    }

    /// Returns the positional values along with their token indices.
    pub fn captured_parameters(&self) -> &Captured {
        &self.parameters
    }

    /// Returns every long option given, mapped to its captured values.
    pub fn long_options(&self) -> &IndexMap<String, Captured> {
        &self.long_options
    }

    /// Returns every short option given, mapped to its captured values.
    pub fn short_options(&self) -> &IndexMap<char, Captured> {
        &self.short_options
    }

    /// Returns true if there is a positional value at the given position.
    pub fn has_parameter(&self, position: usize) -> bool {
        position < self.parameters.len()
    }

    /// Returns the positional value at the given position. If `complex` is
    /// true, this position and all of the ones after it are returned together
    /// instead.
    pub fn parameter_value(&self, position: usize, complex: bool) -> Optional<Value> {
        match self.parameters.values().get(position..) {
            None => None,
            Some(values) => Value::from_strs(values, complex),
        }
    }

    /// Returns true if the given option was passed, either by name or by
    /// shortcut.
    pub fn has_option(&self, option: &Option) -> bool {
        self.option_values(option).is_some()
    }

    /// Returns the values captured for the given option. The option's full
    /// name is checked first; its shortcut is only checked if the full name
    /// was not given at all.
    pub fn option_values(&self, option: &Option) -> Optional<&Captured> {
        self.long_options.get(option.name()).or_else(|| {
            option
                .shortcut()
                .and_then(|shortcut| self.short_options.get(&shortcut))
        })
    }

    /// Build a new Input from this one's raw tokens, skipping the first
    /// `start` of them.
    pub fn tail(&self, start: usize) -> Result<Input> {
        Input::new(self.tokens.get(start..).unwrap_or(&[]))
    }
}
