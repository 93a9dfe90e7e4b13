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

use crate::argument::{Argument, Option, Parameter};
use crate::concrete::{Concrete, Values};
use crate::error::*;
use crate::input::Input;
use crate::value::Value;
use indexmap::IndexMap;
use log::debug;
use std::collections::HashMap;
use std::option::Option as Optional;

/// A Definition is the full set of parameters and options a command accepts.
///
/// Arguments are added one at a time, and each addition is checked against
/// everything added before it. This guarantees that:
///
/// - No two parameters, and no two options, share a name. No two options
///   share a shortcut.
/// - Nothing comes after a complex parameter (it must be last, since it
///   collects all of the remaining positional values).
/// - No required parameter comes after an optional one.
#[derive(Clone, Debug, Default)]
pub struct Definition {
    parameters: IndexMap<String, Parameter>,
    options: IndexMap<String, Option>,
    /// Maps each option shortcut to the full name of its option.
    shortcuts: HashMap<char, String>,
    required_parameter_count: usize,
    has_complex_parameter: bool,
    has_optional_parameter: bool,
}

impl Definition {
    /// Construct a new, empty Definition.
    pub fn new() -> Definition {
        Definition::default()
    }

    /// Construct a new Definition containing all of the given arguments.
    pub fn from_arguments(arguments: Vec<Argument>) -> Result<Definition> {
        let mut definition = Definition::new();
        definition.set_arguments(arguments)?;
        Ok(definition)
    }

    /// Replace all of this Definition's parameters and options with the given
    /// arguments. Parameters keep their relative order.
    pub fn set_arguments(&mut self, arguments: Vec<Argument>) -> Result<()> {
        let mut parameters = vec![];
        let mut options = vec![];
        for argument in arguments {
            match argument {
                Argument::Parameter(p) => parameters.push(p),
                Argument::Option(o) => options.push(o),
            }
        }

        let mut replacement = Definition::new();
        replacement.add_parameters(parameters)?;
        replacement.add_options(options)?;
        *self = replacement;
        Ok(())
    }

    /// Returns this Definition's parameters, in positional order.
    pub fn parameters(&self) -> impl ExactSizeIterator<Item = &Parameter> {
        self.parameters.values()
    }

    /// Looks up a parameter by name.
    pub fn parameter(&self, name: &str) -> Optional<&Parameter> {
        self.parameters.get(name)
    }

    /// Returns the number of parameters which must be given a value.
    pub fn required_parameter_count(&self) -> usize {
        self.required_parameter_count
    }

    /// Replace this Definition's parameters with the given ones. If any of
    /// them is invalid, an error is returned and this Definition is left
    /// untouched.
    pub fn set_parameters(&mut self, parameters: Vec<Parameter>) -> Result<()> {
        let mut replacement = Definition {
            options: self.options.clone(),
            shortcuts: self.shortcuts.clone(),
            ..Definition::default()
        };
        replacement.add_parameters(parameters)?;
        *self = replacement;
        Ok(())
    }

    /// Add each of the given parameters, in order. Parameters added before an
    /// invalid one are kept.
    pub fn add_parameters(&mut self, parameters: Vec<Parameter>) -> Result<()> {
        for parameter in parameters {
            self.add_parameter(parameter)?;
        }
        Ok(())
    }

    /// Add a single parameter after all existing ones.
    pub fn add_parameter(&mut self, parameter: Parameter) -> Result<()> {
        if self.parameters.contains_key(parameter.name()) {
            return Err(Error::Logic(format!(
                "A parameter named '{}' already exists.",
                parameter.name()
            )));
        }
        if self.has_complex_parameter {
            return Err(Error::Logic(format!(
                "Cannot add parameter '{}' after a complex parameter.",
                parameter.name()
            )));
        }
        if parameter.is_required() && self.has_optional_parameter {
            return Err(Error::Logic(format!(
                "Cannot add required parameter '{}' after an optional one.",
                parameter.name()
            )));
        }

        if parameter.is_complex() {
            self.has_complex_parameter = true;
        }
        if parameter.is_required() {
            self.required_parameter_count += 1;
        } else {
            self.has_optional_parameter = true;
        }
        self.parameters
            .insert(parameter.name().to_owned(), parameter);
        Ok(())
    }

    /// Returns this Definition's options, in the order they were added.
    pub fn options(&self) -> impl ExactSizeIterator<Item = &Option> {
        self.options.values()
    }

    /// Looks up an option by its full name.
    pub fn option(&self, name: &str) -> Optional<&Option> {
        self.options.get(name)
    }

    /// Looks up an option by its shortcut.
    pub fn option_by_shortcut(&self, shortcut: char) -> Optional<&Option> {
        self.shortcuts
            .get(&shortcut)
            .and_then(|name| self.options.get(name))
    }

    /// Replace this Definition's options with the given ones. If any of them
    /// is invalid, an error is returned and this Definition is left untouched.
    pub fn set_options(&mut self, options: Vec<Option>) -> Result<()> {
        let mut replacement = Definition {
            parameters: self.parameters.clone(),
            required_parameter_count: self.required_parameter_count,
            has_complex_parameter: self.has_complex_parameter,
            has_optional_parameter: self.has_optional_parameter,
            ..Definition::default()
        };
        replacement.add_options(options)?;
        *self = replacement;
        Ok(())
    }

    /// Add each of the given options, in order. Options added before an
    /// invalid one are kept.
    pub fn add_options(&mut self, options: Vec<Option>) -> Result<()> {
        for option in options {
            self.add_option(option)?;
        }
        Ok(())
    }

    /// Add a single option.
    pub fn add_option(&mut self, option: Option) -> Result<()> {
        if self.options.contains_key(option.name()) {
            return Err(Error::Logic(format!(
                "An option named '{}' already exists.",
                option.name()
            )));
        }
        if let Some(shortcut) = option.shortcut() {
            if self.shortcuts.contains_key(&shortcut) {
                return Err(Error::Logic(format!(
                    "An option with shortcut '{}' already exists.",
                    shortcut
                )));
            }
            self.shortcuts.insert(shortcut, option.name().to_owned());
        }

        self.options.insert(option.name().to_owned(), option);
        Ok(())
    }

    /// Build the Definition used to run a command inside of an application.
    /// The application's parameters come before the command's, and the
    /// command's options come before the application's.
    pub fn merge(application: &Definition, command: &Definition) -> Result<Definition> {
        let mut merged = Definition::new();
        merged.add_parameters(application.parameters().cloned().collect())?;
        merged.add_parameters(command.parameters().cloned().collect())?;
        merged.add_options(command.options().cloned().collect())?;
        merged.add_options(application.options().cloned().collect())?;
        Ok(merged)
    }

    /// Returns a one-line usage summary of this Definition's arguments, e.g.
    /// "[-v|--verbose] [--] <source> [<destination>]". If `short` is true,
    /// the options are summarized as just "[options]".
    pub fn synopsis(&self, short: bool) -> String {
        let options = self.options_synopsis(short);
        let parameters = self.parameters_synopsis();

        if options.is_empty() || parameters.is_empty() {
            format!("{}{}", options, parameters)
        } else {
            format!("{} [--] {}", options, parameters)
        }
    }

    fn options_synopsis(&self, short: bool) -> String {
        if self.options.is_empty() {
            return String::new();
        }
        if short {
            return "[options]".to_owned();
        }
        self.options()
            .map(|o| o.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }

    fn parameters_synopsis(&self) -> String {
        let mut tail = String::new();
        let synopses: Vec<String> = self
            .parameters()
            .map(|p| match p.is_required() {
                true => p.to_string(),
                false => {
                    tail.push(']');
                    format!("[{}", p)
                }
            })
            .collect();
        synopses.join(" ") + tail.as_str()
    }

    /// Returns the positional values of the given input, paired with their
    /// token index. Values captured by one of this Definition's options which
    /// the option doesn't keep are included, in their original order.
    pub(crate) fn positional<'i>(&self, input: &'i Input) -> Vec<(usize, &'i str)> {
        let captured = input.captured_parameters();
        let mut positional: Vec<(usize, &str)> = captured.entries().collect();
        for option in self.options() {
            if let Some(values) = input.option_values(option) {
                let keep = match (option.accept_value(), option.is_complex()) {
                    (false, _) => 0,
                    (true, true) => values.len(),
                    (true, false) => values.len().min(1),
                };
                positional.extend(values.entries().skip(keep));
            }

            // The full name wins over the shortcut, so nothing the shortcut
            // captured is kept.
            if input.long_options().contains_key(option.name()) {
                if let Some(shadowed) = option
                    .shortcut()
                    .and_then(|shortcut| input.short_options().get(&shortcut))
                {
                    positional.extend(shadowed.entries());
                }
            }
        }
        positional.sort_by_key(|&(index, _)| index);
        positional
    }

    /// Resolve the given tokenized input against this Definition, producing
    /// the final value for every parameter and option.
    ///
    /// Any values captured by an option which the option doesn't keep (all
    /// values for boolean flags, all but the first for single-valued options)
    /// are treated as positional values instead, in the order they were
    /// originally given.
    pub fn resolve(&self, input: &Input) -> Result<Concrete> {
        let positional: Vec<&str> = self
            .positional(input)
            .into_iter()
            .map(|(_, v)| v)
            .collect();

        if positional.len() < self.required_parameter_count {
            return Err(Error::Runtime(format!(
                "At least {} parameters are required and only {} are provided.",
                self.required_parameter_count,
                positional.len()
            )));
        }

        let mut parameters = Values::new();
        let mut position = 0;
        for (name, parameter) in &self.parameters {
            let value = match positional.get(position..) {
                Some(remaining) if !remaining.is_empty() => {
                    let value = Value::from_strs(remaining, parameter.is_complex());
                    position += match parameter.is_complex() {
                        false => 1,
                        true => remaining.len(),
                    };
                    value
                }
                _ => parameter.default_value().cloned(),
            };

            match value {
                Some(value) => {
                    parameters.insert(name.clone(), Some(value));
                }
                None if parameter.is_required() => {
                    return Err(Error::Runtime(format!(
                        "No value provided for required parameter '{}'.",
                        name
                    )));
                }
                None => {}
            }
        }

        let mut options = Values::new();
        for (name, option) in &self.options {
            match input.option_values(option) {
                None => {
                    if let Some(default) = option.default_value() {
                        options.insert(name.clone(), Some(default.clone()));
                    }
                }
                Some(values) if values.is_empty() => {
                    if option.is_required() {
                        return Err(Error::Runtime(format!(
                            "Option \"{}\" must provide a value.",
                            name
                        )));
                    }
                    options.insert(name.clone(), option.default_value().cloned());
                }
                Some(values) => {
                    let value = match option.accept_value() {
                        false => None,
                        true => Value::from_strs(values.values(), option.is_complex()),
                    };
                    options.insert(name.clone(), value);
                }
            }
        }

        debug!(
            "Resolved {} parameter(s) and {} option(s) from {} positional value(s)",
            parameters.len(),
            options.len(),
            positional.len()
        );
        Ok(Concrete::new(parameters, options))
    }
}
