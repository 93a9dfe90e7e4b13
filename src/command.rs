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

use crate::argument::Argument;
use crate::concrete::Concrete;
use crate::definition::Definition;
use crate::error::*;
use crate::input::Input;
use crate::output::Output;
use std::fmt;

/// An alias for Result, which has an arbitrary Error type. This is used to
/// denote the actual Result returned by a caller-provided Command
/// implementation. The Ok value is the command's exit code.
pub type CommandResult<E> = ::std::result::Result<i32, E>;

/// The caller-provided callback trait object which will be called for a
/// particular Command.
pub type CommandCallback<'a, E> = Box<dyn FnMut(&Concrete, &mut Output) -> CommandResult<E> + 'a>;

/// The commands every Application provides on its own.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum BuiltIn {
    Help,
    List,
}

enum Handler<'a, E> {
    BuiltIn(BuiltIn),
    Callback(CommandCallback<'a, E>),
}

/// A command is a single sub-command for a given program. Each command has
/// its own description and Definition, plus the callback which implements it.
pub struct Command<'a, E> {
    name: String,
    description: String,
    usages: Vec<String>,
    definition: Definition,
    handler: Handler<'a, E>,
}

impl<'a, E> Command<'a, E> {
    /// Construct a new Command which accepts the given arguments. This fails
    /// if the arguments don't form a valid Definition.
    pub fn new(
        name: &str,
        description: &str,
        arguments: Vec<Argument>,
        callback: CommandCallback<'a, E>,
    ) -> Result<Self> {
        Command::with_handler(name, description, arguments, Handler::Callback(callback))
    }

    pub(crate) fn builtin(
        name: &str,
        description: &str,
        arguments: Vec<Argument>,
        builtin: BuiltIn,
    ) -> Result<Self> {
        Command::with_handler(name, description, arguments, Handler::BuiltIn(builtin))
    }

    fn with_handler(
        name: &str,
        description: &str,
        arguments: Vec<Argument>,
        handler: Handler<'a, E>,
    ) -> Result<Self> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(Error::InvalidArgument(format!(
                "Invalid command name '{}'.",
                name
            )));
        }
        Ok(Command {
            name: name.to_owned(),
            description: description.to_owned(),
            usages: vec![],
            definition: Definition::from_arguments(arguments)?,
            handler: handler,
        })
    }

    /// The name used to invoke this command.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A human-readable description of what this command does.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Example invocations of this command, for help output.
    pub fn usages(&self) -> &[String] {
        self.usages.as_slice()
    }

    /// Add an example invocation. If it doesn't already start with this
    /// command's name, the name is prepended.
    pub fn add_usage(&mut self, usage: &str) {
        let usage = match usage.starts_with(self.name.as_str()) {
            true => usage.to_owned(),
            false => format!("{} {}", self.name, usage),
        };
        self.usages.push(usage);
    }

    /// The arguments this command accepts on its own.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Returns a one-line usage summary, e.g. "copy [options] [--] <source>".
    pub fn synopsis(&self, short: bool) -> String {
        format!("{} {}", self.name, self.definition.synopsis(short))
            .trim()
            .to_owned()
    }

    /// The arguments this command accepts when run as part of an application
    /// with the given Definition.
    pub fn definition_with_application(&self, application: &Definition) -> Result<Definition> {
        Definition::merge(application, &self.definition)
    }

    /// Resolve the given input against this command's arguments, as run inside
    /// an application with the given Definition.
    pub fn concrete(&self, input: &Input, application: &Definition) -> Result<Concrete> {
        self.definition_with_application(application)?
            .resolve(input)
    }

    pub(crate) fn builtin_kind(&self) -> Option<BuiltIn> {
        match self.handler {
            Handler::BuiltIn(builtin) => Some(builtin),
            Handler::Callback(_) => None,
        }
    }

    /// Call this command's implementation with the given resolved values.
    /// Built-in commands can only be executed by their Application, so for
    /// them this is a no-op which returns None.
    pub(crate) fn execute(&mut self, concrete: &Concrete, output: &mut Output) -> Option<CommandResult<E>> {
        match self.handler {
            Handler::BuiltIn(_) => None,
            Handler::Callback(ref mut callback) => Some(callback.as_mut()(concrete, output)),
        }
    }
}

impl<'a, E> fmt::Debug for Command<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("usages", &self.usages)
            .field("definition", &self.definition)
            .finish()
    }
}

impl<'a, E> PartialEq for Command<'a, E> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
