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

use crate::argument::{Mode, Option, Parameter};
use crate::command::{BuiltIn, Command, CommandResult};
use crate::concrete::Concrete;
use crate::definition::Definition;
use crate::descriptor::Descriptor;
use crate::error::*;
use crate::input::Input;
use crate::output::{Output, OutputMode};
use indexmap::IndexMap;
use log::{debug, error, warn};
use std::fmt::Display;
use std::option::Option as Optional;
use std::process;

/// The integer which is returned from main() if the program exits successfully.
pub const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits with any
/// error.
pub const EXIT_FAILURE: i32 = 1;
/// The largest exit code a process can portably return.
pub const MAX_EXIT_CODE: i32 = 255;

/// The name of the application-wide option which selects the OutputMode.
pub const OUTPUT_OPTION: &str = "output";

const HELP_COMMAND: &str = "help";
const HELP_PARAMETER: &str = "command_name";
const LIST_COMMAND: &str = "list";
const LIST_PARAMETER: &str = "namespace";

/// Clamp a command's exit code to the range a process can return. Codes for
/// failed commands are never lower than EXIT_FAILURE, so an error can't be
/// mistaken for success.
pub fn normalize_code(code: i32, error: bool) -> i32 {
    let min = match error {
        false => EXIT_SUCCESS,
        true => EXIT_FAILURE,
    };
    code.max(min).min(MAX_EXIT_CODE)
}

fn help_command<'a, E>() -> Result<Command<'a, E>> {
    Command::builtin(
        HELP_COMMAND,
        "Displays help for a command",
        vec![Parameter::new(HELP_PARAMETER, Mode::NONE, "The command name", &[HELP_COMMAND])?.into()],
        BuiltIn::Help,
    )
}

fn list_command<'a, E>() -> Result<Command<'a, E>> {
    Command::builtin(
        LIST_COMMAND,
        "Lists commands",
        vec![Parameter::new(LIST_PARAMETER, Mode::NONE, "The namespace name", &[])?.into()],
        BuiltIn::List,
    )
}

/// An Application is a set of Commands, dispatched to by name (the first
/// positional token). Every Application provides the built-in "help" and
/// "list" commands, as well as an `--output` / `-O` option which controls how
/// style tags in messages are rendered.
pub struct Application<'a, E> {
    name: String,
    version: String,
    base_commands: IndexMap<String, Command<'a, E>>,
    commands: IndexMap<String, Command<'a, E>>,
    definition: Definition,
}

impl<'a, E> Application<'a, E> {
    /// Construct a new Application with just the built-in commands.
    pub fn new(name: &str, version: &str) -> Result<Self> {
        let mut base_commands = IndexMap::new();
        for command in vec![help_command()?, list_command()?] {
            base_commands.insert(command.name().to_owned(), command);
        }

        Ok(Application {
            name: name.to_owned(),
            version: version.to_owned(),
            base_commands: base_commands,
            commands: IndexMap::new(),
            definition: Definition::from_arguments(vec![Option::new(
                OUTPUT_OPTION,
                Some('O'),
                Mode::OPTIONAL,
                "Output setting: 0(decorate tags), 1(strip tags), 2(raw output), 3(no output)",
                &["0"],
            )?
            .into()])?,
        })
    }

    /// Returns this application's display name, including its version.
    pub fn name(&self) -> String {
        format!("{} <info>v{}</info>", self.name, self.version)
    }

    /// Returns the application-wide Definition, whose options are accepted by
    /// every command.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Register a command, replacing any previously registered command with
    /// the same name.
    pub fn add(&mut self, command: Command<'a, E>) {
        if self.base_commands.contains_key(command.name()) {
            warn!(
                "Command '{}' is shadowed by the built-in command of the same name",
                command.name()
            );
        }
        self.commands.insert(command.name().to_owned(), command);
    }

    /// Returns true if a command with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.base_commands.contains_key(name) || self.commands.contains_key(name)
    }

    /// Look up a command by name. Built-in commands take precedence.
    pub fn get(&self, name: &str) -> Result<&Command<'a, E>> {
        self.base_commands
            .get(name)
            .or_else(|| self.commands.get(name))
            .ok_or_else(|| Error::CommandNotFound(format!("Command \"{}\" is not defined.", name)))
    }

    /// Returns the built-in commands.
    pub fn base_commands(&self) -> impl Iterator<Item = &Command<'a, E>> {
        self.base_commands.values()
    }

    /// Returns the registered (non built-in) commands whose names start with
    /// the given prefix, sorted by name.
    pub fn commands(&self, prefix: &str) -> Vec<&Command<'a, E>> {
        let mut commands: Vec<&Command<'a, E>> = self
            .commands
            .values()
            .filter(|c| c.name().starts_with(prefix))
            .collect();
        commands.sort_by(|a, b| a.name().cmp(b.name()));
        commands
    }
}

impl<'a, E: Display> Application<'a, E> {
    fn apply_output_mode(&self, concrete: &Concrete, output: &mut Output) {
        let setting = match concrete.option(OUTPUT_OPTION) {
            None => return,
            Some(setting) => setting.to_string(),
        };
        match setting.parse::<OutputMode>() {
            Ok(mode) => output.set_mode(mode),
            Err(e) => warn!("Ignoring output setting: {}", e),
        }
    }

    fn help(&self, concrete: &Concrete, output: &mut Output) -> Result<()> {
        let name = concrete
            .parameter(HELP_PARAMETER)
            .map_or(HELP_COMMAND.to_owned(), |v| v.to_string());
        let command = self.get(name.as_str())?;
        Descriptor::new(output).describe_command(command)
    }

    fn list(&self, concrete: &Concrete, output: &mut Output) -> Result<()> {
        let prefix = concrete
            .parameter(LIST_PARAMETER)
            .map_or(String::new(), |v| v.to_string());
        Descriptor::new(output).list_commands(self, prefix.as_str())
    }

    fn dispatch(&mut self, name: &str, input: &Input, output: &mut Output) -> Result<CommandResult<E>> {
        let command = self.get(name)?;
        let concrete = command.concrete(input, &self.definition)?;
        debug!("Dispatching command '{}' with {:?}", name, concrete);

        match command.builtin_kind() {
            Some(BuiltIn::Help) => self.help(&concrete, output).map(|_| Ok(EXIT_SUCCESS)),
            Some(BuiltIn::List) => self.list(&concrete, output).map(|_| Ok(EXIT_SUCCESS)),
            None => self
                .commands
                .get_mut(name)
                .and_then(|command| command.execute(&concrete, output))
                .ok_or_else(|| {
                    Error::CommandNotFound(format!("Command \"{}\" is not defined.", name))
                }),
        }
    }

    fn report<M: Display>(&self, message: M, output: &mut Output) -> i32 {
        if let Err(e) = output.writeln(format!("<error>\nError: {}</error>", message).as_str(), 1) {
            error!("Failed to write error message '{}': {}", message, e);
        }
        normalize_code(EXIT_FAILURE, true)
    }

    /// Returns the token naming the command to run, and its index. This is
    /// the first positional value, unless an option this application doesn't
    /// know (e.g. a flag of the command itself) captured a command's name
    /// before it.
    fn command_name<'i>(&self, input: &'i Input) -> Optional<(usize, &'i str)> {
        let mut candidates: Vec<(usize, &str, bool)> = self
            .definition
            .positional(input)
            .into_iter()
            .map(|(index, value)| (index, value, true))
            .collect();

        let unknown_long = input
            .long_options()
            .iter()
            .filter(|(name, _)| self.definition.option(name.as_str()).is_none())
            .map(|(_, captured)| captured);
        let unknown_short = input
            .short_options()
            .iter()
            .filter(|(shortcut, _)| self.definition.option_by_shortcut(**shortcut).is_none())
            .map(|(_, captured)| captured);
        for captured in unknown_long.chain(unknown_short) {
            candidates.extend(captured.entries().map(|(index, value)| (index, value, false)));
        }

        candidates.sort_by_key(|&(index, _, _)| index);
        candidates
            .into_iter()
            .find(|&(_, value, positional)| positional || self.has(value))
            .map(|(index, value, _)| (index, value))
    }

    /// Run this application with the given input, writing to the given
    /// Output. The first positional token names the command to run; it is
    /// given every other token, so the command's own options may come before
    /// its name. If no command is named, the application itself is described
    /// instead.
    ///
    /// Any error, whether from resolving arguments or returned by the command
    /// itself, is written to the Output. The returned exit code is always in
    /// the range [0, 255].
    pub fn run(&mut self, input: &Input, output: &mut Output) -> i32 {
        let concrete = match self.definition.resolve(input) {
            Ok(concrete) => concrete,
            Err(e) => return self.report(e, output),
        };
        self.apply_output_mode(&concrete, output);

        let (index, name) = match self.command_name(input) {
            Some((index, name)) => (index, name.to_owned()),
            None => {
                let described = Descriptor::new(output).describe_application(&*self);
                return match described {
                    Ok(_) => EXIT_SUCCESS,
                    Err(e) => self.report(e, output),
                };
            }
        };

        // The command gets every token except its own name.
        let tokens: Vec<&String> = input
            .tokens()
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, token)| token)
            .collect();
        let command_input = match Input::new(tokens.as_slice()) {
            Ok(command_input) => command_input,
            Err(e) => return self.report(e, output),
        };

        let code = match self.dispatch(name.as_str(), &command_input, output) {
            Err(e) => self.report(e, output),
            Ok(Err(e)) => self.report(e, output),
            Ok(Ok(code)) => normalize_code(code, false),
        };
        if let Err(e) = output.flush() {
            error!("Failed to flush output: {}", e);
        }
        code
    }
}

/// Runs the given Application with this process's command-line arguments,
/// writing to stdout.
///
/// This function exits this process with the resulting exit code. Like
/// `std::process::exit`, because this function never returns and it terminates
/// the process, no destructors on the current stack or any other thread's
/// stack will be run. The caller should ensure that this function is called
/// from the only thread, and that any destructors which need to be run are in
/// the stack of the command callback.
pub fn main_impl<E: Display>(mut application: Application<'_, E>) -> ! {
    let input = match Input::from_env() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error parsing command-line arguments: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };
    let mut output = match Output::new() {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error initializing output: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };
    process::exit(application.run(&input, &mut output));
}
