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

use crate::application::Application;
use crate::argument::{Option, Parameter};
use crate::command::Command;
use crate::definition::Definition;
use crate::error::*;
use crate::output::Output;
use crate::value::Value;
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use std::option::Option as Optional;

lazy_static! {
    static ref LINE_BREAK: Regex = Regex::new(r"\s*[\r\n]").unwrap();
}

fn parameter_width(parameter: &Parameter) -> usize {
    parameter.name().len()
}

fn option_width(option: &Option) -> usize {
    let mut width = option.name().len();
    if option.accept_value() {
        // "--name=NAME", or "--name[=NAME]".
        width = width * 2 + 1;
        if option.is_optional() {
            width += 2;
        }
    }
    // "-s, --" or six spaces.
    width + 6
}

fn default_suffix(default: Optional<&Value>) -> String {
    match default {
        None => String::new(),
        Some(default) => format!("<comment> [default: {}]</comment>", default),
    }
}

/// Indent every line of a multi-line description after the first, so they
/// all line up at the description column.
fn indent_description(description: &str, align_width: usize) -> String {
    let indent = format!("\n{}", " ".repeat(align_width + 4));
    LINE_BREAK
        .replace_all(description, NoExpand(indent.as_str()))
        .into_owned()
}

/// Returns the usage line for an option, e.g. "-o, --output=OUTPUT".
fn option_synopsis(option: &Option) -> String {
    let value = match (option.accept_value(), option.is_required()) {
        (false, _) => String::new(),
        (true, true) => format!("={}", option.name().to_uppercase()),
        (true, false) => format!("[={}]", option.name().to_uppercase()),
    };
    let shortcut = match option.shortcut() {
        None => "    ".to_owned(),
        Some(shortcut) => format!("-{}, ", shortcut),
    };
    format!("{}--{}{}", shortcut, option.name(), value)
}

/// A Descriptor renders help text about an application, its commands and
/// their arguments to an Output.
pub struct Descriptor<'o> {
    output: &'o mut Output,
}

impl<'o> Descriptor<'o> {
    /// Construct a Descriptor which writes to the given Output.
    pub fn new(output: &'o mut Output) -> Self {
        Descriptor { output: output }
    }

    fn line(&mut self, message: &str) -> Result<()> {
        self.output.writeln(message, 1)
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        self.line("")?;
        self.line(format!("<comment>{}</comment>", title).as_str())
    }

    /// Describe the application as a whole: its name, general usage, global
    /// options, and built-in commands.
    pub fn describe_application<E>(&mut self, application: &Application<'_, E>) -> Result<()> {
        self.line("")?;
        self.line(application.name().as_str())?;

        self.heading("Usages:")?;
        self.line(" command [parameters] [options] [--] [raw parameters]")?;

        self.describe_definition(application.definition())?;
        self.list_base_commands(application)
    }

    /// List the commands every application provides.
    pub fn list_base_commands<E>(&mut self, application: &Application<'_, E>) -> Result<()> {
        self.heading("Commands:")?;
        self.display_commands(application.base_commands().collect::<Vec<_>>().as_slice())?;
        self.line("  <info>...</info>")
    }

    /// List the application's own commands whose names start with the given
    /// prefix (all of them, if the prefix is empty).
    pub fn list_commands<E>(&mut self, application: &Application<'_, E>, prefix: &str) -> Result<()> {
        let commands = application.commands(prefix);

        self.line("")?;
        if commands.is_empty() {
            return self.line("<comment>No commands</comment>");
        }
        self.line("<comment>Commands:</comment>")?;
        self.display_commands(commands.as_slice())
    }

    fn display_commands<E>(&mut self, commands: &[&Command<'_, E>]) -> Result<()> {
        let align_width = commands.iter().map(|c| c.name().len()).max().unwrap_or(0);
        for command in commands {
            self.line(
                format!(
                    "  <info>{}</info>  {}{}",
                    command.name(),
                    " ".repeat(align_width - command.name().len()),
                    command.description()
                )
                .as_str(),
            )?;
        }
        Ok(())
    }

    /// Describe a single command: what it does, how to invoke it, and the
    /// arguments it accepts.
    pub fn describe_command<E>(&mut self, command: &Command<'_, E>) -> Result<()> {
        if !command.description().is_empty() {
            self.heading("Description:")?;
            self.line(format!("  {}", command.description()).as_str())?;
        }

        self.heading("Usages:")?;
        self.line(format!("  {}", command.synopsis(true)).as_str())?;
        for usage in command.usages() {
            self.line(format!("  {}", usage).as_str())?;
        }

        let definition = command.definition();
        if definition.parameters().len() > 0 || definition.options().len() > 0 {
            self.describe_definition(definition)?;
        }
        Ok(())
    }

    /// Describe every parameter and option in the given Definition, with
    /// their descriptions aligned to a common column.
    pub fn describe_definition(&mut self, definition: &Definition) -> Result<()> {
        let parameters_width = definition.parameters().map(parameter_width).max().unwrap_or(0);
        let options_width = definition.options().map(option_width).max().unwrap_or(0);
        let align_width = parameters_width.max(options_width);

        if parameters_width > 0 {
            self.heading("Parameters:")?;
            for parameter in definition.parameters() {
                self.describe_parameter(parameter, Some(align_width))?;
            }
        }

        if options_width > 0 {
            self.heading("Options:")?;
            for option in definition.options() {
                self.describe_option(option, Some(align_width))?;
            }
        }
        Ok(())
    }

    /// Describe a single parameter. If no alignment width is given, the
    /// description immediately follows the name.
    pub fn describe_parameter(&mut self, parameter: &Parameter, align_width: Optional<usize>) -> Result<()> {
        let width = parameter_width(parameter);
        let align_width = align_width.unwrap_or(width);

        self.line(
            format!(
                "  <info>{}</info>  {}{}{}",
                parameter.name(),
                " ".repeat(align_width.saturating_sub(width)),
                indent_description(parameter.description(), align_width),
                default_suffix(parameter.default_value())
            )
            .as_str(),
        )
    }

    /// Describe a single option. If no alignment width is given, the
    /// description immediately follows the option's usage.
    pub fn describe_option(&mut self, option: &Option, align_width: Optional<usize>) -> Result<()> {
        let width = option_width(option);
        let align_width = align_width.unwrap_or(width);

        self.line(
            format!(
                "  <info>{}</info>  {}{}{}{}",
                option_synopsis(option),
                " ".repeat(align_width.saturating_sub(width)),
                indent_description(option.description(), align_width),
                default_suffix(option.default_value()),
                match option.is_complex() {
                    false => "",
                    true => " <comment>(multiple values allowed)</comment>",
                }
            )
            .as_str(),
        )
    }
}
