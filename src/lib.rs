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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! bdrck_console turns the tokens a user typed on the command line into
//! resolved, validated parameter and option values, dispatches them to
//! commands, and renders styled help text back to the terminal.
//!
//! The core is `Definition::resolve`, which binds an `Input` (the tokenized
//! command line) to a `Definition` (the parameters and options a command
//! accepts), producing a `Concrete` set of values.

/// application dispatches input to registered commands by name.
pub mod application;
/// argument defines the two kinds of argument: positional parameters and
/// named options.
pub mod argument;
/// command defines a single named sub-command and its callback.
pub mod command;
/// concrete holds the resolved values for one invocation.
pub mod concrete;
/// definition defines the full set of arguments a command accepts, and
/// resolves input against them.
pub mod definition;
/// descriptor renders help text for applications, commands and arguments.
pub mod descriptor;
/// error defines error types specific to bdrck_console, which properly
/// aggregates errors from all of its dependencies.
pub mod error;
/// input splits raw command-line tokens into positional values and options.
pub mod input;
/// logging provides a Logger implementation which renders records with the
/// console's style tags.
#[cfg(feature = "logging")]
pub mod logging;
/// output provides styled, mode-aware writing of messages to a terminal.
pub mod output;
/// testing provides utilities which are useful for unit testing commands.
#[cfg(feature = "testing")]
pub mod testing;
/// value defines the values an argument can resolve to.
pub mod value;

pub use crate::application::{main_impl, normalize_code, Application};
pub use crate::argument::{Argument, Mode, Option, Parameter};
pub use crate::command::{Command, CommandCallback, CommandResult};
pub use crate::concrete::Concrete;
pub use crate::definition::Definition;
pub use crate::input::Input;
pub use crate::output::{Output, OutputMode};
pub use crate::value::Value;

// Tests rely on the testing and logging modules. Don't bother running tests
// unless all features are enabled.
#[cfg(all(feature = "logging", feature = "testing"))]
#[cfg(test)]
mod tests;
