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

use thiserror::Error;

/// Error is a structure which denotes all of the possible kinds of errors
/// bdrck_console can produce, including errors from any of its underlying
/// dependencies.
#[derive(Debug, Error)]
pub enum Error {
    /// A command was looked up by name, but no such command was registered.
    #[error("{0}")]
    CommandNotFound(String),
    /// An error encountered while trying to interact with environment
    /// variables.
    #[error("{0}")]
    EnvVar(#[from] std::env::VarError),
    /// Errors akin to EINVAL - essentially, an argument passed into a function
    /// was invalid in some way. For this crate, this is generally a malformed
    /// argument declaration (a bad name, mode or shortcut), or a malformed
    /// style.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An I/O error, generally encountered when writing output.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// A declaration which is well-formed on its own, but which contradicts
    /// some other part of the declaration (e.g. a required argument with a
    /// default value, or two options sharing a name). This signals a bug in
    /// the program defining its commands, not a user error.
    #[error("logic error: {0}")]
    Logic(String),
    /// An error encountered in either parsing or applying a regular expression.
    #[error("{0}")]
    Regex(#[from] regex::Error),
    /// The command-line input given by the user could not be resolved against
    /// a definition (too few parameters, a missing option value, ...).
    #[error("{0}")]
    Runtime(String),
    /// An error encountered when attempting to set the global Logger
    /// implementation.
    #[cfg(feature = "logging")]
    #[error("{0}")]
    SetLogger(#[from] log::SetLoggerError),
}

/// A Result type which uses bdrck_console's internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
