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

/// capabilities detects which optional escape sequences the terminal
/// supports.
pub mod capabilities;
/// formatter rewrites "<tag>text</tag>" markup into styled text.
pub mod formatter;
/// style defines colors, display options and the escape sequences for them.
pub mod style;
/// write provides a cloneable handle to a shared Write implementation.
pub mod write;

pub use self::capabilities::Capabilities;
pub use self::formatter::Formatter;
pub use self::style::{Color, DisplayOption, Style};
pub use self::write::SharedWriter;

use crate::error::*;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// OutputMode controls what Output does with style tags in messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputMode {
    /// Style tags are rendered as terminal escape sequences.
    Decorate,
    /// Style tags are removed, keeping only their text.
    Plain,
    /// Messages are written exactly as given, tags and all.
    Raw,
    /// Nothing is written at all.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<OutputMode> {
        Ok(match s.trim() {
            "0" => OutputMode::Decorate,
            "1" => OutputMode::Plain,
            "2" => OutputMode::Raw,
            "3" => OutputMode::Quiet,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "Invalid output mode '{}'.",
                    s
                )))
            }
        })
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code = match *self {
            OutputMode::Decorate => 0,
            OutputMode::Plain => 1,
            OutputMode::Raw => 2,
            OutputMode::Quiet => 3,
        };
        write!(f, "{}", code)
    }
}

/// Output is where commands write their messages. Messages may contain style
/// tags, which are handled according to the current OutputMode.
pub struct Output {
    mode: OutputMode,
    formatter: Formatter,
    writer: Box<dyn Write>,
}

impl Output {
    /// Construct an Output which writes decorated messages to stdout.
    pub fn new() -> Result<Output> {
        Ok(Output::with_writer(io::stdout(), Formatter::new(true)?))
    }

    /// Construct an Output which writes to the given writer, using the given
    /// Formatter. The initial mode is Decorate if the Formatter is decorated,
    /// or Plain otherwise.
    pub fn with_writer<W: Write + 'static>(writer: W, formatter: Formatter) -> Output {
        let mode = match formatter.is_decorated() {
            true => OutputMode::Decorate,
            false => OutputMode::Plain,
        };
        Output {
            mode: mode,
            formatter: formatter,
            writer: Box::new(writer),
        }
    }

    /// Returns the current output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Change the output mode.
    pub fn set_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
        self.formatter.set_decorated(mode == OutputMode::Decorate);
    }

    /// Returns the Formatter used to render style tags.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Returns the Formatter used to render style tags, e.g. to register
    /// additional styles.
    pub fn formatter_mut(&mut self) -> &mut Formatter {
        &mut self.formatter
    }

    /// Render the given message according to the current mode, without
    /// writing it.
    pub fn render(&self, message: &str) -> Result<String> {
        Ok(match self.mode {
            OutputMode::Decorate => self.formatter.format(message)?,
            OutputMode::Plain => self.formatter.strip(message),
            OutputMode::Raw => message.to_owned(),
            OutputMode::Quiet => String::new(),
        })
    }

    /// Write the given message.
    pub fn write(&mut self, message: &str) -> Result<()> {
        if self.mode == OutputMode::Quiet {
            return Ok(());
        }
        let rendered = self.render(message)?;
        self.writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Write the given message, followed by the given number of newlines.
    pub fn writeln(&mut self, message: &str, lines: usize) -> Result<()> {
        self.write(message)?;
        if self.mode != OutputMode::Quiet {
            self.writer.write_all("\n".repeat(lines).as_bytes())?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
