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

use crate::error::*;
use crate::output::{Capabilities, Formatter, SharedWriter};
use log::{self, Level, LevelFilter, Log, Metadata, Record};
use regex::Regex;
use std::env;
use std::io::{self, Write};
use std::str::FromStr;

const RUST_LOG_ENV_VAR: &str = "RUST_LOG";

/// A LogOutputFactory returns a handle to wherever log output should be
/// written, each time the Logger needs to write something.
pub type LogOutputFactory = Box<dyn Fn() -> Box<dyn Write> + Send + Sync>;

/// Returns a LogOutputFactory which always writes to the given writer.
pub fn new_log_output_factory<T: Write + Send + 'static>(writer: T) -> LogOutputFactory {
    let writer = SharedWriter::new(writer);
    Box::new(move || Box::new(writer.clone()))
}

/// Parse a log::LevelFilter ("off", "error", ..., "trace") from a string,
/// ignoring case and surrounding whitespace.
pub fn parse_log_level_filter(s: &str) -> Result<LevelFilter> {
    s.trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("invalid LevelFilter '{}'", s)))
}

/// A LogFilter is a single filter, perhaps one of many, that can be applied to
/// log messages before actually outputting them.
#[derive(Debug)]
pub struct LogFilter {
    /// This LogFilter is applied to any modules which match this regular
    /// expression (anchored at the start of the module path). If this is None
    /// instead, it is applied to *all* modules.
    pub module: Option<Regex>,

    /// The LevelFilter which should be applied to matching modules.
    pub level: LevelFilter,
}

impl LogFilter {
    /// The LevelFilter this LogFilter applies to the given module, or None if
    /// it does not match the module at all.
    pub fn max_level_for(&self, module_path: &str) -> Option<LevelFilter> {
        match self.module {
            None => Some(self.level),
            Some(ref module) => match module.is_match(module_path) {
                false => None,
                true => Some(self.level),
            },
        }
    }
}

impl FromStr for LogFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<LogFilter> {
        match s.rfind('=') {
            None => Ok(LogFilter {
                module: None,
                level: parse_log_level_filter(s)?,
            }),
            Some(eq_pos) => Ok(LogFilter {
                module: Some(Regex::new(format!("^{}", &s[..eq_pos]).as_str())?),
                level: parse_log_level_filter(&s[eq_pos + 1..])?,
            }),
        }
    }
}

/// LogFilters is the full set of filters a Logger applies to log messages
/// before actually outputting them.
#[derive(Debug, Default)]
pub struct LogFilters(pub Vec<LogFilter>);

impl LogFilters {
    /// Returns the LevelFilter which should be applied to the given module. If
    /// no filters match it, everything is enabled (Trace). If several match,
    /// the most restrictive one wins.
    pub fn max_level_for(&self, module_path: &str) -> LevelFilter {
        self.0
            .iter()
            .filter_map(|f| f.max_level_for(module_path))
            .min()
            .unwrap_or(LevelFilter::Trace)
    }
}

impl FromStr for LogFilters {
    type Err = Error;

    /// Parse a set of filters of the form "regex=level;regex=level;...". A
    /// filter with no "regex=" part applies to every module.
    fn from_str(s: &str) -> Result<LogFilters> {
        let filters: Result<Vec<LogFilter>> = s
            .split(';')
            .filter(|f| !f.trim().is_empty())
            .map(|f| f.parse())
            .collect();
        Ok(LogFilters(filters?))
    }
}

/// Options describes how a Logger behaves. Generally these should be
/// constructed using OptionsBuilder, instead of filling in all fields by hand.
pub struct Options {
    /// Filters controlling which log statements are enabled.
    pub filters: LogFilters,
    /// The global maximum enabled logging level: the highest level of any of
    /// `filters`, or Trace if there are none.
    pub max_level: LevelFilter,
    /// Where to write log output to.
    pub output_factory: LogOutputFactory,
    /// Whether or not a log output (or flush) failure should result in a panic.
    pub panic_on_output_failure: bool,
    /// If true, flush after every log statement.
    pub always_flush: bool,
    /// If true, the level of each record is colored with the console's
    /// "error", "comment" and "info" styles.
    pub decorated: bool,
}

/// OptionsBuilder provides a builder-style interface to construct an Options.
#[derive(Default)]
pub struct OptionsBuilder {
    filters: Option<LogFilters>,
    output_factory: Option<LogOutputFactory>,
    panic_on_output_failure: Option<bool>,
    always_flush: Option<bool>,
    decorated: Option<bool>,
}

impl OptionsBuilder {
    /// Construct a new OptionsBuilder, which by default just sets the options
    /// to their default values.
    pub fn new() -> Self {
        OptionsBuilder::default()
    }

    /// Set the filters which will be applied to any logging calls. If this is
    /// never called, filters are read from the RUST_LOG environment variable.
    pub fn set_filters(mut self, filters: LogFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Set the output factory the Logger should use. By default, log output
    /// goes to stderr.
    pub fn set_output_factory(mut self, output_factory: LogOutputFactory) -> Self {
        self.output_factory = Some(output_factory);
        self
    }

    /// Configure the Logger to write its log output to the given Write
    /// implementation (e.g. a File).
    pub fn set_output_to<T: Write + Send + 'static>(self, output_writer: T) -> Self {
        self.set_output_factory(new_log_output_factory(output_writer))
    }

    /// Set whether or not the Logger should panic! if writing log output fails.
    pub fn set_panic_on_output_failure(mut self, panic_on_output_failure: bool) -> Self {
        self.panic_on_output_failure = Some(panic_on_output_failure);
        self
    }

    /// Set whether or not the Logger should flush its output after every
    /// logging call.
    pub fn set_always_flush(mut self, always_flush: bool) -> Self {
        self.always_flush = Some(always_flush);
        self
    }

    /// Set whether or not log levels are colored. Off by default.
    pub fn set_decorated(mut self, decorated: bool) -> Self {
        self.decorated = Some(decorated);
        self
    }

    /// Build an Options structure from this builder's current state. This
    /// fails if no filters were set and RUST_LOG can't be read or parsed.
    pub fn build(self) -> Result<Options> {
        let filters: LogFilters = match self.filters {
            None => match get_env_var(RUST_LOG_ENV_VAR)? {
                None => LogFilters::default(),
                Some(filters_str) => filters_str.parse()?,
            },
            Some(filters) => filters,
        };
        let max_level: LevelFilter = filters
            .0
            .iter()
            .map(|f| f.level)
            .max()
            .unwrap_or(LevelFilter::Trace);

        Ok(Options {
            filters: filters,
            max_level: max_level,
            output_factory: self
                .output_factory
                .unwrap_or_else(|| Box::new(|| Box::new(io::stderr()))),
            panic_on_output_failure: self.panic_on_output_failure.unwrap_or(false),
            always_flush: self.always_flush.unwrap_or(false),
            decorated: self.decorated.unwrap_or(false),
        })
    }
}

fn get_env_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(v) => Ok(Some(v)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::EnvVar(e)),
    }
}

fn level_tag(level: Level) -> Option<&'static str> {
    match level {
        Level::Error => Some("error"),
        Level::Warn => Some("comment"),
        Level::Info => Some("info"),
        Level::Debug | Level::Trace => None,
    }
}

/// Format the given log Record into a line of console markup, with the level
/// wrapped in a style tag. The result can be rendered (or stripped) with a
/// Formatter.
pub fn format_log_record(record: &Record) -> String {
    let level = match level_tag(record.level()) {
        None => record.level().to_string(),
        Some(tag) => format!("<{}>{}</{}>", tag, record.level(), tag),
    };
    format!(
        "[{} {}:{}] {} - {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        record.file().unwrap_or("UNKNOWN_FILE"),
        record
            .line()
            .map_or("UNKNOWN_LINE".to_owned(), |l| l.to_string()),
        level,
        record.args()
    )
}

/// Logger is the Log implementation this crate provides. Records are written
/// as console markup, rendered with the same Formatter commands use.
pub struct Logger {
    options: Options,
    formatter: Formatter,
}

impl Logger {
    /// Construct a new Logger with the given Options controlling its behavior.
    pub fn new(options: Options) -> Result<Self> {
        Logger::with_capabilities(options, Capabilities::current())
    }

    /// Construct a new Logger which renders for a terminal with the given
    /// capabilities.
    pub fn with_capabilities(options: Options, capabilities: Capabilities) -> Result<Self> {
        let formatter = Formatter::with_capabilities(options.decorated, capabilities)?;
        Ok(Logger {
            options: options,
            formatter: formatter,
        })
    }

    fn render(&self, record: &Record) -> String {
        let line = format_log_record(record);
        match self.options.decorated {
            false => self.formatter.strip(line.as_str()),
            // Messages with malformed style attributes are logged unstyled.
            true => self
                .formatter
                .format(line.as_str())
                .unwrap_or_else(|_| self.formatter.strip(line.as_str())),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.options.max_level
    }

    fn log(&self, record: &Record) {
        if record.level()
            > self
                .options
                .filters
                .max_level_for(record.module_path().unwrap_or(""))
        {
            return;
        }

        let res = writeln!((self.options.output_factory)(), "{}", self.render(record));
        if let Err(e) = res {
            if self.options.panic_on_output_failure {
                panic!("Failed to write log output: {}", e);
            }
            return;
        }
        if self.options.always_flush {
            self.flush();
        }
    }

    fn flush(&self) {
        let res = (self.options.output_factory)().flush();
        if self.options.panic_on_output_failure {
            if let Err(e) = res {
                panic!("Failed to flush log output: {}", e);
            }
        }
    }
}

/// Try to set up a new global Logger, with the given Options controlling its
/// behavior, returning an error if doing so fails in some way.
pub fn try_init(options: Options) -> Result<()> {
    let logger = Logger::new(options)?;
    log::set_max_level(logger.options.max_level);
    log::set_boxed_logger(Box::new(logger))?;
    Ok(())
}

/// This is a shortcut which just calls try_init(), but panics if it fails.
/// For applications which initialize a Logger first thing in main(), this is
/// probably a reasonable choice.
pub fn init(options: Options) {
    if let Err(e) = try_init(options) {
        panic!("Failed to initialize logging: {}", e);
    }
}
