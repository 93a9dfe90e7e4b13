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

use crate::logging::*;
use crate::output::{Capabilities, SharedWriter};
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use regex::Regex;

lazy_static! {
    static ref TIMESTAMP: Regex = Regex::new(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} UTC").unwrap();
}

const FIXED_TIMESTAMP: &str = "2018-01-01 12:34:56 UTC";

#[test]
fn test_parse_log_level_filter() {
    assert_eq!(LevelFilter::Off, parse_log_level_filter(" OfF ").unwrap());
    assert_eq!(
        LevelFilter::Error,
        parse_log_level_filter(" eRroR ").unwrap()
    );
    assert_eq!(LevelFilter::Warn, parse_log_level_filter(" wArN ").unwrap());
    assert_eq!(LevelFilter::Info, parse_log_level_filter(" InFo ").unwrap());
    assert_eq!(
        LevelFilter::Debug,
        parse_log_level_filter(" dEbUg ").unwrap()
    );
    assert_eq!(
        LevelFilter::Trace,
        parse_log_level_filter(" tRaCe ").unwrap()
    );

    assert!(parse_log_level_filter("foobar").is_err());
    assert!(parse_log_level_filter("").is_err());
    assert!(parse_log_level_filter("   ").is_err());
}

fn assert_log_filters_level(filters: &str, module_path: &str, expected_level: LevelFilter) {
    let filters: LogFilters = filters.parse().unwrap();
    assert_eq!(expected_level, filters.max_level_for(module_path));
}

#[test]
fn test_log_filters() {
    assert_log_filters_level("info", "main", LevelFilter::Info);
    assert_log_filters_level("", "main", LevelFilter::Trace);
    assert_log_filters_level(
        "main=info;foo::bar=debug",
        "main::submodule",
        LevelFilter::Info,
    );
    assert_log_filters_level("main=info;foo::bar=debug", "bar", LevelFilter::Trace);
    assert_log_filters_level("main=info;foo::bar=debug", "foo", LevelFilter::Trace);
    assert_log_filters_level("main=info;foo::bar=debug", "foo::bar", LevelFilter::Debug);
    assert_log_filters_level(
        "main=info;foo::bar=debug",
        "foo::bar::baz",
        LevelFilter::Debug,
    );
    assert_log_filters_level("warn;main=debug", "main", LevelFilter::Warn);

    assert!("main=loud".parse::<LogFilters>().is_err());
}

fn new_logger(filters: &str, decorated: bool) -> (Logger, SharedWriter<Vec<u8>>) {
    let buffer = SharedWriter::buffer();
    let options = OptionsBuilder::new()
        .set_filters(filters.parse().unwrap())
        .set_output_to(buffer.clone())
        .set_panic_on_output_failure(true)
        .set_always_flush(true)
        .set_decorated(decorated)
        .build()
        .unwrap();
    (
        Logger::with_capabilities(options, Capabilities::basic()).unwrap(),
        buffer,
    )
}

fn logged(buffer: &SharedWriter<Vec<u8>>) -> String {
    TIMESTAMP
        .replace_all(buffer.contents().as_str(), FIXED_TIMESTAMP)
        .into_owned()
}

#[test]
fn test_logger_enabled() {
    let (logger, _) = new_logger("error", false);
    assert!(logger.enabled(&Metadata::builder().level(Level::Error).build()));
    assert!(!logger.enabled(&Metadata::builder().level(Level::Warn).build()));

    let (logger, _) = new_logger("info", false);
    assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));
    assert!(logger.enabled(&Metadata::builder().level(Level::Info).build()));
    assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
}

#[test]
fn test_plain_output() {
    let (logger, buffer) = new_logger("main=info", false);
    logger.log(
        &Record::builder()
            .args(format_args!("foo"))
            .level(Level::Error)
            .file(Some("logging.rs"))
            .line(Some(1234))
            .module_path(Some("main"))
            .build(),
    );
    logger.log(
        &Record::builder()
            .args(format_args!("bar <info>baz</info>"))
            .level(Level::Info)
            .file(Some("logging.rs"))
            .line(Some(1235))
            .module_path(Some("main::sub"))
            .build(),
    );
    // Filtered out.
    logger.log(
        &Record::builder()
            .args(format_args!("quux"))
            .level(Level::Debug)
            .file(Some("logging.rs"))
            .line(Some(1236))
            .module_path(Some("main"))
            .build(),
    );

    assert_eq!(
        "[2018-01-01 12:34:56 UTC logging.rs:1234] ERROR - foo\n\
         [2018-01-01 12:34:56 UTC logging.rs:1235] INFO - bar baz\n",
        logged(&buffer)
    );
}

#[test]
fn test_decorated_output() {
    let (logger, buffer) = new_logger("debug", true);
    logger.log(
        &Record::builder()
            .args(format_args!("foo"))
            .level(Level::Error)
            .file(Some("logging.rs"))
            .line(Some(1234))
            .build(),
    );
    logger.log(
        &Record::builder()
            .args(format_args!("bar"))
            .level(Level::Debug)
            .file(None)
            .line(None)
            .build(),
    );

    assert_eq!(
        "[2018-01-01 12:34:56 UTC logging.rs:1234] \x1b[37;41mERROR\x1b[0m - foo\n\
         [2018-01-01 12:34:56 UTC UNKNOWN_FILE:UNKNOWN_LINE] DEBUG - bar\n",
        logged(&buffer)
    );
}
