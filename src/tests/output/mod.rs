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

mod capabilities;
mod formatter;
mod style;

use crate::output::*;
use crate::testing::buffered_output;

#[test]
fn test_output_mode_parsing() {
    assert_eq!(OutputMode::Decorate, "0".parse::<OutputMode>().unwrap());
    assert_eq!(OutputMode::Plain, "1".parse::<OutputMode>().unwrap());
    assert_eq!(OutputMode::Raw, " 2 ".parse::<OutputMode>().unwrap());
    assert_eq!(OutputMode::Quiet, "3".parse::<OutputMode>().unwrap());
    assert!("4".parse::<OutputMode>().is_err());
    assert!("plain".parse::<OutputMode>().is_err());

    assert_eq!("2", OutputMode::Raw.to_string());
}

#[test]
fn test_output_initial_mode() {
    let (output, _) = buffered_output(true).unwrap();
    assert_eq!(OutputMode::Decorate, output.mode());
    let (output, _) = buffered_output(false).unwrap();
    assert_eq!(OutputMode::Plain, output.mode());
}

#[test]
fn test_output_modes() {
    let (mut output, buffer) = buffered_output(true).unwrap();

    output.write("<info>a</info>").unwrap();
    output.set_mode(OutputMode::Plain);
    output.write("<info>b</info>").unwrap();
    output.set_mode(OutputMode::Raw);
    output.write("<info>c</info>").unwrap();
    output.set_mode(OutputMode::Quiet);
    output.writeln("<info>d</info>", 3).unwrap();
    output.set_mode(OutputMode::Decorate);
    output.write("<info>e</info>").unwrap();

    assert_eq!(
        "\x1b[32ma\x1b[0mb<info>c</info>\x1b[32me\x1b[0m",
        buffer.contents()
    );
}

#[test]
fn test_output_set_mode_controls_decoration() {
    let (mut output, _) = buffered_output(true).unwrap();
    assert!(output.formatter().is_decorated());
    output.set_mode(OutputMode::Raw);
    assert!(!output.formatter().is_decorated());
    output.set_mode(OutputMode::Decorate);
    assert!(output.formatter().is_decorated());
}

#[test]
fn test_output_writeln() {
    let (mut output, buffer) = buffered_output(false).unwrap();
    output.writeln("one", 1).unwrap();
    output.writeln("two", 2).unwrap();
    output.writeln("three", 0).unwrap();
    assert_eq!("one\ntwo\n\nthree", buffer.contents());
}

#[test]
fn test_output_custom_style() {
    let (mut output, buffer) = buffered_output(true).unwrap();
    output
        .formatter_mut()
        .set_style("warning", Style::with_colors("yellow", Some("black")).unwrap());
    output.write("<warning>careful</warning>").unwrap();
    assert_eq!("\x1b[33;40mcareful\x1b[0m", buffer.contents());
}
