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

use crate::error::Error;
use crate::output::*;

fn truecolor() -> Capabilities {
    Capabilities {
        truecolor: true,
        hyperlinks: false,
    }
}

#[test]
fn test_color_parsing() {
    assert_eq!(Color::Basic(0), "black".parse::<Color>().unwrap());
    assert_eq!(Color::Basic(7), "white".parse::<Color>().unwrap());
    assert_eq!(Color::Rgb(0xff, 0x00, 0x80), "#ff0080".parse::<Color>().unwrap());
    assert_eq!(Color::Rgb(0xaa, 0xbb, 0xcc), "#abc".parse::<Color>().unwrap());

    for invalid in &["purple", "", "#", "#12345", "#ggg", "#1234567", "Red"] {
        match invalid.parse::<Color>() {
            Err(Error::InvalidArgument(_)) => {}
            other => panic!("expected InvalidArgument for {:?}, got {:?}", invalid, other),
        }
    }
}

#[test]
fn test_display_option_parsing() {
    assert_eq!(
        DisplayOption::Highlight,
        "highlight".parse::<DisplayOption>().unwrap()
    );
    assert_eq!(
        DisplayOption::Conceal,
        "conceal".parse::<DisplayOption>().unwrap()
    );
    assert!("bold".parse::<DisplayOption>().is_err());
}

#[test]
fn test_empty_style_leaves_text_alone() {
    let style = Style::new();
    assert_eq!("", style.set_sequence(&Capabilities::basic()));
    assert_eq!("", style.reset_sequence());
    assert_eq!("text", style.apply("text", &Capabilities::basic()));
}

#[test]
fn test_basic_colors() {
    let style = Style::with_colors("green", None).unwrap();
    assert_eq!("\x1b[32mhi\x1b[0m", style.apply("hi", &Capabilities::basic()));

    let style = Style::with_colors("white", Some("red")).unwrap();
    assert_eq!(
        "\x1b[37;41mhi\x1b[0m",
        style.apply("hi", &Capabilities::basic())
    );
}

#[test]
fn test_hex_colors() {
    let mut style = Style::new();
    style.set_fg("#ff0000").unwrap();
    style.set_bg("#0f0").unwrap();
    assert_eq!("\x1b[31;42m", style.set_sequence(&Capabilities::basic()));
    assert_eq!(
        "\x1b[38;2;255;0;0;48;2;0;255;0m",
        style.set_sequence(&truecolor())
    );

    // Without truecolor, each channel rounds to on or off.
    let mut style = Style::new();
    style.set_fg("#7f80ff").unwrap();
    assert_eq!("\x1b[36m", style.set_sequence(&Capabilities::basic()));
}

#[test]
fn test_display_options() {
    let mut style = Style::with_colors("blue", None).unwrap();
    style.set_options(&["highlight", "underline"]).unwrap();
    // Setting an option twice has no additional effect.
    style.set_option("highlight").unwrap();
    assert_eq!("\x1b[34;1;4m", style.set_sequence(&Capabilities::basic()));

    style.unset_option("highlight").unwrap();
    assert_eq!("\x1b[34;4m", style.set_sequence(&Capabilities::basic()));

    assert!(style.set_option("sparkle").is_err());
}

#[test]
fn test_invalid_style_colors() {
    assert!(Style::with_colors("mauve", None).is_err());
    assert!(Style::with_colors("red", Some("#12")).is_err());
}

#[test]
fn test_hyperlinks() {
    let mut style = Style::new();
    style.set_href("https://example.com");

    assert_eq!("link", style.apply("link", &Capabilities::basic()));

    let capabilities = Capabilities {
        truecolor: false,
        hyperlinks: true,
    };
    assert_eq!(
        "\x1b]8;;https://example.com\x1b\\link\x1b]8;;\x1b\\",
        style.apply("link", &capabilities)
    );

    style.set_fg("yellow").unwrap();
    assert_eq!(
        "\x1b[33m\x1b]8;;https://example.com\x1b\\link\x1b]8;;\x1b\\\x1b[0m",
        style.apply("link", &capabilities)
    );
}
