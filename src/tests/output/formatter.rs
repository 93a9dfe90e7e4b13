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

use crate::output::*;

fn formatter() -> Formatter {
    Formatter::with_capabilities(true, Capabilities::basic()).unwrap()
}

#[test]
fn test_default_styles() {
    let formatter = formatter();
    for name in &["css", "error", "info", "comment"] {
        assert!(formatter.has_style(name), "missing style {}", name);
    }
    assert!(!formatter.has_style("question"));
    assert_eq!(Some(&Style::new()), formatter.style("css"));
}

#[test]
fn test_undecorated_format_is_identity() {
    let formatter = Formatter::with_capabilities(false, Capabilities::basic()).unwrap();
    assert_eq!(
        "<info>x</info> <fg=red>",
        formatter.format("<info>x</info> <fg=red>").unwrap()
    );
}

#[test]
fn test_format_known_tags() {
    let formatter = formatter();
    assert_eq!(
        "done: \x1b[32mok\x1b[0m!",
        formatter.format("done: <info>ok</info>!").unwrap()
    );
    assert_eq!(
        "\x1b[37;41mbad\x1b[0m \x1b[33mnote\x1b[0m",
        formatter.format("<error>bad</error> <comment>note</comment>").unwrap()
    );
}

#[test]
fn test_format_keeps_unknown_tags() {
    let formatter = formatter();
    assert_eq!(
        "copy <source> [<destination>]",
        formatter.format("copy <source> [<destination>]").unwrap()
    );
    assert_eq!(
        "<b>\x1b[32mx\x1b[0m</b>",
        formatter.format("<b><info>x</info></b>").unwrap()
    );
}

#[test]
fn test_format_nested_tags() {
    let formatter = formatter();
    assert_eq!(
        "\x1b[37;41ma\x1b[32mb\x1b[0mc\x1b[0m",
        formatter.format("<error>a<info>b</info>c</error>").unwrap()
    );
}

#[test]
fn test_format_unclosed_tag() {
    let formatter = formatter();
    assert_eq!("<info>abc", formatter.format("<info>abc").unwrap());
    assert_eq!(
        "<info>a \x1b[33mb\x1b[0m",
        formatter.format("<info>a <comment>b</comment>").unwrap()
    );
}

#[test]
fn test_format_attributes() {
    let formatter = formatter();
    assert_eq!(
        "\x1b[31mx\x1b[0m",
        formatter.format("<info fg=red>x</info>").unwrap()
    );
    assert_eq!(
        "\x1b[34;43mx\x1b[0m",
        formatter.format("<css fg='#00f' bg=\"yellow\">x</css>").unwrap()
    );
    assert_eq!(
        "\x1b[32;1;4mx\x1b[0m",
        formatter
            .format("<info options=highlight,underline>x</info>")
            .unwrap()
    );
}

#[test]
fn test_format_attributes_do_not_leak() {
    let formatter = formatter();
    assert_eq!(
        "\x1b[31ma\x1b[0m\x1b[32mb\x1b[0m",
        formatter
            .format("<info fg=red>a</info><info>b</info>")
            .unwrap()
    );
    assert_eq!(
        Some(&Style::with_colors("green", None).unwrap()),
        formatter.style("info")
    );
}

#[test]
fn test_format_invalid_attributes() {
    let formatter = formatter();
    assert!(formatter.format("<info fg=mauve>x</info>").is_err());
    assert!(formatter.format("<info options=sparkle>x</info>").is_err());
}

#[test]
fn test_format_href() {
    let formatter = Formatter::with_capabilities(
        true,
        Capabilities {
            truecolor: false,
            hyperlinks: true,
        },
    )
    .unwrap();
    assert_eq!(
        "\x1b]8;;https://example.com\x1b\\docs\x1b]8;;\x1b\\",
        formatter
            .format("<css href=https://example.com>docs</css>")
            .unwrap()
    );
}

#[test]
fn test_strip() {
    let formatter = formatter();
    assert_eq!("a <name>", formatter.strip("<info>a</info> <name>"));
    assert_eq!(
        "x <b>y</b>",
        formatter.strip("<comment>x <b>y</b></comment>")
    );
    assert_eq!("red", formatter.strip("<error fg=red>red</error>"));

    // Stripping doesn't depend on decoration.
    let undecorated = Formatter::with_capabilities(false, Capabilities::basic()).unwrap();
    assert_eq!("ok", undecorated.strip("<info>ok</info>"));
}

#[test]
fn test_set_decorated() {
    let mut formatter = formatter();
    assert!(formatter.is_decorated());
    formatter.set_decorated(false);
    assert!(!formatter.is_decorated());
    assert_eq!("<info>x</info>", formatter.format("<info>x</info>").unwrap());
}
