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
use crate::output::capabilities::Capabilities;
use std::str::FromStr;

const ESC: &str = "\x1b";

/// A terminal color, either one of the 8 basic ANSI colors or an arbitrary
/// RGB color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    /// One of the basic colors, by ANSI index (black = 0 ... white = 7).
    Basic(u8),
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

const COLOR_NAMES: &[&str] = &[
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let digits: Vec<String> = hex.chars().map(|c| format!("{}{}", c, c)).collect();
            Some(Color::Rgb(
                channel(&digits[0])?,
                channel(&digits[1])?,
                channel(&digits[2])?,
            ))
        }
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Color> {
        let color = match s.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => COLOR_NAMES
                .iter()
                .position(|&name| name == s)
                .map(|idx| Color::Basic(idx as u8)),
        };
        color.ok_or_else(|| Error::InvalidArgument(format!("The color '{}' is invalid.", s)))
    }
}

impl Color {
    /// Returns the SGR parameter for this color, without the leading
    /// foreground ("3") or background ("4") digit. Without truecolor support,
    /// RGB colors are approximated by the nearest basic color.
    fn code(&self, capabilities: &Capabilities) -> String {
        match *self {
            Color::Basic(idx) => idx.to_string(),
            Color::Rgb(r, g, b) => match capabilities.truecolor {
                true => format!("8;2;{};{};{}", r, g, b),
                false => {
                    let bit = |c: u8| if c >= 128 { 1 } else { 0 };
                    (bit(r) | bit(g) << 1 | bit(b) << 2).to_string()
                }
            },
        }
    }
}

/// A display attribute which can be combined with colors.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DisplayOption {
    /// Bold / increased intensity.
    Highlight,
    /// Underlined text.
    Underline,
    /// Blinking text.
    Blink,
    /// Foreground and background colors swapped.
    Reverse,
    /// Hidden text.
    Conceal,
}

impl DisplayOption {
    fn code(&self) -> &'static str {
        match *self {
            DisplayOption::Highlight => "1",
            DisplayOption::Underline => "4",
            DisplayOption::Blink => "5",
            DisplayOption::Reverse => "7",
            DisplayOption::Conceal => "8",
        }
    }
}

impl FromStr for DisplayOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<DisplayOption> {
        Ok(match s {
            "highlight" => DisplayOption::Highlight,
            "underline" => DisplayOption::Underline,
            "blink" => DisplayOption::Blink,
            "reverse" => DisplayOption::Reverse,
            "conceal" => DisplayOption::Conceal,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "Invalid display option '{}'.",
                    s
                )))
            }
        })
    }
}

/// A Style is a combination of colors, display options, and (optionally) a
/// hyperlink, which can be applied to a piece of text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    href: Option<String>,
    options: Vec<DisplayOption>,
}

impl Style {
    /// Construct a new, empty Style, which leaves text unchanged.
    pub fn new() -> Style {
        Style::default()
    }

    /// Construct a Style with the given foreground and (optional) background
    /// colors.
    pub fn with_colors(fg: &str, bg: Option<&str>) -> Result<Style> {
        let mut style = Style::new();
        style.set_fg(fg)?;
        if let Some(bg) = bg {
            style.set_bg(bg)?;
        }
        Ok(style)
    }

    /// Set the foreground color, from a color name or "#rgb" / "#rrggbb".
    pub fn set_fg(&mut self, color: &str) -> Result<()> {
        self.fg = Some(color.parse()?);
        Ok(())
    }

    /// Set the background color, from a color name or "#rgb" / "#rrggbb".
    pub fn set_bg(&mut self, color: &str) -> Result<()> {
        self.bg = Some(color.parse()?);
        Ok(())
    }

    /// Link the styled text to the given URL.
    pub fn set_href(&mut self, href: &str) {
        self.href = Some(href.to_owned());
    }

    /// Enable the named display option.
    pub fn set_option(&mut self, option: &str) -> Result<()> {
        let option: DisplayOption = option.parse()?;
        if !self.options.contains(&option) {
            self.options.push(option);
        }
        Ok(())
    }

    /// Enable each of the named display options.
    pub fn set_options(&mut self, options: &[&str]) -> Result<()> {
        for option in options {
            self.set_option(option)?;
        }
        Ok(())
    }

    /// Disable the named display option.
    pub fn unset_option(&mut self, option: &str) -> Result<()> {
        let option: DisplayOption = option.parse()?;
        self.options.retain(|o| *o != option);
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.options.is_empty()
    }

    /// Returns the escape sequence which turns this style on, or an empty
    /// string if it has no colors or display options.
    pub fn set_sequence(&self, capabilities: &Capabilities) -> String {
        let mut codes: Vec<String> = vec![];
        if let Some(fg) = self.fg {
            codes.push(format!("3{}", fg.code(capabilities)));
        }
        if let Some(bg) = self.bg {
            codes.push(format!("4{}", bg.code(capabilities)));
        }
        codes.extend(self.options.iter().map(|o| o.code().to_owned()));

        match codes.is_empty() {
            true => String::new(),
            false => format!("{}[{}m", ESC, codes.join(";")),
        }
    }

    /// Returns the escape sequence which turns this style back off.
    pub fn reset_sequence(&self) -> String {
        match self.is_empty() {
            true => String::new(),
            false => format!("{}[0m", ESC),
        }
    }

    /// Returns the given text with this style applied.
    pub fn apply(&self, text: &str, capabilities: &Capabilities) -> String {
        let text = match (self.href.as_ref(), capabilities.hyperlinks) {
            (Some(href), true) if !href.is_empty() => format!(
                "{esc}]8;;{href}{esc}\\{text}{esc}]8;;{esc}\\",
                esc = ESC,
                href = href,
                text = text
            ),
            _ => text.to_owned(),
        };
        format!(
            "{}{}{}",
            self.set_sequence(capabilities),
            text,
            self.reset_sequence()
        )
    }
}
