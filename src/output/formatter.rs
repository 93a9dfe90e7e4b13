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
use crate::output::style::Style;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::convert::Infallible;

lazy_static! {
    static ref OPEN_TAG: Regex = Regex::new(r"<([a-z]\w*)([^>]*)>").unwrap();
    static ref ATTRIBUTE: Regex =
        Regex::new(r#"\b(fg|bg|href|options)=("[^"]*"|'[^']*'|[^\s"']+)"#).unwrap();
}

/// Calls `render` for every "<tag attributes>text</tag>" in the given
/// message, and replaces the whole tag with whatever it returns. Text outside
/// of tags, and tags which are never closed, are kept as-is.
fn rewrite<E, F>(message: &str, mut render: F) -> std::result::Result<String, E>
where
    F: FnMut(&str, &str, &str) -> std::result::Result<String, E>,
{
    let mut out = String::with_capacity(message.len());
    let mut pos = 0;

    while pos < message.len() {
        let rest = &message[pos..];
        let (open, name, attributes) = match OPEN_TAG
            .captures(rest)
            .and_then(|c| Some((c.get(0)?, c.get(1)?, c.get(2)?)))
        {
            None => break,
            Some(found) => found,
        };

        let closing = format!("</{}>", name.as_str());
        match rest[open.end()..].find(closing.as_str()) {
            None => {
                // Skip just the "<", so any tags nested inside are still found.
                out.push_str(&rest[..open.start() + 1]);
                pos += open.start() + 1;
            }
            Some(len) => {
                out.push_str(&rest[..open.start()]);
                let text = &rest[open.end()..open.end() + len];
                out.push_str(render(name.as_str(), attributes.as_str(), text)?.as_str());
                pos += open.end() + len + closing.len();
            }
        }
    }

    out.push_str(&message[pos.min(message.len())..]);
    Ok(out)
}

/// Override the given style with inline tag attributes, like
/// `fg=red bg='#00f' options=highlight,underline href=https://example.com`.
fn apply_attributes(style: &mut Style, attributes: &str) -> Result<()> {
    for captures in ATTRIBUTE.captures_iter(attributes) {
        let key = captures.get(1).map_or("", |m| m.as_str());
        let value: String = captures
            .get(2)
            .map_or("", |m| m.as_str())
            .trim_matches(|c| c == '"' || c == '\'')
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        match key {
            "fg" => style.set_fg(value.as_str())?,
            "bg" => style.set_bg(value.as_str())?,
            "href" => style.set_href(value.as_str()),
            _ => style.set_options(value.split(',').collect::<Vec<&str>>().as_slice())?,
        }
    }
    Ok(())
}

/// A Formatter rewrites messages containing style tags (like
/// "<info>done</info>") into text containing terminal escape sequences.
///
/// Tags are only rewritten if the Formatter is decorated; otherwise messages
/// are passed through untouched.
#[derive(Clone, Debug)]
pub struct Formatter {
    decorated: bool,
    styles: HashMap<String, Style>,
    capabilities: Capabilities,
}

impl Formatter {
    /// Construct a Formatter with the default set of styles, for this
    /// process's terminal.
    pub fn new(decorated: bool) -> Result<Formatter> {
        Formatter::with_capabilities(decorated, Capabilities::current())
    }

    /// Construct a Formatter with the default set of styles, for a terminal
    /// with the given capabilities.
    pub fn with_capabilities(decorated: bool, capabilities: Capabilities) -> Result<Formatter> {
        let mut formatter = Formatter {
            decorated: decorated,
            styles: HashMap::new(),
            capabilities: capabilities,
        };
        formatter.set_style("css", Style::new());
        formatter.set_style("error", Style::with_colors("white", Some("red"))?);
        formatter.set_style("info", Style::with_colors("green", None)?);
        formatter.set_style("comment", Style::with_colors("yellow", None)?);
        Ok(formatter)
    }

    /// Turn decoration on or off.
    pub fn set_decorated(&mut self, decorated: bool) {
        self.decorated = decorated;
    }

    /// Returns true if this Formatter rewrites style tags.
    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// Returns the terminal capabilities this Formatter renders for.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Register (or replace) the style used for the given tag name.
    pub fn set_style(&mut self, name: &str, style: Style) {
        self.styles.insert(name.to_owned(), style);
    }

    /// Returns true if a style is registered for the given tag name.
    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Returns the style registered for the given tag name, if any.
    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Rewrite the style tags in the given message. Tags with no registered
    /// style are left in place, but their contents are still rewritten.
    pub fn format(&self, message: &str) -> Result<String> {
        if !self.decorated {
            return Ok(message.to_owned());
        }

        rewrite(message, |name, attributes, text| {
            let text = self.format(text)?;
            match self.styles.get(name) {
                None => Ok(format!("<{}{}>{}</{}>", name, attributes, text, name)),
                Some(style) => {
                    let mut style = style.clone();
                    apply_attributes(&mut style, attributes)?;
                    Ok(style.apply(text.as_str(), &self.capabilities))
                }
            }
        })
    }

    /// Remove the style tags from the given message, keeping their contents.
    /// Only tags with a registered style are removed, so e.g. "<name>" in a
    /// usage string survives.
    pub fn strip(&self, message: &str) -> String {
        let stripped = rewrite(message, |name, attributes, text| {
            let text = self.strip(text);
            Ok::<String, Infallible>(match self.styles.contains_key(name) {
                true => text,
                false => format!("<{}{}>{}</{}>", name, attributes, text, name),
            })
        });
        match stripped {
            Ok(s) => s,
            Err(e) => match e {},
        }
    }
}
