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

use lazy_static::lazy_static;
use std::env;

const COLORTERM_ENV_VAR: &str = "COLORTERM";
const TERMINAL_EMULATOR_ENV_VAR: &str = "TERMINAL_EMULATOR";
const KONSOLE_VERSION_ENV_VAR: &str = "KONSOLE_VERSION";

/// Konsole only renders OSC 8 hyperlinks properly after this version.
const MIN_KONSOLE_HYPERLINK_VERSION: u64 = 201100;

/// Capabilities describes which optional escape sequences the terminal we're
/// writing to understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Capabilities {
    /// 24-bit color ("\x1b[38;2;R;G;Bm") is supported.
    pub truecolor: bool,
    /// OSC 8 hyperlinks are supported.
    pub hyperlinks: bool,
}

impl Capabilities {
    /// Capabilities for a terminal which supports nothing beyond the basic 8
    /// colors and display options.
    pub fn basic() -> Capabilities {
        Capabilities {
            truecolor: false,
            hyperlinks: false,
        }
    }

    /// Probe the environment for this process's terminal capabilities.
    pub fn detect() -> Capabilities {
        Capabilities::from_vars(|key| env::var(key).ok())
    }

    /// Work out terminal capabilities from the given environment variable
    /// lookup function.
    pub fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Capabilities {
        let truecolor = var(COLORTERM_ENV_VAR).map_or(false, |v| v == "truecolor");

        let jediterm = var(TERMINAL_EMULATOR_ENV_VAR).map_or(false, |v| v == "JetBrains-JediTerm");
        let old_konsole = match var(KONSOLE_VERSION_ENV_VAR) {
            None => false,
            Some(ref v) if v.is_empty() => false,
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_or(true, |v| v <= MIN_KONSOLE_HYPERLINK_VERSION),
        };

        Capabilities {
            truecolor: truecolor,
            hyperlinks: !jediterm && !old_konsole,
        }
    }

    /// Returns this process's terminal capabilities. These are probed the
    /// first time this function is called, and cached afterwards.
    pub fn current() -> Capabilities {
        lazy_static! {
            static ref CURRENT: Capabilities = Capabilities::detect();
        }
        *CURRENT
    }
}
