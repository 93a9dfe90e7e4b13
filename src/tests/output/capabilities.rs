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

use crate::output::Capabilities;
use std::collections::HashMap;

fn capabilities_for(vars: &[(&str, &str)]) -> Capabilities {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
    Capabilities::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn test_no_environment() {
    let capabilities = capabilities_for(&[]);
    assert!(!capabilities.truecolor);
    assert!(capabilities.hyperlinks);
}

#[test]
fn test_truecolor() {
    assert!(capabilities_for(&[("COLORTERM", "truecolor")]).truecolor);
    assert!(!capabilities_for(&[("COLORTERM", "24bit")]).truecolor);
}

#[test]
fn test_jediterm_has_no_hyperlinks() {
    assert!(!capabilities_for(&[("TERMINAL_EMULATOR", "JetBrains-JediTerm")]).hyperlinks);
    assert!(capabilities_for(&[("TERMINAL_EMULATOR", "xterm")]).hyperlinks);
}

#[test]
fn test_konsole_version() {
    assert!(capabilities_for(&[("KONSOLE_VERSION", "")]).hyperlinks);
    assert!(!capabilities_for(&[("KONSOLE_VERSION", "201100")]).hyperlinks);
    assert!(!capabilities_for(&[("KONSOLE_VERSION", "190800")]).hyperlinks);
    assert!(capabilities_for(&[("KONSOLE_VERSION", "201101")]).hyperlinks);
    assert!(capabilities_for(&[("KONSOLE_VERSION", "220400")]).hyperlinks);
}

#[test]
fn test_current_is_cached() {
    assert_eq!(Capabilities::current(), Capabilities::current());
}

#[test]
fn test_basic() {
    let basic = Capabilities::basic();
    assert!(!basic.truecolor);
    assert!(!basic.hyperlinks);
}
