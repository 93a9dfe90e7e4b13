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

use crate::concrete::{Concrete, Values};
use crate::testing::FnInstrumentation;
use crate::value::Value;

fn concrete(name: &str) -> Concrete {
    let mut parameters = Values::new();
    parameters.insert("name".to_owned(), Some(Value::from(name)));
    Concrete::new(parameters, Values::new())
}

#[test]
fn test_fn_instrumentation() {
    let instrumentation = FnInstrumentation::new();
    assert_eq!(0, instrumentation.get_call_count());
    assert!(instrumentation.last_call().is_none());

    instrumentation.record_call(&concrete("foo"));
    instrumentation.record_call(&concrete("bar"));
    assert_eq!(2, instrumentation.get_call_count());
    assert_eq!(
        Some(&Value::from("bar")),
        instrumentation.last_call().unwrap().parameter("name")
    );
}
