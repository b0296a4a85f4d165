// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

use crate::bind::{parse_json, Bind, FieldKind};
use crate::error::Error;
use crate::value::Value;

impl Bind for String {
    const KIND: FieldKind = FieldKind::Str;

    fn from_value(value: &Value, field: &str, _tag_name: &str) -> Result<Self, Error> {
        match value {
            // direct assignment: surrounding whitespace survives
            Value::Str(s) => Ok(s.clone()),
            Value::Raw(s) => parse_json(s, field),
            other => Err(Error::unsupported_value(field, other.kind_name())),
        }
    }

    fn from_text(text: &str, _field: &str, _tag_name: &str) -> Result<Self, Error> {
        Ok(text.to_owned())
    }

    fn to_value(&self, _tag_name: &str) -> Value {
        Value::Str(self.clone())
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}
