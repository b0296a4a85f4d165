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

//! Sequence bindings. A textual source is either a bracket-delimited
//! serialized array (handed to the payload codec whole) or a comma-delimited
//! scalar list coerced element by element, in split order.

use crate::bind::{parse_json, Bind, FieldKind};
use crate::error::Error;
use crate::value::Value;

impl<T: Bind> Bind for Vec<T> {
    const KIND: FieldKind = FieldKind::Seq;

    fn from_value(value: &Value, field: &str, tag_name: &str) -> Result<Self, Error> {
        match value {
            Value::Seq(elems) => elems
                .iter()
                .map(|elem| T::from_value(elem, field, tag_name))
                .collect(),
            Value::Str(s) => Self::from_text(s.trim(), field, tag_name),
            Value::Raw(s) => parse_json(s, field),
            other => Err(Error::unsupported_value(field, other.kind_name())),
        }
    }

    fn from_text(text: &str, field: &str, tag_name: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        if text.starts_with('[') && text.ends_with(']') {
            return parse_json(text, field);
        }
        // split parts are not re-trimmed; "a, b" keeps the space in " b"
        text.split(',')
            .map(|part| T::from_text(part, field, tag_name))
            .collect()
    }

    fn to_value(&self, tag_name: &str) -> Value {
        Value::Seq(self.iter().map(|elem| elem.to_value(tag_name)).collect())
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}
