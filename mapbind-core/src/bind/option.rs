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

//! Optional-reference bindings. Textual sources always take the payload
//! path, allocating the referent from serialized text; other native values
//! coerce through the inner type and wrap in `Some`.

use crate::bind::{parse_json, Bind, FieldKind};
use crate::error::Error;
use crate::value::Value;

impl<T: Bind> Bind for Option<T> {
    const KIND: FieldKind = FieldKind::Ref;

    fn from_value(value: &Value, field: &str, tag_name: &str) -> Result<Self, Error> {
        match value {
            Value::Null => Ok(None),
            Value::Str(s) => Self::from_text(s.trim(), field, tag_name),
            Value::Raw(s) => parse_json(s, field),
            other => Ok(Some(T::from_value(other, field, tag_name)?)),
        }
    }

    fn from_text(text: &str, field: &str, _tag_name: &str) -> Result<Self, Error> {
        // JSON `null` clears the reference; anything else must parse as T
        parse_json(text, field)
    }

    fn to_value(&self, tag_name: &str) -> Value {
        match self {
            Some(inner) => inner.to_value(tag_name),
            None => Value::Null,
        }
    }

    fn is_empty(&self) -> bool {
        self.is_none()
    }
}
