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

impl<T: Bind> Bind for Box<T> {
    const KIND: FieldKind = FieldKind::Ref;

    fn from_value(value: &Value, field: &str, tag_name: &str) -> Result<Self, Error> {
        match value {
            Value::Str(s) => Self::from_text(s.trim(), field, tag_name),
            Value::Raw(s) => parse_json(s, field),
            Value::Null => Err(Error::unsupported_value(field, value.kind_name())),
            other => Ok(Box::new(T::from_value(other, field, tag_name)?)),
        }
    }

    fn from_text(text: &str, field: &str, _tag_name: &str) -> Result<Self, Error> {
        parse_json::<T>(text, field).map(Box::new)
    }

    fn to_value(&self, tag_name: &str) -> Value {
        (**self).to_value(tag_name)
    }

    fn stringified(&self, tag_name: &str) -> Value {
        (**self).stringified(tag_name)
    }

    // an owned reference is always set
    fn is_empty(&self) -> bool {
        false
    }
}
