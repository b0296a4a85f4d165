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

//! Dynamic passthrough: a `Value` field accepts any native value unchanged.
//! There is no textual parse for a dynamic slot, so comma-split list
//! elements targeting one fail with `UnsupportedField`.

use crate::bind::{Bind, FieldKind};
use crate::error::Error;
use crate::value::Value;

impl Bind for Value {
    const KIND: FieldKind = FieldKind::Any;

    fn from_value(value: &Value, _field: &str, _tag_name: &str) -> Result<Self, Error> {
        Ok(value.clone())
    }

    fn from_text(_text: &str, field: &str, _tag_name: &str) -> Result<Self, Error> {
        Err(Error::unsupported_field(field, Self::KIND))
    }

    fn to_value(&self, _tag_name: &str) -> Value {
        self.clone()
    }

    fn is_empty(&self) -> bool {
        matches!(self, Value::Null)
    }
}
