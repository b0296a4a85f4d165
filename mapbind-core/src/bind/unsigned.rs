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

//! Unsigned-integer bindings. The textual parse runs at `u64` width, so
//! negative lexical forms are rejected outright; native numeric values
//! convert with `as` semantics like their signed counterparts.

use crate::bind::{parse_json, Bind, FieldKind};
use crate::error::Error;
use crate::value::Value;

macro_rules! impl_uint_bind {
    ($ty:ty) => {
        impl Bind for $ty {
            const KIND: FieldKind = FieldKind::Uint;

            fn from_value(value: &Value, field: &str, tag_name: &str) -> Result<Self, Error> {
                match value {
                    Value::Uint(v) => Ok(*v as $ty),
                    Value::Int(v) => Ok(*v as $ty),
                    Value::Float(v) => Ok(*v as $ty),
                    Value::Str(s) => Self::from_text(s.trim(), field, tag_name),
                    Value::Raw(s) => parse_json(s, field),
                    other => Err(Error::unsupported_value(field, other.kind_name())),
                }
            }

            fn from_text(text: &str, field: &str, _tag_name: &str) -> Result<Self, Error> {
                let wide: u64 = text.parse().map_err(|_| Error::invalid_uint(field, text))?;
                Ok(wide as $ty)
            }

            fn to_value(&self, _tag_name: &str) -> Value {
                Value::Uint(*self as u64)
            }

            fn stringified(&self, _tag_name: &str) -> Value {
                Value::Str(self.to_string())
            }

            fn is_empty(&self) -> bool {
                *self == 0
            }
        }
    };
}

impl_uint_bind!(u8);
impl_uint_bind!(u16);
impl_uint_bind!(u32);
impl_uint_bind!(u64);
impl_uint_bind!(usize);
