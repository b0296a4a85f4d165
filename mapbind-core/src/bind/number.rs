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

//! Signed-integer and floating-point bindings.
//!
//! Textual integers parse at full `i64` width and then truncate to the
//! field's bit width; native numeric values convert between families with
//! `as` semantics. Under the `string` encode option integers stringify in
//! base 10 and floats with exactly two decimal places.

use crate::bind::{parse_json, Bind, FieldKind};
use crate::error::Error;
use crate::value::Value;

macro_rules! impl_int_bind {
    ($ty:ty) => {
        impl Bind for $ty {
            const KIND: FieldKind = FieldKind::Int;

            fn from_value(value: &Value, field: &str, tag_name: &str) -> Result<Self, Error> {
                match value {
                    Value::Int(v) => Ok(*v as $ty),
                    Value::Uint(v) => Ok(*v as $ty),
                    Value::Float(v) => Ok(*v as $ty),
                    Value::Str(s) => Self::from_text(s.trim(), field, tag_name),
                    Value::Raw(s) => parse_json(s, field),
                    other => Err(Error::unsupported_value(field, other.kind_name())),
                }
            }

            fn from_text(text: &str, field: &str, _tag_name: &str) -> Result<Self, Error> {
                let wide: i64 = text.parse().map_err(|_| Error::invalid_int(field, text))?;
                Ok(wide as $ty)
            }

            fn to_value(&self, _tag_name: &str) -> Value {
                Value::Int(*self as i64)
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

impl_int_bind!(i8);
impl_int_bind!(i16);
impl_int_bind!(i32);
impl_int_bind!(i64);
impl_int_bind!(isize);

macro_rules! impl_float_bind {
    ($ty:ty) => {
        impl Bind for $ty {
            const KIND: FieldKind = FieldKind::Float;

            fn from_value(value: &Value, field: &str, tag_name: &str) -> Result<Self, Error> {
                match value {
                    Value::Float(v) => Ok(*v as $ty),
                    Value::Int(v) => Ok(*v as $ty),
                    Value::Uint(v) => Ok(*v as $ty),
                    Value::Str(s) => Self::from_text(s.trim(), field, tag_name),
                    Value::Raw(s) => parse_json(s, field),
                    other => Err(Error::unsupported_value(field, other.kind_name())),
                }
            }

            fn from_text(text: &str, field: &str, _tag_name: &str) -> Result<Self, Error> {
                let wide: f64 = text
                    .parse()
                    .map_err(|_| Error::invalid_float(field, text))?;
                Ok(wide as $ty)
            }

            fn to_value(&self, _tag_name: &str) -> Value {
                Value::Float(*self as f64)
            }

            fn stringified(&self, _tag_name: &str) -> Value {
                Value::Str(format!("{:.2}", self))
            }

            fn is_empty(&self) -> bool {
                *self == 0.0
            }
        }
    };
}

impl_float_bind!(f32);
impl_float_bind!(f64);
