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

//! The value coercion engine.
//!
//! [`Bind`] is implemented once per supported type family, each in its own
//! module. A `Bind` impl owns the whole cascade for its target: direct
//! transfer and conversion of native values, the trimmed-string parse branch,
//! and the structured-payload branch (delegated to serde_json, which is why
//! every bindable type is `DeserializeOwned`).

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::value::Value;

mod any;
mod bool;
mod box_;
mod list;
mod number;
mod option;
mod string;
pub mod struct_;
mod unsigned;

/// Static shape of a bindable field, reported in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Seq,
    Record,
    Ref,
    Any,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int => "int",
            FieldKind::Uint => "uint",
            FieldKind::Float => "float",
            FieldKind::Str => "string",
            FieldKind::Seq => "sequence",
            FieldKind::Record => "record",
            FieldKind::Ref => "reference",
            FieldKind::Any => "dynamic",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type that can sit on the typed side of a conversion.
///
/// `field` is the name reported in errors; `tag_name` is the active tag
/// namespace, threaded through so nested records resolve their own
/// annotations under the same namespace as the outer call.
pub trait Bind: Sized + DeserializeOwned {
    const KIND: FieldKind;

    /// Coerces a dynamic value: direct transfer, conversion, then the
    /// string or payload branch depending on the value's runtime shape.
    fn from_value(value: &Value, field: &str, tag_name: &str) -> Result<Self, Error>;

    /// The string-source branch of the cascade. Callers trim before
    /// dispatching here, except comma-split sequence parts, which arrive
    /// verbatim.
    fn from_text(text: &str, field: &str, tag_name: &str) -> Result<Self, Error>;

    /// Encode-side projection back into a dynamic value.
    fn to_value(&self, tag_name: &str) -> Value;

    /// Projection under the `string` option; numeric impls override this to
    /// stringify, everything else stores the value unmodified.
    fn stringified(&self, tag_name: &str) -> Value {
        self.to_value(tag_name)
    }

    /// Zero/empty test backing `omitempty`.
    fn is_empty(&self) -> bool;
}

/// Runs the structured-payload codec over `text` for any bindable target.
pub(crate) fn parse_json<T: DeserializeOwned>(text: &str, field: &str) -> Result<T, Error> {
    serde_json::from_str(text).map_err(|e| Error::invalid_payload(field, text, e.to_string()))
}
