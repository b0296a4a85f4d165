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

//! Nested-record coercion, called from the `Bind` impls that
//! `#[derive(Record)]` generates.

use serde::de::DeserializeOwned;

use crate::bind::parse_json;
use crate::error::Error;
use crate::record::Record;
use crate::value::Value;

/// Coerces a dynamic value into a nested record. A native mapping decodes
/// field-by-field under the same tag namespace as the outer call; string and
/// payload sources go through the structured-payload codec.
pub fn record_from_value<T>(value: &Value, field: &str, tag_name: &str) -> Result<T, Error>
where
    T: Record + DeserializeOwned,
{
    match value {
        Value::Map(mapping) => {
            let mut record = T::default();
            record.decode_fields(mapping, tag_name)?;
            Ok(record)
        }
        Value::Str(s) => record_from_text(s.trim(), field),
        Value::Raw(s) => record_from_text(s, field),
        other => Err(Error::unsupported_value(field, other.kind_name())),
    }
}

/// Parses serialized record text; malformed payloads surface as
/// `InvalidPayload` with the codec's reason.
pub fn record_from_text<T: DeserializeOwned>(text: &str, field: &str) -> Result<T, Error> {
    parse_json(text, field)
}
