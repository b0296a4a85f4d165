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

//! The record-side seams of both pipelines. `#[derive(Record)]` generates
//! the per-field walks; nothing here inspects types at runtime.

use crate::error::Error;
use crate::value::Mapping;

/// A statically-typed record with a generated field walk.
///
/// `decode_fields` visits the record's non-embedded fields in declaration
/// order, mutating them in place; the first failure aborts the walk and
/// already-assigned fields keep their new values. `encode_fields` visits
/// every field, writing into `out` (embedded records flatten into it).
///
/// Implementations come from `#[derive(Record)]`; the derive also requires
/// `Default` (fresh nested records) and `serde::Deserialize` (the
/// structured-payload codec).
pub trait Record: Default {
    fn decode_fields(&mut self, input: &Mapping, tag_name: &str) -> Result<(), Error>;

    fn encode_fields(&self, tag_name: &str, out: &mut Mapping);
}

/// An embedded (anonymous) field: its sub-fields flatten into the parent
/// mapping under their own names. Unset references contribute nothing;
/// on name collisions the later write wins.
pub trait Embed {
    fn merge_into(&self, tag_name: &str, out: &mut Mapping);
}

impl<T: Record> Embed for Option<T> {
    fn merge_into(&self, tag_name: &str, out: &mut Mapping) {
        if let Some(record) = self {
            record.encode_fields(tag_name, out);
        }
    }
}

impl<T: Record> Embed for Box<T> {
    fn merge_into(&self, tag_name: &str, out: &mut Mapping) {
        (**self).encode_fields(tag_name, out);
    }
}
