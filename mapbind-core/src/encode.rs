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

//! The record → mapping pipeline. Encode never fails: the output mapping is
//! freshly built per call and shares no storage with the source record.

use crate::bind::Bind;
use crate::record::{Embed, Record};
use crate::tag::{FieldSpec, DEFAULT_TAG, OPT_OMITEMPTY, OPT_STRING, SKIP_NAME};
use crate::value::Mapping;

/// Encodes `src` into a fresh mapping under the default tag namespace.
pub fn encode<T: Record>(src: &T) -> Mapping {
    encode_tag(src, DEFAULT_TAG)
}

/// Encodes `src` into a fresh mapping, resolving annotations under
/// `tag_name`.
pub fn encode_tag<T: Record>(src: &T, tag_name: &str) -> Mapping {
    let mut out = Mapping::new();
    src.encode_fields(tag_name, &mut out);
    out
}

/// Emits one non-embedded field into `out`.
///
/// An empty resolved name falls back to the lowercased identifier (unlike
/// decode, which uses the identifier unmodified). `omitempty` drops
/// zero-valued fields; `string` stringifies numeric kinds and stores
/// everything else unmodified.
pub fn encode_field<T: Bind>(value: &T, ident: &str, tag: &str, tag_name: &str, out: &mut Mapping) {
    let Some(spec) = FieldSpec::for_encode(ident, tag, T::KIND) else {
        return;
    };
    if spec.option == OPT_OMITEMPTY && value.is_empty() {
        return;
    }
    let emitted = if spec.option == OPT_STRING {
        value.stringified(tag_name)
    } else {
        value.to_value(tag_name)
    };
    out.insert(spec.source_name.into_owned(), emitted);
}

/// Flattens an embedded field's sub-mapping into `out`. The embedded field
/// never appears under its own name; colliding keys are overwritten, so the
/// later embed wins.
pub fn encode_embedded<T: Embed>(value: &T, tag: &str, tag_name: &str, out: &mut Mapping) {
    let (name, _option) = crate::tag::parse_tag(tag);
    if name == SKIP_NAME {
        return;
    }
    value.merge_into(tag_name, out);
}
