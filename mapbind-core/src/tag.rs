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

//! Tag parsing and per-call field resolution.
//!
//! A field annotation is `"name"` or `"name,option"`, where `option` is one
//! of the reserved keywords (`required`, `omitempty`, `string`) or an
//! arbitrary literal used as a default value on decode. `name == "-"`
//! excludes the field from both pipelines.

use std::borrow::Cow;

use crate::bind::FieldKind;

/// Tag namespace used by the `decode`/`encode` convenience entry points.
pub const DEFAULT_TAG: &str = "map";

/// Name that excludes a field from both pipelines.
pub const SKIP_NAME: &str = "-";

pub const OPT_REQUIRED: &str = "required";
pub const OPT_OMITEMPTY: &str = "omitempty";
pub const OPT_STRING: &str = "string";

/// Returns true for option keywords that can never double as literal
/// default values.
pub fn is_reserved_option(option: &str) -> bool {
    matches!(option, OPT_REQUIRED | OPT_OMITEMPTY | OPT_STRING)
}

/// Splits an annotation on the first comma into `(name, option)`.
///
/// Everything after the first comma (further commas included) is the
/// verbatim option text. No comma yields an empty option; an empty
/// annotation yields two empty strings. Pure and total.
pub fn parse_tag(tag: &str) -> (&str, &str) {
    match tag.split_once(',') {
        Some((name, option)) => (name, option),
        None => (tag, ""),
    }
}

/// Returns the annotation registered under `tag_name`, or `""` when the
/// field carries none for that namespace.
pub fn lookup<'a>(tags: &[(&'a str, &'a str)], tag_name: &str) -> &'a str {
    tags.iter()
        .find(|(ns, _)| *ns == tag_name)
        .map(|(_, tag)| *tag)
        .unwrap_or("")
}

/// Per-field, per-call view of a field's annotation, derived fresh on every
/// conversion and discarded with the call.
#[derive(Debug)]
pub struct FieldSpec<'a> {
    /// Key used for mapping lookup (decode) or output (encode).
    pub source_name: Cow<'a, str>,
    /// Verbatim option text; empty when absent.
    pub option: &'a str,
    /// The field's static shape.
    pub kind: FieldKind,
}

impl<'a> FieldSpec<'a> {
    /// Resolves a field for the decode pipeline. `None` means the field is
    /// excluded. An empty tag name falls back to the declared identifier,
    /// unmodified.
    pub fn for_decode(ident: &'a str, tag: &'a str, kind: FieldKind) -> Option<FieldSpec<'a>> {
        let (name, option) = parse_tag(tag);
        if name == SKIP_NAME {
            return None;
        }
        let source_name = if name.is_empty() {
            Cow::Borrowed(ident)
        } else {
            Cow::Borrowed(name)
        };
        Some(FieldSpec {
            source_name,
            option,
            kind,
        })
    }

    /// Resolves a field for the encode pipeline. Unlike decode, an empty tag
    /// name falls back to the *lowercased* identifier; the asymmetry is
    /// contractual (see the crate docs).
    pub fn for_encode(ident: &'a str, tag: &'a str, kind: FieldKind) -> Option<FieldSpec<'a>> {
        let (name, option) = parse_tag(tag);
        if name == SKIP_NAME {
            return None;
        }
        let source_name = if name.is_empty() {
            Cow::Owned(ident.to_lowercase())
        } else {
            Cow::Borrowed(name)
        };
        Some(FieldSpec {
            source_name,
            option,
            kind,
        })
    }
}
