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

//! The mapping → record pipeline.
//!
//! [`decode_field`] is the per-field step the generated walk calls once per
//! non-embedded field; [`decode_tag`] runs the whole walk behind a panic
//! boundary so no internal fault escapes to the caller uncaught.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::bind::{Bind, FieldKind};
use crate::error::Error;
use crate::record::Record;
use crate::tag::{is_reserved_option, FieldSpec, DEFAULT_TAG, OPT_REQUIRED};
use crate::value::{Mapping, Value};

/// Decodes `input` into `dst` under the default tag namespace.
pub fn decode<T: Record>(input: &Mapping, dst: &mut T) -> Result<(), Error> {
    decode_tag(input, dst, DEFAULT_TAG)
}

/// Decodes `input` into `dst`, resolving field annotations under `tag_name`.
///
/// Mutates `dst` in place, field by field in declaration order. The first
/// field-level error aborts the walk; fields assigned before the failure
/// keep their new values. Any panic raised inside the walk is caught here
/// and converted into [`Error::Internal`].
pub fn decode_tag<T: Record>(input: &Mapping, dst: &mut T, tag_name: &str) -> Result<(), Error> {
    match panic::catch_unwind(AssertUnwindSafe(|| dst.decode_fields(input, tag_name))) {
        Ok(walk) => walk,
        Err(fault) => Err(Error::internal(panic_text(fault))),
    }
}

fn panic_text(fault: Box<dyn Any + Send>) -> String {
    if let Some(msg) = fault.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = fault.downcast_ref::<String>() {
        msg.clone()
    } else {
        "decode walk panicked".to_owned()
    }
}

/// Resolves and coerces one field.
///
/// `ident` is the declared field identifier (the decode-side name fallback),
/// `tag` the raw annotation for the active namespace (possibly empty). A
/// missing key fails when the option is `required`, skips when the option is
/// empty or reserved, and otherwise feeds the option text through the same
/// coercion cascade as a string input.
pub fn decode_field<T: Bind>(
    dst: &mut T,
    ident: &str,
    tag: &str,
    input: &Mapping,
    tag_name: &str,
) -> Result<(), Error> {
    let Some(spec) = FieldSpec::for_decode(ident, tag, T::KIND) else {
        return Ok(());
    };

    let fallback;
    let value = match input.get(spec.source_name.as_ref()) {
        Some(value) => value,
        None => {
            if spec.option == OPT_REQUIRED {
                return Err(Error::missing_required(spec.source_name.into_owned()));
            }
            if spec.option.is_empty() || is_reserved_option(spec.option) {
                return Ok(());
            }
            // option text is a literal default, coerced like string input
            fallback = Value::Str(spec.option.to_owned());
            &fallback
        }
    };

    // an empty textual source carries no elements for a sequence field;
    // leave the destination untouched, as a missing key would
    if spec.kind == FieldKind::Seq {
        if let Value::Str(s) = value {
            if s.trim().is_empty() {
                return Ok(());
            }
        }
    }

    *dst = T::from_value(value, ident, tag_name)?;
    Ok(())
}
