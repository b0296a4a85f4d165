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

use std::borrow::Cow;

use thiserror::Error;

use crate::bind::FieldKind;

/// Set `MAPBIND_PANIC_ON_ERROR=1` at compile time to panic at the exact
/// location an error is created, with a full stack trace. Debugging aid only.
pub const PANIC_ON_ERROR: bool = option_env!("MAPBIND_PANIC_ON_ERROR").is_some();

macro_rules! maybe_panic {
    ($err:expr) => {{
        let err = $err;
        if PANIC_ON_ERROR {
            panic!("MAPBIND_PANIC_ON_ERROR: {}", err);
        }
        err
    }};
}

/// Error type for decode operations.
///
/// Every failure mode callers can observe is a distinct variant, so errors
/// can be matched structurally rather than by message. Prefer the static
/// constructor functions over building variants directly; they honor the
/// [`PANIC_ON_ERROR`] debug flag.
///
/// The first field-level error aborts the whole decode walk; there is no
/// multi-error aggregation. Fields mutated before the failure keep their new
/// values.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Destination is not a mutable record reference.
    ///
    /// Unreachable through the typed API (`&mut T where T: Record` is
    /// statically a mutable record); part of the error contract for
    /// alternative frontends.
    #[error("destination is not a mutable record")]
    InvalidTarget,

    /// A field tagged `required` was absent from the input mapping.
    #[error("'{0}' is required")]
    MissingRequired(Cow<'static, str>),

    /// String input did not parse as a boolean.
    #[error("invalid bool for '{field}': {text}")]
    InvalidBool { field: String, text: String },

    /// String input did not parse as a base-10 signed integer.
    #[error("invalid int for '{field}': {text}")]
    InvalidInt { field: String, text: String },

    /// String input did not parse as a base-10 unsigned integer.
    #[error("invalid uint for '{field}': {text}")]
    InvalidUint { field: String, text: String },

    /// String input did not parse as a decimal float.
    #[error("invalid float for '{field}': {text}")]
    InvalidFloat { field: String, text: String },

    /// A serialized payload failed to parse into the target type.
    #[error("invalid payload for '{field}': {reason}, {text}")]
    InvalidPayload {
        field: String,
        text: String,
        reason: String,
    },

    /// The dynamic value's runtime shape cannot be coerced into the field.
    #[error("cannot assign {found} value to '{field}'")]
    UnsupportedValue { field: String, found: &'static str },

    /// The field's static kind has no textual-parse path.
    #[error("field type not supported: '{field}' ({kind})")]
    UnsupportedField { field: String, kind: FieldKind },

    /// A field handle could not be written in place.
    ///
    /// Unreachable through the typed API; kept as part of the contract.
    #[error("field not addressable: '{0}'")]
    NotAddressable(Cow<'static, str>),

    /// A fault (panic) was caught at the decode boundary and converted.
    #[error("internal: {0}")]
    Internal(Cow<'static, str>),
}

impl Error {
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_target() -> Self {
        maybe_panic!(Error::InvalidTarget)
    }

    /// Creates a new [`Error::MissingRequired`] for the given source name.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn missing_required<S: Into<Cow<'static, str>>>(name: S) -> Self {
        maybe_panic!(Error::MissingRequired(name.into()))
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_bool(field: &str, text: &str) -> Self {
        maybe_panic!(Error::InvalidBool {
            field: field.to_owned(),
            text: text.to_owned(),
        })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_int(field: &str, text: &str) -> Self {
        maybe_panic!(Error::InvalidInt {
            field: field.to_owned(),
            text: text.to_owned(),
        })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_uint(field: &str, text: &str) -> Self {
        maybe_panic!(Error::InvalidUint {
            field: field.to_owned(),
            text: text.to_owned(),
        })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_float(field: &str, text: &str) -> Self {
        maybe_panic!(Error::InvalidFloat {
            field: field.to_owned(),
            text: text.to_owned(),
        })
    }

    /// Creates a new [`Error::InvalidPayload`] carrying the codec's reason.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_payload(field: &str, text: &str, reason: String) -> Self {
        maybe_panic!(Error::InvalidPayload {
            field: field.to_owned(),
            text: text.to_owned(),
            reason,
        })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_value(field: &str, found: &'static str) -> Self {
        maybe_panic!(Error::UnsupportedValue {
            field: field.to_owned(),
            found,
        })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_field(field: &str, kind: FieldKind) -> Self {
        maybe_panic!(Error::UnsupportedField {
            field: field.to_owned(),
            kind,
        })
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn not_addressable<S: Into<Cow<'static, str>>>(field: S) -> Self {
        maybe_panic!(Error::NotAddressable(field.into()))
    }

    /// Creates a new [`Error::Internal`] from a caught fault's message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn internal<S: Into<Cow<'static, str>>>(msg: S) -> Self {
        maybe_panic!(Error::Internal(msg.into()))
    }
}
