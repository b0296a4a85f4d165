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

//! # Mapbind Derive
//!
//! `#[derive(Record)]` generates the per-field decode and encode walks for a
//! struct with named fields, plus the `Bind` impl that lets the struct nest
//! inside other records and the `Embed` impl that lets it flatten when
//! marked embedded.
//!
//! ## Field annotations
//!
//! ```text
//! #[bind("name,option")]        tag under the default namespace ("map")
//! #[bind(ns = "name,option")]   tag under namespace `ns`; repeatable
//! #[bind(embed)]                embedded field: flattened on encode,
//!                               skipped on decode
//! ```
//!
//! A field without a tag for the namespace a call selects behaves as if it
//! had an empty tag: decode looks it up by its identifier, encode emits it
//! under the lowercased identifier.
//!
//! Records must also derive `Default` (fresh nested instances) and
//! `serde::Deserialize` (the structured-payload codec parses serialized
//! record text into them).
//!
//! ## Example
//!
//! ```rust
//! use mapbind_derive::Record;
//! use serde::Deserialize;
//!
//! #[derive(Record, Deserialize, Default, Debug, PartialEq)]
//! struct User {
//!     #[bind("id,required")]
//!     id: i64,
//!     #[bind("name")]
//!     name: String,
//!     #[bind("tags")]
//!     tags: Vec<String>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod record;

/// Derive macro for the `Record` trait.
///
/// Generates `Record`, `Bind`, and `Embed` implementations; see the crate
/// docs for the `#[bind(...)]` annotation grammar.
#[proc_macro_derive(Record, attributes(bind))]
pub fn proc_macro_derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
