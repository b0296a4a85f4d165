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

//! # Mapbind Core
//!
//! Core implementation of the mapbind data-binding engine: bidirectional
//! conversion between a loosely-typed mapping (`HashMap<String, Value>`) and
//! statically-typed records, driven by declarative per-field tags.
//!
//! ## Architecture
//!
//! - **`tag`**: tag parsing and per-call field resolution (`FieldSpec`)
//! - **`value`**: the dynamic value model (`Value`, `Mapping`)
//! - **`bind`**: the value coercion engine, one impl per type family
//! - **`decode`**: mapping → record pipeline
//! - **`encode`**: record → mapping pipeline
//! - **`record`**: the `Record` and `Embed` traits implemented by
//!   `#[derive(Record)]` in `mapbind-derive`
//! - **`error`**: error handling
//!
//! ## Key concepts
//!
//! Each record field carries an annotation of the form `"name,option"` under
//! one or more tag namespaces. Decode resolves the source key, looks it up in
//! the input mapping and coerces the dynamic value into the field's static
//! type: direct transfer first, then numeric conversion, then a typed parse
//! cascade for string inputs, then the structured-payload codec (serde_json)
//! for serialized records and arrays. Encode walks the record the other way,
//! flattening embedded records into the parent mapping.
//!
//! This crate is typically used through the higher-level `mapbind` crate,
//! which re-exports the derive macro and the public API.

pub mod bind;
pub mod decode;
pub mod encode;
pub mod error;
pub mod record;
pub mod tag;
pub mod value;
