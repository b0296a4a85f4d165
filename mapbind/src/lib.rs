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

//! # Mapbind
//!
//! Mapbind converts between loosely-typed mappings (string keys to dynamic
//! values: query parameters, form fields, generic config maps) and
//! statically-typed records, driven entirely by declarative field tags. It
//! is a pure, synchronous library: no I/O, no shared state across calls.
//!
//! ## Decoding
//!
//! ```rust
//! use mapbind::{decode, Mapping, Record, Value};
//! use serde::Deserialize;
//!
//! #[derive(Record, Deserialize, Default, Debug, PartialEq)]
//! struct Order {
//!     #[bind("id,required")]
//!     id: i64,
//!     #[bind("name,required")]
//!     name: String,
//!     #[bind("ok")]
//!     ok: bool,
//!     #[bind("price")]
//!     price: f64,
//!     #[bind("kind,normal")]
//!     kind: String, // missing key takes the literal default "normal"
//! }
//!
//! # fn main() -> Result<(), mapbind::Error> {
//! let input = Mapping::from([
//!     ("id".to_string(), Value::from(1001)),
//!     ("name".to_string(), Value::from("tom")),
//!     ("ok".to_string(), Value::from(true)),
//!     ("price".to_string(), Value::from(29.9)),
//! ]);
//!
//! let mut order = Order::default();
//! decode(&input, &mut order)?;
//!
//! assert_eq!(order.id, 1001);
//! assert_eq!(order.name, "tom");
//! assert!(order.ok);
//! assert_eq!(order.price, 29.9);
//! assert_eq!(order.kind, "normal");
//! # Ok(())
//! # }
//! ```
//!
//! String inputs coerce through a typed parse cascade (`"true"`, `"1001"`,
//! `"29.9"`, comma-delimited lists, bracketed JSON arrays, brace-delimited
//! JSON records), which is why records also derive `serde::Deserialize`:
//! serde_json is the structured-payload codec behind the bracket/brace
//! branches.
//!
//! ## Encoding
//!
//! ```rust
//! use mapbind::{encode, Record, Value};
//! use serde::Deserialize;
//!
//! #[derive(Record, Deserialize, Default)]
//! struct Metrics {
//!     #[bind("hits")]
//!     hits: i64,
//!     #[bind("note,omitempty")]
//!     note: String, // zero values are dropped
//!     #[bind("ratio,string")]
//!     ratio: f64, // stringified with two decimal places
//! }
//!
//! let out = encode(&Metrics {
//!     hits: 3,
//!     note: String::new(),
//!     ratio: 0.5,
//! });
//! assert_eq!(out.get("hits"), Some(&Value::Int(3)));
//! assert!(!out.contains_key("note"));
//! assert_eq!(out.get("ratio"), Some(&Value::Str("0.50".into())));
//! ```
//!
//! ## Embedded records
//!
//! `#[bind(embed)]` flattens a sub-record into the parent mapping on encode
//! (later embeds win name collisions); decode leaves embedded fields alone,
//! since input mappings are flat.
//!
//! ```rust
//! use mapbind::{encode, Record};
//! use serde::Deserialize;
//!
//! #[derive(Record, Deserialize, Default)]
//! struct Stamp {
//!     #[bind("created")]
//!     created: i64,
//! }
//!
//! #[derive(Record, Deserialize, Default)]
//! struct Event {
//!     #[bind("kind")]
//!     kind: String,
//!     #[bind(embed)]
//!     stamp: Stamp,
//! }
//!
//! let out = encode(&Event {
//!     kind: "login".into(),
//!     stamp: Stamp { created: 7 },
//! });
//! assert!(out.contains_key("kind"));
//! assert!(out.contains_key("created")); // flattened, not nested
//! ```
//!
//! ## Tag namespaces
//!
//! Fields may carry annotations under several namespaces
//! (`#[bind(query = "uid")]`); `decode_tag`/`encode_tag` select one per
//! call, and `decode`/`encode` use [`DEFAULT_TAG`].
//!
//! Note one contractual asymmetry: a field whose resolved tag name is empty
//! is looked up by its *unmodified* identifier on decode but emitted under
//! its *lowercased* identifier on encode. With snake_case identifiers the
//! two coincide.

pub use mapbind_core::bind::{Bind, FieldKind};
pub use mapbind_core::decode::{decode, decode_tag};
pub use mapbind_core::encode::{encode, encode_tag};
pub use mapbind_core::error::Error;
pub use mapbind_core::record::{Embed, Record};
pub use mapbind_core::tag::{parse_tag, DEFAULT_TAG};
pub use mapbind_core::value::{Mapping, Value};

pub use mapbind_derive::Record;
