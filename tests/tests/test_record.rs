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

//! `Record` trait surface: hand-written implementations, the decode panic
//! boundary and error messages.

use mapbind_core::decode::{decode, decode_tag};
use mapbind_core::encode::encode;
use mapbind_core::error::Error;
use mapbind_core::record::Record;
use mapbind_core::value::{Mapping, Value};

/// Hand-written counterpart of the derive output, using the same per-field
/// helpers the generated walk calls.
#[derive(Default, Debug, PartialEq)]
struct Manual {
    id: i64,
    name: String,
}

impl Record for Manual {
    fn decode_fields(&mut self, input: &Mapping, tag_name: &str) -> Result<(), Error> {
        mapbind_core::decode::decode_field(&mut self.id, "id", "id,required", input, tag_name)?;
        mapbind_core::decode::decode_field(&mut self.name, "name", "name", input, tag_name)?;
        Ok(())
    }

    fn encode_fields(&self, tag_name: &str, out: &mut Mapping) {
        mapbind_core::encode::encode_field(&self.id, "id", "id,required", tag_name, out);
        mapbind_core::encode::encode_field(&self.name, "name", "name", tag_name, out);
    }
}

#[test]
fn manual_record_decodes_and_encodes() {
    let input = Mapping::from([
        ("id".to_string(), Value::from(5)),
        ("name".to_string(), Value::from("manual")),
    ]);

    let mut record = Manual::default();
    decode(&input, &mut record).unwrap();
    assert_eq!(
        record,
        Manual {
            id: 5,
            name: "manual".to_string(),
        }
    );

    let out = encode(&record);
    assert_eq!(out.get("id"), Some(&Value::Int(5)));
    assert_eq!(out.get("name"), Some(&Value::Str("manual".to_string())));
}

#[derive(Default)]
struct Exploding;

impl Record for Exploding {
    fn decode_fields(&mut self, _input: &Mapping, _tag_name: &str) -> Result<(), Error> {
        panic!("boom in the walk");
    }

    fn encode_fields(&self, _tag_name: &str, _out: &mut Mapping) {}
}

#[test]
fn panic_in_walk_becomes_internal_error() {
    let err = decode_tag(&Mapping::new(), &mut Exploding, "map").unwrap_err();
    match err {
        Error::Internal(msg) => assert!(msg.contains("boom in the walk")),
        other => panic!("expected Internal, got {other:?}"),
    }
}

#[test]
fn error_messages_name_field_and_text() {
    assert_eq!(
        Error::missing_required("uid").to_string(),
        "'uid' is required"
    );
    assert_eq!(
        Error::invalid_int("retries", "abc").to_string(),
        "invalid int for 'retries': abc"
    );
    assert_eq!(
        Error::unsupported_value("n", "sequence").to_string(),
        "cannot assign sequence value to 'n'"
    );
}
