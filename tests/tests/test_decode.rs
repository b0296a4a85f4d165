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

use mapbind_core::decode::{decode, decode_tag};
use mapbind_core::error::Error;
use mapbind_core::value::{Mapping, Value};
use mapbind_derive::Record;
use serde::Deserialize;

#[test]
fn decodes_native_scalars_with_options() {
    #[derive(Record, Deserialize, Default, Debug, PartialEq)]
    struct Args {
        #[bind("id,required")]
        id: i64,
        #[bind("name,required")]
        name: String,
        #[bind("ok")]
        is_ok: bool,
        #[bind("price")]
        price: f64,
        #[bind("-")]
        ignore: String,
        no_name: String,
        #[bind("novalue,1002")]
        no_value: i64,
    }

    let input = Mapping::from([
        ("id".to_string(), Value::from(1001)),
        ("name".to_string(), Value::from("tom")),
        ("ok".to_string(), Value::from(true)),
        ("price".to_string(), Value::from(29.9)),
        ("ignore".to_string(), Value::from("never mind")),
        ("no_name".to_string(), Value::from("hello")),
        ("NotFound".to_string(), Value::from("never mind")),
    ]);

    let mut args = Args::default();
    decode(&input, &mut args).unwrap();

    assert_eq!(
        args,
        Args {
            id: 1001,
            name: "tom".to_string(),
            is_ok: true,
            price: 29.9,
            ignore: String::new(),
            no_name: "hello".to_string(),
            no_value: 1002,
        }
    );
}

#[test]
fn required_field_missing_fails() {
    #[derive(Record, Deserialize, Default, Debug)]
    struct Args {
        #[bind("id")]
        id: i64,
        #[bind("name,required")]
        name: String,
    }

    let input = Mapping::from([("id".to_string(), Value::from(1))]);
    let err = decode(&input, &mut Args::default()).unwrap_err();
    assert!(matches!(err, Error::MissingRequired(name) if name == "name"));
}

#[test]
fn literal_defaults_coerce_like_string_input() {
    #[derive(Record, Deserialize, Default, Debug, PartialEq)]
    struct Args {
        #[bind("blocked,false")]
        blocked: bool,
        #[bind("retries,3")]
        retries: i32,
        #[bind("kind,normal")]
        kind: String,
        #[bind("ratio,1.5")]
        ratio: f64,
    }

    let mut args = Args {
        blocked: true,
        ..Args::default()
    };
    decode(&Mapping::new(), &mut args).unwrap();
    assert_eq!(
        args,
        Args {
            blocked: false,
            retries: 3,
            kind: "normal".to_string(),
            ratio: 1.5,
        }
    );
}

#[test]
fn reserved_options_never_act_as_defaults() {
    #[derive(Record, Deserialize, Default, Debug, PartialEq)]
    struct Args {
        #[bind("a,omitempty")]
        a: String,
        #[bind("b,string")]
        b: i64,
    }

    let mut args = Args::default();
    decode(&Mapping::new(), &mut args).unwrap();
    assert_eq!(args, Args::default());
}

#[test]
fn missing_key_leaves_field_untouched() {
    #[derive(Record, Deserialize, Default, Debug)]
    struct Args {
        #[bind("note")]
        note: String,
    }

    let mut args = Args {
        note: "keep me".to_string(),
    };
    decode(&Mapping::new(), &mut args).unwrap();
    assert_eq!(args.note, "keep me");
}

#[test]
fn dash_excludes_even_when_key_present() {
    #[derive(Record, Deserialize, Default, Debug)]
    struct Args {
        #[bind("-")]
        hidden: String,
        #[bind("-,required")]
        also_hidden: String,
    }

    let input = Mapping::from([("-".to_string(), Value::from("x"))]);
    let mut args = Args::default();
    decode(&input, &mut args).unwrap();
    assert_eq!(args.hidden, "");
    assert_eq!(args.also_hidden, "");
}

#[test]
fn string_inputs_parse_into_typed_fields() {
    #[derive(Record, Deserialize, Default, Debug, PartialEq)]
    struct Args {
        #[bind("b")]
        b: bool,
        #[bind("i")]
        i: i64,
        #[bind("u")]
        u: u32,
        #[bind("f")]
        f: f64,
        #[bind("s")]
        s: String,
    }

    let input = Mapping::from([
        ("b".to_string(), Value::from("TRUE")),
        ("i".to_string(), Value::from(" 1001 ")), // trimmed before parsing
        ("u".to_string(), Value::from("7")),
        ("f".to_string(), Value::from("2.5e1")),
        ("s".to_string(), Value::from(" raw ")), // direct assignment keeps whitespace
    ]);

    let mut args = Args::default();
    decode(&input, &mut args).unwrap();
    assert_eq!(
        args,
        Args {
            b: true,
            i: 1001,
            u: 7,
            f: 25.0,
            s: " raw ".to_string(),
        }
    );
}

#[test]
fn bool_accepts_digit_forms_and_rejects_the_rest() {
    #[derive(Record, Deserialize, Default, Debug)]
    struct Args {
        #[bind("b")]
        b: bool,
    }

    let mut args = Args { b: true };
    let input = Mapping::from([("b".to_string(), Value::from("0"))]);
    decode(&input, &mut args).unwrap();
    assert!(!args.b);

    let input = Mapping::from([("b".to_string(), Value::from("yes"))]);
    let err = decode(&input, &mut Args::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidBool { text, .. } if text == "yes"));
}

#[test]
fn numeric_parse_failures_carry_field_and_text() {
    #[derive(Record, Deserialize, Default, Debug)]
    struct Args {
        #[bind("i")]
        i: i64,
        #[bind("u")]
        u: u64,
        #[bind("f")]
        f: f64,
    }

    let input = Mapping::from([("i".to_string(), Value::from("abc"))]);
    let err = decode(&input, &mut Args::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidInt { field, .. } if field == "i"));

    let input = Mapping::from([("u".to_string(), Value::from("-5"))]);
    let err = decode(&input, &mut Args::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidUint { text, .. } if text == "-5"));

    let input = Mapping::from([("f".to_string(), Value::from("1.2.3"))]);
    let err = decode(&input, &mut Args::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidFloat { .. }));
}

#[test]
fn integer_text_truncates_to_field_width() {
    #[derive(Record, Deserialize, Default, Debug)]
    struct Args {
        #[bind("n")]
        n: i8,
    }

    let input = Mapping::from([("n".to_string(), Value::from("300"))]);
    let mut args = Args::default();
    decode(&input, &mut args).unwrap();
    assert_eq!(args.n, 300i64 as i8);
}

#[test]
fn numeric_values_convert_between_families() {
    #[derive(Record, Deserialize, Default, Debug, PartialEq)]
    struct Args {
        #[bind("a")]
        a: i32,
        #[bind("b")]
        b: f64,
        #[bind("c")]
        c: u16,
    }

    let input = Mapping::from([
        ("a".to_string(), Value::Float(29.9)), // truncates
        ("b".to_string(), Value::from(7)),
        ("c".to_string(), Value::Uint(9)),
    ]);

    let mut args = Args::default();
    decode(&input, &mut args).unwrap();
    assert_eq!(args, Args { a: 29, b: 7.0, c: 9 });
}

#[test]
fn unassignable_shapes_fail_with_unsupported_value() {
    #[derive(Record, Deserialize, Default, Debug)]
    struct Args {
        #[bind("n")]
        n: i64,
    }

    let input = Mapping::from([("n".to_string(), Value::Seq(vec![Value::from(1)]))]);
    let err = decode(&input, &mut Args::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedValue { field, found } if field == "n" && found == "sequence"
    ));

    // booleans do not convert to integers
    let input = Mapping::from([("n".to_string(), Value::from(true))]);
    let err = decode(&input, &mut Args::default()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedValue { .. }));
}

#[test]
fn first_error_aborts_but_keeps_earlier_mutations() {
    #[derive(Record, Deserialize, Default, Debug)]
    struct Args {
        #[bind("a")]
        a: i64,
        #[bind("b")]
        b: bool,
        #[bind("c")]
        c: i64,
    }

    let input = Mapping::from([
        ("a".to_string(), Value::from(1)),
        ("b".to_string(), Value::from("nope")),
        ("c".to_string(), Value::from(3)),
    ]);

    let mut args = Args::default();
    let err = decode(&input, &mut args).unwrap_err();
    assert!(matches!(err, Error::InvalidBool { .. }));
    assert_eq!(args.a, 1); // declaration order: already assigned
    assert_eq!(args.c, 0); // never reached
}

#[test]
fn custom_tag_namespace_selects_different_keys() {
    #[derive(Record, Deserialize, Default, Debug, PartialEq)]
    struct Args {
        #[bind("user_id")]
        #[bind(query = "uid,required")]
        id: i64,
    }

    let input = Mapping::from([("uid".to_string(), Value::from(42))]);
    let mut args = Args::default();
    decode_tag(&input, &mut args, "query").unwrap();
    assert_eq!(args.id, 42);

    // under the default namespace "uid" is unknown and "user_id" is absent
    let mut args = Args::default();
    decode(&input, &mut args).unwrap();
    assert_eq!(args.id, 0);
}

#[test]
fn unknown_namespace_falls_back_to_identifier_lookup() {
    #[derive(Record, Deserialize, Default, Debug)]
    struct Args {
        #[bind("tagged")]
        count: i64,
    }

    let input = Mapping::from([("count".to_string(), Value::from(5))]);
    let mut args = Args::default();
    decode_tag(&input, &mut args, "form").unwrap();
    assert_eq!(args.count, 5);
}
