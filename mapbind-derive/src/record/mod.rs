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

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

mod decode;
mod encode;
mod field;

use field::RecordField;

/// Expands `#[derive(Record)]` into `Record`, `Bind`, and `Embed` impls.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = named_fields(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let decode_body = decode::decode_body(&fields);
    let encode_body = encode::encode_body(&fields);

    Ok(quote! {
        impl #impl_generics ::mapbind_core::record::Record for #name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn decode_fields(
                &mut self,
                input: &::mapbind_core::value::Mapping,
                tag_name: &str,
            ) -> ::std::result::Result<(), ::mapbind_core::error::Error> {
                #decode_body
                ::std::result::Result::Ok(())
            }

            #[allow(unused_variables)]
            fn encode_fields(&self, tag_name: &str, out: &mut ::mapbind_core::value::Mapping) {
                #encode_body
            }
        }

        impl #impl_generics ::mapbind_core::bind::Bind for #name #ty_generics #where_clause {
            const KIND: ::mapbind_core::bind::FieldKind =
                ::mapbind_core::bind::FieldKind::Record;

            fn from_value(
                value: &::mapbind_core::value::Value,
                field: &str,
                tag_name: &str,
            ) -> ::std::result::Result<Self, ::mapbind_core::error::Error> {
                ::mapbind_core::bind::struct_::record_from_value(value, field, tag_name)
            }

            fn from_text(
                text: &str,
                field: &str,
                _tag_name: &str,
            ) -> ::std::result::Result<Self, ::mapbind_core::error::Error> {
                ::mapbind_core::bind::struct_::record_from_text(text, field)
            }

            fn to_value(&self, tag_name: &str) -> ::mapbind_core::value::Value {
                ::mapbind_core::value::Value::Map(::mapbind_core::encode::encode_tag(
                    self, tag_name,
                ))
            }

            fn is_empty(&self) -> bool {
                false
            }
        }

        impl #impl_generics ::mapbind_core::record::Embed for #name #ty_generics #where_clause {
            fn merge_into(&self, tag_name: &str, out: &mut ::mapbind_core::value::Mapping) {
                ::mapbind_core::record::Record::encode_fields(self, tag_name, out);
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<RecordField>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Record can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "Record requires named fields",
        ));
    };
    named.named.iter().map(field::parse_field).collect()
}
