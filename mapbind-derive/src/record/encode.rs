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

use crate::record::field::RecordField;

/// One `encode_field` (or `encode_embedded` for embedded fields) call per
/// field, in declaration order; later embeds overwrite colliding keys.
pub fn encode_body(fields: &[RecordField]) -> TokenStream {
    let steps = fields.iter().map(|field| {
        let ident = &field.ident;
        let ident_str = &field.ident_str;
        let tag_table = field.tag_table();
        if field.embedded {
            quote! {
                ::mapbind_core::encode::encode_embedded(
                    &self.#ident,
                    ::mapbind_core::tag::lookup(#tag_table, tag_name),
                    tag_name,
                    out,
                );
            }
        } else {
            quote! {
                ::mapbind_core::encode::encode_field(
                    &self.#ident,
                    #ident_str,
                    ::mapbind_core::tag::lookup(#tag_table, tag_name),
                    tag_name,
                    out,
                );
            }
        }
    });
    quote! { #( #steps )* }
}
