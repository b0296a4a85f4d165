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

/// One `decode_field` call per non-embedded field, in declaration order.
/// Embedded fields are excluded from the decode walk entirely: input
/// mappings are flat, so there is nothing to route into them.
pub fn decode_body(fields: &[RecordField]) -> TokenStream {
    let steps = fields.iter().filter(|f| !f.embedded).map(|field| {
        let ident = &field.ident;
        let ident_str = &field.ident_str;
        let tag_table = field.tag_table();
        quote! {
            ::mapbind_core::decode::decode_field(
                &mut self.#ident,
                #ident_str,
                ::mapbind_core::tag::lookup(#tag_table, tag_name),
                input,
                tag_name,
            )?;
        }
    });
    quote! { #( #steps )* }
}
