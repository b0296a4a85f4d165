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

//! Field-level parsing of `#[bind(...)]` attributes.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Ident, LitStr};

/// One record field with its parsed annotations.
pub struct RecordField {
    pub ident: Ident,
    pub ident_str: String,
    /// (namespace, annotation) pairs; `None` namespace means the default.
    pub tags: Vec<(Option<String>, String)>,
    pub embedded: bool,
}

impl RecordField {
    /// Tokens for the static `&[(&str, &str)]` namespace table handed to
    /// `mapbind_core::tag::lookup` at runtime.
    pub fn tag_table(&self) -> TokenStream {
        let entries = self.tags.iter().map(|(ns, tag)| match ns {
            Some(ns) => quote! { (#ns, #tag) },
            None => quote! { (::mapbind_core::tag::DEFAULT_TAG, #tag) },
        });
        quote! { &[ #( #entries ),* ] }
    }
}

/// Parses one struct field's `#[bind(...)]` attributes.
pub fn parse_field(field: &Field) -> syn::Result<RecordField> {
    let ident = field
        .ident
        .clone()
        .expect("named fields checked by caller");
    let mut tags: Vec<(Option<String>, String)> = Vec::new();
    let mut embedded = false;

    for attr in &field.attrs {
        if !attr.path().is_ident("bind") {
            continue;
        }

        // bare form: #[bind("name,option")] under the default namespace
        if let Ok(lit) = attr.parse_args::<LitStr>() {
            tags.push((None, lit.value()));
            continue;
        }

        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("embed") {
                embedded = true;
                return Ok(());
            }
            let Some(ns) = nested.path.get_ident() else {
                return Err(nested.error("expected a tag namespace identifier"));
            };
            let lit: LitStr = nested.value()?.parse()?;
            tags.push((Some(ns.to_string()), lit.value()));
            Ok(())
        })?;
    }

    let ident_str = ident.to_string();
    Ok(RecordField {
        ident,
        ident_str,
        tags,
        embedded,
    })
}
