use proc_macro2::TokenStream;
use quote::quote;
use syn::parse_str;

use crate::with_crate;

pub(crate) fn expand(ast: &syn::DeriveInput) -> TokenStream {
    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let message_trait = with_crate(parse_str("message::Message").unwrap());
    quote! {
        impl #impl_generics #message_trait for #ident #ty_generics #where_clause {
            fn signature_sized() -> &'static str
            where
                Self: Sized,
            {
                std::any::type_name::<Self>()
            }

            fn signature(&self) -> &'static str {
                std::any::type_name::<Self>()
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn std::any::Any> {
                self
            }
        }
    }
}
