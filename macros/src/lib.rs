use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct whose named fields are all
/// `Component`s. Fields are made public and the model gets a constructor,
/// array conversions, `map` and `round`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    if field_names.is_empty() || field_names.len() != input.fields.len() {
        return quote! {
            compile_error!("Models must have named fields, one for each component of the color.")
        }
        .into();
    }

    // Make sure the component fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attrs = match syn::Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    }) {
        Ok(attrs) => attrs,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attrs);

    let struct_name = input.ident.clone();
    let count = field_names.len();
    let indices = (0..count).map(syn::Index::from);

    let model_impl: proc_macro2::TokenStream = quote! {
        impl #struct_name {
            /// Create a new color in this model.
            pub fn new(#(#field_names: crate::color::Component),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the components in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #count] {
                [#(self.#field_names),*]
            }

            /// Return a new model with each component mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(crate::color::Component) -> crate::color::Component) -> Self {
                Self { #(#field_names: f(self.#field_names)),* }
            }

            /// Return a new model with each component rounded to the nearest
            /// whole number.
            pub fn round(&self) -> Self {
                self.map(crate::math::round)
            }
        }

        impl From<[crate::color::Component; #count]> for #struct_name {
            fn from(value: [crate::color::Component; #count]) -> Self {
                Self::new(#(value[#indices]),*)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
